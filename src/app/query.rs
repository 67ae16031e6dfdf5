//! Query/submit controller.
//!
//! Separates the text being typed from the URL that is actually fetched. Only
//! [`QueryController::on_submit`] produces a new committed URL; typing and
//! startup never do.

/// Owns the pending input text and the committed search URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryController {
    api_base: String,
    escape_query: bool,
    pending_text: String,
    committed_url: String,
}

impl QueryController {
    /// Creates a controller whose initial committed URL is built from
    /// `initial_text`.
    ///
    /// With `escape_query` unset the query text is appended to `api_base`
    /// verbatim, exactly as typed. With it set the text is
    /// `application/x-www-form-urlencoded` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use hnsearch::app::QueryController;
    ///
    /// let query = QueryController::new("https://hn.algolia.com/api/v1/search?query=", "react", false);
    /// assert_eq!(query.committed_url(), "https://hn.algolia.com/api/v1/search?query=react");
    /// ```
    #[must_use]
    pub fn new(api_base: impl Into<String>, initial_text: impl Into<String>, escape_query: bool) -> Self {
        let api_base = api_base.into();
        let pending_text = initial_text.into();
        let committed_url = build_url(&api_base, &pending_text, escape_query);
        Self {
            api_base,
            escape_query,
            pending_text,
            committed_url,
        }
    }

    /// Replaces the pending text. Has no other effect.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    /// Commits the pending text and returns the new URL.
    ///
    /// An empty pending text is allowed and still yields a valid request URL.
    pub fn on_submit(&mut self) -> &str {
        self.committed_url = build_url(&self.api_base, &self.pending_text, self.escape_query);
        tracing::debug!(url = %self.committed_url, "query submitted");
        &self.committed_url
    }

    #[must_use]
    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    #[must_use]
    pub fn committed_url(&self) -> &str {
        &self.committed_url
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

fn build_url(api_base: &str, text: &str, escape: bool) -> String {
    if escape {
        let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
        format!("{api_base}{encoded}")
    } else {
        format!("{api_base}{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://hn.algolia.com/api/v1/search?query=";

    #[test]
    fn typing_never_changes_committed_url() {
        let mut query = QueryController::new(BASE, "react", false);

        query.on_input_change("r");
        query.on_input_change("redux");

        assert_eq!(query.pending_text(), "redux");
        assert_eq!(query.committed_url(), format!("{BASE}react"));
    }

    #[test]
    fn submit_commits_pending_text() {
        let mut query = QueryController::new(BASE, "", false);
        query.on_input_change("redux");

        assert_eq!(query.on_submit(), format!("{BASE}redux"));
        assert_eq!(query.committed_url(), format!("{BASE}redux"));
    }

    #[test]
    fn empty_submit_is_allowed() {
        let mut query = QueryController::new(BASE, "react", false);
        query.on_input_change("");

        assert_eq!(query.on_submit(), BASE);
    }

    #[test]
    fn raw_mode_does_not_escape() {
        let mut query = QueryController::new(BASE, "", false);
        query.on_input_change("c++ & rust");

        assert_eq!(query.on_submit(), format!("{BASE}c++ & rust"));
    }

    #[test]
    fn escaped_mode_form_encodes() {
        let mut query = QueryController::new(BASE, "", true);
        query.on_input_change("c++ & rust");

        assert_eq!(query.on_submit(), format!("{BASE}c%2B%2B+%26+rust"));
    }
}
