//! Story domain model.
//!
//! This module defines [`StoryItem`], a single search hit returned by the Hacker
//! News Algolia API. Items are immutable from the client's perspective: they are
//! replaced wholesale on every successful fetch and only ever removed locally.

use serde::{Deserialize, Deserializer, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A story returned by the search API.
///
/// Identity is [`object_id`](Self::object_id); the result store never holds two
/// items sharing one. Every field except `created_at_i` must be present in the
/// payload. The API sends `null` for several of them on some hits (for example
/// `url` on "Ask HN" posts); those deserialize to the field's default, but a
/// missing key is a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryItem {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub num_comments: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub points: i64,
    /// Creation time as a Unix timestamp, when the API provides one.
    #[serde(default)]
    pub created_at_i: Option<i64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl StoryItem {
    /// Creates a story with the given identifier and title and zeroed counters.
    ///
    /// # Examples
    ///
    /// ```
    /// use hnsearch::domain::StoryItem;
    ///
    /// let story = StoryItem::new("1", "Redux");
    /// assert_eq!(story.object_id, "1");
    /// assert_eq!(story.points, 0);
    /// assert!(story.created_at_i.is_none());
    /// ```
    #[must_use]
    pub fn new(object_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            title: title.into(),
            url: String::new(),
            author: String::new(),
            num_comments: 0,
            points: 0,
            created_at_i: None,
        }
    }

    /// Returns a short human-readable age relative to `now` (Unix seconds).
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    ///
    /// Returns an empty string when the story carries no timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use hnsearch::domain::StoryItem;
    ///
    /// let mut story = StoryItem::new("1", "Redux");
    /// story.created_at_i = Some(1_000);
    /// assert_eq!(story.age(1_000 + 300), "5m ago");
    /// ```
    #[must_use]
    pub fn age(&self, now: i64) -> String {
        let Some(created) = self.created_at_i else {
            return String::new();
        };
        let diff = now.saturating_sub(created);

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}
