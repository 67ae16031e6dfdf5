//! Command-line input parsing.
//!
//! Each line typed at the prompt becomes zero or more [`Event`]s. Parsing
//! needs the current state only to resolve `dismiss <row>` against the rows
//! as they are displayed, after sorting.

use crate::app::{AppState, Event, SortKey};
use crate::domain::error::{HnSearchError, Result};

/// Parses one input line into events.
///
/// | Command              | Events                               |
/// |----------------------|--------------------------------------|
/// | `search <text>`      | `InputChanged(text)`, `Submitted`    |
/// | `input <text>`       | `InputChanged(text)`                 |
/// | `submit`             | `Submitted`                          |
/// | `dismiss <row\|id>`  | `ItemDismissed(objectID)`            |
/// | `sort <key>`         | `SortRequested(key)`                 |
/// | `help`               | `HelpToggled`                        |
/// | `quit`               | `Quit`                               |
///
/// Text after `search` and `input` is taken verbatim, inner and trailing
/// spaces included. A blank line yields no events.
///
/// # Errors
///
/// Returns [`HnSearchError::Command`] for an unknown command, an unknown sort
/// key, or a `dismiss` target that matches no displayed story.
///
/// # Example
///
/// ```rust
/// use hnsearch::app::{AppState, Event, QueryController};
/// use hnsearch::ui::parse_command;
///
/// let state = AppState::new(QueryController::new("https://example.test/?q=", "", false));
/// let events = parse_command("search redux", &state)?;
/// assert_eq!(events, vec![Event::InputChanged("redux".into()), Event::Submitted]);
/// # Ok::<(), hnsearch::HnSearchError>(())
/// ```
pub fn parse_command(line: &str, state: &AppState) -> Result<Vec<Event>> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() {
        return Ok(vec![]);
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let events = match command.to_ascii_lowercase().as_str() {
        "search" | "s" => vec![Event::InputChanged(rest.to_string()), Event::Submitted],
        "input" | "i" => vec![Event::InputChanged(rest.to_string())],
        "submit" => vec![Event::Submitted],
        "dismiss" | "d" => vec![Event::ItemDismissed(resolve_dismiss_target(rest.trim(), state)?)],
        "sort" => vec![Event::SortRequested(rest.parse::<SortKey>()?)],
        "help" | "?" => vec![Event::HelpToggled],
        "quit" | "exit" | "q" => vec![Event::Quit],
        other => return Err(HnSearchError::Command(format!("unknown command: {other}"))),
    };
    Ok(events)
}

/// Resolves a row number or `objectID` to the `objectID` of a displayed story.
///
/// A number within the displayed row range is read as a row; anything else is
/// looked up as an `objectID`.
fn resolve_dismiss_target(target: &str, state: &AppState) -> Result<String> {
    if target.is_empty() {
        return Err(HnSearchError::Command("dismiss needs a row number or objectID".to_string()));
    }

    let visible = state.visible_items();

    if let Ok(row) = target.parse::<usize>() {
        if let Some(story) = row.checked_sub(1).and_then(|idx| visible.get(idx)) {
            return Ok(story.object_id.clone());
        }
    }

    visible
        .iter()
        .find(|story| story.object_id == target)
        .map(|story| story.object_id.clone())
        .ok_or_else(|| HnSearchError::Command(format!("no story at row or with id {target}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{QueryController, ResultAction};
    use crate::domain::StoryItem;

    fn state_with(ids_and_points: &[(&str, i64)]) -> AppState {
        let mut state = AppState::new(QueryController::new("https://example.test/?q=", "", false));
        let stories = ids_and_points
            .iter()
            .map(|(id, points)| StoryItem { points: *points, ..StoryItem::new(*id, *id) })
            .collect();
        state.dispatch(ResultAction::FetchSuccess(stories));
        state
    }

    #[test]
    fn search_keeps_text_verbatim() {
        let state = state_with(&[]);
        assert_eq!(
            parse_command("search c++ & rust \n", &state).unwrap(),
            vec![Event::InputChanged("c++ & rust ".into()), Event::Submitted]
        );
    }

    #[test]
    fn bare_search_submits_empty_query() {
        let state = state_with(&[]);
        assert_eq!(
            parse_command("search", &state).unwrap(),
            vec![Event::InputChanged(String::new()), Event::Submitted]
        );
    }

    #[test]
    fn blank_line_is_noop() {
        let state = state_with(&[]);
        assert!(parse_command("   \n", &state).unwrap().is_empty());
    }

    #[test]
    fn dismiss_row_follows_sorted_order() {
        let mut state = state_with(&[("low", 1), ("high", 9)]);
        state.sort.select(SortKey::Point);

        assert_eq!(
            parse_command("dismiss 1", &state).unwrap(),
            vec![Event::ItemDismissed("high".into())]
        );
    }

    #[test]
    fn dismiss_accepts_object_id() {
        let state = state_with(&[("8863", 1), ("42", 2)]);
        assert_eq!(
            parse_command("dismiss 8863", &state).unwrap(),
            vec![Event::ItemDismissed("8863".into())]
        );
    }

    #[test]
    fn dismiss_unknown_target_errors() {
        let state = state_with(&[("a", 1)]);
        assert!(matches!(parse_command("dismiss 5", &state), Err(HnSearchError::Command(_))));
        assert!(matches!(parse_command("dismiss", &state), Err(HnSearchError::Command(_))));
    }

    #[test]
    fn sort_and_misc_commands() {
        let state = state_with(&[]);
        assert_eq!(
            parse_command("sort comments", &state).unwrap(),
            vec![Event::SortRequested(SortKey::Comment)]
        );
        assert_eq!(parse_command("help", &state).unwrap(), vec![Event::HelpToggled]);
        assert_eq!(parse_command("QUIT", &state).unwrap(), vec![Event::Quit]);
        assert!(parse_command("sort date", &state).is_err());
        assert!(parse_command("frobnicate", &state).is_err());
    }
}
