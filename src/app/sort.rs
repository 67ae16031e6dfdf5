//! Sort view: a re-orderable projection over the result list.
//!
//! [`project`] never mutates its input; it returns a freshly ordered copy that is
//! recomputed on every render. [`SortState::select`] implements the column-click
//! transition: clicking the active column flips the direction, clicking another
//! column activates it in its natural direction.

use crate::domain::error::HnSearchError;
use crate::domain::StoryItem;
use std::str::FromStr;

/// Column the result list can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// API order.
    #[default]
    None,
    /// Title, ascending.
    Title,
    /// Author, ascending.
    Author,
    /// Comment count, descending.
    Comment,
    /// Points, descending.
    Point,
}

impl SortKey {
    /// All keys in display order.
    pub const ALL: [Self; 5] = [Self::None, Self::Title, Self::Author, Self::Comment, Self::Point];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Title => "title",
            Self::Author => "author",
            Self::Comment => "comments",
            Self::Point => "points",
        }
    }
}

impl FromStr for SortKey {
    type Err = HnSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "comment" | "comments" => Ok(Self::Comment),
            "point" | "points" | "score" => Ok(Self::Point),
            other => Err(HnSearchError::Command(format!("unknown sort key: {other}"))),
        }
    }
}

/// Active sort selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub reversed: bool,
}

impl SortState {
    /// Applies a column click.
    ///
    /// | current key | clicked | result                          |
    /// |-------------|---------|---------------------------------|
    /// | `k`         | `k`     | key `k`, `reversed` flipped     |
    /// | `k`         | `j != k`| key `j`, `reversed = false`     |
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.reversed = !self.reversed;
        } else {
            self.key = key;
            self.reversed = false;
        }
        tracing::debug!(key = ?self.key, reversed = self.reversed, "sort selected");
    }
}

/// Returns `items` ordered according to `sort`.
///
/// String columns compare byte-wise, with no locale folding. Numeric columns
/// sort descending. All sorts are stable, so ties keep their API order; when
/// `reversed` is set the entire ordering is flipped end to end.
///
/// # Examples
///
/// ```
/// use hnsearch::app::sort::{project, SortKey, SortState};
/// use hnsearch::domain::StoryItem;
///
/// let items: Vec<StoryItem> = [3, 9, 1]
///     .iter()
///     .map(|p| StoryItem { points: *p, ..StoryItem::new(p.to_string(), "") })
///     .collect();
///
/// let sort = SortState { key: SortKey::Point, reversed: false };
/// let points: Vec<i64> = project(&items, sort).iter().map(|s| s.points).collect();
/// assert_eq!(points, vec![9, 3, 1]);
/// ```
#[must_use]
pub fn project(items: &[StoryItem], sort: SortState) -> Vec<StoryItem> {
    let mut sorted = items.to_vec();

    match sort.key {
        SortKey::None => {}
        SortKey::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => sorted.sort_by(|a, b| a.author.cmp(&b.author)),
        SortKey::Comment => sorted.sort_by(|a, b| b.num_comments.cmp(&a.num_comments)),
        SortKey::Point => sorted.sort_by(|a, b| b.points.cmp(&a.points)),
    }

    if sort.reversed {
        sorted.reverse();
    }
    sorted
}

/// Sum of comment counts across `items`.
#[must_use]
pub fn total_comments(items: &[StoryItem]) -> u64 {
    items.iter().map(|s| u64::from(s.num_comments)).sum()
}
