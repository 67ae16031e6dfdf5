//! Header component renderer.
//!
//! Renders the centered title line with story and comment totals.

use crate::ui::helpers::center;
use crate::ui::viewmodel::HeaderInfo;
use std::io::{self, Write};

/// Renders the header line.
///
/// # Layout
///
/// ```text
/// [left padding] Hacker News Stories (20 stories, 1342 comments)
/// ```
pub fn render_header<W: Write>(out: &mut W, header: &HeaderInfo, cols: usize) -> io::Result<()> {
    let noun = if header.story_count == 1 { "story" } else { "stories" };
    let title = format!(
        "{} ({} {noun}, {} comments)",
        header.title, header.story_count, header.total_comments
    );
    writeln!(out, "{}", center(&title, cols))
}
