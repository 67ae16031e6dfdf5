//! Search bar component renderer.
//!
//! Renders the current input inside a bordered box, followed by the
//! "Searching for" echo line.

use crate::ui::helpers::fit;
use crate::ui::viewmodel::SearchBarInfo;
use std::io::{self, Write};

const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search box (three lines) and the echo line.
pub fn render_search_bar<W: Write>(out: &mut W, search: &SearchBarInfo, cols: usize) -> io::Result<()> {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    writeln!(out, "{margin}┌{}┐", "─".repeat(inner_width))?;
    let search_text = format!(" Search: {}", search.query);
    writeln!(out, "{margin}│{}│", fit(&search_text, inner_width))?;
    writeln!(out, "{margin}└{}┘", "─".repeat(inner_width))?;

    writeln!(out, "{margin}Searching for {}", search.query)
}
