//! Empty state component renderer.

use crate::ui::helpers::center;
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Renders the two-line empty state message, both lines centered.
///
/// Shown in place of the table when the result list is empty and no fetch is
/// running, either because the search matched nothing or because everything
/// was dismissed.
pub fn render_empty_state<W: Write>(out: &mut W, empty: &EmptyState, cols: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", center(&empty.message, cols))?;
    writeln!(out, "{}", center(&empty.subtitle, cols))?;
    writeln!(out)
}
