//! Footer component renderer.
//!
//! Renders the centered command summary.

use crate::ui::helpers::center;
use crate::ui::viewmodel::FooterInfo;
use std::io::{self, Write};

/// Renders the footer help line, truncated to the terminal width.
pub fn render_footer<W: Write>(out: &mut W, footer: &FooterInfo, cols: usize) -> io::Result<()> {
    writeln!(out, "{}", center(&footer.commands, cols))
}
