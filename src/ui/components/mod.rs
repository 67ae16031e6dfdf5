//! Composable UI component renderers.
//!
//! Each component writes plain text lines to any [`Write`] sink. None of them
//! position the cursor, so the same output works on a terminal, in a pipe,
//! or in a test buffer.
//!
//! # Components
//!
//! - [`header`]: Title with story and comment totals
//! - [`search`]: Search input box and "Searching for" echo
//! - [`table`]: Story list with sortable column headers
//! - [`empty`]: Empty state message
//! - [`footer`]: Command summary
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Search Bar - 4 lines]
//! [Status line, if loading or failed]
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Help, if toggled]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::viewmodel::UIViewModel;
use std::io::{self, Write};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line spanning `cols`.
fn render_border<W: Write>(out: &mut W, cols: usize) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(cols))
}

/// Renders the full screen layout for `vm`.
pub fn render_layout<W: Write>(out: &mut W, vm: &UIViewModel, cols: usize) -> io::Result<()> {
    render_header(out, &vm.header, cols)?;
    render_border(out, cols)?;
    render_search_bar(out, &vm.search_bar, cols)?;

    if let Some(status) = vm.status {
        writeln!(out, "  {}", status.message())?;
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, cols)?;
    } else {
        render_table_headers(out, &vm.sort, cols)?;
        render_table_rows(out, &vm.display_items, cols)?;
    }

    if !vm.help.is_empty() {
        render_border(out, cols)?;
        for line in &vm.help {
            writeln!(out, "  {line}")?;
        }
    }

    render_border(out, cols)?;
    render_footer(out, &vm.footer, cols)
}
