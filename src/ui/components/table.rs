//! Table component renderer.
//!
//! Renders stories as a fixed-column table. Each story takes two lines: the
//! columns, then its URL indented under the title.

use crate::ui::helpers::{fit, truncate};
use crate::ui::viewmodel::{DisplayItem, SortInfo};
use std::io::{self, Write};

const ROW_WIDTH: usize = 4;
const AUTHOR_WIDTH: usize = 16;
const COMMENTS_WIDTH: usize = 9;
const POINTS_WIDTH: usize = 7;
const AGE_WIDTH: usize = 8;
const MIN_TITLE_WIDTH: usize = 12;

/// Width of everything except the title column, separators included.
const FIXED_WIDTH: usize = ROW_WIDTH + AUTHOR_WIDTH + COMMENTS_WIDTH + POINTS_WIDTH + AGE_WIDTH + 5;

fn title_width(cols: usize) -> usize {
    cols.saturating_sub(FIXED_WIDTH).max(MIN_TITLE_WIDTH)
}

/// Renders the column headers, marking the active sort column.
///
/// The active column gets `v` in its natural direction and `^` when reversed.
pub fn render_table_headers<W: Write>(out: &mut W, sort: &SortInfo, cols: usize) -> io::Result<()> {
    let marker = |label: &str, key: &str| {
        if sort.key == key {
            format!("{label} {}", if sort.reversed { '^' } else { 'v' })
        } else {
            label.to_string()
        }
    };

    writeln!(
        out,
        "{} {} {} {:>comments$} {:>points$} {:>age$}",
        fit("#", ROW_WIDTH),
        fit(&marker("TITLE", "title"), title_width(cols)),
        fit(&marker("AUTHOR", "author"), AUTHOR_WIDTH),
        marker("COMMENTS", "comments"),
        marker("POINTS", "points"),
        "AGE",
        comments = COMMENTS_WIDTH,
        points = POINTS_WIDTH,
        age = AGE_WIDTH,
    )
}

/// Renders all story rows.
pub fn render_table_rows<W: Write>(out: &mut W, items: &[DisplayItem], cols: usize) -> io::Result<()> {
    for item in items {
        render_table_row(out, item, cols)?;
    }
    Ok(())
}

fn render_table_row<W: Write>(out: &mut W, item: &DisplayItem, cols: usize) -> io::Result<()> {
    let width = title_width(cols);

    writeln!(
        out,
        "{} {} {} {:>comments$} {:>points$} {:>age$}",
        fit(&item.row.to_string(), ROW_WIDTH),
        fit(&item.title, width),
        fit(&item.author, AUTHOR_WIDTH),
        item.num_comments,
        item.points,
        item.age,
        comments = COMMENTS_WIDTH,
        points = POINTS_WIDTH,
        age = AGE_WIDTH,
    )?;

    if !item.url.is_empty() {
        let indent = " ".repeat(ROW_WIDTH + 1);
        writeln!(out, "{indent}{}", truncate(&item.url, cols.saturating_sub(ROW_WIDTH + 1)))?;
    }
    Ok(())
}
