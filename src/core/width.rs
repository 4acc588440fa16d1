//! Width calculation for rls.
//!
//! Two jobs: find the display width once per invocation, and commit the long-format
//! column widths for a whole entry set before any of its rows is written.

use crate::core::long::LongRow;
use crate::core::terminal::terminal_columns;

use unicode_width::UnicodeWidthStr;

/// Display width of the current terminal.
/// Falls back to `$COLUMNS`, then to `fallback` when neither is usable.
pub fn display_width(fallback: usize) -> usize {
    let env = std::env::var("COLUMNS").ok();
    resolve_display_width(terminal_columns(), env.as_deref(), fallback)
}

/// Pure part of [display_width], split out so the fallback order can be tested.
pub fn resolve_display_width(
    term: Option<u16>,
    columns_env: Option<&str>,
    fallback: usize,
) -> usize {
    if let Some(cols) = term.filter(|c| *c > 0) {
        return cols as usize;
    }
    columns_env
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|c| *c > 0)
        .unwrap_or(fallback.max(1))
}

/// Visible width of a name, as used for column padding.
#[inline]
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Column widths for the variable-width long-format fields.
/// Each is at least 1 and at least as wide as every value of its field in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongWidths {
    pub links: usize,
    pub owner: usize,
    pub group: usize,
    pub size: usize,
}

impl Default for LongWidths {
    fn default() -> Self {
        LongWidths {
            links: 1,
            owner: 1,
            group: 1,
            size: 1,
        }
    }
}

impl LongWidths {
    /// Scans every row once. The result is fixed for the rest of the pass.
    pub fn measure(rows: &[LongRow]) -> Self {
        rows.iter().fold(LongWidths::default(), |w, row| LongWidths {
            links: w.links.max(text_width(&row.links)),
            owner: w.owner.max(text_width(&row.owner)),
            group: w.group.max(text_width(&row.group)),
            size: w.size.max(text_width(&row.size)),
        })
    }
}
