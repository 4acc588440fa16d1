//! Grid layout for short listings.
//!
//! Every cell gets the same column width: the widest name in the set plus a fixed gap.
//! Two packing strategies share that width:
//! - [Layout::DownAcross] fills a column top to bottom before moving right (default).
//! - [Layout::Across] places cells left to right and wraps at the display width (`-x`).
//!
//! Neither strategy writes trailing padding at the end of a line, and padding always
//! follows the cell text, so it is never inside a color sequence.

use crate::core::width::text_width;

use std::io::{self, Write};

/// Gap between grid columns.
pub const DEFAULT_SPACING: usize = 2;

/// Packing strategy for the short listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    DownAcross,
    Across,
}

/// One printable grid cell. `text` is raw bytes and may carry escape sequences;
/// `width` is the visible width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: Vec<u8>,
    width: usize,
}

impl Cell {
    pub fn plain(text: &str) -> Self {
        Cell {
            text: text.as_bytes().to_vec(),
            width: text_width(text),
        }
    }

    pub fn styled(text: Vec<u8>, width: usize) -> Self {
        Cell { text, width }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Grid geometry for one set of cells.
///
/// `columns` is never below 1, even when a single cell is wider than the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub column_width: usize,
    pub columns: usize,
    pub rows: usize,
}

impl LayoutPlan {
    pub fn new(max_width: usize, count: usize, display_width: usize, spacing: usize) -> Self {
        let column_width = (max_width + spacing).max(1);
        let columns = (display_width / column_width).max(1);
        LayoutPlan {
            column_width,
            columns,
            rows: count.div_ceil(columns),
        }
    }

    pub fn for_cells(cells: &[Cell], display_width: usize, spacing: usize) -> Self {
        let max_width = cells.iter().map(Cell::width).max().unwrap_or(0);
        Self::new(max_width, cells.len(), display_width, spacing)
    }

    /// Index of the cell shown at (`row`, `col`) in down-then-across order.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row + col * self.rows
    }
}

/// Writes `cells` with the chosen strategy.
pub fn write_grid<W: Write>(
    out: &mut W,
    layout: Layout,
    cells: &[Cell],
    display_width: usize,
    spacing: usize,
) -> io::Result<()> {
    match layout {
        Layout::DownAcross => write_down_across(out, cells, display_width, spacing),
        Layout::Across => write_across(out, cells, display_width, spacing),
    }
}

/// Column-major grid. Row `r`, column `c` shows cell `r + c * rows`.
pub fn write_down_across<W: Write>(
    out: &mut W,
    cells: &[Cell],
    display_width: usize,
    spacing: usize,
) -> io::Result<()> {
    if cells.is_empty() {
        return Ok(());
    }
    let plan = LayoutPlan::for_cells(cells, display_width, spacing);
    let n = cells.len();

    for row in 0..plan.rows {
        for col in 0..plan.columns {
            let idx = plan.index(row, col);
            if idx >= n {
                break;
            }
            let last = col + 1 == plan.columns || plan.index(row, col + 1) >= n;
            let pad_to = if last { 0 } else { plan.column_width };
            write_cell(out, &cells[idx], pad_to)?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Row-major listing. A line breaks before a cell that would cross `display_width`,
/// unless the line is still empty.
pub fn write_across<W: Write>(
    out: &mut W,
    cells: &[Cell],
    display_width: usize,
    spacing: usize,
) -> io::Result<()> {
    if cells.is_empty() {
        return Ok(());
    }
    let colw = LayoutPlan::for_cells(cells, display_width, spacing).column_width;
    let n = cells.len();
    let mut cursor = 0;

    for (i, cell) in cells.iter().enumerate() {
        if cursor > 0 && cursor + colw > display_width {
            out.write_all(b"\n")?;
            cursor = 0;
        }
        let ends_line = i + 1 == n || cursor + 2 * colw > display_width;
        let pad_to = if ends_line { 0 } else { colw };
        write_cell(out, cell, pad_to)?;
        cursor += colw;
    }
    out.write_all(b"\n")
}

fn write_cell<W: Write>(out: &mut W, cell: &Cell, pad_to: usize) -> io::Result<()> {
    out.write_all(&cell.text)?;
    let pad = pad_to.saturating_sub(cell.width);
    if pad > 0 {
        write!(out, "{:pad$}", "")?;
    }
    Ok(())
}
