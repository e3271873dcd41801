//! The cell grid widgets render into.

use crate::cell::{Cell, CellContent};
use clens_core::geometry::Rect;
use clens_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A width×height grid of [`Cell`]s.
///
/// All writes are clipped to the grid; out-of-bounds writes are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a cleared buffer with the given dimensions.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The bounding rectangle of the buffer.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write a cell at (x, y). Out of bounds is a no-op.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Write a styled text span starting at (x, y), clipped to `max_x`
    /// (exclusive) and the buffer edge.
    ///
    /// Iterates grapheme clusters; a double-width grapheme occupies its head
    /// cell plus a continuation cell, and is skipped entirely if only one
    /// column remains. Returns the column after the last written cell.
    pub fn set_text(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let limit = max_x.min(self.width);
        let mut x = x;
        if y >= self.height {
            return x;
        }
        for grapheme in text.graphemes(true) {
            let w = grapheme.width();
            if w == 0 {
                continue;
            }
            let w = w.min(2) as u16;
            if x >= limit || limit - x < w {
                break;
            }
            self.set(x, y, Cell::from_grapheme(grapheme).styled(style));
            if w == 2 {
                self.set(x + 1, y, Cell::continuation().styled(style));
            }
            x += w;
        }
        x
    }

    /// The textual content of row `y` with trailing whitespace removed.
    ///
    /// Empty cells render as spaces; continuation cells contribute nothing.
    /// Intended for tests and debug output.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            match self.get(x, y).map(|c| &c.content) {
                Some(CellContent::Grapheme(g)) => out.push_str(g),
                Some(CellContent::Continuation) => {}
                _ => out.push(' '),
            }
        }
        out.trim_end().to_owned()
    }
}
