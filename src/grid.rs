//! Color Grid - Fitting a Code Run to a Facet Shape
//!
//! Shape fitting only. Codes are not checked against the palette here;
//! unknown codes surface when the renderer resolves them.

use crate::color::UNSPECIFIED;

/// Row-major grid of color codes, origin top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl ColorGrid {
    /// Build a `cols x rows` grid from one facet's code run.
    ///
    /// A single code fills the whole grid. Longer runs are read row-major,
    /// padded with gray when short and truncated when long. Codes are kept
    /// as given.
    pub fn build(codes: &str, cols: usize, rows: usize) -> Self {
        let mut codes: Vec<char> = codes.chars().collect();
        let needed = cols * rows;

        if codes.len() == 1 {
            return Self { cols, rows, cells: vec![codes[0]; needed] };
        }

        codes.resize(needed, UNSPECIFIED);
        Self { cols, rows, cells: codes }
    }

    pub fn cols(&self) -> usize { self.cols }

    pub fn rows(&self) -> usize { self.rows }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row >= self.rows {
            return None;
        }
        self.cells.get(row * self.cols..(row + 1) * self.cols)
    }

    /// Cells in row-major order as `(col, row, code)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &code)| (i % cols, i / cols, code))
    }
}
