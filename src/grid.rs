//! Grid — a fixed-size 2-D cell buffer with wraparound addressing.
//!
//! Generic over the cell type; the animation uses `Grid<char>` for both the
//! shared canvas and each sprite frame. All coordinate access wraps modulo
//! the grid dimensions, which is what makes a sprite drawn past an edge
//! reappear on the opposite side.

use std::io::{self, Write};

use crate::error::LoadError;
use crate::source::Source;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    rows: Vec<Vec<T>>,
    blank: T,
}

impl<T: Clone> Grid<T> {
    /// A `height × width` grid with every cell set to `blank`; `blank` is
    /// also the value used for padding on later resizes and for `clear`.
    pub fn new(height: usize, width: usize, blank: T) -> Self {
        Self {
            height,
            width,
            rows: vec![vec![blank.clone(); width]; height],
            blank,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Change the height, truncating from the bottom or padding with blank
    /// rows of the current width. Existing rows are untouched.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.rows
            .resize_with(height, || vec![self.blank.clone(); self.width]);
    }

    /// Change the width, truncating every row on the right or padding it
    /// with blanks.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        for row in &mut self.rows {
            row.resize(width, self.blank.clone());
        }
    }

    /// Reset every cell to the grid's blank value.
    pub fn clear(&mut self) {
        let blank = self.blank.clone();
        self.fill(blank);
    }

    /// Set every cell to the given value.
    pub fn fill(&mut self, value: T) {
        for row in &mut self.rows {
            for cell in row {
                *cell = value.clone();
            }
        }
    }

    /// Cell at `(row, col)`. Out-of-range coordinates, including negative
    /// ones, wrap modulo the grid dimensions. Both dimensions must be
    /// positive; callers guard against degenerate grids.
    pub fn get(&self, row: i64, col: i64) -> &T {
        let (r, c) = self.index(row, col);
        &self.rows[r][c]
    }

    /// Place `value` at `(row, col)`, wrapping like [`Grid::get`].
    pub fn set(&mut self, row: i64, col: i64, value: T) {
        let (r, c) = self.index(row, col);
        self.rows[r][c] = value;
    }

    /// Rows in top-to-bottom order, for painting.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    fn index(&self, row: i64, col: i64) -> (usize, usize) {
        (
            row.rem_euclid(self.height as i64) as usize,
            col.rem_euclid(self.width as i64) as usize,
        )
    }
}

impl Grid<char> {
    /// Read exactly `height` physical lines from `source` into a
    /// `height × width` character grid. Short lines are padded on the right
    /// with spaces and long lines truncated; running out of input before
    /// `height` lines is an error.
    pub fn parse_rows(
        source: &mut Source,
        height: usize,
        width: usize,
    ) -> Result<Self, LoadError> {
        let mut grid = Self::new(height, width, ' ');
        for r in 0..height {
            let Some(line) = source.next_line() else {
                return Err(LoadError::IncompleteFrame {
                    have: r,
                    want: height,
                });
            };
            let mut row: Vec<char> = line.chars().take(width).collect();
            row.resize(width, ' ');
            grid.rows[r] = row;
        }
        Ok(grid)
    }

    /// Write the grid to `out`, one newline-terminated line per row, top to
    /// bottom.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for row in self.rows() {
            let line: String = row.iter().collect();
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
