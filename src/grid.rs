//! A fixed-size 2D grid with toroidal addressing.
//!
//! Cells are stored row-major in a flat buffer. Every coordinate passed to
//! [`Grid::get`] or [`Grid::set`] is wrapped modulo the grid extent first, so
//! any `i32` (negative included) lands on a valid cell. Callers that need
//! strict bounds, such as ship placement, check them on their own.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Add;
use num_traits::Zero;

use crate::common::BoardError;

/// Row-major grid of `T` addressed by wrapped `(x, y)` coordinates.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    cols: usize,
    rows: usize,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid of `cols × rows` default cells.
    ///
    /// # Panics
    ///
    /// Panics if either extent is zero or exceeds `i32::MAX`. Use
    /// [`Grid::try_new`] to handle that case.
    pub fn new(cols: usize, rows: usize) -> Self {
        match Self::try_new(cols, rows) {
            Ok(grid) => grid,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible constructor: rejects zero-sized or oversized dimensions.
    pub fn try_new(cols: usize, rows: usize) -> Result<Self, BoardError> {
        Self::try_filled(cols, rows, T::default())
    }
}

impl<T: Copy> Grid<T> {
    /// Fallible constructor with every cell set to `value`.
    fn try_filled(cols: usize, rows: usize, value: T) -> Result<Self, BoardError> {
        let max = i32::MAX as usize;
        if cols == 0 || rows == 0 || cols > max || rows > max {
            return Err(BoardError::InvalidDimensions { cols, rows });
        }
        Ok(Grid {
            cells: vec![value; cols * rows],
            cols,
            rows,
        })
    }

    /// Number of columns (the x extent).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows (the y extent).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Wrap `(x, y)` onto the grid and return the in-range column and row.
    #[inline]
    pub fn normalize(&self, x: i32, y: i32) -> (usize, usize) {
        (
            x.rem_euclid(self.cols as i32) as usize,
            y.rem_euclid(self.rows as i32) as usize,
        )
    }

    /// Whether `(x, y)` lies on the grid without wrapping.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        let (col, row) = self.normalize(x, y);
        row * self.cols + col
    }

    /// Value at the wrapped coordinate.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> T {
        self.cells[self.index(x, y)]
    }

    /// Overwrite the value at the wrapped coordinate.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|c| *c = value);
    }

    /// Copy `src` into the grid from the first cell onward, row-major.
    /// Copies `min(src.len(), cols * rows)` values and leaves the rest as is.
    pub fn copy_from(&mut self, src: &[T]) {
        let n = src.len().min(self.cells.len());
        self.cells[..n].copy_from_slice(&src[..n]);
    }

    /// Flat row-major view of the cells.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable flat row-major view of the cells.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterator over `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i % cols, i / cols, v))
    }
}

impl<T> Grid<T>
where
    T: Copy + Zero + Add<Output = T>,
{
    /// Sum of every cell.
    pub fn total(&self) -> T {
        self.cells.iter().fold(T::zero(), |acc, &v| acc + v)
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.cols, self.rows)?;
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for v in row {
                write!(f, " {} ", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
