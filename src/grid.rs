//! Scoring grid shared by the DP solvers.
//!
//! A `Grid` is a dense `(|Y|+1) × (|X|+1)` table stored in one flat arena.
//! Rows are prefixes of Y, columns are prefixes of X, so cell `(i, j)` holds
//! the subproblem for `Y[..i]` against `X[..j]`. Row 0 and column 0 are the
//! empty-prefix base cases and keep the fill value they were created with.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<C> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
}

impl<C: Clone> Grid<C> {
    /// Grid for `y_len + 1` rows and `x_len + 1` columns, every cell set to `base`.
    pub fn for_prefixes(x_len: usize, y_len: usize, base: C) -> Self {
        let rows = y_len + 1;
        let cols = x_len + 1;
        Self {
            rows,
            cols,
            cells: vec![base; rows * cols],
        }
    }
}

impl<C> Grid<C> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "cell ({row},{col}) out of bounds");
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&C> {
        if row < self.rows && col < self.cols {
            self.cells.get(self.offset(row, col))
        } else {
            None
        }
    }

    /// The bottom-right cell: the subproblem over both full inputs.
    pub fn last(&self) -> &C {
        &self[(self.rows - 1, self.cols - 1)]
    }

    /// Consume the grid, keeping only the bottom-right cell.
    pub fn into_last(mut self) -> C {
        // rows and cols are at least 1, so the arena is never empty.
        let at = self.cells.len() - 1;
        self.cells.swap_remove(at)
    }

    /// One row of the grid, column 0 first.
    pub fn row(&self, row: usize) -> &[C] {
        let start = self.offset(row, 0);
        &self.cells[start..start + self.cols]
    }
}

impl<C> Index<(usize, usize)> for Grid<C> {
    type Output = C;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[self.offset(row, col)]
    }
}

impl<C> IndexMut<(usize, usize)> for Grid<C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let at = self.offset(row, col);
        &mut self.cells[at]
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn rows_follow_y_and_cols_follow_x() {
        let grid = Grid::for_prefixes(5, 3, 0u32);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.row(3).len(), 6);
        assert!(grid.get(3, 5).is_some());
        assert!(grid.get(4, 0).is_none());
        assert!(grid.get(0, 6).is_none());
    }

    #[test]
    fn writes_land_in_the_addressed_cell() {
        let mut grid = Grid::for_prefixes(2, 2, 0u32);
        grid[(1, 2)] = 7;
        grid[(2, 1)] = 9;
        assert_eq!(grid.row(1), &[0, 0, 7]);
        assert_eq!(grid.row(2), &[0, 9, 0]);
        assert_eq!(grid[(1, 2)], 7);
    }

    #[test]
    fn empty_inputs_leave_a_single_base_cell() {
        let grid = Grid::for_prefixes(0, 0, "base");
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
        assert_eq!(*grid.last(), "base");
        assert_eq!(grid.into_last(), "base");
    }

    #[test]
    fn into_last_returns_bottom_right() {
        let mut grid = Grid::for_prefixes(3, 1, 0u32);
        grid[(1, 3)] = 42;
        assert_eq!(*grid.last(), 42);
        assert_eq!(grid.into_last(), 42);
    }
}
