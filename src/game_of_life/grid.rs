//! Grid representation and utilities for Game of Life

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Game of Life grid with toroidal (wraparound) topology.
///
/// Cells are stored in a single contiguous buffer indexed by
/// `row * cols + col`. Every coordinate is normalized modulo the grid
/// dimensions before lookup, so opposite edges are topological neighbors
/// and no out-of-bounds access is representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let rows = cells.len();
        let cols = cells[0].len();

        if cols == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        // Verify all rows have the same length
        for (i, row) in cells.iter().enumerate() {
            if row.len() != cols {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), cols);
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            rows,
            cols,
            cells: flat_cells,
        })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Normalize an arbitrary (possibly negative) coordinate pair onto the torus
    #[inline]
    fn wrap(&self, row: isize, col: isize) -> (usize, usize) {
        let rows = self.rows as isize;
        let cols = self.cols as isize;
        let wrapped_row = ((row % rows + rows) % rows) as usize;
        let wrapped_col = ((col % cols + cols) % cols) as usize;
        (wrapped_row, wrapped_col)
    }

    /// Get cell value at coordinates.
    ///
    /// Accepts arbitrary integers; one row above row 0 wraps to the last
    /// row, and symmetrically for columns.
    pub fn get(&self, row: isize, col: isize) -> bool {
        let (r, c) = self.wrap(row, col);
        self.cells[self.index(r, c)]
    }

    /// Set cell value at coordinates, normalized the same way as `get`
    pub fn set(&mut self, row: isize, col: isize, value: bool) {
        let (r, c) = self.wrap(row, col);
        let idx = self.index(r, c);
        self.cells[idx] = value;
    }

    /// Count living neighbors for a cell among the 8 surrounding cells.
    ///
    /// The center cell itself is excluded from the scan; wraparound makes
    /// every cell have exactly 8 neighbors.
    pub fn count_neighbors(&self, row: isize, col: isize) -> u8 {
        let mut count = 0;

        for dr in [-1, 0, 1] {
            for dc in [-1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue; // Skip the cell itself
                }
                if self.get(row + dr, col + dc) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row as isize, col as isize) {
                    living.push((row, col));
                }
            }
        }
        living
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = self.get(row as isize, col as isize);
                write!(f, "{}", if cell { '0' } else { ' ' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.cols, 4);
        assert_eq!(grid.cells.len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.cols, 3);
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_grid_from_ragged_cells_fails() {
        let cells = vec![vec![true, false], vec![true]];
        assert!(Grid::from_cells(cells).is_err());
        assert!(Grid::from_cells(vec![]).is_err());
    }

    #[test]
    fn test_toroidal_wraparound() {
        let mut grid = Grid::new(5, 7);
        grid.set(0, 0, true);

        // One row above row 0 wraps to the last row, symmetrically for columns
        assert!(grid.get(5, 7));
        assert!(grid.get(-5, -7));
        assert!(grid.get(10, 14));
        assert!(grid.get(-10, 0));
        assert!(!grid.get(1, 1));
    }

    #[test]
    fn test_negative_set_wraps() {
        let mut grid = Grid::new(4, 4);
        grid.set(-1, -1, true);
        assert!(grid.get(3, 3));
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![false, false, false, false, false],
            vec![false, true, true, true, false],
            vec![false, true, false, true, false],
            vec![false, true, true, true, false],
            vec![false, false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        // Center cell surrounded by a full ring
        assert_eq!(grid.count_neighbors(2, 2), 8);
        // A ring corner sees two ring cells, the center is dead
        assert_eq!(grid.count_neighbors(1, 1), 2);
    }

    #[test]
    fn test_neighbor_counting_wraps_edges() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 2, true);

        // (0, 0) is diagonally adjacent to (2, 2) across both edges
        assert_eq!(grid.count_neighbors(0, 0), 1);
    }

    #[test]
    fn test_center_excluded_from_count() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, true);
        assert_eq!(grid.count_neighbors(2, 2), 0);
    }
}
