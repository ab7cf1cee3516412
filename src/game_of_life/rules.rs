//! Game of Life rules implementation

use super::Grid;
use itertools::iproduct;

/// Conway's B3/S23 rules engine
pub struct LifeRules;

impl LifeRules {
    /// Decide whether a cell is alive in the next generation.
    ///
    /// `neighbors` is the true neighbor count (the cell itself excluded).
    /// Pure, deterministic, and total over all inputs: a live cell survives
    /// with 2 or 3 neighbors, a dead cell is born with exactly 3, everything
    /// else is dead.
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            (true, 2) | (true, 3) | (false, 3) => true,
            _ => false,
        }
    }

    /// Evolve the grid one generation forward, returning the new grid
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = Grid::new(current.rows, current.cols);
        for (row, col) in iproduct!(0..current.rows as isize, 0..current.cols as isize) {
            let neighbors = current.count_neighbors(row, col);
            next.set(row, col, Self::next_state(current.get(row, col), neighbors));
        }
        next
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        // Survival: live cell with 2 or 3 neighbors
        assert!(LifeRules::next_state(true, 2));
        assert!(LifeRules::next_state(true, 3));

        // Death: live cell with any other count
        for n in [0, 1, 4, 5, 6, 7, 8] {
            assert!(!LifeRules::next_state(true, n), "live cell with {} neighbors must die", n);
        }

        // Birth: dead cell with exactly 3 neighbors
        assert!(LifeRules::next_state(false, 3));

        // Dead cell stays dead for every other count
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert!(!LifeRules::next_state(false, n), "dead cell with {} neighbors must stay dead", n);
        }
    }

    #[test]
    fn test_still_life_block() {
        // 2x2 block should remain stable
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let evolved = LifeRules::evolve(&grid);

        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_still_life_over_many_generations() {
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        let evolved = LifeRules::evolve_generations(grid.clone(), 25);
        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        // Vertical blinker on a grid large enough that wraparound is inert
        let cells = vec![
            vec![false, false, false, false, false],
            vec![false, false, true, false, false],
            vec![false, false, true, false, false],
            vec![false, false, true, false, false],
            vec![false, false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let evolved = LifeRules::evolve(&grid);

        // Should become horizontal
        let expected_cells = vec![
            vec![false, false, false, false, false],
            vec![false, false, false, false, false],
            vec![false, true, true, true, false],
            vec![false, false, false, false, false],
            vec![false, false, false, false, false],
        ];
        let expected = Grid::from_cells(expected_cells).unwrap();
        assert_eq!(evolved, expected);

        // Evolve again should return to original
        let evolved_twice = LifeRules::evolve(&evolved);
        assert_eq!(grid, evolved_twice);
    }

    #[test]
    fn test_glider_translates_diagonally() {
        // Standard 5-cell glider on a 10x10 torus: after 4 generations the
        // same shape reappears translated by (+1, +1)
        let mut grid = Grid::new(10, 10);
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        for &(r, c) in &glider {
            grid.set(r, c, true);
        }

        let evolved = LifeRules::evolve_generations(grid.clone(), 4);

        let mut expected = Grid::new(10, 10);
        for &(r, c) in &glider {
            expected.set(r + 1, c + 1, true);
        }
        assert_eq!(evolved, expected);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        // 4 generations per unit diagonal step; after rows*4 steps on a
        // square torus the glider is back where it started
        let mut grid = Grid::new(8, 8);
        for &(r, c) in &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            grid.set(r, c, true);
        }

        let evolved = LifeRules::evolve_generations(grid.clone(), 8 * 4);
        assert_eq!(evolved, grid);
    }
}
