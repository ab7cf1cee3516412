//! Double-buffered generation advance

use crate::game_of_life::{Grid, LifeRules};
use itertools::iproduct;
use thiserror::Error;

/// Buffer contract violations surfaced by `step`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("buffer dimensions differ: current is {current_rows}x{current_cols}, next is {next_rows}x{next_cols}")]
    DimensionMismatch {
        current_rows: usize,
        current_cols: usize,
        next_rows: usize,
        next_cols: usize,
    },
}

/// Compute generation N+1 from `current` into `next`.
///
/// `current` is read-only; on return `next` holds a fully computed
/// generation. The caller owns the buffer swap; this function never swaps.
pub fn step(current: &Grid, next: &mut Grid) -> Result<(), StepError> {
    if current.rows != next.rows || current.cols != next.cols {
        return Err(StepError::DimensionMismatch {
            current_rows: current.rows,
            current_cols: current.cols,
            next_rows: next.rows,
            next_cols: next.cols,
        });
    }

    for (row, col) in iproduct!(0..current.rows as isize, 0..current.cols as isize) {
        let neighbors = current.count_neighbors(row, col);
        let alive = current.get(row, col);
        next.set(row, col, LifeRules::next_state(alive, neighbors));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 1, true);
        grid.set(2, 2, true);
        grid.set(2, 3, true);
        grid
    }

    #[test]
    fn test_step_writes_next_generation() {
        let current = blinker();
        let mut next = Grid::new(5, 5);

        step(&current, &mut next).unwrap();

        assert!(next.get(1, 2));
        assert!(next.get(2, 2));
        assert!(next.get(3, 2));
        assert_eq!(next.living_count(), 3);
    }

    #[test]
    fn test_step_never_mutates_current() {
        let current = blinker();
        let snapshot = current.clone();
        let mut next = Grid::new(5, 5);

        step(&current, &mut next).unwrap();

        assert_eq!(current, snapshot);
    }

    #[test]
    fn test_step_is_deterministic() {
        let current = blinker();
        let mut first = Grid::new(5, 5);
        let mut second = Grid::new(5, 5);

        step(&current, &mut first).unwrap();
        step(&current, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_step_overwrites_stale_next_contents() {
        let current = blinker();
        let mut next = Grid::new(5, 5);
        // Stale garbage from a previous generation must not leak through
        next.set(0, 0, true);
        next.set(4, 4, true);

        step(&current, &mut next).unwrap();

        assert!(!next.get(0, 0));
        assert!(!next.get(4, 4));
        assert_eq!(next.living_count(), 3);
    }

    #[test]
    fn test_step_rejects_mismatched_buffers() {
        let current = Grid::new(4, 4);
        let mut next = Grid::new(4, 5);

        let err = step(&current, &mut next).unwrap_err();
        assert_eq!(
            err,
            StepError::DimensionMismatch {
                current_rows: 4,
                current_cols: 4,
                next_rows: 4,
                next_cols: 5,
            }
        );
    }
}
