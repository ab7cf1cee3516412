//! Initializers and file I/O for Game of Life grids

use super::Grid;
use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Load a starting grid of fixed dimensions from a text file.
///
/// The character `'1'` marks a live cell; any other non-whitespace
/// character is dead. Whitespace between cells is skipped. A file that is
/// too short simply leaves the remaining cells dead; it is not an error.
pub fn load_grid_from_file<P: AsRef<Path>>(path: P, rows: usize, cols: usize) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    Ok(parse_grid_lenient(&content, rows, cols))
}

/// Parse a fixed-dimension grid from a string representation.
///
/// Cells are filled row-major from the non-whitespace characters of the
/// input; `'1'` means alive, anything else dead. Input past `rows * cols`
/// cells is ignored, missing input leaves cells dead.
pub fn parse_grid_lenient(content: &str, rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::new(rows, cols);
    let mut chars = content.chars().filter(|c| !c.is_whitespace());

    for row in 0..rows as isize {
        for col in 0..cols as isize {
            match chars.next() {
                Some(c) => grid.set(row, col, c == '1'),
                None => return grid, // Short input: remaining cells stay dead
            }
        }
    }

    grid
}

/// Read a starting grid as `rows * cols` whitespace-separated integers.
///
/// Nonzero means alive. Used for direct keyboard entry of a starting
/// configuration; missing trailing values leave cells dead.
pub fn read_grid_from_input<R: Read>(reader: R, rows: usize, cols: usize) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols);
    let reader = BufReader::new(reader);

    let mut cells = 0usize;
    let total = rows * cols;

    'outer: for line in reader.lines() {
        let line = line.context("Failed to read starting configuration")?;
        for token in line.split_whitespace() {
            let value: i64 = token
                .parse()
                .with_context(|| format!("Expected 0 or 1, got '{}'", token))?;
            let row = (cells / cols) as isize;
            let col = (cells % cols) as isize;
            grid.set(row, col, value != 0);
            cells += 1;
            if cells == total {
                break 'outer;
            }
        }
    }

    Ok(grid)
}

/// Convert a grid to its file representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows * (grid.cols + 1));

    for row in 0..grid.rows as isize {
        for col in 0..grid.cols as isize {
            result.push(if grid.get(row, col) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Names of the bundled starting patterns, in menu order
pub const PATTERN_NAMES: [&str; 5] = [
    "gun",
    "static_objects",
    "expanding_object",
    "rake",
    "oscillator",
];

/// Create the bundled starting pattern files.
///
/// Each file holds a small seed placed on an otherwise dead field; the
/// lenient loader pads the rest of the grid with dead cells.
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for name in PATTERN_NAMES {
        let content = pattern_content(name);
        let path = dir.join(format!("{}.txt", name));
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

fn pattern_content(name: &str) -> String {
    match name {
        // Gosper glider gun, offset a little from the top-left corner
        "gun" => {
            let mut grid = Grid::new(23, 78);
            let gun = [
                (0, 24),
                (1, 22), (1, 24),
                (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
                (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
                (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
                (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
                (6, 10), (6, 16), (6, 24),
                (7, 11), (7, 15),
                (8, 12), (8, 13),
            ];
            for (r, c) in gun {
                grid.set(r + 2, c + 2, true);
            }
            grid_to_string(&grid)
        }
        // A block, a beehive and a tub, all still lifes
        "static_objects" => {
            let mut grid = Grid::new(23, 78);
            let cells = [
                (5, 10), (5, 11), (6, 10), (6, 11),
                (10, 30), (10, 31), (11, 29), (11, 32), (12, 30), (12, 31),
                (16, 50), (17, 49), (17, 51), (18, 50),
            ];
            for (r, c) in cells {
                grid.set(r, c, true);
            }
            grid_to_string(&grid)
        }
        // R-pentomino, grows chaotically for over a thousand generations
        "expanding_object" => {
            let mut grid = Grid::new(23, 78);
            for (r, c) in [(10, 39), (10, 40), (11, 38), (11, 39), (12, 39)] {
                grid.set(r, c, true);
            }
            grid_to_string(&grid)
        }
        // A fleet of lightweight spaceships crossing the field
        "rake" => {
            let mut grid = Grid::new(23, 78);
            let lwss = [
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ];
            for (base_r, base_c) in [(4, 60), (11, 50), (18, 65)] {
                for (r, c) in lwss {
                    grid.set(base_r + r, base_c + c, true);
                }
            }
            grid_to_string(&grid)
        }
        // Blinkers and a toad
        "oscillator" => {
            let mut grid = Grid::new(23, 78);
            let cells = [
                (5, 10), (5, 11), (5, 12),
                (10, 38), (11, 38), (12, 38),
                (16, 60), (16, 61), (16, 62), (17, 59), (17, 60), (17, 61),
            ];
            for (r, c) in cells {
                grid.set(r, c, true);
            }
            grid_to_string(&grid)
        }
        _ => grid_to_string(&Grid::new(23, 78)),
    }
}
