//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod io;

pub use grid::Grid;
pub use rules::LifeRules;
pub use io::{create_example_patterns, load_grid_from_file, read_grid_from_input, save_grid_to_file};
