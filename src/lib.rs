//! Terminal Game of Life
//!
//! A terminal-rendered Conway's Game of Life simulator on a toroidal grid,
//! with double-buffered generation stepping and live speed control.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod terminal;
pub mod utils;

pub use config::Settings;
pub use game_of_life::Grid;
pub use simulation::SimulationLoop;

use anyhow::Result;
use terminal::{RawModeGuard, TermInput, TermRenderer};

/// Run the interactive simulation on the current terminal until quit.
///
/// Acquires raw mode for the whole run and restores the terminal on every
/// exit path. Returns the number of generations computed.
pub fn run_simulation(settings: &Settings, initial: Grid) -> Result<u64> {
    let _raw = RawModeGuard::acquire()?;
    let mut renderer = TermRenderer::new(settings.display.clone())?;
    let mut input = TermInput::new();

    let mut sim = SimulationLoop::new(initial, settings.simulation.initial_delay_ms);
    sim.run(&mut renderer, &mut input)?;
    Ok(sim.generation())
}
