//! Simulation engine: generation stepping, pacing, and the animation loop

pub mod runner;
pub mod speed;
pub mod stepper;

pub use runner::{InputSource, Renderer, SimulationLoop};
pub use speed::{
    ControlEvent, SpeedController, DEFAULT_DELAY_MS, MAX_DOUBLING_DELAY_MS, MIN_HALVING_DELAY_MS,
};
pub use stepper::{step, StepError};
