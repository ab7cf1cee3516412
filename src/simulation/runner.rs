//! The animation loop driving the simulation

use super::speed::SpeedController;
use super::stepper::step;
use crate::game_of_life::Grid;
use anyhow::Result;
use std::thread;
use std::time::Duration;

/// Draws a fully computed generation to some output target.
///
/// Side-effecting only; the loop never consumes a return value beyond the
/// error. Called exactly once per generation, always on a complete buffer.
pub trait Renderer {
    fn render(&mut self, grid: &Grid) -> Result<()>;
}

/// Non-blocking source of control events.
///
/// Must return immediately whether or not input is pending. Failures to
/// poll are treated as "no input this iteration" by implementations, never
/// surfaced to the loop.
pub trait InputSource {
    fn poll_event(&mut self) -> Option<super::ControlEvent>;
}

/// Owns the two grid buffers and drives render/step/swap/input/sleep.
///
/// Exactly one buffer is observable at a time; `step` writes into the
/// back buffer and the swap is a plain ownership exchange, so a render
/// never sees a half-written generation.
pub struct SimulationLoop {
    current: Grid,
    next: Grid,
    controller: SpeedController,
    generation: u64,
}

impl SimulationLoop {
    /// Create a loop around a pre-populated starting grid
    pub fn new(initial: Grid, delay_ms: u64) -> Self {
        let next = Grid::new(initial.rows, initial.cols);
        Self {
            current: initial,
            next,
            controller: SpeedController::with_delay(delay_ms),
            generation: 0,
        }
    }

    /// The generation currently held in the front buffer
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Number of generations computed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run until a quit event is observed.
    ///
    /// Each iteration renders the current generation, computes the next
    /// one into the back buffer, swaps, polls for input, and sleeps for
    /// the controller's current delay. A quit is acted on immediately
    /// after the poll, so shutdown latency is bounded by one delay.
    pub fn run<R: Renderer, I: InputSource>(&mut self, renderer: &mut R, input: &mut I) -> Result<()> {
        while self.controller.is_running() {
            renderer.render(&self.current)?;

            step(&self.current, &mut self.next)?;
            std::mem::swap(&mut self.current, &mut self.next);
            self.generation += 1;

            if let Some(event) = input.poll_event() {
                self.controller.apply(event);
            }
            if !self.controller.is_running() {
                break;
            }

            thread::sleep(Duration::from_millis(self.controller.delay_ms()));
        }

        Ok(())
    }
}
