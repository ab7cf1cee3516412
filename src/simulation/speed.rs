//! Animation pacing and live user control

/// Default inter-generation delay in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 30;
/// Smallest delay for which a speed-up (halving) is still permitted
pub const MIN_HALVING_DELAY_MS: u64 = 10;
/// Largest delay for which a slow-down (doubling) is still permitted
pub const MAX_DOUBLING_DELAY_MS: u64 = 250;

/// A control event, decoded from raw input at the input-source boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Halve the inter-generation delay
    SpeedUp,
    /// Double the inter-generation delay
    SlowDown,
    /// Stop the simulation; terminal for the lifetime of the loop
    Quit,
}

/// Holds the current inter-generation delay and the running flag.
///
/// The delay only ever changes by integer doubling or halving, clamped so
/// halving stops at the floor and doubling stops once the pre-doubling
/// value exceeds the ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedController {
    delay_ms: u64,
    running: bool,
}

impl SpeedController {
    /// Create a controller with the default delay, running
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY_MS)
    }

    /// Create a controller with a specific starting delay, running
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            running: true,
        }
    }

    /// Current inter-generation delay in milliseconds
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Whether the simulation should keep running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply a single control event
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SpeedUp => {
                if self.delay_ms >= MIN_HALVING_DELAY_MS {
                    self.delay_ms /= 2;
                }
            }
            ControlEvent::SlowDown => {
                if self.delay_ms <= MAX_DOUBLING_DELAY_MS {
                    self.delay_ms *= 2;
                }
            }
            ControlEvent::Quit => {
                self.running = false;
            }
        }
    }
}

impl Default for SpeedController {
    fn default() -> Self {
        Self::new()
    }
}
