//! Non-blocking keyboard input decoded into control events

use crate::simulation::{ControlEvent, InputSource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Non-blocking keyboard reader.
///
/// Raw key codes are decoded into `ControlEvent`s here, at the boundary;
/// the simulation core never sees character codes. Poll failures count as
/// "no input this iteration" so the loop keeps running.
pub struct TermInput;

impl TermInput {
    pub fn new() -> Self {
        Self
    }

    fn decode(key: KeyEvent) -> Option<ControlEvent> {
        // Some platforms report key releases as separate events
        if key.kind == KeyEventKind::Release {
            return None;
        }

        // Ctrl+C quits too; in raw mode no signal is delivered for it
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(ControlEvent::Quit);
        }

        match key.code {
            KeyCode::Char('1') => Some(ControlEvent::SlowDown),
            KeyCode::Char('2') => Some(ControlEvent::SpeedUp),
            KeyCode::Char('q') => Some(ControlEvent::Quit),
            _ => None,
        }
    }
}

impl Default for TermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TermInput {
    fn poll_event(&mut self) -> Option<ControlEvent> {
        // Zero timeout: returns immediately whether or not a key is pending
        match event::poll(Duration::ZERO) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => Self::decode(key),
                _ => None,
            },
            _ => None,
        }
    }
}
