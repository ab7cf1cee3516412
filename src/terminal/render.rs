//! Bordered frame rendering on the terminal

use crate::config::DisplayConfig;
use crate::game_of_life::Grid;
use crate::simulation::Renderer;
use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{Stdout, Write};

/// Scoped raw-mode acquisition.
///
/// Raw mode is enabled once for the lifetime of the guard and released in
/// `Drop`, so the terminal is restored on every exit path, including
/// panics and `?` early returns.
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable terminal raw mode")?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Renders generations as a bordered character frame.
///
/// The interior maps 1:1 to grid cells inside a `+`/`-`/`|` border, with
/// a one-line control-hint caption below. Uses the alternate screen and
/// restores the terminal on drop.
pub struct TermRenderer {
    stdout: Stdout,
    display: DisplayConfig,
}

pub const CONTROL_HINT: &str = "Control keys: q - exit, 1 - decrease speed, 2 - increase speed";

impl TermRenderer {
    pub fn new(display: DisplayConfig) -> Result<Self> {
        let mut stdout = std::io::stdout();
        queue!(stdout, EnterAlternateScreen, Hide).context("Failed to enter alternate screen")?;
        stdout.flush().context("Failed to initialize terminal")?;
        Ok(Self { stdout, display })
    }

    /// Build one border-framed text line per terminal row
    fn frame_lines(&self, grid: &Grid) -> Vec<String> {
        let mut lines = Vec::with_capacity(grid.rows + 3);

        let horizontal: String = format!("+{}+", "-".repeat(grid.cols));
        lines.push(horizontal.clone());

        for row in 0..grid.rows as isize {
            let mut line = String::with_capacity(grid.cols + 2);
            line.push('|');
            for col in 0..grid.cols as isize {
                line.push(if grid.get(row, col) {
                    self.display.alive_char
                } else {
                    self.display.dead_char
                });
            }
            line.push('|');
            lines.push(line);
        }

        lines.push(horizontal);
        lines.push(CONTROL_HINT.to_string());
        lines
    }
}

impl Renderer for TermRenderer {
    fn render(&mut self, grid: &Grid) -> Result<()> {
        let lines = self.frame_lines(grid);

        queue!(self.stdout, MoveTo(0, 0), Clear(ClearType::All))
            .context("Failed to clear terminal")?;
        for (row, line) in lines.iter().enumerate() {
            // Explicit cursor positioning: raw mode does not translate '\n'
            queue!(self.stdout, MoveTo(0, row as u16), Print(line))
                .context("Failed to draw frame")?;
        }
        self.stdout.flush().context("Failed to flush frame")?;

        Ok(())
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        let _ = queue!(self.stdout, Show, LeaveAlternateScreen);
        let _ = self.stdout.flush();
    }
}
