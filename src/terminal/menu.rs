//! Interactive start menu for choosing the initial configuration

use crate::config::InitialState;
use crate::game_of_life::io::PATTERN_NAMES;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

const MENU_ROWS: usize = 25;
const MENU_COLS: usize = 78;

const MENU_ENTRIES: [(usize, &str); 8] = [
    (4, "GAME OF LIFE"),
    (7, "1 - start with gun config"),
    (9, "2 - start with static objects config"),
    (11, "3 - start with expanding object config"),
    (13, "4 - start with rake config"),
    (15, "5 - start with oscillator config"),
    (17, "d - type the starting field by hand"),
    (19, "To start, choose an option and press ENTER"),
];

/// Print the bordered start menu
pub fn print_start_menu<W: Write>(out: &mut W) -> Result<()> {
    for row in 0..MENU_ROWS {
        let line = if row == 0 || row == MENU_ROWS - 1 {
            format!("+{}+", "-".repeat(MENU_COLS))
        } else if let Some((_, text)) = MENU_ENTRIES.iter().find(|(r, _)| *r == row) {
            let pad_left = (MENU_COLS - text.len()) / 2;
            let pad_right = MENU_COLS - text.len() - pad_left;
            format!("|{}{}{}|", " ".repeat(pad_left), text, " ".repeat(pad_right))
        } else {
            format!("|{}|", " ".repeat(MENU_COLS))
        };
        writeln!(out, "{}", line).context("Failed to print start menu")?;
    }
    Ok(())
}

/// Read one menu choice from the control stream.
///
/// Digits 1-5 select the bundled pattern files under `patterns_dir`;
/// `d` selects direct input. Anything else falls back to the first
/// pattern, like an unrecognized key in the original menu.
pub fn read_menu_choice<R: BufRead>(reader: &mut R, patterns_dir: &Path) -> Result<InitialState> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read menu choice")?;

    Ok(decode_choice(line.trim().chars().next(), patterns_dir))
}

fn decode_choice(key: Option<char>, patterns_dir: &Path) -> InitialState {
    match key {
        Some('d') => InitialState::DirectInput,
        Some(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            InitialState::Pattern {
                file: patterns_dir.join(format!("{}.txt", PATTERN_NAMES[index])),
            }
        }
        _ => InitialState::Pattern {
            file: patterns_dir.join(format!("{}.txt", PATTERN_NAMES[0])),
        },
    }
}
