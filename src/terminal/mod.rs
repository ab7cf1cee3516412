//! Terminal front end: rendering, raw-mode handling, and key input

pub mod input;
pub mod menu;
pub mod render;

pub use input::TermInput;
pub use menu::{print_start_menu, read_menu_choice};
pub use render::{RawModeGuard, TermRenderer};
