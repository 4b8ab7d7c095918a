//! Input handling for the player.
//!
//! Keyboard and pointer input both reduce to a `PlayerCommand`, so every
//! close trigger ends up on the same close path.

mod keyboard;
mod pointer;

pub use keyboard::{handle_key_event, key_from_crossterm};
pub use pointer::handle_control;

/// Action requested by an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Show the next page
    Next,
    /// Show the previous page
    Previous,
    /// Close the player
    Close,
}
