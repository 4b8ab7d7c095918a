//! Keyboard input handling for the player.
//!
//! `ArrowRight` moves forward, `ArrowLeft` moves back and `Escape` closes;
//! every other key is ignored.

use crossterm::event::{KeyCode, KeyEvent};

use super::PlayerCommand;
use crate::document::Key;

/// Map a key press to a player command.
pub fn handle_key_event(key: &Key) -> Option<PlayerCommand> {
    match key {
        Key::ArrowRight => Some(PlayerCommand::Next),
        Key::ArrowLeft => Some(PlayerCommand::Previous),
        Key::Escape => Some(PlayerCommand::Close),
        Key::Other(_) => None,
    }
}

/// Translate a terminal key event into a document key.
pub fn key_from_crossterm(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::Other(c.to_string()),
        KeyCode::Enter => Key::Other("Enter".to_string()),
        other => Key::Other(format!("{:?}", other)),
    }
}
