//! Pointer input handling for the player overlay.

use super::PlayerCommand;
use crate::document::PlayerControl;

/// Map a control activation to a player command.
///
/// The close button and the backdrop both close the player.
pub fn handle_control(control: PlayerControl) -> PlayerCommand {
    match control {
        PlayerControl::Close | PlayerControl::Backdrop => PlayerCommand::Close,
        PlayerControl::Previous => PlayerCommand::Previous,
        PlayerControl::Next => PlayerCommand::Next,
    }
}
