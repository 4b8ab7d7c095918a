//! Rendering components for the player.
//!
//! Turns the player state into the view the host document shows: the
//! current page's media and caption, the progress indicator and the
//! visibility of the previous/next controls.

mod page;
mod progress;

pub use page::build_player_view;
pub use progress::format_progress;
