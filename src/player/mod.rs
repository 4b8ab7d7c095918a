//! Fullscreen story player
//!
//! Shows one story at a time as an overlay with page navigation.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlayerState struct and shared types (Phase, NavResult, ClosedStory)
//! - `input/`: Keyboard and pointer input handling
//! - `render/`: Page view construction and progress label
//! - `controller`: the `Player` that ties state, document and analytics together
//!
//! # Usage
//!
//! The player is normally driven through [`crate::MiniStories::open_story`];
//! the host only sees the overlay it mounts into the document.

mod controller;
pub mod input;
pub mod render;
pub mod state;

pub use controller::{CloseCallback, Player};
pub use input::PlayerCommand;
pub use state::{ClosedStory, NavResult, Phase, PlayerState};
