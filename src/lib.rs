//! MiniStories - embeddable stories widget SDK
//!
//! A host initializes the SDK with an API endpoint, asks it to render a
//! horizontally scrollable row of story cards, and the SDK owns a fullscreen
//! player overlay that sequences through a story's pages, reports usage
//! analytics and optionally shows live performance metrics.
//!
//! # Architecture
//!
//! - `session`: endpoint and initialized flag shared by the network layers
//! - `api/`: HTTP transport seam and the story data client
//! - `analytics`: fire-and-forget event reporter
//! - `styles`: idempotent stylesheet registration
//! - `perf/`: lifecycle timing marks and the debug overlay
//! - `document/`: the host page port and an in-memory implementation
//! - `row`: story row renderer
//! - `player/`: the player state machine, input routing and page rendering
//! - `facade`: the `MiniStories` entry point exposed to hosts
//! - `tui/`: terminal host used by the `ministories` binary
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use ministories::{Config, ContainerId, CreateStoryRowOptions, InitOptions, MemoryDocument, MiniStories};
//!
//! # async fn run() {
//! let document = Arc::new(MemoryDocument::new());
//! let sdk = MiniStories::new(document.clone(), &Config::default());
//! sdk.initialize(InitOptions::new("http://localhost:8000"));
//!
//! let mut options = CreateStoryRowOptions::new(ContainerId::new("stories"));
//! options.on_story_click = Some(sdk.open_on_click());
//! sdk.create_story_row(options).await;
//! # }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod document;
pub mod error;
pub mod facade;
pub mod model;
pub mod perf;
pub mod player;
pub mod row;
pub mod session;
pub mod styles;
pub mod tui;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use document::{ContainerId, Document, Key, MemoryDocument, PlayerControl, RowView};
pub use error::SdkError;
pub use facade::{CreateStoryRowOptions, InitOptions, MiniStories, OpenStoryOptions};
pub use model::{Page, StoryDetail, StoryId, StorySummary};
pub use player::{Phase, PlayerState};
