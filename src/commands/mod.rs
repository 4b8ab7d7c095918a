//! Subcommand handlers for the `ministories` binary

pub mod browse;
pub mod open;
pub mod stories;

use std::sync::Arc;

use ministories::{Config, InitOptions, MemoryDocument, MiniStories};

/// Build an initialized SDK embedding over a fresh in-memory document.
pub fn embed(config: &Config) -> (MiniStories, Arc<MemoryDocument>) {
    let document = Arc::new(MemoryDocument::new());
    let sdk = MiniStories::new(document.clone(), config);
    sdk.initialize(InitOptions::new(config.endpoint.clone()));
    (sdk, document)
}
