//! `open` subcommand handler

use anyhow::{bail, Result};

use ministories::tui::BrowseApp;
use ministories::{Config, OpenStoryOptions, Phase, StoryId};

/// Open one story in the player and exit when it is closed.
#[cfg(not(tarpaulin_include))]
pub async fn handle(config: &Config, id: StoryId, start: usize) -> Result<()> {
    let (sdk, document) = super::embed(config);

    sdk.open_story(OpenStoryOptions::new(id).with_start_index(start))
        .await;
    if sdk.player_state().phase != Phase::Open {
        bail!("Could not load story {}", id);
    }

    let mut app = BrowseApp::player_only(document);
    let result = app.run().await;

    sdk.destroy();
    result
}
