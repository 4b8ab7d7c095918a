//! `browse` subcommand handler

use anyhow::Result;

use ministories::tui::BrowseApp;
use ministories::{Config, ContainerId, CreateStoryRowOptions};

/// Browse the story row; Enter opens the selected story.
#[cfg(not(tarpaulin_include))]
pub async fn handle(config: &Config, category: Option<String>) -> Result<()> {
    let (sdk, document) = super::embed(config);
    let container = ContainerId::new("stories");

    let mut options = CreateStoryRowOptions::new(container.clone());
    options.category = category;
    options.on_story_click = Some(sdk.open_on_click());

    // Render in the background so the row shows its loading text first.
    let row_sdk = sdk.clone();
    tokio::spawn(async move { row_sdk.create_story_row(options).await });

    let mut app = BrowseApp::new(document, container);
    let result = app.run().await;

    sdk.destroy();
    result
}
