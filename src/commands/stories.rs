//! `stories` subcommand handler

use anyhow::Result;

use ministories::row::placeholder_text;
use ministories::tui::current_theme;
use ministories::{Config, ContainerId, CreateStoryRowOptions, RowView};

/// Fetch the story row once and print it, one story per line.
///
/// Network failures degrade to the empty-state text; the command still
/// succeeds.
#[cfg(not(tarpaulin_include))]
pub async fn handle(config: &Config, category: Option<String>) -> Result<()> {
    let (sdk, document) = super::embed(config);
    let container = ContainerId::new("stories");

    let mut options = CreateStoryRowOptions::new(container.clone());
    if let Some(category) = category {
        options = options.with_category(category);
    }
    sdk.create_story_row(options).await;

    let theme = current_theme();
    match document.row(&container) {
        Some(RowView::Cards(cards)) => {
            for card in cards {
                println!(
                    "{}  {}  {}",
                    theme.accent_text(&format!("#{}", card.id)),
                    card.title,
                    theme.secondary_text(&card.category)
                );
            }
        }
        Some(view) => println!("{}", placeholder_text(&view).unwrap_or_default()),
        None => {}
    }
    Ok(())
}
