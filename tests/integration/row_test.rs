//! Integration tests for the story row over real HTTP and the fake transport

use std::sync::Arc;

use ministories::row::EMPTY_TEXT;
use ministories::{
    Config, ContainerId, CreateStoryRowOptions, InitOptions, MemoryDocument, MiniStories,
    OpenStoryOptions, RowView,
};

use crate::helpers::{detail_json, direct_transport, sdk, serve, summaries_json};

fn http_sdk(endpoint: &str) -> (MiniStories, Arc<MemoryDocument>) {
    let document = Arc::new(MemoryDocument::new());
    let sdk = MiniStories::with_transport(document.clone(), direct_transport(), &Config::default());
    sdk.initialize(InitOptions::new(endpoint));
    (sdk, document)
}

#[tokio::test]
async fn http_500_renders_empty_state() {
    let endpoint = serve(500, r#"{"detail":"boom"}"#).await;
    let (sdk, document) = http_sdk(&endpoint);
    let container = ContainerId::new("row");

    sdk.create_story_row(CreateStoryRowOptions::new(container.clone()))
        .await;

    assert_eq!(document.row(&container), Some(RowView::Empty));
    assert_eq!(EMPTY_TEXT, "No stories available");
}

#[tokio::test]
async fn http_success_renders_cards_in_server_order() {
    let endpoint = serve(200, &summaries_json(&[3, 1, 2])).await;
    let (sdk, document) = http_sdk(&endpoint);
    let container = ContainerId::new("row");

    sdk.create_story_row(CreateStoryRowOptions::new(container.clone()))
        .await;

    let Some(RowView::Cards(cards)) = document.row(&container) else {
        panic!("expected cards");
    };
    let ids: Vec<_> = cards.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[tokio::test]
async fn unreachable_endpoint_renders_empty_state() {
    let (sdk, document) = http_sdk("http://127.0.0.1:9");
    let container = ContainerId::new("row");

    sdk.create_story_row(CreateStoryRowOptions::new(container.clone()))
        .await;

    assert_eq!(document.row(&container), Some(RowView::Empty));
}

#[tokio::test]
async fn rerender_replaces_row_contents() {
    let (sdk, document, transport) = sdk(&Config::default());
    transport.respond("/api/stories", 200, summaries_json(&[1, 2]));
    transport.respond("/api/stories?category=news", 200, summaries_json(&[9]));
    let container = ContainerId::new("row");

    sdk.create_story_row(CreateStoryRowOptions::new(container.clone()))
        .await;
    sdk.create_story_row(CreateStoryRowOptions::new(container.clone()).with_category("news"))
        .await;

    let Some(RowView::Cards(cards)) = document.row(&container) else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, 9);
}

#[tokio::test]
async fn slower_older_render_does_not_overwrite_newer() {
    let (sdk, document, transport) = sdk(&Config::default());
    transport.respond("/api/stories", 200, summaries_json(&[1, 2]));
    transport.respond("/api/stories?category=news", 200, "[]");
    let gate = transport.gate("/api/stories");
    let container = ContainerId::new("row");

    let older = tokio::spawn({
        let sdk = sdk.clone();
        let container = container.clone();
        async move {
            sdk.create_story_row(CreateStoryRowOptions::new(container))
                .await
        }
    });
    transport.wait_for_request("/api/stories").await;

    sdk.create_story_row(CreateStoryRowOptions::new(container.clone()).with_category("news"))
        .await;
    gate.open();
    older.await.unwrap();

    assert_eq!(document.row(&container), Some(RowView::Empty));
}

#[tokio::test]
async fn render_in_flight_is_discarded_after_destroy() {
    let (sdk, document, transport) = sdk(&Config::default());
    transport.respond("/api/stories", 200, summaries_json(&[1, 2]));
    let gate = transport.gate("/api/stories");
    let container = ContainerId::new("row");

    let pending = tokio::spawn({
        let sdk = sdk.clone();
        let container = container.clone();
        async move {
            sdk.create_story_row(CreateStoryRowOptions::new(container))
                .await
        }
    });
    transport.wait_for_request("/api/stories").await;

    sdk.destroy();
    gate.open();
    pending.await.unwrap();

    assert_eq!(document.row(&container), Some(RowView::Loading));
    assert_eq!(document.stylesheet_count(), 0);
}

#[tokio::test]
async fn row_click_without_handler_does_nothing() {
    let (sdk, document, transport) = sdk(&Config::default());
    transport.respond("/api/stories", 200, summaries_json(&[1]));
    let container = ContainerId::new("row");

    sdk.create_story_row(CreateStoryRowOptions::new(container.clone()))
        .await;

    assert!(!document.click_card(&container, 0));
    assert!(document.player().is_none());
}

#[tokio::test]
async fn stylesheet_is_injected_once_and_removed_on_destroy() {
    let (sdk, document, transport) = sdk(&Config::default());
    transport.respond("/api/stories", 200, summaries_json(&[1]));
    transport.respond("/api/stories/1", 200, detail_json(1, 1));
    let container = ContainerId::new("row");

    sdk.create_story_row(CreateStoryRowOptions::new(container.clone()))
        .await;
    sdk.create_story_row(CreateStoryRowOptions::new(container)).await;
    sdk.open_story(OpenStoryOptions::new(1)).await;
    assert_eq!(document.stylesheet_count(), 1);

    sdk.destroy();
    sdk.destroy();
    assert_eq!(document.stylesheet_count(), 0);
    assert_eq!(document.stylesheet_removals(), 1);
}
