//! Story row renderer.
//!
//! Fetches the story list and renders one clickable card per story into a
//! host container. The row never opens the player itself; clicks are routed
//! to the caller's `on_story_click`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::DataClient;
use crate::document::{CardView, ContainerId, Document, RowView, StoryClickHandler};
use crate::styles::StyleRegistrar;

/// Placeholder text while stories load.
pub const LOADING_TEXT: &str = "Loading stories...";
/// Text shown when the story list is empty.
pub const EMPTY_TEXT: &str = "No stories available";

/// Renders story rows into host containers.
pub struct StoryRow {
    client: DataClient,
    styles: Arc<StyleRegistrar>,
    document: Arc<dyn Document>,
    generations: Mutex<RowGenerations>,
}

/// Latest render generation per container.
///
/// Generations come from one counter shared by all containers, so a render
/// started before `clear` can never match one started after it.
#[derive(Default)]
struct RowGenerations {
    counter: u64,
    latest: HashMap<ContainerId, u64>,
}

impl StoryRow {
    /// Create a renderer.
    pub fn new(client: DataClient, styles: Arc<StyleRegistrar>, document: Arc<dyn Document>) -> Self {
        Self {
            client,
            styles,
            document,
            generations: Mutex::new(RowGenerations::default()),
        }
    }

    /// Render a row into `container`, fully replacing its contents.
    ///
    /// Shows a loading placeholder, then either the empty-state message or the
    /// cards in server order. A newer render of the same container always
    /// wins over an older one that resolves later.
    pub async fn render(
        &self,
        container: &ContainerId,
        category: Option<&str>,
        on_story_click: Option<StoryClickHandler>,
    ) {
        self.styles.inject();

        let generation = self.next_generation(container);
        self.document.render_row(container, RowView::Loading, None);

        let stories = self.client.fetch_stories(category).await;

        if !self.is_current(container, generation) {
            tracing::debug!(
                "[MiniStories] Discarding superseded story list for container '{}'",
                container
            );
            return;
        }

        if stories.is_empty() {
            self.document.render_row(container, RowView::Empty, None);
            return;
        }

        let cards = stories.iter().map(CardView::from).collect();
        self.document
            .render_row(container, RowView::Cards(cards), on_story_click);
    }

    /// Forget every container; renders still in flight are discarded.
    pub fn clear(&self) {
        self.generations.lock().latest.clear();
    }

    fn next_generation(&self, container: &ContainerId) -> u64 {
        let mut generations = self.generations.lock();
        generations.counter += 1;
        let generation = generations.counter;
        generations.latest.insert(container.clone(), generation);
        generation
    }

    fn is_current(&self, container: &ContainerId, generation: u64) -> bool {
        self.generations.lock().latest.get(container) == Some(&generation)
    }
}

/// Display text for a non-card row state.
pub fn placeholder_text(view: &RowView) -> Option<&'static str> {
    match view {
        RowView::Loading => Some(LOADING_TEXT),
        RowView::Empty => Some(EMPTY_TEXT),
        RowView::Cards(_) => None,
    }
}
