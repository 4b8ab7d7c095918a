//! The player: open / navigate / close state machine.
//!
//! Exactly one player exists per SDK embedding. It owns the overlay for the
//! whole time a story is shown, and every close trigger (API call, close
//! button, backdrop, Escape) runs the same teardown routine.

use std::sync::{Arc, Weak};
use std::time::Instant;

use parking_lot::Mutex;

use crate::analytics::AnalyticsEmitter;
use crate::api::DataClient;
use crate::document::{Document, Key, ListenerId, PlayerControl};
use crate::model::StoryId;
use crate::perf::Instrumentation;
use crate::player::input::{self, PlayerCommand};
use crate::player::render::build_player_view;
use crate::player::state::{NavResult, PlayerState};
use crate::styles::StyleRegistrar;

/// Callback run once when the player it was registered with closes.
pub type CloseCallback = Box<dyn FnOnce() + Send>;

struct PlayerInner {
    state: PlayerState,
    key_listener: Option<ListenerId>,
    on_close: Option<CloseCallback>,
}

/// Fullscreen story player.
pub struct Player {
    inner: Mutex<PlayerInner>,
    client: DataClient,
    analytics: AnalyticsEmitter,
    perf: Arc<Instrumentation>,
    styles: Arc<StyleRegistrar>,
    document: Arc<dyn Document>,
}

impl Player {
    /// Create the player.
    pub fn new(
        client: DataClient,
        analytics: AnalyticsEmitter,
        perf: Arc<Instrumentation>,
        styles: Arc<StyleRegistrar>,
        document: Arc<dyn Document>,
    ) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(PlayerInner {
                state: PlayerState::new(),
                key_listener: None,
                on_close: None,
            }),
            client,
            analytics,
            perf,
            styles,
            document,
        })
    }

    /// Copy of the current player state.
    pub fn state(&self) -> PlayerState {
        self.inner.lock().state.clone()
    }

    /// Performance instrumentation driven by this player.
    pub fn perf(&self) -> &Instrumentation {
        &self.perf
    }

    /// Open story `id` at `start_index`.
    ///
    /// If another open is issued before this one's detail arrives, this one is
    /// discarded when it resolves. A failed fetch leaves any visible player
    /// untouched.
    pub async fn open_story(
        self: &Arc<Self>,
        id: StoryId,
        start_index: usize,
        on_close: Option<CloseCallback>,
    ) {
        let open_start = Instant::now();
        let generation = self.inner.lock().state.begin_open();

        let detail = self.client.fetch_story_detail(id).await;

        let mut inner = self.inner.lock();
        if !inner.state.is_current(generation) {
            tracing::debug!(
                "[MiniStories] Discarding stale story {} (generation {})",
                id,
                generation
            );
            return;
        }

        let Some(story) = detail else {
            inner.state.abort_open();
            tracing::error!("[MiniStories] Failed to load story: {}", id);
            return;
        };

        if inner.state.has_overlay() {
            self.document.unmount_player();
        }
        inner.state.install(story, start_index);
        inner.on_close = on_close;

        let index = inner.state.current_index;
        let Some(view) = inner
            .state
            .story
            .as_ref()
            .and_then(|story| build_player_view(story, index))
        else {
            return;
        };

        self.perf.begin_open(open_start);
        self.styles.inject();
        self.perf.show_overlay();

        self.perf.mark_first_page_render_start();
        self.perf.mark_page_render_start();
        self.document.mount_player(view, self.control_handler());
        self.perf.mark_page_render_end();
        self.perf.mark_first_page_render_end();

        if inner.key_listener.is_none() {
            inner.key_listener = Some(self.document.add_key_listener(self.key_handler()));
        }
        self.document.set_scroll_locked(true);

        self.analytics.story_open(id);
        self.analytics.page_view(id, index);

        self.perf.mark_player_open_end();
        tracing::info!("[MiniStories] Opened story {} at page {}", id, index);
    }

    /// Show the next page; no-op at the last page or when not open.
    pub fn next_page(&self) {
        self.navigate(PlayerState::next_page);
    }

    /// Show the previous page; no-op at the first page or when not open.
    pub fn prev_page(&self) {
        self.navigate(PlayerState::prev_page);
    }

    /// Close the visible player; no-op if none is shown.
    pub fn close_story(&self) {
        let callback = {
            let mut inner = self.inner.lock();
            let Some(closed) = inner.state.close() else {
                tracing::debug!("[MiniStories] close_story on a closed player ignored");
                return;
            };

            self.analytics
                .story_close(closed.story_id, closed.last_page_index);

            self.document.unmount_player();
            self.document.set_scroll_locked(false);
            if let Some(listener) = inner.key_listener.take() {
                self.document.remove_key_listener(listener);
            }
            self.perf.hide_overlay();
            inner.on_close.take()
        };

        if let Some(callback) = callback {
            callback();
        }
    }

    /// Close the visible story and drop any open still in flight.
    pub fn reset(&self) {
        self.inner.lock().state.cancel_pending();
        self.close_story();
    }

    /// Route a document key press.
    pub fn handle_key(&self, key: Key) {
        if let Some(command) = input::handle_key_event(&key) {
            self.dispatch(command);
        }
    }

    /// Route a pointer activation inside the overlay.
    pub fn handle_control(&self, control: PlayerControl) {
        self.dispatch(input::handle_control(control));
    }

    fn dispatch(&self, command: PlayerCommand) {
        match command {
            PlayerCommand::Next => self.next_page(),
            PlayerCommand::Previous => self.prev_page(),
            PlayerCommand::Close => self.close_story(),
        }
    }

    fn navigate(&self, step: fn(&mut PlayerState) -> NavResult) {
        let mut inner = self.inner.lock();
        let NavResult::Moved(index) = step(&mut inner.state) else {
            return;
        };
        let Some(story) = inner.state.story.as_ref() else {
            return;
        };
        let story_id = story.id;
        let view = build_player_view(story, index);

        self.perf.mark_page_render_start();
        if let Some(view) = view {
            self.document.update_player(view);
        }
        self.perf.mark_page_render_end();

        self.analytics.page_view(story_id, index);
    }

    fn key_handler(self: &Arc<Self>) -> crate::document::KeyHandler {
        let player: Weak<Self> = Arc::downgrade(self);
        Arc::new(move |key| {
            if let Some(player) = player.upgrade() {
                player.handle_key(key);
            }
        })
    }

    fn control_handler(self: &Arc<Self>) -> crate::document::ControlHandler {
        let player: Weak<Self> = Arc::downgrade(self);
        Arc::new(move |control| {
            if let Some(player) = player.upgrade() {
                player.handle_control(control);
            }
        })
    }
}
