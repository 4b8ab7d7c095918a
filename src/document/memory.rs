//! In-memory host document.
//!
//! Keeps the rendered state the way a browser DOM would and lets a driver
//! (a test, or the terminal host) deliver key presses and clicks to the
//! handlers the SDK registered.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::{
    ContainerId, ControlHandler, Document, Key, KeyHandler, ListenerId, PlayerControl, PlayerView,
    RowView, StoryClickHandler,
};

/// Attached debug overlay contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugOverlayNode {
    pub title: String,
    pub lines: Vec<String>,
}

struct MountedRow {
    view: RowView,
    on_story_click: Option<StoryClickHandler>,
}

struct MountedPlayer {
    view: PlayerView,
    on_control: ControlHandler,
}

#[derive(Default)]
struct DomState {
    stylesheets: usize,
    stylesheet_removals: usize,
    rows: HashMap<ContainerId, MountedRow>,
    player: Option<MountedPlayer>,
    player_mounts: usize,
    scroll_locked: bool,
    listeners: Vec<(ListenerId, KeyHandler)>,
    next_listener: u64,
    debug_overlay: Option<DebugOverlayNode>,
}

/// Headless document backed by plain in-memory state.
#[derive(Default)]
pub struct MemoryDocument {
    state: Mutex<DomState>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    // === Driver input ===

    /// Deliver a key press to every registered key listener.
    ///
    /// Returns the number of listeners that received the key.
    pub fn press_key(&self, key: Key) -> usize {
        let handlers: Vec<KeyHandler> = self
            .state
            .lock()
            .listeners
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in &handlers {
            handler(key.clone());
        }
        handlers.len()
    }

    /// Click a control of the mounted player.
    ///
    /// Returns false if no player is mounted.
    pub fn click_control(&self, control: PlayerControl) -> bool {
        let handler = self
            .state
            .lock()
            .player
            .as_ref()
            .map(|player| player.on_control.clone());
        match handler {
            Some(handler) => {
                handler(control);
                true
            }
            None => false,
        }
    }

    /// Click the card at `index` in a container.
    ///
    /// Returns false if there is no such card or the row has no click handler.
    pub fn click_card(&self, container: &ContainerId, index: usize) -> bool {
        let target = {
            let state = self.state.lock();
            state.rows.get(container).and_then(|row| match &row.view {
                RowView::Cards(cards) => cards
                    .get(index)
                    .and_then(|card| row.on_story_click.clone().map(|handler| (handler, card.id))),
                _ => None,
            })
        };
        match target {
            Some((handler, id)) => {
                handler(id);
                true
            }
            None => false,
        }
    }

    // === Inspection ===

    /// Number of SDK stylesheet nodes present.
    pub fn stylesheet_count(&self) -> usize {
        self.state.lock().stylesheets
    }

    /// Number of stylesheet removals performed.
    pub fn stylesheet_removals(&self) -> usize {
        self.state.lock().stylesheet_removals
    }

    /// Current contents of a container.
    pub fn row(&self, container: &ContainerId) -> Option<RowView> {
        self.state
            .lock()
            .rows
            .get(container)
            .map(|row| row.view.clone())
    }

    /// Currently mounted player view.
    pub fn player(&self) -> Option<PlayerView> {
        self.state
            .lock()
            .player
            .as_ref()
            .map(|player| player.view.clone())
    }

    /// How many times a player overlay was mounted.
    pub fn player_mounts(&self) -> usize {
        self.state.lock().player_mounts
    }

    /// Whether page scroll is locked.
    pub fn scroll_locked(&self) -> bool {
        self.state.lock().scroll_locked
    }

    /// Number of registered key listeners.
    pub fn key_listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }

    /// Currently attached debug overlay.
    pub fn debug_overlay(&self) -> Option<DebugOverlayNode> {
        self.state.lock().debug_overlay.clone()
    }
}

impl Document for MemoryDocument {
    fn inject_stylesheet(&self, _css: &str) {
        self.state.lock().stylesheets += 1;
    }

    fn remove_stylesheet(&self) {
        let mut state = self.state.lock();
        state.stylesheets = state.stylesheets.saturating_sub(1);
        state.stylesheet_removals += 1;
    }

    fn render_row(
        &self,
        container: &ContainerId,
        view: RowView,
        on_story_click: Option<StoryClickHandler>,
    ) {
        self.state.lock().rows.insert(
            container.clone(),
            MountedRow {
                view,
                on_story_click,
            },
        );
    }

    fn mount_player(&self, view: PlayerView, on_control: ControlHandler) {
        let mut state = self.state.lock();
        state.player = Some(MountedPlayer { view, on_control });
        state.player_mounts += 1;
    }

    fn update_player(&self, view: PlayerView) {
        if let Some(player) = self.state.lock().player.as_mut() {
            player.view = view;
        }
    }

    fn unmount_player(&self) {
        self.state.lock().player = None;
    }

    fn set_scroll_locked(&self, locked: bool) {
        self.state.lock().scroll_locked = locked;
    }

    fn add_key_listener(&self, handler: KeyHandler) -> ListenerId {
        let mut state = self.state.lock();
        state.next_listener += 1;
        let id = ListenerId(state.next_listener);
        state.listeners.push((id, handler));
        id
    }

    fn remove_key_listener(&self, id: ListenerId) {
        self.state
            .lock()
            .listeners
            .retain(|(listener, _)| *listener != id);
    }

    fn mount_debug_overlay(&self, title: &str) {
        self.state.lock().debug_overlay = Some(DebugOverlayNode {
            title: title.to_string(),
            lines: Vec::new(),
        });
    }

    fn update_debug_overlay(&self, lines: &[String]) {
        if let Some(overlay) = self.state.lock().debug_overlay.as_mut() {
            overlay.lines = lines.to_vec();
        }
    }

    fn unmount_debug_overlay(&self) {
        self.state.lock().debug_overlay = None;
    }
}
