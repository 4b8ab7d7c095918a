//! Host document port.
//!
//! The SDK never renders directly; it describes what the host page should
//! show through the `Document` trait and receives pointer and keyboard input
//! through the handlers it registers.
//!
//! - `memory`: `MemoryDocument`, an in-memory document used by tests and the
//!   terminal host

mod memory;

pub use memory::{DebugOverlayNode, MemoryDocument};

use std::fmt;
use std::sync::Arc;

use crate::model::{StoryId, StorySummary};

/// Identifier of a host-supplied container element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(String);

impl ContainerId {
    /// Create a container id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keyboard key, named the way browsers name `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other(String),
}

impl Key {
    /// Parse a DOM key name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Escape" => Self::Escape,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Pointer targets inside the player overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerControl {
    Close,
    Backdrop,
    Previous,
    Next,
}

/// One clickable card in the story row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: StoryId,
    pub title: String,
    pub category: String,
    pub cover_url: String,
}

impl From<&StorySummary> for CardView {
    fn from(story: &StorySummary) -> Self {
        Self {
            id: story.id,
            title: story.title.clone(),
            category: story.category.clone(),
            cover_url: story.cover_url.clone(),
        }
    }
}

/// Contents of a story row container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    /// Placeholder while the story list is loading
    Loading,
    /// No stories to show; not an error
    Empty,
    /// Cards in server order
    Cards(Vec<CardView>),
}

/// What the player overlay shows for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub story_id: StoryId,
    pub title: String,
    pub page_kind: String,
    pub media_url: String,
    /// Omitted when the page has no caption
    pub caption: Option<String>,
    /// 1-indexed progress, `"{current} / {count}"`
    pub progress: String,
    pub show_previous: bool,
    pub show_next: bool,
}

/// Receives card clicks with the clicked story's id.
pub type StoryClickHandler = Arc<dyn Fn(StoryId) + Send + Sync>;
/// Receives pointer activations inside the player overlay.
pub type ControlHandler = Arc<dyn Fn(PlayerControl) + Send + Sync>;
/// Receives document-level key presses.
pub type KeyHandler = Arc<dyn Fn(Key) + Send + Sync>;

/// Handle for a registered key listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The host page as seen by the SDK.
///
/// Implementations must not invoke registered handlers from inside any of
/// these calls; handlers run only in response to host input.
pub trait Document: Send + Sync {
    /// Add the SDK stylesheet node.
    fn inject_stylesheet(&self, css: &str);

    /// Remove the SDK stylesheet node.
    fn remove_stylesheet(&self);

    /// Replace a container's contents with `view`.
    fn render_row(
        &self,
        container: &ContainerId,
        view: RowView,
        on_story_click: Option<StoryClickHandler>,
    );

    /// Attach the player overlay.
    fn mount_player(&self, view: PlayerView, on_control: ControlHandler);

    /// Re-render the page region of the attached player overlay.
    fn update_player(&self, view: PlayerView);

    /// Detach the player overlay.
    fn unmount_player(&self);

    /// Lock or unlock page scrolling behind the overlay.
    fn set_scroll_locked(&self, locked: bool);

    /// Register a document-level key listener.
    fn add_key_listener(&self, handler: KeyHandler) -> ListenerId;

    /// Unregister a key listener.
    fn remove_key_listener(&self, id: ListenerId);

    /// Attach the debug overlay with its title.
    fn mount_debug_overlay(&self, title: &str);

    /// Replace the debug overlay's metric lines.
    fn update_debug_overlay(&self, lines: &[String]);

    /// Detach the debug overlay.
    fn unmount_debug_overlay(&self);
}
