//! Player state management
//!
//! Contains the central `PlayerState` struct that holds the open story, the
//! current page and the lifecycle phase, plus the open-generation counter
//! that lets a newer `open_story` call win over a slower, older one.

use crate::model::{StoryDetail, StoryId};
use crate::player::render::format_progress;

/// Lifecycle phase of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No story requested or shown
    #[default]
    Closed,
    /// A story detail fetch is in flight
    Loading,
    /// Overlay visible and navigable
    Open,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavResult {
    /// Index moved; carries the new index
    Moved(usize),
    /// At the boundary or not navigable; nothing changed
    Unchanged,
}

/// Story and page of a player that was just closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosedStory {
    pub story_id: StoryId,
    pub last_page_index: usize,
}

/// Central state of the single player instance.
///
/// Invariant: `current_index < story.pages.len()` whenever a story is held.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    // === Visible player ===
    /// Story currently shown in the overlay
    pub story: Option<StoryDetail>,
    /// 0-indexed current page
    pub current_index: usize,

    // === Lifecycle ===
    /// Current phase
    pub phase: Phase,
    /// Generation of the most recent `open_story` call
    generation: u64,
    /// Whether the most recent open is still waiting for its detail
    pending: bool,
}

impl PlayerState {
    /// Create a closed player state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current open generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a story is shown (an overlay exists).
    pub fn has_overlay(&self) -> bool {
        self.story.is_some()
    }

    /// Whether the latest open request is still in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Id of the visible story.
    pub fn story_id(&self) -> Option<StoryId> {
        self.story.as_ref().map(|story| story.id)
    }

    /// Start an open request and return its generation.
    ///
    /// Any previously visible story stays in place until the request
    /// resolves.
    pub fn begin_open(&mut self) -> u64 {
        self.generation += 1;
        self.pending = true;
        self.phase = Phase::Loading;
        self.generation
    }

    /// Whether `generation` belongs to the latest open request.
    pub fn is_current(&self, generation: u64) -> bool {
        self.pending && self.generation == generation
    }

    /// Abandon the latest open request after a failed fetch.
    ///
    /// A previously visible story stays open untouched.
    pub fn abort_open(&mut self) {
        self.pending = false;
        self.phase = if self.has_overlay() {
            Phase::Open
        } else {
            Phase::Closed
        };
    }

    /// Make any open request still in flight stale.
    ///
    /// The visible story, if any, is kept; its detail arriving later is
    /// discarded like a superseded open.
    pub fn cancel_pending(&mut self) {
        self.generation += 1;
        self.pending = false;
        self.phase = if self.has_overlay() {
            Phase::Open
        } else {
            Phase::Closed
        };
    }

    /// Install a fetched story as the visible one.
    ///
    /// `start_index` is clamped into the story's page range.
    pub fn install(&mut self, story: StoryDetail, start_index: usize) {
        self.current_index = story.clamp_index(start_index);
        self.story = Some(story);
        self.pending = false;
        self.phase = Phase::Open;
    }

    /// Move to the next page; no-op at the last page or outside `Open`.
    pub fn next_page(&mut self) -> NavResult {
        match (&self.story, self.phase) {
            (Some(story), Phase::Open) if self.current_index + 1 < story.page_count() => {
                self.current_index += 1;
                NavResult::Moved(self.current_index)
            }
            _ => NavResult::Unchanged,
        }
    }

    /// Move to the previous page; no-op at the first page or outside `Open`.
    pub fn prev_page(&mut self) -> NavResult {
        match (&self.story, self.phase) {
            (Some(_), Phase::Open) if self.current_index > 0 => {
                self.current_index -= 1;
                NavResult::Moved(self.current_index)
            }
            _ => NavResult::Unchanged,
        }
    }

    /// Close the visible story, if any.
    ///
    /// An open request still in flight is not cancelled and keeps the phase
    /// at `Loading`.
    pub fn close(&mut self) -> Option<ClosedStory> {
        let story = self.story.take()?;
        let closed = ClosedStory {
            story_id: story.id,
            last_page_index: self.current_index,
        };
        self.current_index = 0;
        self.phase = if self.pending {
            Phase::Loading
        } else {
            Phase::Closed
        };
        Some(closed)
    }

    /// Progress text for the visible story, e.g. `"2 / 3"`.
    pub fn progress_label(&self) -> Option<String> {
        self.story
            .as_ref()
            .map(|story| format_progress(self.current_index, story.page_count()))
    }
}
