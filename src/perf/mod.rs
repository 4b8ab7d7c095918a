//! Performance instrumentation for the player lifecycle.
//!
//! Two bracketed phases are tracked: the overall player open (from the
//! `open_story` call to the first page being attached) and each page render.
//! When debug mode is active, every mark redraws a small overlay listing the
//! metrics available so far.

mod metrics;
mod overlay;

pub use metrics::{round_ms, DerivedMetrics, PerfMetrics};
pub use overlay::{DebugOverlay, DEBUG_OVERLAY_TITLE};

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use crate::document::Document;

/// Records lifecycle marks and drives the optional debug overlay.
pub struct Instrumentation {
    metrics: Mutex<PerfMetrics>,
    overlay: DebugOverlay,
}

impl Instrumentation {
    /// Create instrumentation; `debug` gates whether the overlay is ever shown.
    pub fn new(document: Arc<dyn Document>, debug: bool) -> Self {
        Self {
            metrics: Mutex::new(PerfMetrics::default()),
            overlay: DebugOverlay::new(document, debug),
        }
    }

    /// Whether the debug overlay is enabled for this embedding.
    pub fn debug_enabled(&self) -> bool {
        self.overlay.enabled()
    }

    /// Forget all marks and start a player open at `started`.
    ///
    /// Called once the opened story is about to be shown, so a failed open
    /// leaves the metrics of the visible story alone.
    pub fn begin_open(&self, started: Instant) {
        *self.metrics.lock() = PerfMetrics {
            player_open_start: Some(started),
            ..PerfMetrics::default()
        };
        self.refresh();
    }

    pub fn mark_player_open_start(&self) {
        self.mark(|m, now| m.player_open_start = Some(now));
    }

    pub fn mark_player_open_end(&self) {
        self.mark(|m, now| m.player_open_end = Some(now));
    }

    pub fn mark_first_page_render_start(&self) {
        self.mark(|m, now| m.first_page_render_start = Some(now));
    }

    pub fn mark_first_page_render_end(&self) {
        self.mark(|m, now| m.first_page_render_end = Some(now));
    }

    pub fn mark_page_render_start(&self) {
        self.mark(|m, now| m.page_render_start = Some(now));
    }

    pub fn mark_page_render_end(&self) {
        self.mark(|m, now| m.page_render_end = Some(now));
    }

    /// Copy of the raw marks.
    pub fn snapshot(&self) -> PerfMetrics {
        self.metrics.lock().clone()
    }

    /// Durations available so far.
    pub fn metrics(&self) -> DerivedMetrics {
        self.metrics.lock().derive()
    }

    /// Attach the debug overlay (debug mode only, at most once).
    pub fn show_overlay(&self) {
        if self.overlay.show() {
            self.refresh();
        }
    }

    /// Detach the debug overlay if present.
    pub fn hide_overlay(&self) {
        self.overlay.hide();
    }

    /// Whether the debug overlay is attached.
    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    fn mark(&self, update: impl FnOnce(&mut PerfMetrics, Instant)) {
        update(&mut *self.metrics.lock(), Instant::now());
        self.refresh();
    }

    fn refresh(&self) {
        if self.overlay.is_visible() {
            let lines = self.metrics().lines();
            self.overlay.update(&lines);
        }
    }
}
