//! Debug overlay presence tracking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::document::Document;

/// Title text of the debug overlay.
pub const DEBUG_OVERLAY_TITLE: &str = "MiniStories Debug";

/// Single fixed-position overlay node, created lazily in debug mode.
pub struct DebugOverlay {
    document: Arc<dyn Document>,
    enabled: bool,
    visible: AtomicBool,
}

impl DebugOverlay {
    /// Create an overlay handle; nothing is attached until `show`.
    pub fn new(document: Arc<dyn Document>, enabled: bool) -> Self {
        Self {
            document,
            enabled,
            visible: AtomicBool::new(false),
        }
    }

    /// Whether debug mode is active.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the overlay is attached.
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }

    /// Attach the overlay. Returns true if it was newly attached.
    pub fn show(&self) -> bool {
        if !self.enabled {
            return false;
        }
        let attached = self
            .visible
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if attached {
            self.document.mount_debug_overlay(DEBUG_OVERLAY_TITLE);
        }
        attached
    }

    /// Replace the metric lines of an attached overlay.
    pub fn update(&self, lines: &[String]) {
        if self.is_visible() {
            self.document.update_debug_overlay(lines);
        }
    }

    /// Detach the overlay if attached.
    pub fn hide(&self) {
        if self.visible.swap(false, Ordering::AcqRel) {
            self.document.unmount_debug_overlay();
        }
    }
}
