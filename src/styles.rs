//! Stylesheet registration.
//!
//! The widget's presentation rules are injected into the host document at
//! most once; the flag lives here rather than being queried from the host.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::document::Document;

/// Presentation rules for the story row and the player overlay.
pub const SDK_STYLES: &str = r#"
.ministories-row { display: flex; gap: 1rem; overflow-x: auto; padding: 0.5rem 0; scroll-snap-type: x mandatory; scrollbar-width: none; }
.ministories-row::-webkit-scrollbar { display: none; }
.ministories-card { flex-shrink: 0; width: 140px; cursor: pointer; transition: transform 0.2s ease; scroll-snap-align: start; }
.ministories-card:hover { transform: scale(1.05); }
.ministories-card__cover { width: 100%; aspect-ratio: 9 / 16; border-radius: 12px; overflow: hidden; background: #1a1a1a; border: 3px solid #333; }
.ministories-card__cover img { width: 100%; height: 100%; object-fit: cover; }
.ministories-card__title { font-size: 0.875rem; font-weight: 600; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; color: #fafafa; }
.ministories-card__category { font-size: 0.75rem; color: #888; text-transform: uppercase; }
.ministories-loading { color: #888; padding: 1rem; }
.ministories-player { position: fixed; inset: 0; z-index: 10000; display: flex; align-items: center; justify-content: center; }
.ministories-player__backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.95); cursor: pointer; }
.ministories-player__container { position: relative; width: 100%; max-width: 450px; height: 100%; max-height: 90vh; display: flex; flex-direction: column; }
.ministories-player__progress { color: #fff; text-align: center; font-size: 0.875rem; }
.ministories-debug-overlay { position: fixed; top: 10px; right: 10px; z-index: 10001; background: rgba(0, 0, 0, 0.85); color: #0f0; font-family: monospace; font-size: 12px; padding: 8px 12px; border-radius: 4px; }
"#;

/// Idempotent stylesheet injection and removal.
pub struct StyleRegistrar {
    document: Arc<dyn Document>,
    injected: AtomicBool,
}

impl StyleRegistrar {
    /// Create a registrar for a host document.
    pub fn new(document: Arc<dyn Document>) -> Self {
        Self {
            document,
            injected: AtomicBool::new(false),
        }
    }

    /// Inject the stylesheet unless it is already present.
    pub fn inject(&self) {
        if self
            .injected
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.document.inject_stylesheet(SDK_STYLES);
        }
    }

    /// Remove the stylesheet if it was injected.
    pub fn remove(&self) {
        if self.injected.swap(false, Ordering::AcqRel) {
            self.document.remove_stylesheet();
        }
    }

    /// Whether the stylesheet is currently injected.
    pub fn is_injected(&self) -> bool {
        self.injected.load(Ordering::Acquire)
    }
}
