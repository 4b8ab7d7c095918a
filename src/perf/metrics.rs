//! Lifecycle timestamps and the durations derived from them.

use std::time::{Duration, Instant};

/// Raw timestamps for the tracked lifecycle phases.
///
/// Reset at every player open; stale values from an earlier open may linger
/// until overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerfMetrics {
    pub player_open_start: Option<Instant>,
    pub player_open_end: Option<Instant>,
    pub first_page_render_start: Option<Instant>,
    pub first_page_render_end: Option<Instant>,
    pub page_render_start: Option<Instant>,
    pub page_render_end: Option<Instant>,
}

/// Millisecond durations for every bracket with both endpoints present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivedMetrics {
    pub player_open_ms: Option<u64>,
    pub first_page_render_ms: Option<u64>,
    pub last_page_render_ms: Option<u64>,
}

impl PerfMetrics {
    /// Derive durations; a bracket missing either endpoint yields `None`.
    pub fn derive(&self) -> DerivedMetrics {
        DerivedMetrics {
            player_open_ms: bracket_ms(self.player_open_start, self.player_open_end),
            first_page_render_ms: bracket_ms(
                self.first_page_render_start,
                self.first_page_render_end,
            ),
            last_page_render_ms: bracket_ms(self.page_render_start, self.page_render_end),
        }
    }
}

impl DerivedMetrics {
    /// Whether no metric is available yet.
    pub fn is_empty(&self) -> bool {
        self.player_open_ms.is_none()
            && self.first_page_render_ms.is_none()
            && self.last_page_render_ms.is_none()
    }

    /// Human-readable lines for the debug overlay.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(ms) = self.player_open_ms {
            lines.push(format!("Player open: {}ms", ms));
        }
        if let Some(ms) = self.first_page_render_ms {
            lines.push(format!("First page render: {}ms", ms));
        }
        if let Some(ms) = self.last_page_render_ms {
            lines.push(format!("Last page render: {}ms", ms));
        }
        if lines.is_empty() {
            lines.push("No metrics yet".to_string());
        }
        lines
    }
}

/// Round a duration to the nearest whole millisecond.
pub fn round_ms(duration: Duration) -> u64 {
    (duration.as_secs_f64() * 1000.0).round() as u64
}

fn bracket_ms(start: Option<Instant>, end: Option<Instant>) -> Option<u64> {
    match (start, end) {
        (Some(start), Some(end)) => Some(round_ms(end.saturating_duration_since(start))),
        _ => None,
    }
}
