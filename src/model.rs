//! Story data model as served by the stories API.

use serde::{Deserialize, Serialize};

/// Server-assigned story identifier.
pub type StoryId = i64;

/// Lightweight listing record shown in the story row (no pages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySummary {
    pub id: StoryId,
    pub title: String,
    pub category: String,
    pub cover_url: String,
}

/// One unit of story content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Content kind, currently only `"image"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Media location for the page
    #[serde(rename = "mediaUrl")]
    pub media_url: String,
    /// Optional caption shown under the media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Full story record including the ordered pages.
///
/// Page order defines navigation order; positions are 0-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDetail {
    pub id: StoryId,
    pub title: String,
    pub category: String,
    pub cover_url: String,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl StoryDetail {
    /// Number of pages in the story.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Clamp a requested page index into the valid range.
    ///
    /// Only meaningful for stories with at least one page.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.pages.len().saturating_sub(1))
    }
}
