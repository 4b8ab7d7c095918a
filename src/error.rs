//! SDK error taxonomy.
//!
//! None of these ever cross the public SDK boundary: every variant is logged
//! where it is caught and turned into an empty / none / no-op result.

use crate::model::StoryId;

/// Errors that can occur inside the SDK.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    #[error("SDK not initialized. Call initialize() first.")]
    NotInitialized,

    #[error("Network failure: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Story {id} not found")]
    NotFound { id: StoryId },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Story {id} has no pages")]
    EmptyStory { id: StoryId },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}
