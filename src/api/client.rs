//! Data client for story summaries and story details.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{ApiUrls, Transport};
use crate::error::SdkError;
use crate::model::{StoryDetail, StoryId, StorySummary};
use crate::session::Session;

/// Fetches stories from the configured endpoint.
///
/// Failures never reach the caller: they are logged and collapse to an empty
/// list or `None`. There are no retries.
#[derive(Clone)]
pub struct DataClient {
    session: Session,
    transport: Arc<dyn Transport>,
    urls: ApiUrls,
}

impl DataClient {
    /// Create a client over a session and transport.
    pub fn new(session: Session, transport: Arc<dyn Transport>, urls: ApiUrls) -> Self {
        Self {
            session,
            transport,
            urls,
        }
    }

    /// Fetch story summaries, optionally filtered server-side by category.
    ///
    /// Returns an empty list on any failure.
    pub async fn fetch_stories(&self, category: Option<&str>) -> Vec<StorySummary> {
        match self.try_fetch_stories(category).await {
            Ok(stories) => stories,
            Err(e) => {
                tracing::error!("[MiniStories] Failed to fetch stories: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetch one story with its pages.
    ///
    /// Returns `None` on any failure, including a story without pages.
    pub async fn fetch_story_detail(&self, id: StoryId) -> Option<StoryDetail> {
        match self.try_fetch_story_detail(id).await {
            Ok(story) => Some(story),
            Err(e) => {
                tracing::error!("[MiniStories] Failed to fetch story detail {}: {}", id, e);
                None
            }
        }
    }

    /// Fetch story summaries, surfacing the failure reason.
    pub async fn try_fetch_stories(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<StorySummary>, SdkError> {
        let endpoint = self.session.endpoint()?;
        let url = self.urls.stories(&endpoint, category)?;
        self.get_json(url).await
    }

    /// Fetch one story with its pages, surfacing the failure reason.
    pub async fn try_fetch_story_detail(&self, id: StoryId) -> Result<StoryDetail, SdkError> {
        let endpoint = self.session.endpoint()?;
        let url = self.urls.story_detail(&endpoint, id)?;
        let story: StoryDetail = self.get_json(url).await.map_err(|e| match e {
            SdkError::Http { status: 404 } => SdkError::NotFound { id },
            other => other,
        })?;
        if story.pages.is_empty() {
            return Err(SdkError::EmptyStory { id });
        }
        Ok(story)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: reqwest::Url) -> Result<T, SdkError> {
        tracing::debug!("[MiniStories] GET {}", url);
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(SdkError::Http {
                status: response.status,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}
