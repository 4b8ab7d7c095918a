//! Stories API access.
//!
//! - `transport`: the `Transport` trait and its reqwest implementation
//! - `client`: `DataClient`, which fetches story summaries and details
//!
//! URL layout (relative to the configured endpoint):
//! - `GET  /api/stories[?category=]`
//! - `GET  /api/stories/{id}`
//! - `POST /api/events`

mod client;
mod transport;

pub use client::DataClient;
pub use transport::{HttpResponse, ReqwestTransport, Transport};

use reqwest::Url;

use crate::error::SdkError;
use crate::model::StoryId;

/// Resolves API URLs against the configured endpoint.
///
/// An empty endpoint means "same origin as the host page" and resolves
/// against `page_origin`.
#[derive(Debug, Clone, Default)]
pub struct ApiUrls {
    page_origin: Option<String>,
}

impl ApiUrls {
    /// Create a resolver for a host page origin.
    pub fn new(page_origin: Option<String>) -> Self {
        Self { page_origin }
    }

    /// `{endpoint}/api/stories[?category=...]`
    pub fn stories(&self, endpoint: &str, category: Option<&str>) -> Result<Url, SdkError> {
        let mut url = self.join(endpoint, "/api/stories")?;
        if let Some(category) = category {
            url.query_pairs_mut().append_pair("category", category);
        }
        Ok(url)
    }

    /// `{endpoint}/api/stories/{id}`
    pub fn story_detail(&self, endpoint: &str, id: StoryId) -> Result<Url, SdkError> {
        self.join(endpoint, &format!("/api/stories/{}", id))
    }

    /// `{endpoint}/api/events`
    pub fn events(&self, endpoint: &str) -> Result<Url, SdkError> {
        self.join(endpoint, "/api/events")
    }

    fn join(&self, endpoint: &str, path: &str) -> Result<Url, SdkError> {
        let base = if endpoint.is_empty() {
            self.page_origin.as_deref().ok_or_else(|| {
                SdkError::InvalidUrl("same-origin endpoint without a host page URL".to_string())
            })?
        } else {
            endpoint
        };
        let raw = format!("{}{}", base.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| SdkError::InvalidUrl(format!("{}: {}", raw, e)))
    }
}
