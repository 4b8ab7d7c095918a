//! Analytics event reporting.
//!
//! Events are posted as JSON to `{endpoint}/api/events` from a spawned task.
//! Emission never blocks the caller and failures are only logged.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::{ApiUrls, Transport};
use crate::error::SdkError;
use crate::model::StoryId;
use crate::session::Session;

/// Kind of analytics event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    StoryOpen,
    PageView,
    StoryClose,
}

impl EventKind {
    /// Wire name of the event kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StoryOpen => "story_open",
            Self::PageView => "page_view",
            Self::StoryClose => "story_close",
        }
    }
}

/// Event body as posted to the events endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<StoryId>,
    pub payload: Map<String, Value>,
}

impl AnalyticsEvent {
    /// Build an event, stamping the payload with `user_agent` and an
    /// ISO-8601 `timestamp`.
    pub fn new(
        kind: EventKind,
        story_id: Option<StoryId>,
        payload: Option<Map<String, Value>>,
        user_agent: &str,
    ) -> Self {
        let mut payload = payload.unwrap_or_default();
        payload.insert("user_agent".to_string(), Value::from(user_agent));
        payload.insert(
            "timestamp".to_string(),
            Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        Self {
            kind,
            story_id,
            payload,
        }
    }
}

/// Fire-and-forget analytics reporter.
#[derive(Clone)]
pub struct AnalyticsEmitter {
    session: Session,
    transport: Arc<dyn Transport>,
    urls: ApiUrls,
    user_agent: String,
}

impl AnalyticsEmitter {
    /// Create an emitter over a session and transport.
    pub fn new(
        session: Session,
        transport: Arc<dyn Transport>,
        urls: ApiUrls,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            session,
            transport,
            urls,
            user_agent: user_agent.into(),
        }
    }

    /// Report that a story was opened.
    pub fn story_open(&self, story_id: StoryId) {
        self.emit(EventKind::StoryOpen, story_id, None);
    }

    /// Report that a page became visible.
    pub fn page_view(&self, story_id: StoryId, page_index: usize) {
        self.emit(
            EventKind::PageView,
            story_id,
            Some(single_field("page_index", page_index)),
        );
    }

    /// Report that a story was closed on `last_page_index`.
    pub fn story_close(&self, story_id: StoryId, last_page_index: usize) {
        self.emit(
            EventKind::StoryClose,
            story_id,
            Some(single_field("last_page_index", last_page_index)),
        );
    }

    /// Emit an event without waiting for delivery.
    ///
    /// Dropped with a warning when the session is not initialized or no
    /// tokio runtime is available to carry the request.
    pub fn emit(&self, kind: EventKind, story_id: StoryId, payload: Option<Map<String, Value>>) {
        let endpoint = match self.session.endpoint() {
            Ok(endpoint) => endpoint,
            Err(_) => {
                tracing::warn!(
                    "[MiniStories] Cannot send {} event - SDK not initialized",
                    kind.as_str()
                );
                return;
            }
        };
        let event = AnalyticsEvent::new(kind, Some(story_id), payload, &self.user_agent);

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!(
                    "[MiniStories] Dropping {} event - no async runtime available",
                    kind.as_str()
                );
                return;
            }
        };

        let transport = Arc::clone(&self.transport);
        let urls = self.urls.clone();
        runtime.spawn(async move {
            if let Err(e) = send(transport.as_ref(), &urls, &endpoint, &event).await {
                tracing::error!("[MiniStories] Failed to send event: {}", e);
            }
        });
    }
}

async fn send(
    transport: &dyn Transport,
    urls: &ApiUrls,
    endpoint: &str,
    event: &AnalyticsEvent,
) -> Result<(), SdkError> {
    let url = urls.events(endpoint)?;
    let body = serde_json::to_value(event)?;
    let response = transport.post_json(url, body).await?;
    if !response.is_success() {
        return Err(SdkError::Http {
            status: response.status,
        });
    }
    tracing::debug!("[MiniStories] Sent {} event", event.kind.as_str());
    Ok(())
}

fn single_field(key: &str, value: usize) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key.to_string(), Value::from(value));
    map
}
