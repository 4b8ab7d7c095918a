//! `MiniStories`: the only entry point exposed to host pages.
//!
//! Owns the single session, player and stylesheet of an embedding and checks
//! initialization before delegating to the row renderer or the player.
//! Nothing here ever returns an error to the host; failures are logged and
//! the call becomes a no-op.

use std::sync::{Arc, Weak};

use crate::analytics::AnalyticsEmitter;
use crate::api::{ApiUrls, DataClient, ReqwestTransport, Transport};
use crate::config::Config;
use crate::document::{ContainerId, Document, StoryClickHandler};
use crate::error::SdkError;
use crate::model::StoryId;
use crate::perf::Instrumentation;
use crate::player::{CloseCallback, Player, PlayerState};
use crate::row::StoryRow;
use crate::session::Session;
use crate::styles::StyleRegistrar;

/// Options for [`MiniStories::initialize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// API endpoint; empty means same origin as the host page
    pub endpoint: String,
}

impl InitOptions {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

/// Options for [`MiniStories::create_story_row`].
#[derive(Clone)]
pub struct CreateStoryRowOptions {
    pub container: ContainerId,
    pub category: Option<String>,
    pub on_story_click: Option<StoryClickHandler>,
}

impl CreateStoryRowOptions {
    pub fn new(container: ContainerId) -> Self {
        Self {
            container,
            category: None,
            on_story_click: None,
        }
    }

    /// Only list stories in `category`.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Options for [`MiniStories::open_story`].
pub struct OpenStoryOptions {
    pub story_id: StoryId,
    /// Page to start on; clamped into the story's page range
    pub start_index: usize,
    /// Run once when this player closes
    pub on_close: Option<CloseCallback>,
}

impl OpenStoryOptions {
    pub fn new(story_id: StoryId) -> Self {
        Self {
            story_id,
            start_index: 0,
            on_close: None,
        }
    }

    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn with_on_close(mut self, on_close: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }
}

struct SdkInner {
    session: Session,
    styles: Arc<StyleRegistrar>,
    row: StoryRow,
    player: Arc<Player>,
}

/// An SDK embedding bound to one host document.
#[derive(Clone)]
pub struct MiniStories {
    inner: Arc<SdkInner>,
}

impl MiniStories {
    /// Create an embedding that talks HTTP through reqwest.
    pub fn new(document: Arc<dyn Document>, config: &Config) -> Self {
        let transport = Arc::new(ReqwestTransport::new(
            config.request_timeout(),
            &config.user_agent,
        ));
        Self::with_transport(document, transport, config)
    }

    /// Create an embedding with a custom transport.
    pub fn with_transport(
        document: Arc<dyn Document>,
        transport: Arc<dyn Transport>,
        config: &Config,
    ) -> Self {
        let session = Session::new();
        let urls = ApiUrls::new(config.page_origin());
        let debug = config.debug_mode();
        if debug {
            tracing::debug!("[MiniStories] Debug overlay enabled");
        }

        let client = DataClient::new(session.clone(), transport.clone(), urls.clone());
        let analytics =
            AnalyticsEmitter::new(session.clone(), transport, urls, config.user_agent.clone());
        let styles = Arc::new(StyleRegistrar::new(document.clone()));
        let perf = Arc::new(Instrumentation::new(document.clone(), debug));
        let row = StoryRow::new(client.clone(), styles.clone(), document.clone());
        let player = Player::new(client, analytics, perf, styles.clone(), document);

        Self {
            inner: Arc::new(SdkInner {
                session,
                styles,
                row,
                player,
            }),
        }
    }

    /// Configure the endpoint. Calling again overwrites it.
    pub fn initialize(&self, options: InitOptions) {
        tracing::info!(
            "[MiniStories] Initialized with endpoint '{}'",
            options.endpoint
        );
        self.inner.session.initialize(options.endpoint);
    }

    /// Whether `initialize` was called since construction or the last `destroy`.
    pub fn is_initialized(&self) -> bool {
        self.inner.session.is_initialized()
    }

    /// Render a story row into `options.container`.
    pub async fn create_story_row(&self, options: CreateStoryRowOptions) {
        if self.check_initialized("create_story_row").is_err() {
            return;
        }
        self.inner
            .row
            .render(
                &options.container,
                options.category.as_deref(),
                options.on_story_click,
            )
            .await;
    }

    /// Open a story in the player.
    pub async fn open_story(&self, options: OpenStoryOptions) {
        if self.check_initialized("open_story").is_err() {
            return;
        }
        self.inner
            .player
            .open_story(options.story_id, options.start_index, options.on_close)
            .await;
    }

    /// Close the player if it is open.
    pub fn close_story(&self) {
        self.inner.player.close_story();
    }

    /// Close the player, forget the endpoint and remove the stylesheet.
    ///
    /// Opens and row renders still in flight are discarded when they resolve.
    pub fn destroy(&self) {
        self.inner.player.reset();
        self.inner.row.clear();
        self.inner.session.clear();
        self.inner.styles.remove();
        tracing::info!("[MiniStories] Destroyed");
    }

    /// Click handler that opens the clicked story.
    ///
    /// The open runs as a task on the current tokio runtime; without one the
    /// click is dropped with a warning.
    pub fn open_on_click(&self) -> StoryClickHandler {
        let sdk: Weak<SdkInner> = Arc::downgrade(&self.inner);
        Arc::new(move |story_id| {
            let Some(inner) = sdk.upgrade() else {
                return;
            };
            let sdk = MiniStories { inner };
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    handle.spawn(async move {
                        sdk.open_story(OpenStoryOptions::new(story_id)).await;
                    });
                }
                Err(_) => {
                    tracing::warn!(
                        "[MiniStories] No async runtime, ignoring click on story {}",
                        story_id
                    );
                }
            }
        })
    }

    /// Copy of the player state.
    pub fn player_state(&self) -> PlayerState {
        self.inner.player.state()
    }

    /// Performance instrumentation of the player.
    pub fn perf(&self) -> &Instrumentation {
        self.inner.player.perf()
    }

    fn check_initialized(&self, operation: &str) -> Result<(), SdkError> {
        if self.inner.session.is_initialized() {
            return Ok(());
        }
        let err = SdkError::NotInitialized;
        tracing::error!("[MiniStories] {}: {}", operation, err);
        Err(err)
    }
}
