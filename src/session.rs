//! Session state: configured endpoint and initialized flag.
//!
//! One `Session` exists per SDK embedding. It is cheap to clone; every clone
//! observes the same state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::SdkError;

/// Snapshot of the session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Configured endpoint (`Some("")` means same origin as the host page)
    pub endpoint: Option<String>,
    /// Whether `initialize` has been called since the last `destroy`
    pub initialized: bool,
}

/// Shared handle to the session configuration.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionConfig>>,
}

impl Session {
    /// Create an uninitialized session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint and mark the session initialized.
    ///
    /// Calling again simply overwrites the endpoint.
    pub fn initialize(&self, endpoint: impl Into<String>) {
        let mut config = self.inner.write();
        config.endpoint = Some(endpoint.into());
        config.initialized = true;
    }

    /// Clear the endpoint and mark the session uninitialized.
    pub fn clear(&self) {
        *self.inner.write() = SessionConfig::default();
    }

    /// Whether the session is initialized.
    pub fn is_initialized(&self) -> bool {
        self.inner.read().initialized
    }

    /// Configured endpoint, or `NotInitialized`.
    pub fn endpoint(&self) -> Result<String, SdkError> {
        let config = self.inner.read();
        match (&config.endpoint, config.initialized) {
            (Some(endpoint), true) => Ok(endpoint.clone()),
            _ => Err(SdkError::NotInitialized),
        }
    }

    /// Copy of the current configuration.
    pub fn snapshot(&self) -> SessionConfig {
        self.inner.read().clone()
    }
}
