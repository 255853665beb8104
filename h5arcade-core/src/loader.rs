//! Catalogue loading: transport abstraction, retry policy, and the state
//! machine consumers observe.
//!
//! The loader owns the in-memory catalogue and its `LoadState`; consumers
//! hold read-only views plus a retry handle. Platform layers supply the
//! transport (browser `fetch` in production, scripted fixtures in tests),
//! mirroring how the rest of the crate stays platform-agnostic.

use crate::catalog::{Catalogue, CatalogueError};
use thiserror::Error;

/// Raw reply from one catalogue fetch. HTTP-level failures are replies,
/// not transport errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The transport itself failed before producing a reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Platform hook for fetching the catalogue resource.
///
/// Implementations also supply the inter-attempt pause so the retry policy
/// suspends however the platform sleeps (a browser timeout in production,
/// nothing at all in tests).
#[allow(async_fn_in_trait)]
pub trait CatalogueTransport {
    /// Fetch the resource at the given site-relative path.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures; HTTP error
    /// statuses come back as a normal [`TransportReply`].
    async fn fetch(&self, path: &str) -> Result<TransportReply, TransportError>;

    /// Suspend for `delay_ms` milliseconds between attempts.
    async fn pause_ms(&self, delay_ms: u32);
}

/// Everything that can go wrong while loading the catalogue. Nothing here
/// is fatal: every kind goes through the retry policy and stays retryable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP {0}: Failed to fetch games")]
    Http(u16),
    #[error("Invalid games data: expected array")]
    Schema,
    #[error("No games available")]
    EmptyInput,
    #[error("No valid games found")]
    NoValidRecords,
}

impl From<CatalogueError> for LoadError {
    fn from(error: CatalogueError) -> Self {
        match error {
            CatalogueError::NotArray => Self::Schema,
            CatalogueError::EmptyInput => Self::EmptyInput,
            CatalogueError::NoValidRecords => Self::NoValidRecords,
        }
    }
}

impl LoadError {
    /// Message surfaced on the catalogue list view.
    #[must_use]
    pub fn list_message(&self) -> String {
        match self {
            Self::Transport(reason) => reason.clone(),
            Self::Http(status) => format!("HTTP {status}: Failed to fetch games"),
            Self::Schema => "Invalid games data: expected array".to_owned(),
            Self::EmptyInput | Self::NoValidRecords => "No valid games found in data".to_owned(),
        }
    }

    /// Message surfaced on the daily-game view.
    #[must_use]
    pub fn daily_message(&self) -> String {
        match self {
            Self::Transport(reason) => reason.clone(),
            Self::Http(status) => format!("Failed to load games: {status}"),
            Self::Schema => "Invalid games data: expected array".to_owned(),
            Self::EmptyInput => "No games available".to_owned(),
            Self::NoValidRecords => "No valid games found".to_owned(),
        }
    }
}

/// The tagged state a consumer observes. Exactly one variant is active; a
/// terminal error clears any previously held catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(Catalogue),
    Error { message: String, retryable: bool },
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn catalogue(&self) -> Option<&Catalogue> {
        match self {
            Self::Ready(catalogue) => Some(catalogue),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Retry policy and resource location for one loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Site-relative path of the catalogue resource.
    pub resource_path: String,
    /// Total attempts per load or retry invocation.
    pub max_attempts: u32,
    /// Linear backoff base; the wait before attempt `n + 1` is
    /// `base_delay_ms * n`. Zero skips the pause entirely.
    pub base_delay_ms: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            resource_path: "/games.json".to_owned(),
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

impl LoaderConfig {
    /// Production policy against a custom resource path.
    #[must_use]
    pub fn for_path(resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            ..Self::default()
        }
    }

    /// Test-mode policy: same attempt budget, no waiting.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            base_delay_ms: 0,
            ..Self::default()
        }
    }
}

/// Fetches, validates, and retries until the catalogue is ready or the
/// attempt budget is spent.
pub struct CatalogueLoader<T> {
    transport: T,
    config: LoaderConfig,
}

impl<T: CatalogueTransport> CatalogueLoader<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, LoaderConfig::default())
    }

    #[must_use]
    pub fn with_config(transport: T, config: LoaderConfig) -> Self {
        Self { transport, config }
    }

    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run the full load protocol: fetch, decode, validate, filter, with up
    /// to `max_attempts` tries and linear backoff in between.
    ///
    /// # Errors
    ///
    /// Returns the error recorded on the final attempt once the budget is
    /// spent. Every error kind is retried the same way; all remain
    /// retryable via a fresh `load`.
    pub async fn load(&self) -> Result<Catalogue, LoadError> {
        let attempts = self.config.max_attempts.max(1);
        let mut last_error = LoadError::NoValidRecords;
        for attempt in 1..=attempts {
            match self.attempt().await {
                Ok(catalogue) => return Ok(catalogue),
                Err(error) => {
                    log::warn!("catalogue load attempt {attempt}/{attempts} failed: {error}");
                    last_error = error;
                }
            }
            if attempt < attempts && self.config.base_delay_ms > 0 {
                self.transport.pause_ms(self.config.base_delay_ms * attempt).await;
            }
        }
        log::error!("catalogue load exhausted {attempts} attempts: {last_error}");
        Err(last_error)
    }

    async fn attempt(&self) -> Result<Catalogue, LoadError> {
        let reply = self
            .transport
            .fetch(&self.config.resource_path)
            .await
            .map_err(|TransportError(reason)| LoadError::Transport(reason))?;
        if !reply.is_success() {
            return Err(LoadError::Http(reply.status));
        }
        Ok(Catalogue::from_payload(&reply.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_success_is_the_2xx_range() {
        let reply = |status| TransportReply {
            status,
            body: String::new(),
        };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(199).is_success());
        assert!(!reply(301).is_success());
        assert!(!reply(404).is_success());
        assert!(!reply(500).is_success());
    }

    #[test]
    fn list_messages_match_the_list_surface() {
        assert_eq!(
            LoadError::Http(404).list_message(),
            "HTTP 404: Failed to fetch games"
        );
        assert_eq!(
            LoadError::Schema.list_message(),
            "Invalid games data: expected array"
        );
        assert_eq!(
            LoadError::EmptyInput.list_message(),
            "No valid games found in data"
        );
        assert_eq!(
            LoadError::NoValidRecords.list_message(),
            "No valid games found in data"
        );
        assert_eq!(
            LoadError::Transport("Failed to fetch".to_owned()).list_message(),
            "Failed to fetch"
        );
    }

    #[test]
    fn daily_messages_match_the_daily_surface() {
        assert_eq!(
            LoadError::Http(500).daily_message(),
            "Failed to load games: 500"
        );
        assert_eq!(LoadError::EmptyInput.daily_message(), "No games available");
        assert_eq!(
            LoadError::NoValidRecords.daily_message(),
            "No valid games found"
        );
    }

    #[test]
    fn default_config_matches_production_policy() {
        let config = LoaderConfig::default();
        assert_eq!(config.resource_path, "/games.json");
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.base_delay_ms, 1000);
        assert_eq!(LoaderConfig::immediate().base_delay_ms, 0);
    }

    #[test]
    fn load_state_accessors_follow_the_active_tag() {
        assert!(LoadState::Loading.is_loading());
        assert!(LoadState::Idle.catalogue().is_none());
        let error = LoadState::Error {
            message: "nope".to_owned(),
            retryable: true,
        };
        assert_eq!(error.error_message(), Some("nope"));
        assert!(!error.is_loading());
    }
}
