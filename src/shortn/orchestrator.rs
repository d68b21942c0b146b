//! # Orchestrator
//!
//! Validate, shorten, record. The only place where the service side and the
//! history side meet.

use crate::error::ShortnError;
use crate::history::HistoryStore;
use crate::model::HistoryEntry;
use crate::registry::ServiceRegistry;
use crate::services::Shortener;
use crate::store::DocumentStore;
use crate::transport::Transport;
use crate::validation::validate_url;
use tracing::{debug, error, warn};

/// What a shortening attempt came to. Callers map each arm to their own
/// user-facing message.
#[derive(Debug)]
pub enum ShortenOutcome {
    /// The input is not URL-shaped; no backend was called.
    InvalidUrl(ShortnError),
    /// The backend could not be reached or answered nonsense.
    BackendFailed(ShortnError),
    /// `entry` is `None` when history is disabled or could not be written.
    Shortened {
        short_url: String,
        entry: Option<HistoryEntry>,
    },
}

pub struct Orchestrator<T: Transport> {
    backend: Box<dyn Shortener>,
    transport: T,
}

impl<T: Transport> Orchestrator<T> {
    /// Instantiate the active backend from `registry`. Unknown ids fall back
    /// to the registry default.
    pub fn new(
        registry: &ServiceRegistry,
        service_id: &str,
        api_url: Option<String>,
        api_key: Option<String>,
        transport: T,
    ) -> Self {
        let backend = registry.new_backend(service_id, api_url, api_key);
        Self::with_backend(backend, transport)
    }

    pub fn with_backend(backend: Box<dyn Shortener>, transport: T) -> Self {
        Self { backend, transport }
    }

    /// Identifier of the backend actually in use.
    pub fn service_id(&self) -> &'static str {
        self.backend.id()
    }

    pub fn shorten_and_record<S: DocumentStore>(
        &self,
        history: &mut HistoryStore<S>,
        input: &str,
        history_enabled: bool,
    ) -> ShortenOutcome {
        if let Err(e) = validate_url(input) {
            debug!(input, "rejected input");
            return ShortenOutcome::InvalidUrl(e);
        }

        let short_url = match self.backend.shorten(&self.transport, input) {
            Ok(short_url) => short_url,
            Err(e) => {
                error!(service = self.service_id(), input, error = ?e, "shortening failed");
                return ShortenOutcome::BackendFailed(e);
            }
        };
        debug!(service = self.service_id(), input, %short_url, "shortened");

        let entry = if history_enabled {
            match history.add(input, &short_url, self.service_id()) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "could not record shortening in history");
                    None
                }
            }
        } else {
            None
        };

        ShortenOutcome::Shortened { short_url, entry }
    }
}
