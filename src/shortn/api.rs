//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! shortn operation, whatever the UI.
//!
//! The API:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs** (selector strings into [`EntrySelector`]s)
//! - **Returns structured types** (`CmdResult`), never text on a terminal
//!
//! `ShortnApi<S, T>` is generic over the document store and the transport:
//! production uses `FileStore` + `UreqTransport`, tests use `InMemoryStore` +
//! `MockTransport`.

use crate::commands;
use crate::config::ShortnConfig;
use crate::error::Result;
use crate::history::HistoryStore;
use crate::index::EntrySelector;
use crate::orchestrator::Orchestrator;
use crate::registry::ServiceRegistry;
use crate::store::DocumentStore;
use crate::transport::Transport;
use std::path::PathBuf;

pub struct ShortnApi<S: DocumentStore, T: Transport> {
    registry: ServiceRegistry,
    orchestrator: Orchestrator<T>,
    history: HistoryStore<S>,
    history_enabled: bool,
    config_dir: PathBuf,
}

impl<S: DocumentStore, T: Transport> ShortnApi<S, T> {
    /// Wire up the active backend described by `config`.
    pub fn new(config: &ShortnConfig, config_dir: PathBuf, store: S, transport: T) -> Self {
        let registry = ServiceRegistry::new();
        let service_id = registry.resolve(&config.main_service).id;
        let settings = config.service(service_id);
        let orchestrator = Orchestrator::new(
            &registry,
            service_id,
            settings.api_url,
            settings.api_key,
            transport,
        );

        Self {
            registry,
            orchestrator,
            history: HistoryStore::new(store),
            history_enabled: config.enable_history,
            config_dir,
        }
    }

    pub fn service_id(&self) -> &'static str {
        self.orchestrator.service_id()
    }

    pub fn history_enabled(&self) -> bool {
        self.history_enabled
    }

    pub fn shorten(&mut self, input: &str) -> commands::CmdResult {
        commands::shorten::run(
            &self.orchestrator,
            &mut self.history,
            input,
            self.history_enabled,
        )
    }

    pub fn list_history(&self) -> commands::CmdResult {
        commands::list::run(&self.history)
    }

    pub fn remove_entries<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::remove::run(&mut self.history, &selectors)
    }

    pub fn clear_history(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.history)
    }

    pub fn get_entry(&self, selector: &str) -> Result<commands::CmdResult> {
        let selector: EntrySelector = selector.parse()?;
        commands::get::run(&self.history, &selector)
    }

    pub fn services(&self) -> commands::CmdResult {
        commands::services::run(&self.registry, self.service_id())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, &self.registry, action)
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<EntrySelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ServiceListing};
