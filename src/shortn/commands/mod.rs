//! # Command Layer
//!
//! One module per user-level operation. Each `run` takes the pieces it needs
//! (history store, orchestrator, config) as plain arguments and returns a
//! [`CmdResult`]: data for the caller to render plus leveled messages. No
//! module here prints anything; that is the binary's job.
//!
//! This is also where the three shortening outcomes of
//! [`crate::orchestrator::ShortenOutcome`] become user-facing text.

use crate::index::DisplayEntry;
use crate::model::HistoryEntry;

pub mod clear;
pub mod config;
pub mod get;
pub mod list;
pub mod remove;
pub mod services;
pub mod shorten;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceListing {
    pub id: &'static str,
    pub active: bool,
    pub default_api_url: Option<&'static str>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Set when a shortening succeeded.
    pub short_url: Option<String>,
    pub affected_entries: Vec<HistoryEntry>,
    pub listed_entries: Vec<DisplayEntry>,
    pub config_entries: Vec<(String, String)>,
    pub services: Vec<ServiceListing>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_short_url(mut self, short_url: String) -> Self {
        self.short_url = Some(short_url);
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_config_entries(mut self, entries: Vec<(String, String)>) -> Self {
        self.config_entries = entries;
        self
    }

    pub fn with_services(mut self, services: Vec<ServiceListing>) -> Self {
        self.services = services;
        self
    }

    /// True when any message is an error, i.e. the command did not do what was asked.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}
