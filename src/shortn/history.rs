//! # History Store
//!
//! Every operation is a full read-modify-write of one JSON document. The
//! policy for documents that do not parse differs per operation:
//!
//! | Operation | Missing document | Unparseable document |
//! |-----------|------------------|----------------------|
//! | `add`     | start empty      | start empty (logged) |
//! | `read`    | `None`           | `None` (logged)      |
//! | `remove`  | start empty      | `StoreCorruption`    |
//! | `clear`   | not read         | not read             |
//!
//! `read` also answers `None` when the document holds no entries, so callers
//! see one "no history" signal whether the store was never used, cleared, or
//! damaged.

use crate::error::{Result, ShortnError};
use crate::model::{HistoryDocument, HistoryEntry};
use crate::store::DocumentStore;
use tracing::{debug, warn};

pub struct HistoryStore<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a shortening as the newest entry.
    pub fn add(&mut self, long_url: &str, short_url: &str, service: &str) -> Result<HistoryEntry> {
        let mut doc = match self.load_document() {
            Ok(doc) => doc.unwrap_or_default(),
            Err(ShortnError::StoreCorruption(reason)) => {
                warn!(%reason, "history document unreadable, starting a new one");
                HistoryDocument::default()
            }
            Err(e) => return Err(e),
        };

        let entry = HistoryEntry::new(long_url, short_url.to_string(), service.to_string());
        doc.items.insert(0, entry.clone());
        self.save_document(&doc)?;

        debug!(id = %entry.id, service, "history entry added");
        Ok(entry)
    }

    /// Entries newest first, or `None` when there is nothing to show.
    pub fn read(&self) -> Option<Vec<HistoryEntry>> {
        match self.load_document() {
            Ok(Some(doc)) if !doc.items.is_empty() => Some(doc.items),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "history unavailable");
                None
            }
        }
    }

    /// Drop every entry with the given id. Absent ids are not an error.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let doc = self.load_document()?.unwrap_or_default();
        let before = doc.items.len();

        let items: Vec<HistoryEntry> = doc.items.into_iter().filter(|e| e.id != id).collect();
        debug!(id, removed = before - items.len(), "history entry removed");
        self.save_document(&HistoryDocument { items })
    }

    pub fn clear(&mut self) -> Result<()> {
        self.save_document(&HistoryDocument::default())
    }

    fn load_document(&self) -> Result<Option<HistoryDocument>> {
        let raw = match self.store.load()? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        if raw.trim().is_empty() {
            return Err(ShortnError::StoreCorruption("document is empty".to_string()));
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| ShortnError::StoreCorruption(e.to_string()))
    }

    fn save_document(&mut self, doc: &HistoryDocument) -> Result<()> {
        let content = serde_json::to_string(doc).map_err(ShortnError::Serialization)?;
        self.store.save(&content)
    }
}
