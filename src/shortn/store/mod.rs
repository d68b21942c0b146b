//! # Storage Layer
//!
//! The history lives in a single JSON document. The [`DocumentStore`] trait
//! covers the raw I/O for that document (load the whole thing, replace the
//! whole thing), while [`crate::history::HistoryStore`] owns the parsing,
//! ordering and corruption policy on top of it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `history.json` in the data directory. Writes go to a
//!   temp file that is renamed over the document, so a reader never sees a
//!   half-written file.
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! Raw text rather than parsed structs crosses this boundary, so that both
//! implementations exercise the same corruption handling.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait DocumentStore {
    /// Load the raw document. `Ok(None)` when it has never been written.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the whole document with `content`.
    fn save(&mut self, content: &str) -> Result<()>;
}
