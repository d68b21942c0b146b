//! # Display Indexes
//!
//! History entries are keyed by UUID, which nobody wants to type. The CLI
//! shows each entry with its 1-based position in the newest-first listing
//! and accepts either that position or the full id as a selector. Any
//! input that is not a number is taken as an id.
//!
//! Positions shift whenever an entry is added or removed, so a selector is
//! resolved against a fresh read right before it is used.

use crate::error::{Result, ShortnError};
use crate::model::HistoryEntry;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: HistoryEntry,
}

/// A user input naming one history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySelector {
    Position(usize),
    Id(String),
}

impl fmt::Display for EntrySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrySelector::Position(n) => write!(f, "{}", n),
            EntrySelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for EntrySelector {
    type Err = ShortnError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err(ShortnError::Api("Positions start at 1".to_string()));
            }
            return Ok(EntrySelector::Position(n));
        }
        if s.is_empty() {
            return Err(ShortnError::Api("Empty entry selector".to_string()));
        }
        Ok(EntrySelector::Id(s.to_string()))
    }
}

pub fn index_entries(entries: Vec<HistoryEntry>) -> Vec<DisplayEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry {
            index: i + 1,
            entry,
        })
        .collect()
}

/// Find the entry a selector points at.
pub fn resolve<'a>(
    entries: &'a [DisplayEntry],
    selector: &EntrySelector,
) -> Result<&'a DisplayEntry> {
    let found = match selector {
        EntrySelector::Position(n) => entries.iter().find(|de| de.index == *n),
        EntrySelector::Id(id) => entries.iter().find(|de| de.entry.id == *id),
    };
    found.ok_or_else(|| ShortnError::Api(format!("No history entry {}", selector)))
}
