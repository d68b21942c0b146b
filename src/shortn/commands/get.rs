use crate::commands::CmdResult;
use crate::error::Result;
use crate::history::HistoryStore;
use crate::index::{index_entries, resolve, EntrySelector};
use crate::store::DocumentStore;

/// Look up one entry, e.g. to copy or open it.
pub fn run<S: DocumentStore>(
    history: &HistoryStore<S>,
    selector: &EntrySelector,
) -> Result<CmdResult> {
    let indexed = index_entries(history.read().unwrap_or_default());
    let found = resolve(&indexed, selector)?.clone();
    Ok(CmdResult::default().with_listed_entries(vec![found]))
}
