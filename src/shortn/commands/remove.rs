use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::HistoryStore;
use crate::index::{index_entries, resolve, EntrySelector};
use crate::store::DocumentStore;

/// Remove the selected entries. Positions are resolved against one read
/// taken before anything is removed, so `remove 1 2` drops the two newest.
pub fn run<S: DocumentStore>(
    history: &mut HistoryStore<S>,
    selectors: &[EntrySelector],
) -> Result<CmdResult> {
    let indexed = index_entries(history.read().unwrap_or_default());
    let mut result = CmdResult::default();

    for selector in selectors {
        match resolve(&indexed, selector) {
            Ok(found) => {
                history.remove(&found.entry.id)?;
                result.add_message(CmdMessage::success(format!(
                    "Removed ({}): {}",
                    found.index, found.entry.short_url
                )));
                result.affected_entries.push(found.entry.clone());
            }
            Err(_) => match selector {
                EntrySelector::Id(id) => {
                    history.remove(id)?;
                    result.add_message(CmdMessage::info(format!("Nothing to remove for {}", id)));
                }
                EntrySelector::Position(n) => {
                    result.add_message(CmdMessage::error(format!("No history entry {}", n)));
                }
            },
        }
    }

    Ok(result)
}
