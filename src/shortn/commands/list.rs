use crate::commands::{CmdMessage, CmdResult};
use crate::history::HistoryStore;
use crate::index::index_entries;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(history: &HistoryStore<S>) -> CmdResult {
    match history.read() {
        Some(entries) => CmdResult::default().with_listed_entries(index_entries(entries)),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("The history is empty"));
            result
        }
    }
}
