use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::HistoryStore;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(history: &mut HistoryStore<S>) -> Result<CmdResult> {
    let count = history.read().map(|items| items.len()).unwrap_or(0);
    history.clear()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "History cleared ({} entries removed)",
        count
    )));
    Ok(result)
}
