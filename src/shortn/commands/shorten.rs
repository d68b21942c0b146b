use crate::commands::{CmdMessage, CmdResult};
use crate::history::HistoryStore;
use crate::orchestrator::{Orchestrator, ShortenOutcome};
use crate::store::DocumentStore;
use crate::transport::Transport;

pub fn run<S: DocumentStore, T: Transport>(
    orchestrator: &Orchestrator<T>,
    history: &mut HistoryStore<S>,
    input: &str,
    history_enabled: bool,
) -> CmdResult {
    let mut result = CmdResult::default();

    match orchestrator.shorten_and_record(history, input, history_enabled) {
        ShortenOutcome::InvalidUrl(_) => {
            result.add_message(CmdMessage::error("Please, type a valid URL"));
        }
        ShortenOutcome::BackendFailed(e) => {
            result.add_message(CmdMessage::error(
                "There was an error trying to shorten the URL.",
            ));
            result.add_message(CmdMessage::info(e.to_string()));
        }
        ShortenOutcome::Shortened { short_url, entry } => {
            if history_enabled && entry.is_none() {
                result.add_message(CmdMessage::warning(
                    "Shortened, but the result could not be saved to history.",
                ));
            }
            if let Some(entry) = entry {
                result.affected_entries.push(entry);
            }
            result = result.with_short_url(short_url);
        }
    }

    result
}
