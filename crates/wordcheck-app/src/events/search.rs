use std::sync::Arc;

use kanal::AsyncSender;
use wordcheck_core::{SearchOutcome, Session};
use wordcheck_types::AppEvent;

use crate::events::history::record;
use crate::state::AppState;

pub async fn handle_search(
    state: &Arc<AppState>,
    session: &Session,
    seq: u64,
    query: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match session.search(&query).await {
        SearchOutcome::Invalid(message) => {
            app_to_ui_tx.send(AppEvent::Toast(message)).await?;
        }
        SearchOutcome::Ambiguous(words) => {
            tracing::debug!("Displaying {} suggestions", words.len());
            app_to_ui_tx
                .send(AppEvent::ShowSuggestions { seq, words })
                .await?;
        }
        SearchOutcome::Resolved(result) => {
            record(state, &result.word).await;
            app_to_ui_tx.send(AppEvent::ShowResult { seq, result }).await?;
        }
    }

    Ok(())
}
