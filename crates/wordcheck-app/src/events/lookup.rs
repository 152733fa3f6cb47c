use std::sync::Arc;

use kanal::AsyncSender;
use wordcheck_core::Session;
use wordcheck_core::preprocess::{DefaultPreprocessor, Preprocessor};
use wordcheck_types::AppEvent;

use crate::events::history::record;
use crate::state::AppState;

/// Look up a word the user already picked, skipping pattern expansion
pub async fn handle_lookup(
    state: &Arc<AppState>,
    session: &Session,
    seq: u64,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = DefaultPreprocessor.process(&word);
    if word.is_empty() {
        return Ok(());
    }

    let result = session.lookup(&word).await;
    record(state, &result.word).await;
    app_to_ui_tx.send(AppEvent::ShowResult { seq, result }).await?;

    Ok(())
}
