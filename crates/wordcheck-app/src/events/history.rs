use std::sync::Arc;

use kanal::AsyncSender;
use wordcheck_types::AppEvent;

use crate::settings::save_history;
use crate::state::AppState;

/// Add a looked-up word to history and persist it. Failures are logged only.
pub async fn record(state: &Arc<AppState>, word: &str) {
    let snapshot = {
        let mut history = state.history.write().await;
        history.add(word);
        history.clone()
    };
    persist(state, &snapshot).await;
}

async fn persist(state: &Arc<AppState>, history: &wordcheck_core::History) {
    let config = state.config.read().await.history.clone();
    if let Err(e) = save_history(&config, history).await {
        tracing::warn!("Failed to save history to {}: {}", config.path, e);
    }
}

pub async fn handle_show_history(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let words = state.history.read().await.to_vec();
    app_to_ui_tx.send(AppEvent::ShowHistoryList(words)).await?;
    Ok(())
}

pub async fn handle_clear_history(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let snapshot = {
        let mut history = state.history.write().await;
        history.clear();
        history.clone()
    };
    persist(state, &snapshot).await;
    app_to_ui_tx.send(AppEvent::ShowHistoryList(Vec::new())).await?;
    Ok(())
}

pub async fn handle_remove_from_history(
    state: &Arc<AppState>,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let snapshot = {
        let mut history = state.history.write().await;
        if !history.remove(&word) {
            tracing::debug!("'{}' was not in history", word);
        }
        history.clone()
    };
    persist(state, &snapshot).await;
    app_to_ui_tx
        .send(AppEvent::ShowHistoryList(snapshot.to_vec()))
        .await?;
    Ok(())
}
