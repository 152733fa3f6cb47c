use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use wordcheck_core::Session;
use wordcheck_types::AppEvent;

use crate::state::AppState;

pub mod history;
pub mod lookup;
pub mod search;
pub mod switch_variant;

use history::{handle_clear_history, handle_remove_from_history, handle_show_history};
use lookup::handle_lookup;
use search::handle_search;
use switch_variant::handle_switch_variant;

/// App's main loop. Handles one request at a time; the session is replaced
/// wholesale when the dictionary changes.
pub async fn event_loop(
    state: Arc<AppState>,
    mut session: Session,
    startup_messages: Vec<String>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    for message in startup_messages {
        app_to_ui_tx.send(AppEvent::Toast(message)).await?;
    }
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        if matches!(event, AppEvent::Shutdown) {
            tracing::info!("[EVENT_LOOP] Shutdown requested");
            break;
        }

        handle_events(&state, &mut session, &app_to_ui_tx, event).await?;
    }

    Ok(())
}

async fn handle_events(
    state: &Arc<AppState>,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Search { seq, query } => {
            tracing::debug!("Search #{}: '{}'", seq, query);
            handle_search(state, session, seq, query, app_to_ui_tx).await?;
        }
        AppEvent::Lookup { seq, word } => {
            tracing::debug!("Lookup #{}: '{}'", seq, word);
            handle_lookup(state, session, seq, word, app_to_ui_tx).await?;
        }
        AppEvent::SwitchVariant(variant) => {
            handle_switch_variant(state, session, variant, app_to_ui_tx).await?;
        }
        AppEvent::ShowHistory => handle_show_history(state, app_to_ui_tx).await?,
        AppEvent::ClearHistory => handle_clear_history(state, app_to_ui_tx).await?,
        AppEvent::RemoveFromHistory(word) => {
            handle_remove_from_history(state, word, app_to_ui_tx).await?;
        }
        AppEvent::ShowResult { .. }
        | AppEvent::ShowSuggestions { .. }
        | AppEvent::ShowHistoryList(_)
        | AppEvent::Toast(_)
        | AppEvent::BackendReady
        | AppEvent::Shutdown => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
