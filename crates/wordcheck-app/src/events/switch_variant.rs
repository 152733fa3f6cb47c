use std::sync::Arc;

use kanal::AsyncSender;
use wordcheck_core::Session;
use wordcheck_types::{AppEvent, DictionaryVariant};

use crate::sources::load_lexicon;
use crate::state::AppState;

/// Load the other word list and swap in a new session. On failure the
/// current session stays.
pub async fn handle_switch_variant(
    state: &Arc<AppState>,
    session: &mut Session,
    variant: DictionaryVariant,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if session.variant() == variant {
        app_to_ui_tx
            .send(AppEvent::Toast(format!("Dictionary is already {variant}")))
            .await?;
        return Ok(());
    }

    let loaded = {
        let config = state.config.read().await;
        load_lexicon(&config, variant).await
    };

    match loaded {
        Ok(lexicon) => {
            *session = session.with_lexicon(variant, lexicon);
            state.config.write().await.dictionary.variant = variant;
            tracing::info!("Dictionary changed to: {}", variant);
            app_to_ui_tx
                .send(AppEvent::Toast(format!("Dictionary changed to: {variant}")))
                .await?;
        }
        Err(e) => {
            tracing::warn!("Failed to load {} word list: {}", variant, e);
            app_to_ui_tx
                .send(AppEvent::Toast(
                    "Failed to load dictionary. Some features may not work correctly.".to_string(),
                ))
                .await?;
        }
    }

    Ok(())
}
