use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordcheck_config::log::LogConfig;
use wordcheck_core::{History, SearchOutcome, Session};
use wordcheck_types::DictionaryVariant;

pub mod controller;
pub mod events;
pub mod render;
pub mod settings;
pub mod sources;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

/// wordcheck: is it really a word?
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Word or `?` pattern to check once; starts a prompt when omitted
    query: Option<String>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word list to check against (scrabble-us or scrabble-uk)
    #[arg(long)]
    variant: Option<DictionaryVariant>,

    /// Ask the chat model when the dictionary has no definition
    #[arg(short, long)]
    generative: bool,

    /// Print the one-shot result as JSON
    #[arg(long)]
    json: bool,

    /// Turn on debug logging
    #[arg(short, long)]
    debug: bool,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(log: &LogConfig, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = settings::load_config(args.config.as_deref())?;
    if let Some(variant) = args.variant {
        config.dictionary.variant = variant;
    }
    if args.generative {
        config.generative.enabled = true;
    }
    if args.log_json {
        config.log.json = true;
    }

    init_tracing(&config.log, args.debug);

    let history = settings::load_history(&config.history)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load history: {}", e);
            History::with_capacity(config.history.capacity)
        });

    let (session, warnings) = sources::load_session(&config).await;
    let state = Arc::new(AppState::new(config, history));

    if let Some(query) = args.query {
        for warning in &warnings {
            eprintln!("{warning}");
        }
        return run_once(&state, &session, &query, args.json).await;
    }

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    run(state, session, warnings, shutdown).await;
    Ok(())
}

/// Check a single query and print the outcome
async fn run_once(
    state: &Arc<AppState>,
    session: &Session,
    query: &str,
    json: bool,
) -> anyhow::Result<()> {
    match session.search(query).await {
        SearchOutcome::Invalid(message) => {
            anyhow::bail!(message);
        }
        SearchOutcome::Ambiguous(words) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&words)?);
            } else {
                print!("{}", render::render_suggestions(&words));
            }
        }
        SearchOutcome::Resolved(result) => {
            events::history::record(state, &result.word).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render::render_result(&result));
            }
        }
    }
    Ok(())
}

pub async fn run(
    state: Arc<AppState>,
    session: Session,
    startup_messages: Vec<String>,
    shutdown: impl Future<Output = ()>,
) {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(session, startup_messages);

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => tracing::error!("task exited with error: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
}
