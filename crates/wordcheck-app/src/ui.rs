use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;
use wordcheck_types::{AppEvent, DictionaryVariant};

use crate::render::{render_history, render_result, render_suggestions};

const HELP: &str = "\
Type a word, or a pattern with ? for any single letter (e.g. c?t).
  <number>        pick a suggestion
  :look <word>    look up a word directly
  :dict us|uk     switch dictionary
  :history        show recent searches
  :forget <word>  remove a word from history
  :clear          clear history
  :help           show this help
  :quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Lookup(String),
    SwitchVariant(DictionaryVariant),
    ShowHistory,
    ClearHistory,
    Forget(String),
    Help,
    Quit,
    Unknown(String),
}

/// Turn an input line into a command. Bare numbers pick from `suggestions`
/// when there are any.
pub fn parse_command(line: &str, suggestions: &[String]) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Ok(n) = line.parse::<usize>() {
        if !suggestions.is_empty() {
            return Some(match n.checked_sub(1).and_then(|i| suggestions.get(i)) {
                Some(word) => Command::Lookup(word.clone()),
                None => Command::Unknown(format!("No suggestion number {n}")),
            });
        }
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Some(Command::Search(line.to_string()));
    };

    let (name, arg) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(n, a)| (n, a.trim()));

    Some(match (name, arg) {
        ("q" | "quit" | "exit", _) => Command::Quit,
        ("h" | "help", _) => Command::Help,
        ("history", _) => Command::ShowHistory,
        ("clear", _) => Command::ClearHistory,
        ("look", word) if !word.is_empty() => Command::Lookup(word.to_string()),
        ("forget", word) if !word.is_empty() => Command::Forget(word.to_string()),
        ("dict", variant) => match variant.parse() {
            Ok(v) => Command::SwitchVariant(v),
            Err(e) => Command::Unknown(e),
        },
        _ => Command::Unknown(format!("Unknown command: {line}")),
    })
}

/// State shared between the input side and the render side
#[derive(Clone, Default)]
pub struct UiState {
    latest_seq: Arc<AtomicU64>,
    suggestions: Arc<Mutex<Vec<String>>>,
}

impl UiState {
    /// Sequence number for a new lookup request
    pub fn next_seq(&self) -> u64 {
        self.latest_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// A response to a request older than the newest one
    pub fn is_stale(&self, seq: u64) -> bool {
        seq < self.latest_seq.load(Ordering::SeqCst)
    }
}

/// Read stdin on a plain thread so a pending read never holds up shutdown
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ui = UiState::default();

    let render = tokio::spawn(render_loop(app_to_ui_rx, ui.clone(), std::io::stdout()));

    let interactive = atty::is(atty::Stream::Stdin);
    let lines = spawn_stdin_reader();
    let result = input_loop(lines, ui_to_app_tx, ui, interactive, cancel.clone()).await;

    cancel.cancel();
    render.abort();
    result
}

pub async fn input_loop(
    mut lines: mpsc::UnboundedReceiver<String>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    ui: UiState,
    interactive: bool,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    if interactive {
        println!("{HELP}");
    }

    loop {
        if interactive {
            print!("> ");
            let _ = std::io::stdout().flush();
        }

        let line = tokio::select! {
            line = lines.recv() => line,
            _ = cancel.cancelled() => break,
        };
        // End of input
        let Some(line) = line else { break };

        let command = {
            let suggestions = ui.suggestions.lock().await;
            parse_command(&line, &suggestions)
        };
        let Some(command) = command else { continue };
        tracing::debug!("Command: {:?}", command);

        let event = match command {
            Command::Search(query) => AppEvent::Search {
                seq: ui.next_seq(),
                query,
            },
            Command::Lookup(word) => AppEvent::Lookup {
                seq: ui.next_seq(),
                word,
            },
            Command::SwitchVariant(variant) => AppEvent::SwitchVariant(variant),
            Command::ShowHistory => AppEvent::ShowHistory,
            Command::ClearHistory => AppEvent::ClearHistory,
            Command::Forget(word) => AppEvent::RemoveFromHistory(word),
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Unknown(message) => {
                println!("{message}");
                continue;
            }
            Command::Quit => break,
        };

        ui_to_app_tx.send(event).await?;
    }

    let _ = ui_to_app_tx.send(AppEvent::Shutdown).await;
    Ok(())
}

pub async fn render_loop<W: Write + Send>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui: UiState,
    mut out: W,
) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        if let Some(seq) = event.seq() {
            if ui.is_stale(seq) {
                tracing::debug!("Dropping stale response #{}", seq);
                continue;
            }
        }

        match event {
            AppEvent::ShowResult { result, .. } => {
                ui.suggestions.lock().await.clear();
                write!(out, "{}", render_result(&result))?;
            }
            AppEvent::ShowSuggestions { words, .. } => {
                write!(out, "{}", render_suggestions(&words))?;
                *ui.suggestions.lock().await = words;
            }
            AppEvent::ShowHistoryList(words) => {
                write!(out, "{}", render_history(&words))?;
            }
            AppEvent::Toast(message) => {
                writeln!(out, "{message}")?;
            }
            AppEvent::BackendReady => {
                tracing::debug!("Backend ready");
            }
            AppEvent::Shutdown => break,
            _ => {}
        }
        out.flush()?;
    }

    Ok(())
}
