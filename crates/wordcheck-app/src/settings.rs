use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use wordcheck_config::Config;
use wordcheck_config::history::HistoryConfig;
use wordcheck_core::History;

/// Load config from a JSON file, or from defaults and the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using defaults and environment");
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut config: Config = serde_json::from_reader(reader)?;

    // A key in the environment beats one left blank in the file
    if config.generative.api_key.is_empty() {
        config.generative.api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    }

    Ok(config)
}

/// Read saved search history; a missing file is an empty history
pub async fn load_history(config: &HistoryConfig) -> anyhow::Result<History> {
    if !config.enabled {
        return Ok(History::with_capacity(config.capacity));
    }

    let history = match tokio::fs::read_to_string(&config.path).await {
        Ok(data) => {
            let words: Vec<String> = serde_json::from_str(&data)?;
            History::from_entries(words, config.capacity)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No history at {}, starting fresh", config.path);
            History::with_capacity(config.capacity)
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("Loaded {} history entries", history.len());
    Ok(history)
}

pub async fn save_history(config: &HistoryConfig, history: &History) -> anyhow::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let data = serde_json::to_string_pretty(history)?;
    tokio::fs::write(&config.path, data).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_config(name: &str, capacity: usize) -> HistoryConfig {
        let path = std::env::temp_dir().join(format!("wordcheck-{}-{}.json", name, std::process::id()));
        HistoryConfig {
            enabled: true,
            path: path.display().to_string(),
            capacity,
        }
    }

    #[tokio::test]
    async fn test_history_round_trip_above_default_capacity() {
        let config = history_config("history-large", 100);
        let mut history = History::with_capacity(config.capacity);
        for i in 0..80 {
            history.add(&format!("w{i}"));
        }
        save_history(&config, &history).await.unwrap();

        let loaded = load_history(&config).await.unwrap();
        assert_eq!(loaded.len(), 80);
        assert_eq!(loaded.to_vec(), history.to_vec());

        // A smaller configured capacity keeps the newest entries
        let smaller = HistoryConfig {
            capacity: 10,
            ..config.clone()
        };
        let trimmed = load_history(&smaller).await.unwrap();
        assert_eq!(trimmed.len(), 10);
        assert_eq!(trimmed.iter().next(), Some("w79"));

        tokio::fs::remove_file(&config.path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_history_file_is_empty() {
        let config = history_config("history-missing", 50);
        let history = load_history(&config).await.unwrap();
        assert!(history.is_empty());
    }
}
