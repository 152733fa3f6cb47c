use std::sync::Arc;

use tokio::sync::RwLock;
use wordcheck_config::Config;
use wordcheck_core::History;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub history: RwLock<History>,
}

impl AppState {
    pub fn new(config: Config, history: History) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            history: RwLock::new(history),
        }
    }
}
