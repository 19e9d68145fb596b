use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Storage
    pub data_dir: String,
    pub trades_file: String,
    pub confirmations_file: String,
    pub improvements_file: String,
    pub seed_sample_data: bool,

    // Analysis
    pub ranking_size: usize,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            data_dir: env("JOURNAL_DATA_DIR", "data"),
            trades_file: env("JOURNAL_TRADES_FILE", "movimientos.json"),
            confirmations_file: env("JOURNAL_CONFIRMATIONS_FILE", "confirmaciones.json"),
            improvements_file: env("JOURNAL_IMPROVEMENTS_FILE", "mejoras.json"),
            seed_sample_data: env("JOURNAL_SEED_SAMPLE", "true").to_lowercase() == "true",
            ranking_size: env("JOURNAL_RANKING_SIZE", "3").parse().unwrap_or(3),
            log_level: env("JOURNAL_LOG_LEVEL", "INFO"),
        }
    }

    pub fn trades_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.trades_file)
    }

    pub fn confirmations_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.confirmations_file)
    }

    pub fn improvements_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.improvements_file)
    }
}
