use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::StoreError;
use crate::journal::sample;
use crate::models::{RawTrade, TradeField};
use crate::pipeline::coerce;

/// A named entry in the confirmation or improvement vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: String,
}

/// JSON-file backed journal: an append-only trade log plus two catalogs.
pub struct JournalStore {
    trades_file: PathBuf,
    confirmations_file: PathBuf,
    improvements_file: PathBuf,
}

impl JournalStore {
    pub fn new(cfg: &Config) -> Self {
        Self {
            trades_file: cfg.trades_path(),
            confirmations_file: cfg.confirmations_path(),
            improvements_file: cfg.improvements_path(),
        }
    }

    pub fn trades_file(&self) -> &Path {
        &self.trades_file
    }

    /// Load the trade log as an untyped document. The normalizer decides
    /// whether its shape is acceptable.
    pub fn load_trades(&self) -> Result<Value, StoreError> {
        read_document(&self.trades_file)
    }

    /// Append one trade after checking it names an instrument and an entry type.
    pub fn append_trade(&self, trade: Value) -> Result<(), StoreError> {
        let fields = match trade {
            Value::Object(map) => map,
            _ => return Err(StoreError::NotAnObject),
        };
        let raw = RawTrade::new(fields);
        for field in [TradeField::Instrument, TradeField::EntryType] {
            let present = coerce::text(raw.field(field)).is_some_and(|s| !s.trim().is_empty());
            if !present {
                return Err(StoreError::MissingField(field.key()));
            }
        }

        let mut trades = read_array(&self.trades_file)?;
        let label = coerce::text(raw.field(TradeField::Instrument)).unwrap_or_default();
        trades.push(Value::Object(raw.into_map()));
        write_document(&self.trades_file, &Value::Array(trades))?;
        info!("Trade added: {}", label);
        Ok(())
    }

    pub fn confirmation_catalog(&self) -> Result<Vec<CatalogEntry>, StoreError> {
        read_catalog(&self.confirmations_file)
    }

    /// Register a confirmation name. Names are trimmed and lowercased;
    /// returns `false` when the name already exists.
    pub fn add_confirmation(&self, name: &str, description: &str) -> Result<bool, StoreError> {
        let name = name.trim().to_lowercase();
        add_catalog_entry(&self.confirmations_file, name, description.trim())
    }

    pub fn improvement_catalog(&self) -> Result<Vec<CatalogEntry>, StoreError> {
        read_catalog(&self.improvements_file)
    }

    /// Register an improvement note; returns `false` for a duplicate name.
    pub fn add_improvement(&self, name: &str, description: &str) -> Result<bool, StoreError> {
        add_catalog_entry(&self.improvements_file, name.trim().to_string(), description.trim())
    }

    /// Write the starter journal and catalogs, touching only files that are
    /// missing or empty. Returns how many files were written.
    pub fn seed_sample_data(&self) -> Result<usize, StoreError> {
        let seeds = [
            (&self.trades_file, sample::sample_trades()),
            (&self.confirmations_file, sample::sample_confirmations()),
            (&self.improvements_file, sample::sample_improvements()),
        ];

        let mut written = 0;
        for (path, content) in seeds {
            if is_missing_or_empty(path) {
                write_document(path, &Value::Array(content))?;
                info!("Sample data written to {}", path.display());
                written += 1;
            }
        }
        Ok(written)
    }
}

fn is_missing_or_empty(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
}

fn read_document(path: &Path) -> Result<Value, StoreError> {
    if is_missing_or_empty(path) {
        warn!("{} not found or empty, starting from an empty list", path.display());
        return Ok(Value::Array(Vec::new()));
    }
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| StoreError::Json {
        path: path.display().to_string(),
        source,
    })
}

fn read_array(path: &Path) -> Result<Vec<Value>, StoreError> {
    match read_document(path)? {
        Value::Array(items) => Ok(items),
        _ => Err(StoreError::NotAnArray(path.display().to_string())),
    }
}

fn write_document(path: &Path, document: &Value) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(document).map_err(|source| StoreError::Json {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)
}

fn read_catalog(path: &Path) -> Result<Vec<CatalogEntry>, StoreError> {
    let items = read_array(path)?;
    serde_json::from_value(Value::Array(items)).map_err(|source| StoreError::Json {
        path: path.display().to_string(),
        source,
    })
}

fn add_catalog_entry(path: &Path, name: String, description: &str) -> Result<bool, StoreError> {
    if name.is_empty() {
        return Err(StoreError::MissingField("name"));
    }
    let mut catalog = read_catalog(path)?;
    if catalog.iter().any(|c| c.name == name) {
        warn!("'{}' already exists in {}", name, path.display());
        return Ok(false);
    }
    info!("Catalog entry added: {}", name);
    catalog.push(CatalogEntry {
        name,
        description: description.to_string(),
    });
    let document = serde_json::to_value(&catalog).map_err(|source| StoreError::Json {
        path: path.display().to_string(),
        source,
    })?;
    write_document(path, &document)?;
    Ok(true)
}
