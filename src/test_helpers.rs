use serde_json::{Map, Value};

use crate::config::Config;
use crate::journal::sample::sample_trades;
use crate::models::RawTrade;

/// A raw trade with the given instrument, profit/loss value and flags.
pub fn raw_trade(instrument: &str, profit_loss: Value, flags: &[(&str, bool)]) -> RawTrade {
    raw_trade_full(instrument, profit_loss, "Rebrote", "Ninguna", flags)
}

pub fn raw_trade_full(
    instrument: &str,
    profit_loss: Value,
    entry_type: &str,
    improvement_note: &str,
    flags: &[(&str, bool)],
) -> RawTrade {
    let confirmations: Map<String, Value> = flags
        .iter()
        .map(|(name, set)| (name.to_string(), Value::Bool(*set)))
        .collect();

    let mut fields = Map::new();
    fields.insert("instrument".into(), Value::from(instrument));
    fields.insert("action".into(), Value::from("COMPRA"));
    fields.insert("profit_loss".into(), profit_loss);
    fields.insert("entry_type".into(), Value::from(entry_type));
    fields.insert("improvement_note".into(), Value::from(improvement_note));
    fields.insert("confirmations".into(), Value::Object(confirmations));
    RawTrade::new(fields)
}

/// The five-trade starter journal as raw trades.
pub fn sample_journal() -> Vec<RawTrade> {
    RawTrade::batch_from_value(&Value::Array(sample_trades())).unwrap()
}

/// A Config pointing at a fresh per-test directory under the system temp dir.
pub fn temp_config(tag: &str) -> Config {
    let dir = std::env::temp_dir().join(format!("trade_journal_test_{}_{}", std::process::id(), tag));
    let _ = std::fs::remove_dir_all(&dir);
    Config {
        data_dir: dir.to_string_lossy().to_string(),
        trades_file: "movimientos.json".to_string(),
        confirmations_file: "confirmaciones.json".to_string(),
        improvements_file: "mejoras.json".to_string(),
        seed_sample_data: false,
        ranking_size: 3,
        log_level: "INFO".to_string(),
    }
}
