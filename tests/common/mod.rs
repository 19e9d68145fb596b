use serde_json::{json, Value};

use trade_journal::config::Config;

/// A journal entry with the fields the store requires plus a flag map.
pub fn trade(instrument: &str, profit_loss: Value, flags: Value) -> Value {
    json!({
        "instrument": instrument,
        "action": "COMPRA",
        "outcome_price": 1.0,
        "profit_loss": profit_loss,
        "entry_type": "Rebrote",
        "improvement_note": "Ninguna",
        "confirmations": flags,
    })
}

/// A Config rooted in a fresh directory under the system temp dir.
pub fn test_config(tag: &str) -> Config {
    let dir = std::env::temp_dir().join(format!(
        "trade_journal_integ_{}_{}",
        std::process::id(),
        tag
    ));
    let _ = std::fs::remove_dir_all(&dir);

    let mut cfg = Config::from_env();
    cfg.data_dir = dir.to_string_lossy().to_string();
    cfg.trades_file = "movimientos.json".to_string();
    cfg.confirmations_file = "confirmaciones.json".to_string();
    cfg.improvements_file = "mejoras.json".to_string();
    cfg.ranking_size = 3;
    cfg
}
