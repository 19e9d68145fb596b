use serde_json::{json, Value};

/// Starter journal: five trades, the last one introducing a flag
/// (`divergencia`) that none of the earlier entries mention.
pub fn sample_trades() -> Vec<Value> {
    vec![
        json!({
            "instrument": "EURUSD",
            "action": "COMPRA",
            "outcome_price": 1.0750,
            "profit_loss": 45.20,
            "entry_type": "Rebrote",
            "improvement_note": "Toma Parcial",
            "confirmations": {"hch": true, "fuerza": true}
        }),
        json!({
            "instrument": "GBPUSD",
            "action": "VENTA",
            "outcome_price": 1.2500,
            "profit_loss": -30.50,
            "entry_type": "Ruptura",
            "improvement_note": "Ninguna",
            "confirmations": {"noticia": true, "fuerza": false}
        }),
        json!({
            "instrument": "EURUSD",
            "action": "COMPRA",
            "outcome_price": 1.0780,
            "profit_loss": 12.00,
            "entry_type": "Rebrote",
            "improvement_note": "Manejo Riesgo",
            "confirmations": {"fuerza": true, "volatilidad": true}
        }),
        json!({
            "instrument": "AUDUSD",
            "action": "VENTA",
            "outcome_price": 0.6550,
            "profit_loss": -55.00,
            "entry_type": "Rango",
            "improvement_note": "Toma Parcial",
            "confirmations": {"hch": false, "volatilidad": true}
        }),
        json!({
            "instrument": "EURUSD",
            "action": "COMPRA",
            "outcome_price": 1.0800,
            "profit_loss": 80.50,
            "entry_type": "Rebrote",
            "improvement_note": "Manejo Riesgo",
            "confirmations": {"noticia": true, "divergencia": true, "hch": true}
        }),
    ]
}

pub fn sample_confirmations() -> Vec<Value> {
    vec![
        json!({"name": "hch", "description": "Head-and-shoulders formation."}),
        json!({"name": "fuerza", "description": "Relative strength indicator agrees."}),
        json!({"name": "noticia", "description": "Triggered by a major news event."}),
        json!({"name": "volatilidad", "description": "High market volatility."}),
    ]
}

pub fn sample_improvements() -> Vec<Value> {
    vec![
        json!({"name": "Toma Parcial", "description": "Close part of the position early."}),
        json!({"name": "Manejo Riesgo", "description": "Adjust the stop loss during the trade."}),
        json!({"name": "Ninguna", "description": "No improvement applied."}),
    ]
}
