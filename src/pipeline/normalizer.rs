use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::NormalizeError;
use crate::models::{CanonicalTrade, RawTrade, TradeField, TradeTable};
use crate::pipeline::coerce;

/// Flatten a batch of raw trades into one table.
///
/// Flag columns are the union of every trade's confirmation keys, in the
/// order they are first seen; a trade that does not mention a flag gets
/// `false` for it. The union is derived from this batch alone.
pub fn normalize(raw_trades: &[RawTrade]) -> TradeTable {
    if raw_trades.is_empty() {
        debug!("No raw trades to normalize");
        return TradeTable::default();
    }

    let per_trade_flags: Vec<Vec<(&str, bool)>> = raw_trades
        .iter()
        .enumerate()
        .map(|(i, trade)| read_flags(i, trade))
        .collect();

    // First pass: column discovery.
    let mut flag_names: Vec<String> = Vec::new();
    let mut column_of: HashMap<&str, usize> = HashMap::new();
    for flags in &per_trade_flags {
        for &(name, _) in flags {
            if !column_of.contains_key(name) {
                column_of.insert(name, flag_names.len());
                flag_names.push(name.to_string());
            }
        }
    }

    // Second pass: fill every row against the full column set.
    let rows: Vec<CanonicalTrade> = raw_trades
        .iter()
        .zip(&per_trade_flags)
        .map(|(trade, flags)| {
            let mut row_flags = vec![false; flag_names.len()];
            for &(name, set) in flags {
                row_flags[column_of[name]] = set;
            }
            CanonicalTrade::new(
                coerce::text(trade.field(TradeField::Instrument)),
                coerce::text(trade.field(TradeField::Action)),
                coerce::number(trade.field(TradeField::OutcomePrice)),
                coerce::number(trade.field(TradeField::ProfitLoss)).unwrap_or(0.0),
                coerce::text(trade.field(TradeField::EntryType)),
                coerce::text(trade.field(TradeField::ImprovementNote)),
                row_flags,
            )
        })
        .collect();

    debug!(
        "Normalized {} trades, flag columns: {:?}",
        rows.len(),
        flag_names
    );

    TradeTable::new(flag_names, rows)
}

/// Normalize a loaded journal document, rejecting anything that is not an
/// array of objects.
pub fn normalize_value(raw: &Value) -> Result<TradeTable, NormalizeError> {
    let batch = RawTrade::batch_from_value(raw)?;
    Ok(normalize(&batch))
}

fn read_flags(index: usize, trade: &RawTrade) -> Vec<(&str, bool)> {
    let field = trade.field(TradeField::Confirmations);
    match coerce::flags(field) {
        Some(flags) => flags,
        None => {
            if field.is_some_and(|v| !v.is_null()) {
                warn!(
                    "Trade #{} has confirmations that are not an object, treating it as flagless",
                    index
                );
            }
            Vec::new()
        }
    }
}
