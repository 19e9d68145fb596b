use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{json_kind, NormalizeError};

/// The fields a journal entry is expected to carry.
///
/// Older journal files were written with Spanish keys; those are still
/// read, but the English key takes precedence when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeField {
    Instrument,
    Action,
    OutcomePrice,
    ProfitLoss,
    EntryType,
    ImprovementNote,
    Confirmations,
}

impl TradeField {
    pub const ALL: [TradeField; 7] = [
        TradeField::Instrument,
        TradeField::Action,
        TradeField::OutcomePrice,
        TradeField::ProfitLoss,
        TradeField::EntryType,
        TradeField::ImprovementNote,
        TradeField::Confirmations,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TradeField::Instrument => "instrument",
            TradeField::Action => "action",
            TradeField::OutcomePrice => "outcome_price",
            TradeField::ProfitLoss => "profit_loss",
            TradeField::EntryType => "entry_type",
            TradeField::ImprovementNote => "improvement_note",
            TradeField::Confirmations => "confirmations",
        }
    }

    pub fn legacy_key(&self) -> &'static str {
        match self {
            TradeField::Instrument => "activo",
            TradeField::Action => "accion",
            TradeField::OutcomePrice => "resultado",
            TradeField::ProfitLoss => "ganancia/perdida",
            TradeField::EntryType => "tipo entrada",
            TradeField::ImprovementNote => "mejorar",
            TradeField::Confirmations => "confirmaciones",
        }
    }
}

impl fmt::Display for TradeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One journaled trade exactly as the store hands it over.
///
/// The key set is open: entries may omit fields, carry extra ones, or hold
/// values of the wrong type. Interpretation happens in the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTrade(Map<String, Value>);

impl RawTrade {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn field(&self, field: TradeField) -> Option<&Value> {
        self.0
            .get(field.key())
            .or_else(|| self.0.get(field.legacy_key()))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Split a loaded journal document into raw trades.
    ///
    /// Anything other than an array of objects is an integration error and
    /// is rejected rather than degraded.
    pub fn batch_from_value(value: &Value) -> Result<Vec<RawTrade>, NormalizeError> {
        let items = value
            .as_array()
            .ok_or(NormalizeError::NotASequence(json_kind(value)))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(RawTrade(map.clone())),
                other => Err(NormalizeError::NotAMapping {
                    index,
                    found: json_kind(other),
                }),
            })
            .collect()
    }
}

impl From<Map<String, Value>> for RawTrade {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
