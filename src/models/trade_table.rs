use serde::Serialize;
use serde_json::{Map, Value};

/// Prefix that separates flag columns from the fixed identity columns.
pub const FLAG_PREFIX: &str = "conf_";

/// Identity and financial columns every table carries, flags or not.
pub const FIXED_COLUMNS: &[&str] = &[
    "instrument",
    "action",
    "outcome_price",
    "profit_loss",
    "entry_type",
    "improvement_note",
];

/// One normalized trade row.
///
/// `flags` is positional: entry `i` belongs to the table's `flag_names()[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalTrade {
    pub instrument: Option<String>,
    pub action: Option<String>,
    pub outcome_price: Option<f64>,
    pub profit_loss: f64,
    pub entry_type: Option<String>,
    pub improvement_note: Option<String>,
    flags: Vec<bool>,
}

impl CanonicalTrade {
    pub(crate) fn new(
        instrument: Option<String>,
        action: Option<String>,
        outcome_price: Option<f64>,
        profit_loss: f64,
        entry_type: Option<String>,
        improvement_note: Option<String>,
        flags: Vec<bool>,
    ) -> Self {
        Self {
            instrument,
            action,
            outcome_price,
            profit_loss,
            entry_type,
            improvement_note,
            flags,
        }
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn is_winner(&self) -> bool {
        self.profit_loss > 0.0
    }

    pub fn is_loser(&self) -> bool {
        self.profit_loss < 0.0
    }
}

/// A batch of trades flattened onto one schema: the fixed columns plus one
/// boolean column per flag name seen anywhere in the batch.
///
/// Tables are built once by the normalizer and only read afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TradeTable {
    flag_names: Vec<String>,
    rows: Vec<CanonicalTrade>,
}

impl TradeTable {
    pub(crate) fn new(flag_names: Vec<String>, rows: Vec<CanonicalTrade>) -> Self {
        debug_assert!(rows.iter().all(|r| r.flags.len() == flag_names.len()));
        Self { flag_names, rows }
    }

    pub fn flag_names(&self) -> &[String] {
        &self.flag_names
    }

    pub fn rows(&self) -> &[CanonicalTrade] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn flag_index(&self, name: &str) -> Option<usize> {
        self.flag_names.iter().position(|n| n == name)
    }

    /// Value of flag `name` for row `row`; `None` when either is unknown.
    pub fn flag(&self, row: usize, name: &str) -> Option<bool> {
        let idx = self.flag_index(name)?;
        self.rows.get(row).map(|r| r.flags[idx])
    }

    /// Fixed columns followed by the prefixed flag columns.
    pub fn column_names(&self) -> Vec<String> {
        FIXED_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(self.flag_names.iter().map(|f| format!("{}{}", FLAG_PREFIX, f)))
            .collect()
    }

    /// Flat JSON records, one per row, keyed by `column_names()`.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                let mut record = Map::new();
                record.insert("instrument".into(), opt_text(&row.instrument));
                record.insert("action".into(), opt_text(&row.action));
                record.insert(
                    "outcome_price".into(),
                    row.outcome_price.map(Value::from).unwrap_or(Value::Null),
                );
                record.insert("profit_loss".into(), Value::from(row.profit_loss));
                record.insert("entry_type".into(), opt_text(&row.entry_type));
                record.insert("improvement_note".into(), opt_text(&row.improvement_note));
                for (name, &set) in self.flag_names.iter().zip(&row.flags) {
                    record.insert(format!("{}{}", FLAG_PREFIX, name), Value::Bool(set));
                }
                record
            })
            .collect()
    }
}

fn opt_text(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}
