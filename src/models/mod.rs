pub mod raw_trade;
pub mod trade_table;

pub use raw_trade::{RawTrade, TradeField};
pub use trade_table::{CanonicalTrade, TradeTable, FIXED_COLUMNS, FLAG_PREFIX};
