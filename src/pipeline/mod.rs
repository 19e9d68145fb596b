pub mod coerce;
pub mod normalizer;

pub use normalizer::{normalize, normalize_value};
