pub mod analysis;
pub mod config;
pub mod error;
pub mod journal;
pub mod models;
pub mod pipeline;
pub mod report;
#[cfg(test)]
pub mod test_helpers;
