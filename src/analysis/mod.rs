pub mod confirmations;
pub mod key_metrics;

pub use confirmations::{
    analyze_confirmations, ConfirmationAnalysis, ConfirmationAnalyzer, ConfirmationStats,
    DEFAULT_RANKING_SIZE,
};
pub use key_metrics::{compute_key_metrics, GlobalMetrics, GroupPerformance, NOT_AVAILABLE};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::AnalysisError;
use crate::models::TradeTable;

/// Everything one analysis run produces from a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsBundle {
    pub generated_at: DateTime<Utc>,
    pub key_metrics: GlobalMetrics,
    pub confirmations: ConfirmationAnalysis,
}

impl MetricsBundle {
    /// Run both analyses. An empty table short-circuits with `EmptyInput`.
    pub fn compute(table: &TradeTable, ranking_size: usize) -> Result<Self, AnalysisError> {
        let key_metrics = compute_key_metrics(table)?;
        let confirmations = ConfirmationAnalyzer::new(ranking_size).analyze(table);
        debug!(
            "Analyzed {} trades across {} confirmation flags",
            key_metrics.total_trades,
            confirmations.per_flag.len()
        );
        Ok(Self {
            generated_at: Utc::now(),
            key_metrics,
            confirmations,
        })
    }
}

/// Full analysis with the default ranking size.
pub fn analyze(table: &TradeTable) -> Result<MetricsBundle, AnalysisError> {
    MetricsBundle::compute(table, DEFAULT_RANKING_SIZE)
}
