use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::{CanonicalTrade, TradeTable};

pub const DEFAULT_RANKING_SIZE: usize = 3;

/// How trades behaved when one confirmation flag was set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationStats {
    pub name: String,
    pub total: usize,
    /// Win rate among flagged trades, in percent (2 dp).
    pub assertiveness: f64,
    /// Loss rate among flagged trades, in percent (2 dp).
    pub inefficiency: f64,
    pub average_profit: f64,
}

impl ConfirmationStats {
    fn inactive(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total: 0,
            assertiveness: 0.0,
            inefficiency: 0.0,
            average_profit: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfirmationAnalysis {
    /// One entry per flag column, in table column order.
    pub per_flag: Vec<ConfirmationStats>,
    pub most_profitable: Vec<ConfirmationStats>,
    /// The lowest `average_profit` entries, still in descending order.
    /// May overlap `most_profitable` when there are few flags.
    pub least_profitable: Vec<ConfirmationStats>,
}

impl ConfirmationAnalysis {
    pub fn get(&self, name: &str) -> Option<&ConfirmationStats> {
        self.per_flag.iter().find(|s| s.name == name)
    }
}

pub struct ConfirmationAnalyzer {
    pub ranking_size: usize,
}

impl Default for ConfirmationAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_RANKING_SIZE)
    }
}

impl ConfirmationAnalyzer {
    pub fn new(ranking_size: usize) -> Self {
        Self { ranking_size }
    }

    pub fn analyze(&self, table: &TradeTable) -> ConfirmationAnalysis {
        let per_flag: Vec<ConfirmationStats> = table
            .flag_names()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let flagged: Vec<&CanonicalTrade> =
                    table.rows().iter().filter(|r| r.flags()[idx]).collect();
                compute_stats(name, &flagged)
            })
            .collect();

        // Stable: equal averages keep column order.
        let mut ranked = per_flag.clone();
        ranked.sort_by(|a, b| {
            b.average_profit
                .partial_cmp(&a.average_profit)
                .unwrap_or(Ordering::Equal)
        });

        let n = self.ranking_size;
        let most_profitable = ranked.iter().take(n).cloned().collect();
        let least_profitable = ranked[ranked.len().saturating_sub(n)..].to_vec();

        ConfirmationAnalysis {
            per_flag,
            most_profitable,
            least_profitable,
        }
    }
}

/// Per-flag statistics with the default top/bottom size of 3.
pub fn analyze_confirmations(table: &TradeTable) -> ConfirmationAnalysis {
    ConfirmationAnalyzer::default().analyze(table)
}

fn compute_stats(name: &str, trades: &[&CanonicalTrade]) -> ConfirmationStats {
    if trades.is_empty() {
        return ConfirmationStats::inactive(name);
    }

    let total = trades.len();
    let wins = trades.iter().filter(|t| t.is_winner()).count();
    let losses = trades.iter().filter(|t| t.is_loser()).count();
    let total_pnl: f64 = trades.iter().map(|t| t.profit_loss).sum();

    ConfirmationStats {
        name: name.to_string(),
        total,
        assertiveness: round2(wins as f64 / total as f64 * 100.0),
        inefficiency: round2(losses as f64 / total as f64 * 100.0),
        average_profit: total_pnl / total as f64,
    }
}

/// Two decimals, ties to even.
fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
