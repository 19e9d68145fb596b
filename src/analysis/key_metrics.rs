use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AnalysisError;
use crate::models::{CanonicalTrade, TradeTable};

/// Placeholder for a mode over a column with no values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Mean profit/loss and row count for one category value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPerformance {
    pub key: String,
    pub mean: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMetrics {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub breakeven_trades: usize,
    pub average_win: f64,
    /// Signed; negative whenever losers exist.
    pub average_loss: f64,
    pub net_profit: f64,
    /// Fraction in [0, 1].
    pub win_rate: f64,
    pub most_traded_instrument: String,
    pub most_common_improvement_note: String,
    pub performance_by_entry_type: Vec<GroupPerformance>,
    pub performance_by_instrument: Vec<GroupPerformance>,
}

pub fn compute_key_metrics(table: &TradeTable) -> Result<GlobalMetrics, AnalysisError> {
    let rows = table.rows();
    if rows.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let total = rows.len();
    let wins: Vec<f64> = rows.iter().filter(|r| r.is_winner()).map(|r| r.profit_loss).collect();
    let losses: Vec<f64> = rows.iter().filter(|r| r.is_loser()).map(|r| r.profit_loss).collect();

    Ok(GlobalMetrics {
        total_trades: total,
        winning_trades: wins.len(),
        losing_trades: losses.len(),
        breakeven_trades: total - wins.len() - losses.len(),
        average_win: mean(&wins),
        average_loss: mean(&losses),
        net_profit: rows.iter().map(|r| r.profit_loss).sum(),
        win_rate: wins.len() as f64 / total as f64,
        most_traded_instrument: mode(rows.iter().map(|r| r.instrument.as_deref()))
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        most_common_improvement_note: mode(rows.iter().map(|r| r.improvement_note.as_deref()))
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        performance_by_entry_type: group_performance(rows, |r| r.entry_type.as_deref()),
        performance_by_instrument: group_performance(rows, |r| r.instrument.as_deref()),
    })
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Most frequent present value; ties go to the value seen first.
fn mode<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for value in values.flatten() {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Mean and count per distinct key, in first-seen order. Rows without a key
/// are left out.
fn group_performance<'a>(
    rows: &'a [CanonicalTrade],
    key: impl Fn(&'a CanonicalTrade) -> Option<&'a str>,
) -> Vec<GroupPerformance> {
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        let Some(k) = key(row) else { continue };
        match index.get(k) {
            Some(&i) => {
                groups[i].1 += row.profit_loss;
                groups[i].2 += 1;
            }
            None => {
                index.insert(k, groups.len());
                groups.push((k, row.profit_loss, 1));
            }
        }
    }

    groups
        .into_iter()
        .map(|(k, sum, count)| GroupPerformance {
            key: k.to_string(),
            mean: sum / count as f64,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::normalize;
    use crate::test_helpers::{raw_trade, raw_trade_full, sample_journal};
    use serde_json::json;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_table_is_reported_not_computed() {
        let table = normalize(&[]);
        assert_eq!(compute_key_metrics(&table), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn two_trade_scenario() {
        let table = normalize(&[
            raw_trade("EURUSD", json!(45.20), &[("hch", true)]),
            raw_trade("GBPUSD", json!(-30.50), &[]),
        ]);
        let m = compute_key_metrics(&table).unwrap();
        assert_eq!(m.total_trades, 2);
        assert!(approx(m.win_rate, 0.5));
        assert!(approx(m.net_profit, 14.70));
        assert!(approx(m.average_win, 45.20));
        assert!(approx(m.average_loss, -30.50));
        assert_eq!(m.most_traded_instrument, "EURUSD");
    }

    #[test]
    fn breakeven_rows_count_in_totals_only() {
        let table = normalize(&[
            raw_trade("EURUSD", json!(10.0), &[]),
            raw_trade("EURUSD", json!("garbage"), &[]),
            raw_trade("EURUSD", json!(-4.0), &[]),
            raw_trade("EURUSD", json!(0), &[]),
        ]);
        let m = compute_key_metrics(&table).unwrap();
        assert_eq!(m.total_trades, 4);
        assert_eq!(m.winning_trades, 1);
        assert_eq!(m.losing_trades, 1);
        assert_eq!(m.breakeven_trades, 2);
        assert!(approx(m.win_rate, 0.25));
        assert!(approx(m.average_win, 10.0));
        assert!(approx(m.average_loss, -4.0));
        assert!(approx(m.net_profit, 6.0));
    }

    #[test]
    fn no_winners_or_losers_average_to_zero() {
        let table = normalize(&[raw_trade("EURUSD", json!(0.0), &[])]);
        let m = compute_key_metrics(&table).unwrap();
        assert_eq!(m.average_win, 0.0);
        assert_eq!(m.average_loss, 0.0);
        assert_eq!(m.win_rate, 0.0);
    }

    #[test]
    fn mode_breaks_ties_by_first_seen() {
        assert_eq!(mode(vec![Some("B"), Some("A"), Some("A"), Some("B")].into_iter()), Some("B"));
        assert_eq!(mode(vec![Some("B"), Some("A"), Some("A")].into_iter()), Some("A"));
        assert_eq!(mode(vec![None, Some("C")].into_iter()), Some("C"));
        assert_eq!(mode(vec![None, None].into_iter()), None);
    }

    #[test]
    fn missing_labels_fall_back_to_not_available() {
        let table = normalize(&[serde_json::from_value(json!({"profit_loss": 1.0})).unwrap()]);
        let m = compute_key_metrics(&table).unwrap();
        assert_eq!(m.most_traded_instrument, NOT_AVAILABLE);
        assert_eq!(m.most_common_improvement_note, NOT_AVAILABLE);
        assert!(m.performance_by_instrument.is_empty());
    }

    #[test]
    fn sample_journal_metrics() {
        let m = compute_key_metrics(&normalize(&sample_journal())).unwrap();
        assert_eq!(m.total_trades, 5);
        assert!(approx(m.win_rate, 0.6));
        assert!(approx(m.net_profit, 52.2));
        assert!(approx(m.average_win, (45.2 + 12.0 + 80.5) / 3.0));
        assert!(approx(m.average_loss, (-30.5 - 55.0) / 2.0));
        assert_eq!(m.most_traded_instrument, "EURUSD");
        assert_eq!(m.most_common_improvement_note, "Toma Parcial");
    }

    #[test]
    fn category_breakdowns_keep_first_seen_order() {
        let table = normalize(&[
            raw_trade_full("GBPUSD", json!(-30.0), "Ruptura", "Ninguna", &[]),
            raw_trade_full("EURUSD", json!(40.0), "Rebrote", "Toma Parcial", &[]),
            raw_trade_full("EURUSD", json!(20.0), "Rebrote", "Toma Parcial", &[]),
            raw_trade_full("AUDUSD", json!(-10.0), "Ruptura", "Ninguna", &[]),
        ]);
        let m = compute_key_metrics(&table).unwrap();

        let by_entry: Vec<(&str, f64, usize)> = m
            .performance_by_entry_type
            .iter()
            .map(|g| (g.key.as_str(), g.mean, g.count))
            .collect();
        assert_eq!(by_entry, vec![("Ruptura", -20.0, 2), ("Rebrote", 30.0, 2)]);

        let by_instrument: Vec<&str> = m
            .performance_by_instrument
            .iter()
            .map(|g| g.key.as_str())
            .collect();
        assert_eq!(by_instrument, vec!["GBPUSD", "EURUSD", "AUDUSD"]);
        assert_eq!(m.performance_by_instrument[1].count, 2);
    }

    #[test]
    fn win_rate_and_average_signs_hold() {
        let pnls = [3.0, -1.0, 0.0, 7.5, -2.25, 0.0, 12.0];
        let batch: Vec<_> = pnls
            .iter()
            .map(|&p| raw_trade("EURUSD", json!(p), &[]))
            .collect();
        let m = compute_key_metrics(&normalize(&batch)).unwrap();
        assert!((0.0..=1.0).contains(&m.win_rate));
        assert!(approx(m.win_rate, 3.0 / 7.0));
        assert!(m.average_win >= 0.0);
        assert!(m.average_loss <= 0.0);
    }
}
