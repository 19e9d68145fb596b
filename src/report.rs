use std::fmt::Write;

use crate::analysis::{ConfirmationStats, GroupPerformance, MetricsBundle};
use crate::error::AnalysisError;

/// Text rendering of one analysis run.
#[derive(Debug, Clone)]
pub struct JournalReport {
    bundle: Option<MetricsBundle>,
}

impl JournalReport {
    pub fn from_outcome(outcome: Result<MetricsBundle, AnalysisError>) -> Self {
        Self {
            bundle: outcome.ok(),
        }
    }

    pub fn print_summary(&self) {
        print!("{}", self.render());
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) -> std::fmt::Result {
        let rule = "=".repeat(60);
        let thin = "  ───────────────────────────────────";

        writeln!(out, "\n{}", rule)?;
        writeln!(out, "  TRADING JOURNAL")?;
        writeln!(out, "{}", rule)?;

        let Some(bundle) = &self.bundle else {
            writeln!(out, "  No trades recorded yet. Nothing to analyze.")?;
            writeln!(out, "{}", rule)?;
            return Ok(());
        };
        let m = &bundle.key_metrics;

        writeln!(
            out,
            "  Generated:   {}",
            bundle.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(out)?;
        writeln!(out, "  PERFORMANCE")?;
        writeln!(out, "{}", thin)?;
        writeln!(out, "  Trades:      {}", m.total_trades)?;
        writeln!(
            out,
            "  Win/Loss/BE: {} / {} / {}",
            m.winning_trades, m.losing_trades, m.breakeven_trades
        )?;
        writeln!(out, "  Win Rate:    {:.2}%", m.win_rate * 100.0)?;
        writeln!(out, "  Avg Win:     {:+.2}", m.average_win)?;
        writeln!(out, "  Avg Loss:    {:+.2}", m.average_loss)?;
        writeln!(out, "  Net Profit:  {:+.2}", m.net_profit)?;
        writeln!(out, "  Most Traded: {}", m.most_traded_instrument)?;
        writeln!(out, "  Top Improvement: {}", m.most_common_improvement_note)?;

        write_groups(out, "BY ENTRY TYPE", &m.performance_by_entry_type, thin)?;
        write_groups(out, "BY INSTRUMENT", &m.performance_by_instrument, thin)?;

        let c = &bundle.confirmations;
        if !c.per_flag.is_empty() {
            writeln!(out)?;
            writeln!(out, "  MOST PROFITABLE CONFIRMATIONS")?;
            writeln!(out, "{}", thin)?;
            for s in &c.most_profitable {
                write_confirmation(out, s, "win", s.assertiveness)?;
            }
            writeln!(out)?;
            writeln!(out, "  LEAST PROFITABLE CONFIRMATIONS")?;
            writeln!(out, "{}", thin)?;
            for s in &c.least_profitable {
                write_confirmation(out, s, "loss", s.inefficiency)?;
            }
        }

        writeln!(out, "{}", rule)?;
        Ok(())
    }
}

fn write_groups(
    out: &mut String,
    title: &str,
    groups: &[GroupPerformance],
    thin: &str,
) -> std::fmt::Result {
    if groups.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "  {}", title)?;
    writeln!(out, "{}", thin)?;
    for g in groups {
        writeln!(out, "  {:>14}: {} trades | Avg {:+.2}", g.key, g.count, g.mean)?;
    }
    Ok(())
}

fn write_confirmation(
    out: &mut String,
    s: &ConfirmationStats,
    rate_label: &str,
    rate: f64,
) -> std::fmt::Result {
    writeln!(
        out,
        "  {:>14}: Avg {:+.2} ({} {:.2}%) | n={}",
        s.name, s.average_profit, rate_label, rate, s.total
    )
}
