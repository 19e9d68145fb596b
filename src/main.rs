use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trade_journal::analysis::MetricsBundle;
use trade_journal::config::Config;
use trade_journal::journal::JournalStore;
use trade_journal::pipeline;
use trade_journal::report::JournalReport;

const USAGE: &str = "\
usage: trade-journal [command]

commands:
  report                              analyze the journal (default)
  table                               print the normalized trade table as JSON
  add-trade '<json object>'           append a trade to the journal
  add-confirmation <name> [desc]      register a confirmation flag
  add-improvement <name> [desc]       register an improvement note";

fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let store = JournalStore::new(&cfg);
    if cfg.seed_sample_data {
        store.seed_sample_data()?;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("report");
    let arg = |i: usize| args.get(i).map(String::as_str);

    match command {
        "report" => run_report(&cfg, &store),
        "table" => run_table(&store),
        "add-trade" => {
            let raw = arg(1).context("add-trade needs a JSON object argument")?;
            let trade: serde_json::Value =
                serde_json::from_str(raw).context("add-trade argument is not valid JSON")?;
            store.append_trade(trade)?;
            Ok(())
        }
        "add-confirmation" => {
            let name = arg(1).context("add-confirmation needs a name")?;
            if !store.add_confirmation(name, arg(2).unwrap_or(""))? {
                println!("Confirmation '{}' already exists.", name.trim().to_lowercase());
            }
            Ok(())
        }
        "add-improvement" => {
            let name = arg(1).context("add-improvement needs a name")?;
            if !store.add_improvement(name, arg(2).unwrap_or(""))? {
                println!("Improvement '{}' already exists.", name.trim());
            }
            Ok(())
        }
        "help" | "-h" | "--help" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => bail!("unknown command '{}'\n\n{}", other, USAGE),
    }
}

fn run_report(cfg: &Config, store: &JournalStore) -> Result<()> {
    let raw = store.load_trades()?;
    let table = pipeline::normalize_value(&raw)
        .with_context(|| format!("reading {}", store.trades_file().display()))?;
    info!(
        "Loaded {} trades with {} confirmation columns",
        table.len(),
        table.flag_names().len()
    );

    let outcome = MetricsBundle::compute(&table, cfg.ranking_size);
    JournalReport::from_outcome(outcome).print_summary();
    Ok(())
}

fn run_table(store: &JournalStore) -> Result<()> {
    let raw = store.load_trades()?;
    let table = pipeline::normalize_value(&raw)
        .with_context(|| format!("reading {}", store.trades_file().display()))?;
    println!("{}", serde_json::to_string_pretty(&table.to_records())?);
    Ok(())
}
