//! CLI argument definitions.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ticker` | Resolve a name within one category |
//! | `get` | Resolve a name across categories |
//! | `default-index` | Benchmark index for a stock or country |
//! | `batch` | Resolve one name per stdin line |
//!
//! # Examples
//!
//! ```bash
//! market-tickers ticker "Tata Motors" --country india
//! market-tickers get Nifty
//! market-tickers --json default-index Nvidia --country us
//! cat names.txt | market-tickers batch --country india
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Resolve human-typed security names into market tickers.
#[derive(Debug, Parser)]
#[command(name = "market-tickers", author, version, about)]
pub struct Cli {
    /// Root of the CSV dataset tree.
    #[arg(long, global = true, env = "MT_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a name within one category (stock by default).
    Ticker(TickerArgs),
    /// Resolve a name trying index, currency, stock, then ETF.
    Get(LookupArgs),
    /// Benchmark index for a stock or its country.
    DefaultIndex(LookupArgs),
    /// Resolve every line of stdin with smart resolution.
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
pub struct TickerArgs {
    /// Name to resolve, e.g. "Reliance Industries".
    pub name: String,

    /// Country for stock lookups and tie-breaks.
    #[arg(long)]
    pub country: Option<String>,

    /// stock, index, etf, or currency.
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    pub name: String,

    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(long)]
    pub country: Option<String>,

    /// Extra stock countries to preload besides the default and `--country`.
    #[arg(long = "preload", value_delimiter = ',')]
    pub preload: Vec<String>,
}
