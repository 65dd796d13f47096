mod cli;
mod commands;
mod logging;

use std::io;

use clap::Parser;
use market_tickers::{CsvDatasetProvider, DatasetSnapshot, ResolverConfig, TickerResolver};

use cli::{Cli, Command};
use logging::init_tracing;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = ResolverConfig::from_env();
    let provider = CsvDatasetProvider::new(cli.data_dir.clone());
    tracing::debug!("Dataset root: {}", provider.root().display());

    match &cli.command {
        Command::Batch(args) => {
            let mut countries = vec![config.default_country.clone()];
            countries.extend(args.country.clone());
            countries.extend(args.preload.iter().cloned());
            let countries: Vec<&str> = countries.iter().map(String::as_str).collect();

            let snapshot = DatasetSnapshot::load(&provider, &countries);
            let resolver = TickerResolver::with_config(snapshot, config);
            let results = commands::batch(io::stdin().lock(), args.country.as_deref(), &resolver)?;

            println!("{}", commands::render_batch(&results, cli.json)?);
            let failed = results.iter().filter(|r| !r.is_ok()).count();
            if failed > 0 {
                anyhow::bail!("{} of {} names could not be resolved", failed, results.len());
            }
        }
        command => {
            let resolver = TickerResolver::with_config(provider, config);
            let resolution = commands::resolve(command, &resolver)?;
            println!("{}", commands::render_one(&resolution, cli.json)?);
        }
    }

    Ok(())
}
