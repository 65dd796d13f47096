//! Command handlers. Each works against any [`TickerLookup`].

use std::io::BufRead;

use anyhow::Context;
use market_tickers::{Category, TickerLookup};
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::Command;

/// One resolved (or failed) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Resolution {
    fn from_result(query: &str, result: market_tickers::Result<String>) -> Self {
        match result {
            Ok(ticker) => Self {
                query: query.to_string(),
                ticker: Some(ticker),
                error: None,
            },
            Err(e) => Self {
                query: query.to_string(),
                ticker: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ticker.is_some()
    }
}

/// Run a single-name command. Resolution errors are returned as errors.
pub fn resolve(command: &Command, resolver: &dyn TickerLookup) -> anyhow::Result<Resolution> {
    let (query, ticker) = match command {
        Command::Ticker(args) => {
            let category = args
                .category
                .as_deref()
                .map(str::parse::<Category>)
                .transpose()?;
            let ticker = resolver.get_ticker(&args.name, args.country.as_deref(), category)?;
            (&args.name, ticker)
        }
        Command::Get(args) => (&args.name, resolver.get(&args.name, args.country.as_deref())?),
        Command::DefaultIndex(args) => (
            &args.name,
            resolver.get_default_index(&args.name, args.country.as_deref())?,
        ),
        Command::Batch(_) => anyhow::bail!("batch is not a single-name command"),
    };

    debug!("{} -> {}", query, ticker);
    Ok(Resolution {
        query: query.clone(),
        ticker: Some(ticker),
        error: None,
    })
}

/// Resolve every non-blank line with smart resolution. Failures are kept
/// in the output rather than aborting the batch.
pub fn batch<R: BufRead>(
    input: R,
    country: Option<&str>,
    resolver: &dyn TickerLookup,
) -> anyhow::Result<Vec<Resolution>> {
    let mut resolutions = Vec::new();
    for (line_no, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", line_no + 1))?;
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        let resolution = Resolution::from_result(name, resolver.get(name, country));
        if let Some(error) = &resolution.error {
            warn!("line {}: {}", line_no + 1, error);
        }
        resolutions.push(resolution);
    }
    Ok(resolutions)
}

/// Format a single-name result: the bare ticker, or a JSON object.
pub fn render_one(resolution: &Resolution, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string(resolution)?);
    }
    Ok(resolution.ticker.clone().unwrap_or_default())
}

/// Format batch results: tab-separated lines, or a JSON array.
pub fn render_batch(resolutions: &[Resolution], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string(resolutions)?);
    }

    let lines: Vec<String> = resolutions
        .iter()
        .map(|r| match (&r.ticker, &r.error) {
            (Some(ticker), _) => format!("{}\t{}", r.query, ticker),
            (None, Some(error)) => format!("{}\tERROR: {}", r.query, error),
            (None, None) => format!("{}\t-", r.query),
        })
        .collect();
    Ok(lines.join("\n"))
}
