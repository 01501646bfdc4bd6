//! Exchange search and screening.

use crate::error::CliError;
use fundament::screen::{column_mean, mean_above};
use fundament::{Asset, ExchangeUniverse, Universe, search};
use fundament_data::{Context, DataKind, DateRange, Period};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::warn;

/// What an asset must satisfy to pass the screen.
#[derive(Debug, Clone)]
pub(crate) struct Criteria {
    pub(crate) kind: DataKind,
    pub(crate) column: String,
    pub(crate) threshold: f64,
    pub(crate) period: Period,
    pub(crate) range: DateRange,
}

async fn load_universe(
    ctx: &Context,
    exchange: &str,
    refresh: bool,
) -> Result<ExchangeUniverse, CliError> {
    let universe = if refresh {
        search::refresh_exchange_universe(ctx, exchange).await?
    } else {
        search::exchange_universe(ctx, exchange).await?
    };
    Ok(universe)
}

pub(crate) async fn search(
    ctx: &Context,
    exchange: &str,
    offset: usize,
    limit: Option<usize>,
    refresh: bool,
) -> Result<(), CliError> {
    let universe = load_universe(ctx, exchange, refresh).await?;
    for ticker in universe.page(offset, limit) {
        println!("{}", ticker);
    }
    eprintln!("{} tickers listed on {}", universe.size(), universe.exchange());
    Ok(())
}

pub(crate) async fn screen(
    ctx: &Context,
    exchange: &str,
    offset: usize,
    limit: usize,
    criteria: Criteria,
) -> Result<(), CliError> {
    let universe = load_universe(ctx, exchange, false).await?;
    let tickers = universe.page(offset, Some(limit));

    let pb = ProgressBar::new(tickers.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut assets = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        pb.set_message(ticker.clone());
        match Asset::load(ctx, ticker).await {
            Ok(asset) => assets.push(asset),
            Err(e) => warn!(ticker = %ticker, error = %e, "skipping asset"),
        }
        pb.inc(1);
    }
    pb.finish_with_message(format!("Loaded {} of {} assets", assets.len(), tickers.len()));

    let predicate = mean_above(
        criteria.kind,
        criteria.column.as_str(),
        criteria.range,
        criteria.period,
        criteria.threshold,
    );
    let picked = fundament::screen(&assets, predicate);

    println!(
        "{} of {} assets with mean {} {} above {}:",
        picked.len(),
        assets.len(),
        criteria.period,
        criteria.column,
        criteria.threshold
    );
    for asset in picked {
        let mean = asset
            .statement(criteria.kind, &criteria.range, criteria.period)
            .and_then(|frame| column_mean(&frame, &criteria.column))?;
        match mean {
            Some(mean) => println!("  {:<8} {:>20.2}", asset.ticker(), mean),
            None => println!("  {}", asset.ticker()),
        }
    }
    Ok(())
}
