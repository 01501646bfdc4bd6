//! Exchange search.

use crate::universe::ExchangeUniverse;
use fundament_data::{Context, DataRequest, Dataset, Result};
use tracing::debug;

/// Every ticker listed on `exchange`, served from the cache when possible.
pub async fn exchange_universe(ctx: &Context, exchange: &str) -> Result<ExchangeUniverse> {
    let request = DataRequest::exchange_tickers(exchange)?;
    let dataset = Dataset::acquire(ctx, request).await?;
    let universe = ExchangeUniverse::from_dataset(&dataset)?;
    debug!(exchange = universe.exchange(), tickers = universe.tickers().len(), "exchange universe");
    Ok(universe)
}

/// Like [`exchange_universe`], but always re-fetches the listing.
pub async fn refresh_exchange_universe(ctx: &Context, exchange: &str) -> Result<ExchangeUniverse> {
    let request = DataRequest::exchange_tickers(exchange)?;
    let dataset = Dataset::new(request).update(ctx).await?;
    ExchangeUniverse::from_dataset(&dataset)
}
