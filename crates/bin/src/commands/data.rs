//! Single-ticker data commands.

use crate::error::CliError;
use crate::render::{self, Format};
use fundament_data::{Context, DataKind, DataRequest, Dataset, DateRange};

/// Acquire a dataset, bypassing the cache when `refresh` is set.
pub(crate) async fn load(
    ctx: &Context,
    request: DataRequest,
    refresh: bool,
) -> Result<Dataset, CliError> {
    let dataset = if refresh {
        Dataset::new(request).update(ctx).await?
    } else {
        Dataset::acquire(ctx, request).await?
    };
    Ok(dataset)
}

pub(crate) async fn profile(
    ctx: &Context,
    ticker: &str,
    refresh: bool,
    format: Format,
) -> Result<(), CliError> {
    let dataset = load(ctx, DataRequest::profile(ticker)?, refresh).await?;
    render::print_record(dataset.data()?, format)
}

pub(crate) async fn statement(
    ctx: &Context,
    ticker: &str,
    kind: DataKind,
    period: &str,
    range: DateRange,
    refresh: bool,
    format: Format,
) -> Result<(), CliError> {
    let request = DataRequest::statement(kind, ticker, period)?;
    let dataset = load(ctx, request, refresh).await?;
    render::print_frame(&range.apply(dataset.data()?)?, format)
}

pub(crate) async fn prices(
    ctx: &Context,
    ticker: &str,
    range: DateRange,
    refresh: bool,
    format: Format,
) -> Result<(), CliError> {
    let dataset = load(ctx, DataRequest::historical_prices(ticker, None)?, refresh).await?;
    render::print_frame(&range.apply(dataset.data()?)?, format)
}
