//! Asset screening.

use crate::asset::Asset;
use fundament_data::{DataKind, DateRange, Period, Result};
use polars::prelude::*;
use std::borrow::Borrow;
use tracing::debug;

/// Keep the assets accepted by `predicate`, in input order.
pub fn screen<I, P>(assets: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Borrow<Asset>,
    P: FnMut(&Asset) -> bool,
{
    assets
        .into_iter()
        .filter(|asset| predicate(asset.borrow()))
        .collect()
}

/// Mean of a numeric column, ignoring nulls. `None` for an empty column.
pub fn column_mean(frame: &DataFrame, column: &str) -> Result<Option<f64>> {
    let values = frame.column(column)?.cast(&DataType::Float64)?;
    Ok(values.f64()?.mean())
}

/// Predicate accepting assets whose mean `column` over `range` in the `kind`
/// statement exceeds `threshold`.
///
/// Assets lacking the statement or the column, or with no rows in the range,
/// are rejected.
pub fn mean_above(
    kind: DataKind,
    column: impl Into<String>,
    range: DateRange,
    period: Period,
    threshold: f64,
) -> impl Fn(&Asset) -> bool {
    let column = column.into();
    move |asset: &Asset| {
        let mean = asset
            .statement(kind, &range, period)
            .and_then(|frame| column_mean(&frame, &column));
        match mean {
            Ok(Some(mean)) => mean > threshold,
            Ok(None) => false,
            Err(e) => {
                debug!(ticker = asset.ticker(), error = %e, "asset skipped by screen");
                false
            }
        }
    }
}
