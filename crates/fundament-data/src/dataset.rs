//! Fetch-and-cache data entities.
//!
//! A [`Dataset`] pairs a [`DataRequest`] with its normalized payload. It is
//! populated once, from the cache when a live entry exists and from the
//! provider otherwise, and never mutated afterwards.

use crate::context::Context;
use crate::error::{DataError, Result};
use crate::request::DataRequest;
use chrono::Local;
use polars::prelude::*;
use tracing::debug;

/// Where a dataset's payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Live disk cache entry
    Cache,
    /// Provider response
    Remote,
    /// Frame handed in by the caller
    Provided,
}

/// Normalized payload for one request.
#[derive(Debug, Clone)]
pub struct Dataset {
    request: DataRequest,
    data: Option<DataFrame>,
    source: Option<Source>,
}

impl Dataset {
    /// An empty, never populated dataset.
    pub const fn new(request: DataRequest) -> Self {
        Self {
            request,
            data: None,
            source: None,
        }
    }

    /// A dataset populated with an existing frame.
    pub const fn from_frame(request: DataRequest, frame: DataFrame) -> Self {
        Self {
            request,
            data: Some(frame),
            source: Some(Source::Provided),
        }
    }

    /// Populate from the cache, falling back to the provider on a miss.
    ///
    /// A fetched payload is cached until today plus the request's TTL.
    pub async fn acquire(ctx: &Context, request: DataRequest) -> Result<Self> {
        let key = request.cache_key();
        if let Some(frame) = ctx.cache().get(&key) {
            debug!(request = %request, "served from cache");
            return Ok(Self {
                request,
                data: Some(frame),
                source: Some(Source::Cache),
            });
        }

        Self::fetch(ctx, request).await
    }

    /// Re-fetch from the provider regardless of the cache, returning a new
    /// dataset. The cache entry is overwritten.
    pub async fn update(&self, ctx: &Context) -> Result<Self> {
        Self::fetch(ctx, self.request.clone()).await
    }

    async fn fetch(ctx: &Context, request: DataRequest) -> Result<Self> {
        let frame = ctx.client().fetch(&request).await?;
        let expiry = request.ttl().expiry_from(Local::now().date_naive());
        ctx.cache().set(&request.cache_key(), &frame, expiry);

        Ok(Self {
            request,
            data: Some(frame),
            source: Some(Source::Remote),
        })
    }

    /// The request this dataset answers.
    pub const fn request(&self) -> &DataRequest {
        &self.request
    }

    /// Normalized payload.
    pub fn data(&self) -> Result<&DataFrame> {
        self.data
            .as_ref()
            .ok_or_else(|| DataError::NotAvailable(self.request.to_string()))
    }

    /// Payload origin, `None` while empty.
    pub const fn source(&self) -> Option<Source> {
        self.source
    }

    /// Whether the dataset holds a payload.
    pub const fn is_populated(&self) -> bool {
        self.data.is_some()
    }

    /// Values of the `ticker` column, in order.
    pub fn tickers(&self) -> Result<Vec<String>> {
        let data = self.data()?;
        let column = data
            .column("ticker")
            .map_err(|_| DataError::input(format!("{} carries no ticker column", self.request)))?;

        Ok(column
            .str()?
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Period;

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new(DataRequest::profile("AAPL").unwrap());
        assert!(!dataset.is_populated());
        assert!(dataset.source().is_none());

        let err = dataset.data().unwrap_err();
        assert!(matches!(err, DataError::NotAvailable(_)));
    }

    #[test]
    fn test_from_frame() {
        let frame = DataFrame::new(vec![
            Series::new("ticker".into(), vec!["AAPL", "MSFT"]).into(),
        ])
        .unwrap();
        let dataset = Dataset::from_frame(DataRequest::exchange_tickers("NASDAQ").unwrap(), frame);

        assert_eq!(dataset.source(), Some(Source::Provided));
        assert_eq!(dataset.tickers().unwrap(), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_tickers_requires_column() {
        let frame = DataFrame::new(vec![Series::new("revenue".into(), vec![1i64]).into()]).unwrap();
        let dataset = Dataset::from_frame(
            DataRequest::income_statement("AAPL", Period::Annual).unwrap(),
            frame,
        );
        assert!(matches!(dataset.tickers(), Err(DataError::Input(_))));
    }
}
