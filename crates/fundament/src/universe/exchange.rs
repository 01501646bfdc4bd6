//! All tickers listed on one exchange.

use fundament_data::{DataKind, DataError, Dataset, Result};

/// Tickers of an exchange, in provider order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeUniverse {
    exchange: String,
    tickers: Vec<String>,
}

impl ExchangeUniverse {
    /// Create a universe from known tickers.
    pub fn new(exchange: impl Into<String>, tickers: Vec<String>) -> Self {
        Self {
            exchange: exchange.into(),
            tickers,
        }
    }

    /// Build from a populated exchange ticker list dataset.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let request = dataset.request();
        if request.kind() != DataKind::ExchangeTickerList {
            return Err(DataError::input(format!(
                "{} is not an exchange ticker list",
                request
            )));
        }
        Ok(Self::new(request.symbol(), dataset.tickers()?))
    }

    /// Exchange code.
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// All tickers.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// A window of at most `limit` tickers starting at `offset`.
    pub fn page(&self, offset: usize, limit: Option<usize>) -> &[String] {
        let start = offset.min(self.tickers.len());
        let end = limit.map_or(self.tickers.len(), |l| start.saturating_add(l).min(self.tickers.len()));
        &self.tickers[start..end]
    }
}
