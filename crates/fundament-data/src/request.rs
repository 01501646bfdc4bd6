//! Parameterized requests for a single data kind.

use crate::error::{DataError, Result};
use crate::fields::FieldMap;
use crate::kind::{DataKind, Period, Shape, Ttl};
use crate::normalize::{self, DATE_COLUMN};
use chrono::NaiveDate;
use polars::prelude::*;
use serde_json::{Map, Value};
use std::fmt;

/// Everything needed to fetch, normalize and cache one payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataRequest {
    kind: DataKind,
    symbol: String,
    period: Option<Period>,
    from: Option<NaiveDate>,
}

impl DataRequest {
    /// Company profile of `ticker`.
    pub fn profile(ticker: &str) -> Result<Self> {
        Self::for_ticker(DataKind::Profile, ticker, None)
    }

    /// Income statements of `ticker` for `period`.
    pub fn income_statement(ticker: &str, period: Period) -> Result<Self> {
        Self::for_ticker(DataKind::IncomeStatement, ticker, Some(period))
    }

    /// Balance sheets of `ticker` for `period`.
    pub fn balance_sheet(ticker: &str, period: Period) -> Result<Self> {
        Self::for_ticker(DataKind::BalanceSheet, ticker, Some(period))
    }

    /// Cash flow statements of `ticker` for `period`.
    pub fn cash_flow(ticker: &str, period: Period) -> Result<Self> {
        Self::for_ticker(DataKind::CashFlow, ticker, Some(period))
    }

    /// Statement request with the period given as text.
    ///
    /// Only `"quarter"` and `"annual"` are accepted.
    pub fn statement(kind: DataKind, ticker: &str, period: &str) -> Result<Self> {
        if !kind.descriptor().periodic {
            return Err(DataError::input(format!("{} is not a periodic statement", kind)));
        }
        let period = period.parse::<Period>()?;
        Self::for_ticker(kind, ticker, Some(period))
    }

    /// Daily prices of `ticker`, optionally starting at `from`.
    pub fn historical_prices(ticker: &str, from: Option<NaiveDate>) -> Result<Self> {
        let mut request = Self::for_ticker(DataKind::HistoricalPrices, ticker, None)?;
        request.from = from;
        Ok(request)
    }

    /// Every ticker listed on `exchange` (e.g. `"NASDAQ"`).
    pub fn exchange_tickers(exchange: &str) -> Result<Self> {
        let exchange = exchange.trim();
        if exchange.is_empty() || !exchange.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DataError::input(format!(
                "exchange must be a non-empty alphanumeric code, got '{}'",
                exchange
            )));
        }

        Ok(Self {
            kind: DataKind::ExchangeTickerList,
            symbol: exchange.to_ascii_uppercase(),
            period: None,
            from: None,
        })
    }

    fn for_ticker(kind: DataKind, ticker: &str, period: Option<Period>) -> Result<Self> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(DataError::input("ticker must not be empty"));
        }
        if ticker
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\')
            || ticker.starts_with('.')
        {
            return Err(DataError::input(format!("invalid ticker '{}'", ticker)));
        }

        Ok(Self {
            kind,
            symbol: ticker.to_ascii_uppercase(),
            period,
            from: None,
        })
    }

    /// Requested kind.
    pub const fn kind(&self) -> DataKind {
        self.kind
    }

    /// Ticker or exchange code, uppercased.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Reporting period of statement requests.
    pub const fn period(&self) -> Option<Period> {
        self.period
    }

    /// First price date of historical price requests.
    pub const fn from_date(&self) -> Option<NaiveDate> {
        self.from
    }

    /// Endpoint path relative to the provider base URL.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.kind.descriptor().endpoint, self.symbol)
    }

    /// Query parameters other than the API key.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(period) = self.period {
            query.push(("period", period.to_string()));
        }
        if let Some(from) = self.from {
            query.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        query
    }

    /// Cache key: `<category>/<symbol>[_<period>][_from_<date>].feather`.
    pub fn cache_key(&self) -> String {
        let mut key = format!("{}/{}", self.kind.descriptor().category, self.symbol);
        if let Some(period) = self.period {
            key.push('_');
            key.push_str(period.as_str());
        }
        if let Some(from) = self.from {
            key.push_str(&format!("_from_{}", from.format("%Y-%m-%d")));
        }
        key.push_str(".feather");
        key
    }

    /// Cache lifetime of the normalized payload.
    pub const fn ttl(&self) -> Ttl {
        self.kind.ttl(self.period)
    }

    /// Convert a raw provider payload into the normalized frame.
    pub fn normalize(&self, raw: &Value) -> Result<DataFrame> {
        let descriptor = self.kind.descriptor();
        match descriptor.shape {
            Shape::Singleton => {
                let records = normalize::as_records(raw)?;
                let Some(first) = records.first() else {
                    return Err(DataError::api(format!(
                        "no {} returned for {}",
                        self.kind, self.symbol
                    )));
                };
                normalize::records_to_frame(&[*first], descriptor.fields, None)
            }
            Shape::TimeSeries => {
                let records = normalize::as_records(raw)?;
                time_series(&records, descriptor.fields)
            }
            Shape::WrappedTimeSeries(wrapper) => match raw.get(wrapper) {
                Some(inner) => {
                    let records = normalize::as_records(inner)?;
                    time_series(&records, descriptor.fields)
                }
                None => normalize::empty_time_series(),
            },
            Shape::TickerList => {
                let records = normalize::as_records(raw)?;
                if records.is_empty() {
                    return Err(DataError::api(format!(
                        "no tickers returned for exchange {}",
                        self.symbol
                    )));
                }
                let frame = normalize::records_to_frame(&records, descriptor.fields, None)?;
                frame.select(["ticker"]).map_err(|_| {
                    DataError::api("malformed payload: ticker list carries no symbol field")
                })
            }
        }
    }
}

fn time_series(records: &[&Map<String, Value>], fields: FieldMap) -> Result<DataFrame> {
    if records.is_empty() {
        return normalize::empty_time_series();
    }
    let frame = normalize::records_to_frame(records, fields, Some(DATE_COLUMN))?;
    normalize::parse_date_index(frame)
}

impl fmt::Display for DataRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.kind, self.symbol)?;
        if let Some(period) = self.period {
            write!(f, " ({})", period)?;
        }
        Ok(())
    }
}
