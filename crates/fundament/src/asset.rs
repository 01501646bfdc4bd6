//! Per-ticker composition of every dataset kind.

use fundament_data::{
    Context, DataError, DataKind, DataRequest, Dataset, DateRange, Period, Result,
};
use polars::prelude::DataFrame;
use std::collections::HashMap;
use tracing::info;

/// Statement kinds held for both periods.
const STATEMENTS: [DataKind; 3] = [
    DataKind::IncomeStatement,
    DataKind::BalanceSheet,
    DataKind::CashFlow,
];

type Slot = (DataKind, Option<Period>);

/// Profile, daily prices and financial statements of one ticker.
#[derive(Debug, Clone)]
pub struct Asset {
    ticker: String,
    datasets: HashMap<Slot, Dataset>,
}

impl Asset {
    /// Every request an asset is made of, in acquisition order.
    pub fn requests(ticker: &str) -> Result<Vec<DataRequest>> {
        let mut requests = vec![
            DataRequest::profile(ticker)?,
            DataRequest::historical_prices(ticker, None)?,
        ];
        for period in Period::ALL {
            requests.push(DataRequest::income_statement(ticker, period)?);
            requests.push(DataRequest::balance_sheet(ticker, period)?);
            requests.push(DataRequest::cash_flow(ticker, period)?);
        }
        Ok(requests)
    }

    /// Acquire every dataset of `ticker`, one after the other.
    pub async fn load(ctx: &Context, ticker: &str) -> Result<Self> {
        info!(ticker, "loading asset");
        let mut datasets = Vec::new();
        for request in Self::requests(ticker)? {
            datasets.push(Dataset::acquire(ctx, request).await?);
        }
        Self::from_datasets(ticker, datasets)
    }

    /// Re-fetch every dataset, returning a new asset.
    pub async fn update(&self, ctx: &Context) -> Result<Self> {
        info!(ticker = %self.ticker, "updating asset");
        let mut datasets = Vec::new();
        for request in Self::requests(&self.ticker)? {
            datasets.push(Dataset::new(request).update(ctx).await?);
        }
        Self::from_datasets(&self.ticker, datasets)
    }

    /// Assemble an asset from datasets of `ticker`.
    ///
    /// Kinds without a dataset stay empty and report
    /// [`DataError::NotAvailable`] when accessed. Exchange listings and
    /// datasets of other tickers are rejected.
    pub fn from_datasets(ticker: &str, datasets: impl IntoIterator<Item = Dataset>) -> Result<Self> {
        let requests = Self::requests(ticker)?;
        let ticker = requests[0].symbol().to_string();

        let mut slots: HashMap<Slot, Dataset> = requests
            .into_iter()
            .map(|r| ((r.kind(), r.period()), Dataset::new(r)))
            .collect();

        for dataset in datasets {
            let request = dataset.request();
            if request.kind() == DataKind::ExchangeTickerList || request.symbol() != ticker {
                return Err(DataError::input(format!(
                    "{} does not belong to asset {}",
                    request, ticker
                )));
            }
            slots.insert((request.kind(), request.period()), dataset);
        }

        Ok(Self {
            ticker,
            datasets: slots,
        })
    }

    /// Ticker, uppercased.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Underlying dataset of a kind.
    pub fn dataset(&self, kind: DataKind, period: Option<Period>) -> Option<&Dataset> {
        self.datasets.get(&(kind, period))
    }

    /// One-row company profile.
    pub fn profile(&self) -> Result<&DataFrame> {
        self.frame(DataKind::Profile, None)
    }

    /// Daily prices within `range`.
    pub fn historical_prices(&self, range: &DateRange) -> Result<DataFrame> {
        range.apply(self.frame(DataKind::HistoricalPrices, None)?)
    }

    /// Income statements within `range`.
    pub fn income_statement(&self, range: &DateRange, period: Period) -> Result<DataFrame> {
        self.statement(DataKind::IncomeStatement, range, period)
    }

    /// Balance sheets within `range`.
    pub fn balance_sheet(&self, range: &DateRange, period: Period) -> Result<DataFrame> {
        self.statement(DataKind::BalanceSheet, range, period)
    }

    /// Cash flow statements within `range`.
    pub fn cash_flow(&self, range: &DateRange, period: Period) -> Result<DataFrame> {
        self.statement(DataKind::CashFlow, range, period)
    }

    /// Statements of any periodic kind within `range`.
    pub fn statement(&self, kind: DataKind, range: &DateRange, period: Period) -> Result<DataFrame> {
        if !STATEMENTS.contains(&kind) {
            return Err(DataError::input(format!("{} is not a financial statement", kind)));
        }
        range.apply(self.frame(kind, Some(period))?)
    }

    fn frame(&self, kind: DataKind, period: Option<Period>) -> Result<&DataFrame> {
        self.dataset(kind, period)
            .ok_or_else(|| DataError::NotAvailable(format!("{} of {}", kind, self.ticker)))?
            .data()
    }
}
