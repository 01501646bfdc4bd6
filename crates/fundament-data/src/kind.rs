//! The finite set of data kinds and their static descriptors.
//!
//! Everything that differs between kinds (endpoint, field table, cache
//! category, payload shape, expiry policy) lives in one table so that a single
//! fetch-normalize-cache routine can serve all of them.

use crate::error::{DataError, Result};
use crate::fields::{self, FieldMap};
use chrono::{Days, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Reporting period of a financial statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Quarterly report (10-Q)
    Quarter,
    /// Annual report (10-K)
    Annual,
}

impl Period {
    /// Both periods, quarterly first.
    pub const ALL: [Self; 2] = [Self::Quarter, Self::Annual];

    /// Provider / cache-key representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quarter => "quarter",
            Self::Annual => "annual",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "quarter" => Ok(Self::Quarter),
            "annual" => Ok(Self::Annual),
            _ => Err(DataError::input(format!(
                "Period must be either 'quarter' or 'annual', got '{}'",
                s
            ))),
        }
    }
}

/// How long a cached payload stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Calendar days
    Days(u64),
    /// Calendar months
    Months(u32),
}

impl Ttl {
    /// Expiry date for an entry written on `today`.
    pub fn expiry_from(&self, today: NaiveDate) -> NaiveDate {
        let expiry = match *self {
            Self::Days(n) => today.checked_add_days(Days::new(n)),
            Self::Months(n) => today.checked_add_months(Months::new(n)),
        };
        expiry.unwrap_or(NaiveDate::MAX)
    }
}

/// Shape of the normalized payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Exactly one record, fields addressed by column name
    Singleton,
    /// Rows indexed by a `date` column
    TimeSeries,
    /// Time series nested under a wrapper key of a JSON object
    WrappedTimeSeries(&'static str),
    /// A single `ticker` column
    TickerList,
}

/// Static description of a data kind.
#[derive(Debug, Clone, Copy)]
pub struct KindDescriptor {
    /// Cache key category (first path segment)
    pub category: &'static str,
    /// Endpoint path prefix; the identifier is appended
    pub endpoint: &'static str,
    /// Field renaming table
    pub fields: FieldMap,
    /// Payload shape
    pub shape: Shape,
    /// Whether the kind is requested per reporting period
    pub periodic: bool,
}

/// The data kinds served by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// Company profile
    Profile,
    /// Income statement
    IncomeStatement,
    /// Balance sheet
    BalanceSheet,
    /// Cash flow statement
    CashFlow,
    /// Daily historical prices
    HistoricalPrices,
    /// All tickers listed on an exchange
    ExchangeTickerList,
}

const PROFILE: KindDescriptor = KindDescriptor {
    category: "profile",
    endpoint: "/profile/",
    fields: fields::PROFILE,
    shape: Shape::Singleton,
    periodic: false,
};

const INCOME_STATEMENT: KindDescriptor = KindDescriptor {
    category: "income_statement",
    endpoint: "/income-statement/",
    fields: fields::INCOME_STATEMENT,
    shape: Shape::TimeSeries,
    periodic: true,
};

const BALANCE_SHEET: KindDescriptor = KindDescriptor {
    category: "balance_sheet",
    endpoint: "/balance-sheet-statement/",
    fields: fields::BALANCE_SHEET,
    shape: Shape::TimeSeries,
    periodic: true,
};

const CASH_FLOW: KindDescriptor = KindDescriptor {
    category: "cash_flow",
    endpoint: "/cash-flow-statement/",
    fields: fields::CASH_FLOW,
    shape: Shape::TimeSeries,
    periodic: true,
};

const HISTORICAL_PRICES: KindDescriptor = KindDescriptor {
    category: "historical_prices",
    endpoint: "/historical-price-full/",
    fields: fields::HISTORICAL_PRICES,
    shape: Shape::WrappedTimeSeries("historical"),
    periodic: false,
};

const EXCHANGE_TICKER_LIST: KindDescriptor = KindDescriptor {
    category: "exchange_tickers",
    endpoint: "/symbol/",
    fields: fields::EXCHANGE_TICKERS,
    shape: Shape::TickerList,
    periodic: false,
};

impl DataKind {
    /// Every kind.
    pub const ALL: [Self; 6] = [
        Self::Profile,
        Self::IncomeStatement,
        Self::BalanceSheet,
        Self::CashFlow,
        Self::HistoricalPrices,
        Self::ExchangeTickerList,
    ];

    /// Static descriptor of this kind.
    pub const fn descriptor(&self) -> &'static KindDescriptor {
        match self {
            Self::Profile => &PROFILE,
            Self::IncomeStatement => &INCOME_STATEMENT,
            Self::BalanceSheet => &BALANCE_SHEET,
            Self::CashFlow => &CASH_FLOW,
            Self::HistoricalPrices => &HISTORICAL_PRICES,
            Self::ExchangeTickerList => &EXCHANGE_TICKER_LIST,
        }
    }

    /// Cache lifetime. Quarterly statements refresh every three months,
    /// prices daily, everything else every six months.
    pub const fn ttl(&self, period: Option<Period>) -> Ttl {
        match (self, period) {
            (Self::HistoricalPrices, _) => Ttl::Days(1),
            (_, Some(Period::Quarter)) => Ttl::Months(3),
            _ => Ttl::Months(6),
        }
    }

    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::IncomeStatement => "income statement",
            Self::BalanceSheet => "balance sheet",
            Self::CashFlow => "cash flow",
            Self::HistoricalPrices => "historical prices",
            Self::ExchangeTickerList => "exchange ticker list",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
