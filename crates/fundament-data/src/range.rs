//! Inclusive date-range selection over date-indexed frames.

use crate::error::{DataError, Result};
use crate::normalize::DATE_COLUMN;
use chrono::NaiveDate;
use polars::prelude::*;

/// An inclusive `[start, end]` calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First included date
    pub start: NaiveDate,
    /// Last included date
    pub end: NaiveDate,
}

impl DateRange {
    /// Range between two dates.
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse `YYYY-MM-DD` bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Range covering every representable date.
    pub const fn all() -> Self {
        Self::new(NaiveDate::MIN, NaiveDate::MAX)
    }

    /// Whether `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Rows of `frame` dated within the range.
    pub fn apply(&self, frame: &DataFrame) -> Result<DataFrame> {
        date_range(frame, self.start, self.end)
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| DataError::input(format!("invalid date '{}': {}", value, e)))
}

/// Rows of `frame` whose `date` lies in `[start, end]`, in frame order.
///
/// The frame must carry a `Date`-typed `date` column. A reversed range selects
/// nothing.
pub fn date_range(frame: &DataFrame, start: NaiveDate, end: NaiveDate) -> Result<DataFrame> {
    match frame.column(DATE_COLUMN).map(Column::dtype) {
        Ok(DataType::Date) => {}
        _ => return Err(DataError::input("data must be indexed by a date column")),
    }

    Ok(frame
        .clone()
        .lazy()
        .filter(
            col(DATE_COLUMN)
                .gt_eq(date_lit(start))
                .and(col(DATE_COLUMN).lt_eq(date_lit(end))),
        )
        .collect()?)
}

/// A `Date`-typed literal.
fn date_lit(date: NaiveDate) -> Expr {
    lit(Series::new(PlSmallStr::EMPTY, [date]))
}
