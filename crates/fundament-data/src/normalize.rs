//! Conversion of provider JSON into typed data frames.

use crate::error::{DataError, Result};
use crate::fields::FieldMap;
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::warn;

/// Name of the canonical index column of time-series frames.
pub const DATE_COLUMN: &str = "date";

/// Column type inferred from the JSON values of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Null,
    Int,
    Float,
    Bool,
    Text,
}

impl ValueKind {
    fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_i64() => Self::Int,
            Value::Number(_) => Self::Float,
            _ => Self::Text,
        }
    }

    const fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Null, k) | (k, Self::Null) => k,
            (Self::Int, Self::Int) => Self::Int,
            (Self::Int | Self::Float, Self::Int | Self::Float) => Self::Float,
            (Self::Bool, Self::Bool) => Self::Bool,
            _ => Self::Text,
        }
    }
}

/// Interpret a payload as a list of JSON objects.
pub fn as_records(raw: &Value) -> Result<Vec<&Map<String, Value>>> {
    let items = raw
        .as_array()
        .ok_or_else(|| DataError::api("malformed payload: expected a list of records"))?;

    items
        .iter()
        .map(|item| {
            item.as_object()
                .ok_or_else(|| DataError::api("malformed payload: expected an object record"))
        })
        .collect()
}

/// Build a frame from records, renaming fields through `fields`.
///
/// Columns appear in first-seen field order, except that `lead` (an internal
/// name) is moved to the front when present. When two fields map to the same
/// internal name, the first column is kept and the other dropped.
pub fn records_to_frame(
    records: &[&Map<String, Value>],
    fields: FieldMap,
    lead: Option<&str>,
) -> Result<DataFrame> {
    let mut order: Vec<&str> = Vec::new();
    let mut seen = HashSet::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key.as_str()) {
                order.push(key.as_str());
            }
        }
    }

    if let Some(lead) = lead {
        if let Some(pos) = order.iter().position(|f| fields.rename(f) == lead) {
            let field = order.remove(pos);
            order.insert(0, field);
        }
    }

    let mut names = HashSet::new();
    let mut columns = Vec::with_capacity(order.len());
    for field in order {
        let name = fields.rename(field);
        if !names.insert(name) {
            warn!(field, column = name, "dropping field that duplicates a column");
            continue;
        }
        columns.push(build_column(records, field, name));
    }

    DataFrame::new(columns)
        .map_err(|e| DataError::api(format!("malformed payload: {}", e)))
}

/// A zero-row frame carrying only a `Date`-typed index column.
pub fn empty_time_series() -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        Series::new_empty(DATE_COLUMN.into(), &DataType::Date).into(),
    ])?)
}

/// Parse the `date` column of a time-series frame into calendar dates.
///
/// Values are `YYYY-MM-DD`, optionally followed by a time of day which is
/// discarded. Any other non-null value is a malformed payload.
pub fn parse_date_index(mut frame: DataFrame) -> Result<DataFrame> {
    let column = frame
        .column(DATE_COLUMN)
        .map_err(|_| DataError::api("malformed payload: records carry no date field"))?;
    let text = column
        .str()
        .map_err(|_| DataError::api("malformed payload: date field is not text"))?;

    let dates = text
        .into_iter()
        .map(|value| value.map(parse_calendar_date).transpose())
        .collect::<Result<Vec<Option<NaiveDate>>>>()?;

    frame.with_column(Series::new(DATE_COLUMN.into(), dates))?;
    Ok(frame)
}

fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
                .map(|dt| dt.date())
        })
        .map_err(|_| DataError::api(format!("malformed payload: unparseable date '{}'", value)))
}

fn build_column(records: &[&Map<String, Value>], field: &str, name: &str) -> Column {
    let kind = records
        .iter()
        .filter_map(|r| r.get(field))
        .fold(ValueKind::Null, |acc, v| acc.merge(ValueKind::of(v)));

    let values = records.iter().map(|r| r.get(field));
    let series = match kind {
        ValueKind::Int => Series::new(
            name.into(),
            values.map(|v| v.and_then(Value::as_i64)).collect::<Vec<_>>(),
        ),
        ValueKind::Float => Series::new(
            name.into(),
            values.map(|v| v.and_then(Value::as_f64)).collect::<Vec<_>>(),
        ),
        ValueKind::Bool => Series::new(
            name.into(),
            values.map(|v| v.and_then(Value::as_bool)).collect::<Vec<_>>(),
        ),
        ValueKind::Null | ValueKind::Text => Series::new(
            name.into(),
            values.map(|v| v.and_then(text_value)).collect::<Vec<_>>(),
        ),
    };

    series.into()
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
