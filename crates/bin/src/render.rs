//! Frame output as a table, CSV or JSON.

use crate::error::CliError;
use clap::ValueEnum;
use polars::prelude::*;
use serde_json::{Map, Number, Value};
use std::io::Write;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Pretty-printed table
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of row objects
    Json,
}

/// Write `frame` to stdout in `format`.
pub(crate) fn print_frame(frame: &DataFrame, format: Format) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Table => writeln!(out, "{}", frame)?,
        Format::Csv => write_csv(frame, &mut out)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &records(frame)?)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write a one-row frame as `field  value` lines.
pub(crate) fn print_record(frame: &DataFrame, format: Format) -> Result<(), CliError> {
    if format != Format::Table || frame.height() != 1 {
        return print_frame(frame, format);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let width = frame
        .get_column_names()
        .iter()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);
    for column in frame.get_columns() {
        writeln!(out, "{:<width$}  {}", column.name(), cell(&column.get(0)?))?;
    }
    Ok(())
}

fn write_csv<W: Write>(frame: &DataFrame, out: W) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(frame.get_column_names().iter().map(|name| name.as_str()))?;

    for row in 0..frame.height() {
        let values = frame
            .get_columns()
            .iter()
            .map(|column| column.get(row).map(|v| cell(&v)))
            .collect::<PolarsResult<Vec<_>>>()?;
        writer.write_record(&values)?;
    }
    writer.flush()?;
    Ok(())
}

fn records(frame: &DataFrame) -> Result<Vec<Map<String, Value>>, CliError> {
    let mut rows = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        let mut record = Map::new();
        for column in frame.get_columns() {
            record.insert(column.name().to_string(), json_value(&column.get(row)?));
        }
        rows.push(record);
    }
    Ok(rows)
}

/// Text of a cell; nulls are empty.
fn cell(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::Float32(v) => v.to_string(),
        other => other.to_string(),
    }
}

fn json_value(value: &AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(*b),
        AnyValue::Int8(v) => Value::from(*v),
        AnyValue::Int16(v) => Value::from(*v),
        AnyValue::Int32(v) => Value::from(*v),
        AnyValue::Int64(v) => Value::from(*v),
        AnyValue::UInt8(v) => Value::from(*v),
        AnyValue::UInt16(v) => Value::from(*v),
        AnyValue::UInt32(v) => Value::from(*v),
        AnyValue::UInt64(v) => Value::from(*v),
        AnyValue::Float32(v) => Number::from_f64(f64::from(*v)).map_or(Value::Null, Value::Number),
        AnyValue::Float64(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
        other => Value::String(cell(other)),
    }
}
