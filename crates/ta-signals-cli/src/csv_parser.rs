//! CSV parsing module for reading price data from CSV files.
//!
//! Only two columns are read: the closing-price column and, when present, a
//! date column that is carried through to the output. Other columns may hold
//! anything, including text.
//!
//! # Column Detection
//!
//! Headers are matched case-insensitively after trimming:
//! - `close`, `price`, `adj close`, `adjusted close` → close prices, in that
//!   order of preference, unless a column is named explicitly
//! - `date`, `time`, `datetime`, `timestamp`, `dt` → date column
//!
//! Empty price cells load as NaN. The EMA stays undefined from a gap onwards,
//! while the RSI treats the gap as a flat bar.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{CliError, Result};

/// Header names recognised as the closing price, in order of preference.
pub const CLOSE_COLUMNS: &[&str] = &["close", "price", "adj close", "adjusted close"];

/// Header names recognised as a date column.
pub const DATE_COLUMNS: &[&str] = &["date", "time", "datetime", "timestamp", "dt"];

/// A closing-price series with its optional date labels.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    /// Date/time strings (if present in CSV).
    pub dates: Option<Vec<String>>,
    /// Closing prices, NaN where the cell was empty.
    pub close: Vec<f64>,
    /// Header of the column the prices were read from.
    pub column: String,
}

impl PriceSeries {
    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns true if no rows were read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Check if a header represents a date column.
fn is_date_column(header: &str) -> bool {
    DATE_COLUMNS.contains(&normalize_header(header).as_str())
}

/// Parse a string value to f64, treating empty as NaN.
fn parse_value(value: &str, line: usize) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(f64::NAN)
    } else {
        trimmed.parse::<f64>().map_err(|_| CliError::CsvParseError {
            message: format!("cannot parse '{trimmed}' as number"),
            line: Some(line),
        })
    }
}

/// Finds the price column index, honouring an explicit column name.
fn resolve_price_column(headers: &[String], column: Option<&str>) -> Result<usize> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

    if let Some(name) = column {
        let wanted = normalize_header(name);
        return normalized
            .iter()
            .position(|h| *h == wanted)
            .ok_or_else(|| CliError::InvalidArgument {
                argument: "column".to_string(),
                reason: format!("no column named '{name}'"),
                suggestion: Some(format!("Available columns: {}", headers.join(", "))),
            });
    }

    CLOSE_COLUMNS
        .iter()
        .find_map(|candidate| normalized.iter().position(|h| h == candidate))
        .ok_or_else(|| CliError::CsvParseError {
            message: "no close price column found (expected 'close', 'price', or 'adj close'; \
                      use --column to pick one)"
                .to_string(),
            line: Some(1),
        })
}

/// Parse a CSV file into a closing-price series.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be opened,
/// `CliError::CsvParseError` if the CSV is malformed or has no price column,
/// or `CliError::InvalidArgument` if `column` names a missing header.
pub fn read_prices<P: AsRef<Path>>(path: P, column: Option<&str>) -> Result<PriceSeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    let prices = read_prices_from_reader(BufReader::new(file), column)?;
    tracing::debug!(
        path = %path.display(),
        rows = prices.len(),
        column = %prices.column,
        "loaded price series"
    );
    Ok(prices)
}

/// Parse CSV data from a reader.
///
/// This is useful for testing or parsing from non-file sources.
///
/// # Errors
///
/// See [`read_prices`].
pub fn read_prices_from_reader<R: Read>(reader: R, column: Option<&str>) -> Result<PriceSeries> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let price_idx = resolve_price_column(&headers, column)?;
    let date_idx = headers
        .iter()
        .enumerate()
        .find(|(idx, h)| *idx != price_idx && is_date_column(h))
        .map(|(idx, _)| idx);

    let mut close = Vec::new();
    let mut dates = Vec::new();

    for (line_idx, result) in csv_reader.records().enumerate() {
        // +2 for header and 0-indexing
        let line = line_idx + 2;
        let record = result.map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(line),
        })?;

        if let Some(idx) = date_idx {
            dates.push(record.get(idx).unwrap_or("").to_string());
        }
        close.push(parse_value(record.get(price_idx).unwrap_or(""), line)?);
    }

    Ok(PriceSeries {
        dates: date_idx.map(|_| dates),
        close,
        column: headers[price_idx].clone(),
    })
}
