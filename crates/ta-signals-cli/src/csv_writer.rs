//! CSV output module for writing indicator and signal columns.
//!
//! Every input row produces one output row, `date` first when the input had
//! a date column. Undefined indicator values are written as empty cells and
//! signals as `-1`, `0` or `1`. Leading warm-up rows can be skipped with
//! [`warmup_rows`].

use std::fs::File;
use std::io::{self, BufWriter, Write};

use ta_signals::Signal;

use crate::error::{CliError, Result};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Picks a file destination when a path is given, stdout otherwise.
    #[must_use]
    pub fn from_arg(path: Option<&str>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(p.to_string()))
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::IoError` if the output file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout().lock())),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// One output column's values.
#[derive(Debug, Clone, Copy)]
pub enum ColumnData<'a> {
    /// Raw prices; NaN is written as an empty cell.
    Price(&'a [f64]),
    /// Indicator values; `None` is written as an empty cell.
    Indicator(&'a [Option<f64>]),
    /// Signal that may be undefined.
    Signal(&'a [Option<Signal>]),
    /// Fully defined signal.
    FinalSignal(&'a [Signal]),
}

impl ColumnData<'_> {
    fn len(&self) -> usize {
        match self {
            Self::Price(v) => v.len(),
            Self::Indicator(v) => v.len(),
            Self::Signal(v) => v.len(),
            Self::FinalSignal(v) => v.len(),
        }
    }

    fn is_defined(&self, row: usize) -> bool {
        match self {
            Self::Price(_) | Self::FinalSignal(_) => true,
            Self::Indicator(v) => v.get(row).is_some_and(Option::is_some),
            Self::Signal(v) => v.get(row).is_some_and(Option::is_some),
        }
    }

    fn cell(&self, row: usize) -> String {
        match self {
            Self::Price(v) => v
                .get(row)
                .filter(|p| !p.is_nan())
                .map_or_else(String::new, ToString::to_string),
            Self::Indicator(v) => v
                .get(row)
                .copied()
                .flatten()
                .map_or_else(String::new, |x| x.to_string()),
            Self::Signal(v) => v
                .get(row)
                .copied()
                .flatten()
                .map_or_else(String::new, |s| s.to_string()),
            Self::FinalSignal(v) => v.get(row).map_or_else(String::new, ToString::to_string),
        }
    }
}

/// A named output column.
pub type Column<'a> = (String, ColumnData<'a>);

/// Returns the number of leading rows on which some indicator or signal
/// column is still undefined.
#[must_use]
pub fn warmup_rows(columns: &[Column<'_>]) -> usize {
    let len = columns.first().map_or(0, |(_, data)| data.len());
    (0..len)
        .find(|&row| columns.iter().all(|(_, data)| data.is_defined(row)))
        .unwrap_or(len)
}

/// Writes `columns` as CSV to `writer`, skipping the first `skip` rows.
///
/// Returns the number of data rows written.
///
/// # Errors
///
/// Returns `CliError::IoError` or `CliError::CsvParseError` if writing fails.
pub fn write_columns<W: Write>(
    writer: W,
    columns: &[Column<'_>],
    dates: Option<&[String]>,
    skip: usize,
) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = Vec::with_capacity(columns.len() + 1);
    if dates.is_some() {
        header.push("date");
    }
    header.extend(columns.iter().map(|(name, _)| name.as_str()));
    csv_writer.write_record(&header)?;

    let len = columns.first().map_or(0, |(_, data)| data.len());
    let mut written = 0;
    for row in skip..len {
        let mut record: Vec<String> = Vec::with_capacity(header.len());
        if let Some(dates) = dates {
            record.push(dates.get(row).cloned().unwrap_or_default());
        }
        record.extend(columns.iter().map(|(_, data)| data.cell(row)));
        csv_writer.write_record(&record)?;
        written += 1;
    }

    csv_writer.flush()?;
    Ok(written)
}

/// Writes `columns` to the given destination.
///
/// # Errors
///
/// See [`OutputDest::writer`] and [`write_columns`].
pub fn write_output(
    dest: &OutputDest,
    columns: &[Column<'_>],
    dates: Option<&[String]>,
    skip: usize,
) -> Result<usize> {
    let written = write_columns(dest.writer()?, columns, dates, skip)?;
    tracing::debug!(?dest, rows = written, skipped = skip, "wrote output");
    Ok(written)
}
