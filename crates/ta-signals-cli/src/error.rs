//! CLI error types for file I/O, parsing, configuration and signal errors.
//!
//! [`CliError`] wraps every failure the command-line front end can hit. The
//! messages say what went wrong and, where possible, how to fix it.

use std::fmt;
use std::io;

/// CLI error type encompassing all possible error conditions.
#[derive(Debug)]
pub enum CliError {
    /// An I/O error occurred while reading or writing files.
    IoError {
        /// The underlying I/O error.
        source: io::Error,
        /// Path that caused the error, if known.
        path: Option<String>,
    },
    /// An error occurred while parsing CSV data.
    CsvParseError {
        /// Description of the parse error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<usize>,
    },
    /// A configuration file could not be parsed.
    ConfigError {
        /// Description of the problem.
        message: String,
        /// Path of the configuration file.
        path: String,
    },
    /// The signal library rejected the computation or configuration.
    SignalError {
        /// The underlying ta-signals error.
        source: ta_signals::Error,
    },
    /// An invalid argument was provided.
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError { source, path } => {
                if let Some(p) = path {
                    write!(f, "I/O error with file '{p}': {source}. ")?;
                    write!(f, "Check that the file exists and you have read permissions.")
                } else {
                    write!(f, "I/O error: {source}")
                }
            }
            Self::CsvParseError { message, line } => {
                if let Some(l) = line {
                    write!(f, "CSV parse error on line {l}: {message}. ")?;
                } else {
                    write!(f, "CSV parse error: {message}. ")?;
                }
                write!(f, "Ensure your CSV has a header row and a numeric price column.")
            }
            Self::ConfigError { message, path } => {
                write!(f, "invalid configuration file '{path}': {message}. ")?;
                write!(
                    f,
                    "Expected keys: slow_window, fast_window, rsi_window, long_entry, short_entry."
                )
            }
            Self::SignalError { source } => write!(f, "Signal computation error: {source}"),
            Self::InvalidArgument {
                argument,
                reason,
                suggestion,
            } => {
                write!(f, "Invalid argument '{argument}': {reason}")?;
                if let Some(s) = suggestion {
                    write!(f, ". {s}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            Self::SignalError { source } => Some(source),
            Self::CsvParseError { .. } | Self::ConfigError { .. } | Self::InvalidArgument { .. } => {
                None
            }
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::IoError {
            source: err,
            path: None,
        }
    }
}

impl From<ta_signals::Error> for CliError {
    fn from(err: ta_signals::Error) -> Self {
        Self::SignalError { source: err }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .and_then(|p| usize::try_from(p.line()).ok());
        Self::CsvParseError {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Display Implementation Tests
    // ==========================================================================

    #[test]
    fn test_display_io_error_with_path() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = CliError::IoError {
            source: io_err,
            path: Some("/path/to/file.csv".to_string()),
        };

        let display = format!("{err}");
        assert!(display.contains("/path/to/file.csv"));
        assert!(display.contains("file not found"));
        assert!(display.contains("Check that the file exists"));
    }

    #[test]
    fn test_display_io_error_without_path() {
        let err = CliError::from(io::Error::other("broken pipe"));

        let display = format!("{err}");
        assert!(display.starts_with("I/O error"));
        assert!(display.contains("broken pipe"));
    }

    #[test]
    fn test_display_csv_parse_error_with_line() {
        let err = CliError::CsvParseError {
            message: "cannot parse 'abc' as number".to_string(),
            line: Some(10),
        };

        let display = format!("{err}");
        assert!(display.contains("line 10"));
        assert!(display.contains("'abc'"));
        assert!(display.contains("numeric price column"));
    }

    #[test]
    fn test_display_config_error() {
        let err = CliError::ConfigError {
            message: "unknown field `slow`".to_string(),
            path: "strategy.toml".to_string(),
        };

        let display = format!("{err}");
        assert!(display.contains("strategy.toml"));
        assert!(display.contains("unknown field"));
        assert!(display.contains("slow_window"));
    }

    #[test]
    fn test_display_signal_error() {
        let err = CliError::from(ta_signals::Error::InvalidCrossoverWindows { slow: 5, fast: 10 });

        let display = format!("{err}");
        assert!(display.contains("Signal computation error"));
        assert!(display.contains("slow window 5"));
    }

    #[test]
    fn test_display_invalid_argument() {
        let with = CliError::InvalidArgument {
            argument: "params".to_string(),
            reason: "expected 2 values, got 3".to_string(),
            suggestion: Some("Use format: slow,fast (e.g., 20,10)".to_string()),
        };
        let without = CliError::InvalidArgument {
            argument: "column".to_string(),
            reason: "no column named 'foo'".to_string(),
            suggestion: None,
        };

        assert_eq!(
            with.to_string(),
            "Invalid argument 'params': expected 2 values, got 3. Use format: slow,fast (e.g., 20,10)"
        );
        assert_eq!(without.to_string(), "Invalid argument 'column': no column named 'foo'");
    }

    // ==========================================================================
    // Error Source Tests
    // ==========================================================================

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let io = CliError::from(io::Error::other("x"));
        assert!(io.source().is_some());

        let signal = CliError::from(ta_signals::Error::LengthMismatch {
            expected: 1,
            actual: 2,
        });
        assert!(signal.source().is_some());

        let csv = CliError::CsvParseError {
            message: String::new(),
            line: None,
        };
        assert!(csv.source().is_none());
    }
}
