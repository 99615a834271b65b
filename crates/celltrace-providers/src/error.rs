use std::fmt;

/// Result type for celltrace-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// CSV parsing failed
    Csv(csv::Error),

    /// Recognized but unsupported input format
    UnsupportedFormat(String),

    /// Input matched no known cycler log format
    UnrecognizedFormat,

    /// Input exceeds the in-memory parsing limit
    FileTooLarge { size: u64, limit: u64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::UnsupportedFormat(msg) => write!(f, "unsupported format: {}", msg),
            Error::UnrecognizedFormat => {
                write!(f, "unrecognized file format (expected EDF or CSV cycler log)")
            }
            Error::FileTooLarge { size, limit } => {
                write!(f, "file too large ({} bytes, limit {})", size, limit)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::UnsupportedFormat(_) | Error::UnrecognizedFormat | Error::FileTooLarge { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
