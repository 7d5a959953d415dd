use std::fmt;

/// Result type for liftlog-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the domain layers
#[derive(Debug)]
pub enum Error {
    /// A record violated the wire format or a domain invariant
    DataFormat(String),

    /// A query target (exercise, session date) does not exist
    NotFound(String),
}

impl Error {
    /// Attach the index of the offending record to a DataFormat error
    pub fn at_record(self, record: usize) -> Self {
        match self {
            Error::DataFormat(msg) => Error::DataFormat(format!("session #{}: {}", record, msg)),
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DataFormat(msg) => write!(f, "invalid workout data: {}", msg),
            Error::NotFound(msg) => write!(f, "not found: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
