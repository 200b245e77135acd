//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A component was used before being fully configured (e.g. no entity map).
    IllegalState(String),
    /// A direct utility call received an input it cannot work on.
    InvalidArgument(String),
    /// Requested digest algorithm is not known.
    UnknownDigest(String),
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IllegalState(msg) => write!(f, "illegal state: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::UnknownDigest(name) => write!(f, "unknown digest algorithm: {}", name),
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Csv(e) => write!(f, "dictionary read error: {}", e),
            Error::Serde(e) => write!(f, "configuration error: {}", e),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
