//! Error type for the conversion pipeline.

use std::io;
use std::path::PathBuf;
use yaml_rust2::scanner::ScanError;

/// Error type for reading, decoding and encoding documents.
#[derive(Debug)]
pub enum Error {
    /// Input file could not be opened for reading
    Open { path: PathBuf, source: io::Error },
    /// Output file could not be created
    Create { path: PathBuf, source: io::Error },
    /// Input could not be read (including invalid UTF-8)
    Read(io::Error),
    /// A document is not valid YAML
    Malformed(ScanError),
    /// A value could not be serialized as JSON
    Encode(serde_json::Error),
    /// Encoded output could not be written
    Write(io::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { source, .. } | Error::Create { source, .. } => Some(source),
            Error::Read(e) | Error::Write(e) => Some(e),
            Error::Malformed(e) => Some(e),
            Error::Encode(e) => Some(e),
        }
    }
}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Error::Malformed(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Error::Write(io::Error::from(e))
        } else {
            Error::Encode(e)
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Open { path, source } => {
                write!(f, "cannot open '{}': {}", path.display(), source)
            }
            Error::Create { path, source } => {
                write!(f, "cannot create '{}': {}", path.display(), source)
            }
            Error::Read(e) => write!(f, "{}", e),
            Error::Malformed(e) => write!(f, "{}", e),
            Error::Encode(e) => write!(f, "{}", e),
            Error::Write(e) => write!(f, "{}", e),
        }
    }
}
