use std::fmt;

/// Errors raised while loading lexicon data.
///
/// The analysis pipeline itself never fails; degenerate input produces a `None` result instead.
#[derive(Debug)]
pub enum Error {
    LexiconParseError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LexiconParseError(msg) => write!(f, "Lexicon Parse Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::LexiconParseError(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

// Read failures underneath the CSV reader (e.g. a corrupt gzip stream) surface as `IoError`
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        let msg = err.to_string();

        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
            _ => Error::LexiconParseError(msg),
        }
    }
}
