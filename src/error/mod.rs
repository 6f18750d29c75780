//! Error types for etagrs.

use std::fmt;

/// Errors that can occur while computing an ETag.
#[derive(Debug)]
pub enum EtagError {
    /// Options were changed after data started flowing or after the ETag
    /// was produced.
    ConfigurationLocked,

    /// An I/O error occurred while reading input data.
    Io(std::io::Error),
}

impl fmt::Display for EtagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtagError::ConfigurationLocked => {
                write!(f, "setting options prohibited: already processing data")
            }
            EtagError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for EtagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EtagError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EtagError {
    fn from(e: std::io::Error) -> Self {
        EtagError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: EtagError = io_err.into();
        assert!(matches!(err, EtagError::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = EtagError::ConfigurationLocked;
        assert!(err.to_string().contains("already processing"));
        assert!(err.source().is_none());
    }
}
