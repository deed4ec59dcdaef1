//! Error types for the scaling pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is fatal to the run and propagates to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// The input container is missing, unreadable or corrupt
    #[error("cannot read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// Sample width outside {1, 2, 4} bytes, zero channels or float samples
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Array shapes disagree between two stages
    #[error("shape mismatch: {0}")]
    Shape(String),

    /// The destination cannot be created or written
    #[error("cannot write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

impl Error {
    /// Create an unsupported format error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::UnsupportedFormat(msg.into())
    }

    /// Create a shape error
    pub fn shape<S: Into<String>>(msg: S) -> Self {
        Error::Shape(msg.into())
    }

    pub(crate) fn input(path: impl Into<PathBuf>, source: hound::Error) -> Self {
        Error::Input {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn output(path: impl Into<PathBuf>, source: hound::Error) -> Self {
        Error::Output {
            path: path.into(),
            source,
        }
    }
}

impl From<ndarray::ShapeError> for Error {
    fn from(err: ndarray::ShapeError) -> Self {
        Error::Shape(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_names_the_path() {
        let err = Error::input("missing.wav", hound::Error::FormatError("no RIFF tag found"));
        let msg = err.to_string();
        assert!(msg.contains("missing.wav"));
        assert!(msg.contains("no RIFF tag found"));
    }

    #[test]
    fn shape_error_from_ndarray() {
        let err: Error = ndarray::Array2::<i16>::from_shape_vec((2, 2), vec![1, 2, 3])
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Shape(_)));
    }
}
