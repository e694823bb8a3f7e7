//! Top-level error type for the binary.

use thiserror::Error;

use passpick::pass::GenerateError;

use crate::clipboard::ClipboardError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl Error {
    /// Usage problems exit with 2, runtime failures with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Generate(_) => 2,
            Error::Clipboard(_) | Error::Terminal(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_errors_are_usage_errors() {
        let err = Error::from(GenerateError::EmptyAlphabet);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "no character class is enabled");

        let err = Error::from(ClipboardError::Unavailable("no display".into()));
        assert_eq!(err.exit_code(), 1);
    }
}
