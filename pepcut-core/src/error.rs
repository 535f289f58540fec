//! Structured error types for the pepcut workspace.

use thiserror::Error;

/// Unified error type for pepcut operations that can fail.
///
/// Cleavage itself never fails. Fragment validation reports its own
/// structured error, which converts into [`PepcutError::Validation`] when a
/// caller wants to propagate it with `?`.
#[derive(Debug, Error)]
pub enum PepcutError {
    /// No protease is registered under the given name.
    #[error("unknown protease: {0}")]
    UnknownProtease(String),

    /// An ordered fragment list failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the pepcut crates.
pub type Result<T> = std::result::Result<T, PepcutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = PepcutError::UnknownProtease("pepsin".into());
        assert_eq!(err.to_string(), "unknown protease: pepsin");
    }

    #[test]
    fn io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(PepcutError::Io(_))));
    }
}
