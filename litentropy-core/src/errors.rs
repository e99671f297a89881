//! errors.rs - Custom error types for the litentropy-core library.
//!
//! Only the collaborator layers can fail: the entropy kernel itself is total.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `litentropy-core` library.
///
/// New variants may be added as more text sources are supported.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LitentropyError {
    #[error("Failed to download '{name}': {source}")]
    Download {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Cached text at '{}' is unavailable: {source}", path.display())]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid corpus configuration:\n{0}")]
    InvalidConfig(String),

    #[error("Failed to render chart: {0}")]
    Render(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_into_io_variant() {
        fn open_missing() -> Result<(), LitentropyError> {
            std::fs::read("/definitely/not/here")?;
            Ok(())
        }
        let err = open_missing().unwrap_err();
        assert!(matches!(err, LitentropyError::IoError(_)));
        assert!(err.to_string().starts_with("An unexpected I/O error occurred"));
    }
}
