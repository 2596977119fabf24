//! Error types for the weft engine.
//!
//! All crates return `WeftResult<T>` from fallible operations. The
//! simulation core itself has no failure modes; errors come from the
//! surfaces around it (configuration, snapshots, file I/O).

use thiserror::Error;

/// Unified error type for the weft engine.
#[derive(Debug, Error)]
pub enum WeftError {
    /// Lattice parameters are malformed (zero rows, negative spacing, ...).
    #[error("Invalid lattice: {0}")]
    InvalidLattice(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Gesture script is malformed.
    #[error("Invalid script: {0}")]
    InvalidScript(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WeftError>`.
pub type WeftResult<T> = Result<T, WeftError>;
