//! Error types for the MarkerSweep core library.
//!
//! Each subsystem has its own error type derived with `thiserror`, and a
//! top-level [`CoreError`] enum unifies them all for callers that want a
//! single error type.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Unified error type for the entire core library.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Discover(#[from] DiscoverError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Resolution errors
// ---------------------------------------------------------------------------

/// Errors from the conflict-marker resolution strategies.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The conflict-block pattern failed to compile.
    #[error("invalid conflict-block pattern: {0}")]
    InvalidPattern(String),
}

// ---------------------------------------------------------------------------
// Discovery errors
// ---------------------------------------------------------------------------

/// Errors from glob-based file discovery.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The discovery root does not exist or is not a directory.
    #[error("discovery root not found: '{0}'")]
    RootNotFound(String),

    /// A directory could not be read during the walk.
    #[error("failed to read directory '{path}': {source}")]
    WalkFailed {
        path: String,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Sweep errors
// ---------------------------------------------------------------------------

/// Errors from the read-transform-overwrite engine.
#[derive(Debug, Error)]
pub enum SweepError {
    /// A target file could not be read.
    #[error("failed to read '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    /// A target file could not be overwritten.
    #[error("failed to write '{path}': {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },

    /// Strategy construction failed.
    #[error("sweep resolution error: {0}")]
    Resolve(#[from] ResolveError),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parse error.
    #[error("configuration parse error: {0}")]
    ParseError(String),

    /// A config value is invalid.
    #[error("invalid configuration value for '{field}': {detail}")]
    InvalidValue { field: String, detail: String },

    /// Generic I/O error reading the config file.
    #[error("configuration I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = DiscoverError::RootNotFound("/tmp/missing".into());
        assert_eq!(err.to_string(), "discovery root not found: '/tmp/missing'");

        let err = SweepError::ReadFailed {
            path: "src/lib.rs".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("src/lib.rs"));

        let err = ConfigError::InvalidValue {
            field: "sweep.strategy".into(),
            detail: "unknown strategy".into(),
        };
        assert!(err.to_string().contains("sweep.strategy"));
    }

    #[test]
    fn test_core_error_from_subsystem() {
        let resolve_err = ResolveError::InvalidPattern("bad".into());
        let core_err: CoreError = resolve_err.into();
        assert!(matches!(core_err, CoreError::Resolve(_)));

        let config_err = ConfigError::FileNotFound("markersweep.toml".into());
        let core_err: CoreError = config_err.into();
        assert!(matches!(core_err, CoreError::Config(_)));
    }
}
