//! Error types for widgetpack
//!
//! Uses `thiserror` for library errors. The two fatal pipeline kinds are
//! `DiscoveryEmpty` and `CompileFailure`; everything else a build can hit
//! (missing optional stylesheet, missing companion sourcemap, a widget with
//! no CSS output) is a normal state and never surfaces here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for widgetpack operations
pub type WidgetpackResult<T> = Result<T, WidgetpackError>;

/// Main error type for widgetpack operations
#[derive(Error, Debug)]
pub enum WidgetpackError {
    /// No widget entry files under the source root - an empty build is never valid
    #[error("no widget entries found under {root} - expected <dir>/index.(tsx|ts|jsx|js)")]
    DiscoveryEmpty { root: PathBuf },

    /// The bundler rejected one widget; aborts the whole batch
    #[error("bundling '{widget}' failed:\n{message}")]
    CompileFailure { widget: String, message: String },

    /// The external bundler binary is not installed
    #[error("bundler '{name}' not found on PATH - install it and retry")]
    BundlerNotFound { name: String },

    /// A companion sourcemap exists but is not valid JSON
    #[error("invalid sourcemap {path}: {source}")]
    SourcemapParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Source root is missing or not a directory
    #[error("source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Invalid widgetpack.toml
    #[error("invalid config {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_discovery_empty() {
        let err = WidgetpackError::DiscoveryEmpty {
            root: PathBuf::from("src"),
        };
        assert_eq!(
            err.to_string(),
            "no widget entries found under src - expected <dir>/index.(tsx|ts|jsx|js)"
        );
    }

    #[test]
    fn test_error_display_compile_failure() {
        let err = WidgetpackError::CompileFailure {
            widget: "flight-card".to_string(),
            message: "Unexpected token".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bundling 'flight-card' failed:\nUnexpected token"
        );
    }

    #[test]
    fn test_error_display_bundler_not_found() {
        let err = WidgetpackError::BundlerNotFound {
            name: "esbuild".to_string(),
        };
        assert!(err.to_string().contains("esbuild"));
        assert!(err.to_string().contains("PATH"));
    }
}
