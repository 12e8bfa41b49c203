//! Error types for PrismLog
//!
//! This module defines the error types used on PrismLog's construction and
//! configuration surfaces. The `log` call itself is fire-and-forget: no
//! error value ever crosses that boundary, so every variant here belongs to
//! setup, teardown, or explicit configuration loading.

use thiserror::Error;

/// Main error type for PrismLog operations
#[derive(Error, Debug)]
pub enum PrismLogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    ConfigFileMissing(String),

    /// Invalid log level
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Initialization errors
    #[error("Initialization error: {0}")]
    InitializationError(String),

    /// 全局调度器已经初始化
    #[error("PrismLog has already been initialized")]
    AlreadyInitialized,

    /// Shutdown-related errors
    #[error("Shutdown error: {0}")]
    ShutdownError(String),

    /// I/O errors (file operations)
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlError {
        #[from]
        source: toml::de::Error,
    },

    /// Sink-related errors
    #[error("Sink error: {0}")]
    SinkError(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type alias for PrismLog operations
pub type Result<T> = std::result::Result<T, PrismLogError>;

impl PrismLogError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new initialization error
    pub fn initialization<S: Into<String>>(msg: S) -> Self {
        Self::InitializationError(msg.into())
    }

    /// Create a new shutdown error
    pub fn shutdown<S: Into<String>>(msg: S) -> Self {
        Self::ShutdownError(msg.into())
    }

    /// Create a new sink error
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        Self::SinkError(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }

    /// Get the error category for logging purposes
    pub fn category(&self) -> &'static str {
        match self {
            Self::ConfigError(_) | Self::ConfigFileMissing(_) | Self::InvalidLogLevel(_) => {
                "config"
            }
            Self::InitializationError(_) | Self::AlreadyInitialized => "initialization",
            Self::ShutdownError(_) => "shutdown",
            Self::IoError { .. } => "io",
            Self::TomlError { .. } => "toml",
            Self::SinkError(_) => "sink",
            Self::InternalError(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let config_err = PrismLogError::config("Invalid configuration");
        assert!(matches!(config_err, PrismLogError::ConfigError(_)));
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Invalid configuration"
        );

        let sink_err = PrismLogError::sink("stream closed");
        assert!(matches!(sink_err, PrismLogError::SinkError(_)));
        assert_eq!(sink_err.to_string(), "Sink error: stream closed");
    }

    #[test]
    fn test_error_from_conversions() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let prism_error: PrismLogError = io_error.into();
        assert!(matches!(prism_error, PrismLogError::IoError { .. }));

        let toml_error = toml::from_str::<toml::Value>("not = valid = toml").unwrap_err();
        let prism_error: PrismLogError = toml_error.into();
        assert!(matches!(prism_error, PrismLogError::TomlError { .. }));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(PrismLogError::config("test").category(), "config");
        assert_eq!(
            PrismLogError::initialization("test").category(),
            "initialization"
        );
        assert_eq!(
            PrismLogError::AlreadyInitialized.category(),
            "initialization"
        );
        assert_eq!(PrismLogError::shutdown("test").category(), "shutdown");
        assert_eq!(PrismLogError::sink("test").category(), "sink");
        assert_eq!(PrismLogError::internal("test").category(), "internal");
    }

    #[test]
    fn test_error_chain() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let prism_error: PrismLogError = io_error.into();

        let error_string = prism_error.to_string();
        assert!(error_string.contains("Access denied"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function() -> Result<i32> {
            Ok(42)
        }

        fn test_error_function() -> Result<i32> {
            Err(PrismLogError::config("test"))
        }

        assert_eq!(test_function().unwrap(), 42);
        assert!(test_error_function().is_err());
    }
}
