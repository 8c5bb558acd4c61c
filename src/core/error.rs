//! Typed error handling for bookshelf
//!
//! Lookups never fail: a miss is `None` or an empty list. The errors here
//! cover everything around the resolver instead.
//!
//! # Error Categories
//!
//! - [`ConfigError`]: configuration and dataset loading
//! - [`ServerError`]: binding and serving HTTP
//! - [`BookshelfError::Internal`]: faults that should not happen with a
//!   well-formed catalog, reported to the caller as an internal error
//!
//! # Example
//!
//! ```rust,ignore
//! match AppConfig::from_yaml_file("bookshelf.yaml") {
//!     Ok(config) => run(config).await,
//!     Err(ConfigError::FileNotFound { path }) => eprintln!("no config at {path}"),
//!     Err(e) => eprintln!("bad config: {e}"),
//! }
//! ```

use async_graphql::ErrorExtensions;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for bookshelf
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP server errors
    #[error(transparent)]
    Server(#[from] ServerError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl BookshelfError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookshelfError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookshelfError::Server(e) => e.status_code(),
            BookshelfError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BookshelfError::Config(e) => e.error_code(),
            BookshelfError::Server(e) => e.error_code(),
            BookshelfError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for BookshelfError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl ErrorExtensions for BookshelfError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, extensions| extensions.set("code", self.error_code()))
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration and dataset files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a YAML document
    #[error("Failed to parse {}: {message}", describe_source(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

fn describe_source(file: &Option<String>) -> String {
    match file {
        Some(file) => format!("config file '{file}'"),
        None => "config".to_string(),
    }
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    /// Map a failed read of `path` to the matching variant
    pub(crate) fn from_io(path: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound {
                path: path.to_string(),
            }
        } else {
            ConfigError::IoError {
                message: format!("{path}: {err}"),
            }
        }
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// Errors raised while starting or running the HTTP server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Could not bind the listening socket
    #[error("Failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    /// The server stopped with an error
    #[error("Server error: {message}")]
    Serve { message: String },
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Bind { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Serve { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::Bind { .. } => "SERVER_BIND_ERROR",
            ServerError::Serve { .. } => "SERVER_ERROR",
        }
    }
}

/// Result alias used across the crate
pub type Result<T, E = BookshelfError> = std::result::Result<T, E>;
