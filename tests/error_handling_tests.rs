//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Error conversions work correctly

use axum::http::StatusCode;
use axum::response::IntoResponse;
use bookshelf::prelude::*;

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_config_error_returns_500() {
        let err = BookshelfError::Config(ConfigError::ParseError {
            file: Some("bookshelf.yaml".to_string()),
            message: "invalid syntax".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bind_error_returns_503() {
        let err = BookshelfError::Server(ServerError::Bind {
            addr: "0.0.0.0:4000".to_string(),
            message: "address in use".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_error_returns_500() {
        let err = BookshelfError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_config_error_codes() {
        assert_eq!(
            ConfigError::FileNotFound {
                path: "x.yaml".to_string()
            }
            .error_code(),
            "CONFIG_FILE_NOT_FOUND"
        );

        assert_eq!(
            ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: "-1".to_string(),
                message: "out of range".to_string(),
            }
            .error_code(),
            "CONFIG_INVALID_VALUE"
        );
    }

    #[test]
    fn test_wrapped_error_keeps_inner_code() {
        let err: BookshelfError = ServerError::Serve {
            message: "connection reset".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "SERVER_ERROR");
    }
}

// =============================================================================
// Response Format Tests
// =============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_to_response() {
        let err: BookshelfError = ConfigError::FileNotFound {
            path: "missing.yaml".to_string(),
        }
        .into();

        let response = err.to_response();
        assert_eq!(response.code, "CONFIG_FILE_NOT_FOUND");
        assert_eq!(response.message, "Configuration file not found: missing.yaml");
    }

    #[test]
    fn test_into_response_status() {
        let response = BookshelfError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_transparent_display() {
        let err: BookshelfError = ConfigError::IoError {
            message: "denied".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "IO error: denied");
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err: BookshelfError = ServerError::Bind {
            addr: "127.0.0.1:1".to_string(),
            message: "denied".to_string(),
        }
        .into();
        // Transparent variants forward source() to the inner error
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Failed to bind 127.0.0.1:1: denied");
    }
}
