//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Paths served by the health check routes
const RESERVED_PATHS: &[&str] = &["/health", "/healthz"];

/// Listening address of the HTTP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0", "127.0.0.1")
    pub host: String,

    /// TCP port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

/// GraphQL endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphQLConfig {
    /// Path of the GraphQL endpoint; the SDL is served under `{path}/schema`
    pub path: String,

    /// Serve the GraphQL Playground on `GET {path}`
    pub playground: bool,
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            path: "/graphql".to_string(),
            playground: true,
        }
    }
}

/// Log filter used when `RUST_LOG` is not set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Where the catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// YAML dataset to load; the built-in seed catalog is used when unset
    pub path: Option<PathBuf>,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub graphql: GraphQLConfig,
    pub logging: LoggingConfig,
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().display().to_string();
        let content =
            std::fs::read_to_string(&path).map_err(|e| ConfigError::from_io(&path, e))?;
        Self::parse(&content, Some(path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<String>) -> Result<Self, ConfigError> {
        // An empty document is a valid config with every default
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
                file,
                message: e.to_string(),
            })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_graphql_path()?;
        self.socket_addr()?;
        Ok(())
    }

    /// The endpoint path is merged into the same router as the health
    /// routes and the `/` alias, and must be a literal path.
    fn validate_graphql_path(&self) -> Result<(), ConfigError> {
        let path = &self.graphql.path;
        let invalid = |message: &str| ConfigError::InvalidValue {
            field: "graphql.path".to_string(),
            value: path.clone(),
            message: message.to_string(),
        };

        // "/" itself is taken by the root alias of the endpoint
        if !path.starts_with('/') || path.ends_with('/') {
            return Err(invalid("must start with '/' and not end with '/'"));
        }
        if RESERVED_PATHS.contains(&path.as_str()) {
            return Err(invalid("reserved for the health check"));
        }
        let has_pattern = path.split('/').any(|segment| {
            segment.starts_with(':') || segment.starts_with('*') || segment.contains(['{', '}'])
        });
        if has_pattern {
            return Err(invalid("must be a literal path without captures or wildcards"));
        }
        Ok(())
    }

    /// The address the server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                field: "server.host".to_string(),
                value: self.server.host.clone(),
                message: "not an IP address".to_string(),
            })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
