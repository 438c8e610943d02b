//! Process configuration read from environment variables at startup.
//!
//! | Variable          | Default        |
//! |-------------------|----------------|
//! | `APP_ENVIRONMENT` | `Production`   |
//! | `BIND_ADDR`       | `0.0.0.0:8080` |
//! | `JWT_SECRET`      | required outside Development |
//! | `HTTPS_PORT`      | unset (no redirect) |
//!
//! `LOG_FORMAT` and `RUST_LOG` are read by `innoclinic-observability`.

use core::str::FromStr;
use std::net::SocketAddr;

use thiserror::Error;

const DEV_JWT_SECRET: &str = "dev-secret";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Hosting environment. Development-only features key off this.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        *self == Self::Development
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Staging => "Staging",
            Self::Production => "Production",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl core::fmt::Display for Environment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid APP_ENVIRONMENT '{0}' (expected Development, Staging or Production)")]
    InvalidEnvironment(String),

    #[error("invalid BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid HTTPS_PORT '{0}'")]
    InvalidHttpsPort(String),

    #[error("JWT_SECRET must be set outside the Development environment")]
    MissingJwtSecret,
}

/// Everything the host needs to assemble and run a service.
#[derive(Clone)]
pub struct HostConfig {
    pub service_name: String,
    pub environment: Environment,
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub https_port: Option<u16>,
}

impl HostConfig {
    /// Read configuration from the process environment.
    pub fn from_env(service_name: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(service_name: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match get("APP_ENVIRONMENT") {
            Some(v) => v.parse()?,
            None => Environment::default(),
        };

        let bind_value = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let https_port = get("HTTPS_PORT")
            .map(|v| {
                v.trim()
                    .parse::<u16>()
                    .ok()
                    .filter(|p| *p != 0)
                    .ok_or(ConfigError::InvalidHttpsPort(v))
            })
            .transpose()?;

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None if environment.is_development() => {
                tracing::warn!("JWT_SECRET not set; using insecure dev default");
                DEV_JWT_SECRET.to_string()
            }
            None => return Err(ConfigError::MissingJwtSecret),
        };

        Ok(Self {
            service_name: service_name.to_string(),
            environment,
            bind_addr,
            jwt_secret,
            https_port,
        })
    }

    /// Config for tests/dev: Development environment, ephemeral port, given secret.
    pub fn development(service_name: &str, jwt_secret: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            environment: Environment::Development,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            jwt_secret: jwt_secret.to_string(),
            https_port: None,
        }
    }
}

impl core::fmt::Debug for HostConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HostConfig")
            .field("service_name", &self.service_name)
            .field("environment", &self.environment)
            .field("bind_addr", &self.bind_addr)
            .field("jwt_secret", &"<redacted>")
            .field("https_port", &self.https_port)
            .finish()
    }
}
