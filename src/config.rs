// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment exactly once at startup and
//! is immutable afterwards. Missing required values abort the process with a
//! [`ConfigError`] — misconfiguration is an operator-facing startup fault,
//! never a per-request 401.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `QUICK_AUTH_DOMAIN` | Expected token audience/domain | Required |
//! | `QUICK_AUTH_VERIFY_URL` | Identity provider verification endpoint | `https://auth.farcaster.xyz/verify` |
//! | `DATABASE_URL` | Postgres connection string | Required |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

/// Environment variable name for the expected token audience/domain.
pub const QUICK_AUTH_DOMAIN_ENV: &str = "QUICK_AUTH_DOMAIN";

/// Environment variable name for the provider verification endpoint.
pub const QUICK_AUTH_VERIFY_URL_ENV: &str = "QUICK_AUTH_VERIFY_URL";

/// Environment variable name for the Postgres connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Default verification endpoint of the Quick Auth provider.
const DEFAULT_VERIFY_URL: &str = "https://auth.farcaster.xyz/verify";

/// Fatal configuration error raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Process-wide immutable configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Expected audience/domain of verified tokens.
    pub auth_domain: String,
    /// Verification endpoint of the identity provider.
    pub verify_url: Url,
    /// Postgres connection string.
    pub database_url: String,
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let bind_addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|_| ConfigError::Invalid("HOST"))?;

        let auth_domain = std::env::var(QUICK_AUTH_DOMAIN_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(QUICK_AUTH_DOMAIN_ENV))?;

        let verify_url = std::env::var(QUICK_AUTH_VERIFY_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_VERIFY_URL.to_string());
        let verify_url =
            Url::parse(&verify_url).map_err(|_| ConfigError::Invalid(QUICK_AUTH_VERIFY_URL_ENV))?;

        let database_url =
            std::env::var(DATABASE_URL_ENV).map_err(|_| ConfigError::Missing(DATABASE_URL_ENV))?;

        Ok(Self {
            bind_addr,
            auth_domain,
            verify_url,
            database_url,
        })
    }
}
