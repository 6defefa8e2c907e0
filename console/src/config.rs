//! # API Configuration
//!
//! Resolves the backend base URL once at startup.
//!
//! ## Precedence
//!
//! 1. `MARCAS_API_URL` - explicit override, used verbatim (trailing `/` trimmed)
//! 2. `MARCAS_ENV` - `production` or `development`
//! 3. `MARCAS_HOST` - host-based default: local host names use the local
//!    backend, anything else uses production (defaults to `localhost`)
//!
//! A `.env` file in the working directory is loaded first, so any of these can
//! live there.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::core::error::{AppError, Result};

/// Deployed backend
pub const PRODUCTION_API_URL: &str = "https://signa-backend-production-795b.up.railway.app/api";

/// Backend started locally for development
pub const LOCAL_API_URL: &str = "http://localhost:3001/api";

const LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "::1"];

/// Deployment environment flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "local" => Ok(Environment::Development),
            other => Err(AppError::Config(format!(
                "MARCAS_ENV must be 'production' or 'development', got '{}'",
                other
            ))),
        }
    }
}

/// Inputs to base URL resolution, captured from the process environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub api_url_override: Option<String>,
    pub environment: Option<Environment>,
    pub host: String,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            api_url_override: None,
            environment: None,
            host: "localhost".to_string(),
        }
    }
}

impl ExecutionContext {
    /// Read `MARCAS_API_URL`, `MARCAS_ENV` and `MARCAS_HOST`
    pub fn from_env() -> Result<Self> {
        let api_url_override = env::var("MARCAS_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let environment = match env::var("MARCAS_ENV") {
            Ok(v) if !v.trim().is_empty() => Some(v.parse()?),
            _ => None,
        };

        let host = env::var("MARCAS_HOST")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "localhost".to_string());

        Ok(Self {
            api_url_override,
            environment,
            host,
        })
    }
}

/// Which rule produced the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Override,
    Environment,
    Host,
}

impl fmt::Display for BaseUrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BaseUrlSource::Override => "override",
            BaseUrlSource::Environment => "environment",
            BaseUrlSource::Host => "host",
        };
        f.write_str(s)
    }
}

/// Load `.env` from the working directory or a parent. A missing file is fine;
/// variables already set in the process environment are never overridden.
pub fn load_dotenv() -> std::result::Result<(), dotenvy::Error> {
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => Err(e),
        _ => Ok(()),
    }
}

/// Resolved API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub source: BaseUrlSource,
}

impl ApiConfig {
    /// Apply the precedence rules to `ctx`.
    pub fn resolve(ctx: &ExecutionContext) -> Self {
        if let Some(url) = &ctx.api_url_override {
            return Self::new(url, BaseUrlSource::Override);
        }

        if let Some(environment) = ctx.environment {
            let url = match environment {
                Environment::Production => PRODUCTION_API_URL,
                Environment::Development => LOCAL_API_URL,
            };
            return Self::new(url, BaseUrlSource::Environment);
        }

        let host = ctx.host.trim().to_ascii_lowercase();
        let url = if LOCAL_HOSTS.contains(&host.as_str()) {
            LOCAL_API_URL
        } else {
            PRODUCTION_API_URL
        };
        Self::new(url, BaseUrlSource::Host)
    }

    /// Read the environment and resolve. Call [`load_dotenv`] first.
    pub fn from_env() -> Result<Self> {
        let ctx = ExecutionContext::from_env()?;
        Ok(Self::resolve(&ctx))
    }

    fn new(url: &str, source: BaseUrlSource) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
            source,
        }
    }
}
