use std::env;
use std::fmt;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Port used when `NODE_ENV=production`.
pub const PRODUCTION_PORT: u16 = 7500;
/// Port used otherwise.
pub const DEVELOPMENT_PORT: u16 = 3000;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Runtime environment selected by `NODE_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Production,
    Development,
}

impl RuntimeEnv {
    /// Only the exact value `production` selects production.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("production") => RuntimeEnv::Production,
            _ => RuntimeEnv::Development,
        }
    }
}

/// Process-wide configuration, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    /// sea-orm connection string (`postgres://…`, `sqlite://…`)
    pub db_url: String,
    /// HS256 signing secret
    pub jwt_secret: String,
    pub env: RuntimeEnv,
    pub host: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("db_url", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("env", &self.env)
            .field("host", &self.host)
            .finish()
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Required: `DB_URL`, `SECRET`. Optional: `NODE_ENV`, `BACKEND_HOST`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_url = must_var(&lookup, "DB_URL")?;
        let jwt_secret = must_var(&lookup, "SECRET")?;
        let env = RuntimeEnv::from_node_env(lookup("NODE_ENV").as_deref());
        let host = lookup("BACKEND_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self {
            db_url,
            jwt_secret,
            env,
            host,
        })
    }

    pub fn port(&self) -> u16 {
        match self.env {
            RuntimeEnv::Production => PRODUCTION_PORT,
            RuntimeEnv::Development => DEVELOPMENT_PORT,
        }
    }

    pub fn security(&self) -> SecurityConfig {
        SecurityConfig::new(self.jwt_secret.as_bytes())
    }
}

/// Get a required, non-blank variable or return a config error
fn must_var<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!(
            "Required environment variable '{name}' is not set"
        ))),
    }
}
