//! Daemon configuration, read once from the environment

use std::collections::HashMap;
use std::time::Duration;
use waitlist_api_http::HttpServerConfig;
use waitlist_core::error::{AppError, Result};
use waitlist_infra_sqlite::PoolConfig;

const DEFAULT_DB_PATH: &str = "~/.waitlist/waitlist.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub db_path: String,
    pub pool: PoolConfig,
    pub server: HttpServerConfig,
    pub log_format: LogFormat,
}

impl DaemonConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let db_path = vars
            .get("WAITLIST_DB_PATH")
            .cloned()
            .unwrap_or_else(|| shellexpand::tilde(DEFAULT_DB_PATH).into_owned());

        let max_connections =
            parse_var(vars, "WAITLIST_DB_MAX_CONNECTIONS")?.unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(AppError::Config(
                "WAITLIST_DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        // PORT is honoured for hosting platforms that inject it
        let port = match parse_var(vars, "WAITLIST_PORT")? {
            Some(port) => port,
            None => parse_var(vars, "PORT")?.unwrap_or(DEFAULT_PORT),
        };

        let host = vars
            .get("WAITLIST_HOST")
            .cloned()
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let log_format = match vars.get("WAITLIST_LOG_FORMAT").map(String::as_str) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            db_path,
            pool: PoolConfig {
                max_connections,
                busy_timeout: Duration::from_secs(5),
            },
            server: HttpServerConfig { host, port },
            log_format,
        })
    }
}

fn parse_var<T>(vars: &HashMap<String, String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match vars.get(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
    }
}
