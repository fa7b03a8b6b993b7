//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` is loaded).

use account::AccountConfig;
use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose;
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:1323";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub account: AccountConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Build the config from an arbitrary variable source
    ///
    /// `debug` relaxes the session secret and Secure cookie requirements.
    pub fn from_lookup<F>(lookup: F, debug: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.is_empty() => url,
            _ => DbParts::from_lookup(&lookup)?.dsn(),
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS is not a number: {v}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR is not a socket address")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let mut account = if debug {
            AccountConfig::development()
        } else {
            AccountConfig::default()
        };

        match lookup("SESSION_SECRET") {
            Some(secret_b64) => account.session_secret = decode_secret(&secret_b64)?,
            None if debug => {}
            None => bail!("SESSION_SECRET must be set in production"),
        }

        if let Some(secure) = lookup("COOKIE_SECURE") {
            account.cookie_secure = parse_bool(&secure)
                .with_context(|| format!("COOKIE_SECURE is not a boolean: {secure}"))?;
        }

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            frontend_origins,
            account,
        })
    }
}

/// Connection settings given as separate variables
#[derive(Debug, PartialEq, Eq)]
struct DbParts {
    host: String,
    port: u16,
    name: String,
    user: String,
    password: String,
}

impl DbParts {
    fn from_lookup<F>(lookup: &F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("{key} must be set when DATABASE_URL is not"))
        };

        let port = match lookup("DB_PORT") {
            Some(p) => p
                .parse()
                .with_context(|| format!("DB_PORT is not a port number: {p}"))?,
            None => 5432,
        };

        Ok(Self {
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port,
            name: require("DB_NAME")?,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
        })
    }

    fn dsn(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode=disable",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("SESSION_SECRET is not valid base64")?;

    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", b.len()))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
