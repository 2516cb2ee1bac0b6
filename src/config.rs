use std::fmt;
use std::net::SocketAddr;

use anyhow::{anyhow, Context};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:school.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Settings read once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct Config {
    /// Key used to sign the flash cookie.
    pub secret_key: String,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub twilio: TwilioConfig,
}

#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender number every alert goes out from.
    pub from_number: String,
    pub api_base: String,
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &REDACTED)
            .field("database_url", &self.database_url)
            .field("bind_addr", &self.bind_addr)
            .field("twilio", &self.twilio)
            .finish()
    }
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &REDACTED)
            .field("from_number", &self.from_number)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> anyhow::Result<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| anyhow!("missing required environment variable `{}`", key))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind = optional("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("`BIND_ADDR` is not a socket address: {}", bind))?;

        Ok(Config {
            secret_key: required("SECRET_KEY")?,
            database_url: optional("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr,
            twilio: TwilioConfig {
                account_sid: required("TWILIO_ACCOUNT_SID")?,
                auth_token: required("TWILIO_AUTH_TOKEN")?,
                from_number: required("TWILIO_NUMBER")?,
                api_base: optional("TWILIO_API_BASE", DEFAULT_TWILIO_API_BASE),
            },
        })
    }
}
