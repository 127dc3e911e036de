//! Server configuration parsed from environment variables.
//!
//! Every loader has a `from_lookup` form that takes the variable source as a
//! closure, so tests never touch the process environment.

use std::fmt;

pub const DEFAULT_PORT: u16 = 3000;

/// Local env files, highest precedence first. Already-set variables win.
const DOTENV_FILES: [&str; 2] = [".env.local", ".env"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not set")]
    Missing { var: &'static str },
    #[error("{var} still holds the placeholder value")]
    Placeholder { var: &'static str },
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Mark auth cookies `Secure`.
    pub cookie_secure: bool,
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port={} cookie_secure={}", self.port, self.cookie_secure)
    }
}

impl ServerConfig {
    /// Build from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when either variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() })?,
        };
        let cookie_secure = match lookup("COOKIE_SECURE") {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "COOKIE_SECURE",
                reason: format!("expected a boolean, got {raw:?}"),
            })?,
        };
        Ok(Self { port, cookie_secure })
    }
}

/// Parse the usual spellings of a boolean flag.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a required variable, rejecting blanks and a known placeholder.
pub(crate) fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    placeholder: &str,
) -> Result<String, ConfigError> {
    let value = lookup(var).map(|v| v.trim().to_owned()).unwrap_or_default();
    if value.is_empty() {
        return Err(ConfigError::Missing { var });
    }
    if value == placeholder {
        return Err(ConfigError::Placeholder { var });
    }
    Ok(value)
}

/// Load local env files into the process environment. Returns the files found.
pub fn load_dotenv() -> Vec<&'static str> {
    DOTENV_FILES
        .into_iter()
        .filter(|file| dotenvy::from_filename(file).is_ok())
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
