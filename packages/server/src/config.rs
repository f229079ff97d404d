//! Server configuration read from the environment.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;
/// Default number of alerts retained and returned.
pub const DEFAULT_ALERT_HISTORY_LIMIT: usize = 100;

/// Runtime settings for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`).
    pub bind_addr: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Maximum alerts kept in memory (`ALERT_HISTORY_LIMIT`).
    pub alert_history_limit: usize,
    /// JSON file the alert history is persisted to (`ALERT_LOG_PATH`).
    /// Unset keeps the history in memory only.
    pub alert_log_path: Option<PathBuf>,
    /// Reject unknown districts instead of scoring them against the default
    /// profile (`STRICT_DISTRICTS`).
    pub strict_districts: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            alert_history_limit: DEFAULT_ALERT_HISTORY_LIMIT,
            alert_log_path: None,
            strict_districts: false,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// Unset variables take their defaults. Unparseable values are logged
    /// and also fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable
    /// name to its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.bind_addr);

        let port = parse_or(lookup("PORT"), "PORT", defaults.port);

        let alert_history_limit = match parse_or(
            lookup("ALERT_HISTORY_LIMIT"),
            "ALERT_HISTORY_LIMIT",
            defaults.alert_history_limit,
        ) {
            0 => {
                log::warn!(
                    "ALERT_HISTORY_LIMIT must be positive, using {}",
                    defaults.alert_history_limit
                );
                defaults.alert_history_limit
            }
            limit => limit,
        };

        let alert_log_path = lookup("ALERT_LOG_PATH")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let strict_districts = lookup("STRICT_DISTRICTS").map_or(defaults.strict_districts, |v| {
            match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                other => {
                    log::warn!("Invalid STRICT_DISTRICTS value '{other}', using false");
                    false
                }
            }
        });

        Self {
            bind_addr,
            port,
            alert_history_limit,
            alert_log_path,
            strict_districts,
        }
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
{
    let Some(value) = value else {
        return default;
    };

    value.trim().parse().unwrap_or_else(|_| {
        log::warn!("Invalid {key} value '{value}', using {default}");
        default
    })
}
