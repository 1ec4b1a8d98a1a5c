use std::time::Duration;

use crate::error::ConfigError;

/// Default port of the threshold listener
pub const DEFAULT_LISTEN_PORT: u16 = 8080;
pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Sensor configuration loaded from environment variables.
///
/// | Env Var                | Default      |
/// |------------------------|--------------|
/// | `SENSOR_ID`            | required     |
/// | `SERVER_URL`           | required     |
/// | `THRESHOLD_URL`        | required     |
/// | `LISTEN_HOST`          | `127.0.0.1`  |
/// | `LISTEN_PORT`          | `8080`       |
/// | `REPORT_INTERVAL_SECS` | `10`         |
/// | `REQUEST_TIMEOUT_SECS` | `5`          |
/// | `ACCEPT_INVALID_CERTS` | `false`      |
#[derive(Debug, Clone, PartialEq)]
pub struct SensorConfig {
    /// Identity of this sensor
    pub sensor_id: String,
    /// Base url the initial threshold is fetched from, `{server_url}/{sensor_id}`
    pub server_url: String,
    /// Url readings are posted to
    pub threshold_url: String,
    pub listen_host: String,
    pub listen_port: u16,
    pub report_interval: Duration,
    /// Upper bound on every outbound call
    pub request_timeout: Duration,
    /// Skip TLS certificate verification, local testing only
    pub accept_invalid_certs: bool,
}

impl SensorConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let listen_port = match lookup("LISTEN_PORT") {
            Some(raw) => parse(&raw, "LISTEN_PORT")?,
            None => DEFAULT_LISTEN_PORT,
        };
        let report_interval = match lookup("REPORT_INTERVAL_SECS") {
            Some(raw) => Duration::from_secs(parse(&raw, "REPORT_INTERVAL_SECS")?),
            None => DEFAULT_REPORT_INTERVAL,
        };
        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse(&raw, "REQUEST_TIMEOUT_SECS")?),
            None => DEFAULT_REQUEST_TIMEOUT,
        };
        let accept_invalid_certs = match lookup("ACCEPT_INVALID_CERTS") {
            Some(raw) => parse(&raw.to_ascii_lowercase(), "ACCEPT_INVALID_CERTS")?,
            None => false,
        };

        if report_interval.is_zero() {
            return Err(ConfigError::Invalid {
                key: "REPORT_INTERVAL_SECS",
                value: "0".to_string(),
            });
        }
        if request_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            sensor_id: required("SENSOR_ID")?,
            server_url: required("SERVER_URL")?,
            threshold_url: required("THRESHOLD_URL")?,
            listen_host: lookup("LISTEN_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            listen_port,
            report_interval,
            request_timeout,
            accept_invalid_certs,
        })
    }

    /// Address the threshold listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen_host, self.listen_port)
    }
}

fn parse<T: std::str::FromStr>(raw: &str, key: &'static str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
