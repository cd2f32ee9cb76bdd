//! Per-installation settings.

use crate::{endpoint::DEFAULT_PORT, transport::DEFAULT_TIMEOUT, Endpoint, Error, Result};
use serde::{de, Deserialize, Deserializer};
use std::time::Duration;

/// The calibration used when none is configured.
pub const DEFAULT_MAX_VOLUME: u16 = 100;

/// Everything needed to talk to one speaker.
///
/// Deserializes from a host's configuration, where `port` and `max_volume`
/// may be given as numbers or as numeric strings:
///
/// ```
/// let config: multiroom::Config = serde_json::from_str(
///     r#"{ "host": "10.0.0.5", "port": "55001", "max_volume": "40" }"#,
/// ).unwrap();
/// assert_eq!(config.max_volume, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Hostname or IP address of the speaker.
    pub host: String,
    /// Port of the speaker's HTTP server.
    #[serde(default = "default_port", deserialize_with = "number_or_string")]
    pub port: u16,
    /// Display name. Fetched from the speaker when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Raw volume that corresponds to a volume level of `1.0`.
    #[serde(default = "default_max_volume", deserialize_with = "number_or_string")]
    pub max_volume: u16,
    /// Request timeout, in seconds when deserialized.
    #[serde(default = "default_timeout", deserialize_with = "seconds")]
    pub timeout: Duration,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_volume() -> u16 {
    DEFAULT_MAX_VOLUME
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    let value = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::String(s) => s.trim().parse().map_err(de::Error::custom)?,
    };
    u16::try_from(value).map_err(de::Error::custom)
}

fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(de::Error::custom)
}

#[allow(missing_docs)]
impl Config {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            name: None,
            max_volume: DEFAULT_MAX_VOLUME,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_max_volume(mut self, max_volume: u16) -> Self {
        self.max_volume = max_volume;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks the settings and returns the speaker's endpoint.
    pub fn validate(&self) -> Result<Endpoint> {
        if self.max_volume == 0 {
            return Err(Error::Config("max_volume must be greater than 0".into()));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than 0".into()));
        }
        Endpoint::new(&self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_str(r#"{ "host": "10.0.0.5" }"#).unwrap();
        assert_eq!(config, Config::new("10.0.0.5"));
        assert_eq!(config.port, 55001);
        assert_eq!(config.max_volume, 100);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.name, None);
    }

    #[test]
    fn test_numbers_as_strings() {
        let config: Config = serde_json::from_str(
            r#"{ "host": "10.0.0.5", "port": "8001", "max_volume": " 40 ", "name": "Kitchen", "timeout": 2.5 }"#,
        )
        .unwrap();
        assert_eq!(config.port, 8001);
        assert_eq!(config.max_volume, 40);
        assert_eq!(config.name.as_deref(), Some("Kitchen"));
        assert_eq!(config.timeout, Duration::from_millis(2500));

        let config: Config =
            serde_json::from_str(r#"{ "host": "10.0.0.5", "port": 8002 }"#).unwrap();
        assert_eq!(config.port, 8002);
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(serde_json::from_str::<Config>(r#"{ "host": "h", "port": "loud" }"#).is_err());
        assert!(serde_json::from_str::<Config>(r#"{ "host": "h", "port": 70000 }"#).is_err());
        assert!(serde_json::from_str::<Config>(r#"{ "port": 55001 }"#).is_err());
    }

    #[test]
    fn test_validate() {
        let endpoint = Config::new("10.0.0.5").validate().unwrap();
        assert_eq!(endpoint.to_string(), "10.0.0.5:55001");

        let config = Config::new("10.0.0.5").with_max_volume(0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
        let config = Config::new("10.0.0.5").with_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
        assert!(Config::new("").validate().is_err());
    }
}
