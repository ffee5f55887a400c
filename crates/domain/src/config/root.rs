use serde::Deserialize;
use std::time::Duration;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::{OutputConfig, OutputFormat};
use super::probe::ProbeConfig;
use super::schedule::ScheduleConfig;

pub const SAMPLE_CONFIG: &str = r#"[probe]
## dnsmasq server IP address and port.
# server = "127.0.0.1:53"
# timeout_ms = 2000

[schedule]
# interval_secs = 10

[output]
## "line" writes influx line protocol to stdout, "log" emits tracing events.
# format = "line"

[logging]
# level = "info"
"#;

/// Main configuration structure for dnsmasq-stats
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Resolver endpoint and exchange timeout
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Collection interval
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Measurement output
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsmasq-stats.toml in current directory
    /// 3. /etc/dnsmasq-stats/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dnsmasq-stats.toml").exists() {
            Self::from_file("dnsmasq-stats.toml")?
        } else if std::path::Path::new("/etc/dnsmasq-stats/config.toml").exists() {
            Self::from_file("/etc/dnsmasq-stats/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.probe.server = server;
        }
        if let Some(interval) = overrides.interval_secs {
            self.schedule.interval_secs = interval;
        }
        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schedule.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Collection interval cannot be 0".to_string(),
            ));
        }

        if self.probe.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Exchange timeout cannot be 0".to_string(),
            ));
        }

        let server = self.probe.effective_server();
        let well_formed = match server.rsplit_once(':') {
            Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
            None => false,
        };
        if !well_formed {
            return Err(ConfigError::Validation(format!(
                "Server '{}' must be in host:port form",
                server
            )));
        }

        Ok(())
    }

    /// Resolve defaults into the immutable settings a collector runs with.
    pub fn resolve(&self) -> EffectiveConfig {
        EffectiveConfig {
            server: self.probe.effective_server().to_string(),
            timeout: Duration::from_millis(self.probe.timeout_ms),
            interval: Duration::from_secs(self.schedule.interval_secs),
        }
    }
}

/// Settings after defaulting. Built once before the first cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub server: String,
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Config::default().resolve()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub interval_secs: Option<u64>,
    pub output_format: Option<OutputFormat>,
    pub log_level: Option<String>,
}
