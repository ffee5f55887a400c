use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Where completed measurements go.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Influx line protocol on stdout.
    #[default]
    Line,

    /// Structured `tracing` events.
    Log,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Log => "log",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "log" => Ok(Self::Log),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}
