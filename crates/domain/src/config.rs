pub mod errors;
pub mod logging;
pub mod output;
pub mod probe;
pub mod root;
pub mod schedule;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};
pub use probe::{ProbeConfig, DEFAULT_SERVER};
pub use root::{CliOverrides, Config, EffectiveConfig, SAMPLE_CONFIG};
pub use schedule::ScheduleConfig;
