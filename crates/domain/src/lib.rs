//! dnsmasq-stats domain layer
pub mod config;
pub mod errors;
pub mod measurement;
pub mod stat_name;
pub mod stat_query;
pub mod stats_reply;

pub use config::{CliOverrides, Config, ConfigError, EffectiveConfig, OutputFormat, SAMPLE_CONFIG};
pub use errors::{ProbeError, ResultType};
pub use measurement::{FieldMap, Measurement, Tags, MEASUREMENT_NAME};
pub use stat_name::StatName;
pub use stat_query::StatQuery;
pub use stats_reply::{AnswerData, ReplyAnswer, StatsReply};
