pub mod stats;
pub mod transport;

pub use stats::{DnsStatsExchanger, ReplyDecoder, StatsMessageBuilder};
