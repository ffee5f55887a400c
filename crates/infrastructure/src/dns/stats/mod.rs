pub mod exchanger;
pub mod message_builder;
pub mod reply_decoder;

pub use exchanger::DnsStatsExchanger;
pub use message_builder::StatsMessageBuilder;
pub use reply_decoder::ReplyDecoder;
