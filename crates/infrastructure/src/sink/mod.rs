pub mod line_protocol;
pub mod log_sink;

pub use line_protocol::LineProtocolSink;
pub use log_sink::LogSink;
