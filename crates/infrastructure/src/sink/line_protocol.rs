//! Influx line protocol output
//!
//! `<measurement>,<tag>=<v>,... <field>=<v>,... <timestamp ns>`, one line per
//! measurement. Tags and fields are written in key order.

use async_trait::async_trait;
use dnsmasq_stats_application::ports::MetricsSink;
use dnsmasq_stats_domain::{Measurement, ProbeError};
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Mutex;
use tracing::warn;

pub struct LineProtocolSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl LineProtocolSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> LineProtocolSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Render one line, or `None` when no field can be represented.
    pub fn format_line(measurement: &Measurement, timestamp_ns: i64) -> Option<String> {
        let mut line = escape(measurement.name, &[',', ' ']);

        for (key, value) in &measurement.tags {
            if value.is_empty() {
                continue;
            }
            let _ = write!(
                line,
                ",{}={}",
                escape(key, &[',', '=', ' ']),
                escape(value, &[',', '=', ' '])
            );
        }

        let mut separator = ' ';
        for (key, value) in &measurement.fields {
            if !value.is_finite() {
                warn!(field = %key, value, "Skipping non-finite field");
                continue;
            }
            let _ = write!(line, "{}{}={}", separator, escape(key, &[',', '=', ' ']), value);
            separator = ',';
        }

        if separator == ' ' {
            return None;
        }

        let _ = write!(line, " {}", timestamp_ns);
        Some(line)
    }
}

fn escape(raw: &str, special: &[char]) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '\\' || special.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl<W: Write + Send> MetricsSink for LineProtocolSink<W> {
    async fn emit(&self, measurement: &Measurement) -> Result<(), ProbeError> {
        let timestamp_ns = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();

        let Some(line) = Self::format_line(measurement, timestamp_ns) else {
            return Err(ProbeError::Sink(format!(
                "measurement {} has no finite field to write",
                measurement.name
            )));
        };

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ProbeError::Sink("line protocol writer poisoned".to_string()))?;
        writeln!(writer, "{}", line)
            .and_then(|_| writer.flush())
            .map_err(|e| ProbeError::Sink(e.to_string()))
    }
}
