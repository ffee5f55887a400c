use serde::Deserialize;

pub const DEFAULT_SERVER: &str = "127.0.0.1:53";

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// dnsmasq address as `host:port`; empty selects the loopback default.
    #[serde(default)]
    pub server: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ProbeConfig {
    pub fn effective_server(&self) -> &str {
        let server = self.server.trim();
        if server.is_empty() {
            DEFAULT_SERVER
        } else {
            server
        }
    }
}

fn default_timeout_ms() -> u64 {
    2000
}
