use dnsmasq_stats_application::ports::HostnameProvider;
use dnsmasq_stats_domain::ProbeError;

/// Reads the kernel hostname through the `hostname` crate.
#[derive(Debug, Default)]
pub struct SystemHostnameProvider;

impl SystemHostnameProvider {
    pub fn new() -> Self {
        Self
    }
}

impl HostnameProvider for SystemHostnameProvider {
    fn hostname(&self) -> Result<String, ProbeError> {
        let raw = hostname::get().map_err(|e| ProbeError::HostLookup(e.to_string()))?;

        raw.into_string().map_err(|raw| {
            ProbeError::HostLookup(format!("hostname is not valid UTF-8: {:?}", raw))
        })
    }
}
