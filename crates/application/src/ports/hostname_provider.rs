use dnsmasq_stats_domain::ProbeError;

pub trait HostnameProvider: Send + Sync {
    /// Name of the local host, possibly fully qualified.
    fn hostname(&self) -> Result<String, ProbeError>;
}
