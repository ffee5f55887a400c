//! dnsmasq-stats infrastructure: DNS wire handling, transport, system and sink adapters.
pub mod dns;
pub mod sink;
pub mod system;
