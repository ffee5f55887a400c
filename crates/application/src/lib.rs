//! dnsmasq-stats application layer: ports, reply parsing and the collection cycle.
pub mod ports;
pub mod services;
pub mod use_cases;
