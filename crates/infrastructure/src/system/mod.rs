pub mod hostname_provider;

pub use hostname_provider::SystemHostnameProvider;
