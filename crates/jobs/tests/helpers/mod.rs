
pub use mock_ports::{make_use_case, CountingSink, FixedHostname, ScriptedExchanger};
