use super::{ProbeError, StatName};
use std::sync::Arc;

/// DNS class CHAOS (RFC 1035 §3.2.4).
pub const CLASS_CHAOS: u16 = 3;

/// DNS record type TXT.
pub const TYPE_TXT: u16 = 16;

/// A single statistics question: `<name> CH TXT` with recursion desired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatQuery {
    pub name: Arc<str>,
    pub id: u16,
    pub recursion_desired: bool,
}

impl StatQuery {
    pub fn for_stat(stat: StatName) -> Self {
        Self {
            name: Arc::from(stat.as_str()),
            id: fastrand::u16(..),
            recursion_desired: true,
        }
    }

    pub fn new(name: impl Into<Arc<str>>) -> Result<Self, ProbeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProbeError::InvalidQuery(
                "stats query name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            id: fastrand::u16(..),
            recursion_desired: true,
        })
    }

    pub fn query_class(&self) -> u16 {
        CLASS_CHAOS
    }

    pub fn record_type(&self) -> u16 {
        TYPE_TXT
    }
}
