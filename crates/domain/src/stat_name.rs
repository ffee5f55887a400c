use std::fmt;

/// Statistics records exposed by dnsmasq under the CHAOS class.
///
/// The declaration order is the order a collection cycle queries them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatName {
    CacheSize,
    Insertions,
    Evictions,
    Misses,
    Hits,
    Auth,
    Servers,
}

/// Owner name of the per-upstream summary record.
pub const COMPOSITE_RECORD: &str = "servers.bind.";

impl StatName {
    pub const ALL: [StatName; 7] = [
        Self::CacheSize,
        Self::Insertions,
        Self::Evictions,
        Self::Misses,
        Self::Hits,
        Self::Auth,
        Self::Servers,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CacheSize => "cachesize.bind.",
            Self::Insertions => "insertions.bind.",
            Self::Evictions => "evictions.bind.",
            Self::Misses => "misses.bind.",
            Self::Hits => "hits.bind.",
            Self::Auth => "auth.bind.",
            Self::Servers => COMPOSITE_RECORD,
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true when `owner` names the per-upstream summary record.
pub fn is_composite_record(owner: &str) -> bool {
    owner.eq_ignore_ascii_case(COMPOSITE_RECORD)
}

/// Field key for a simple record: the first dot-delimited label of its owner name.
pub fn field_key(owner: &str) -> &str {
    owner.split('.').next().unwrap_or(owner)
}
