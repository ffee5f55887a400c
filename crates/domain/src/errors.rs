use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    #[error("Failed to get hostname: {0}")]
    HostLookup(String),

    #[error("Invalid stats query: {0}")]
    InvalidQuery(String),

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Transport timeout waiting for {server}")]
    Timeout { server: String },

    #[error("Reply from {server} has id {got}, expected {expected}")]
    IdMismatch {
        server: String,
        expected: u16,
        got: u16,
    },

    #[error("Malformed DNS reply: {0}")]
    MalformedReply(String),

    #[error(
        "stats DNS record {record}: unexpected number of arguments in record: got {got}, want {want}"
    )]
    UnexpectedFieldCount {
        record: String,
        got: usize,
        want: usize,
    },

    #[error("stats DNS record {record:?}: unexpected number of replies: got {got}, want {want}")]
    UnexpectedReplyCount {
        record: String,
        got: usize,
        want: usize,
    },

    #[error("stats DNS record {record}: invalid number {value:?}: {reason}")]
    InvalidNumber {
        record: String,
        value: String,
        reason: String,
    },

    #[error("Metrics sink error: {0}")]
    Sink(String),
}

impl ProbeError {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::Timeout { .. }
                | Self::IdMismatch { .. }
                | Self::MalformedReply(_)
        )
    }

    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedFieldCount { .. }
                | Self::UnexpectedReplyCount { .. }
                | Self::InvalidNumber { .. }
        )
    }

    /// Failure family for log fields: `transport`, `parse` or `other`.
    pub fn category(&self) -> &'static str {
        if self.is_transport() {
            "transport"
        } else if self.is_parse() {
            "parse"
        } else {
            "other"
        }
    }

    pub fn result_type(&self) -> ResultType {
        match self {
            Self::Timeout { .. } => ResultType::Timeout,
            _ => ResultType::Error,
        }
    }
}

/// Coarse classification of a collection cycle, used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    Success,
    Timeout,
    Error,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Timeout => "timeout",
            Self::Error => "error",
        }
    }
}

impl<T> From<&Result<T, ProbeError>> for ResultType {
    fn from(result: &Result<T, ProbeError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(e) => e.result_type(),
        }
    }
}
