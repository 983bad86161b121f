use std::fmt;

/// Error object reported by the node inside an otherwise valid response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct DaemonError {
    pub code: i64,
    pub message: String,
}

impl fmt::Display for DaemonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

/// Coarse failure category, for callers that only care where a call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network, HTTP, decoding or configuration failure.
    Transport,
    /// The node answered with an `error` object.
    DaemonReported,
}

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("litecoind error: {0}")]
    Daemon(DaemonError),

    #[error("RPC transport failure: {message}")]
    Transport {
        message: String,
        /// HTTP status code, when the failure carried one.
        code: Option<u16>,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl RpcError {
    pub(crate) fn transport(message: impl Into<String>, code: Option<u16>) -> Self {
        Self::Transport {
            message: message.into(),
            code,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Daemon(_) => ErrorKind::DaemonReported,
            Self::Transport { .. } | Self::Config(_) => ErrorKind::Transport,
        }
    }

    /// Node error code for daemon errors, HTTP status for transport errors.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Daemon(err) => Some(err.code),
            Self::Transport { code, .. } => code.map(i64::from),
            Self::Config(_) => None,
        }
    }

    /// The node's error payload, if this is a daemon-reported failure.
    pub fn daemon(&self) -> Option<&DaemonError> {
        match self {
            Self::Daemon(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
            code: err.status().map(|s| s.as_u16()),
            source: Some(err),
        }
    }
}
