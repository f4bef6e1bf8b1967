// ============================================================================
// CLIENT ERROR - Failures surfaced by services and the session store
// ============================================================================

/// Every recoverable failure the client can hit
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Action attempted without a session; no request was sent
    NotLoggedIn,
    /// The request never completed (offline, CORS, DNS...)
    Network(String),
    /// The server answered with a non-2xx status
    Http { status: u16, detail: Option<String> },
    /// The body could not be decoded
    Parse(String),
    /// Durable local storage rejected a read or write
    Storage(String),
}

impl ClientError {
    /// Detail provided by the server, if this is an HTTP failure carrying one
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            ClientError::Http { detail: Some(detail), .. } => Some(detail.as_str()),
            _ => None,
        }
    }

    /// True when the request did not produce a usable server answer
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::Parse(_))
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::NotLoggedIn => write!(f, "Not logged in"),
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Http { status, detail: Some(detail) } => write!(f, "HTTP {}: {}", status, detail),
            ClientError::Http { status, detail: None } => write!(f, "HTTP {}", status),
            ClientError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ClientError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}
