// ============================================================================
// API RESPONSES - Turning status + body into typed results
// ============================================================================

use serde::de::DeserializeOwned;
use crate::error::ClientError;
use crate::models::{ActivityDirectory, ErrorResponse, LoginResponse, MessageResponse};

/// What came back over the wire, before interpretation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a 2xx body as `T`; any other status becomes `ClientError::Http`
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        if self.is_success() {
            return Ok(serde_json::from_str(&self.body)?);
        }
        let error: ErrorResponse = serde_json::from_str(&self.body)?;
        Err(ClientError::Http {
            status: self.status,
            detail: error.detail_text(),
        })
    }
}

pub fn parse_login(raw: RawResponse) -> Result<LoginResponse, ClientError> {
    raw.into_result()
}

pub fn parse_message(raw: RawResponse) -> Result<MessageResponse, ClientError> {
    raw.into_result()
}

pub fn parse_directory(raw: RawResponse) -> Result<ActivityDirectory, ClientError> {
    if !raw.is_success() {
        // the directory error body is never shown, don't require it to be JSON
        return Err(ClientError::Http { status: raw.status, detail: None });
    }
    Ok(serde_json::from_str(&raw.body)?)
}
