// ============================================================================
// API CLIENT - HTTP only (stateless), executes ApiRequest with gloo-net
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use crate::config::CONFIG;
use crate::error::ClientError;
use crate::services::requests::{ApiRequest, Method};
use crate::services::responses::RawResponse;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
        }
    }

    /// Send the request and read the body. Only transport failures are errors here;
    /// a non-2xx answer is still a `RawResponse`.
    pub async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, ClientError> {
        let url = request.url(&self.base_url);
        log::debug!("🌐 [API] {:?} {}", request.method, url);

        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(auth) = request.authorization_header() {
            builder = builder.header("Authorization", &auth);
        }

        let response = match request.form_body() {
            Some(body) => builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body)
                .map_err(|e| ClientError::Network(format!("Request build error: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("Error reading body: {}", e)))?;

        log::debug!("🌐 [API] {} -> HTTP {}", url, status);
        Ok(RawResponse { status, body })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
