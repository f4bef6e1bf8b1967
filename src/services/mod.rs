// ============================================================================
// SERVICES - Request building, response decoding, HTTP client
// ============================================================================

pub mod requests;
pub mod responses;
#[cfg(target_arch = "wasm32")]
pub mod api_client;

pub use requests::{ApiAction, ApiRequest, Method};
pub use responses::{parse_directory, parse_login, parse_message, RawResponse};
#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;
