// ============================================================================
// VIEWS - Paint screen models into the existing page markup (browser only)
// ============================================================================

pub mod auth;
pub mod directory;
pub mod notification;

pub use auth::render_auth;
pub use directory::render_directory;
pub use notification::render_notification;
