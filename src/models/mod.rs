// ============================================================================
// MODELS - Wire and domain types shared with the backend
// ============================================================================

pub mod activity;
pub mod auth;
pub mod notification;

pub use activity::{Activity, ActivityDetails, ActivityDirectory};
pub use auth::{ErrorResponse, LoginRequest, LoginResponse, MessageResponse};
pub use notification::{Notification, NotificationKind};
