// ============================================================================
// STATE MODULE - Plain state structs, mutated only by the viewmodels
// ============================================================================

pub mod session_state;
pub mod auth_state;
pub mod directory_state;
pub mod notification_state;
pub mod sequence;
pub mod app_state;

pub use session_state::*;
pub use auth_state::*;
pub use directory_state::*;
pub use notification_state::*;
pub use sequence::*;
pub use app_state::*;
