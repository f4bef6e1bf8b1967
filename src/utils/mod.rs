// ============================================================================
// UTILS - Constants and the key-value storage port
// ============================================================================

pub mod constants;
pub mod storage;

pub use constants::*;
pub use storage::{KeyValueStore, MemoryStore};
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStore;
