// ============================================================================
// APP STATE - Everything the handlers read and write
// ============================================================================

use crate::state::{AuthStatus, DirectoryState, MenuState, NotificationState, RequestSequencer, SessionStore};
use crate::utils::storage::KeyValueStore;

/// Whole client state. The browser runtime keeps it in one `Rc<RefCell<_>>`.
pub struct AppState<S: KeyValueStore> {
    pub session: SessionStore<S>,
    pub directory: DirectoryState,
    pub notification: NotificationState,
    pub menus: MenuState,
    pub sequencer: RequestSequencer,
}

impl<S: KeyValueStore> AppState<S> {
    /// Start from whatever session the store holds
    pub fn new(port: S) -> Self {
        Self {
            session: SessionStore::load(port),
            directory: DirectoryState::default(),
            notification: NotificationState::new(),
            menus: MenuState::default(),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn auth_status(&self) -> AuthStatus {
        AuthStatus::of(self.session.get())
    }
}
