// ============================================================================
// SESSION STATE - Token + username, persisted through a KeyValueStore
// ============================================================================

use crate::error::ClientError;
use crate::utils::constants::{AUTH_TOKEN_KEY, CURRENT_USER_KEY};
use crate::utils::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub username: String,
}

/// Either both token and username, or neither
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials {
                token: token.into(),
                username: username.into(),
            }),
        }
    }

    pub fn is_active(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }

    /// Token for an authorized request, or `NotLoggedIn`
    pub fn require_token(&self) -> Result<&str, ClientError> {
        self.token().ok_or(ClientError::NotLoggedIn)
    }
}

/// In-memory session kept in step with durable storage
pub struct SessionStore<S: KeyValueStore> {
    port: S,
    current: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Read-through from storage. A single stray entry counts as no session and is removed.
    pub fn load(mut port: S) -> Self {
        let token = port.get_item(AUTH_TOKEN_KEY).filter(|t| !t.is_empty());
        let username = port.get_item(CURRENT_USER_KEY).filter(|u| !u.is_empty());

        let current = match (token, username) {
            (Some(token), Some(username)) => {
                log::info!("💾 [SESSION] Session restored for {}", username);
                Session::authenticated(token, username)
            }
            (None, None) => Session::anonymous(),
            _ => {
                log::warn!("⚠️ [SESSION] Incomplete session in storage, discarding it");
                for key in [AUTH_TOKEN_KEY, CURRENT_USER_KEY] {
                    if let Err(e) = port.remove_item(key) {
                        log::error!("❌ [SESSION] {}", e);
                    }
                }
                Session::anonymous()
            }
        };

        Self { port, current }
    }

    pub fn get(&self) -> &Session {
        &self.current
    }

    /// Persist and activate a session. On failure nothing stays half-written.
    pub fn set(&mut self, token: &str, username: &str) -> Result<(), ClientError> {
        if let Err(e) = self.write_both(token, username) {
            log::error!("❌ [SESSION] Could not persist session: {}", e);
            self.current = Session::anonymous();
            for key in [AUTH_TOKEN_KEY, CURRENT_USER_KEY] {
                if let Err(rollback) = self.port.remove_item(key) {
                    log::error!("❌ [SESSION] Rollback of {} failed: {}", key, rollback);
                }
            }
            return Err(e);
        }
        self.current = Session::authenticated(token, username);
        log::info!("💾 [SESSION] Session saved for {}", username);
        Ok(())
    }

    fn write_both(&mut self, token: &str, username: &str) -> Result<(), ClientError> {
        self.port.set_item(AUTH_TOKEN_KEY, token)?;
        self.port.set_item(CURRENT_USER_KEY, username)?;
        Ok(())
    }

    /// Forget the session in memory and in storage. Memory is cleared even if storage fails.
    pub fn clear(&mut self) -> Result<(), ClientError> {
        self.current = Session::anonymous();
        let token_result = self.port.remove_item(AUTH_TOKEN_KEY);
        let user_result = self.port.remove_item(CURRENT_USER_KEY);
        token_result.and(user_result)
    }

    pub fn port(&self) -> &S {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut S {
        &mut self.port
    }
}
