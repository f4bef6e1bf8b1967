// ============================================================================
// AUTH VIEWMODEL - Login / logout transitions and header menus
// ============================================================================
// LoggedOut -> LoggedIn only through a successful POST /login.
// LoggedIn -> LoggedOut only through an explicit logout (no server call).
// ============================================================================

use crate::error::ClientError;
use crate::models::notification::Notification;
use crate::services::requests::ApiRequest;
use crate::services::responses::{parse_login, RawResponse};
use crate::state::app_state::AppState;
use crate::state::sequence::{Channel, RequestTag};
use crate::utils::constants::{MSG_LOGGED_OUT, MSG_LOGIN_FAILED, MSG_LOGIN_RETRY, MSG_SESSION_NOT_SAVED};
use crate::utils::storage::KeyValueStore;
use crate::viewmodels::commands::{Effect, RenderScope};
use crate::viewmodels::notification_viewmodel;

/// Effects every auth transition ends with: header + participant rows
fn transition_renders() -> Vec<Effect> {
    vec![
        Effect::Render(RenderScope::Auth),
        Effect::Render(RenderScope::Directory),
    ]
}

pub fn on_login<S: KeyValueStore>(state: &mut AppState<S>, username: &str, password: &str) -> Vec<Effect> {
    log::info!("🔐 [AUTH] Login submitted for {}", username);
    let tag = state.sequencer.issue(Channel::Feedback);
    vec![Effect::Send {
        tag,
        request: ApiRequest::login(username, password),
    }]
}

pub fn on_login_completed<S: KeyValueStore>(
    state: &mut AppState<S>,
    tag: RequestTag,
    username: &str,
    outcome: Result<RawResponse, ClientError>,
) -> Vec<Effect> {
    if !state.sequencer.accept(tag) {
        return Vec::new();
    }

    match outcome.and_then(parse_login) {
        Ok(response) => match state.session.set(&response.token, username) {
            Ok(()) => {
                log::info!("✅ [AUTH] Logged in as {}", username);
                state.menus.close_login();
                let mut effects = vec![Effect::ResetLoginForm];
                effects.extend(transition_renders());
                effects.extend(notification_viewmodel::show(state, Notification::success(response.message)));
                effects
            }
            Err(e) => {
                log::error!("❌ [AUTH] Login accepted but session not stored: {}", e);
                let mut effects = transition_renders();
                effects.extend(notification_viewmodel::show(state, Notification::error(MSG_SESSION_NOT_SAVED)));
                effects
            }
        },
        Err(e) if e.is_transport() => {
            log::error!("❌ [AUTH] Login error: {}", e);
            notification_viewmodel::show(state, Notification::error(MSG_LOGIN_RETRY))
        }
        Err(e) => {
            log::warn!("⚠️ [AUTH] Login rejected: {}", e);
            let text = e.server_detail().unwrap_or(MSG_LOGIN_FAILED).to_string();
            notification_viewmodel::show(state, Notification::error(text))
        }
    }
}

/// Always succeeds locally, even when already logged out
pub fn on_logout<S: KeyValueStore>(state: &mut AppState<S>) -> Vec<Effect> {
    log::info!("👋 [AUTH] Logout");
    if let Err(e) = state.session.clear() {
        log::error!("❌ [AUTH] Error clearing stored session: {}", e);
    }
    state.menus.close_user_menu();
    let mut effects = transition_renders();
    effects.extend(notification_viewmodel::show(state, Notification::info(MSG_LOGGED_OUT)));
    effects
}

pub fn on_toggle_user_menu<S: KeyValueStore>(state: &mut AppState<S>) -> Vec<Effect> {
    state.menus.toggle_user_menu();
    vec![Effect::Render(RenderScope::Auth)]
}

pub fn on_open_login<S: KeyValueStore>(state: &mut AppState<S>) -> Vec<Effect> {
    state.menus.open_login();
    vec![Effect::Render(RenderScope::Auth)]
}

pub fn on_cancel_login<S: KeyValueStore>(state: &mut AppState<S>) -> Vec<Effect> {
    state.menus.close_login();
    vec![Effect::ResetLoginForm, Effect::Render(RenderScope::Auth)]
}

pub fn on_outside_click<S: KeyValueStore>(state: &mut AppState<S>) -> Vec<Effect> {
    if !state.menus.user_menu_open {
        return Vec::new();
    }
    state.menus.close_user_menu();
    vec![Effect::Render(RenderScope::Auth)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use crate::state::session_state::Session;
    use crate::state::AuthStatus;
    use crate::utils::constants::{AUTH_TOKEN_KEY, CURRENT_USER_KEY};
    use crate::utils::storage::MemoryStore;

    fn send_tag(effects: &[Effect]) -> RequestTag {
        match &effects[0] {
            Effect::Send { tag, .. } => *tag,
            other => panic!("expected Send, got {:?}", other),
        }
    }

    #[test]
    fn rejected_login_keeps_state_and_uses_detail() {
        let mut state = AppState::new(MemoryStore::new());
        let tag = send_tag(&on_login(&mut state, "ms.jones", "wrong"));
        let effects = on_login_completed(
            &mut state,
            tag,
            "ms.jones",
            Ok(RawResponse::new(401, r#"{"detail": "Invalid username or password"}"#)),
        );

        assert_eq!(state.auth_status(), AuthStatus::LoggedOut);
        assert!(state.session.port().is_empty());
        assert!(!effects.contains(&Effect::ResetLoginForm));
        let shown = state.notification.visible().unwrap();
        assert_eq!(shown.text, "Invalid username or password");
        assert_eq!(shown.kind, NotificationKind::Error);
    }

    #[test]
    fn rejected_login_without_detail_uses_fallback() {
        let mut state = AppState::new(MemoryStore::new());
        let tag = send_tag(&on_login(&mut state, "ms.jones", "wrong"));
        on_login_completed(&mut state, tag, "ms.jones", Ok(RawResponse::new(400, "{}")));
        assert_eq!(state.notification.visible().unwrap().text, MSG_LOGIN_FAILED);
    }

    #[test]
    fn structured_detail_and_html_errors_use_the_right_fallback() {
        let mut state = AppState::new(MemoryStore::new());
        let tag = send_tag(&on_login(&mut state, "ms.jones", "pw1"));
        on_login_completed(
            &mut state,
            tag,
            "ms.jones",
            Ok(RawResponse::new(422, r#"{"detail": [{"msg": "field required"}]}"#)),
        );
        assert_eq!(state.notification.visible().unwrap().text, MSG_LOGIN_FAILED);

        let tag = send_tag(&on_login(&mut state, "ms.jones", "pw1"));
        on_login_completed(&mut state, tag, "ms.jones", Ok(RawResponse::new(502, "<html>Bad Gateway</html>")));
        assert_eq!(state.notification.visible().unwrap().text, MSG_LOGIN_RETRY);
    }

    #[test]
    fn network_failure_during_login_is_reported() {
        let mut state = AppState::new(MemoryStore::new());
        let tag = send_tag(&on_login(&mut state, "ms.jones", "pw1"));
        on_login_completed(&mut state, tag, "ms.jones", Err(ClientError::Network("offline".into())));
        assert_eq!(state.auth_status(), AuthStatus::LoggedOut);
        assert_eq!(state.notification.visible().unwrap().text, MSG_LOGIN_RETRY);
    }

    #[test]
    fn storage_failure_on_login_leaves_no_partial_session() {
        let port = MemoryStore::new().reject_writes_to(CURRENT_USER_KEY);
        let mut state = AppState::new(port);
        let tag = send_tag(&on_login(&mut state, "ms.jones", "pw1"));
        on_login_completed(
            &mut state,
            tag,
            "ms.jones",
            Ok(RawResponse::new(200, r#"{"token": "abc123", "message": "Welcome"}"#)),
        );
        assert_eq!(state.session.get(), &Session::anonymous());
        assert_eq!(state.session.port().get_item(AUTH_TOKEN_KEY), None);
        assert_eq!(state.notification.visible().unwrap().text, MSG_SESSION_NOT_SAVED);
    }

    #[test]
    fn older_login_answer_is_ignored() {
        let mut state = AppState::new(MemoryStore::new());
        let first = send_tag(&on_login(&mut state, "mr.smith", "pw"));
        let second = send_tag(&on_login(&mut state, "ms.jones", "pw1"));

        on_login_completed(&mut state, second, "ms.jones", Ok(RawResponse::new(200, r#"{"token": "new", "message": "Welcome"}"#)));
        let effects = on_login_completed(&mut state, first, "mr.smith", Ok(RawResponse::new(200, r#"{"token": "old", "message": "Hi"}"#)));

        assert!(effects.is_empty());
        assert_eq!(state.session.get().username(), Some("ms.jones"));
    }

    #[test]
    fn menus_follow_clicks() {
        let mut state = AppState::new(MemoryStore::new());
        on_toggle_user_menu(&mut state);
        assert!(state.menus.user_menu_open);
        assert_eq!(on_outside_click(&mut state), vec![Effect::Render(RenderScope::Auth)]);
        assert!(on_outside_click(&mut state).is_empty());

        on_toggle_user_menu(&mut state);
        on_open_login(&mut state);
        assert!(state.menus.login_panel_open);
        assert!(!state.menus.user_menu_open);

        let effects = on_cancel_login(&mut state);
        assert!(!state.menus.login_panel_open);
        assert!(effects.contains(&Effect::ResetLoginForm));
    }

    #[test]
    fn logout_clears_storage_and_closes_menu() {
        let port = MemoryStore::with_items(&[(AUTH_TOKEN_KEY, "abc123"), (CURRENT_USER_KEY, "ms.jones")]);
        let mut state = AppState::new(port);
        state.menus.toggle_user_menu();

        on_logout(&mut state);
        assert_eq!(state.auth_status(), AuthStatus::LoggedOut);
        assert!(state.session.port().is_empty());
        assert!(!state.menus.user_menu_open);
        assert_eq!(state.notification.visible().unwrap().kind, NotificationKind::Info);
    }
}
