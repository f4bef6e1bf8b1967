// ============================================================================
// ENROLLMENT VIEWMODEL - signup / unregister, gated on a session
// ============================================================================

use crate::error::ClientError;
use crate::models::notification::Notification;
use crate::services::requests::ApiRequest;
use crate::services::responses::{parse_message, RawResponse};
use crate::state::app_state::AppState;
use crate::state::sequence::{Channel, RequestTag};
use crate::utils::constants::{
    MSG_GENERIC_ERROR, MSG_SIGNUP_NEEDS_LOGIN, MSG_SIGNUP_RETRY, MSG_UNREGISTER_NEEDS_LOGIN, MSG_UNREGISTER_RETRY,
};
use crate::utils::storage::KeyValueStore;
use crate::viewmodels::commands::Effect;
use crate::viewmodels::{directory_viewmodel, notification_viewmodel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Enrollment {
    Signup,
    Unregister,
}

impl Enrollment {
    fn login_required_message(&self) -> &'static str {
        match self {
            Enrollment::Signup => MSG_SIGNUP_NEEDS_LOGIN,
            Enrollment::Unregister => MSG_UNREGISTER_NEEDS_LOGIN,
        }
    }

    fn retry_message(&self) -> &'static str {
        match self {
            Enrollment::Signup => MSG_SIGNUP_RETRY,
            Enrollment::Unregister => MSG_UNREGISTER_RETRY,
        }
    }
}

pub fn on_signup<S: KeyValueStore>(state: &mut AppState<S>, email: &str, activity: &str) -> Vec<Effect> {
    start(state, Enrollment::Signup, email, activity)
}

pub fn on_unregister<S: KeyValueStore>(state: &mut AppState<S>, email: &str, activity: &str) -> Vec<Effect> {
    start(state, Enrollment::Unregister, email, activity)
}

fn start<S: KeyValueStore>(state: &mut AppState<S>, kind: Enrollment, email: &str, activity: &str) -> Vec<Effect> {
    let token = match state.session.get().require_token().map(str::to_string) {
        Ok(token) => token,
        Err(e) => {
            log::warn!("🚫 [ENROLL] {:?} of {} blocked: {}", kind, email, e);
            return notification_viewmodel::show(state, Notification::error(kind.login_required_message()));
        }
    };
    let request = match kind {
        Enrollment::Signup => ApiRequest::signup(activity, email, &token),
        Enrollment::Unregister => ApiRequest::unregister(activity, email, &token),
    };

    log::info!("📝 [ENROLL] {:?} {} -> {}", kind, email, activity);
    let tag = state.sequencer.issue(Channel::Feedback);
    vec![Effect::Send { tag, request }]
}

/// A success always refreshes the directory; a stale one just doesn't notify
pub fn on_enrollment_completed<S: KeyValueStore>(
    state: &mut AppState<S>,
    tag: RequestTag,
    kind: Enrollment,
    outcome: Result<RawResponse, ClientError>,
) -> Vec<Effect> {
    let fresh = state.sequencer.accept(tag);

    match outcome.and_then(parse_message) {
        Ok(response) => {
            let mut effects = Vec::new();
            if fresh {
                log::info!("✅ [ENROLL] {:?} done: {}", kind, response.message);
                effects.extend(notification_viewmodel::show(state, Notification::success(response.message)));
                if kind == Enrollment::Signup {
                    effects.push(Effect::ResetSignupForm);
                }
            }
            effects.extend(directory_viewmodel::on_refresh(state));
            effects
        }
        Err(e) if !fresh => {
            log::debug!("⏭️ [ENROLL] Stale {:?} failure ignored: {}", kind, e);
            Vec::new()
        }
        Err(e) if e.is_transport() => {
            log::error!("❌ [ENROLL] Error during {:?}: {}", kind, e);
            notification_viewmodel::show(state, Notification::error(kind.retry_message()))
        }
        Err(e) => {
            log::warn!("⚠️ [ENROLL] {:?} rejected: {}", kind, e);
            let text = e.server_detail().unwrap_or(MSG_GENERIC_ERROR).to_string();
            notification_viewmodel::show(state, Notification::error(text))
        }
    }
}
