// ============================================================================
// NOTIFICATION VIEWMODEL - show() / hide()
// ============================================================================

use crate::config::CONFIG;
use crate::models::notification::Notification;
use crate::state::app_state::AppState;
use crate::utils::storage::KeyValueStore;
use crate::viewmodels::commands::{Effect, RenderScope};

/// Replace the current message and arm its hide timer
pub fn show<S: KeyValueStore>(state: &mut AppState<S>, notification: Notification) -> Vec<Effect> {
    let generation = state.notification.show(notification);
    vec![
        Effect::Render(RenderScope::Notification),
        Effect::ScheduleHide {
            generation,
            after_ms: CONFIG.notification_timeout_ms,
        },
    ]
}

pub fn on_hide<S: KeyValueStore>(state: &mut AppState<S>, generation: u64) -> Vec<Effect> {
    if state.notification.hide(generation) {
        vec![Effect::Render(RenderScope::Notification)]
    } else {
        Vec::new()
    }
}
