// ============================================================================
// VIEWMODELS - Handlers: (state, command) -> effects. No DOM, no I/O.
// ============================================================================

pub mod commands;
pub mod notification_viewmodel;
pub mod auth_viewmodel;
pub mod directory_viewmodel;
pub mod enrollment_viewmodel;
pub mod screen;

pub use commands::{Command, Effect, RenderScope};
pub use enrollment_viewmodel::Enrollment;
pub use screen::{ActivityCard, AuthView, DirectoryBody, DirectoryView, NotificationView, ParticipantRow, SelectOption};

use crate::services::requests::ApiAction;
use crate::state::app_state::AppState;
use crate::utils::storage::KeyValueStore;

/// Route a command to its handler
pub fn dispatch<S: KeyValueStore>(state: &mut AppState<S>, command: Command) -> Vec<Effect> {
    match command {
        Command::Startup => {
            let mut effects = vec![
                Effect::Render(RenderScope::Auth),
                Effect::Render(RenderScope::Notification),
                Effect::Render(RenderScope::Directory),
            ];
            effects.extend(directory_viewmodel::on_refresh(state));
            effects
        }
        Command::Login { username, password } => auth_viewmodel::on_login(state, &username, &password),
        Command::Logout => auth_viewmodel::on_logout(state),
        Command::Refresh => directory_viewmodel::on_refresh(state),
        Command::Signup { email, activity } => enrollment_viewmodel::on_signup(state, &email, &activity),
        Command::Unregister { email, activity } => enrollment_viewmodel::on_unregister(state, &email, &activity),
        Command::ToggleUserMenu => auth_viewmodel::on_toggle_user_menu(state),
        Command::OpenLogin => auth_viewmodel::on_open_login(state),
        Command::CancelLogin => auth_viewmodel::on_cancel_login(state),
        Command::OutsideClick => auth_viewmodel::on_outside_click(state),
        Command::HideNotification { generation } => notification_viewmodel::on_hide(state, generation),
        Command::Completed { tag, action, outcome } => match action {
            ApiAction::Login { username } => auth_viewmodel::on_login_completed(state, tag, &username, outcome),
            ApiAction::ListActivities => directory_viewmodel::on_refresh_completed(state, tag, outcome),
            ApiAction::Signup { .. } => {
                enrollment_viewmodel::on_enrollment_completed(state, tag, Enrollment::Signup, outcome)
            }
            ApiAction::Unregister { .. } => {
                enrollment_viewmodel::on_enrollment_completed(state, tag, Enrollment::Unregister, outcome)
            }
        },
    }
}
