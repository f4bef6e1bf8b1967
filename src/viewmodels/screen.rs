// ============================================================================
// SCREEN MODELS - What the views paint, computed from AppState (no DOM)
// ============================================================================

use crate::state::app_state::AppState;
use crate::state::DirectoryState;
use crate::utils::constants::{MSG_DIRECTORY_FAILED, MSG_DIRECTORY_LOADING, SELECT_PLACEHOLDER};
use crate::utils::storage::KeyValueStore;

/// Visibility of the header and forms
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthView {
    pub login_button_visible: bool,
    pub user_info_visible: bool,
    pub logged_user: Option<String>,
    pub signup_form_visible: bool,
    pub auth_required_visible: bool,
    pub user_menu_open: bool,
    pub login_panel_open: bool,
}

impl AuthView {
    pub fn build<S: KeyValueStore>(state: &AppState<S>) -> Self {
        let username = state.session.get().username().map(str::to_string);
        let logged_in = state.auth_status().is_logged_in();
        Self {
            login_button_visible: !logged_in,
            user_info_visible: logged_in,
            logged_user: username,
            signup_form_visible: logged_in,
            auth_required_visible: !logged_in,
            user_menu_open: state.menus.user_menu_open,
            login_panel_open: state.menus.login_panel_open,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub activity: String,
    /// Delete button attached (only with a session)
    pub removable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub over_capacity: bool,
    pub participants: Vec<ParticipantRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryBody {
    Message(String),
    Cards(Vec<ActivityCard>),
}

/// One `<option>` of the activity select
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryView {
    pub body: DirectoryBody,
    /// Activity select options, response order
    pub options: Vec<String>,
}

impl DirectoryView {
    pub fn build<S: KeyValueStore>(state: &AppState<S>) -> Self {
        let removable = state.auth_status().is_logged_in();
        match &state.directory {
            DirectoryState::Loading => Self {
                body: DirectoryBody::Message(MSG_DIRECTORY_LOADING.to_string()),
                options: Vec::new(),
            },
            DirectoryState::Failed => Self {
                body: DirectoryBody::Message(MSG_DIRECTORY_FAILED.to_string()),
                options: Vec::new(),
            },
            DirectoryState::Loaded(directory) => {
                let cards = directory
                    .iter()
                    .map(|activity| ActivityCard {
                        name: activity.name.clone(),
                        description: activity.description.clone(),
                        schedule: activity.schedule.clone(),
                        spots_left: activity.spots_left(),
                        over_capacity: activity.is_over_capacity(),
                        participants: activity
                            .participants
                            .iter()
                            .map(|email| ParticipantRow {
                                email: email.clone(),
                                activity: activity.name.clone(),
                                removable,
                            })
                            .collect(),
                    })
                    .collect();
                Self {
                    body: DirectoryBody::Cards(cards),
                    options: directory.names(),
                }
            }
        }
    }

    /// Placeholder with an empty value, then one option per activity
    pub fn select_options(&self) -> Vec<SelectOption> {
        let placeholder = SelectOption {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        };
        std::iter::once(placeholder)
            .chain(self.options.iter().map(|name| SelectOption {
                value: name.clone(),
                label: name.clone(),
            }))
            .collect()
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.body {
            DirectoryBody::Cards(cards) => cards,
            DirectoryBody::Message(_) => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationView {
    pub text: String,
    pub css_class: &'static str,
    pub visible: bool,
}

impl NotificationView {
    pub fn build<S: KeyValueStore>(state: &AppState<S>) -> Self {
        match state.notification.current() {
            Some(notification) => Self {
                text: notification.text.clone(),
                css_class: notification.kind.css_class(),
                visible: state.notification.visible().is_some(),
            },
            None => Self {
                text: String::new(),
                css_class: "",
                visible: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, ActivityDirectory, Notification};
    use crate::utils::constants::{AUTH_TOKEN_KEY, CURRENT_USER_KEY};
    use crate::utils::storage::MemoryStore;

    fn directory_with(counts: &[usize]) -> ActivityDirectory {
        counts
            .iter()
            .enumerate()
            .map(|(i, &n)| Activity {
                name: format!("Activity {}", i),
                description: String::new(),
                schedule: String::new(),
                max_participants: 3,
                participants: (0..n).map(|p| format!("s{}@x.com", p)).collect(),
            })
            .collect()
    }

    #[test]
    fn removal_buttons_iff_logged_in() {
        for logged_in in [false, true] {
            for count in 0..6 {
                let port = if logged_in {
                    MemoryStore::with_items(&[(AUTH_TOKEN_KEY, "t"), (CURRENT_USER_KEY, "u")])
                } else {
                    MemoryStore::new()
                };
                let mut state = AppState::new(port);
                state.directory.replace(directory_with(&[count, 0, count]));

                let view = DirectoryView::build(&state);
                let rows: Vec<&ParticipantRow> = view.cards().iter().flat_map(|c| c.participants.iter()).collect();
                assert_eq!(rows.len(), count * 2);
                assert!(rows.iter().all(|r| r.removable == logged_in));
            }
        }
    }

    #[test]
    fn failed_directory_shows_single_message_and_no_options() {
        let mut state = AppState::new(MemoryStore::new());
        state.directory.fail();
        let view = DirectoryView::build(&state);
        assert_eq!(view.body, DirectoryBody::Message(MSG_DIRECTORY_FAILED.to_string()));
        assert!(view.options.is_empty());
        assert!(view.cards().is_empty());
    }

    #[test]
    fn select_starts_with_placeholder_then_one_option_per_activity() {
        let mut state = AppState::new(MemoryStore::new());
        state.directory.replace(directory_with(&[0, 1, 2]));
        let options = DirectoryView::build(&state).select_options();

        assert_eq!(options.len(), 4);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, SELECT_PLACEHOLDER);
        let values: Vec<&str> = options[1..].iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Activity 0", "Activity 1", "Activity 2"]);
        assert!(options[1..].iter().all(|o| o.value == o.label));

        state.directory.fail();
        let options = DirectoryView::build(&state).select_options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "");
    }

    #[test]
    fn over_capacity_card_keeps_negative_spots() {
        let mut state = AppState::new(MemoryStore::new());
        state.directory.replace(directory_with(&[5]));
        let view = DirectoryView::build(&state);
        let card = &view.cards()[0];
        assert_eq!(card.spots_left, -2);
        assert!(card.over_capacity);
    }

    #[test]
    fn auth_view_mirrors_session() {
        let mut state = AppState::new(MemoryStore::new());
        let out = AuthView::build(&state);
        assert!(out.login_button_visible && out.auth_required_visible);
        assert!(!out.signup_form_visible && !out.user_info_visible);

        state.session.set("t", "ms.jones").unwrap();
        let inside = AuthView::build(&state);
        assert!(inside.signup_form_visible && inside.user_info_visible);
        assert!(!inside.login_button_visible && !inside.auth_required_visible);
        assert_eq!(inside.logged_user.as_deref(), Some("ms.jones"));
    }

    #[test]
    fn notification_view_tracks_visibility() {
        let mut state = AppState::new(MemoryStore::new());
        assert!(!NotificationView::build(&state).visible);
        let generation = state.notification.show(Notification::success("Welcome"));
        let shown = NotificationView::build(&state);
        assert!(shown.visible);
        assert_eq!(shown.css_class, "success");
        state.notification.hide(generation);
        assert!(!NotificationView::build(&state).visible);
    }
}
