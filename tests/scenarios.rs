// End-to-end flows through `dispatch`, with a canned backend standing in for HTTP.

use activities_signup_pwa::error::ClientError;
use activities_signup_pwa::models::NotificationKind;
use activities_signup_pwa::services::{ApiRequest, Method, RawResponse};
use activities_signup_pwa::state::{AppState, RequestTag};
use activities_signup_pwa::utils::{KeyValueStore, MemoryStore, AUTH_TOKEN_KEY, CURRENT_USER_KEY};
use activities_signup_pwa::viewmodels::{
    dispatch, AuthView, Command, DirectoryView, Effect, NotificationView, RenderScope,
};

const CHESS_ONLY: &str = r#"{
    "Chess Club": {
        "description": "Learn strategies",
        "schedule": "Fridays 3:30 PM",
        "max_participants": 12,
        "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
    }
}"#;

const CHESS_AFTER_REMOVAL: &str = r#"{
    "Chess Club": {
        "description": "Learn strategies",
        "schedule": "Fridays 3:30 PM",
        "max_participants": 12,
        "participants": ["daniel@mergington.edu"]
    }
}"#;

struct Harness {
    state: AppState<MemoryStore>,
    effects: Vec<Effect>,
}

impl Harness {
    fn new(store: MemoryStore) -> Self {
        Self {
            state: AppState::new(store),
            effects: Vec::new(),
        }
    }

    fn run(&mut self, command: Command) -> &[Effect] {
        self.effects = dispatch(&mut self.state, command);
        &self.effects
    }

    fn sent(&self) -> Vec<(RequestTag, ApiRequest)> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Send { tag, request } => Some((*tag, request.clone())),
                _ => None,
            })
            .collect()
    }

    fn only_request(&self) -> (RequestTag, ApiRequest) {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one request, got {:?}", self.effects);
        sent.into_iter().next().unwrap()
    }

    fn reply(&mut self, status: u16, body: &str) -> &[Effect] {
        let (tag, request) = self.only_request();
        self.run(Command::Completed {
            tag,
            action: request.action,
            outcome: Ok(RawResponse::new(status, body)),
        })
    }

    fn notification(&self) -> NotificationView {
        NotificationView::build(&self.state)
    }
}

fn logged_in_harness() -> Harness {
    Harness::new(MemoryStore::with_items(&[
        (AUTH_TOKEN_KEY, "abc123"),
        (CURRENT_USER_KEY, "ms.jones"),
    ]))
}

#[test]
fn login_stores_session_and_announces_welcome() {
    let mut app = Harness::new(MemoryStore::new());
    app.run(Command::OpenLogin);
    app.run(Command::Login {
        username: "ms.jones".to_string(),
        password: "pw1".to_string(),
    });

    let (_, request) = app.only_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/login");
    assert_eq!(request.form_body().as_deref(), Some("username=ms.jones&password=pw1"));

    let effects = app.reply(200, r#"{"token":"abc123","message":"Welcome"}"#).to_vec();
    assert!(effects.contains(&Effect::ResetLoginForm));
    assert!(effects.contains(&Effect::Render(RenderScope::Auth)));
    assert!(effects.contains(&Effect::Render(RenderScope::Directory)));

    let port = app.state.session.port();
    assert_eq!(port.get_item(AUTH_TOKEN_KEY).as_deref(), Some("abc123"));
    assert_eq!(port.get_item(CURRENT_USER_KEY).as_deref(), Some("ms.jones"));

    let notification = app.notification();
    assert_eq!(notification.text, "Welcome");
    assert_eq!(notification.css_class, NotificationKind::Success.css_class());
    assert!(notification.visible);

    let auth = AuthView::build(&app.state);
    assert!(!auth.login_button_visible);
    assert!(auth.user_info_visible);
    assert_eq!(auth.logged_user.as_deref(), Some("ms.jones"));
    assert!(auth.signup_form_visible);
    assert!(!auth.login_panel_open);
}

#[test]
fn startup_loads_directory_and_renders_cards() {
    let mut app = logged_in_harness();
    app.run(Command::Startup);
    let (_, request) = app.only_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url(""), "/activities");

    app.reply(200, CHESS_ONLY);
    let view = DirectoryView::build(&app.state);
    assert_eq!(view.options, vec!["Chess Club".to_string()]);

    let card = &view.cards()[0];
    assert_eq!(card.name, "Chess Club");
    assert_eq!(card.spots_left, 10);
    assert_eq!(card.participants.len(), 2);
    assert!(card.participants.iter().all(|row| row.removable));
}

#[test]
fn single_participant_card_shows_remaining_spots() {
    let mut app = Harness::new(MemoryStore::new());
    app.run(Command::Refresh);
    app.reply(
        200,
        r#"{"Chess Club":{"description":"d","schedule":"s","max_participants":5,"participants":["a@x.edu"]}}"#,
    );

    let view = DirectoryView::build(&app.state);
    let card = &view.cards()[0];
    assert_eq!(card.spots_left, 4);
    assert_eq!(card.participants.len(), 1);
    assert!(!card.participants[0].removable);
}

#[test]
fn signup_while_logged_out_sends_nothing() {
    let mut app = Harness::new(MemoryStore::new());
    app.run(Command::Signup {
        email: "a@x.edu".to_string(),
        activity: "Chess Club".to_string(),
    });

    assert!(app.sent().is_empty());
    let notification = app.notification();
    assert_eq!(notification.text, "Please login as a teacher to register students.");
    assert_eq!(notification.css_class, NotificationKind::Error.css_class());
}

#[test]
fn unregister_notifies_and_refreshes_once() {
    let mut app = logged_in_harness();
    app.run(Command::Refresh);
    app.reply(200, CHESS_ONLY);

    app.run(Command::Unregister {
        email: "michael@mergington.edu".to_string(),
        activity: "Chess Club".to_string(),
    });
    let (_, request) = app.only_request();
    assert_eq!(request.method, Method::Delete);
    assert_eq!(
        request.url(""),
        "/activities/Chess%20Club/unregister?email=michael%40mergington.edu"
    );
    assert_eq!(request.authorization_header().as_deref(), Some("Bearer abc123"));

    app.reply(200, r#"{"message":"Removed"}"#);
    assert_eq!(app.notification().text, "Removed");
    let refreshes: Vec<_> = app
        .sent()
        .into_iter()
        .filter(|(_, request)| request.path == "/activities")
        .collect();
    assert_eq!(refreshes.len(), 1);

    app.reply(200, CHESS_AFTER_REMOVAL);
    let view = DirectoryView::build(&app.state);
    assert_eq!(view.cards()[0].participants.len(), 1);
    assert_eq!(view.cards()[0].spots_left, 11);
}

#[test]
fn signup_rejection_shows_server_detail() {
    let mut app = logged_in_harness();
    app.run(Command::Signup {
        email: "daniel@mergington.edu".to_string(),
        activity: "Chess Club".to_string(),
    });
    let effects = app.reply(400, r#"{"detail":"Student is already signed up"}"#).to_vec();

    assert!(effects.iter().all(|effect| effect.request().is_none()));
    assert!(!effects.contains(&Effect::ResetSignupForm));
    assert_eq!(app.notification().text, "Student is already signed up");
}

#[test]
fn logout_twice_is_harmless() {
    let mut app = logged_in_harness();
    app.run(Command::ToggleUserMenu);
    assert!(app.state.menus.user_menu_open);

    app.run(Command::Logout);
    app.run(Command::Logout);

    assert!(!app.state.session.get().is_active());
    assert!(app.state.session.port().is_empty());
    assert!(!app.state.menus.user_menu_open);
    assert_eq!(app.notification().text, "Logged out successfully");
    assert_eq!(app.notification().css_class, NotificationKind::Info.css_class());

    let auth = AuthView::build(&app.state);
    assert!(auth.login_button_visible);
    assert!(auth.auth_required_visible);
    assert!(!auth.signup_form_visible);
}

#[test]
fn options_match_directory_keys_in_order() {
    let mut app = Harness::new(MemoryStore::new());
    app.run(Command::Refresh);
    app.reply(
        200,
        r#"{
            "Programming Class": {"description":"","schedule":"","max_participants":20,"participants":[]},
            "Chess Club": {"description":"","schedule":"","max_participants":12,"participants":[]},
            "Gym Class": {"description":"","schedule":"","max_participants":30,"participants":[]}
        }"#,
    );

    let view = DirectoryView::build(&app.state);
    let names: Vec<_> = view.cards().iter().map(|card| card.name.clone()).collect();
    assert_eq!(view.options, vec!["Programming Class", "Chess Club", "Gym Class"]);
    assert_eq!(view.options, names);
}

#[test]
fn failed_load_then_network_error_keep_failed_message() {
    let mut app = Harness::new(MemoryStore::new());
    app.run(Command::Refresh);
    app.reply(500, "Internal Server Error");
    let view = DirectoryView::build(&app.state);
    assert!(view.cards().is_empty());
    assert!(view.options.is_empty());

    app.run(Command::Refresh);
    let (tag, request) = app.only_request();
    app.run(Command::Completed {
        tag,
        action: request.action,
        outcome: Err(ClientError::Network("offline".to_string())),
    });
    assert!(DirectoryView::build(&app.state).cards().is_empty());
}

#[test]
fn newer_message_is_not_hidden_by_older_timer() {
    let mut app = Harness::new(MemoryStore::new());
    let first = app
        .run(Command::Signup {
            email: "a@x.edu".to_string(),
            activity: "Chess Club".to_string(),
        })
        .to_vec();
    let first_generation = first
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleHide { generation, .. } => Some(*generation),
            _ => None,
        })
        .unwrap();

    app.run(Command::Logout);
    app.run(Command::HideNotification {
        generation: first_generation,
    });
    assert!(app.notification().visible);
    assert_eq!(app.notification().text, "Logged out successfully");
}
