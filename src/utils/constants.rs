// ============================================================================
// CONSTANTS - Storage keys, user-facing messages, page element ids
// ============================================================================

/// localStorage keys. Written together, cleared together.
pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const CURRENT_USER_KEY: &str = "currentUser";

// User-facing messages
pub const MSG_LOGIN_FAILED: &str = "Login failed";
pub const MSG_LOGIN_RETRY: &str = "Login failed. Please try again.";
pub const MSG_LOGGED_OUT: &str = "Logged out successfully";
pub const MSG_SESSION_NOT_SAVED: &str = "Could not save your session. Please try again.";
pub const MSG_SIGNUP_NEEDS_LOGIN: &str = "Please login as a teacher to register students.";
pub const MSG_UNREGISTER_NEEDS_LOGIN: &str = "Please login as a teacher to unregister students.";
pub const MSG_GENERIC_ERROR: &str = "An error occurred";
pub const MSG_SIGNUP_RETRY: &str = "Failed to register student. Please try again.";
pub const MSG_UNREGISTER_RETRY: &str = "Failed to unregister. Please try again.";
pub const MSG_DIRECTORY_FAILED: &str = "Failed to load activities. Please try again later.";
pub const MSG_DIRECTORY_LOADING: &str = "Loading activities...";
pub const MSG_NO_PARTICIPANTS: &str = "No participants yet";

// Page element ids
pub const ID_ACTIVITIES_LIST: &str = "activities-list";
pub const ID_ACTIVITY_SELECT: &str = "activity";
pub const ID_SIGNUP_FORM: &str = "signup-form";
pub const ID_EMAIL_INPUT: &str = "email";
pub const ID_MESSAGE: &str = "message";
pub const ID_LOGIN_FORM: &str = "login-form";
pub const ID_USERNAME_INPUT: &str = "username";
pub const ID_PASSWORD_INPUT: &str = "password";
pub const ID_LOGIN_SECTION: &str = "login-section";
pub const ID_USER_ICON: &str = "user-icon";
pub const ID_USER_DROPDOWN: &str = "user-dropdown";
pub const ID_LOGIN_BUTTON: &str = "login-btn";
pub const ID_LOGOUT_BUTTON: &str = "logout-btn";
pub const ID_CANCEL_LOGIN: &str = "cancel-login";
pub const ID_USER_INFO: &str = "user-info";
pub const ID_LOGGED_USER: &str = "logged-user";
pub const ID_AUTH_REQUIRED: &str = "auth-required-message";

pub const HIDDEN_CLASS: &str = "hidden";

// Participant row delete button (one delegated listener on the list)
pub const DELETE_BUTTON_CLASS: &str = "delete-btn";
pub const ATTR_ACTIVITY: &str = "data-activity";
pub const ATTR_EMAIL: &str = "data-email";

/// First entry of the activity select; not an activity
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
