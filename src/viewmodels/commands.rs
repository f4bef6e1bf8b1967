// ============================================================================
// COMMANDS & EFFECTS - Inputs to the handlers and the work they request
// ============================================================================

use crate::error::ClientError;
use crate::services::requests::{ApiAction, ApiRequest};
use crate::services::responses::RawResponse;
use crate::state::sequence::RequestTag;

/// One per user action, plus timer and network completions
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Startup,
    Login { username: String, password: String },
    Logout,
    Refresh,
    Signup { email: String, activity: String },
    Unregister { email: String, activity: String },
    ToggleUserMenu,
    OpenLogin,
    CancelLogin,
    /// Click anywhere outside the user icon and its dropdown
    OutsideClick,
    HideNotification { generation: u64 },
    Completed {
        tag: RequestTag,
        action: ApiAction,
        outcome: Result<RawResponse, ClientError>,
    },
}

/// Parts of the page that are painted independently
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderScope {
    /// Header, menus, login panel, signup form visibility
    Auth,
    /// Activity cards and the activity select options
    Directory,
    Notification,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Send { tag: RequestTag, request: ApiRequest },
    ScheduleHide { generation: u64, after_ms: u32 },
    Render(RenderScope),
    ResetLoginForm,
    ResetSignupForm,
}

impl Effect {
    pub fn request(&self) -> Option<&ApiRequest> {
        match self {
            Effect::Send { request, .. } => Some(request),
            _ => None,
        }
    }
}

impl Command {
    /// Unregister command carried by a participant row's delete button.
    /// None unless both data attributes are present and non-empty.
    pub fn from_delete_button(activity: Option<String>, email: Option<String>) -> Option<Command> {
        let activity = activity.filter(|a| !a.is_empty())?;
        let email = email.filter(|e| !e.is_empty())?;
        Some(Command::Unregister { email, activity })
    }
}
