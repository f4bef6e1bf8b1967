// ============================================================================
// API REQUESTS - Description of every call the client makes (no I/O here)
// ============================================================================

use urlencoding::encode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// What a request is for; comes back with the completion
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiAction {
    Login { username: String },
    ListActivities,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub action: ApiAction,
    pub method: Method,
    /// Already percent-encoded path
    pub path: String,
    pub query: Vec<(String, String)>,
    pub bearer: Option<String>,
    /// `application/x-www-form-urlencoded` body fields
    pub form: Option<Vec<(String, String)>>,
}

impl ApiRequest {
    /// `POST /login` with URL-encoded credentials
    pub fn login(username: &str, password: &str) -> Self {
        Self {
            action: ApiAction::Login { username: username.to_string() },
            method: Method::Post,
            path: "/login".to_string(),
            query: Vec::new(),
            bearer: None,
            form: Some(vec![
                ("username".to_string(), username.to_string()),
                ("password".to_string(), password.to_string()),
            ]),
        }
    }

    /// `GET /activities`
    pub fn list_activities() -> Self {
        Self {
            action: ApiAction::ListActivities,
            method: Method::Get,
            path: "/activities".to_string(),
            query: Vec::new(),
            bearer: None,
            form: None,
        }
    }

    /// `POST /activities/{name}/signup?email=...`
    pub fn signup(activity: &str, email: &str, token: &str) -> Self {
        Self {
            action: ApiAction::Signup { activity: activity.to_string(), email: email.to_string() },
            method: Method::Post,
            path: format!("/activities/{}/signup", encode(activity)),
            query: vec![("email".to_string(), email.to_string())],
            bearer: Some(token.to_string()),
            form: None,
        }
    }

    /// `DELETE /activities/{name}/unregister?email=...`
    pub fn unregister(activity: &str, email: &str, token: &str) -> Self {
        Self {
            action: ApiAction::Unregister { activity: activity.to_string(), email: email.to_string() },
            method: Method::Delete,
            path: format!("/activities/{}/unregister", encode(activity)),
            query: vec![("email".to_string(), email.to_string())],
            bearer: Some(token.to_string()),
            form: None,
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&encode_pairs(&self.query));
        }
        url
    }

    pub fn form_body(&self) -> Option<String> {
        self.form.as_ref().map(|fields| encode_pairs(fields))
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {}", token))
    }
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
