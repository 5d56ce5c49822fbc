use serde::{Deserialize, Serialize};

/// Which of the two submission intents the form is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn is_sign_up(self) -> bool {
        matches!(self, AuthMode::SignUp)
    }
}

/// Email/password pair sent to the provider
#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// User object as returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session returned by a password grant (and by sign-up when no
/// email confirmation is required)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// Successful result of a sign-up or sign-in
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSuccess {
    pub user: AuthUser,
    /// `None` when the account still has to be confirmed by email
    pub access_token: Option<String>,
}

impl AuthSuccess {
    pub fn has_session(&self) -> bool {
        self.access_token.is_some()
    }
}

impl From<SessionResponse> for AuthSuccess {
    fn from(session: SessionResponse) -> Self {
        Self {
            user: session.user,
            access_token: Some(session.access_token),
        }
    }
}

/// Sign-up answers with a session or with the bare user object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(SessionResponse),
    User(AuthUser),
}

impl From<SignUpResponse> for AuthSuccess {
    fn from(response: SignUpResponse) -> Self {
        match response {
            SignUpResponse::Session(session) => session.into(),
            SignUpResponse::User(user) => Self {
                user,
                access_token: None,
            },
        }
    }
}

/// Error body of the auth API. Depending on endpoint and version the
/// message lives in a different field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ProviderErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_mode() {
        assert_eq!(AuthMode::SignIn.toggle(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignIn.toggle().toggle(), AuthMode::SignIn);
        assert_eq!(AuthMode::default(), AuthMode::SignIn);
    }

    #[test]
    fn test_sign_up_without_session() {
        let json = r#"{"id":"7f1c","email":"a@example.com","aud":"authenticated"}"#;
        let response: SignUpResponse = serde_json::from_str(json).unwrap();
        let success = AuthSuccess::from(response);
        assert!(!success.has_session());
        assert_eq!(success.user.email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn test_sign_up_with_session() {
        let json = r#"{
            "access_token": "jwt",
            "refresh_token": "r1",
            "token_type": "bearer",
            "user": {"id": "7f1c", "email": "a@example.com"}
        }"#;
        let response: SignUpResponse = serde_json::from_str(json).unwrap();
        let success = AuthSuccess::from(response);
        assert_eq!(success.access_token.as_deref(), Some("jwt"));
        assert_eq!(success.user.id, "7f1c");
    }

    #[test]
    fn test_error_body_field_precedence() {
        let json = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        let body: ProviderErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Invalid login credentials"));

        let body: ProviderErrorBody =
            serde_json::from_str(r#"{"code":422,"msg":"User already registered"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("User already registered"));

        assert_eq!(ProviderErrorBody::default().into_message(), None);
    }
}
