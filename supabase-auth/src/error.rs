use crate::models::AuthMode;
use std::fmt;

/// Why a sign-up or sign-in was rejected.
///
/// The provider only hands back free text, so the adapter classifies it once
/// here and everything above matches on this enum. The substrings are the
/// provider's current wording; if it changes, the message falls through to
/// `Other` and is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailureReason {
    AlreadyRegistered,
    WeakPassword,
    InvalidCredentials,
    EmailNotConfirmed,
    Other(String),
}

impl AuthFailureReason {
    pub fn classify(mode: AuthMode, raw_message: &str) -> Self {
        match mode {
            AuthMode::SignUp => {
                if raw_message.contains("User already registered") {
                    AuthFailureReason::AlreadyRegistered
                } else if raw_message.contains("Password should be at least") {
                    AuthFailureReason::WeakPassword
                } else {
                    AuthFailureReason::Other(raw_message.to_string())
                }
            }
            AuthMode::SignIn => {
                if raw_message.contains("Invalid login credentials") {
                    AuthFailureReason::InvalidCredentials
                } else if raw_message.contains("Email not confirmed") {
                    AuthFailureReason::EmailNotConfirmed
                } else {
                    AuthFailureReason::Other(raw_message.to_string())
                }
            }
        }
    }

    /// Text shown to the user in the error toast
    pub fn user_message(&self) -> String {
        match self {
            AuthFailureReason::AlreadyRegistered => {
                "An account with this email already exists. Please sign in instead.".to_string()
            }
            AuthFailureReason::WeakPassword => {
                "Password should be at least 6 characters long.".to_string()
            }
            AuthFailureReason::InvalidCredentials => {
                "Invalid email or password. Please check your credentials and try again, or create a new account."
                    .to_string()
            }
            AuthFailureReason::EmailNotConfirmed => {
                "Please check your email and click the confirmation link before signing in."
                    .to_string()
            }
            AuthFailureReason::Other(msg) => msg.clone(),
        }
    }

    /// True for the failures the user can act on directly
    pub fn is_expected(&self) -> bool {
        !matches!(self, AuthFailureReason::Other(_))
    }
}

impl fmt::Display for AuthFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for AuthFailureReason {}

/// Transport and configuration errors of the auth adapter
#[derive(Debug)]
pub enum AuthError {
    NetworkError(String),
    JsonError(String),
    /// Non-success status; `message` is the provider's own text
    ServerError { status: u16, message: String },
    ConfigError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AuthError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            AuthError::ServerError { message, .. } => write!(f, "{}", message),
            AuthError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::NetworkError(e.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        AuthError::JsonError(e.to_string())
    }
}

impl AuthError {
    /// Provider messages are classified; anything else is passed through
    pub fn into_failure(self, mode: AuthMode) -> AuthFailureReason {
        match self {
            AuthError::ServerError { message, .. } => AuthFailureReason::classify(mode, &message),
            other => AuthFailureReason::Other(other.to_string()),
        }
    }
}
