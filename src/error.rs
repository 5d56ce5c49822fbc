use std::fmt;
use supabase_auth::AuthError;

/// Central error types for the Notebooks app
#[derive(Debug)]
pub enum AppError {
    /// Config file or environment is unusable
    Config(String),
    /// Auth service could not be set up
    Auth(AuthError),
    /// A path that maps to no screen
    UnknownRoute(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Auth(e) => write!(f, "Auth error: {}", e),
            AppError::UnknownRoute(path) => write!(f, "Unknown route: {}", path),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::ConfigError(msg) => AppError::Config(msg),
            other => AppError::Auth(other),
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(msg) => msg.clone(),
            AppError::Auth(_) => "Could not start the sign-in service.".to_string(),
            AppError::UnknownRoute(path) => format!("{} was not found.", path),
        }
    }
}
