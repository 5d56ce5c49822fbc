use crate::config::SupabaseConfig;
use crate::error::{AuthError, AuthFailureReason};
use crate::models::{
    AuthMode, AuthSuccess, AuthUser, Credentials, ProviderErrorBody, SessionResponse,
    SignUpResponse,
};
use crate::redirect::AuthStateHandle;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};

/// Credential submission as seen by the form.
///
/// Implementations classify provider errors themselves; callers only ever see
/// an [`AuthFailureReason`].
#[allow(async_fn_in_trait)]
pub trait CredentialProvider {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthSuccess, AuthFailureReason>;

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthSuccess, AuthFailureReason>;

    async fn submit(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthSuccess, AuthFailureReason> {
        match mode {
            AuthMode::SignUp => self.sign_up(credentials).await,
            AuthMode::SignIn => self.sign_in_with_password(credentials).await,
        }
    }
}

/// Supabase auth (GoTrue) REST client
#[derive(Clone)]
pub struct SupabaseAuthService {
    config: SupabaseConfig,
    client: reqwest::Client,
    auth_state: AuthStateHandle,
    current_user: Arc<Mutex<Option<AuthUser>>>,
}

impl SupabaseAuthService {
    /// Create a new authentication service. The config is validated here.
    pub fn new(config: SupabaseConfig, auth_state: AuthStateHandle) -> Result<Self, AuthError> {
        let config = config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent(concat!("supabase-auth/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AuthError::NetworkError(format!("Client build failed: {}", e)))?;

        Ok(Self {
            config,
            client,
            auth_state,
            current_user: Arc::new(Mutex::new(None)),
        })
    }

    pub fn auth_state(&self) -> &AuthStateHandle {
        &self.auth_state
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.current_user
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Forget the in-memory session. The access token is not revoked remotely.
    pub fn sign_out(&self) {
        *self
            .current_user
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        if self.auth_state.set(false) {
            log::info!("Signed out");
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    fn record_session(&self, success: &AuthSuccess) {
        if !success.has_session() {
            log::info!("Account created, waiting for email confirmation");
            return;
        }
        *self
            .current_user
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(success.user.clone());
        self.auth_state.set(true);
    }

    async fn post_credentials<T: DeserializeOwned>(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<T, AuthError> {
        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::NetworkError(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AuthError::ServerError {
                status: status.as_u16(),
                message: provider_message(status.as_u16(), &body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl CredentialProvider for SupabaseAuthService {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthSuccess, AuthFailureReason> {
        let url = self.endpoint("signup");
        match self.post_credentials::<SignUpResponse>(&url, credentials).await {
            Ok(response) => {
                let success = AuthSuccess::from(response);
                self.record_session(&success);
                Ok(success)
            }
            Err(e) => {
                log::error!("Sign up error: {}", e);
                Err(e.into_failure(AuthMode::SignUp))
            }
        }
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthSuccess, AuthFailureReason> {
        let url = self.endpoint("token?grant_type=password");
        match self.post_credentials::<SessionResponse>(&url, credentials).await {
            Ok(session) => {
                let success = AuthSuccess::from(session);
                self.record_session(&success);
                Ok(success)
            }
            Err(e) => {
                log::error!("Sign in error: {}", e);
                Err(e.into_failure(AuthMode::SignIn))
            }
        }
    }
}

/// Extract the provider's text from an error body
fn provider_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(ProviderErrorBody::into_message)
        .unwrap_or_else(|| format!("Server returned status: {}", status))
}
