//! # Supabase Auth
//!
//! Email/password sign-in and sign-up against a Supabase project.
//!
//! This crate provides:
//! - A REST adapter for the auth API (`signup` and the password grant)
//! - Typed failure reasons instead of provider free text
//! - An observable auth state with explicit subscriptions
//! - A Dioxus form component that switches between sign in and sign up
//!
//! ## Separation of Concerns
//!
//! This crate focuses solely on submitting credentials. It does **not**:
//! - Persist or refresh sessions
//! - Show toasts (the form hands [`Notification`]s to the application)
//! - Own routing (the form hands [`NavigationRequest`]s to the application)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use supabase_auth::{AuthForm, AuthStateHandle, SupabaseAuthService, SupabaseConfig};
//!
//! let config = SupabaseConfig::from_toml_str(include_str!("supabase.toml"))?.with_env_overrides();
//! let service = SupabaseAuthService::new(config, AuthStateHandle::new(false))?;
//!
//! // UI component usage
//! use_context_provider(|| service.clone());
//! AuthForm {
//!     on_notify: move |notification| {
//!         // Show a toast
//!     },
//!     on_navigate: move |request| {
//!         // Go to request.path, replacing the current entry if request.replace
//!     },
//! }
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod redirect;
pub mod service;

pub use component::{AuthForm, AuthFormProps};
pub use config::SupabaseConfig;
pub use error::{AuthError, AuthFailureReason};
pub use form::{
    submit, AuthFormLabels, FormState, Notification, NotificationVariant, Notifier,
    SubmitOutcome, SubmittingFlag, SubmittingGuard,
};
pub use models::{AuthMode, AuthSuccess, AuthUser, Credentials};
pub use redirect::{
    watch_auth_state, AuthRedirect, AuthStateHandle, AuthSubscription, NavigationRequest,
    Navigator, HOME_PATH,
};
pub use service::{CredentialProvider, SupabaseAuthService};
