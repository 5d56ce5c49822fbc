use crate::error::AuthFailureReason;
use crate::models::{AuthMode, Credentials};
use crate::service::CredentialProvider;
use dioxus::prelude::*;

/// Same floor the provider enforces by default
pub const MIN_PASSWORD_LEN: usize = 6;

/// Local state of the sign-in / sign-up form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub submitting: bool,
    pub mode: AuthMode,
}

impl FormState {
    /// Switch between sign-in and sign-up. Field values are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    /// What the browser checks before it lets the form submit: both fields
    /// required, password at least [`MIN_PASSWORD_LEN`] characters.
    pub fn is_submittable(&self) -> bool {
        !self.submitting
            && !self.email.trim().is_empty()
            && self.password.chars().count() >= MIN_PASSWORD_LEN
    }
}

/// Anything that can hold the "submission in flight" bit
pub trait SubmittingFlag {
    fn set_submitting(&mut self, submitting: bool);
}

impl SubmittingFlag for Signal<FormState> {
    fn set_submitting(&mut self, submitting: bool) {
        // The signal is gone if the form unmounted mid-request
        if let Ok(mut state) = self.try_write() {
            state.submitting = submitting;
        }
    }
}

/// Holds the flag up for as long as it lives. Dropping it (normal return,
/// early return, panic or a cancelled future) lowers the flag again.
pub struct SubmittingGuard<F: SubmittingFlag> {
    flag: F,
}

impl<F: SubmittingFlag> SubmittingGuard<F> {
    pub fn acquire(mut flag: F) -> Self {
        flag.set_submitting(true);
        Self { flag }
    }

    /// Raise the flag for a new submission of `state`. `None` while one is
    /// already in flight or when the fields fail the browser checks.
    pub fn try_acquire(state: &FormState, flag: F) -> Option<Self> {
        if state.is_submittable() {
            Some(Self::acquire(flag))
        } else {
            None
        }
    }
}

impl<F: SubmittingFlag> Drop for SubmittingGuard<F> {
    fn drop(&mut self) {
        self.flag.set_submitting(false);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A toast the form asks the host application to show
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(mode: AuthMode) -> Self {
        let (title, description) = match mode {
            AuthMode::SignUp => (
                "Account created!",
                "You have successfully created an account and are now signed in.",
            ),
            AuthMode::SignIn => ("Welcome back!", "You have successfully signed in."),
        };
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn failure(mode: AuthMode, reason: &AuthFailureReason) -> Self {
        let title = match mode {
            AuthMode::SignUp => "Sign Up Error",
            AuthMode::SignIn => "Sign In Error",
        };
        Self {
            title: title.to_string(),
            description: reason.user_message(),
            variant: NotificationVariant::Destructive,
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for EventHandler<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.call(notification);
    }
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    SignedIn,
    SignedUp,
    Failed(AuthFailureReason),
}

/// Run one submission: call the provider for `mode`, emit exactly one
/// notification, then lower the flag by dropping `guard`.
///
/// The guard is taken by the caller before the future is spawned, so the flag
/// is already up when this is first polled.
///
/// Navigation is not triggered here; a successful sign-in flips the auth
/// state and the redirect watcher takes it from there.
pub async fn submit<P, N, F>(
    provider: &P,
    notifier: &mut N,
    guard: SubmittingGuard<F>,
    mode: AuthMode,
    credentials: Credentials,
) -> SubmitOutcome
where
    P: CredentialProvider,
    N: Notifier,
    F: SubmittingFlag,
{
    let _guard = guard;

    match mode {
        AuthMode::SignUp => log::info!("Attempting sign up for: {}", credentials.email),
        AuthMode::SignIn => log::info!("Attempting sign in for: {}", credentials.email),
    }

    match provider.submit(mode, &credentials).await {
        Ok(success) => {
            log::info!(
                "{} successful: {}",
                if mode.is_sign_up() { "Sign up" } else { "Sign in" },
                success.user.email.as_deref().unwrap_or(&success.user.id)
            );
            notifier.notify(Notification::success(mode));
            match mode {
                AuthMode::SignUp => SubmitOutcome::SignedUp,
                AuthMode::SignIn => SubmitOutcome::SignedIn,
            }
        }
        Err(reason) => {
            if reason.is_expected() {
                log::warn!("Auth form rejected: {:?}", reason);
            } else {
                log::error!("Auth form error: {:?}", reason);
            }
            notifier.notify(Notification::failure(mode, &reason));
            SubmitOutcome::Failed(reason)
        }
    }
}

/// Texts of the form, per mode
#[derive(Clone, PartialEq)]
pub struct AuthFormLabels {
    pub sign_in_title: String,
    pub sign_up_title: String,
    pub sign_in_description: String,
    pub sign_up_description: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub password_label: String,
    pub sign_in_password_placeholder: String,
    pub sign_up_password_placeholder: String,
    pub sign_in_submit: String,
    pub sign_up_submit: String,
    pub sign_in_busy: String,
    pub sign_up_busy: String,
    pub to_sign_up: String,
    pub to_sign_in: String,
}

impl Default for AuthFormLabels {
    fn default() -> Self {
        Self {
            sign_in_title: "Sign In".to_string(),
            sign_up_title: "Create Account".to_string(),
            sign_in_description: "Enter your credentials to access your notebooks".to_string(),
            sign_up_description: "Create a new account to get started".to_string(),
            email_label: "Email".to_string(),
            email_placeholder: "Enter your email".to_string(),
            password_label: "Password".to_string(),
            sign_in_password_placeholder: "Enter your password".to_string(),
            sign_up_password_placeholder: "Create a password (min 6 characters)".to_string(),
            sign_in_submit: "Sign In".to_string(),
            sign_up_submit: "Create Account".to_string(),
            sign_in_busy: "Signing In...".to_string(),
            sign_up_busy: "Creating Account...".to_string(),
            to_sign_up: "Don't have an account? Create one".to_string(),
            to_sign_in: "Already have an account? Sign in".to_string(),
        }
    }
}

impl AuthFormLabels {
    pub fn title(&self, mode: AuthMode) -> &str {
        match mode {
            AuthMode::SignIn => &self.sign_in_title,
            AuthMode::SignUp => &self.sign_up_title,
        }
    }

    pub fn description(&self, mode: AuthMode) -> &str {
        match mode {
            AuthMode::SignIn => &self.sign_in_description,
            AuthMode::SignUp => &self.sign_up_description,
        }
    }

    pub fn password_placeholder(&self, mode: AuthMode) -> &str {
        match mode {
            AuthMode::SignIn => &self.sign_in_password_placeholder,
            AuthMode::SignUp => &self.sign_up_password_placeholder,
        }
    }

    pub fn submit_button(&self, mode: AuthMode, submitting: bool) -> &str {
        match (mode, submitting) {
            (AuthMode::SignIn, false) => &self.sign_in_submit,
            (AuthMode::SignUp, false) => &self.sign_up_submit,
            (AuthMode::SignIn, true) => &self.sign_in_busy,
            (AuthMode::SignUp, true) => &self.sign_up_busy,
        }
    }

    pub fn toggle(&self, mode: AuthMode) -> &str {
        match mode {
            AuthMode::SignIn => &self.to_sign_up,
            AuthMode::SignUp => &self.to_sign_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthSuccess, AuthUser};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Flag that remembers every write
    #[derive(Clone, Default)]
    struct TestFlag {
        value: Rc<Cell<bool>>,
        writes: Rc<RefCell<Vec<bool>>>,
    }

    impl SubmittingFlag for TestFlag {
        fn set_submitting(&mut self, submitting: bool) {
            self.value.set(submitting);
            self.writes.borrow_mut().push(submitting);
        }
    }

    #[derive(Default)]
    struct TestNotifier {
        notifications: Vec<Notification>,
    }

    impl Notifier for TestNotifier {
        fn notify(&mut self, notification: Notification) {
            self.notifications.push(notification);
        }
    }

    /// Answers every call with a fixed result and checks the flag is up
    /// while the call is in flight
    struct FakeProvider {
        result: Result<AuthSuccess, AuthFailureReason>,
        flag: Rc<Cell<bool>>,
        calls: RefCell<Vec<(AuthMode, Credentials)>>,
        panics: bool,
    }

    impl FakeProvider {
        fn new(result: Result<AuthSuccess, AuthFailureReason>, flag: &TestFlag) -> Self {
            Self {
                result,
                flag: flag.value.clone(),
                calls: RefCell::new(Vec::new()),
                panics: false,
            }
        }

        fn answer(
            &self,
            mode: AuthMode,
            credentials: &Credentials,
        ) -> Result<AuthSuccess, AuthFailureReason> {
            assert!(self.flag.get(), "flag must be up while the request runs");
            self.calls.borrow_mut().push((mode, credentials.clone()));
            if self.panics {
                panic!("provider blew up");
            }
            self.result.clone()
        }
    }

    impl CredentialProvider for FakeProvider {
        async fn sign_up(
            &self,
            credentials: &Credentials,
        ) -> Result<AuthSuccess, AuthFailureReason> {
            self.answer(AuthMode::SignUp, credentials)
        }

        async fn sign_in_with_password(
            &self,
            credentials: &Credentials,
        ) -> Result<AuthSuccess, AuthFailureReason> {
            self.answer(AuthMode::SignIn, credentials)
        }
    }

    fn success() -> Result<AuthSuccess, AuthFailureReason> {
        Ok(AuthSuccess {
            user: AuthUser {
                id: "u1".to_string(),
                email: Some("a@example.com".to_string()),
            },
            access_token: Some("jwt".to_string()),
        })
    }

    fn credentials() -> Credentials {
        Credentials::new("a@example.com", "secret123")
    }

    #[tokio::test]
    async fn test_sign_up_success() {
        let flag = TestFlag::default();
        let provider = FakeProvider::new(success(), &flag);
        let mut notifier = TestNotifier::default();

        let guard = SubmittingGuard::acquire(flag.clone());
        let outcome =
            submit(&provider, &mut notifier, guard, AuthMode::SignUp, credentials()).await;

        assert_eq!(outcome, SubmitOutcome::SignedUp);
        assert_eq!(notifier.notifications, vec![Notification::success(AuthMode::SignUp)]);
        assert_eq!(notifier.notifications[0].title, "Account created!");
        assert!(!flag.value.get());
        assert_eq!(*flag.writes.borrow(), vec![true, false]);
        assert_eq!(provider.calls.borrow()[0].0, AuthMode::SignUp);
    }

    #[tokio::test]
    async fn test_sign_in_success_uses_password_grant() {
        let flag = TestFlag::default();
        let provider = FakeProvider::new(success(), &flag);
        let mut notifier = TestNotifier::default();

        let guard = SubmittingGuard::acquire(flag.clone());
        let outcome =
            submit(&provider, &mut notifier, guard, AuthMode::SignIn, credentials()).await;

        assert_eq!(outcome, SubmitOutcome::SignedIn);
        assert_eq!(notifier.notifications.len(), 1);
        assert_eq!(notifier.notifications[0].title, "Welcome back!");
        assert_eq!(notifier.notifications[0].variant, NotificationVariant::Default);
        assert_eq!(provider.calls.borrow()[0], (AuthMode::SignIn, credentials()));
    }

    #[tokio::test]
    async fn test_failure_notification() {
        let flag = TestFlag::default();
        let provider = FakeProvider::new(Err(AuthFailureReason::AlreadyRegistered), &flag);
        let mut notifier = TestNotifier::default();

        let guard = SubmittingGuard::acquire(flag.clone());
        let outcome =
            submit(&provider, &mut notifier, guard, AuthMode::SignUp, credentials()).await;

        assert_eq!(outcome, SubmitOutcome::Failed(AuthFailureReason::AlreadyRegistered));
        assert_eq!(
            notifier.notifications,
            vec![Notification {
                title: "Sign Up Error".to_string(),
                description: "An account with this email already exists. Please sign in instead."
                    .to_string(),
                variant: NotificationVariant::Destructive,
            }]
        );
        assert!(!flag.value.get());
    }

    #[tokio::test]
    async fn test_unclassified_failure_passes_message_through() {
        let flag = TestFlag::default();
        let raw = "Email rate limit exceeded";
        let provider = FakeProvider::new(Err(AuthFailureReason::Other(raw.to_string())), &flag);
        let mut notifier = TestNotifier::default();

        let guard = SubmittingGuard::acquire(flag.clone());
        submit(&provider, &mut notifier, guard, AuthMode::SignIn, credentials()).await;

        assert_eq!(notifier.notifications.len(), 1);
        assert_eq!(notifier.notifications[0].title, "Sign In Error");
        assert_eq!(notifier.notifications[0].description, raw);
        assert_eq!(*flag.writes.borrow(), vec![true, false]);
    }

    #[test]
    fn test_flag_released_when_provider_panics() {
        let flag = TestFlag::default();
        let mut provider = FakeProvider::new(success(), &flag);
        provider.panics = true;
        let probe = flag.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let mut notifier = TestNotifier::default();
            let guard = SubmittingGuard::acquire(flag);
            runtime.block_on(submit(
                &provider,
                &mut notifier,
                guard,
                AuthMode::SignIn,
                credentials(),
            ))
        }));

        assert!(result.is_err());
        assert!(!probe.value.get());
        assert_eq!(*probe.writes.borrow(), vec![true, false]);
    }

    #[test]
    fn test_flag_released_when_future_is_dropped() {
        let flag = TestFlag::default();
        let provider = FakeProvider::new(success(), &flag);
        let mut notifier = TestNotifier::default();

        let guard = SubmittingGuard::acquire(flag.clone());
        assert!(flag.value.get());

        // Up before the first poll, down once the unpolled future is dropped
        let pending = submit(&provider, &mut notifier, guard, AuthMode::SignIn, credentials());
        assert!(flag.value.get());
        drop(pending);
        assert!(!flag.value.get());
        assert!(notifier.notifications.is_empty());
        assert!(provider.calls.borrow().is_empty());
    }

    #[test]
    fn test_toggle_keeps_fields() {
        let mut state = FormState {
            email: "a@example.com".to_string(),
            password: "secret123".to_string(),
            ..Default::default()
        };
        let before = state.clone();

        state.toggle_mode();
        assert_eq!(state.mode, AuthMode::SignUp);
        assert_eq!(state.email, before.email);

        state.toggle_mode();
        assert_eq!(state, before);
    }

    #[test]
    fn test_is_submittable() {
        let mut state = FormState {
            email: "a@example.com".to_string(),
            password: "12345".to_string(),
            ..Default::default()
        };
        assert!(!state.is_submittable());

        state.password.push('6');
        assert!(state.is_submittable());

        state.submitting = true;
        assert!(!state.is_submittable());

        state.submitting = false;
        state.email = "  ".to_string();
        assert!(!state.is_submittable());
    }

    #[test]
    fn test_try_acquire_refuses_second_submission() {
        let flag = TestFlag::default();
        let mut state = FormState {
            email: "a@example.com".to_string(),
            password: "secret123".to_string(),
            ..Default::default()
        };

        let guard = SubmittingGuard::try_acquire(&state, flag.clone());
        assert!(guard.is_some());
        assert!(flag.value.get());

        state.submitting = flag.value.get();
        assert!(SubmittingGuard::try_acquire(&state, flag.clone()).is_none());
        assert_eq!(*flag.writes.borrow(), vec![true]);

        drop(guard);
        assert!(!flag.value.get());
    }

    #[test]
    fn test_try_acquire_checks_fields() {
        let flag = TestFlag::default();
        let state = FormState {
            email: "a@example.com".to_string(),
            password: "short".to_string(),
            ..Default::default()
        };
        assert!(SubmittingGuard::try_acquire(&state, flag.clone()).is_none());
        assert!(flag.writes.borrow().is_empty());
    }

    #[test]
    fn test_labels_follow_mode() {
        let labels = AuthFormLabels::default();
        assert_eq!(labels.title(AuthMode::SignUp), "Create Account");
        assert_eq!(labels.submit_button(AuthMode::SignIn, true), "Signing In...");
        assert_eq!(labels.submit_button(AuthMode::SignUp, true), "Creating Account...");
        assert_eq!(labels.toggle(AuthMode::SignIn), "Don't have an account? Create one");
        assert_eq!(
            labels.password_placeholder(AuthMode::SignUp),
            "Create a password (min 6 characters)"
        );
    }
}
