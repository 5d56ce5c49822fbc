use dioxus::prelude::EventHandler;
use std::sync::Arc;
use tokio::sync::watch;

/// Where an authenticated user is sent
pub const HOME_PATH: &str = "/";

/// Observable "is the user signed in" value.
///
/// Created once by the application and handed to whoever needs it; there is
/// no global. Observers hold an [`AuthSubscription`] and stop observing by
/// dropping it.
#[derive(Clone)]
pub struct AuthStateHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl AuthStateHandle {
    pub fn new(authenticated: bool) -> Self {
        let (sender, _) = watch::channel(authenticated);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        *self.sender.borrow()
    }

    /// Returns `true` if the value changed. Subscribers are only woken on
    /// real transitions.
    pub fn set(&self, authenticated: bool) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == authenticated {
                false
            } else {
                *current = authenticated;
                true
            }
        })
    }

    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl PartialEq for AuthStateHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.sender, &other.sender)
    }
}

impl std::fmt::Debug for AuthStateHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStateHandle")
            .field("authenticated", &self.is_authenticated())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Live subscription to an [`AuthStateHandle`]
pub struct AuthSubscription {
    receiver: watch::Receiver<bool>,
}

impl AuthSubscription {
    /// Current value, marking it as seen
    pub fn current(&mut self) -> bool {
        *self.receiver.borrow_and_update()
    }

    /// Wait for the next transition. `None` once every handle is gone.
    pub async fn changed(&mut self) -> Option<bool> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }
}

/// A navigation the form asks the host application to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

pub trait Navigator {
    fn navigate(&mut self, path: &str, replace: bool);
}

impl Navigator for EventHandler<NavigationRequest> {
    fn navigate(&mut self, path: &str, replace: bool) {
        self.call(NavigationRequest {
            path: path.to_string(),
            replace,
        });
    }
}

/// Sends the user home when the auth state reports "signed in", on the
/// first observation and on every false -> true transition after that.
#[derive(Debug, Default)]
pub struct AuthRedirect {
    last: Option<bool>,
}

impl AuthRedirect {
    pub fn observe(&mut self, authenticated: bool, navigator: &mut impl Navigator) -> bool {
        let previous = self.last.replace(authenticated);
        if authenticated && previous != Some(true) {
            log::info!("User is authenticated, redirecting to {}", HOME_PATH);
            navigator.navigate(HOME_PATH, true);
            true
        } else {
            false
        }
    }
}

/// Follow the auth state until every handle is dropped or the task is
/// cancelled (component unmount drops the future and with it the
/// subscription).
pub async fn watch_auth_state(mut subscription: AuthSubscription, mut navigator: impl Navigator) {
    let mut redirect = AuthRedirect::default();
    redirect.observe(subscription.current(), &mut navigator);

    while let Some(authenticated) = subscription.changed().await {
        redirect.observe(authenticated, &mut navigator);
    }
    log::debug!("Auth state closed, redirect watcher stopped");
}
