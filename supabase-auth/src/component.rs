use crate::form::{
    submit, AuthFormLabels, FormState, Notification, SubmittingGuard, MIN_PASSWORD_LEN,
};
use crate::redirect::{watch_auth_state, NavigationRequest};
use crate::service::SupabaseAuthService;
use dioxus::prelude::*;

/// Props for the AuthForm
#[derive(Props, Clone, PartialEq)]
pub struct AuthFormProps {
    /// Called once per submission with the toast to show
    pub on_notify: EventHandler<Notification>,
    /// Called when the user is (or becomes) signed in
    pub on_navigate: EventHandler<NavigationRequest>,
    /// Custom labels for UI elements (optional)
    #[props(default)]
    pub labels: Option<AuthFormLabels>,
}

/// Email/password form that switches between sign in and sign up.
///
/// Expects a [`SupabaseAuthService`] in the Dioxus context. While mounted it
/// watches the service's auth state and asks the host to navigate home
/// (replacing the history entry) as soon as the user is signed in.
///
/// # Example
/// ```rust,ignore
/// use_context_provider(|| service.clone());
///
/// AuthForm {
///     on_notify: move |notification| toasts.push(notification),
///     on_navigate: move |request| history.navigate(request),
/// }
/// ```
#[component]
pub fn AuthForm(props: AuthFormProps) -> Element {
    let service = use_context::<SupabaseAuthService>();
    let mut form = use_signal(FormState::default);
    let labels = props.labels.clone().unwrap_or_default();
    let on_notify = props.on_notify;
    let on_navigate = props.on_navigate;

    // Subscribed on mount; the task and its subscription go away on unmount
    let auth_state = service.auth_state().clone();
    use_hook(move || spawn(watch_auth_state(auth_state.subscribe(), on_navigate)));

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let Some((guard, state)) = start_submission(form) else {
            log::debug!("Submit ignored, request already in flight");
            return;
        };

        let service = service.clone();
        let mut notifier = on_notify;
        spawn(async move {
            let credentials = state.credentials();
            submit(&service, &mut notifier, guard, state.mode, credentials).await;
        });
    };

    let state = form();
    let mode = state.mode;
    let title = labels.title(mode);
    let description = labels.description(mode);
    let password_placeholder = labels.password_placeholder(mode);
    let submit_label = labels.submit_button(mode, state.submitting);
    let toggle_label = labels.toggle(mode);

    rsx! {
        div { class: "card", style: "width: 100%; max-width: 420px; margin: 0 auto;",
            div { style: "margin-bottom: 16px;",
                h2 { style: "margin: 0 0 8px 0; font-size: 22px; color: #333;",
                    "{title}"
                }
                p { style: "margin: 0; font-size: 14px; color: #666;",
                    "{description}"
                }
            }
            form {
                style: "display: flex; flex-direction: column; gap: 16px;",
                onsubmit: on_submit,
                div { style: "display: flex; flex-direction: column; gap: 6px;",
                    label { r#for: "email", style: "font-size: 14px; font-weight: 600;",
                        "{labels.email_label}"
                    }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        placeholder: "{labels.email_placeholder}",
                        value: "{state.email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                }
                div { style: "display: flex; flex-direction: column; gap: 6px;",
                    label { r#for: "password", style: "font-size: 14px; font-weight: 600;",
                        "{labels.password_label}"
                    }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        minlength: "{MIN_PASSWORD_LEN}",
                        placeholder: "{password_placeholder}",
                        value: "{state.password}",
                        oninput: move |e| form.write().password = e.value(),
                    }
                }
                button {
                    class: "btn-primary",
                    r#type: "submit",
                    style: "width: 100%;",
                    disabled: state.submitting,
                    "{submit_label}"
                }
                div { style: "text-align: center;",
                    button {
                        r#type: "button",
                        style: "background: none; border: none; color: #0066cc; font-size: 14px; cursor: pointer;",
                        onclick: move |_| form.write().toggle_mode(),
                        "{toggle_label}"
                    }
                }
            }
        }
    }
}

/// Raise the submitting flag before the request task exists, so a second
/// submit event in the same frame already sees it.
fn start_submission(
    form: Signal<FormState>,
) -> Option<(SubmittingGuard<Signal<FormState>>, FormState)> {
    let state = form.peek().clone();
    let guard = SubmittingGuard::try_acquire(&state, form)?;
    Some((guard, state))
}
