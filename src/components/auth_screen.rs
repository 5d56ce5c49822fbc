use crate::components::toast::{show_toast, ToastQueue};
use crate::navigation::NavHistory;
use dioxus::prelude::*;
use dioxus_i18n::t;
use supabase_auth::{AuthForm, AuthFormLabels, NavigationRequest, Notification};

fn localized_labels() -> AuthFormLabels {
    AuthFormLabels {
        sign_in_title: t!("auth-sign-in-title"),
        sign_up_title: t!("auth-sign-up-title"),
        sign_in_description: t!("auth-sign-in-description"),
        sign_up_description: t!("auth-sign-up-description"),
        email_label: t!("auth-email-label"),
        email_placeholder: t!("auth-email-placeholder"),
        password_label: t!("auth-password-label"),
        sign_in_password_placeholder: t!("auth-sign-in-password-placeholder"),
        sign_up_password_placeholder: t!("auth-sign-up-password-placeholder"),
        sign_in_submit: t!("auth-sign-in-submit"),
        sign_up_submit: t!("auth-sign-up-submit"),
        sign_in_busy: t!("auth-sign-in-busy"),
        sign_up_busy: t!("auth-sign-up-busy"),
        to_sign_up: t!("auth-to-sign-up"),
        to_sign_in: t!("auth-to-sign-in"),
    }
}

#[component]
pub fn AuthScreen(
    mut history: Signal<NavHistory>,
    toasts: Signal<ToastQueue>,
    toast_duration_secs: u64,
) -> Element {
    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh;",
            h1 { style: "color: #0066cc; text-align: center; margin-bottom: 24px; margin-top: 48px; font-size: 28px; font-weight: 700;",
                {t!("app-title")}
            }
            AuthForm {
                labels: localized_labels(),
                on_notify: move |notification: Notification| {
                    show_toast(toasts, notification, toast_duration_secs)
                },
                on_navigate: move |request: NavigationRequest| {
                    if let Err(e) = history.write().navigate(&request.path, request.replace) {
                        log::warn!("Ignoring navigation request: {}", e);
                    }
                },
            }
        }
    }
}
