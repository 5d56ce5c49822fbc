use crate::navigation::{NavHistory, Route};
use dioxus::prelude::*;
use dioxus_i18n::t;
use supabase_auth::SupabaseAuthService;

#[component]
pub fn HomeScreen(mut history: Signal<NavHistory>) -> Element {
    let service = use_context::<SupabaseAuthService>();
    let email = service
        .current_user()
        .and_then(|user| user.email)
        .unwrap_or_default();

    let sign_out = move |_| {
        service.sign_out();
        history.write().replace(Route::Auth);
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh;",
            h1 { style: "color: #0066cc; text-align: center; margin-bottom: 24px; margin-top: 48px; font-size: 28px; font-weight: 700;",
                {t!("app-title")}
            }
            div { class: "card", style: "margin-bottom: 16px;",
                h2 { style: "margin: 0 0 12px 0; font-size: 18px; color: #333;",
                    {t!("home-title")}
                }
                p { style: "font-size: 14px; color: #555; margin: 0 0 8px 0;",
                    {t!("home-signed-in-as", email: email.clone())}
                }
                p { style: "font-size: 14px; color: #888; margin: 0;", {t!("home-empty")} }
            }
            div { class: "card",
                button {
                    class: "btn-secondary",
                    style: "width: 100%;",
                    onclick: sign_out,
                    {t!("action-sign-out")}
                }
            }
        }
    }
}
