use dioxus::prelude::*;
use dioxus_i18n::t;

/// Shown instead of the app when startup configuration is unusable
#[component]
pub fn ConfigErrorScreen(message: String) -> Element {
    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 48px auto 0 auto;",
            div { style: "padding: 12px; background: #f8d7da; border-radius: 4px; color: #721c24;",
                p { style: "margin: 0 0 12px 0; font-weight: 600;", {t!("config-error-title")} }
                p { style: "margin: 0 0 8px 0; font-size: 14px;", "{message}" }
                p { style: "margin: 0; font-size: 13px;", {t!("config-error-hint")} }
            }
        }
    }
}
