use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use supabase_auth::{AuthStateHandle, SupabaseAuthService};

mod components;
mod config;
mod error;
mod i18n;
mod navigation;

use components::{AuthScreen, ConfigErrorScreen, HomeScreen, ToastQueue, ToastStack};
use config::AppConfig;
use error::AppError;
use navigation::{NavHistory, Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("notebooks"),
    );

    #[cfg(not(target_os = "android"))]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
}

/// Everything the app needs once startup succeeded
#[derive(Clone)]
struct AppServices {
    config: AppConfig,
    auth: SupabaseAuthService,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.auth.auth_state() == other.auth.auth_state()
    }
}

fn bootstrap() -> Result<AppServices, AppError> {
    let config = AppConfig::load()?;
    let auth = SupabaseAuthService::new(config.supabase.clone(), AuthStateHandle::new(false))?;
    Ok(AppServices { config, auth })
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);
    let services = use_hook(|| {
        bootstrap().map_err(|e| {
            log::error!("Startup failed: {}", e);
            e.user_message()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match services {
            Ok(services) => rsx! {
                Shell { services }
            },
            Err(message) => rsx! {
                ConfigErrorScreen { message }
            },
        }
    }
}

#[component]
fn Shell(services: AppServices) -> Element {
    use_context_provider(|| services.auth.clone());
    let history = use_signal(|| NavHistory::new(Route::Auth));
    let toasts = use_signal(ToastQueue::default);
    let toast_duration_secs = services.config.ui.toast_duration_secs;
    let route = history.read().current();

    rsx! {
        div { style: "display: flex; flex-direction: column; min-height: 100vh; font-family: sans-serif;",
            match route {
                Route::Auth => rsx! {
                    AuthScreen { history, toasts, toast_duration_secs }
                },
                Route::Home => rsx! {
                    HomeScreen { history }
                },
            }
            ToastStack { queue: toasts }
        }
    }
}
