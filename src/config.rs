use crate::error::AppError;
use serde::Deserialize;
use supabase_auth::SupabaseConfig;

/// Config shipped with the app
const EMBEDDED_CONFIG: &str = include_str!("../notebooks.toml");

const DEFAULT_TOAST_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_toast_secs")]
    pub toast_duration_secs: u64,
}

fn default_toast_secs() -> u64 {
    DEFAULT_TOAST_SECS
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_secs: DEFAULT_TOAST_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UiSection {
    #[serde(default)]
    ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub supabase: SupabaseConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Parse a config document; environment overrides are not applied
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let supabase = SupabaseConfig::from_toml_str(content)?;
        let ui = toml::from_str::<UiSection>(content)?.ui;
        Ok(Self { supabase, ui })
    }

    /// Embedded config plus `SUPABASE_*` environment overrides, validated
    pub fn load() -> Result<Self, AppError> {
        let mut config = Self::from_toml_str(EMBEDDED_CONFIG)?;
        config.supabase = config.supabase.with_env_overrides().validate()?;
        log::info!("Using Supabase project at {}", config.supabase.url);
        Ok(config)
    }
}
