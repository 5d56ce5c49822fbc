use crate::error::AuthError;
use serde::Deserialize;

pub const URL_ENV: &str = "SUPABASE_URL";
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Project settings needed to talk to the auth API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

/// Layout of the config file: settings live under `[supabase]`
#[derive(Debug, Deserialize)]
struct ConfigFile {
    supabase: SupabaseConfig,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Parse a TOML document with a `[supabase]` table
    pub fn from_toml_str(content: &str) -> Result<Self, AuthError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| AuthError::ConfigError(format!("Invalid config file: {}", e)))?;
        Ok(file.supabase)
    }

    /// Values from `SUPABASE_URL` / `SUPABASE_ANON_KEY` win over the file
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(URL_ENV).ok(),
            std::env::var(ANON_KEY_ENV).ok(),
        )
    }

    fn with_overrides(mut self, url: Option<String>, anon_key: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Using {} from environment", URL_ENV);
            self.url = url;
        }
        if let Some(key) = anon_key.filter(|k| !k.trim().is_empty()) {
            log::debug!("Using {} from environment", ANON_KEY_ENV);
            self.anon_key = key;
        }
        self
    }

    /// Check the values and normalize the URL
    pub fn validate(mut self) -> Result<Self, AuthError> {
        let url = self.url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(AuthError::ConfigError(format!(
                "Project URL must start with http:// or https://, got '{}'",
                self.url
            )));
        }
        if self.anon_key.trim().is_empty() {
            return Err(AuthError::ConfigError("Anon key is empty".to_string()));
        }
        self.url = url;
        self.anon_key = self.anon_key.trim().to_string();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[supabase]
url = "https://abcd.supabase.co/"
anon_key = "public-anon-key"
"#;

    #[test]
    fn test_parse_and_validate() {
        let config = SupabaseConfig::from_toml_str(SAMPLE)
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(config.url, "https://abcd.supabase.co");
        assert_eq!(config.anon_key, "public-anon-key");
    }

    #[test]
    fn test_missing_table() {
        let result = SupabaseConfig::from_toml_str("url = \"https://x\"");
        assert!(matches!(result, Err(AuthError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_bad_url_and_empty_key() {
        let result = SupabaseConfig::new("abcd.supabase.co", "key").validate();
        assert!(result.is_err());

        let result = SupabaseConfig::new("https://abcd.supabase.co", "  ").validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_ignore_blank_values() {
        let config = SupabaseConfig::new("https://file.example", "file-key").with_overrides(
            Some("https://env.example".to_string()),
            Some(String::new()),
        );
        assert_eq!(config.url, "https://env.example");
        assert_eq!(config.anon_key, "file-key");
    }
}
