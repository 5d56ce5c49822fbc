use dioxus_i18n::prelude::*;

/// Fluent strings for the shell and the sign-in / sign-up form labels.
/// Only en-US ships for now.
pub fn init_i18n() -> I18nConfig {
    I18nConfig::new(unic_langid::langid!("en-US")).with_locale(Locale::new_static(
        unic_langid::langid!("en-US"),
        include_str!("../locales/en-US.ftl"),
    ))
}
