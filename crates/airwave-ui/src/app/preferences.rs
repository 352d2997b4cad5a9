//! Persistence helpers for the app shell.

use airwave_config::ClientSettings;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use tracing::{error, warn};

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

pub(crate) const SETTINGS_KEY: &str = "airwave.settings";
pub(crate) const LOCALE_KEY: &str = "airwave.locale";

/// Read client settings, falling back to defaults when missing or invalid.
pub(crate) fn load_settings() -> ClientSettings {
    let Some(raw) = LocalStorage::raw().get_item(SETTINGS_KEY).ok().flatten() else {
        return ClientSettings::default();
    };
    match ClientSettings::from_json(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(error = %err, "discarding stored client settings");
            ClientSettings::default()
        }
    }
}

pub(crate) fn persist_settings(settings: &ClientSettings) {
    set_storage(SETTINGS_KEY, settings);
}

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

fn set_storage<T: serde::Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    error!(operation, key, detail, "storage operation failed");
}
