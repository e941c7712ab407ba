//! Persistence and environment helpers for the app shell.

use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;
use web_sys::MediaQueryList;

pub(crate) const THEME_KEY: &str = "vesper.theme";

/// Startup theme: the persisted flag wins, then the OS hint, then light.
pub(crate) fn load_theme() -> ThemeMode {
    if let Ok(value) = LocalStorage::get::<String>(THEME_KEY) {
        return ThemeMode::from_flag(&value);
    }
    if prefers_dark().unwrap_or(false) {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Writes the theme flag; called once per toggle activation.
pub(crate) fn persist_theme(theme: ThemeMode) {
    set_storage(THEME_KEY, theme.as_str());
}

/// OS dark-scheme hint; `None` when the media-query API is unavailable.
fn prefers_dark() -> Option<bool> {
    let media: MediaQueryList = window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(media.matches())
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
