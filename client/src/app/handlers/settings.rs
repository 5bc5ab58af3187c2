//! # Settings Handlers
//!
//! Handlers for theme and language changes and their persistence.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use crate::app::state::{AppState, Language, Theme};
use crate::services::SessionStore;

/// Handle a theme change
pub(crate) fn handle_theme_change(state: Arc<RwLock<AppState>>, theme: Theme) {
    let mut state = state.write();
    state.settings.theme = theme;
    state.settings.unsaved_changes = true;
}

/// Handle a language change
pub(crate) fn handle_language_change(state: Arc<RwLock<AppState>>, language: Language) {
    let mut state = state.write();
    state.settings.language = language;
    state.settings.unsaved_changes = true;
}

/// Handle settings save: persist current preferences to the session store.
pub(crate) fn handle_settings_save(state: Arc<RwLock<AppState>>, storage: &Mutex<SessionStore>) {
    let (theme, language) = {
        let state = state.read();
        (state.settings.theme, state.settings.language)
    };

    let mut store = storage.lock();
    let saved = store
        .set_theme(theme.as_str())
        .and_then(|_| store.set_language(language.as_str()));
    drop(store);

    match saved {
        Ok(()) => {
            state.write().settings.unsaved_changes = false;
            tracing::info!(theme = theme.as_str(), language = language.as_str(), "Settings saved");
        }
        Err(e) => {
            tracing::error!("Failed to save settings: {}", e);
        }
    }
}

/// Handle settings reset to defaults
pub(crate) fn handle_settings_reset(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.settings.theme = Theme::default();
    state.settings.language = Language::default();
    state.settings.unsaved_changes = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_mark_unsaved() {
        let state = Arc::new(RwLock::new(AppState::default()));

        handle_theme_change(state.clone(), Theme::Dark);
        assert!(state.read().settings.unsaved_changes);
        assert_eq!(state.read().settings.theme, Theme::Dark);

        handle_language_change(state.clone(), Language::English);
        assert_eq!(state.read().settings.language, Language::English);
    }

    #[test]
    fn save_persists_and_clears_flag() {
        let state = Arc::new(RwLock::new(AppState::default()));
        let path = std::env::temp_dir().join(format!(
            "dunab-settings-test-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let storage = Mutex::new(SessionStore::open_at(path.clone()));

        handle_theme_change(state.clone(), Theme::Dark);
        handle_settings_save(state.clone(), &storage);

        assert!(!state.read().settings.unsaved_changes);
        assert_eq!(storage.lock().theme().as_deref(), Some("dark"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn reset_restores_defaults() {
        let state = Arc::new(RwLock::new(AppState::default()));
        handle_theme_change(state.clone(), Theme::Dark);
        handle_settings_reset(state.clone());

        let s = state.read();
        assert_eq!(s.settings.theme, Theme::Light);
        assert_eq!(s.settings.language, Language::Spanish);
        assert!(s.settings.unsaved_changes);
    }
}
