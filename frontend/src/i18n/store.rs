use log::{info, warn};
use thiserror::Error;

use crate::i18n::language::Language;
use crate::storage::{PreferenceStorage, LANGUAGE_KEY};

/// Language used when nothing (or garbage) is stored.
pub const FALLBACK_LANGUAGE: Language = Language::Ru;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("unsupported language tag `{0}`")]
    Unsupported(String),
}

/// Owns the active language and keeps it in sync with durable storage.
pub struct LanguageStore<S> {
    storage: S,
    active: Language,
}

impl<S: PreferenceStorage> LanguageStore<S> {
    /// Reads the persisted preference at page load, falling back to Russian.
    pub fn resolve_initial(storage: S) -> Self {
        let active = read_preference(&storage);
        info!("Initial language: {}", active);
        Self { storage, active }
    }

    pub fn active(&self) -> Language {
        self.active
    }

    /// Persists `lang` and makes it active. A storage failure only costs
    /// persistence; the page still switches.
    pub fn select(&mut self, lang: Language) -> Language {
        if let Err(e) = self.storage.set(LANGUAGE_KEY, lang.code()) {
            warn!("Could not persist language {}: {}", lang, e);
        }
        self.active = lang;
        lang
    }

    /// Same as [`select`](Self::select) for a raw tag coming from markup.
    /// Unsupported tags change nothing.
    pub fn select_code(&mut self, code: &str) -> Result<Language, I18nError> {
        match Language::from_code(code) {
            Some(lang) => Ok(self.select(lang)),
            None => {
                warn!("Ignoring unsupported language tag {:?}", code);
                Err(I18nError::Unsupported(code.to_string()))
            }
        }
    }

    /// Called when the browser restores the page from the back/forward cache,
    /// where load-time code does not run again.
    pub fn on_restore(&mut self) -> Language {
        self.active = read_preference(&self.storage);
        info!("Page restored, re-applying language {}", self.active);
        self.active
    }
}

fn read_preference<S: PreferenceStorage>(storage: &S) -> Language {
    match storage.get(LANGUAGE_KEY) {
        Some(code) => Language::from_code(&code).unwrap_or_else(|| {
            warn!("Stored language {:?} is not supported, clearing it", code);
            if let Err(e) = storage.remove(LANGUAGE_KEY) {
                warn!("{}", e);
            }
            FALLBACK_LANGUAGE
        }),
        None => FALLBACK_LANGUAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn falls_back_when_nothing_is_stored() {
        let store = LanguageStore::resolve_initial(MemoryStorage::default());
        assert_eq!(store.active(), Language::Ru);
    }

    #[test]
    fn falls_back_on_garbage() {
        let storage = MemoryStorage::with(LANGUAGE_KEY, "klingon");
        let store = LanguageStore::resolve_initial(storage.clone());
        assert_eq!(store.active(), FALLBACK_LANGUAGE);
        assert_eq!(storage.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn reads_persisted_preference() {
        let store = LanguageStore::resolve_initial(MemoryStorage::with(LANGUAGE_KEY, "en"));
        assert_eq!(store.active(), Language::En);
    }

    #[test]
    fn select_persists_choice_for_next_visit() {
        let storage = MemoryStorage::default();
        let mut store = LanguageStore::resolve_initial(storage.clone());
        store.select(Language::En);

        assert_eq!(storage.get(LANGUAGE_KEY).as_deref(), Some("en"));
        let next_visit = LanguageStore::resolve_initial(storage);
        assert_eq!(next_visit.active(), Language::En);
    }

    #[test]
    fn unsupported_tag_leaves_everything_alone() {
        let storage = MemoryStorage::with(LANGUAGE_KEY, "en");
        let mut store = LanguageStore::resolve_initial(storage.clone());

        let result = store.select_code("de");

        assert_eq!(result, Err(I18nError::Unsupported("de".to_string())));
        assert_eq!(store.active(), Language::En);
        assert_eq!(storage.get(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn select_still_switches_when_storage_is_read_only() {
        let mut store = LanguageStore::resolve_initial(MemoryStorage::default().read_only());
        assert_eq!(store.select(Language::En), Language::En);
        assert_eq!(store.active(), Language::En);
    }

    #[test]
    fn restore_picks_up_preference_changed_elsewhere() {
        let storage = MemoryStorage::default();
        let mut store = LanguageStore::resolve_initial(storage.clone());
        assert_eq!(store.active(), Language::Ru);

        // another tab switched to English while this page sat in the bfcache
        storage.set(LANGUAGE_KEY, "en").unwrap();

        assert_eq!(store.on_restore(), Language::En);
        assert_eq!(store.active(), Language::En);
    }
}
