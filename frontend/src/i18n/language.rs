use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the site ships content for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Tag stored under `selectedLang` and written to `<html lang>`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Label shown on the selector button.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Ru => "RU",
            Language::En => "EN",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::Ru, Language::En]
    }

    /// Parses a tag case-insensitively. Returns `None` for anything unsupported.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" => Some(Language::Ru),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_tags() {
        assert_eq!(Language::from_code("ru"), Some(Language::Ru));
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn default_is_russian() {
        assert_eq!(Language::default(), Language::Ru);
        assert_eq!(Language::default().code(), "ru");
    }
}
