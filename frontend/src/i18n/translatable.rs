use std::collections::BTreeMap;

use log::warn;

use crate::i18n::language::Language;

/// A piece of page text authored in every supported language.
///
/// `shown` is what the visitor currently sees. Applying a language with no
/// variant keeps the previous text instead of blanking it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translatable {
    variants: BTreeMap<Language, String>,
    shown: String,
}

impl Translatable {
    /// Page markup is authored in Russian, so that is what shows before any
    /// language is applied.
    pub fn bilingual(ru: impl Into<String>, en: impl Into<String>) -> Self {
        let ru = ru.into();
        Self {
            shown: ru.clone(),
            variants: BTreeMap::from([(Language::Ru, ru), (Language::En, en.into())]),
        }
    }

    pub fn variant(&self, lang: Language) -> Option<&str> {
        self.variants
            .get(&lang)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    pub fn shown(&self) -> &str {
        &self.shown
    }

    /// Returns `false` when `lang` has no content for this element.
    pub fn apply(&mut self, lang: Language) -> bool {
        match self.variant(lang) {
            Some(text) => {
                if self.shown != text {
                    self.shown = text.to_string();
                }
                true
            }
            None => {
                warn!("No {} translation for {:?}, keeping current text", lang, self.shown);
                false
            }
        }
    }

    pub fn applied(mut self, lang: Language) -> Self {
        self.apply(lang);
        self
    }

    /// Text a node with these variants shows under `lang`.
    pub fn text_for(ru: &str, en: &str, lang: Language) -> String {
        Self::bilingual(ru, en).applied(lang).shown().to_string()
    }
}
