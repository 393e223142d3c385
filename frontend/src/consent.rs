use log::warn;

use crate::storage::{PreferenceStorage, CONSENT_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
}

impl Consent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Consent::Accepted => "accepted",
            Consent::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Option<Consent> {
        match value {
            "accepted" => Some(Consent::Accepted),
            "declined" => Some(Consent::Declined),
            _ => None,
        }
    }
}

/// `None` means the visitor has not answered yet and the banner shows.
pub fn stored_consent<S: PreferenceStorage>(storage: &S) -> Option<Consent> {
    storage.get(CONSENT_KEY).as_deref().and_then(Consent::parse)
}

pub fn record_consent<S: PreferenceStorage>(storage: &S, consent: Consent) {
    if let Err(e) = storage.set(CONSENT_KEY, consent.as_str()) {
        warn!("Could not persist cookie consent: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn banner_shows_until_answered() {
        let storage = MemoryStorage::default();
        assert_eq!(stored_consent(&storage), None);

        record_consent(&storage, Consent::Declined);
        assert_eq!(stored_consent(&storage), Some(Consent::Declined));
        assert_eq!(storage.get(CONSENT_KEY).as_deref(), Some("declined"));
    }

    #[test]
    fn unknown_value_counts_as_unanswered() {
        let storage = MemoryStorage::with(CONSENT_KEY, "maybe");
        assert_eq!(stored_consent(&storage), None);
    }
}
