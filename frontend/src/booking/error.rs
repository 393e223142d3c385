use thiserror::Error;

use crate::i18n::language::Language;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("failed to load available slots: {0}")]
    LoadFailure(String),
    #[error("failed to create booking: {0}")]
    SubmitFailure(String),
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("a date and a time must be selected before submitting")]
    IncompleteSelection,
}

impl BookingError {
    /// Text for the toast shown to the visitor.
    pub fn user_message(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (BookingError::LoadFailure(_), Language::Ru) => {
                "Не удалось загрузить доступное время. Попробуйте еще раз."
            }
            (BookingError::LoadFailure(_), Language::En) => {
                "Failed to load booking information. Please try again."
            }
            (BookingError::SubmitFailure(_), Language::Ru) => {
                "Произошла ошибка. Пожалуйста, попробуйте еще раз."
            }
            (BookingError::SubmitFailure(_), Language::En) => "Booking failed. Please try again.",
            (BookingError::MissingField(_), Language::Ru) => "Заполните обязательные поля.",
            (BookingError::MissingField(_), Language::En) => "Please fill in the required fields.",
            (BookingError::IncompleteSelection, Language::Ru) => "Выберите дату и время.",
            (BookingError::IncompleteSelection, Language::En) => "Please choose a date and time.",
        }
    }
}
