use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::i18n::language::Language;

/// How many days the date grid offers, starting today.
pub const CALENDAR_DAYS: usize = 30;

/// Half-hour slots across the morning and afternoon windows. The same list is
/// offered for every day; real per-day availability is not queried.
pub const TIME_SLOTS: [&str; 13] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
}

impl CalendarDay {
    /// `YYYY-MM-DD`, the value carried in `data-date`.
    pub fn iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn day_number(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday_label(&self, lang: Language) -> &'static str {
        weekday_short(self.date.weekday(), lang)
    }
}

pub fn calendar_from(today: NaiveDate) -> Vec<CalendarDay> {
    (0..CALENDAR_DAYS as i64)
        .map(|offset| CalendarDay {
            date: today + Duration::days(offset),
            is_today: offset == 0,
        })
        .collect()
}

fn weekday_short(day: Weekday, lang: Language) -> &'static str {
    match (lang, day) {
        (Language::Ru, Weekday::Mon) => "пн",
        (Language::Ru, Weekday::Tue) => "вт",
        (Language::Ru, Weekday::Wed) => "ср",
        (Language::Ru, Weekday::Thu) => "чт",
        (Language::Ru, Weekday::Fri) => "пт",
        (Language::Ru, Weekday::Sat) => "сб",
        (Language::Ru, Weekday::Sun) => "вс",
        (Language::En, Weekday::Mon) => "Mon",
        (Language::En, Weekday::Tue) => "Tue",
        (Language::En, Weekday::Wed) => "Wed",
        (Language::En, Weekday::Thu) => "Thu",
        (Language::En, Weekday::Fri) => "Fri",
        (Language::En, Weekday::Sat) => "Sat",
        (Language::En, Weekday::Sun) => "Sun",
    }
}
