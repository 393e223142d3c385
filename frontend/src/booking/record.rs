use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::error::BookingError;

/// Contact step input as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    /// Mirrors the inputs' `required` attributes so a bypassed form still
    /// never reaches the scheduler.
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::MissingField("name"));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(BookingError::MissingField("email")),
        }
    }
}

/// What gets handed to the scheduling backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl BookingRecord {
    pub fn new(date: &str, time: &str, fields: &ContactFields) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            message: fields.message.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: String,
    pub message: String,
}

/// Preferred callback window on the lead form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    #[default]
    #[serde(rename = "")]
    Any,
    Morning,
    Afternoon,
    Evening,
}

impl PreferredTime {
    pub fn all() -> &'static [PreferredTime] {
        &[
            PreferredTime::Any,
            PreferredTime::Morning,
            PreferredTime::Afternoon,
            PreferredTime::Evening,
        ]
    }

    /// `<option value>` for the select.
    pub fn value(&self) -> &'static str {
        match self {
            PreferredTime::Any => "",
            PreferredTime::Morning => "morning",
            PreferredTime::Afternoon => "afternoon",
            PreferredTime::Evening => "evening",
        }
    }

    pub fn from_value(value: &str) -> PreferredTime {
        match value {
            "morning" => PreferredTime::Morning,
            "afternoon" => PreferredTime::Afternoon,
            "evening" => PreferredTime::Evening,
            _ => PreferredTime::Any,
        }
    }
}

/// Lead form payload, followed up by hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_time: PreferredTime,
    pub message: String,
    pub timestamp: String,
}

impl LeadRequest {
    pub fn new(fields: &ContactFields, preferred_time: PreferredTime, at: DateTime<Utc>) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            preferred_time,
            message: fields.message.trim().to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
