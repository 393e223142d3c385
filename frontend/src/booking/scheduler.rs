use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, Utc};
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::info;
use serde::{Deserialize, Serialize};

use crate::booking::error::BookingError;
use crate::booking::record::{BookingConfirmation, BookingRecord, LeadRequest};
use crate::booking::slots::{CALENDAR_DAYS, TIME_SLOTS};
use crate::config::CalComConfig;
use crate::i18n::language::Language;

/// Scheduling backend consumed by the booking wizard. Both calls may fail
/// and neither is retried.
pub trait Scheduler {
    fn fetch_available_slots(&self) -> LocalBoxFuture<'static, Result<Vec<String>, BookingError>>;

    fn create_booking(
        &self,
        record: BookingRecord,
        lang: Language,
    ) -> LocalBoxFuture<'static, Result<BookingConfirmation, BookingError>>;
}

/// Destination of the lead form.
pub trait LeadSink {
    fn submit_lead(&self, lead: LeadRequest) -> LocalBoxFuture<'static, Result<(), BookingError>>;
}

/// Stands in for the scheduling API: waits, logs, succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedScheduler {
    pub latency_ms: u32,
}

impl Scheduler for SimulatedScheduler {
    fn fetch_available_slots(&self) -> LocalBoxFuture<'static, Result<Vec<String>, BookingError>> {
        let latency = self.latency_ms;
        async move {
            TimeoutFuture::new(latency).await;
            Ok(TIME_SLOTS.iter().map(|slot| slot.to_string()).collect())
        }
        .boxed_local()
    }

    fn create_booking(
        &self,
        record: BookingRecord,
        _lang: Language,
    ) -> LocalBoxFuture<'static, Result<BookingConfirmation, BookingError>> {
        let latency = self.latency_ms;
        async move {
            info!(
                "Booking data to be submitted: {}",
                serde_json::to_string(&record).unwrap_or_default()
            );
            TimeoutFuture::new(latency).await;
            info!("Demo booking for {} {} ({} <{}>)", record.date, record.time, record.name, record.email);
            Ok(BookingConfirmation {
                booking_id: format!("demo_{}", Utc::now().timestamp_millis()),
                message: "Demo booking".to_string(),
            })
        }
        .boxed_local()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedLeadSink {
    pub latency_ms: u32,
}

impl LeadSink for SimulatedLeadSink {
    fn submit_lead(&self, lead: LeadRequest) -> LocalBoxFuture<'static, Result<(), BookingError>> {
        let latency = self.latency_ms;
        async move {
            TimeoutFuture::new(latency).await;
            info!(
                "Booking request received: {}",
                serde_json::to_string(&lead).unwrap_or_default()
            );
            Ok(())
        }
        .boxed_local()
    }
}

/// Cal.com v1 REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalComScheduler {
    config: CalComConfig,
}

#[derive(Debug, Default, Deserialize)]
struct SlotsResponse {
    #[serde(default)]
    slots: BTreeMap<String, Vec<SlotEntry>>,
}

#[derive(Debug, Deserialize)]
struct SlotEntry {
    time: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct CreateBookingRequest {
    event_type_id: u64,
    start: String,
    responses: BookingResponses,
    time_zone: String,
    language: String,
    metadata: BookingMetadata,
}

#[derive(Debug, Serialize, PartialEq)]
struct BookingResponses {
    name: String,
    email: String,
    notes: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct BookingMetadata {
    phone: String,
}

#[derive(Debug, Deserialize)]
struct CreateBookingResponse {
    id: u64,
    #[serde(default)]
    uid: String,
}

impl CalComScheduler {
    pub fn new(config: CalComConfig) -> Self {
        Self { config }
    }

    fn slots_url(&self, from: NaiveDate) -> String {
        let to = from + Duration::days(CALENDAR_DAYS as i64);
        format!(
            "{}/slots?apiKey={}&eventTypeId={}&startTime={}&endTime={}&timeZone={}",
            self.config.base_url,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(&self.config.event_type_id),
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d"),
            urlencoding::encode(&self.config.time_zone),
        )
    }

    fn bookings_url(&self) -> String {
        format!(
            "{}/bookings?apiKey={}",
            self.config.base_url,
            urlencoding::encode(&self.config.api_key)
        )
    }

    fn booking_request(&self, record: &BookingRecord, lang: Language) -> Result<CreateBookingRequest, BookingError> {
        let event_type_id = self
            .config
            .event_type_id
            .parse()
            .map_err(|_| BookingError::SubmitFailure(format!("bad event type id {:?}", self.config.event_type_id)))?;
        Ok(CreateBookingRequest {
            event_type_id,
            start: format!("{}T{}:00", record.date, record.time),
            responses: BookingResponses {
                name: record.name.clone(),
                email: record.email.clone(),
                notes: record.message.clone(),
            },
            time_zone: self.config.time_zone.clone(),
            language: lang.code().to_string(),
            metadata: BookingMetadata {
                phone: record.phone.clone(),
            },
        })
    }
}

/// Collapses the per-day slot map into the distinct `HH:MM` times offered.
fn times_of_day(response: &SlotsResponse) -> Vec<String> {
    let times: BTreeSet<String> = response
        .slots
        .values()
        .flatten()
        .filter_map(|entry| entry.time.split_once('T'))
        .filter_map(|(_, time)| time.get(..5))
        .map(str::to_string)
        .collect();
    times.into_iter().collect()
}

impl Scheduler for CalComScheduler {
    fn fetch_available_slots(&self) -> LocalBoxFuture<'static, Result<Vec<String>, BookingError>> {
        let url = self.slots_url(Utc::now().date_naive());
        async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| BookingError::LoadFailure(e.to_string()))?;
            if !response.ok() {
                return Err(BookingError::LoadFailure(format!("HTTP {}", response.status())));
            }
            let body: SlotsResponse = response
                .json()
                .await
                .map_err(|e| BookingError::LoadFailure(e.to_string()))?;
            Ok(times_of_day(&body))
        }
        .boxed_local()
    }

    fn create_booking(
        &self,
        record: BookingRecord,
        lang: Language,
    ) -> LocalBoxFuture<'static, Result<BookingConfirmation, BookingError>> {
        let url = self.bookings_url();
        let payload = self.booking_request(&record, lang);
        async move {
            let request = Request::post(&url)
                .json(&payload?)
                .map_err(|e| BookingError::SubmitFailure(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| BookingError::SubmitFailure(e.to_string()))?;
            if !response.ok() {
                return Err(BookingError::SubmitFailure(format!("HTTP {}", response.status())));
            }
            let created: CreateBookingResponse = response
                .json()
                .await
                .map_err(|e| BookingError::SubmitFailure(e.to_string()))?;
            Ok(BookingConfirmation {
                booking_id: created.id.to_string(),
                message: created.uid,
            })
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> CalComScheduler {
        CalComScheduler::new(CalComConfig::from_values(Some("cal live"), Some("3332433"), None).unwrap())
    }

    fn record() -> BookingRecord {
        BookingRecord {
            date: "2024-06-10".into(),
            time: "09:30".into(),
            name: "Ivan".into(),
            email: "ivan@example.com".into(),
            phone: String::new(),
            message: "Hi".into(),
        }
    }

    #[test]
    fn slots_url_covers_the_calendar_window() {
        let url = scheduler().slots_url(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(
            url,
            "https://api.cal.com/v1/slots?apiKey=cal%20live&eventTypeId=3332433\
             &startTime=2024-06-10&endTime=2024-07-10&timeZone=Europe%2FMoscow"
        );
    }

    #[test]
    fn slot_map_collapses_to_sorted_times() {
        let body: SlotsResponse = serde_json::from_str(
            r#"{"slots": {
                "2024-06-10": [{"time": "2024-06-10T14:00:00+03:00"}, {"time": "2024-06-10T09:00:00+03:00"}],
                "2024-06-11": [{"time": "2024-06-11T09:00:00+03:00"}, {"time": "garbage"}]
            }}"#,
        )
        .unwrap();
        assert_eq!(times_of_day(&body), ["09:00", "14:00"]);
    }

    #[test]
    fn empty_slot_response_is_tolerated() {
        let body: SlotsResponse = serde_json::from_str("{}").unwrap();
        assert!(times_of_day(&body).is_empty());
    }

    #[test]
    fn booking_payload_matches_api_shape() {
        let payload = scheduler().booking_request(&record(), Language::En).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "eventTypeId": 3332433,
                "start": "2024-06-10T09:30:00",
                "responses": {"name": "Ivan", "email": "ivan@example.com", "notes": "Hi"},
                "timeZone": "Europe/Moscow",
                "language": "en",
                "metadata": {"phone": ""},
            })
        );
    }

    #[test]
    fn non_numeric_event_type_is_a_submit_failure() {
        let config = CalComConfig::from_values(Some("k"), Some("thirty-min"), None).unwrap();
        let err = CalComScheduler::new(config).booking_request(&record(), Language::Ru);
        assert!(matches!(err, Err(BookingError::SubmitFailure(_))));
    }
}
