/// Fake round-trip time used by the simulated scheduler and lead sink.
pub const SIMULATED_LATENCY_MS: u32 = 1500;

/// How long an error toast stays up unless dismissed.
pub const TOAST_TIMEOUT_MS: u32 = 6000;

/// Scroll offsets for the header background and the back-to-top button.
pub const HEADER_SOLID_AFTER_PX: f64 = 100.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;

const CAL_COM_API: &str = "https://api.cal.com/v1";

/// Which booking modal the site mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingMode {
    /// Date, time and contact steps against a scheduling API.
    Calendar,
    /// One contact form; the team follows up by hand.
    LeadForm,
}

impl BookingMode {
    pub fn from_value(value: Option<&str>) -> BookingMode {
        match value.map(str::trim) {
            Some("lead") | Some("simple") => BookingMode::LeadForm,
            _ => BookingMode::Calendar,
        }
    }
}

/// Picked at build time: `BOOKING_MODE=lead trunk build`.
pub fn booking_mode() -> BookingMode {
    BookingMode::from_value(option_env!("BOOKING_MODE"))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalComConfig {
    pub base_url: String,
    pub api_key: String,
    pub event_type_id: String,
    pub time_zone: String,
}

impl CalComConfig {
    pub fn from_values(api_key: Option<&str>, event_type_id: Option<&str>, time_zone: Option<&str>) -> Option<Self> {
        let api_key = api_key.map(str::trim).filter(|k| !k.is_empty())?;
        let event_type_id = event_type_id.map(str::trim).filter(|id| !id.is_empty())?;
        Some(Self {
            base_url: CAL_COM_API.to_string(),
            api_key: api_key.to_string(),
            event_type_id: event_type_id.to_string(),
            time_zone: time_zone.unwrap_or("Europe/Moscow").to_string(),
        })
    }
}

/// Real Cal.com integration is only compiled in when both `CAL_API_KEY` and
/// `CAL_EVENT_TYPE_ID` are set; otherwise bookings are simulated.
pub fn cal_com_config() -> Option<CalComConfig> {
    CalComConfig::from_values(
        option_env!("CAL_API_KEY"),
        option_env!("CAL_EVENT_TYPE_ID"),
        option_env!("CAL_TIME_ZONE"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_is_the_default_modal() {
        assert_eq!(BookingMode::from_value(None), BookingMode::Calendar);
        assert_eq!(BookingMode::from_value(Some("whatever")), BookingMode::Calendar);
        assert_eq!(BookingMode::from_value(Some("lead")), BookingMode::LeadForm);
    }

    #[test]
    fn cal_com_needs_key_and_event_type() {
        assert_eq!(CalComConfig::from_values(None, Some("3332433"), None), None);
        assert_eq!(CalComConfig::from_values(Some(" "), Some("3332433"), None), None);
        assert_eq!(CalComConfig::from_values(Some("cal_live_x"), None, None), None);

        let config = CalComConfig::from_values(Some("cal_live_x"), Some("3332433"), None).unwrap();
        assert_eq!(config.event_type_id, "3332433");
        assert_eq!(config.time_zone, "Europe/Moscow");
    }
}
