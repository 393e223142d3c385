//! Four-step booking flow: date, time, contact details, confirmation.
//!
//! The wizard never touches the DOM or the network. Every transition returns
//! the [`Effect`]s the hosting component has to carry out, and asynchronous
//! results come back through [`BookingWizard::slots_loaded`],
//! [`BookingWizard::advance_elapsed`] and [`BookingWizard::submit_finished`]
//! together with the [`Generation`] they were started under. Results from a
//! session that has since been closed are dropped.

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::booking::error::BookingError;
use crate::booking::record::{BookingConfirmation, BookingRecord, ContactFields};
use crate::booking::slots::{calendar_from, CalendarDay, TIME_SLOTS};

/// Pause between a selection and the automatic move to the next step.
pub const ADVANCE_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    #[default]
    DateSelect,
    TimeSelect,
    ContactForm,
    Success,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::DateSelect, Step::TimeSelect, Step::ContactForm, Step::Success];

    pub fn number(self) -> u8 {
        match self {
            Step::DateSelect => 1,
            Step::TimeSelect => 2,
            Step::ContactForm => 3,
            Step::Success => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        Step::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn next(self) -> Step {
        Step::from_number((self.number() + 1).min(4)).unwrap_or(Step::Success)
    }

    pub fn back(self) -> Step {
        Step::from_number(self.number().saturating_sub(1).max(1)).unwrap_or(Step::DateSelect)
    }

    /// Per-step container class, `cal-step-N`.
    pub fn class(self) -> String {
        format!("cal-step-{}", self.number())
    }
}

/// Identifies one open-to-close cycle of the modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    pub(crate) fn next(self) -> Generation {
        Generation(self.0.wrapping_add(1))
    }
}

/// Transient state of one booking attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingSession {
    pub step: Step,
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<String>,
    pub time_slots: Vec<String>,
    pub loading: bool,
    pub load_failed: bool,
    pub submitting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    LockScroll,
    UnlockScroll,
    /// Clear the contact form inputs.
    ResetForm,
    LoadSlots(Generation),
    ScheduleAdvance {
        generation: Generation,
        from: Step,
        delay_ms: u32,
    },
    Submit {
        generation: Generation,
        record: BookingRecord,
    },
    ShowError(BookingError),
}

#[derive(Debug, Default)]
pub struct BookingWizard {
    session: BookingSession,
    generation: Generation,
    is_open: bool,
    calendar: Vec<CalendarDay>,
    candidate_slots: Vec<String>,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &BookingSession {
        &self.session
    }

    pub fn step(&self) -> Step {
        self.session.step
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn calendar(&self) -> &[CalendarDay] {
        &self.calendar
    }

    pub fn is_date_selected(&self, date: NaiveDate) -> bool {
        self.session.selected_date == Some(date)
    }

    pub fn is_time_selected(&self, time: &str) -> bool {
        self.session.selected_time.as_deref() == Some(time)
    }

    /// Starts a fresh session at the date step and kicks off the slot load.
    pub fn open(&mut self, today: NaiveDate) -> Vec<Effect> {
        if self.is_open {
            debug!("Booking modal already open");
            return Vec::new();
        }
        self.generation = self.generation.next();
        self.is_open = true;
        self.session = BookingSession {
            loading: true,
            ..BookingSession::default()
        };
        self.calendar = calendar_from(today);
        info!("Booking modal opened");
        vec![Effect::LockScroll, Effect::LoadSlots(self.generation)]
    }

    /// Manual retry after a failed load. There is no automatic one.
    pub fn reload_slots(&mut self) -> Vec<Effect> {
        if !self.is_open || !self.session.load_failed {
            return Vec::new();
        }
        self.session.load_failed = false;
        self.session.loading = true;
        vec![Effect::LoadSlots(self.generation)]
    }

    pub fn slots_loaded(
        &mut self,
        generation: Generation,
        result: Result<Vec<String>, BookingError>,
    ) -> Vec<Effect> {
        if !self.is_current(generation, "slot load") {
            return Vec::new();
        }
        self.session.loading = false;
        match result {
            Ok(slots) => {
                self.candidate_slots = slots;
                Vec::new()
            }
            Err(e) => {
                warn!("Error loading booking data: {}", e);
                self.session.load_failed = true;
                vec![Effect::ShowError(e)]
            }
        }
    }

    /// Records the day and regenerates the time grid. Only the date step
    /// schedules an advance; picking another day from the time step just
    /// refreshes the grid.
    pub fn select_date(&mut self, date: NaiveDate) -> Vec<Effect> {
        let step = self.session.step;
        if !self.is_open || self.session.loading || !matches!(step, Step::DateSelect | Step::TimeSelect) {
            debug!("Ignoring date selection at {:?}", step);
            return Vec::new();
        }
        self.session.selected_date = Some(date);
        self.session.selected_time = None;
        self.session.time_slots = self.slots_for_day();

        if step == Step::DateSelect {
            vec![self.schedule_advance(step)]
        } else {
            Vec::new()
        }
    }

    pub fn select_time(&mut self, time: &str) -> Vec<Effect> {
        if !self.is_open || self.session.step != Step::TimeSelect {
            debug!("Ignoring time selection at {:?}", self.session.step);
            return Vec::new();
        }
        if !self.session.time_slots.iter().any(|slot| slot == time) {
            warn!("Time {} is not one of the offered slots", time);
            return Vec::new();
        }
        self.session.selected_time = Some(time.to_string());
        vec![self.schedule_advance(Step::TimeSelect)]
    }

    /// Fired when an auto-advance delay runs out. The move only happens if the
    /// visitor is still on the step that scheduled it and that step's
    /// selection is still made.
    pub fn advance_elapsed(&mut self, generation: Generation, from: Step) {
        if !self.is_current(generation, "auto-advance") {
            return;
        }
        if self.session.step != from {
            debug!("Skipping auto-advance from {:?}, now at {:?}", from, self.session.step);
            return;
        }
        let selected = match from {
            Step::DateSelect => self.session.selected_date.is_some(),
            Step::TimeSelect => self.session.selected_time.is_some(),
            Step::ContactForm | Step::Success => false,
        };
        if selected {
            self.next();
        } else {
            debug!("Skipping auto-advance from {:?}, selection was cleared", from);
        }
    }

    pub fn next(&mut self) -> Step {
        self.session.step = self.session.step.next();
        self.session.step
    }

    pub fn back(&mut self) -> Step {
        if self.session.submitting {
            return self.session.step;
        }
        self.session.step = self.session.step.back();
        self.session.step
    }

    pub fn submit_contact(&mut self, fields: &ContactFields) -> Vec<Effect> {
        if !self.is_open || self.session.step != Step::ContactForm {
            return Vec::new();
        }
        if self.session.submitting {
            debug!("Submission already in flight");
            return Vec::new();
        }
        if let Err(e) = fields.validate() {
            return vec![Effect::ShowError(e)];
        }
        let (Some(date), Some(time)) = (self.session.selected_date, self.session.selected_time.as_deref()) else {
            return vec![Effect::ShowError(BookingError::IncompleteSelection)];
        };

        let record = BookingRecord::new(&date.format("%Y-%m-%d").to_string(), time, fields);
        self.session.submitting = true;
        vec![Effect::Submit {
            generation: self.generation,
            record,
        }]
    }

    pub fn submit_finished(
        &mut self,
        generation: Generation,
        result: Result<BookingConfirmation, BookingError>,
    ) -> Vec<Effect> {
        if !self.is_current(generation, "booking submission") {
            return Vec::new();
        }
        self.session.submitting = false;
        match result {
            Ok(confirmation) => {
                info!("Booking confirmed: {}", confirmation.booking_id);
                self.session.step = Step::Success;
                Vec::new()
            }
            Err(e) => {
                warn!("Booking failed: {}", e);
                vec![Effect::ShowError(e)]
            }
        }
    }

    /// Discards the session from any step. Anything still in flight will be
    /// ignored when it completes.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.is_open {
            return Vec::new();
        }
        self.generation = self.generation.next();
        self.is_open = false;
        self.session = BookingSession::default();
        self.candidate_slots.clear();
        info!("Booking modal closed");
        vec![Effect::UnlockScroll, Effect::ResetForm]
    }

    fn slots_for_day(&self) -> Vec<String> {
        if self.candidate_slots.is_empty() {
            TIME_SLOTS.iter().map(|slot| slot.to_string()).collect()
        } else {
            self.candidate_slots.clone()
        }
    }

    fn schedule_advance(&self, from: Step) -> Effect {
        Effect::ScheduleAdvance {
            generation: self.generation,
            from,
            delay_ms: ADVANCE_DELAY_MS,
        }
    }

    fn is_current(&self, generation: Generation, what: &str) -> bool {
        let current = self.is_open && generation == self.generation;
        if !current {
            debug!("Dropping stale {} result from {:?}", what, generation);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn today() -> NaiveDate {
        day("2024-06-05")
    }

    fn ivan() -> ContactFields {
        ContactFields {
            name: "Ivan".into(),
            email: "ivan@example.com".into(),
            ..Default::default()
        }
    }

    fn run_advance(wizard: &mut BookingWizard, effects: &[Effect]) {
        for effect in effects {
            if let Effect::ScheduleAdvance { generation, from, .. } = effect {
                wizard.advance_elapsed(*generation, *from);
            }
        }
    }

    /// Opens the modal and completes the slot load with the fixed schedule.
    fn opened() -> BookingWizard {
        let mut wizard = BookingWizard::new();
        let effects = wizard.open(today());
        let gen = wizard.generation();
        assert_eq!(effects, vec![Effect::LockScroll, Effect::LoadSlots(gen)]);
        assert!(wizard.slots_loaded(gen, Ok(TIME_SLOTS.iter().map(|slot| slot.to_string()).collect())).is_empty());
        wizard
    }

    fn at_contact_form() -> BookingWizard {
        let mut wizard = opened();
        let effects = wizard.select_date(day("2024-06-10"));
        run_advance(&mut wizard, &effects);
        let effects = wizard.select_time("14:30");
        run_advance(&mut wizard, &effects);
        assert_eq!(wizard.step(), Step::ContactForm);
        wizard
    }

    #[test]
    fn step_numbers_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(5), None);
        assert_eq!(Step::ContactForm.class(), "cal-step-3");
    }

    #[test]
    fn navigation_is_clamped() {
        let mut wizard = opened();
        assert_eq!(wizard.back(), Step::DateSelect);
        assert_eq!(wizard.next(), Step::TimeSelect);
        assert_eq!(wizard.next(), Step::ContactForm);
        assert_eq!(wizard.next(), Step::Success);
        assert_eq!(wizard.next(), Step::Success);
        assert_eq!(wizard.back(), Step::ContactForm);
    }

    #[test]
    fn selecting_a_date_marks_exactly_that_day() {
        let mut wizard = opened();
        wizard.select_date(day("2024-06-07"));
        wizard.select_date(day("2024-06-10"));

        let marked: Vec<_> = wizard
            .calendar()
            .iter()
            .filter(|d| wizard.is_date_selected(d.date))
            .collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].iso(), "2024-06-10");
    }

    #[test]
    fn date_selection_advances_to_fixed_schedule() {
        let mut wizard = opened();
        let effects = wizard.select_date(day("2024-06-10"));
        assert_eq!(
            effects,
            vec![Effect::ScheduleAdvance {
                generation: wizard.generation(),
                from: Step::DateSelect,
                delay_ms: ADVANCE_DELAY_MS,
            }]
        );
        // nothing moves until the delay runs out
        assert_eq!(wizard.step(), Step::DateSelect);

        run_advance(&mut wizard, &effects);

        assert_eq!(wizard.step(), Step::TimeSelect);
        let slots = &wizard.session().time_slots;
        assert_eq!(slots.len(), 13);
        assert_eq!(&slots[..6], ["09:00", "09:30", "10:00", "10:30", "11:00", "11:30"]);
        assert_eq!(&slots[6..], ["14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00"]);
    }

    #[test]
    fn reselecting_date_on_time_step_stays_put() {
        let mut wizard = opened();
        let effects = wizard.select_date(day("2024-06-10"));
        run_advance(&mut wizard, &effects);

        let effects = wizard.select_date(day("2024-06-11"));

        assert!(effects.is_empty());
        assert_eq!(wizard.step(), Step::TimeSelect);
        assert_eq!(wizard.session().selected_date, Some(day("2024-06-11")));
        assert_eq!(wizard.session().time_slots.len(), 13);
    }

    #[test]
    fn new_date_cancels_pending_time_advance() {
        let mut wizard = opened();
        let effects = wizard.select_date(day("2024-06-10"));
        run_advance(&mut wizard, &effects);
        let pending = wizard.select_time("10:00");

        wizard.select_date(day("2024-06-11"));
        run_advance(&mut wizard, &pending);

        assert_eq!(wizard.step(), Step::TimeSelect);
        assert_eq!(wizard.session().selected_time, None);

        // choosing a time again moves on as usual
        let effects = wizard.select_time("11:00");
        run_advance(&mut wizard, &effects);
        assert_eq!(wizard.step(), Step::ContactForm);
        assert_eq!(wizard.submit_contact(&ivan()).len(), 1);
        assert!(wizard.session().submitting);
    }

    #[test]
    fn only_one_time_is_marked() {
        let mut wizard = opened();
        let effects = wizard.select_date(day("2024-06-10"));
        run_advance(&mut wizard, &effects);

        wizard.select_time("09:00");
        wizard.select_time("16:30");

        let marked: Vec<_> = wizard
            .session()
            .time_slots
            .iter()
            .filter(|t| wizard.is_time_selected(t))
            .collect();
        assert_eq!(marked, ["16:30"]);
    }

    #[test]
    fn unknown_time_is_rejected() {
        let mut wizard = opened();
        let effects = wizard.select_date(day("2024-06-10"));
        run_advance(&mut wizard, &effects);
        assert!(wizard.select_time("12:15").is_empty());
        assert_eq!(wizard.session().selected_time, None);
    }

    #[test]
    fn going_back_during_the_delay_cancels_the_advance() {
        let mut wizard = opened();
        let effects = wizard.select_date(day("2024-06-10"));
        run_advance(&mut wizard, &effects);
        let effects = wizard.select_time("10:00");

        wizard.back();
        run_advance(&mut wizard, &effects);

        assert_eq!(wizard.step(), Step::DateSelect);
    }

    #[test]
    fn submit_hands_record_to_scheduler_and_confirms() {
        let mut wizard = at_contact_form();
        let effects = wizard.submit_contact(&ivan());

        let expected = BookingRecord {
            date: "2024-06-10".into(),
            time: "14:30".into(),
            name: "Ivan".into(),
            email: "ivan@example.com".into(),
            phone: String::new(),
            message: String::new(),
        };
        assert_eq!(
            effects,
            vec![Effect::Submit {
                generation: wizard.generation(),
                record: expected,
            }]
        );
        assert!(wizard.session().submitting);

        let confirmation = BookingConfirmation {
            booking_id: "demo_1".into(),
            message: String::new(),
        };
        let effects = wizard.submit_finished(wizard.generation(), Ok(confirmation));
        assert!(effects.is_empty());
        assert_eq!(wizard.step(), Step::Success);
        assert!(!wizard.session().submitting);
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut wizard = at_contact_form();
        assert_eq!(wizard.submit_contact(&ivan()).len(), 1);
        assert!(wizard.submit_contact(&ivan()).is_empty());
    }

    #[test]
    fn failed_submit_stays_on_contact_form() {
        let mut wizard = at_contact_form();
        wizard.submit_contact(&ivan());

        let err = BookingError::SubmitFailure("503".into());
        let effects = wizard.submit_finished(wizard.generation(), Err(err.clone()));

        assert_eq!(effects, vec![Effect::ShowError(err)]);
        assert_eq!(wizard.step(), Step::ContactForm);
        assert!(!wizard.session().submitting);
        // the visitor can simply try again
        assert_eq!(wizard.submit_contact(&ivan()).len(), 1);
    }

    #[test]
    fn missing_fields_never_reach_the_scheduler() {
        let mut wizard = at_contact_form();
        let fields = ContactFields {
            email: String::new(),
            ..ivan()
        };
        assert_eq!(
            wizard.submit_contact(&fields),
            vec![Effect::ShowError(BookingError::MissingField("email"))]
        );
        assert!(!wizard.session().submitting);
    }

    #[test]
    fn load_failure_keeps_date_step_and_allows_manual_retry() {
        let mut wizard = BookingWizard::new();
        wizard.open(today());
        let gen = wizard.generation();

        let err = BookingError::LoadFailure("timeout".into());
        assert_eq!(wizard.slots_loaded(gen, Err(err.clone())), vec![Effect::ShowError(err)]);
        assert_eq!(wizard.step(), Step::DateSelect);
        assert!(wizard.session().load_failed);

        assert_eq!(wizard.reload_slots(), vec![Effect::LoadSlots(gen)]);
        assert!(wizard.session().loading);
    }

    #[test]
    fn reopening_after_close_starts_clean() {
        let mut wizard = at_contact_form();
        assert_eq!(wizard.close(), vec![Effect::UnlockScroll, Effect::ResetForm]);
        assert!(!wizard.is_open());

        wizard.open(today());

        assert_eq!(wizard.step(), Step::DateSelect);
        assert_eq!(wizard.session().selected_date, None);
        assert_eq!(wizard.session().selected_time, None);
        assert!(wizard.session().time_slots.is_empty());
    }

    #[test]
    fn late_results_from_a_closed_session_are_dropped() {
        let mut wizard = at_contact_form();
        wizard.submit_contact(&ivan());
        let stale = wizard.generation();

        wizard.close();
        wizard.open(today());
        let ok = BookingConfirmation::default();

        assert!(wizard.submit_finished(stale, Ok(ok)).is_empty());
        assert_eq!(wizard.step(), Step::DateSelect);

        assert!(wizard
            .slots_loaded(stale, Err(BookingError::LoadFailure("late".into())))
            .is_empty());
        assert!(wizard.session().loading);
        assert!(!wizard.session().load_failed);
    }

    #[test]
    fn pending_advance_does_not_leak_into_next_session() {
        let mut wizard = opened();
        let effects = wizard.select_date(day("2024-06-10"));
        wizard.close();
        wizard.open(today());

        run_advance(&mut wizard, &effects);

        assert_eq!(wizard.step(), Step::DateSelect);
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let mut wizard = BookingWizard::new();
        assert!(wizard.close().is_empty());
    }
}
