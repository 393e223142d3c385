use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::booking::error::BookingError;
use crate::booking::record::{ContactFields, LeadRequest, PreferredTime};
use crate::booking::wizard::Generation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeadStep {
    #[default]
    Form,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadEffect {
    LockScroll,
    UnlockScroll,
    /// Clear every input of the form.
    ResetForm,
    Submit {
        generation: Generation,
        lead: LeadRequest,
    },
    ShowError(BookingError),
}

/// Single-form booking request: fill in, send, done.
#[derive(Debug, Default)]
pub struct LeadFlow {
    step: LeadStep,
    submitting: bool,
    is_open: bool,
    generation: Generation,
}

impl LeadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> LeadStep {
        self.step
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn open(&mut self) -> Vec<LeadEffect> {
        if self.is_open {
            return Vec::new();
        }
        self.generation = self.generation.next();
        self.is_open = true;
        self.step = LeadStep::Form;
        self.submitting = false;
        vec![LeadEffect::LockScroll]
    }

    pub fn submit(
        &mut self,
        fields: &ContactFields,
        preferred_time: PreferredTime,
        now: DateTime<Utc>,
    ) -> Vec<LeadEffect> {
        if !self.is_open || self.step != LeadStep::Form || self.submitting {
            debug!("Ignoring lead submission");
            return Vec::new();
        }
        if let Err(e) = fields.validate() {
            return vec![LeadEffect::ShowError(e)];
        }
        self.submitting = true;
        vec![LeadEffect::Submit {
            generation: self.generation,
            lead: LeadRequest::new(fields, preferred_time, now),
        }]
    }

    pub fn submit_finished(
        &mut self,
        generation: Generation,
        result: Result<(), BookingError>,
    ) -> Vec<LeadEffect> {
        if !self.is_open || generation != self.generation {
            debug!("Dropping stale lead result from {:?}", generation);
            return Vec::new();
        }
        self.submitting = false;
        match result {
            Ok(()) => {
                info!("Lead request sent");
                self.step = LeadStep::Success;
                Vec::new()
            }
            Err(e) => {
                warn!("Booking error: {}", e);
                vec![LeadEffect::ShowError(e)]
            }
        }
    }

    pub fn close(&mut self) -> Vec<LeadEffect> {
        if !self.is_open {
            return Vec::new();
        }
        self.generation = self.generation.next();
        self.is_open = false;
        self.submitting = false;
        self.step = LeadStep::Form;
        vec![LeadEffect::UnlockScroll, LeadEffect::ResetForm]
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap()
    }

    fn ivan() -> ContactFields {
        ContactFields {
            name: "Ivan".into(),
            email: "ivan@example.com".into(),
            phone: "+7 900 000-00-00".into(),
            ..Default::default()
        }
    }

    fn submitted(flow: &mut LeadFlow) -> Generation {
        match flow.submit(&ivan(), PreferredTime::Evening, now()).as_slice() {
            [LeadEffect::Submit { generation, lead }] => {
                assert_eq!(lead.preferred_time, PreferredTime::Evening);
                assert_eq!(lead.phone, "+7 900 000-00-00");
                *generation
            }
            other => panic!("expected a submit effect, got {:?}", other),
        }
    }

    #[test]
    fn open_submit_success() {
        let mut flow = LeadFlow::new();
        assert_eq!(flow.open(), vec![LeadEffect::LockScroll]);

        let gen = submitted(&mut flow);
        assert!(flow.is_submitting());

        assert!(flow.submit_finished(gen, Ok(())).is_empty());
        assert_eq!(flow.step(), LeadStep::Success);
        assert!(!flow.is_submitting());
    }

    #[test]
    fn failure_keeps_the_form_and_reenables_submit() {
        let mut flow = LeadFlow::new();
        flow.open();
        let gen = submitted(&mut flow);

        let err = BookingError::SubmitFailure("offline".into());
        assert_eq!(flow.submit_finished(gen, Err(err.clone())), vec![LeadEffect::ShowError(err)]);
        assert_eq!(flow.step(), LeadStep::Form);
        assert!(!flow.is_submitting());
        submitted(&mut flow);
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut flow = LeadFlow::new();
        flow.open();
        submitted(&mut flow);
        assert!(flow.submit(&ivan(), PreferredTime::Any, now()).is_empty());
    }

    #[test]
    fn close_resets_and_drops_late_result() {
        let mut flow = LeadFlow::new();
        flow.open();
        let gen = submitted(&mut flow);

        assert_eq!(flow.close(), vec![LeadEffect::UnlockScroll, LeadEffect::ResetForm]);
        flow.open();

        assert!(flow.submit_finished(gen, Ok(())).is_empty());
        assert_eq!(flow.step(), LeadStep::Form);
        assert!(!flow.is_submitting());
    }

    #[test]
    fn invalid_fields_are_reported_not_sent() {
        let mut flow = LeadFlow::new();
        flow.open();
        let fields = ContactFields { name: String::new(), ..ivan() };
        assert_eq!(
            flow.submit(&fields, PreferredTime::Any, now()),
            vec![LeadEffect::ShowError(BookingError::MissingField("name"))]
        );
        assert!(!flow.is_submitting());
    }
}
