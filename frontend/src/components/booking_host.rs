use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::booking::scheduler::{CalComScheduler, Scheduler, SimulatedLeadSink, SimulatedScheduler};
use crate::components::booking_modal::{CalBookingModal, SchedulerHandle};
use crate::components::lead_modal::{LeadModal, LeadSinkHandle};
use crate::components::notification::use_toast;
use crate::config::{self, BookingMode, SIMULATED_LATENCY_MS};
use crate::i18n::context::use_language;

fn make_scheduler() -> Rc<dyn Scheduler> {
    match config::cal_com_config() {
        Some(cal) => {
            info!("Booking through Cal.com event type {}", cal.event_type_id);
            Rc::new(CalComScheduler::new(cal))
        }
        None => {
            info!("No Cal.com credentials, simulating bookings");
            Rc::new(SimulatedScheduler {
                latency_ms: SIMULATED_LATENCY_MS,
            })
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingHostProps {
    pub children: Children,
}

/// Mounts the booking modal chosen at build time around the page.
#[function_component(BookingHost)]
pub fn booking_host(props: &BookingHostProps) -> Html {
    let lang = use_language().active;
    let on_error = use_toast();
    let scheduler = use_state(|| SchedulerHandle(make_scheduler()));
    let sink = use_state(|| {
        LeadSinkHandle(Rc::new(SimulatedLeadSink {
            latency_ms: SIMULATED_LATENCY_MS,
        }))
    });

    match config::booking_mode() {
        BookingMode::Calendar => html! {
            <CalBookingModal scheduler={(*scheduler).clone()} {lang} {on_error}>
                { for props.children.iter() }
            </CalBookingModal>
        },
        BookingMode::LeadForm => html! {
            <LeadModal sink={(*sink).clone()} {lang} {on_error}>
                { for props.children.iter() }
            </LeadModal>
        },
    }
}
