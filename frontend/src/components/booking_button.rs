use web_sys::Node;
use yew::prelude::*;

/// Provided by whichever booking modal is mounted.
#[derive(Clone, PartialEq)]
pub struct BookingContext {
    pub open: Callback<()>,
}

/// True when the click landed on the dimmed backdrop itself rather than on
/// the dialog inside it.
pub fn is_backdrop_click(e: &MouseEvent, overlay: &NodeRef) -> bool {
    match (e.target_dyn_into::<Node>(), overlay.get()) {
        (Some(target), Some(overlay)) => target == overlay,
        _ => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingButtonProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Any call-to-action that should open the booking modal.
#[function_component(BookingButton)]
pub fn booking_button(props: &BookingButtonProps) -> Html {
    let booking = use_context::<BookingContext>();

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        match &booking {
            Some(booking) => booking.open.emit(()),
            None => log::warn!("Booking button clicked with no booking modal mounted"),
        }
    });

    html! {
        <button
            class={classes!("cal-booking-btn", props.class.clone())}
            data-cal-link="booking"
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}
