use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_TIMEOUT_MS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Visible notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn push(&mut self, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast {
            id,
            message: message.into(),
        });
        id
    }

    /// Dismissing an id that is already gone is fine; the timer and the
    /// close button race for it.
    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|toast| toast.id != id);
    }
}

pub enum ToastAction {
    Push(String),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(message) => {
                next.push(message);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        next.into()
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub notify: Callback<String>,
}

#[hook]
pub fn use_toast() -> Callback<String> {
    use_context::<ToastContext>()
        .map(|ctx| ctx.notify)
        .unwrap_or_else(|| Callback::from(|message: String| log::warn!("{}", message)))
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub children: Children,
}

/// Non-blocking error notifications. The rest of the page stays usable
/// while a toast is up.
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let notify = {
        let queue = queue.dispatcher();
        Callback::from(move |message: String| queue.dispatch(ToastAction::Push(message)))
    };

    html! {
        <ContextProvider<ToastContext> context={ToastContext { notify }}>
            { for props.children.iter() }
            <div class="toast-stack" role="status" aria-live="polite">
                { for queue.items().iter().map(|toast| {
                    let on_dismiss = {
                        let queue = queue.dispatcher();
                        let id = toast.id;
                        Callback::from(move |_| queue.dispatch(ToastAction::Dismiss(id)))
                    };
                    html! {
                        <ToastItem key={toast.id} message={toast.message.clone()} {on_dismiss} />
                    }
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    message: String,
    on_dismiss: Callback<()>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_TIMEOUT_MS, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            (),
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast">
            <span class="toast-message">{ &props.message }</span>
            <button class="toast-close" aria-label="close" onclick={close}>{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push("Booking failed. Please try again.");
        let second = queue.push("Failed to load booking information.");
        assert_ne!(first, second);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, second);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }
}
