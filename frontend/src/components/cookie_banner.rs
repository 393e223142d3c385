use yew::prelude::*;

use crate::consent::{record_consent, stored_consent, Consent};
use crate::i18n::context::Tr;
use crate::storage::BrowserStorage;

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let visible = use_state(|| stored_consent(&BrowserStorage).is_none());

    let answer = |consent: Consent| {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            record_consent(&BrowserStorage, consent);
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="cookie-banner" role="dialog">
            <p>
                <Tr
                    ru="Мы используем cookie, чтобы сайт работал лучше."
                    en="We use cookies to make this site work better."
                />
            </p>
            <div class="cookie-actions">
                <button class="cookie-accept" onclick={answer(Consent::Accepted)}>
                    <Tr ru="Принять" en="Accept" />
                </button>
                <button class="cookie-decline" onclick={answer(Consent::Declined)}>
                    <Tr ru="Отклонить" en="Decline" />
                </button>
            </div>
        </div>
    }
}
