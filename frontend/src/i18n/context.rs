use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, PageTransitionEvent};
use yew::prelude::*;

use crate::dom;
use crate::i18n::language::Language;
use crate::i18n::store::LanguageStore;
use crate::i18n::translatable::Translatable;
use crate::storage::BrowserStorage;

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub active: Language,
    /// Takes a raw language tag, as carried by `data-lang`.
    pub select: Callback<String>,
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(|| LanguageContext {
        active: Language::default(),
        select: Callback::from(|_| ()),
    })
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let store = use_mut_ref(|| LanguageStore::resolve_initial(BrowserStorage));
    let active = use_state(|| store.borrow().active());

    // document lang follows the active language
    use_effect_with_deps(
        |lang: &Language| {
            dom::set_document_lang(lang.code());
            || ()
        },
        *active,
    );

    // bfcache restores skip load-time code; `pageshow` with `persisted` is the only hook
    {
        let store = store.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::wrap(Box::new(move |event: PageTransitionEvent| {
                    if event.persisted() {
                        let lang = store.borrow_mut().on_restore();
                        active.set(lang);
                    }
                }) as Box<dyn FnMut(PageTransitionEvent)>);

                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "pageshow",
                        listener.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "pageshow",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let select = {
        let store = store.clone();
        let active = active.clone();
        Callback::from(move |code: String| {
            if let Ok(lang) = store.borrow_mut().select_code(&code) {
                info!("Language selected: {}", lang);
                active.set(lang);
            }
        })
    };

    let context = LanguageContext {
        active: *active,
        select,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<LanguageContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrProps {
    pub ru: AttrValue,
    #[prop_or_default]
    pub en: AttrValue,
}

/// Translatable text node.
#[function_component(Tr)]
pub fn tr(props: &TrProps) -> Html {
    let lang = use_language().active;
    // keyed on the props too: a reused node can be handed different text
    let text = use_memo(
        |(ru, en, lang): &(AttrValue, AttrValue, Language)| Translatable::text_for(ru, en, *lang),
        (props.ru.clone(), props.en.clone(), lang),
    );

    html! { <>{ (*text).clone() }</> }
}

fn clicked_lang_tag(e: &MouseEvent) -> Option<String> {
    e.target_dyn_into::<Element>()?
        .closest(".lang-btn")
        .ok()??
        .get_attribute("data-lang")
}

/// RU / EN buttons. The active one carries the `active` class.
#[function_component(LangSwitcher)]
pub fn lang_switcher() -> Html {
    let ctx = use_language();

    html! {
        <div class="lang-switcher">
            { for Language::all().iter().map(|lang| {
                let lang = *lang;
                let onclick = {
                    let select = ctx.select.clone();
                    Callback::from(move |e: MouseEvent| {
                        if let Some(code) = clicked_lang_tag(&e) {
                            select.emit(code);
                        }
                    })
                };
                html! {
                    <button
                        class={classes!("lang-btn", (ctx.active == lang).then(|| "active"))}
                        data-lang={lang.code()}
                        {onclick}
                    >
                        { lang.label() }
                    </button>
                }
            }) }
        </div>
    }
}
