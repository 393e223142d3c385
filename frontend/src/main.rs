use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod consent;
mod dom;
mod storage;
mod i18n {
    pub mod language;
    pub mod store;
    pub mod translatable;
    pub mod context;
}
mod booking {
    pub mod error;
    pub mod record;
    pub mod slots;
    pub mod wizard;
    pub mod lead;
    pub mod scheduler;
}
mod components {
    pub mod notification;
    pub mod booking_button;
    pub mod booking_modal;
    pub mod lead_modal;
    pub mod booking_host;
    pub mod scroll;
    pub mod accordion;
    pub mod expandable_card;
    pub mod cookie_banner;
    pub mod cases_modal;
}
mod pages {
    pub mod home;
    pub mod cases;
    pub mod faq;
}

use components::{
    booking_button::BookingButton,
    booking_host::BookingHost,
    cases_modal::CasesModal,
    cookie_banner::CookieBanner,
    notification::ToastHost,
    scroll::{use_scrolled_past, AnchorLink, BackToTop},
};
use i18n::context::{LangSwitcher, LanguageProvider, Tr};
use pages::{cases::Cases, faq::Faq, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cases")]
    Cases,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Cases => {
            info!("Rendering Cases page");
            html! { <Cases /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_open_cases: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(config::HEADER_SOLID_AFTER_PX);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let open_cases = {
        let close_menu = close_menu.clone();
        let on_open_cases = props.on_open_cases.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            close_menu.emit(());
            on_open_cases.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Studio"}
                </Link<Route>>

                <button class="burger-menu" aria-label="menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-container", (*menu_open).then(|| "active"))}>
                    <AnchorLink href="/#services" class="nav-link" on_follow={close_menu.clone()}>
                        <Tr ru="Услуги" en="Services" />
                    </AnchorLink>
                    <a id="cases-nav-link" href="/cases" class="nav-link" onclick={open_cases}>
                        <Tr ru="Кейсы" en="Cases" />
                    </a>
                    <AnchorLink href="/#faq" class="nav-link" on_follow={close_menu.clone()}>
                        <Tr ru="Вопросы" en="FAQ" />
                    </AnchorLink>
                    <LangSwitcher />
                    <BookingButton class="nav-cta">
                        <Tr ru="Записаться" en="Book a call" />
                    </BookingButton>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let cases_open = use_state(|| false);

    let open_cases = {
        let cases_open = cases_open.clone();
        Callback::from(move |_| cases_open.set(true))
    };
    let close_cases = {
        let cases_open = cases_open.clone();
        Callback::from(move |_| cases_open.set(false))
    };

    html! {
        <BrowserRouter>
            <LanguageProvider>
                <ToastHost>
                    <BookingHost>
                        <Nav on_open_cases={open_cases} />
                        <Switch<Route> render={switch} />
                        <CasesModal open={*cases_open} on_close={close_cases} />
                        <BackToTop />
                        <CookieBanner />
                    </BookingHost>
                </ToastHost>
            </LanguageProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
