use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::booking_button::BookingButton;
use crate::components::expandable_card::ExpandableCard;
use crate::components::scroll::{AnchorLink, ScrollReveal};
use crate::dom;
use crate::i18n::context::Tr;
use crate::pages::cases::CASES;
use crate::pages::faq::FaqList;
use crate::Route;

struct Service {
    icon: &'static str,
    title_ru: &'static str,
    title_en: &'static str,
    text_ru: &'static str,
    text_en: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "🌐",
        title_ru: "Веб-разработка",
        title_en: "Web development",
        text_ru: "Сайты и веб-приложения, которые быстро загружаются и легко поддерживаются.",
        text_en: "Sites and web apps that load fast and are easy to maintain.",
    },
    Service {
        icon: "⚙️",
        title_ru: "Автоматизация",
        title_en: "Automation",
        text_ru: "Убираем ручную работу из ваших процессов и связываем системы между собой.",
        text_en: "We take manual work out of your processes and connect your systems.",
    },
    Service {
        icon: "📊",
        title_ru: "Аналитика",
        title_en: "Analytics",
        text_ru: "Панели и отчеты, которые показывают, что происходит в бизнесе прямо сейчас.",
        text_en: "Dashboards and reports that show what is happening in the business right now.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let hero_ready = use_state(|| false);

    {
        let hero_ready = hero_ready.clone();
        use_effect_with_deps(
            move |_| {
                dom::scroll_to_top();
                hero_ready.set(true);
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class={classes!("hero-content", (*hero_ready).then_some("animated"))}>
                    <h1 class="hero-title">
                        <Tr ru="Цифровые решения для вашего бизнеса" en="Digital solutions for your business" />
                    </h1>
                    <p class="hero-subtitle">
                        <Tr
                            ru="Разрабатываем сайты, автоматизируем процессы и помогаем расти."
                            en="We build websites, automate processes and help you grow."
                        />
                    </p>
                    <div class="hero-cta-group">
                        <BookingButton class="hero-cta">
                            <Tr ru="Записаться на консультацию" en="Book a consultation" />
                        </BookingButton>
                        <AnchorLink href="#services" class="hero-secondary">
                            <Tr ru="Наши услуги" en="Our services" />
                        </AnchorLink>
                    </div>
                </div>
            </header>

            <section id="services" class="services-section">
                <h2><Tr ru="Услуги" en="Services" /></h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|s| html! {
                        <ScrollReveal class="service-card">
                            <div class="service-icon">{ s.icon }</div>
                            <h3><Tr ru={s.title_ru} en={s.title_en} /></h3>
                            <p><Tr ru={s.text_ru} en={s.text_en} /></p>
                        </ScrollReveal>
                    }) }
                </div>
            </section>

            <section id="cases" class="cases-preview">
                <h2><Tr ru="Кейсы" en="Case Studies" /></h2>
                <div class="cases-grid">
                    { for CASES.iter().map(|case| html! {
                        <ScrollReveal>
                            <ExpandableCard>
                                <h3><Tr ru={case.title_ru} en={case.title_en} /></h3>
                                <p><Tr ru={case.summary_ru} en={case.summary_en} /></p>
                                <div class="card-details">
                                    <p><Tr ru={case.details_ru} en={case.details_en} /></p>
                                </div>
                            </ExpandableCard>
                        </ScrollReveal>
                    }) }
                </div>
                <Link<Route> to={Route::Cases} classes="section-link">
                    <Tr ru="Все кейсы" en="All case studies" />
                </Link<Route>>
            </section>

            <section id="faq" class="faq-section">
                <h2><Tr ru="Частые вопросы" en="FAQ" /></h2>
                <FaqList />
            </section>

            <section id="contact" class="footer-cta">
                <ScrollReveal>
                    <h2><Tr ru="Готовы начать?" en="Ready to start?" /></h2>
                    <p>
                        <Tr
                            ru="Выберите удобное время, и мы обсудим ваш проект."
                            en="Pick a time that suits you and we will discuss your project."
                        />
                    </p>
                    <BookingButton class="cta-button">
                        <Tr ru="Запланировать встречу" en="Book a meeting" />
                    </BookingButton>
                </ScrollReveal>
            </section>

            <style>
                {r#"
                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 2rem 4rem;
                    background: linear-gradient(135deg, #0b1a2e 0%, #12355b 100%);
                    color: #fff;
                    text-align: center;
                }

                .hero-content {
                    max-width: 760px;
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .hero-content.animated {
                    opacity: 1;
                    transform: none;
                }

                .hero-title {
                    font-size: 3rem;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 2.5rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .services-section,
                .cases-preview,
                .faq-section,
                .footer-cta {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .services-grid,
                .cases-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    margin-top: 2rem;
                }

                .service-card {
                    padding: 2rem;
                    border-radius: 12px;
                    border: 1px solid rgba(30, 144, 255, 0.15);
                }

                .service-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .section-link {
                    display: inline-block;
                    margin-top: 2rem;
                    color: #1E90FF;
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
