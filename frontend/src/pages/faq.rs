use yew::prelude::*;

use crate::components::accordion::FaqItem;
use crate::components::booking_button::BookingButton;
use crate::i18n::context::Tr;

/// The questions, shared by the FAQ page and the home page section.
#[function_component(FaqList)]
pub fn faq_list() -> Html {
    html! {
        <div class="faq-list">
            <FaqItem question_ru="Сколько стоит проект?" question_en="How much does a project cost?">
                <p>
                    <Tr
                        ru="Стоимость зависит от объема работ. После первой встречи мы присылаем смету с фиксированной ценой."
                        en="It depends on the scope. After the first meeting we send an estimate with a fixed price."
                    />
                </p>
            </FaqItem>
            <FaqItem question_ru="Сколько длится разработка?" question_en="How long does development take?">
                <p>
                    <Tr
                        ru="Небольшой сайт занимает от двух недель, сложная система от трех месяцев."
                        en="A small site takes from two weeks, a complex system from three months."
                    />
                </p>
            </FaqItem>
            <FaqItem question_ru="Вы поддерживаете проект после запуска?" question_en="Do you support the project after launch?">
                <p>
                    <Tr
                        ru="Да. Первый месяц поддержки входит в стоимость, дальше по договору."
                        en="Yes. The first month of support is included, after that under a support contract."
                    />
                </p>
            </FaqItem>
            <FaqItem question_ru="Вы работаете с зарубежными клиентами?" question_en="Do you work with clients abroad?">
                <p>
                    <Tr
                        ru="Да, мы ведем проекты на русском и английском языках."
                        en="Yes, we run projects in both Russian and English."
                    />
                </p>
            </FaqItem>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="page-hero">
                <h1><Tr ru="Частые вопросы" en="Frequently Asked Questions" /></h1>
                <p><Tr ru="Все, что нужно знать перед началом работы" en="Everything you need to know before we start" /></p>
            </section>

            <section class="faq-section">
                <FaqList />
            </section>

            <section class="footer-cta">
                <h2><Tr ru="Не нашли ответ?" en="Didn't find your answer?" /></h2>
                <BookingButton class="cta-button">
                    <Tr ru="Связаться с нами" en="Contact us" />
                </BookingButton>
            </section>

            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .faq-item {
                    border-bottom: 1px solid rgba(30, 144, 255, 0.15);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-toggle {
                    font-size: 1.5rem;
                    margin-left: 1rem;
                }

                .faq-answer {
                    padding-bottom: 1.25rem;
                    color: #555;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}
