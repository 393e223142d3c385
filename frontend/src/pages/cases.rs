use yew::prelude::*;

use crate::components::booking_button::BookingButton;
use crate::components::expandable_card::ExpandableCard;
use crate::components::scroll::ScrollReveal;
use crate::i18n::context::Tr;

pub struct CaseStudy {
    pub slug: &'static str,
    pub title_ru: &'static str,
    pub title_en: &'static str,
    pub summary_ru: &'static str,
    pub summary_en: &'static str,
    pub details_ru: &'static str,
    pub details_en: &'static str,
}

pub const CASES: [CaseStudy; 3] = [
    CaseStudy {
        slug: "retail-automation",
        title_ru: "Автоматизация розничной сети",
        title_en: "Retail chain automation",
        summary_ru: "Единая система заказов для 40 магазинов.",
        summary_en: "One ordering system for 40 stores.",
        details_ru: "Мы заменили ручные таблицы на общий каталог и автоматические заявки поставщикам. Время обработки заказа сократилось с двух дней до двух часов.",
        details_en: "We replaced hand-kept spreadsheets with a shared catalogue and automatic supplier orders. Order processing went from two days to two hours.",
    },
    CaseStudy {
        slug: "clinic-booking",
        title_ru: "Онлайн-запись для клиники",
        title_en: "Online booking for a clinic",
        summary_ru: "Запись к врачу без звонков и очередей.",
        summary_en: "Doctor appointments without calls or queues.",
        details_ru: "Пациенты выбирают врача, дату и время на сайте, а регистратура получает готовое расписание. Количество пропущенных визитов снизилось на треть.",
        details_en: "Patients pick a doctor, date and time on the site, and the front desk receives a ready schedule. Missed visits dropped by a third.",
    },
    CaseStudy {
        slug: "logistics-dashboard",
        title_ru: "Панель для логистической компании",
        title_en: "Logistics dashboard",
        summary_ru: "Статус каждой поставки в реальном времени.",
        summary_en: "Live status of every shipment.",
        details_ru: "Диспетчеры видят все машины на одной карте и получают уведомления о задержках до того, как о них узнает клиент.",
        details_en: "Dispatchers see every truck on one map and get delay alerts before the customer notices.",
    },
];

#[function_component(Cases)]
pub fn cases() -> Html {
    html! {
        <div class="cases-page">
            <section class="page-hero">
                <h1><Tr ru="Кейсы" en="Case Studies" /></h1>
                <p><Tr ru="Проекты, которыми мы гордимся" en="Projects we are proud of" /></p>
            </section>

            <section class="cases-list">
                { for CASES.iter().map(|case| html! {
                    <ScrollReveal class="case-entry">
                        <div id={case.slug}>
                            <ExpandableCard>
                                <h3><Tr ru={case.title_ru} en={case.title_en} /></h3>
                                <p class="case-summary"><Tr ru={case.summary_ru} en={case.summary_en} /></p>
                                <div class="card-details">
                                    <p><Tr ru={case.details_ru} en={case.details_en} /></p>
                                </div>
                            </ExpandableCard>
                        </div>
                    </ScrollReveal>
                }) }
            </section>

            <section class="footer-cta">
                <h2><Tr ru="Хотите такой же результат?" en="Want results like these?" /></h2>
                <BookingButton class="cta-button">
                    <Tr ru="Запланировать встречу" en="Book a meeting" />
                </BookingButton>
            </section>
        </div>
    }
}
