use crate::domain::a001_vehicle::source::load_catalog;
use crate::domain::a001_vehicle::ui::catalog::{CatalogState, VehicleCatalog};
use crate::domain::a001_vehicle::ui::details::VehicleDetailsModal;
use crate::layout::header::{AnchorLink, Header, MobileNavState};
use crate::layout::scroll_lock::install_scroll_lock;
use crate::layout::scroll_reveal::install_scroll_reveal;
use crate::shared::config::load_config;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::usecases::u501_booking_flow::controller::provide_booking_controller;
use crate::usecases::u501_booking_flow::{
    BookingFormModal, ConfirmationModal, ConsoleSink, SearchBar,
};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(load_config());
    provide_context(config);

    // Provide NotificationService for toasts from any component
    let notifications = NotificationService::new(config.with_value(|c| c.notification_ttl_ms));
    provide_context(notifications);

    let ctl = provide_booking_controller(notifications, Arc::new(ConsoleSink));

    let (fade_ms, reveal_ms) = config.with_value(|c| (c.filter_fade_ms, c.filter_reveal_ms));
    let catalog = RwSignal::new(CatalogState::new(load_catalog(), fade_ms, reveal_ms));

    let nav = RwSignal::new(MobileNavState::default());
    install_scroll_lock(Signal::derive(move || {
        ctl.state().suspends_scroll() || nav.with(|n| n.is_open())
    }));

    // Runs once, after the cards and service tiles are mounted
    let reveal_threshold = config.with_value(|c| c.reveal_threshold);
    Effect::new(move |_| install_scroll_reveal(reveal_threshold));

    let on_view = Callback::new(move |index: usize| {
        if let Some(entry) = catalog.with_untracked(|c| c.entry(index).cloned()) {
            ctl.open_detail(&entry);
        }
    });

    view! {
        <Header nav=nav />

        <section id="home" class="hero">
            <div class="hero-content">
                <h1>"Drive Your Dream Car"</h1>
                <p>"Premium vehicles, transparent prices, delivered where you land."</p>
                <SearchBar />
                <AnchorLink target="cars" nav=nav class="cta-button">
                    "Browse the Fleet"
                </AnchorLink>
            </div>
        </section>

        <section id="cars" class="cars">
            <h2 class="section-title">"Our Fleet"</h2>
            <VehicleCatalog catalog=catalog on_view=on_view />
        </section>

        <section id="services" class="services">
            <h2 class="section-title">"Our Services"</h2>
            <div class="services-grid">
                <div class="service-card">
                    <h3>"Airport Delivery"</h3>
                    <p>"Your car waits for you at arrivals."</p>
                </div>
                <div class="service-card">
                    <h3>"Hotel Drop-off"</h3>
                    <p>"Return the keys at the front desk."</p>
                </div>
                <div class="service-card">
                    <h3>"24/7 Support"</h3>
                    <p>"Roadside assistance whenever you need it."</p>
                </div>
            </div>
        </section>

        <section id="contact" class="contact">
            <h2 class="section-title">"Contact"</h2>
            <p>"Questions about a booking? Reach us any time."</p>
        </section>

        <VehicleDetailsModal />
        <BookingFormModal />
        <ConfirmationModal />
        <NotificationHost />
    }
}
