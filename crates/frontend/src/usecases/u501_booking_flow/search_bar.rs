use super::controller::BookingController;
use crate::shared::components::Input;
use leptos::prelude::*;

/// Hero search: locations, dates and the general "book now" action
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctl = BookingController::expect();

    view! {
        <div class="booking-form">
            <Input
                id="pickup-location"
                label="Pickup Location"
                placeholder="City, airport or hotel"
                value=Signal::derive(move || ctl.search_field(|s| s.pickup_location.clone()))
                on_input=Callback::new(move |v: String| ctl.update_search(|s| s.pickup_location = v))
            />
            <Input
                id="return-location"
                label="Return Location"
                placeholder="City, airport or hotel"
                value=Signal::derive(move || ctl.search_field(|s| s.return_location.clone()))
                on_input=Callback::new(move |v: String| ctl.update_search(|s| s.return_location = v))
            />
            <Input
                id="start-date"
                label="Pickup Date"
                input_type="datetime-local"
                value=Signal::derive(move || ctl.search_field(|s| s.start_date.clone()))
                on_input=Callback::new(move |v: String| ctl.update_search(|s| s.start_date = v))
            />
            <Input
                id="end-date"
                label="Return Date"
                input_type="datetime-local"
                value=Signal::derive(move || ctl.search_field(|s| s.end_date.clone()))
                on_input=Callback::new(move |v: String| ctl.update_search(|s| s.end_date = v))
            />
            <button class="search-btn" on:click=move |_| ctl.request_booking()>
                "Book Now"
            </button>
        </div>
    }
}
