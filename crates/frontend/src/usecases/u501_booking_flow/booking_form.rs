use super::controller::BookingController;
use crate::shared::components::Input;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::timers;
use contracts::domain::a002_booking::CustomerInput;
use contracts::usecases::u501_booking_flow::FlowModal;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// One bound customer field
fn customer_input(
    ctl: BookingController,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    required: bool,
    get: fn(&CustomerInput) -> &String,
    set: fn(&mut CustomerInput, String),
) -> impl IntoView {
    view! {
        <Input
            id=id
            label=label
            input_type=input_type
            required=required
            value=Signal::derive(move || ctl.customer_field(|c| get(c).clone()))
            on_input=Callback::new(move |v: String| ctl.update_customer(|c| set(c, v)))
        />
    }
}

/// Booking form modal: selected vehicle, price summary and customer details
#[component]
pub fn BookingFormModal() -> impl IntoView {
    let ctl = BookingController::expect();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // success swaps this modal for the confirmation
        timers::defer(move || ctl.submit_customer_form());
    };

    // Only re-render on open/close, not on every keystroke in the form
    let summary = Memo::new(move |_| {
        ctl.with_flow(|f| {
            f.is_open(FlowModal::BookingForm)
                .then(|| f.summary().cloned())
                .flatten()
        })
    });

    move || {
        let Some(summary) = summary.get() else {
            return view! { <></> }.into_any();
        };

        view! {
            <ModalFrame
                class="booking-form-modal"
                label="Complete your booking"
                on_close=Callback::new(move |_| ctl.dismiss(FlowModal::BookingForm))
            >
                <div class="selected-car">
                    <img id="selected-car-img" src=summary.vehicle_img.clone() alt=summary.vehicle_name.clone() />
                    <div>
                        <h3 id="selected-car-name">{summary.vehicle_name.clone()}</h3>
                        <div id="selected-car-price">{summary.rate_label.clone()}</div>
                    </div>
                </div>

                <div class="booking-summary">
                    <h4>"Booking Summary"</h4>
                    <div class="summary-item">
                        <span>"Pickup:"</span>
                        <span id="summary-pickup">{summary.pickup.clone()}</span>
                    </div>
                    <div class="summary-item">
                        <span>"Return:"</span>
                        <span id="summary-return">{summary.return_.clone()}</span>
                    </div>
                    <div class="summary-item">
                        <span>"Duration:"</span>
                        <span id="summary-days">{summary.days_label.clone()}</span>
                    </div>
                    <div class="summary-item">
                        <span>"Daily Rate:"</span>
                        <span id="summary-rate">{summary.rate_label.clone()}</span>
                    </div>
                    <div class="summary-item total">
                        <span>"Total:"</span>
                        <span id="summary-total">{summary.total_label.clone()}</span>
                    </div>
                </div>

                <form name="booking" class="customer-form" novalidate=true on:submit=on_submit>
                    <h4>"Personal Information"</h4>
                    {customer_input(ctl, "customer-name", "Full Name", "text", true, |c| &c.name, |c, v| c.name = v)}
                    {customer_input(ctl, "customer-email", "Email", "email", true, |c| &c.email, |c, v| c.email = v)}
                    {customer_input(ctl, "customer-phone", "Phone", "tel", true, |c| &c.phone, |c, v| c.phone = v)}
                    {customer_input(ctl, "customer-license", "Driver's License", "text", true, |c| &c.license, |c, v| c.license = v)}
                    {customer_input(ctl, "customer-hotel", "Hotel (optional)", "text", false, |c| &c.hotel, |c, v| c.hotel = v)}
                    {customer_input(ctl, "customer-flight", "Flight Number (optional)", "text", false, |c| &c.flight, |c, v| c.flight = v)}
                    {customer_input(ctl, "customer-country", "Country (optional)", "text", false, |c| &c.country, |c, v| c.country = v)}
                    <button type="submit" class="submit-booking">"Confirm Booking"</button>
                </form>
            </ModalFrame>
        }
        .into_any()
    }
}
