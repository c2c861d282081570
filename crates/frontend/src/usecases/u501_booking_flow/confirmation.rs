use super::controller::BookingController;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::timers;
use contracts::usecases::u501_booking_flow::FlowModal;
use leptos::prelude::*;

#[component]
pub fn ConfirmationModal() -> impl IntoView {
    let ctl = BookingController::expect();

    let reference = Memo::new(move |_| {
        ctl.with_flow(|f| {
            f.is_open(FlowModal::Confirmation)
                .then(|| f.reference().map(|r| r.to_string()).unwrap_or_default())
        })
    });

    move || {
        let Some(reference) = reference.get() else {
            return view! { <></> }.into_any();
        };

        view! {
            <ModalFrame
                class="confirmation-modal"
                label="Booking confirmed"
                on_close=Callback::new(move |_| ctl.dismiss(FlowModal::Confirmation))
            >
                <div class="confirmation-content">
                    <div class="confirmation-icon">"✓"</div>
                    <h2>"Booking Confirmed!"</h2>
                    <p>"Thank you for choosing Heaven Star Car Rental. We will contact you shortly to finalize the details."</p>
                    <p class="reference">
                        "Booking reference: "<strong id="booking-reference">{reference}</strong>
                    </p>
                    <button class="close-confirmation" on:click=move |_| timers::defer(move || ctl.close_confirmation())>
                        "Done"
                    </button>
                </div>
            </ModalFrame>
        }
        .into_any()
    }
}
