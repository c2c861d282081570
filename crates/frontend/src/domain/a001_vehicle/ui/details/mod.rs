use crate::shared::modal_frame::ModalFrame;
use crate::shared::timers;
use crate::usecases::u501_booking_flow::BookingController;
use contracts::usecases::u501_booking_flow::FlowModal;
use leptos::prelude::*;

/// Vehicle detail modal, rendered from the booking flow's current [`DetailView`].
///
/// [`DetailView`]: contracts::usecases::u501_booking_flow::DetailView
#[component]
pub fn VehicleDetailsModal() -> impl IntoView {
    let ctl = BookingController::expect();

    let detail = Memo::new(move |_| {
        ctl.with_flow(|f| f.is_open(FlowModal::Detail).then(|| f.detail().cloned()).flatten())
    });

    move || {
        let Some(detail) = detail.get() else {
            return view! { <></> }.into_any();
        };

        view! {
            <ModalFrame
                class="vehicle-modal"
                label=detail.title.clone()
                on_close=Callback::new(move |_| ctl.dismiss(FlowModal::Detail))
            >
                <div class="modal-body">
                    <div class="modal-image">
                        <img id="modal-img" src=detail.image_ref.clone() alt=detail.title.clone() />
                    </div>
                    <div class="modal-info">
                        <h2 id="modal-title">{detail.title.clone()}</h2>
                        <p id="modal-desc">{detail.description.clone()}</p>
                        <div class="modal-specs">
                            {detail
                                .specs
                                .iter()
                                .map(|(field, value)| {
                                    view! {
                                        <div class="spec-item" data-spec=field.key()>
                                            <span class="spec-label">{field.label()}</span>
                                            <span class="spec-value">{value.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="modal-price" id="modal-price">{detail.price_label.clone()}</div>
                        <button class="book-button" on:click=move |_| timers::defer(move || ctl.open_booking_form())>
                            "Book Now"
                        </button>
                    </div>
                </div>
            </ModalFrame>
        }
        .into_any()
    }
}
