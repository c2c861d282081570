use crate::shared::timers;
use leptos::ev;
use leptos::prelude::*;

/// Overlay + content surface shared by the booking modals.
///
/// Renders a close control in the top corner; the body is up to the caller.
/// Buttons in the body that close or replace this modal must go through
/// [`timers::defer`] as the close control does.
#[component]
pub fn ModalFrame(
    /// Called on the close control or a click on the overlay itself
    on_close: Callback<()>,
    /// Extra class for the overlay, e.g. `booking-form-modal`
    #[prop(optional, into)]
    class: Option<String>,
    /// Accessible name of the dialog
    #[prop(optional, into)]
    label: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay, so a text
    // selection that ends outside the content does not close the modal.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    // the overlay is removed while its own click is dispatched
    let close_deferred = move || timers::defer(move || on_close.run(()));

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_deferred();
        }
    };

    let overlay_class = match class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class=overlay_class
            style="display: flex;"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-label=label
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <span class="close" role="button" aria-label="Close" on:click=move |_| close_deferred()>
                    "×"
                </span>
                {children()}
            </div>
        </div>
    }
}
