use crate::shared::dom;
use leptos::prelude::*;

/// Keeps `body { overflow }` in lockstep with every overlay on the page.
///
/// `suspended` should be true while any modal or the mobile menu is open.
pub fn install_scroll_lock(suspended: Signal<bool>) {
    Effect::new(move |prev: Option<bool>| {
        let now = suspended.get();
        if prev != Some(now) {
            dom::set_body_scroll_suspended(now);
        }
        now
    });
}
