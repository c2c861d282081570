//! Cards fade in the first time they scroll into view.

use crate::shared::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Elements that fade in on first sight
pub const REVEAL_SELECTOR: &str = ".service-card, .vehicle-card, .testimonial";

const FALLBACK_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Observed, not yet seen
    Pending,
    Revealed,
}

impl RevealPhase {
    /// Inline style properties for the phase
    pub fn properties(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            RevealPhase::Pending => &[
                ("opacity", "0"),
                ("transform", "translateY(30px)"),
                ("transition", "opacity 0.6s ease, transform 0.6s ease"),
            ],
            RevealPhase::Revealed => &[("opacity", "1"), ("transform", "translateY(0)")],
        }
    }
}

/// Observer thresholds must lie in `0..=1`
pub fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() {
        threshold.clamp(0.0, 1.0)
    } else {
        FALLBACK_THRESHOLD
    }
}

fn apply(el: &HtmlElement, phase: RevealPhase) {
    let style = el.style();
    for (name, value) in phase.properties() {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("Failed to set {} on revealed element: {:?}", name, e);
        }
    }
}

/// Hide every matching element and reveal each one once `threshold` of it is
/// visible. Each element is revealed only once.
///
/// Must run after the cards are mounted. Without `IntersectionObserver` the
/// elements are left untouched.
pub fn install_scroll_reveal(threshold: f64) {
    let Some(document) = dom::document() else {
        return;
    };
    let targets = dom::query_all(&document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(el) = target.dyn_ref::<HtmlElement>() {
                    apply(el, RevealPhase::Revealed);
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(normalize_threshold(threshold)));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable, cards shown as is: {:?}", e);
                return;
            }
        };
    // Observer lives for the whole page; keep closure alive.
    callback.forget();

    for el in &targets {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            apply(html, RevealPhase::Pending);
        }
        observer.observe(el);
    }
    log::debug!("Scroll reveal observing {} elements", targets.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(phase: RevealPhase, name: &str) -> Option<&'static str> {
        phase
            .properties()
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    #[test]
    fn test_pending_hides_and_revealed_shows() {
        assert_eq!(value(RevealPhase::Pending, "opacity"), Some("0"));
        assert_eq!(value(RevealPhase::Revealed, "opacity"), Some("1"));
        assert_eq!(value(RevealPhase::Revealed, "transform"), Some("translateY(0)"));
        // the transition set while pending carries the reveal
        assert!(value(RevealPhase::Pending, "transition").is_some());
    }

    #[test]
    fn test_threshold_normalized() {
        assert_eq!(normalize_threshold(0.1), 0.1);
        assert_eq!(normalize_threshold(-1.0), 0.0);
        assert_eq!(normalize_threshold(3.0), 1.0);
        assert_eq!(normalize_threshold(f64::NAN), FALLBACK_THRESHOLD);
    }
}
