use super::state::{HeaderAppearance, HeaderScrollState, MobileNavState};
use crate::shared::config::use_config;
use crate::shared::dom;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// In-page navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Id of the target section, without `#`
    pub target: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { target: "home", label: "Home" },
    NavLink { target: "cars", label: "Our Fleet" },
    NavLink { target: "services", label: "Services" },
    NavLink { target: "contact", label: "Contact" },
];

/// Anchor that smooth-scrolls to an in-page section and closes the mobile menu
#[component]
pub fn AnchorLink(
    target: &'static str,
    nav: RwSignal<MobileNavState>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        if dom::scroll_to_id(target) && nav.with_untracked(|n| n.is_open()) {
            nav.update(|n| {
                n.close();
            });
        }
    };

    view! {
        <a href=format!("#{target}") class=class.unwrap_or_default() on:click=on_click>
            {children()}
        </a>
    }
}

/// Page header: hides on scroll-down, gains a shadow once the page is scrolled,
/// and carries the hamburger toggle for the mobile menu.
#[component]
pub fn Header(nav: RwSignal<MobileNavState>) -> impl IntoView {
    let config = use_config();
    let appearance = RwSignal::new(HeaderAppearance::default());

    Effect::new(move |_| {
        let (hide, shadow) = config.with_value(|c| {
            (c.header_hide_threshold_px, c.header_shadow_threshold_px)
        });
        let mut scroll_state = HeaderScrollState::new(hide, shadow);

        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let next = scroll_state.on_scroll(dom::scroll_offset());
            if appearance.get_untracked() != next {
                appearance.set(next);
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            // Header lives for the whole page; keep closure alive.
            closure.forget();
        }
    });

    let is_open = move || nav.with(|n| n.is_open());

    view! {
        <header class="header" style=move || appearance.get().style()>
            <nav class="navbar">
                <AnchorLink target="home" nav=nav class="logo">
                    "Heaven Star"<span>" Car Rental"</span>
                </AnchorLink>
                <ul class="nav-links" class:active=is_open>
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <AnchorLink target=link.target nav=nav>
                                        {link.label}
                                    </AnchorLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="hamburger"
                    class:active=is_open
                    aria-label="Toggle navigation"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| nav.update(|n| n.toggle())
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </nav>
        </header>
    }
}
