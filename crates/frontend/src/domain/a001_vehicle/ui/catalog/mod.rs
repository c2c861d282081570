pub mod state;

pub use state::{CardPhase, CatalogState, PendingPhase};

use crate::shared::config::use_config;
use crate::shared::timers;
use contracts::domain::a001_vehicle::CatalogFilter;
use contracts::domain::a002_booking::pricing::format_rate;
use leptos::prelude::*;

/// Switch the filter and schedule the deferred halves of the transitions
pub fn apply_filter(catalog: RwSignal<CatalogState>, filter: CatalogFilter) {
    let Some(pending) = catalog.try_update(|c| c.apply_filter(filter)) else {
        return;
    };
    for p in pending {
        timers::schedule(p.delay_ms, move || {
            let _ = catalog.try_update(|c| c.settle(&p));
        });
    }
}

/// Filter bar plus the vehicle grid
#[component]
pub fn VehicleCatalog(
    catalog: RwSignal<CatalogState>,
    /// Index of the card whose details were requested
    on_view: Callback<usize>,
) -> impl IntoView {
    let config = use_config();
    let loading = RwSignal::new(true);
    timers::schedule(config.with_value(|c| c.card_loading_ms), move || {
        let _ = loading.try_set(false);
    });

    let filters = catalog.with_untracked(|c| c.filters());
    let count = catalog.with_untracked(|c| c.entries().len());

    view! {
        <div class="vehicle-filters">
            {filters
                .into_iter()
                .map(|filter| {
                    let label = filter.label();
                    let key = filter.key().to_string();
                    let is_active = {
                        let filter = filter.clone();
                        move || catalog.with(|c| *c.active() == filter)
                    };
                    view! {
                        <button
                            class="filter-btn"
                            class:active=is_active
                            data-category=key
                            on:click=move |_| apply_filter(catalog, filter.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>

        <div class="vehicles-grid">
            {(0..count)
                .map(|index| view! { <VehicleCard catalog=catalog index=index loading=loading on_view=on_view /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn VehicleCard(
    catalog: RwSignal<CatalogState>,
    index: usize,
    loading: RwSignal<bool>,
    on_view: Callback<usize>,
) -> impl IntoView {
    let Some(entry) = catalog.with_untracked(|c| c.entry(index).cloned()) else {
        return view! { <></> }.into_any();
    };

    let style = move || {
        format!(
            "animation-delay: {:.1}s; {}",
            index as f64 * 0.1,
            catalog.with(|c| c.phase(index).style())
        )
    };

    view! {
        <div
            class="vehicle-card"
            class:loading=move || loading.get()
            data-category=entry.category.clone()
            aria-hidden=move || (!catalog.with(|c| c.is_shown(index))).to_string()
            style=style
        >
            <div class="vehicle-image">
                <img src=entry.image_ref.clone() alt=entry.title.clone() />
                <button class="quick-view-btn" on:click=move |_| on_view.run(index)>
                    "Quick View"
                </button>
            </div>
            <div class="vehicle-info">
                <h3 class="vehicle-title">{entry.title.clone()}</h3>
                <p>{entry.description.clone()}</p>
                <div class="vehicle-price">{format_rate(&entry.price_per_day)}</div>
                <button class="vehicle-button" on:click=move |_| on_view.run(index)>
                    "View Details"
                </button>
            </div>
        </div>
    }
    .into_any()
}
