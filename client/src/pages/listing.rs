//! Shared loader and layout for pages that fetch a full product list and
//! hand it to `ProductRecommendations`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The skin-tone page and the MST catalog page differ only in which endpoint
//! they walk. Both keep a `RecommendationsState` signal, restart the fetch
//! when their route value changes, and let the generation guard drop
//! responses from routes the user already left.
//!
//! Fetching only happens in the browser. The server renders the pending
//! state, so the first paint shows the loading line on both sides.

use leptos::prelude::*;

use crate::components::product_recommendations::ProductRecommendations;
use crate::state::recommendations::RecommendationsState;

/// Which API a listing page walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingSource {
    /// `/api/recommendations/skin-tone/{tone}`
    SkinTone,
    /// `/api/data?mst={tag}`
    Mst,
}

/// Start a fresh fetch for `key`. Any fetch still in flight is superseded
/// and its response dropped when it lands.
#[cfg(feature = "hydrate")]
pub fn reload_listing(state: RwSignal<RecommendationsState>, source: ListingSource, key: String) {
    let generation = state.try_update(|s| s.begin(&key)).unwrap_or_default();
    leptos::task::spawn_local(async move {
        let result = match source {
            ListingSource::SkinTone => crate::net::api::fetch_all_recommendations(&key).await,
            ListingSource::Mst => crate::net::api::fetch_all_catalog(Some(&key)).await,
        };
        if let Err(e) = &result {
            leptos::logging::warn!("product listing fetch failed for {key}: {e}");
        }
        state.update(|s| {
            if !s.finish(generation, result) {
                leptos::logging::log!("dropped superseded listing response for {key}");
            }
        });
    });
}

/// Status line plus grid for a loaded listing.
#[component]
pub fn ListingBody(state: RwSignal<RecommendationsState>, #[prop(into)] heading: Signal<String>) -> impl IntoView {
    let products = Signal::derive(move || state.with(|s| s.products.clone()));
    let ready = move || state.with(|s| !s.loading && s.error.is_none());

    view! {
        <p class="recommendations-page__status">{move || state.with(RecommendationsState::status_line)}</p>
        <Show when=ready>
            <ProductRecommendations skin_tone=heading products=products/>
        </Show>
    }
}
