//! Catalog page for one MST tag, backed by `/api/data?mst=`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::pages::listing::ListingBody;
use crate::state::recommendations::RecommendationsState;

/// Every product tagged with the route's `mst` value.
#[component]
pub fn MstPage() -> impl IntoView {
    let params = use_params_map();
    let mst = Memo::new(move |_| params.with(|p| p.get("mst")).unwrap_or_default());
    let state = RwSignal::new(RecommendationsState::pending(&mst.get_untracked()));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::pages::listing::{ListingSource, reload_listing};
        reload_listing(state, ListingSource::Mst, mst.get());
    });

    view! {
        <div class="recommendations-page">
            <nav class="recommendations-page__nav">
                <a href="/app">"← All skin tones"</a>
            </nav>
            <ListingBody state=state heading=mst/>
        </div>
    }
}
