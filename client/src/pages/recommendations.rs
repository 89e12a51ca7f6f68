//! Recommendations page for one skin tone.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `tone` route param, walks the recommendation API pages into a
//! single list, and hands that list to `ProductRecommendations`, which
//! paginates it locally.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::pages::home::skin_tone_label;
use crate::pages::listing::ListingBody;
use crate::state::recommendations::RecommendationsState;

/// Recommendations page. Fetches in the browser; SSR renders the loading line.
#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let params = use_params_map();
    let tone = Memo::new(move |_| params.with(|p| p.get("tone")).unwrap_or_default());
    let state = RwSignal::new(RecommendationsState::pending(&tone.get_untracked()));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::pages::listing::{ListingSource, reload_listing};
        reload_listing(state, ListingSource::SkinTone, tone.get());
    });

    view! {
        <div class="recommendations-page">
            <nav class="recommendations-page__nav">
                <a href="/app">"← All skin tones"</a>
            </nav>
            <ListingBody state=state heading=Signal::derive(move || skin_tone_label(&tone.get()))/>
        </div>
    }
}
