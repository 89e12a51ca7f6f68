//! Landing page: pick a skin tone to see recommendations.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

/// Skin tones the recommendation API understands.
pub const SKIN_TONES: [&str; 3] = ["fair", "medium", "dark"];

/// Number of steps on the MST scale used to tag catalog products.
pub const MST_STEPS: usize = 10;

/// Catalog tags `MST-1` through `MST-10`, in scale order.
pub fn mst_tags() -> Vec<String> {
    (1..=MST_STEPS).map(|step| format!("MST-{step}")).collect()
}

/// Route for an MST tag's catalog page.
pub fn mst_href(tag: &str) -> String {
    format!("/app/mst/{tag}")
}

/// Route for a tone's recommendations page.
pub fn skin_tone_href(skin_tone: &str) -> String {
    format!("/app/recommendations/{skin_tone}")
}

/// Display label with the first letter capitalized.
pub fn skin_tone_label(skin_tone: &str) -> String {
    let mut chars = skin_tone.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Home page listing the skin tones.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Find your shades"</h1>
                <p>"Choose the skin tone closest to yours to see colors and products that suit it."</p>
            </header>
            <ul class="home-page__tones">
                {SKIN_TONES
                    .iter()
                    .map(|tone| {
                        view! {
                            <li>
                                <a class=format!("tone-chip tone-chip--{tone}") href=skin_tone_href(tone)>
                                    {skin_tone_label(tone)}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <section class="home-page__mst">
                <h2>"Browse by MST tag"</h2>
                <ul class="home-page__mst-tags">
                    {mst_tags()
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <li>
                                    <a class="mst-chip" href=mst_href(&tag)>{tag.clone()}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
