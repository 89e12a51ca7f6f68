//! Card for a single recommended product.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

const MAX_RATING: f64 = 5.0;

/// A product tile with image, details, and cart/favorite buttons.
#[component]
pub fn ProductCard(
    id: String,
    name: String,
    brand: String,
    price: f64,
    rating: f64,
    /// Image URL; empty renders a placeholder block.
    #[prop(default = String::new())]
    image: String,
    mst: String,
    on_add_to_cart: Callback<()>,
    on_favorite: Callback<()>,
) -> impl IntoView {
    let has_image = !image.is_empty();
    let alt = name.clone();
    let rating_title = format!("{rating:.1} out of 5");

    view! {
        <article class="product-card" data-product-id=id>
            <div class="product-card__media">
                <Show
                    when=move || has_image
                    fallback=|| view! { <div class="product-card__placeholder" aria-hidden="true"></div> }
                >
                    <img class="product-card__image" src=image.clone() alt=alt.clone() loading="lazy"/>
                </Show>
                <button
                    class="product-card__favorite"
                    on:click=move |_| on_favorite.run(())
                    title="Add to favorites"
                    aria-label="Add to favorites"
                >
                    "♡"
                </button>
            </div>
            <div class="product-card__body">
                <span class="product-card__brand">{brand}</span>
                <h3 class="product-card__name">{name}</h3>
                <span class="product-card__rating" title=rating_title>{rating_stars(rating)}</span>
                <span class="product-card__mst">{mst}</span>
                <div class="product-card__footer">
                    <span class="product-card__price">{format_price(price)}</span>
                    <button class="product-card__cart" on:click=move |_| on_add_to_cart.run(())>
                        "Add to cart"
                    </button>
                </div>
            </div>
        </article>
    }
}

/// Price with a dollar sign and two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Five-star rating string, rounded to the nearest whole star.
pub fn rating_stars(rating: f64) -> String {
    let rating = if rating.is_finite() { rating.clamp(0.0, MAX_RATING) } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.round() as usize;
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}
