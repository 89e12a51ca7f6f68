//! Paginated grid of recommended product cards for one skin tone.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page hands this component a finished product list; it owns nothing but
//! a `Paginator` signal. The visible cards and the control bar are `Memo`s
//! derived from that signal and the list, so any page change or list change
//! re-derives the view.
//!
//! DESIGN
//! ======
//! Page changes are unvalidated (`Paginator::set_page`); the bar's disabled
//! states are the only guard. When the list shrinks under the current page,
//! an effect clamps the page back into range instead of leaving an empty grid.

#[cfg(test)]
#[path = "product_recommendations_test.rs"]
mod product_recommendations_test;

use std::num::NonZeroUsize;

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::types::Product;
use crate::state::pagination::{DEFAULT_PRODUCTS_PER_PAGE, PaginationControls, Paginator};
use crate::util::product_actions::{SharedProductActions, logging_actions};
use crate::util::scroll::scroll_to_top;

pub const EMPTY_MESSAGE: &str = "No products found for this skin tone.";

/// One card on the current page, with its render key.
#[derive(Clone, Debug, PartialEq)]
pub struct PageCard {
    /// Render key; only unique within a page.
    pub key: String,
    /// Identifier handed to the card.
    pub id: String,
    pub product: Product,
}

/// Cards for the paginator's current page, in list order.
pub fn page_cards(paginator: &Paginator, products: &[Product]) -> Vec<PageCard> {
    paginator
        .visible(products)
        .iter()
        .enumerate()
        .map(|(index, product)| PageCard {
            key: product.card_key(index),
            id: product.card_id(index),
            product: product.clone(),
        })
        .collect()
}

/// Heading text above the grid.
pub fn heading(skin_tone: &str) -> String {
    format!("Recommended Products for {skin_tone}")
}

/// Pull `paginator` back into range for the current `products`. Tracks
/// `products`, so running it inside an `Effect` re-clamps on every list
/// change. Writes only when the page actually moves.
pub fn clamp_page_to_products(paginator: RwSignal<Paginator>, products: Signal<Vec<Product>>) {
    let count = products.with(Vec::len);
    paginator.maybe_update(|p| p.clamp_to(count));
}

/// Recommendations grid with previous/next/numbered page controls.
#[component]
pub fn ProductRecommendations(
    #[prop(into)] skin_tone: Signal<String>,
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(default = DEFAULT_PRODUCTS_PER_PAGE)] products_per_page: NonZeroUsize,
    /// Cart/favorite handlers; logs only when omitted.
    #[prop(optional)]
    actions: Option<SharedProductActions>,
) -> impl IntoView {
    let actions = actions.unwrap_or_else(logging_actions);
    let paginator = RwSignal::new(Paginator::new(products_per_page));

    Effect::new(move || clamp_page_to_products(paginator, products));

    let cards = Memo::new(move |_| products.with(|all| paginator.with(|p| page_cards(p, all))));
    let controls = Memo::new(move |_| {
        let count = products.with(Vec::len);
        paginator.with(|p| p.controls(count))
    });
    let is_empty = move || products.with(Vec::is_empty);

    let on_page_change = Callback::new(move |page: usize| {
        paginator.update(|p| p.set_page(page));
        scroll_to_top();
    });

    view! {
        <section class="product-recommendations">
            <h2 class="product-recommendations__title">{move || heading(&skin_tone.get())}</h2>

            <div class="product-recommendations__grid">
                {move || {
                    cards
                        .get()
                        .into_iter()
                        .map(|card| render_card(card, &actions))
                        .collect_view()
                }}
            </div>

            <Show when=is_empty>
                <p class="product-recommendations__empty">{EMPTY_MESSAGE}</p>
            </Show>

            {move || {
                let current_page = paginator.with(Paginator::current_page);
                controls
                    .get()
                    .map(|controls| {
                        view! { <PaginationBar controls=controls current_page=current_page on_page_change=on_page_change/> }
                    })
            }}
        </section>
    }
}

fn render_card(card: PageCard, actions: &SharedProductActions) -> impl IntoView + use<> {
    let PageCard { key, id, product } = card;
    let on_add_to_cart = {
        let actions = actions.clone();
        let product = product.clone();
        Callback::new(move |()| actions.add_to_cart(&product))
    };
    let on_favorite = {
        let actions = actions.clone();
        let product = product.clone();
        Callback::new(move |()| actions.favorite(&product))
    };
    let image = product.image_src();

    view! {
        <div class="product-recommendations__item" data-key=key>
            <ProductCard
                id=id
                name=product.name
                brand=product.brand
                price=product.price
                rating=product.rating
                image=image
                mst=product.mst
                on_add_to_cart=on_add_to_cart
                on_favorite=on_favorite
            />
        </div>
    }
}

#[component]
fn PaginationBar(controls: PaginationControls, current_page: usize, on_page_change: Callback<usize>) -> impl IntoView {
    let PaginationControls { previous_disabled, next_disabled, pages } = controls;

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="pagination__step"
                disabled=previous_disabled
                on:click=move |_| on_page_change.run(current_page.saturating_sub(1))
                title="Previous page"
                aria-label="Previous page"
            >
                "‹"
            </button>
            <div class="pagination__pages">
                {pages
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--active=page.active
                                aria-current=page.active.then_some("page")
                                on:click=move |_| on_page_change.run(page.number)
                            >
                                {page.number}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                class="pagination__step"
                disabled=next_disabled
                on:click=move |_| on_page_change.run(current_page.saturating_add(1))
                title="Next page"
                aria-label="Next page"
            >
                "›"
            </button>
        </nav>
    }
}
