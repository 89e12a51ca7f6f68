use super::*;

fn make_product(id: &str) -> Product {
    Product {
        id: Some(id.to_owned()),
        name: "Knit cardigan".to_owned(),
        brand: "H&M".to_owned(),
        price: 29.99,
        rating: 4.0,
        image_url: None,
        mst: "MST-5".to_owned(),
    }
}

fn make_listing(colors: &[&str], avoid: &[&str], products: usize, total_items: usize) -> ProductListing {
    ProductListing {
        recommended_colors: colors.iter().map(|c| (*c).to_owned()).collect(),
        avoid_colors: avoid.iter().map(|c| (*c).to_owned()).collect(),
        products: (0..products).map(|i| make_product(&format!("p-{i}"))).collect(),
        total_items,
    }
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = RecommendationsState::default();
    assert!(!state.loading);
    assert!(state.products.is_empty());
    assert_eq!(state.error, None);
    assert_eq!(state.status_line(), None);
}

#[test]
fn pending_state_shows_loading_for_key() {
    let state = RecommendationsState::pending("MST-3");
    assert_eq!(state.key, "MST-3");
    assert!(state.loading);
    assert_eq!(state.status_line().as_deref(), Some("Loading products..."));
}

#[test]
fn begin_clears_previous_results() {
    let mut state = RecommendationsState::default();
    let generation = state.begin("fair");
    state.finish(generation, Ok(make_listing(&["Cool"], &["Warm"], 1, 1)));
    state.begin("dark");
    assert_eq!(state.key, "dark");
    assert!(state.loading);
    assert!(state.products.is_empty());
    assert!(state.recommended_colors.is_empty());
    assert!(state.avoid_colors.is_empty());
    assert_eq!(state.total_items, 0);
}

#[test]
fn begin_advances_generation() {
    let mut state = RecommendationsState::default();
    let first = state.begin("fair");
    let second = state.begin("fair");
    assert_ne!(first, second);
    assert_eq!(state.generation(), second);
}

#[test]
fn finish_stores_products_and_colors() {
    let mut state = RecommendationsState::default();
    let generation = state.begin("medium");
    assert!(state.finish(generation, Ok(make_listing(&["Neutral", "Warm"], &["Cool"], 1, 1))));
    assert!(!state.loading);
    assert_eq!(state.products.len(), 1);
    assert_eq!(state.status_line().as_deref(), Some("Best colors: Neutral, Warm · Avoid: Cool"));
}

#[test]
fn finish_records_error() {
    let mut state = RecommendationsState::default();
    let generation = state.begin("fair");
    state.finish(generation, Err("request failed: 500".to_owned()));
    assert!(!state.loading);
    assert!(state.products.is_empty());
    assert_eq!(state.status_line().as_deref(), Some("Could not load products: request failed: 500"));
}

#[test]
fn finish_ignores_superseded_fetch() {
    let mut state = RecommendationsState::default();
    let fair = state.begin("fair");
    state.begin("dark");
    assert!(!state.finish(fair, Ok(make_listing(&["Cool"], &[], 1, 1))));
    assert!(state.loading);
    assert!(state.products.is_empty());
}

#[test]
fn finish_ignores_older_fetch_for_same_key() {
    // fair -> dark -> fair: the first fair response lands after the user
    // came back, and must not replace the second fair fetch.
    let mut state = RecommendationsState::default();
    let stale = state.begin("fair");
    state.begin("dark");
    let current = state.begin("fair");

    assert!(!state.finish(stale, Ok(make_listing(&["Cool"], &[], 3, 3))));
    assert!(state.loading);
    assert!(state.products.is_empty());

    assert!(state.finish(current, Ok(make_listing(&["Cool", "Neutral"], &["Warm"], 2, 2))));
    assert_eq!(state.products.len(), 2);
    assert_eq!(state.recommended_colors, vec!["Cool".to_owned(), "Neutral".to_owned()]);
}

#[test]
fn status_line_reports_truncated_listing() {
    let mut state = RecommendationsState::default();
    let generation = state.begin("fair");
    state.finish(generation, Ok(make_listing(&["Cool"], &["Warm"], 200, 230)));
    assert!(state.is_partial());
    assert_eq!(
        state.status_line().as_deref(),
        Some("Best colors: Cool · Avoid: Warm · Showing the first 200 of 230 products")
    );
}

#[test]
fn status_line_for_catalog_listing_without_colors() {
    let mut state = RecommendationsState::default();
    let generation = state.begin("MST-3");
    state.finish(generation, Ok(make_listing(&[], &[], 3, 3)));
    assert!(!state.is_partial());
    assert_eq!(state.status_line(), None);
}

#[test]
fn status_line_while_loading() {
    let mut state = RecommendationsState::default();
    state.begin("fair");
    assert_eq!(state.status_line().as_deref(), Some("Loading products..."));
}
