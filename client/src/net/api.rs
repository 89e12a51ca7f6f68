//! REST API helpers for the recommendation endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the page only fetches
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so a failed fetch shows
//! up as a status line rather than breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CatalogPage, ProductListing, RecommendationsResponse};

/// Largest page size the server accepts.
pub const MAX_PAGE_LIMIT: usize = 20;

/// Upper bound on server pages walked when assembling a full list.
pub const MAX_RECOMMENDATION_PAGES: usize = 10;

#[cfg(any(test, feature = "hydrate"))]
fn recommendations_endpoint(skin_tone: &str, page: usize, limit: usize) -> String {
    format!("/api/recommendations/skin-tone/{}?page={page}&limit={limit}", encode_segment(skin_tone))
}

#[cfg(any(test, feature = "hydrate"))]
fn catalog_endpoint(mst: Option<&str>, page: usize, limit: usize) -> String {
    match mst.filter(|m| !m.is_empty()) {
        Some(mst) => format!("/api/data?mst={}&page={page}&limit={limit}", encode_segment(mst)),
        None => format!("/api/data?page={page}&limit={limit}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16, error: Option<&str>) -> String {
    match error {
        Some(error) => format!("request failed: {status} ({error})"),
        None => format!("request failed: {status}"),
    }
}

/// Percent-encode everything outside the unreserved URL set.
#[cfg(any(test, feature = "hydrate"))]
fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Last page to request given the first response's page count.
fn last_page_to_fetch(total_pages: usize) -> usize {
    total_pages.min(MAX_RECOMMENDATION_PAGES)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let error = resp.json::<super::types::ApiErrorBody>().await.ok().map(|body| body.error);
        return Err(request_failed_message(resp.status(), error.as_deref()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch one page of recommendations for `skin_tone`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn fetch_recommendations(skin_tone: &str, page: usize, limit: usize) -> Result<RecommendationsResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&recommendations_endpoint(skin_tone, page, limit)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (skin_tone, page, limit);
        Err("not available on server".to_owned())
    }
}

/// Fetch one page of the catalog, optionally filtered by `mst`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn fetch_catalog_page(mst: Option<&str>, page: usize, limit: usize) -> Result<CatalogPage, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&catalog_endpoint(mst, page, limit)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (mst, page, limit);
        Err("not available on server".to_owned())
    }
}

/// Fetch every recommendation page for `skin_tone` (up to
/// `MAX_RECOMMENDATION_PAGES`) into one listing.
///
/// `total_items` keeps the server's count, so a walk cut short by the page
/// cap shows up as `ProductListing::is_partial`.
///
/// # Errors
///
/// Returns the first page error encountered.
pub async fn fetch_all_recommendations(skin_tone: &str) -> Result<ProductListing, String> {
    let first = fetch_recommendations(skin_tone, 1, MAX_PAGE_LIMIT).await?;
    let last_page = last_page_to_fetch(first.total_pages);
    let mut listing = ProductListing {
        recommended_colors: first.recommended_colors,
        avoid_colors: first.avoid_colors,
        products: first.data,
        total_items: first.total_items,
    };
    for page in 2..=last_page {
        let next = fetch_recommendations(skin_tone, page, MAX_PAGE_LIMIT).await?;
        listing.products.extend(next.data);
    }
    Ok(listing)
}

/// Fetch every catalog page tagged `mst` (up to `MAX_RECOMMENDATION_PAGES`)
/// into one listing. Catalog listings carry no color advice.
///
/// # Errors
///
/// Returns the first page error encountered.
pub async fn fetch_all_catalog(mst: Option<&str>) -> Result<ProductListing, String> {
    let first = fetch_catalog_page(mst, 1, MAX_PAGE_LIMIT).await?;
    let last_page = last_page_to_fetch(first.total_pages);
    let mut listing = ProductListing { products: first.data, total_items: first.total_items, ..ProductListing::default() };
    for page in 2..=last_page {
        let next = fetch_catalog_page(mst, page, MAX_PAGE_LIMIT).await?;
        listing.products.extend(next.data);
    }
    Ok(listing)
}
