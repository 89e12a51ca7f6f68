//! Product recommendation and catalog routes.

#[cfg(test)]
#[path = "recommendations_test.rs"]
mod recommendations_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::catalog::{CatalogProduct, SkinTone};
use crate::services::paging::{PageOf, PageRequest, PagingError, paginate};
use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the shadematch API!";
pub const INVALID_SKIN_TONE_MESSAGE: &str = "Invalid skin tone. Please choose 'fair', 'medium', or 'dark'";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{}", INVALID_SKIN_TONE_MESSAGE)]
    InvalidSkinTone(String),
    #[error(transparent)]
    Paging(#[from] PagingError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidSkinTone(_) => StatusCode::BAD_REQUEST,
            Self::Paging(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::InvalidSkinTone(tone) = &self {
            tracing::debug!(%tone, "rejected unknown skin tone");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Raw `page`/`limit` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for `GET /api/data`.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub mst: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsPage {
    pub skin_tone: String,
    pub recommended_colors: Vec<&'static str>,
    pub avoid_colors: Vec<&'static str>,
    #[serde(flatten)]
    pub page: PageOf<CatalogProduct>,
}

/// `GET /api` — liveness greeting.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": WELCOME_MESSAGE }))
}

/// `GET /api/recommendations/skin-tone/{skin_tone}` — products in the tone's
/// best color categories, paginated.
pub async fn skin_tone_recommendations(
    State(state): State<AppState>,
    Path(skin_tone): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<RecommendationsPage>, ApiError> {
    let tone = SkinTone::parse(&skin_tone).ok_or_else(|| ApiError::InvalidSkinTone(skin_tone.clone()))?;
    let request = PageRequest::parse(query.page, query.limit)?;

    let matches = state.catalog.recommended_for(tone);
    let page = paginate(&matches, request).map(Clone::clone);
    tracing::debug!(tone = tone.as_str(), total = page.total_items, page = page.page, "skin tone recommendations");

    Ok(Json(RecommendationsPage {
        skin_tone,
        recommended_colors: tone.best_colors().to_vec(),
        avoid_colors: tone.avoid_colors().to_vec(),
        page,
    }))
}

/// `GET /api/data` — the catalog, optionally filtered by `mst`, paginated.
pub async fn catalog_data(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<PageOf<CatalogProduct>>, ApiError> {
    let request = PageRequest::parse(query.page, query.limit)?;
    let matches = state.catalog.with_mst(query.mst.as_deref());
    Ok(Json(paginate(&matches, request).map(Clone::clone)))
}
