//! Standards view and detail routes.

#[cfg(test)]
#[path = "standards_test.rs"]
mod standards_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use review::model::{Category, ReviewResult, Snapshot, Standard};
use review::view::{self, DetailError, StandardRow};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StandardsQuery {
    pub category: Category,
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardRowResponse {
    pub category: Category,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub status: ReviewResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
}

fn to_response(row: &StandardRow<'_>) -> StandardRowResponse {
    StandardRowResponse {
        category: row.category,
        code: row.standard.code.clone(),
        title: row.standard.title.clone(),
        notice_no: row.standard.notice_no.clone(),
        url: row.standard.url.clone(),
        status: row.status,
        snapshot: row.snapshot.cloned(),
    }
}

/// `GET /api/standards?category=nfpc&q=…` — the filtered standards view,
/// each row annotated with status and snapshot.
pub async fn list_standards(
    State(state): State<AppState>,
    Query(params): Query<StandardsQuery>,
) -> Json<Vec<StandardRowResponse>> {
    let rows = view::standards_view(&state.data, params.category, &params.q);
    Json(rows.iter().map(to_response).collect())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse {
    pub category: Category,
    pub standard: Standard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
}

/// `GET /api/detail/{category}/{code}` — one standard with its snapshot.
/// 404 when the code is not in the catalog; a standard without a snapshot
/// is returned with the field absent.
pub async fn standard_detail(
    State(state): State<AppState>,
    Path((category, code)): Path<(Category, String)>,
) -> Result<Json<DetailResponse>, StatusCode> {
    let detail = view::detail_of(&state.data, category, &code).map_err(detail_error_to_status)?;

    Ok(Json(DetailResponse {
        category: detail.category,
        standard: detail.standard.clone(),
        snapshot: detail.snapshot.cloned(),
    }))
}

pub(crate) fn detail_error_to_status(err: DetailError) -> StatusCode {
    match err {
        DetailError::NotFound { .. } => StatusCode::NOT_FOUND,
    }
}
