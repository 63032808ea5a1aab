//! Log view and export routes.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use review::export::{self, EXPORT_FILE_NAME};
use review::model::ChangeLogRecord;
use review::view::{self, ResultFilter};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    #[serde(default)]
    pub result: ResultFilter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsResponse {
    pub last_run: Option<String>,
    pub records: Vec<ChangeLogRecord>,
}

/// `GET /api/logs?result=all|changed|unchanged` — the filtered log view,
/// records in original store order.
pub async fn list_logs(State(state): State<AppState>, Query(params): Query<LogsQuery>) -> Json<LogsResponse> {
    let records = view::log_view(&state.data, params.result).into_iter().cloned().collect();

    Json(LogsResponse {
        last_run: state.data.log.last_run().map(str::to_owned),
        records,
    })
}

/// `GET /api/export` — the in-memory change log as a `data.json`
/// attachment, reproduced losslessly.
pub async fn export_change_log(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let body = export::export_change_log(state.data.log.log()).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok((
        [
            (CONTENT_TYPE, "application/json; charset=utf-8".to_owned()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{EXPORT_FILE_NAME}\"")),
        ],
        body,
    )
        .into_response())
}
