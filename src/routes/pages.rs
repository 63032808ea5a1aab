//! Server-rendered pages: the index and the per-standard detail view.
//!
//! The query string is the whole view state (`tab`, `q`, `result`): each
//! request recomputes the projections from the immutable stores and
//! assembles escaped fragments from `review::markup`. Every string that
//! originates in the external JSON passes through the escape boundary.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use review::markup;
use review::model::Category;
use review::view::{self, Detail, ResultFilter, ReviewData};
use serde::Deserialize;

use crate::routes::standards::detail_error_to_status;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub tab: Option<Category>,
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub result: ResultFilter,
}

/// `GET /?tab=nfpc&q=…&result=all` — the viewer index: the active tab's
/// standards list plus the filtered review log.
pub async fn index(State(state): State<AppState>, Query(params): Query<IndexQuery>) -> Html<String> {
    let tab = params.tab.unwrap_or(Category::Nfpc);
    Html(render_index(&state.data, tab, &params.q, params.result))
}

/// `GET /standard/{category}/{code}` — detail page for one standard: the
/// catalog entry plus its snapshot metadata table, or the first-review
/// fallback when no snapshot exists yet. 404 for codes not in the catalog.
pub async fn standard_page(
    State(state): State<AppState>,
    Path((category, code)): Path<(Category, String)>,
) -> Result<Html<String>, StatusCode> {
    let detail = view::detail_of(&state.data, category, &code).map_err(detail_error_to_status)?;
    Ok(Html(render_detail(&detail)))
}

fn tab_link(tab: Category, active: Category) -> String {
    let class = if tab == active { "tab active" } else { "tab" };
    format!(
        "<a class=\"{class}\" href=\"/?tab={key}\">{label}</a>",
        key = tab.as_str(),
        label = tab.label(),
    )
}

fn render_index(data: &ReviewData, tab: Category, query: &str, filter: ResultFilter) -> String {
    let standards: String = view::standards_view(data, tab, query)
        .iter()
        .map(markup::standard_item)
        .collect();
    let standards = if standards.is_empty() {
        r#"<div class="small">No items to display.</div>"#.to_owned()
    } else {
        standards
    };

    let records: String = view::log_view(data, filter).into_iter().map(markup::log_row).collect();
    let records = if records.is_empty() {
        r#"<div class="small">No review records.</div>"#.to_owned()
    } else {
        records
    };

    let tabs: String = Category::ALL.iter().map(|c| tab_link(*c, tab)).collect();
    let last_run = markup::escape(data.log.last_run().unwrap_or("-"));
    let query_attr = markup::escape(query);

    format!(
        concat!(
            "<!doctype html><html><head><meta charset=\"utf-8\">",
            "<title>codewatch</title></head><body>",
            "<header><h1>codewatch</h1>",
            "<div class=\"small\">Last review: {last_run}</div></header>",
            "<nav>{tabs}</nav>",
            "<form method=\"get\" action=\"/\">",
            "<input type=\"hidden\" name=\"tab\" value=\"{tab}\">",
            "<input type=\"search\" name=\"q\" value=\"{query}\" placeholder=\"code, title, notice no, url\">",
            "</form>",
            "<section id=\"stdList\">{standards}</section>",
            "<section id=\"logList\">{records}</section>",
            "<footer><a href=\"/api/export\">Download change log</a></footer>",
            "</body></html>"
        ),
        last_run = last_run,
        tabs = tabs,
        tab = tab.as_str(),
        query = query_attr,
        standards = standards,
        records = records,
    )
}

fn render_detail(detail: &Detail<'_>) -> String {
    let code = markup::escape(&detail.standard.code);
    let title = markup::escape(detail.standard.title.as_deref().unwrap_or(""));
    let url = markup::escape(detail.standard.url.as_deref().unwrap_or("#"));

    format!(
        concat!(
            "<!doctype html><html><head><meta charset=\"utf-8\">",
            "<title>{code} · codewatch</title></head><body>",
            "<header><h1>{code} · {title}</h1>",
            "<div class=\"small\">{category} · ",
            "<a href=\"{url}\" target=\"_blank\" rel=\"noreferrer\">source text</a></div></header>",
            "{section}",
            "<footer><a href=\"/?tab={tab}\">Back to list</a></footer>",
            "</body></html>"
        ),
        code = code,
        title = title,
        category = detail.category.label(),
        url = url,
        section = markup::detail_section(detail),
        tab = detail.category.as_str(),
    )
}
