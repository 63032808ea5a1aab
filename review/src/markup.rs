//! HTML escaping and row fragment rendering.
//!
//! Every string originating from the external JSON sources is untrusted and
//! must pass through [`escape`] before being interpolated into generated
//! markup. The renderers here are pure string functions with no DOM types,
//! consumed by whatever layer assembles the final page.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use crate::model::{ChangeLogRecord, ReviewResult};
use crate::view::{Detail, StandardRow};

/// HTML-escape a string: `&`, `<`, `>`, `"`, `'`, ampersand first.
#[must_use]
pub fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Status badge fragment.
#[must_use]
pub fn badge(status: ReviewResult) -> String {
    match status {
        ReviewResult::Unchanged => r#"<span class="badge ok">unchanged</span>"#.to_owned(),
        ReviewResult::Changed => r#"<span class="badge warn">changed</span>"#.to_owned(),
    }
}

/// One standards-view row.
#[must_use]
pub fn standard_item(row: &StandardRow<'_>) -> String {
    let code = escape(&row.standard.code);
    let title = escape(row.standard.title.as_deref().unwrap_or(""));
    let notice_no = escape(row.standard.notice_no.as_deref().unwrap_or(""));
    let url = escape(row.standard.url.as_deref().unwrap_or(""));

    format!(
        concat!(
            "<div class=\"item\" data-code=\"{code}\" data-category=\"{category}\">",
            "<div class=\"itemTop\"><div><div class=\"code\">{code}</div>",
            "<div class=\"title\">{title}</div></div>{badge}</div>",
            "<div class=\"small\">{notice_no} · {url}</div></div>"
        ),
        code = code,
        category = row.category.as_str(),
        title = title,
        badge = badge(row.status),
        notice_no = notice_no,
        url = url,
    )
}

/// One log-view row.
#[must_use]
pub fn log_row(record: &ChangeLogRecord) -> String {
    let changed_codes = record.changes.iter().map(|c| escape(&c.code)).collect::<Vec<_>>().join(", ");
    let changed_codes = if changed_codes.is_empty() { "-".to_owned() } else { changed_codes };

    format!(
        concat!(
            "<div class=\"logRow\"><div class=\"logRowHead\">",
            "<div><b>{date}</b> <span class=\"small\">{scope}</span></div>{badge}</div>",
            "<div class=\"small\">{summary}</div>",
            "<div class=\"small\"><b>changes:</b> {changed}</div></div>"
        ),
        date = escape(&record.date),
        scope = escape(record.scope.as_deref().unwrap_or("NFPC / NFTC")),
        badge = badge(record.result),
        summary = escape(record.summary.as_deref().unwrap_or("")),
        changed = changed_codes,
    )
}

/// The snapshot metadata table of a detail view, or the first-review
/// fallback line when no snapshot exists yet.
#[must_use]
pub fn detail_section(detail: &Detail<'_>) -> String {
    let Some(snapshot) = detail.snapshot else {
        return r#"<div class="small">No snapshot yet (created after the first automated review).</div>"#.to_owned();
    };

    // The snapshot's notice number wins; the catalog value is the fallback.
    let notice_no = snapshot
        .notice_no
        .as_deref()
        .or(detail.standard.notice_no.as_deref())
        .unwrap_or("-");

    let rows = [
        ("Notice no.", notice_no),
        ("Announced", snapshot.announce_date.as_deref().unwrap_or("-")),
        ("Effective", snapshot.effective_date.as_deref().unwrap_or("-")),
        ("Revision type", snapshot.revision_type.as_deref().unwrap_or("-")),
        ("Last checked", snapshot.checked_at.as_deref().unwrap_or("-")),
    ];

    let body: String = rows
        .iter()
        .map(|(label, value)| format!("<tr><td>{}</td><td>{}</td></tr>", label, escape(value)))
        .collect();

    format!(
        concat!(
            "<table class=\"tbl\"><thead><tr><th>Field</th><th>Value</th></tr></thead>",
            "<tbody>{body}</tbody></table>"
        ),
        body = body,
    )
}
