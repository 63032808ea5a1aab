//! View filter engine: filtered projections over the loaded stores.
//!
//! DESIGN
//! ======
//! `ReviewData` is the explicit application-state object: the three stores,
//! built once at load time and immutable afterwards. Every projection here
//! is a deterministic, side-effect-free function of `(&ReviewData, filter
//! state)`, recomputed in full on each call. There is no incremental
//! diffing; identical inputs yield identical output sequences.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogStore;
use crate::changelog::ChangeLogStore;
use crate::model::{Category, ChangeLogRecord, ReviewResult, Snapshot, Standard};
use crate::snapshot::SnapshotStore;

/// The loaded application state: catalogs, snapshots, and the change log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewData {
    pub catalogs: CatalogStore,
    pub snapshots: SnapshotStore,
    pub log: ChangeLogStore,
}

impl ReviewData {
    #[must_use]
    pub fn new(catalogs: CatalogStore, snapshots: SnapshotStore, log: ChangeLogStore) -> Self {
        Self { catalogs, snapshots, log }
    }
}

/// One row of the standards view: a catalog entry annotated with its
/// resolved status and its snapshot, if one exists.
#[derive(Clone, Copy, Debug)]
pub struct StandardRow<'a> {
    pub category: Category,
    pub standard: &'a Standard,
    pub status: ReviewResult,
    pub snapshot: Option<&'a Snapshot>,
}

/// Result-type filter for the log view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFilter {
    #[default]
    All,
    Changed,
    Unchanged,
}

impl ResultFilter {
    /// Whether a record with the given result passes this filter.
    #[must_use]
    pub fn keeps(self, result: ReviewResult) -> bool {
        match self {
            Self::All => true,
            Self::Changed => result == ReviewResult::Changed,
            Self::Unchanged => result == ReviewResult::Unchanged,
        }
    }
}

/// Detail view payload: the catalog entry plus its snapshot, if present.
#[derive(Clone, Copy, Debug)]
pub struct Detail<'a> {
    pub category: Category,
    pub standard: &'a Standard,
    pub snapshot: Option<&'a Snapshot>,
}

/// Error from [`detail_of`]. A missing snapshot is NOT an error; only a
/// code absent from the catalog is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetailError {
    #[error("standard {code} not found in {category}")]
    NotFound { category: Category, code: String },
}

/// The standards view: one category's catalog filtered by a free-text
/// query, each row annotated with status and snapshot.
///
/// Matching is a trimmed, case-insensitive substring test against the
/// joined `code title noticeNo url` haystack (all four fields, always).
/// An empty query returns the full category list. Catalog order is
/// preserved.
#[must_use]
pub fn standards_view<'a>(data: &'a ReviewData, category: Category, query: &str) -> Vec<StandardRow<'a>> {
    let needle = query.trim().to_lowercase();

    data.catalogs
        .standards(category)
        .iter()
        .filter(|standard| needle.is_empty() || matches_query(standard, &needle))
        .map(|standard| StandardRow {
            category,
            standard,
            status: data.log.status_of(&standard.code),
            snapshot: data.snapshots.get(category, &standard.code),
        })
        .collect()
}

fn matches_query(standard: &Standard, needle: &str) -> bool {
    let haystack = [
        standard.code.as_str(),
        standard.title.as_deref().unwrap_or(""),
        standard.notice_no.as_deref().unwrap_or(""),
        standard.url.as_deref().unwrap_or(""),
    ]
    .join(" ")
    .to_lowercase();

    haystack.contains(needle)
}

/// The log view: review records filtered by result type, in original store
/// order.
#[must_use]
pub fn log_view(data: &ReviewData, filter: ResultFilter) -> Vec<&ChangeLogRecord> {
    data.log.records().iter().filter(|record| filter.keeps(record.result)).collect()
}

/// Detail lookup for one standard.
///
/// # Errors
///
/// Returns [`DetailError::NotFound`] if the code does not exist in the
/// catalog for that category. A standard without a snapshot (no review has
/// recorded it yet) is returned with `snapshot: None`.
pub fn detail_of<'a>(data: &'a ReviewData, category: Category, code: &str) -> Result<Detail<'a>, DetailError> {
    let standard = data
        .catalogs
        .find(category, code)
        .ok_or_else(|| DetailError::NotFound { category, code: code.to_owned() })?;

    Ok(Detail { category, standard, snapshot: data.snapshots.get(category, code) })
}
