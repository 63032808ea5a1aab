use serde_json::Map;

use super::*;
use crate::catalog::CatalogStore;
use crate::changelog::ChangeLogStore;
use crate::model::{
    CatalogFile, Category, ChangeEntry, ChangeLog, ChangeLogRecord, ReviewResult, Snapshot, SnapshotFile, Standard,
};
use crate::snapshot::SnapshotStore;

fn make_standard(code: &str, title: &str, notice_no: &str, url: &str) -> Standard {
    Standard {
        code: code.to_owned(),
        title: Some(title.to_owned()),
        notice_no: Some(notice_no.to_owned()),
        url: Some(url.to_owned()),
    }
}

fn make_record(result: ReviewResult, codes: &[&str]) -> ChangeLogRecord {
    ChangeLogRecord {
        date: "2025-07-01".to_owned(),
        scope: None,
        result,
        summary: None,
        changes: codes
            .iter()
            .map(|c| ChangeEntry { code: (*c).to_owned(), extra: Map::new() })
            .collect(),
        extra: Map::new(),
    }
}

/// Worked example: two NFPC standards, one changed record naming A001, a
/// snapshot only for A001.
fn make_data() -> ReviewData {
    let nfpc = CatalogFile {
        items: vec![
            make_standard("A001", "Fire Door Spec", "2024-1", "https://example.test/a001"),
            make_standard("A002", "Sprinkler Spec", "2024-2", "https://example.test/a002"),
        ],
    };
    let nftc = CatalogFile { items: vec![make_standard("B001", "Alarm Wiring", "2023-9", "https://example.test/b001")] };

    let mut snapshots = SnapshotFile::default();
    snapshots.nfpc.insert(
        "A001".to_owned(),
        Snapshot { notice_no: Some("2024-1".to_owned()), ..Snapshot::default() },
    );

    let log = ChangeLog {
        last_run: Some("2025-07-01".to_owned()),
        records: vec![
            make_record(ReviewResult::Changed, &["A001"]),
            make_record(ReviewResult::Unchanged, &[]),
        ],
    };

    ReviewData::new(
        CatalogStore::new(nfpc, nftc),
        SnapshotStore::new(snapshots),
        ChangeLogStore::new(log),
    )
}

// =============================================================
// standards_view
// =============================================================

#[test]
fn empty_query_returns_full_category_in_order() {
    let data = make_data();
    let rows = standards_view(&data, Category::Nfpc, "");
    let codes: Vec<&str> = rows.iter().map(|r| r.standard.code.as_str()).collect();
    assert_eq!(codes, ["A001", "A002"]);
}

#[test]
fn whitespace_query_is_treated_as_empty() {
    let data = make_data();
    let rows = standards_view(&data, Category::Nfpc, "   ");
    assert_eq!(rows.len(), 2);
}

#[test]
fn query_matches_title_case_insensitively() {
    let data = make_data();
    let rows = standards_view(&data, Category::Nfpc, "sprinkler");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].standard.code, "A002");
}

#[test]
fn query_matches_code_notice_no_and_url() {
    let data = make_data();
    assert_eq!(standards_view(&data, Category::Nfpc, "a001").len(), 1);
    assert_eq!(standards_view(&data, Category::Nfpc, "2024-2").len(), 1);
    assert_eq!(standards_view(&data, Category::Nfpc, "example.test/a002").len(), 1);
}

#[test]
fn query_matching_nothing_returns_empty() {
    let data = make_data();
    assert!(standards_view(&data, Category::Nfpc, "standpipe").is_empty());
}

#[test]
fn rows_are_annotated_with_status_and_snapshot() {
    let data = make_data();
    let rows = standards_view(&data, Category::Nfpc, "");

    assert_eq!(rows[0].status, ReviewResult::Changed);
    assert!(rows[0].snapshot.is_some());

    assert_eq!(rows[1].status, ReviewResult::Unchanged);
    assert!(rows[1].snapshot.is_none());
}

#[test]
fn view_is_scoped_to_the_requested_category() {
    let data = make_data();
    let rows = standards_view(&data, Category::Nftc, "");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, Category::Nftc);
    assert_eq!(rows[0].standard.code, "B001");
}

#[test]
fn recomputing_an_unchanged_view_is_idempotent() {
    let data = make_data();
    let first = standards_view(&data, Category::Nfpc, "spec");
    let second = standards_view(&data, Category::Nfpc, "spec");
    let first_codes: Vec<&str> = first.iter().map(|r| r.standard.code.as_str()).collect();
    let second_codes: Vec<&str> = second.iter().map(|r| r.standard.code.as_str()).collect();
    assert_eq!(first_codes, second_codes);
}

// =============================================================
// log_view
// =============================================================

#[test]
fn filter_all_returns_every_record_in_order() {
    let data = make_data();
    let records = log_view(&data, ResultFilter::All);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].result, ReviewResult::Changed);
    assert_eq!(records[1].result, ReviewResult::Unchanged);
}

#[test]
fn filter_changed_returns_only_changed_records() {
    let data = make_data();
    let records = log_view(&data, ResultFilter::Changed);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].result, ReviewResult::Changed);
}

#[test]
fn filter_unchanged_returns_only_unchanged_records() {
    let data = make_data();
    let records = log_view(&data, ResultFilter::Unchanged);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].result, ReviewResult::Unchanged);
}

#[test]
fn result_filter_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&ResultFilter::Changed).unwrap(), "\"changed\"");
    let back: ResultFilter = serde_json::from_str("\"all\"").unwrap();
    assert_eq!(back, ResultFilter::All);
}

// =============================================================
// detail_of
// =============================================================

#[test]
fn detail_returns_standard_and_snapshot() {
    let data = make_data();
    let detail = detail_of(&data, Category::Nfpc, "A001").unwrap();
    assert_eq!(detail.standard.title.as_deref(), Some("Fire Door Spec"));
    assert!(detail.snapshot.is_some());
}

#[test]
fn detail_without_snapshot_is_not_an_error() {
    let data = make_data();
    let detail = detail_of(&data, Category::Nfpc, "A002").unwrap();
    assert_eq!(detail.standard.code, "A002");
    assert!(detail.snapshot.is_none());
}

#[test]
fn detail_unknown_code_is_not_found() {
    let data = make_data();
    let err = detail_of(&data, Category::Nfpc, "Z999").unwrap_err();
    assert_eq!(err, DetailError::NotFound { category: Category::Nfpc, code: "Z999".to_owned() });
    assert_eq!(err.to_string(), "standard Z999 not found in NFPC");
}

#[test]
fn detail_does_not_cross_categories() {
    let data = make_data();
    assert!(detail_of(&data, Category::Nftc, "A001").is_err());
}

// =============================================================
// status resolution through the view
// =============================================================

#[test]
fn worked_example_statuses() {
    let data = make_data();
    assert_eq!(data.log.status_of("A001"), ReviewResult::Changed);
    assert_eq!(data.log.status_of("A002"), ReviewResult::Unchanged);
}
