//! Data model for the four external JSON sources.
//!
//! All sources use camelCase keys and are produced by an external review
//! process the viewer treats as opaque. Typed fields cover everything the
//! viewer reads; open-ended `#[serde(flatten)]` maps carry producer fields
//! the viewer does not interpret, so re-serializing a loaded change log
//! loses nothing.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One of the two standard families partitioning the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Performance standards.
    Nfpc,
    /// Technical standards.
    Nftc,
}

impl Category {
    /// Both categories, in display order.
    pub const ALL: [Self; 2] = [Self::Nfpc, Self::Nftc];

    /// Lowercase key used in source files and URLs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nfpc => "nfpc",
            Self::Nftc => "nftc",
        }
    }

    /// Uppercase display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Nfpc => "NFPC",
            Self::Nftc => "NFTC",
        }
    }

    /// Parse the lowercase source-file key.
    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "nfpc" => Some(Self::Nfpc),
            "nftc" => Some(Self::Nftc),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One standard as listed in a catalog file. Immutable after load; identity
/// is (category, code), with the category carried by the store partition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standard {
    /// Standard code, unique within its category (e.g. `"NFPC 101"`).
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Shape of a catalog source file. A parseable file without an `items` key
/// yields an empty catalog rather than an error.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub items: Vec<Standard>,
}

/// Last-known metadata for one standard, written wholesale by each review
/// cycle. Producer-only fields (content hashes, error records, rule
/// metadata) ride along in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announce_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Shape of the snapshot source file: one code-keyed map per category.
/// The whole file is optional; either map may be absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub nfpc: HashMap<String, Snapshot>,
    #[serde(default)]
    pub nftc: HashMap<String, Snapshot>,
}

/// Outcome of a review run, and equally the derived status of a standard.
/// Both share the same two-value domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewResult {
    Changed,
    Unchanged,
}

impl ReviewResult {
    /// Lowercase wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
        }
    }

    #[must_use]
    pub fn is_changed(self) -> bool {
        self == Self::Changed
    }
}

/// One code named as changed by a review record. The producer enriches
/// entries with titles, reasons, and references; those stay in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub code: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One historical review run. Append-only at the producer; the viewer must
/// not assume any ordering of the record sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogRecord {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub result: ReviewResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub changes: Vec<ChangeEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The full change log: the last run marker plus every review record.
/// Loaded once and read-only for the viewer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLog {
    pub last_run: Option<String>,
    #[serde(default)]
    pub records: Vec<ChangeLogRecord>,
}
