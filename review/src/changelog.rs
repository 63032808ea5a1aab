//! Change log store and the changed/unchanged status resolver.

#[cfg(test)]
#[path = "changelog_test.rs"]
mod changelog_test;

use crate::model::{ChangeLog, ChangeLogRecord, ReviewResult};

/// Read-only store of the review history.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChangeLogStore {
    log: ChangeLog,
}

impl ChangeLogStore {
    /// Build the store from the loaded change log.
    #[must_use]
    pub fn new(log: ChangeLog) -> Self {
        Self { log }
    }

    /// Every review record, in original source order.
    #[must_use]
    pub fn records(&self) -> &[ChangeLogRecord] {
        &self.log.records
    }

    /// Timestamp of the most recent review run, if any has run.
    #[must_use]
    pub fn last_run(&self) -> Option<&str> {
        self.log.last_run.as_deref()
    }

    /// The full change log, as loaded. Used by the export path.
    #[must_use]
    pub fn log(&self) -> &ChangeLog {
        &self.log
    }

    /// Derive the status of one standard code from the review history.
    ///
    /// A code is `Changed` iff any record with `result == Changed` names it
    /// in `changes`: ever-appeared semantics over the whole history, not
    /// just the latest run. The full record sequence is scanned; no ordering
    /// is assumed. Linear in records × changes-per-record, which is cheap at
    /// the tens-to-hundreds scale this data has.
    #[must_use]
    pub fn status_of(&self, code: &str) -> ReviewResult {
        for record in &self.log.records {
            if record.result.is_changed() && record.changes.iter().any(|c| c.code == code) {
                return ReviewResult::Changed;
            }
        }
        ReviewResult::Unchanged
    }
}
