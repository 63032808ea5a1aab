//! Startup loading of the four JSON data sources.
//!
//! DESIGN
//! ======
//! All four reads run concurrently and the server waits for every one of
//! them before binding the listener. The two catalogs and the change log
//! are required inputs; an unreadable or unparseable file is fatal. The
//! snapshot source is optional: on any failure it is replaced by an empty
//! store, because "no review has run yet" is a normal state of the system.
//! Stores are never reloaded; a fresh data set requires a restart.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::path::{Path, PathBuf};

use review::catalog::CatalogStore;
use review::changelog::ChangeLogStore;
use review::model::{CatalogFile, ChangeLog, SnapshotFile};
use review::snapshot::SnapshotStore;
use review::view::ReviewData;
use serde::de::DeserializeOwned;
use tracing::warn;

pub const NFPC_CATALOG_FILE: &str = "standards_nfpc.json";
pub const NFTC_CATALOG_FILE: &str = "standards_nftc.json";
pub const CHANGE_LOG_FILE: &str = "data.json";
pub const SNAPSHOT_FILE: &str = "snapshot.json";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

async fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<T, LoadError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| LoadError::Io { path: path.clone(), source })?;

    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse { path, source })
}

/// Load the snapshot source, substituting empty maps when the file is
/// missing or malformed. Never fatal.
async fn read_snapshots(path: PathBuf) -> SnapshotFile {
    match read_json::<SnapshotFile>(path).await {
        Ok(file) => file,
        Err(error) => {
            warn!(%error, "snapshot source unavailable; starting with empty snapshots");
            SnapshotFile::default()
        }
    }
}

/// Read all four sources from `data_dir` concurrently and assemble the
/// immutable application state.
///
/// # Errors
///
/// Returns a [`LoadError`] when a catalog or the change log cannot be read
/// or parsed. A catalog that parses but has no `items` key loads as empty.
pub async fn load_review_data(data_dir: &Path) -> Result<ReviewData, LoadError> {
    let (nfpc, nftc, log, snapshots) = tokio::join!(
        read_json::<CatalogFile>(data_dir.join(NFPC_CATALOG_FILE)),
        read_json::<CatalogFile>(data_dir.join(NFTC_CATALOG_FILE)),
        read_json::<ChangeLog>(data_dir.join(CHANGE_LOG_FILE)),
        read_snapshots(data_dir.join(SNAPSHOT_FILE)),
    );

    Ok(ReviewData::new(
        CatalogStore::new(nfpc?, nftc?),
        SnapshotStore::new(snapshots),
        ChangeLogStore::new(log?),
    ))
}
