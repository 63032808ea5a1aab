//! View-model layer for the fire-safety standards review viewer.
//!
//! This crate owns the pure data-transform side of the viewer: the serde
//! model for the four external JSON sources, the in-memory stores built from
//! them, the changed/unchanged status resolver, the view filter engine, and
//! the lossless change-log export. It performs no I/O and knows nothing
//! about HTTP or rendering, so any UI layer (web, CLI, TUI) can consume it
//! identically.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | serde data model for catalogs, snapshots, and the change log |
//! | [`catalog`] | Per-category standard lists ([`catalog::CatalogStore`]) |
//! | [`snapshot`] | Last-known metadata per standard ([`snapshot::SnapshotStore`]) |
//! | [`changelog`] | Review records and the status resolver ([`changelog::ChangeLogStore`]) |
//! | [`view`] | Filtered projections over the stores ([`view::ReviewData`]) |
//! | [`export`] | Lossless change-log re-serialization |
//! | [`markup`] | HTML escaping and row fragment rendering |

pub mod catalog;
pub mod changelog;
pub mod export;
pub mod markup;
pub mod model;
pub mod snapshot;
pub mod view;
