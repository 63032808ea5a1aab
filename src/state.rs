//! Shared application state.

use std::sync::Arc;

use review::view::ReviewData;

/// Shared application state, injected into Axum handlers via the State
/// extractor. The review data is built once at startup and immutable for
/// the life of the process; a fresh load requires a restart.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<ReviewData>,
}

impl AppState {
    #[must_use]
    pub fn new(data: ReviewData) -> Self {
        Self { data: Arc::new(data) }
    }
}
