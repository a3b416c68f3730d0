use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::addresses::handlers;
use crate::features::addresses::services::DirectoryService;

/// Create routes for the addresses feature
///
/// Note: stateless, no user header required
pub fn routes(directory: Arc<DirectoryService>) -> Router {
    Router::new()
        .route("/api/addresses", get(handlers::search_addresses))
        .with_state(directory)
}
