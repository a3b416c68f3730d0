use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::messages::handlers;
use crate::features::messages::services::MessageService;

/// Create routes for the messages feature
pub fn routes(service: Arc<MessageService>) -> Router {
    Router::new()
        .route("/api/messages", post(handlers::send_message))
        .with_state(service)
}
