use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::sessions::handlers::{self, SessionState};
use crate::features::sessions::services::SessionStore;
use crate::modules::shipping::ShippingRateProvider;

/// Create routes for the sessions feature
///
/// Every route acts on the session of the `X-User-Id` caller.
pub fn routes(store: Arc<SessionStore>, shipping: Arc<dyn ShippingRateProvider>) -> Router {
    let state = SessionState { store, shipping };

    Router::new()
        .route("/api/sessions/results", get(handlers::get_results))
        .route(
            "/api/sessions/selection",
            post(handlers::select_address).get(handlers::get_selection),
        )
        .route(
            "/api/sessions/selection/shipping-estimates",
            get(handlers::get_shipping_estimates),
        )
        .with_state(state)
}
