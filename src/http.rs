use axum::Router;
use axum::routing;

use crate::appstate::AppState;

pub mod post;

pub use post::post_update_threshold;

/// Route used by operators to push a new threshold
pub const UPDATE_THRESHOLD_ROUTE: &str = "/update-threshold";

/// Threshold listener router, the only externally reachable surface of the sensor
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(UPDATE_THRESHOLD_ROUTE, routing::post(post_update_threshold))
        .with_state(state)
}
