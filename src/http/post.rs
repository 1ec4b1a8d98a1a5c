use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::*;

use crate::appstate::AppState;
use crate::messages::ThresholdUpdate;

pub const THRESHOLD_UPDATED: &str = "Threshold updated";
pub const INVALID_SENSOR_ID: &str = "Invalid sensor ID";
pub const INVALID_UPDATE_REQUEST: &str = "Invalid update request";

/// POST request handler replacing the shared threshold
///
/// Only updates addressed to this sensor's identity are applied, anything else
/// is answered with `400 BAD_REQUEST` and leaves the threshold untouched.
#[axum::debug_handler]
pub async fn post_update_threshold(
    State(state): State<AppState>,
    payload: Result<Json<ThresholdUpdate>, JsonRejection>,
) -> (StatusCode, &'static str) {
    let update = match payload {
        Ok(Json(update)) => update,
        Err(rejection) => {
            warn!(
                "POST update-threshold rejected malformed request: {}",
                rejection.body_text()
            );
            return (StatusCode::BAD_REQUEST, INVALID_UPDATE_REQUEST);
        }
    };

    if update.sensor_id != *state.sensor_id {
        debug!(
            "POST update-threshold addressed to sensor {:?}, ignoring",
            update.sensor_id
        );
        return (StatusCode::BAD_REQUEST, INVALID_SENSOR_ID);
    }

    let previous = state.threshold.set(update.threshold);
    info!(
        "New threshold value: {} (was {})",
        update.threshold, previous
    );
    (StatusCode::OK, THRESHOLD_UPDATED)
}
