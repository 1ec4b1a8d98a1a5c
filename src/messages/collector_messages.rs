use serde::{Deserialize, Serialize};

use crate::sensor::Reading;

/// Threshold assumed when the collector's sensor record carries none
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Sensor record returned by `GET {server_url}/{sensor_id}`.
///
/// The collector sends its whole sensor record; only `threshold` is of interest.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ThresholdResponse {
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Measurement submitted to `{threshold_url}` once per loop iteration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ReadingReport {
    pub sensor_id: String,
    pub value: f64,
    pub is_above_threshold: bool,
}

impl ReadingReport {
    pub fn new(sensor_id: &str, reading: &Reading) -> Self {
        Self {
            sensor_id: sensor_id.to_string(),
            value: reading.value,
            is_above_threshold: reading.is_above_threshold,
        }
    }
}
