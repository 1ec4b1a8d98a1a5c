use serde::Deserialize;

/// Body of `POST /update-threshold`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThresholdUpdate {
    /// Sensor the update is addressed to, must match exactly
    pub sensor_id: String,
    /// Replacement threshold
    pub threshold: f64,
}
