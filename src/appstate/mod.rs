use std::sync::{Arc, Mutex, PoisonError};

/// The one value shared between the reporting loop and the threshold listener.
///
/// Access only goes through [`SharedThreshold::get`] and [`SharedThreshold::set`];
/// the lock is never held across an await point.
#[derive(Debug, Clone)]
pub struct SharedThreshold {
    value: Arc<Mutex<f64>>,
}

impl SharedThreshold {
    pub fn new(initial: f64) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial)),
        }
    }

    /// Current threshold
    pub fn get(&self) -> f64 {
        // A poisoned f64 is still a whole f64
        *self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the threshold, returning the previous value
    pub fn set(&self, new_threshold: f64) -> f64 {
        let mut guard = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, new_threshold)
    }
}

/// All shared state involved in reporting and http communication
#[derive(Debug, Clone)]
pub struct AppState {
    /// Identity of this sensor, fixed for the process lifetime
    pub sensor_id: Arc<str>,
    /// Threshold readings are compared against
    pub threshold: SharedThreshold,
}

impl AppState {
    pub fn new(sensor_id: impl Into<Arc<str>>, initial_threshold: f64) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            threshold: SharedThreshold::new(initial_threshold),
        }
    }
}
