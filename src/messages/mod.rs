pub mod collector_messages;
pub mod listener_messages;

pub use collector_messages::{DEFAULT_THRESHOLD, ReadingReport, ThresholdResponse};
pub use listener_messages::ThresholdUpdate;
