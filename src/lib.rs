pub mod appstate;
pub mod communicator;
pub mod config;
pub mod error;
pub mod http;
pub mod messages;
pub mod reporting_task;
pub mod sensor;
pub mod shutdown;
