use crate::error::CollectorError;
use crate::messages::{ReadingReport, ThresholdResponse};

pub mod http;

pub use http::HttpCollector;

/// Remote collector the sensor reports to
#[async_trait::async_trait]
pub trait Collector: Send + Sync {
    /// Fetch the sensor record holding the initial threshold
    async fn fetch_threshold(&self, sensor_id: &str) -> Result<ThresholdResponse, CollectorError>;

    /// Submit a single reading
    async fn send_reading(&self, report: &ReadingReport) -> Result<(), CollectorError>;
}

#[async_trait::async_trait]
impl<T: Collector + ?Sized> Collector for std::sync::Arc<T> {
    async fn fetch_threshold(&self, sensor_id: &str) -> Result<ThresholdResponse, CollectorError> {
        (**self).fetch_threshold(sensor_id).await
    }

    async fn send_reading(&self, report: &ReadingReport) -> Result<(), CollectorError> {
        (**self).send_reading(report).await
    }
}
