use reqwest::{Client, Response};
use tracing::*;

use crate::communicator::Collector;
use crate::config::SensorConfig;
use crate::error::CollectorError;
use crate::messages::{ReadingReport, ThresholdResponse};

/// Collector reached over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpCollector {
    client: Client,
    server_url: String,
    threshold_url: String,
}

impl HttpCollector {
    /// Build a collector client from the sensor configuration.
    ///
    /// Certificate verification stays on unless `accept_invalid_certs` is set.
    pub fn try_new(config: &SensorConfig) -> Result<Self, CollectorError> {
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is DISABLED for collector requests");
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self::with_client(
            client,
            config.server_url.clone(),
            config.threshold_url.clone(),
        ))
    }

    /// Reuse an existing [`reqwest::Client`]
    pub fn with_client(client: Client, server_url: String, threshold_url: String) -> Self {
        Self {
            client,
            server_url,
            threshold_url,
        }
    }

    fn threshold_endpoint(&self, sensor_id: &str) -> String {
        format!("{}/{}", self.server_url.trim_end_matches('/'), sensor_id)
    }

    /// Turn a non-2xx response into [`CollectorError::HttpStatus`], keeping the body
    async fn ensure_success(response: Response) -> Result<Response, CollectorError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CollectorError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Collector for HttpCollector {
    async fn fetch_threshold(&self, sensor_id: &str) -> Result<ThresholdResponse, CollectorError> {
        let url = self.threshold_endpoint(sensor_id);
        debug!("GET {url}");

        let response = Self::ensure_success(self.client.get(&url).send().await?).await?;
        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn send_reading(&self, report: &ReadingReport) -> Result<(), CollectorError> {
        let response = self
            .client
            .post(&self.threshold_url)
            .json(report)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }
}
