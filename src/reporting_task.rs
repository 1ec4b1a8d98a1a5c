use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{self, timeout};
use tracing::*;

use crate::appstate::AppState;
use crate::communicator::Collector;
use crate::error::CollectorError;
use crate::messages::{DEFAULT_THRESHOLD, ReadingReport};
use crate::sensor::Reading;
use crate::shutdown::ShutdownReceiver;

/// Fetch the initial threshold and build the shared state around it.
///
/// Any failure here is fatal to the caller: the sensor must not report against
/// an unknown threshold.
pub async fn initialize<C: Collector + ?Sized>(
    collector: &C,
    sensor_id: &str,
    request_timeout: Duration,
) -> Result<AppState, CollectorError> {
    let response = timeout(request_timeout, collector.fetch_threshold(sensor_id))
        .await
        .map_err(|_| CollectorError::Timeout(request_timeout))??;

    let threshold = match response.threshold {
        Some(threshold) => threshold,
        None => {
            warn!(
                "Collector record for sensor {sensor_id} has no threshold, falling back to {DEFAULT_THRESHOLD}"
            );
            DEFAULT_THRESHOLD
        }
    };

    info!("Initial threshold value: {threshold}");
    Ok(AppState::new(sensor_id, threshold))
}

/// Generate a single reading and submit it to the collector.
///
/// Returns the reading that was sent, including the threshold it was compared against.
pub async fn report_reading<C, R>(
    collector: &C,
    state: &AppState,
    rng: &mut R,
    request_timeout: Duration,
) -> Result<Reading, CollectorError>
where
    C: Collector + ?Sized,
    R: Rng + ?Sized,
{
    // Read once: generation and comparison must see the same value
    let threshold = state.threshold.get();
    let reading = Reading::simulate(threshold, rng);
    info!(
        "Generated reading {} against threshold {} at {}",
        reading.value, reading.threshold, reading.generated_at
    );

    let report = ReadingReport::new(&state.sensor_id, &reading);
    timeout(request_timeout, collector.send_reading(&report))
        .await
        .map_err(|_| CollectorError::Timeout(request_timeout))??;

    info!("Sent: {:?}", report);
    Ok(reading)
}

/// Reporting loop: one reading per `interval` until shutdown is requested.
///
/// Send failures are logged and skipped, the next iteration is unaffected.
pub async fn report_readings<C: Collector>(
    collector: C,
    state: AppState,
    interval: Duration,
    request_timeout: Duration,
    mut shutdown: ShutdownReceiver,
) {
    let mut rng = StdRng::from_os_rng();
    info!(
        "Reporting readings for sensor {} every {:?}",
        state.sensor_id, interval
    );

    loop {
        if *shutdown.borrow() {
            break;
        }

        if let Err(err) = report_reading(&collector, &state, &mut rng, request_timeout).await {
            error!("Error sending reading: {err}");
        }

        tokio::select! {
            _ = time::sleep(interval) => {}
            changed = shutdown.changed() => {
                if changed.is_err() {
                    debug!("shutdown sender dropped");
                    break;
                }
            }
        }
    }

    info!("Reporting loop stopped");
}
