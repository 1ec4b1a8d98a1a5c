use anyhow::Context;
use threshold_sensor::communicator::HttpCollector;
use threshold_sensor::config::SensorConfig;
use threshold_sensor::http::router;
use threshold_sensor::reporting_task::{initialize, report_readings};
use threshold_sensor::shutdown;
use tokio::task;
use tracing::*;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Application & Tokio executor entrypoint
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default tracing subscriber failed")?;

    let config = SensorConfig::from_env().context("loading sensor configuration")?;
    info!("Sensor {} starting", config.sensor_id);
    info!("  - Threshold source: {}/{}", config.server_url, config.sensor_id);
    info!("  - Reading endpoint: {}", config.threshold_url);
    info!("  - Report interval: {:?}", config.report_interval);

    let collector = HttpCollector::try_new(&config).context("building collector client")?;

    // Never report against an unknown threshold
    let state = initialize(&collector, &config.sensor_id, config.request_timeout)
        .await
        .context("fetching initial threshold")?;

    let (shutdown_sender, shutdown_receiver) = shutdown::channel();
    task::spawn(shutdown::on_ctrl_c(shutdown_sender));

    let reporter = task::spawn(report_readings(
        collector,
        state.clone(),
        config.report_interval,
        config.request_timeout,
        shutdown_receiver.clone(),
    ));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("binding threshold listener to {}", config.bind_address()))?;
    info!("Listening for threshold updates on http://{}", config.bind_address());

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown::requested(shutdown_receiver))
        .await
        .context("threshold listener failed")?;

    if let Err(err) = reporter.await {
        error!("reporting task ended abnormally: {err}");
    }
    Ok(())
}
