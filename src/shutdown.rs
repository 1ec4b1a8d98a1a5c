use tokio::sync::watch;
use tracing::*;

/// Signals both long running tasks that the process is going down
pub type ShutdownSender = watch::Sender<bool>;
pub type ShutdownReceiver = watch::Receiver<bool>;

pub fn channel() -> (ShutdownSender, ShutdownReceiver) {
    watch::channel(false)
}

/// Resolves once shutdown was requested, or every sender is gone
pub async fn requested(mut receiver: ShutdownReceiver) {
    if receiver.wait_for(|stop| *stop).await.is_err() {
        debug!("shutdown sender dropped");
    }
}

/// Flip the shutdown signal on Ctrl-C
pub async fn on_ctrl_c(sender: ShutdownSender) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Keep the sender alive, dropping it would read as a shutdown request
        error!("unable to listen for Ctrl-C, running until killed: {err}");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, shutting down");
    sender.send_replace(true);
}
