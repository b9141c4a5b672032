use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

/// How long a pooled connection may stay checked out before the watchdog warns.
pub const CHECKOUT_WARN_THRESHOLD: Duration = Duration::from_secs(10);

/// Guard that watches one pooled-connection checkout.
///
/// Arm it when a connection is acquired and keep it next to the connection;
/// dropping the guard (on release) disarms the timer. If the threshold
/// elapses first, a warning is logged for operational visibility. The
/// connection itself is never touched: this is a monitoring signal, not a
/// cancellation mechanism.
///
/// Must be armed from within a tokio runtime.
#[derive(Debug)]
pub struct CheckoutWatchdog {
    handle: JoinHandle<()>,
}

impl CheckoutWatchdog {
    pub fn arm(threshold: Duration) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(threshold).await;
            warn!(
                threshold_secs = threshold.as_secs(),
                "A database connection has been checked out past the warning threshold!"
            );
        });
        Self { handle }
    }
}

impl Drop for CheckoutWatchdog {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
