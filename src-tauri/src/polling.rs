use crate::refresh::{ReadingSource, Refresher};
use crate::state::DisplayState;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Timer-driven refresh: fetch immediately, then once per `interval`, until cancelled.
///
/// The interval is measured from the end of one fetch to the start of the next.
pub async fn start_polling<S: ReadingSource>(
    refresher: Refresher<S>,
    interval: Duration,
    cancel_token: CancellationToken,
) {
    info!(interval_secs = interval.as_secs(), "Polling started");

    loop {
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => break,
            state = refresher.refresh() => {
                debug!(title = %state.title, "Scheduled refresh complete");
            }
        }

        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => break,
            _ = sleep(interval) => {}
        }
    }

    info!("Shutdown signal received, stopping polling gracefully");
}

impl<S: ReadingSource> Refresher<S> {
    /// User-driven refresh: show the "updating" title now and return the fetch
    /// for the caller to spawn.
    ///
    /// Does not touch the timer loop, so a manual refresh may race a scheduled one.
    pub fn begin_manual_refresh(&self) -> impl Future<Output = DisplayState> + Send + 'static {
        info!("Manual refresh requested");
        self.cell().mark_updating();

        let refresher = self.clone();
        async move { refresher.refresh().await }
    }
}
