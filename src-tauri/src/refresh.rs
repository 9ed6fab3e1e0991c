use crate::api::fetch_current_reading_with_url;
use crate::config::AppConfig;
use crate::error::FetchError;
use crate::state::{AqiReading, DisplayCell, DisplayState};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Anything that can produce the current AQI reading
pub trait ReadingSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<AqiReading, FetchError>> + Send;
}

/// Reads from the AQI HTTP API
#[derive(Debug, Clone)]
pub struct HttpReadingSource {
    url: String,
    timeout: Duration,
}

impl HttpReadingSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_url.clone(), config.request_timeout())
    }
}

impl ReadingSource for HttpReadingSource {
    async fn fetch(&self) -> Result<AqiReading, FetchError> {
        fetch_current_reading_with_url(&self.url, self.timeout).await
    }
}

/// Runs fetch → classify → publish against a shared [`DisplayCell`].
///
/// Cheap to clone; the timer loop and every manual refresh hold their own copy.
pub struct Refresher<S> {
    source: Arc<S>,
    cell: DisplayCell,
}

impl<S> Clone for Refresher<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            cell: self.cell.clone(),
        }
    }
}

impl<S: ReadingSource> Refresher<S> {
    pub fn new(source: S, cell: DisplayCell) -> Self {
        Self {
            source: Arc::new(source),
            cell,
        }
    }

    pub fn cell(&self) -> &DisplayCell {
        &self.cell
    }

    /// Fetch once and overwrite the display. Never fails: any fetch error ends
    /// in the warning state.
    pub async fn refresh(&self) -> DisplayState {
        let state = match self.source.fetch().await {
            Ok(reading) => {
                let state = DisplayState::from_reading(&reading);
                info!(
                    aqi = reading.aqi,
                    level = ?reading.level(),
                    temperature_celsius = ?reading.temperature_celsius,
                    humidity_percent = ?reading.humidity_percent,
                    "AQI reading fetched"
                );
                state
            }
            Err(e) => {
                warn!(category = e.category(), error = %e, "Failed to fetch AQI data");
                DisplayState::unavailable()
            }
        };

        self.cell.publish(state.clone());
        state
    }
}
