use crate::classify::AqiLevel;
use tokio::sync::watch;

pub const LOADING_TITLE: &str = "AQI: --";
pub const LOADING_DETAIL: &str = "Loading...";
pub const UPDATING_TITLE: &str = "AQI: ...";
pub const WARNING_TITLE: &str = "AQI: ⚠️";
pub const UNAVAILABLE_DETAIL: &str = "Unable to fetch data";
/// Placeholder for temperature or humidity missing from the response
pub const UNKNOWN_PLACEHOLDER: &str = "--";

/// A single reading from the AQI API. Lives for one tick only.
#[derive(Debug, Clone, PartialEq)]
pub struct AqiReading {
    pub aqi: i64,
    pub temperature_celsius: Option<f64>,
    pub humidity_percent: Option<f64>,
}

impl AqiReading {
    pub fn level(&self) -> AqiLevel {
        AqiLevel::from_aqi(self.aqi)
    }
}

/// What the menu bar shows. Always replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub title: String,
    pub detail: String,
    /// Bucket of the reading behind this state, `None` when there is no reading
    pub level: Option<AqiLevel>,
}

fn format_measure(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string())
}

impl DisplayState {
    pub fn loading() -> Self {
        Self {
            title: LOADING_TITLE.to_string(),
            detail: LOADING_DETAIL.to_string(),
            level: None,
        }
    }

    pub fn from_reading(reading: &AqiReading) -> Self {
        let level = reading.level();
        Self {
            title: format!("{} {}", level.glyph(), reading.aqi),
            detail: format!(
                "{} | {}°C | {}% humidity",
                level.label(),
                format_measure(reading.temperature_celsius),
                format_measure(reading.humidity_percent)
            ),
            level: Some(level),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            title: WARNING_TITLE.to_string(),
            detail: UNAVAILABLE_DETAIL.to_string(),
            level: None,
        }
    }
}

/// Shared cell holding the latest [`DisplayState`].
///
/// Writers replace the whole value in one send, so concurrent refreshes resolve
/// to whichever finished last. The tray renderer is the only reader that touches the UI.
#[derive(Debug, Clone)]
pub struct DisplayCell {
    tx: watch::Sender<DisplayState>,
}

impl Default for DisplayCell {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayCell {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(DisplayState::loading());
        Self { tx }
    }

    pub fn publish(&self, state: DisplayState) {
        self.tx.send_replace(state);
    }

    /// Show the transient "updating" title, keeping the current detail line
    pub fn mark_updating(&self) {
        self.tx.send_modify(|state| {
            state.title = UPDATING_TITLE.to_string();
        });
    }

    pub fn current(&self) -> DisplayState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.tx.subscribe()
    }
}
