mod api;
mod app;
mod classify;
mod config;
mod error;
mod icon;
mod polling;
mod refresh;
mod state;
mod tray;

pub use api::fetch_current_reading_with_url;
pub use app::run;
pub use classify::AqiLevel;
pub use config::{AppConfig, DEFAULT_API_URL, DEFAULT_DASHBOARD_URL};
pub use error::FetchError;
pub use polling::start_polling;
pub use refresh::{HttpReadingSource, ReadingSource, Refresher};
pub use state::{
    AqiReading, DisplayCell, DisplayState, LOADING_TITLE, UNAVAILABLE_DETAIL, UNKNOWN_PLACEHOLDER,
    UPDATING_TITLE, WARNING_TITLE,
};
