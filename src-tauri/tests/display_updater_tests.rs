mod common;

use aqi_indicator_lib::{
    AqiLevel, DisplayCell, DisplayState, HttpReadingSource, Refresher, UNAVAILABLE_DETAIL,
    WARNING_TITLE,
};
use assert2::assert;
use common::{MockAqiApi, unreachable_url};
use serde_json::json;
use std::time::Duration;

fn refresher_for(url: &str, timeout: Duration) -> Refresher<HttpReadingSource> {
    Refresher::new(HttpReadingSource::new(url, timeout), DisplayCell::new())
}

#[tokio::test]
async fn test_good_reading_sets_title_and_detail() {
    let mut mock_api = MockAqiApi::new().await;
    let _mock = mock_api.mock_json(json!({
        "success": true,
        "data": { "aqi_us": 42, "temperature_celsius": 21, "humidity": 40 }
    }));
    let refresher = refresher_for(&mock_api.url(), Duration::from_secs(10));

    let state = refresher.refresh().await;

    assert!(state.title == "🟢 42");
    assert!(state.detail == "Good | 21°C | 40% humidity");
    assert!(state.level == Some(AqiLevel::Good));
    assert!(refresher.cell().current() == state);
}

#[tokio::test]
async fn test_missing_measures_use_placeholder() {
    let mut mock_api = MockAqiApi::new().await;
    let _mock = mock_api.mock_json(json!({ "success": true, "data": { "aqi_us": 305 } }));
    let refresher = refresher_for(&mock_api.url(), Duration::from_secs(10));

    let state = refresher.refresh().await;

    assert!(state.title == "⚫ 305");
    assert!(state.detail == "Hazardous | --°C | --% humidity");
}

#[tokio::test]
async fn test_success_false_shows_warning() {
    let mut mock_api = MockAqiApi::new().await;
    let _mock = mock_api.mock_unsuccessful();
    let refresher = refresher_for(&mock_api.url(), Duration::from_secs(10));

    let state = refresher.refresh().await;

    assert!(state.title == WARNING_TITLE);
    assert!(state.detail == UNAVAILABLE_DETAIL);
}

#[tokio::test]
async fn test_malformed_json_shows_warning() {
    let mut mock_api = MockAqiApi::new().await;
    let _mock = mock_api.mock_invalid_json();
    let refresher = refresher_for(&mock_api.url(), Duration::from_secs(10));

    assert!(refresher.refresh().await == DisplayState::unavailable());
}

#[tokio::test]
async fn test_timeout_shows_warning() {
    let mut mock_api = MockAqiApi::new().await;
    let _mock = mock_api.mock_slow(Duration::from_secs(3));
    let refresher = refresher_for(&mock_api.url(), Duration::from_millis(500));

    assert!(refresher.refresh().await == DisplayState::unavailable());
}

#[tokio::test]
async fn test_failure_replaces_previous_success() {
    let mut mock_api = MockAqiApi::new().await;
    let good = mock_api.mock_reading(75, 18.0, 55.0);
    let refresher = refresher_for(&mock_api.url(), Duration::from_secs(10));

    let first = refresher.refresh().await;
    assert!(first.title == "🟡 75");
    good.remove();

    let _bad = mock_api.mock_server_error();
    refresher.refresh().await;

    assert!(refresher.cell().current() == DisplayState::unavailable());
}

#[tokio::test]
async fn test_unreachable_server_shows_warning() {
    let refresher = refresher_for(&unreachable_url(), Duration::from_secs(10));

    assert!(refresher.refresh().await == DisplayState::unavailable());
}

#[tokio::test]
async fn test_manual_refresh_marks_updating_before_fetch() {
    let mut mock_api = MockAqiApi::new().await;
    let _mock = mock_api.mock_reading(160, 30.0, 20.0);
    let refresher = refresher_for(&mock_api.url(), Duration::from_secs(10));

    let pending = refresher.begin_manual_refresh();
    assert!(refresher.cell().current().title == "AQI: ...");

    let state = pending.await;
    assert!(state.title == "🔴 160");
    assert!(state.detail == "Unhealthy | 30°C | 20% humidity");
}
