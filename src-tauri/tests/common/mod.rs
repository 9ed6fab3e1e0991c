// Common test utilities and fixtures

use mockito::{Mock, Server, ServerGuard};
use serde_json::{Value, json};
use std::io::Write;
use std::time::Duration;

pub const CURRENT_PATH: &str = "/api/aqi/current";

/// Mock AQI API server for testing
pub struct MockAqiApi {
    pub server: ServerGuard,
}

impl MockAqiApi {
    /// Create a new mock API server (async)
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        Self { server }
    }

    /// Full URL of the current-reading endpoint on the mock server
    pub fn url(&self) -> String {
        format!("{}{}", self.server.url(), CURRENT_PATH)
    }

    /// Create a mock answering 200 with the given JSON body
    pub fn mock_json(&mut self, body: Value) -> Mock {
        self.server
            .mock("GET", CURRENT_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }

    /// Create a mock for a successful reading
    pub fn mock_reading(&mut self, aqi: i64, temperature: f64, humidity: f64) -> Mock {
        self.mock_json(json!({
            "success": true,
            "data": {
                "aqi_us": aqi,
                "temperature_celsius": temperature,
                "humidity": humidity,
                "pm25": 12.4,
                "timestamp": "2025-01-15T09:00:00.000Z"
            }
        }))
    }

    /// Create a mock for an explicit `success: false` response
    pub fn mock_unsuccessful(&mut self) -> Mock {
        self.mock_json(json!({ "success": false, "error": "No data available" }))
    }

    /// Create a mock for a server error (5xx)
    pub fn mock_server_error(&mut self) -> Mock {
        self.server
            .mock("GET", CURRENT_PATH)
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": false, "error": "Internal server error" }).to_string())
            .create()
    }

    /// Create a mock for invalid JSON response (parse error)
    pub fn mock_invalid_json(&mut self) -> Mock {
        self.server
            .mock("GET", CURRENT_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not valid json {{{")
            .create()
    }

    /// Create a mock that stalls for `delay` before sending a valid body
    pub fn mock_slow(&mut self, delay: Duration) -> Mock {
        self.server
            .mock("GET", CURRENT_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(move |w| {
                std::thread::sleep(delay);
                w.write_all(br#"{"success": true, "data": {"aqi_us": 42}}"#)
            })
            .create()
    }
}

/// A URL nothing is listening on
pub fn unreachable_url() -> String {
    format!("http://127.0.0.1:9{}", CURRENT_PATH)
}
