use crate::error::FetchError;
use crate::state::AqiReading;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use wreq::ClientBuilder;
use wreq::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

/// Top-level response envelope: `{ "success": bool, "data": { ... } }`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
}

/// Fields we read out of `data`. Missing or null fields fall back at display time.
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentReading {
    pub aqi_us: Option<i64>,
    pub temperature_celsius: Option<f64>,
    pub humidity: Option<f64>,
}

impl From<CurrentReading> for AqiReading {
    fn from(raw: CurrentReading) -> Self {
        AqiReading {
            aqi: raw.aqi_us.unwrap_or(0),
            temperature_celsius: raw.temperature_celsius,
            humidity_percent: raw.humidity,
        }
    }
}

/// Validate a response body and extract the reading
pub(crate) fn parse_current_reading(body: &str) -> Result<AqiReading, FetchError> {
    let envelope: ApiEnvelope = serde_json::from_str(body)?;

    if !envelope.success {
        return Err(FetchError::Unavailable("API reported success=false".to_string()));
    }

    let data = match envelope.data {
        Some(data) if !data.is_empty() => data,
        _ => {
            return Err(FetchError::Unavailable(
                "response carried no data".to_string(),
            ));
        }
    };

    let reading: CurrentReading = serde_json::from_value(Value::Object(data))?;
    Ok(reading.into())
}

/// GET the current reading from `url`, giving up after `timeout`
pub async fn fetch_current_reading_with_url(
    url: &str,
    timeout: Duration,
) -> Result<AqiReading, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("aqi-indicator/", env!("CARGO_PKG_VERSION"))),
    );

    let client = ClientBuilder::new()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::Network(format!("Failed to build client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(FetchError::Network(format!("HTTP {}", status)));
    }

    parse_current_reading(&response_text)
}
