/// Why a fetch produced no reading.
///
/// Every variant is recoverable: the display falls back to the warning state and
/// the next timer tick or manual refresh tries again.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport failure, timeout, or non-success HTTP status
    Network(String),
    /// Body is not JSON, or `data` holds fields of the wrong type
    Parse(String),
    /// Well-formed response without usable data (`success` falsy, `data` missing or empty)
    Unavailable(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
            FetchError::Unavailable(msg) => write!(f, "No data: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl FetchError {
    /// Short category used in log fields
    pub fn category(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "Offline",
            FetchError::Parse(_) => "Parse Error",
            FetchError::Unavailable(_) => "No Data",
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(format!("Failed to parse response: {}", e))
    }
}
