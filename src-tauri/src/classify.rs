/// US AQI severity buckets, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Inclusive upper bounds scanned in order. Anything above the last bound is hazardous.
const THRESHOLDS: [(i64, AqiLevel); 5] = [
    (50, AqiLevel::Good),
    (100, AqiLevel::Moderate),
    (150, AqiLevel::UnhealthySensitive),
    (200, AqiLevel::Unhealthy),
    (300, AqiLevel::VeryUnhealthy),
];

impl AqiLevel {
    /// Classify an AQI value. Total over all integers; there is no lower bound,
    /// so negative values land in `Good`.
    pub fn from_aqi(aqi: i64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(upper, _)| aqi <= *upper)
            .map(|(_, level)| *level)
            .unwrap_or(AqiLevel::Hazardous)
    }

    /// Emoji shown in the menu bar title
    pub fn glyph(&self) -> &'static str {
        match self {
            AqiLevel::Good => "🟢",
            AqiLevel::Moderate => "🟡",
            AqiLevel::UnhealthySensitive => "🟠",
            AqiLevel::Unhealthy => "🔴",
            AqiLevel::VeryUnhealthy => "🟣",
            AqiLevel::Hazardous => "⚫",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::UnhealthySensitive => "Unhealthy for Sensitive",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::VeryUnhealthy => "Very Unhealthy",
            AqiLevel::Hazardous => "Hazardous",
        }
    }

    /// RGB colour of the tray icon dot, matching the glyph
    pub fn color(&self) -> [u8; 3] {
        match self {
            AqiLevel::Good => [0, 200, 83],                // #00C853
            AqiLevel::Moderate => [255, 214, 0],           // #FFD600
            AqiLevel::UnhealthySensitive => [255, 145, 0], // #FF9100
            AqiLevel::Unhealthy => [211, 47, 47],          // #D32F2F
            AqiLevel::VeryUnhealthy => [142, 36, 170],     // #8E24AA
            AqiLevel::Hazardous => [33, 33, 33],           // #212121
        }
    }
}
