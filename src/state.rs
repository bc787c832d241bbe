//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current conditions parsed from the OpenWeather payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    /// Place name as reported by the API (may be missing)
    pub name: Option<String>,
    /// ISO country code
    pub country: Option<String>,
    pub temperature: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub feels_like: f64,
    /// Relative humidity, percent
    pub humidity: u32,
    pub wind_speed: f64,
    /// Visibility in metres
    pub visibility: Option<u32>,
    /// Sea level pressure, hPa
    pub pressure: u32,
    /// Cloud cover, percent
    pub clouds: u32,
    /// Condition category, e.g. `Clouds` or `Rain`
    pub condition: String,
    pub description: String,
}

impl WeatherReport {
    /// Place name, if the API sent a non-empty one
    pub fn place_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// A failed lookup, as shown to the user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FetchError {
    /// Message carried by the failure, when it had one
    pub message: Option<String>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }
}

/// Unit system requested from the API
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Value of the `units` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            Units::Metric => value,
            Units::Imperial => (value - 32.0) * 5.0 / 9.0,
            Units::Standard => value - 273.15,
        }
    }

    pub fn speed_suffix(&self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            Units::Metric | Units::Standard => "m/s",
        }
    }
}

/// How long an error banner stays up
pub const DEFAULT_ERROR_TIMEOUT_MS: u64 = 1000;

/// Animation timing for the idle tagline.
pub const TAGLINE_TICK_MS: u64 = 50;
pub const TAGLINE: &str = " By Abdul Baquiur Rahman";

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Query (visible in debug) ---
    /// City currently driving the fetch lifecycle
    #[debug(section = "Query", label = "Term")]
    pub search_term: String,

    /// Text field contents
    #[debug(section = "Query", label = "Input")]
    pub input: String,

    /// Last accepted weather payload
    #[debug(section = "Weather", label = "Report", debug_fmt)]
    pub weather: Option<WeatherReport>,

    /// Last accepted failure, cleared by the expiry timer
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: Option<FetchError>,

    #[debug(section = "Weather", label = "Units", debug_fmt)]
    pub units: Units,

    // --- Request bookkeeping ---
    /// Id handed to the next request
    #[debug(section = "Requests", label = "Next id")]
    pub next_request: u64,

    /// Id of the most recently issued request; older responses are dropped
    #[debug(section = "Requests", label = "Latest", debug_fmt)]
    pub latest_request: Option<u64>,

    /// Requests issued but not yet answered
    #[debug(section = "Requests", label = "In flight")]
    pub in_flight: usize,

    #[debug(skip)]
    pub error_timeout_ms: u64,

    // --- Animation internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    /// Create state that will look up `city` on startup
    pub fn new(city: impl Into<String>, units: Units, error_timeout_ms: u64) -> Self {
        Self {
            search_term: city.into(),
            input: String::new(),
            weather: None,
            error: None,
            units,
            next_request: 0,
            latest_request: None,
            in_flight: 0,
            error_timeout_ms,
            tick_count: 0,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    /// Number of tagline characters currently revealed
    pub fn tagline_visible(&self) -> usize {
        (self.tick_count as usize).min(TAGLINE.chars().count())
    }

    pub fn tagline_done(&self) -> bool {
        self.tagline_visible() >= TAGLINE.chars().count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(String::new(), Units::default(), DEFAULT_ERROR_TIMEOUT_MS)
    }
}
