//! OpenWeather current-weather client

use serde::Deserialize;

use crate::state::{FetchError, Units, WeatherReport};

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Where and how to reach the weather endpoint
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: String,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Transport failure; the URL is stripped so the key never leaks
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("server returned {status}")]
    Status { status: u16, message: Option<String> },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Request(error.without_url())
    }
}

impl ApiError {
    /// Collapse into the single failure kind the UI knows about.
    pub fn into_fetch_error(self) -> FetchError {
        match self {
            ApiError::Status { message, .. } => FetchError { message },
            other => FetchError::new(other.to_string()),
        }
    }
}

/// Error body, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// ============================================================================
// Payload
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: Option<String>,
    #[serde(default)]
    sys: SysInfo,
    main: MainInfo,
    #[serde(default)]
    wind: WindInfo,
    visibility: Option<u32>,
    #[serde(default)]
    clouds: CloudsInfo,
    #[serde(default)]
    weather: Vec<ConditionInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct SysInfo {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainInfo {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    feels_like: f64,
    humidity: u32,
    pressure: u32,
}

#[derive(Debug, Default, Deserialize)]
struct WindInfo {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct CloudsInfo {
    all: u32,
}

#[derive(Debug, Deserialize)]
struct ConditionInfo {
    main: String,
    description: String,
}

impl From<CurrentResponse> for WeatherReport {
    fn from(data: CurrentResponse) -> Self {
        let (condition, description) = data
            .weather
            .into_iter()
            .next()
            .map(|w| (w.main, w.description))
            .unwrap_or_default();
        WeatherReport {
            name: data.name,
            country: data.sys.country,
            temperature: data.main.temp,
            temp_min: data.main.temp_min,
            temp_max: data.main.temp_max,
            feels_like: data.main.feels_like,
            humidity: data.main.humidity,
            wind_speed: data.wind.speed,
            visibility: data.visibility,
            pressure: data.main.pressure,
            clouds: data.clouds.all,
            condition,
            description,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Build the request URL. The city is sent as-is, even when empty.
pub fn request_url(config: &ApiConfig, city: &str, units: Units) -> String {
    format!(
        "{}?q={}&units={}&appid={}",
        config.endpoint,
        urlencoding::encode(city),
        units.as_param(),
        urlencoding::encode(&config.api_key)
    )
}

/// Parse a response body according to its HTTP status.
pub fn parse_response(status: u16, body: &str) -> Result<WeatherReport, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        return Err(ApiError::Status { status, message });
    }
    let data: CurrentResponse = serde_json::from_str(body)?;
    Ok(data.into())
}

/// Fetch current weather for `city`
pub async fn fetch_current(
    client: &reqwest::Client,
    config: &ApiConfig,
    city: &str,
    units: Units,
) -> Result<WeatherReport, ApiError> {
    let url = request_url(config, city, units);
    let response = client.get(&url).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    parse_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PARIS: &str = r#"{
        "coord": {"lon": 2.35, "lat": 48.85},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "main": {"temp": 18.4, "feels_like": 17.9, "temp_min": 16.6, "temp_max": 19.5,
                 "pressure": 1016, "humidity": 64},
        "visibility": 10000,
        "wind": {"speed": 4.12, "deg": 250},
        "clouds": {"all": 75},
        "sys": {"country": "FR"},
        "name": "Paris",
        "cod": 200
    }"#;

    fn config() -> ApiConfig {
        ApiConfig {
            endpoint: DEFAULT_ENDPOINT.into(),
            api_key: "secret".into(),
        }
    }

    #[test]
    fn test_request_url_embeds_city() {
        let url = request_url(&config(), "São Paulo", Units::Metric);
        assert_eq!(
            url,
            "https://api.openweathermap.org/data/2.5/weather?q=S%C3%A3o%20Paulo&units=metric&appid=secret"
        );
    }

    #[test]
    fn test_request_url_sends_empty_city() {
        let url = request_url(&config(), "", Units::Imperial);
        assert!(url.contains("?q=&units=imperial"));
    }

    #[test]
    fn test_parse_success() {
        let report = parse_response(200, PARIS).unwrap();
        assert_eq!(report.name.as_deref(), Some("Paris"));
        assert_eq!(report.country.as_deref(), Some("FR"));
        assert_eq!(report.temperature, 18.4);
        assert_eq!(report.humidity, 64);
        assert_eq!(report.visibility, Some(10000));
        assert_eq!(report.clouds, 75);
        assert_eq!(report.condition, "Clouds");
        assert_eq!(report.description, "broken clouds");
    }

    #[test]
    fn test_parse_error_body_message() {
        let err = parse_response(404, r#"{"cod":"404","message":"city not found"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
        assert_eq!(err.into_fetch_error(), FetchError::new("city not found"));
    }

    #[test]
    fn test_parse_error_without_message() {
        let err = parse_response(502, "<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.into_fetch_error(), FetchError::without_message());
    }

    #[tokio::test]
    async fn test_transport_error_hides_api_key() {
        let config = ApiConfig {
            endpoint: "ftp://127.0.0.1/weather".into(),
            api_key: "TOPSECRETKEY".into(),
        };

        let err = fetch_current(&reqwest::Client::new(), &config, "Paris", Units::Metric)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Request(_)));
        assert!(!err.to_string().contains("TOPSECRETKEY"));
        let message = err.into_fetch_error().message.unwrap();
        assert!(message.starts_with("request failed"));
        assert!(!message.contains("TOPSECRETKEY"));
        assert!(!message.contains("appid"));
    }

    #[test]
    fn test_parse_malformed_success_body() {
        let err = parse_response(200, "{}").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let message = err.into_fetch_error().message.unwrap();
        assert!(message.starts_with("malformed response"));
    }
}
