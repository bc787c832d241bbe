//! Render projection - display strings derived from state
//!
//! Components never read `AppState` fields directly for text; they draw a
//! [`Projection`]. Building one never mutates state.

use chrono::{Datelike, NaiveDate};

use crate::sprites::WeatherCondition;
use crate::state::{AppState, TAGLINE, Units, WeatherReport};

/// Banner text when a failure carried no message
pub const FALLBACK_ERROR: &str = "Something went wrong";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub mode: Mode,
    /// Error banner, overlaid on either mode
    pub banner: Option<String>,
    pub fetching: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    /// Nothing with a place name has landed yet
    Idle { tagline: String },
    Report(ReportView),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportView {
    pub place: String,
    pub condition: Option<WeatherCondition>,
    /// Current temperature in Celsius, used to pick colors
    pub celsius: f64,
    pub temperature: String,
    pub range: String,
    pub description: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub visibility: String,
    pub pressure: String,
    pub clouds: String,
}

impl Projection {
    pub fn from_state(state: &AppState) -> Self {
        let mode = match state.weather.as_ref() {
            Some(report) if report.place_name().is_some() => {
                Mode::Report(ReportView::new(report, state.units))
            }
            _ => Mode::Idle {
                tagline: TAGLINE.chars().take(state.tagline_visible()).collect(),
            },
        };
        let banner = state.error.as_ref().map(|error| {
            error
                .message
                .clone()
                .unwrap_or_else(|| FALLBACK_ERROR.to_string())
        });
        Self {
            mode,
            banner,
            fetching: state.is_fetching(),
        }
    }

    pub fn report(&self) -> Option<&ReportView> {
        match &self.mode {
            Mode::Report(view) => Some(view),
            Mode::Idle { .. } => None,
        }
    }
}

impl ReportView {
    fn new(report: &WeatherReport, units: Units) -> Self {
        let suffix = units.temperature_suffix();
        let name = report.place_name().unwrap_or_default();
        let place = match report.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{name}, {country}"),
            _ => name.to_string(),
        };

        Self {
            place,
            condition: WeatherCondition::from_category(&report.condition),
            celsius: units.to_celsius(report.temperature),
            temperature: format!("{}{suffix}", round(report.temperature)),
            range: format!(
                "{} / {}{suffix}",
                round(report.temp_min),
                round(report.temp_max)
            ),
            description: report.description.clone(),
            feels_like: format!("{}{suffix}", round(report.feels_like)),
            humidity: format!("{}%", report.humidity),
            wind: format!("{} {}", round(report.wind_speed), units.speed_suffix()),
            visibility: report
                .visibility
                .map(|metres| format!("{} Km", metres as f64 / 1000.0))
                .unwrap_or_else(|| "n/a".to_string()),
            pressure: format!("{} hPa", report.pressure),
            clouds: format!("{}%", report.clouds),
        }
    }
}

/// Round half away from zero to a whole number. Small negatives keep their
/// sign (`-0.4` is `-0`), an exact zero never does.
fn round(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{:.0}", value.round())
}

/// `17 October, 2026`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}
