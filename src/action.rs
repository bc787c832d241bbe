//! Actions for the lookup lifecycle

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{FetchError, WeatherReport};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Text field contents changed
    SearchInputChange(String),

    /// Enter pressed: promote the input buffer to the search term
    SearchSubmit,

    // ===== Weather category =====
    /// Result: request `request` returned a report
    WeatherDidLoad { request: u64, report: WeatherReport },

    /// Result: request `request` failed
    WeatherDidError { request: u64, error: FetchError },

    // ===== Error category =====
    /// The error banner countdown elapsed
    ErrorDidExpire,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Startup: look up the initial search term
    Init,

    /// Periodic tick for the tagline animation
    Tick,

    /// Exit the application
    Quit,
}
