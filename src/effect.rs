//! Effects - side effects declared by the reducer

use crate::state::Units;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Look up current weather for `city`; the response is tagged with `request`
    FetchWeather {
        request: u64,
        city: String,
        units: Units,
    },
    /// (Re)start the countdown that dismisses the error banner
    ExpireError { after_ms: u64 },
}
