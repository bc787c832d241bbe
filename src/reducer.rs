//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchInputChange(input) => {
            if input == state.input {
                return DispatchResult::unchanged();
            }
            state.input = input;
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            if state.input.is_empty() {
                return DispatchResult::unchanged();
            }
            let term = std::mem::take(&mut state.input);
            if term == state.search_term {
                // Same term: nothing to refetch, only the field clears
                return DispatchResult::changed();
            }
            state.search_term = term;
            start_fetch(state)
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad { request, report } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            if !is_latest(state, request) {
                tracing::debug!(request, latest = ?state.latest_request, "dropping stale report");
                return DispatchResult::changed();
            }
            state.weather = Some(report);
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, error } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            if !is_latest(state, request) {
                tracing::debug!(request, latest = ?state.latest_request, "dropping stale error");
                return DispatchResult::changed();
            }
            state.error = Some(error);
            DispatchResult::changed_with(Effect::ExpireError {
                after_ms: state.error_timeout_ms,
            })
        }

        // ===== Error actions =====
        Action::ErrorDidExpire => {
            if state.error.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Init => start_fetch(state),

        Action::Tick => {
            if state.tagline_done() {
                DispatchResult::unchanged()
            } else {
                state.tick_count = state.tick_count.saturating_add(1);
                DispatchResult::changed()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Issue a request for the current search term.
///
/// Overlapping requests are not cancelled; each gets a fresh id and only the
/// newest one is allowed to land.
fn start_fetch(state: &mut AppState) -> DispatchResult<Effect> {
    let request = state.next_request;
    state.next_request += 1;
    state.latest_request = Some(request);
    state.in_flight += 1;
    DispatchResult::changed_with(Effect::FetchWeather {
        request,
        city: state.search_term.clone(),
        units: state.units,
    })
}

fn is_latest(state: &AppState, request: u64) -> bool {
    state.latest_request == Some(request)
}
