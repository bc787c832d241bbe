//! End-to-end lifecycle tests using EffectStoreTestHarness
//!
//! Async completions are simulated with `complete_action`, the way the task
//! runtime would send them back to the loop.

use clima::{
    action::Action,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, FetchError, WeatherReport},
    view::{Mode, Projection},
};
use tui_dispatch::testing::*;

const DATE: &str = "17 October, 2026";

fn report(name: &str, country: &str, temperature: f64) -> WeatherReport {
    WeatherReport {
        name: Some(name.into()),
        country: Some(country.into()),
        temperature,
        temp_min: temperature - 2.0,
        temp_max: temperature + 1.0,
        feels_like: temperature,
        humidity: 64,
        wind_speed: 3.6,
        visibility: Some(10000),
        pressure: 1016,
        clouds: 20,
        condition: "Clear".into(),
        description: "clear sky".into(),
    }
}

#[test]
fn test_paris_scenario() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchInputChange("Paris".into()));
    harness.dispatch_collect(Action::SearchSubmit);
    harness.assert_state(|s| s.search_term == "Paris" && s.input.is_empty());

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { request: 0, city, .. } if city == "Paris"),
    );

    harness.complete_action(Action::WeatherDidLoad {
        request: 0,
        report: report("Paris", "FR", 18.4),
    });
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    harness.assert_state(|s| {
        let projection = Projection::from_state(s);
        let view = projection.report().expect("report mode");
        view.temperature == "18°C" && view.place == "Paris, FR"
    });

    let mut component = WeatherDisplay::new();
    let output = harness.render_plain(80, 30, |frame, area, state| {
        let props = WeatherDisplayProps {
            state,
            date: DATE,
            is_focused: true,
        };
        component.render(frame, area, props);
    });
    assert!(
        output.contains("Paris, FR"),
        "Place name should be visible in output:\n{}",
        output
    );
}

#[test]
fn test_empty_submit_scenario() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchInputChange(String::new()));
    harness.dispatch_collect(Action::SearchSubmit);

    harness.assert_state(|s| s.search_term.is_empty() && s.latest_request.is_none());
    harness.drain_effects().effects_empty();
}

#[test]
fn test_atlantis_error_expires() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchInputChange("Atlantis".into()));
    harness.dispatch_collect(Action::SearchSubmit);
    harness.drain_effects();

    harness.dispatch_collect(Action::WeatherDidError {
        request: 0,
        error: FetchError::new("city not found"),
    });

    harness.assert_state(|s| {
        Projection::from_state(s).banner.as_deref() == Some("city not found")
    });
    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::ExpireError { after_ms: 1000 }));

    // Countdown elapsed
    harness.complete_action(Action::ErrorDidExpire);
    harness.process_emitted();

    harness.assert_state(|s| s.error.is_none());
    harness.assert_state(|s| Projection::from_state(s).banner.is_none());
}

#[test]
fn test_new_error_reschedules_expiry() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::Init);
    harness.dispatch_collect(Action::WeatherDidError {
        request: 0,
        error: FetchError::new("Nothing to geocode"),
    });
    harness.dispatch_collect(Action::SearchInputChange("Atlantis".into()));
    harness.dispatch_collect(Action::SearchSubmit);
    harness.drain_effects();

    harness.dispatch_collect(Action::WeatherDidError {
        request: 1,
        error: FetchError::new("city not found"),
    });

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::ExpireError { .. }));
    harness.assert_state(|s| s.error == Some(FetchError::new("city not found")));
}

#[test]
fn test_slow_earlier_response_cannot_win() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchInputChange("Paris".into()));
    harness.dispatch_collect(Action::SearchSubmit); // request 0
    harness.dispatch_collect(Action::SearchInputChange("Tokyo".into()));
    harness.dispatch_collect(Action::SearchSubmit); // request 1
    harness.assert_state(|s| s.in_flight == 2);

    // Tokyo answers first, Paris straggles in afterwards
    harness.complete_action(Action::WeatherDidLoad {
        request: 1,
        report: report("Tokyo", "JP", 22.0),
    });
    harness.complete_action(Action::WeatherDidLoad {
        request: 0,
        report: report("Paris", "FR", 18.4),
    });
    harness.process_emitted();

    harness.assert_state(|s| {
        s.weather.as_ref().and_then(|w| w.name.as_deref()) == Some("Tokyo")
    });
    harness.assert_state(|s| s.in_flight == 0);
}

#[test]
fn test_success_does_not_touch_banner() {
    let mut harness = EffectStoreTestHarness::new(
        AppState {
            error: Some(FetchError::new("city not found")),
            ..Default::default()
        },
        reducer,
    );
    harness.dispatch_collect(Action::Init);

    harness.complete_action(Action::WeatherDidLoad {
        request: 0,
        report: report("Oslo", "NO", -3.2),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.error.is_some() && s.weather.is_some());
    harness.assert_state(|s| {
        let projection = Projection::from_state(s);
        matches!(projection.mode, Mode::Report(_)) && projection.banner.is_some()
    });
}

#[test]
fn test_render_error_banner_over_report() {
    let state = AppState {
        weather: Some(report("Paris", "FR", 18.4)),
        error: Some(FetchError::new("city not found")),
        ..Default::default()
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);
    let mut component = WeatherDisplay::new();

    let output = harness.render_plain(80, 30, |frame, area, state| {
        let props = WeatherDisplayProps {
            state,
            date: DATE,
            is_focused: true,
        };
        component.render(frame, area, props);
    });

    assert!(
        output.contains("city not found"),
        "Banner should be visible in output:\n{}",
        output
    );
}
