//! Effect execution - turns declared effects into keyed async tasks

use std::sync::Arc;
use std::time::Duration;

use tui_dispatch::{TaskKey, TaskManager};

use crate::action::Action;
use crate::api::{self, ApiConfig};
use crate::effect::Effect;

/// Single key for the banner countdown; rescheduling replaces the pending one.
pub const ERROR_EXPIRY_KEY: &str = "error-expiry";

/// What fetch tasks need to reach the API
pub struct Fetcher {
    pub client: reqwest::Client,
    pub api: ApiConfig,
}

impl Fetcher {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api,
        }
    }
}

/// Task key an effect runs under.
///
/// Each lookup gets its own key so overlapping lookups never cancel each other.
pub fn task_key(effect: &Effect) -> TaskKey {
    match effect {
        Effect::FetchWeather { request, .. } => TaskKey::new(format!("weather-{request}")),
        Effect::ExpireError { .. } => TaskKey::new(ERROR_EXPIRY_KEY),
    }
}

/// Handle effects by spawning tasks
pub fn handle_effect(effect: Effect, tasks: &mut TaskManager<Action>, fetcher: Arc<Fetcher>) {
    let key = task_key(&effect);
    match effect {
        Effect::FetchWeather {
            request,
            city,
            units,
        } => {
            tracing::info!(request, %city, "fetching current weather");
            tasks.spawn(key, async move {
                match api::fetch_current(&fetcher.client, &fetcher.api, &city, units).await {
                    Ok(report) => Action::WeatherDidLoad { request, report },
                    Err(e) => {
                        tracing::warn!(request, error = %e, "weather lookup failed");
                        Action::WeatherDidError {
                            request,
                            error: e.into_fetch_error(),
                        }
                    }
                }
            });
        }
        Effect::ExpireError { after_ms } => {
            tracing::debug!(after_ms, "scheduling error dismissal");
            tasks.debounce(key, Duration::from_millis(after_ms), async {
                Action::ErrorDidExpire
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Units;
    use tokio::sync::mpsc;

    fn fetch(request: u64) -> Effect {
        Effect::FetchWeather {
            request,
            city: "Paris".into(),
            units: Units::Metric,
        }
    }

    /// Fails before touching the network
    fn offline_fetcher() -> Arc<Fetcher> {
        Arc::new(Fetcher::new(ApiConfig {
            endpoint: "ftp://127.0.0.1/weather".into(),
            api_key: "secret".into(),
        }))
    }

    #[test]
    fn test_task_keys() {
        assert_eq!(task_key(&fetch(0)).name(), "weather-0");
        assert_eq!(task_key(&fetch(7)).name(), "weather-7");
        assert_ne!(task_key(&fetch(0)), task_key(&fetch(1)));
        assert_eq!(
            task_key(&Effect::ExpireError { after_ms: 10 }),
            task_key(&Effect::ExpireError { after_ms: 500 })
        );
        assert_eq!(
            task_key(&Effect::ExpireError { after_ms: 10 }).name(),
            ERROR_EXPIRY_KEY
        );
    }

    #[tokio::test]
    async fn test_overlapping_lookups_all_complete() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);
        let fetcher = offline_fetcher();

        handle_effect(fetch(0), &mut tasks, Arc::clone(&fetcher));
        handle_effect(fetch(1), &mut tasks, Arc::clone(&fetcher));

        let mut requests = Vec::new();
        for _ in 0..2 {
            let action = tokio::time::timeout(Duration::from_secs(1), rx.recv())
                .await
                .expect("timeout")
                .expect("channel closed");
            match action {
                Action::WeatherDidError { request, .. } => requests.push(request),
                other => panic!("unexpected action {other:?}"),
            }
        }
        requests.sort();
        assert_eq!(requests, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_new_error_restarts_expiry() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);
        let fetcher = offline_fetcher();

        handle_effect(
            Effect::ExpireError { after_ms: 50 },
            &mut tasks,
            Arc::clone(&fetcher),
        );
        tokio::time::sleep(Duration::from_millis(30)).await;
        handle_effect(
            Effect::ExpireError { after_ms: 50 },
            &mut tasks,
            Arc::clone(&fetcher),
        );

        // The first countdown would have fired by now
        let early = tokio::time::timeout(Duration::from_millis(35), rx.recv()).await;
        assert!(early.is_err());

        let action = tokio::time::timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");
        assert_eq!(action, Action::ErrorDidExpire);

        // Only one dismissal was scheduled
        let extra = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(extra.is_err());
    }
}
