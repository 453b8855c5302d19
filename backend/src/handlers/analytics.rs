use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::ga4;
use crate::AppState;

/// GA4 caps event names at 40 characters.
pub const MAX_EVENT_NAME_LEN: usize = 40;
pub const MAX_EVENT_PARAMS: usize = 25;

pub type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsEventRequest {
    pub name: String,
    #[serde(default)]
    pub params: Map<String, Value>,
    #[serde(default)]
    pub page_path: Option<String>,
}

impl AnalyticsEventRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::BadRequest("Event name is required".to_string()));
        }
        if name.chars().count() > MAX_EVENT_NAME_LEN {
            return Err(ApiError::BadRequest(format!(
                "Event name must be at most {} characters",
                MAX_EVENT_NAME_LEN
            )));
        }
        if self.params.len() > MAX_EVENT_PARAMS {
            return Err(ApiError::BadRequest(format!(
                "Events may carry at most {} params",
                MAX_EVENT_PARAMS
            )));
        }
        Ok(())
    }
}

/// Identifies the caller for rate limiting. Proxy headers are checked in
/// order: `x-forwarded-for` (first entry), `x-real-ip`, `cf-connecting-ip`.
pub fn client_key(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    header("x-forwarded-for")
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| header("x-real-ip"))
        .or_else(|| header("cf-connecting-ip"))
        .unwrap_or("unknown")
        .to_string()
}

/// Shared bucket for new clients once `max_tracked_clients` is reached.
pub const OVERFLOW_KEY: &str = "overflow";

fn limiter_key(state: &AppState, client: &str) -> String {
    let limiters = &state.analytics_limiter;
    let cap = state.config.max_tracked_clients;
    if limiters.contains_key(client) || limiters.len() < cap {
        return client.to_string();
    }
    prune_limiters(state);
    if limiters.len() < cap {
        client.to_string()
    } else {
        tracing::warn!(client = %client, "Analytics limiter map full, using shared bucket");
        OVERFLOW_KEY.to_string()
    }
}

fn check_rate_limit(state: &AppState, client: &str) -> Result<(), ApiError> {
    let quota = Quota::per_minute(state.config.events_per_minute);
    let limiter_key = limiter_key(state, client);

    let entry = state
        .analytics_limiter
        .entry(limiter_key.clone())
        .or_insert_with(|| RateLimiter::keyed(quota));
    let limiter = entry.value();

    if limiter.check_key(&limiter_key).is_err() {
        tracing::warn!(client = %client, "Analytics rate limit exceeded");
        return Err(ApiError::RateLimited);
    }
    Ok(())
}

/// Drops limiter state for clients that have gone quiet.
pub fn prune_limiters(state: &AppState) {
    state.analytics_limiter.retain(|_, limiter| {
        limiter.retain_recent();
        !limiter.is_empty()
    });
}

pub async fn record_event(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<AnalyticsEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let client = client_key(&headers);
    check_rate_limit(&state, &client)?;

    let Json(event) = payload?;
    event.validate()?;

    tracing::info!(
        event = %event.name,
        page = event.page_path.as_deref().unwrap_or("-"),
        params = event.params.len(),
        "Analytics event accepted"
    );
    tracing::debug!(event = %event.name, params = ?event.params, "Analytics params");

    if let Some(credentials) = state.config.ga4.clone() {
        let http = state.http.clone();
        tokio::spawn(async move {
            if let Err(e) = ga4::forward(&http, &credentials, &client, &event).await {
                tracing::warn!("Failed to forward {} to GA4: {:#}", event.name, e);
            }
        });
    }

    Ok((StatusCode::ACCEPTED, Json(json!({"accepted": true}))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::http::HeaderValue;
    use std::time::Duration;

    fn state_with(vars: &[(&str, &str)]) -> AppState {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = AppConfig::from_lookup(|name| {
            vars.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
        })
        .unwrap();
        AppState::new(config)
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    fn event(name: &str, params: usize) -> AnalyticsEventRequest {
        AnalyticsEventRequest {
            name: name.to_string(),
            params: (0..params)
                .map(|i| (format!("p{}", i), Value::from("x")))
                .collect(),
            page_path: None,
        }
    }

    #[test]
    fn client_key_prefers_first_forwarded_address() {
        let map = headers(&[
            ("x-forwarded-for", "203.0.113.7, 10.0.0.1"),
            ("x-real-ip", "198.51.100.2"),
        ]);
        assert_eq!(client_key(&map), "203.0.113.7");
    }

    #[test]
    fn client_key_falls_back_in_order() {
        let map = headers(&[("x-real-ip", "198.51.100.2"), ("cf-connecting-ip", "192.0.2.9")]);
        assert_eq!(client_key(&map), "198.51.100.2");

        let map = headers(&[("x-forwarded-for", " "), ("cf-connecting-ip", "192.0.2.9")]);
        assert_eq!(client_key(&map), "192.0.2.9");

        assert_eq!(client_key(&HeaderMap::new()), "unknown");
    }

    #[test]
    fn validate_accepts_catalog_events() {
        assert!(event("menu_item_click", 3).validate().is_ok());
        assert!(event(&"a".repeat(MAX_EVENT_NAME_LEN), MAX_EVENT_PARAMS).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_events() {
        assert!(matches!(event("  ", 0).validate(), Err(ApiError::BadRequest(_))));
        assert!(matches!(
            event(&"a".repeat(MAX_EVENT_NAME_LEN + 1), 0).validate(),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            event("cta_click", MAX_EVENT_PARAMS + 1).validate(),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn prune_keeps_active_clients_and_drops_replenished_ones() {
        // 600 per minute replenishes a cell every 100ms
        let state = state_with(&[("ANALYTICS_EVENTS_PER_MINUTE", "600")]);
        check_rate_limit(&state, "203.0.113.7").unwrap();

        prune_limiters(&state);
        assert_eq!(state.analytics_limiter.len(), 1);

        std::thread::sleep(Duration::from_millis(1000));
        prune_limiters(&state);
        assert!(state.analytics_limiter.is_empty());
    }

    #[test]
    fn new_clients_share_a_bucket_once_the_map_is_full() {
        let state = state_with(&[
            ("ANALYTICS_EVENTS_PER_MINUTE", "2"),
            ("ANALYTICS_MAX_CLIENTS", "2"),
        ]);
        check_rate_limit(&state, "192.0.2.1").unwrap();
        check_rate_limit(&state, "192.0.2.2").unwrap();

        for spoofed in ["10.0.0.1", "10.0.0.2"] {
            check_rate_limit(&state, spoofed).unwrap();
        }
        assert!(matches!(
            check_rate_limit(&state, "10.0.0.3"),
            Err(ApiError::RateLimited)
        ));
        assert_eq!(state.analytics_limiter.len(), 3);
        assert!(state.analytics_limiter.contains_key(OVERFLOW_KEY));

        // known clients keep their own limiter
        check_rate_limit(&state, "192.0.2.1").unwrap();
    }
}
