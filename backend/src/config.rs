use std::num::NonZeroU32;
use std::path::PathBuf;

use axum::http::HeaderValue;
use nonzero_ext::nonzero;
use thiserror::Error;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
const DEFAULT_EVENTS_PER_MINUTE: NonZeroU32 = nonzero!(20u32);
const DEFAULT_MAX_TRACKED_CLIENTS: usize = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("ANALYTICS_EVENTS_PER_MINUTE must be greater than zero")]
    ZeroRate,
    #[error("ANALYTICS_MAX_CLIENTS must be greater than zero")]
    ZeroClients,
    #[error("FRONTEND_URL is not a valid origin: {0:?}")]
    InvalidOrigin(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ga4Credentials {
    pub measurement_id: String,
    pub api_secret: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub environment: String,
    pub frontend_url: String,
    /// `frontend_url` checked as a CORS origin.
    pub cors_origin: HeaderValue,
    pub static_dir: PathBuf,
    /// Set only when both GA4 variables are present.
    pub ga4: Option<Ga4Credentials>,
    pub events_per_minute: NonZeroU32,
    /// Upper bound on per-client limiters kept in memory.
    pub max_tracked_clients: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let environment = var("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let port = match var("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                name: "PORT",
                value,
            })?,
            None if environment == "staging" => 3100,
            None => 3000,
        };

        let frontend_url = var("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        let cors_origin = HeaderValue::from_str(frontend_url.trim_end_matches('/'))
            .map_err(|_| ConfigError::InvalidOrigin(frontend_url.clone()))?;

        let static_dir = PathBuf::from(var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()));

        let ga4 = match (var("GA4_MEASUREMENT_ID"), var("GA4_API_SECRET")) {
            (Some(measurement_id), Some(api_secret)) => Some(Ga4Credentials {
                measurement_id,
                api_secret,
            }),
            _ => None,
        };

        let events_per_minute = match var("ANALYTICS_EVENTS_PER_MINUTE") {
            Some(value) => {
                let n: u32 = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                    name: "ANALYTICS_EVENTS_PER_MINUTE",
                    value,
                })?;
                NonZeroU32::new(n).ok_or(ConfigError::ZeroRate)?
            }
            None => DEFAULT_EVENTS_PER_MINUTE,
        };

        let max_tracked_clients = match var("ANALYTICS_MAX_CLIENTS") {
            Some(value) => {
                let n: usize = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                    name: "ANALYTICS_MAX_CLIENTS",
                    value,
                })?;
                if n == 0 {
                    return Err(ConfigError::ZeroClients);
                }
                n
            }
            None => DEFAULT_MAX_TRACKED_CLIENTS,
        };

        Ok(Self {
            port,
            environment,
            frontend_url,
            cors_origin,
            static_dir,
            ga4,
            events_per_minute,
            max_tracked_clients,
        })
    }
}
