//! Server-side forwarding to the GA4 Measurement Protocol.

use anyhow::Context;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use serde_json::{json, Value};

use crate::config::Ga4Credentials;
use crate::handlers::analytics::AnalyticsEventRequest;

pub const MEASUREMENT_PROTOCOL_URL: &str = "https://www.google-analytics.com/mp/collect";

type HmacSha256 = Hmac<Sha256>;

/// Pseudonymous GA client id: HMAC-SHA256 of the rate-limit key under the
/// GA4 API secret, so raw addresses never leave the server.
pub fn client_id(secret: &str, client_key: &str) -> anyhow::Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| anyhow::anyhow!("Invalid HMAC key: {}", e))?;
    mac.update(client_key.as_bytes());
    let digest = mac.finalize().into_bytes();
    let high = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    let low = u32::from_be_bytes([digest[4], digest[5], digest[6], digest[7]]);
    Ok(format!("{}.{}", high, low))
}

pub fn payload(client_id: &str, event: &AnalyticsEventRequest) -> Value {
    let mut params = event.params.clone();
    if let Some(page_path) = &event.page_path {
        params
            .entry("page_path")
            .or_insert_with(|| Value::from(page_path.as_str()));
    }
    json!({
        "client_id": client_id,
        "events": [{
            "name": event.name.trim(),
            "params": params,
        }],
    })
}

pub async fn forward(
    http: &reqwest::Client,
    credentials: &Ga4Credentials,
    client_key: &str,
    event: &AnalyticsEventRequest,
) -> anyhow::Result<()> {
    let client_id = client_id(&credentials.api_secret, client_key)?;
    let response = http
        .post(MEASUREMENT_PROTOCOL_URL)
        .query(&[
            ("measurement_id", credentials.measurement_id.as_str()),
            ("api_secret", credentials.api_secret.as_str()),
        ])
        .json(&payload(&client_id, event))
        .send()
        .await
        .context("GA4 request failed")?;

    if !response.status().is_success() {
        anyhow::bail!("GA4 returned {}", response.status());
    }
    tracing::debug!("Forwarded {} to GA4", event.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[test]
    fn client_id_is_stable_per_client_and_keyed_by_secret() {
        let id = client_id("s3cret", "203.0.113.7").unwrap();
        assert_eq!(id, client_id("s3cret", "203.0.113.7").unwrap());
        assert_ne!(id, client_id("s3cret", "203.0.113.8").unwrap());
        assert_ne!(id, client_id("other-secret", "203.0.113.7").unwrap());
        assert_eq!(id.split('.').count(), 2);
    }

    #[test]
    fn payload_wraps_a_single_event() {
        let mut params = Map::new();
        params.insert("cta_name".to_string(), Value::from("Sign In"));
        let event = AnalyticsEventRequest {
            name: "cta_click".to_string(),
            params,
            page_path: Some("/pricing".to_string()),
        };

        let body = payload("123.456", &event);
        assert_eq!(body["events"][0]["name"], "cta_click");
        assert_eq!(body["events"][0]["params"]["cta_name"], "Sign In");
        assert_eq!(body["events"][0]["params"]["page_path"], "/pricing");
        assert_eq!(body["client_id"], "123.456");
    }
}
