//! GA4 event helpers.
//!
//! Every event goes to `window.gtag` when the tag is loaded and, if enabled,
//! is relayed to the backend. Both paths are best effort: nothing here returns
//! an error or blocks the interaction that triggered it.

use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;

use crate::config;
use crate::utils::api::Api;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub params: BTreeMap<&'static str, String>,
}

impl AnalyticsEvent {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            params: BTreeMap::new(),
        }
    }

    fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.insert(key, value.into());
        self
    }

    fn optional(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.param(key, value),
            _ => self,
        }
    }

    pub fn cta_click(cta_name: &str, location: &str, destination: Option<&str>) -> Self {
        Self::new("cta_click")
            .param("cta_name", cta_name)
            .param("cta_location", location)
            .optional("cta_destination", destination)
    }

    pub fn phone_click(phone_number: Option<&str>, location: Option<&str>) -> Self {
        Self::new("phone_click")
            .param("event_category", "engagement")
            .param("event_label", phone_number.unwrap_or("phone_number"))
            .optional("click_location", location)
    }

    pub fn menu_item_click(label: &str, location: &str, destination: &str) -> Self {
        Self::new("menu_item_click")
            .param("item_label", label)
            .param("menu_location", location)
            .param("item_destination", destination)
    }

    pub fn outbound_click(url: &str, link_text: Option<&str>) -> Self {
        Self::new("outbound_click")
            .param("link_url", url)
            .optional("link_text", link_text)
    }
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    name: &'a str,
    params: &'a BTreeMap<&'static str, String>,
    page_path: Option<String>,
}

pub fn track(event: AnalyticsEvent) {
    notify_gtag(&event);
    if config::ANALYTICS_RELAY {
        relay(event);
    }
}

pub fn track_cta_click(cta_name: &str, location: &str, destination: Option<&str>) {
    track(AnalyticsEvent::cta_click(cta_name, location, destination));
}

pub fn track_phone_click(phone_number: &str, location: &str) {
    track(AnalyticsEvent::phone_click(Some(phone_number), Some(location)));
}

pub fn track_menu_item_click(label: &str, location: &str, destination: &str) {
    track(AnalyticsEvent::menu_item_click(label, location, destination));
}

pub fn track_outbound_click(url: &str, link_text: &str) {
    track(AnalyticsEvent::outbound_click(url, Some(link_text)));
}

fn notify_gtag(event: &AnalyticsEvent) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let gtag = match js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) {
        Ok(value) => value,
        Err(_) => return,
    };
    let Ok(gtag) = gtag.dyn_into::<js_sys::Function>() else {
        return;
    };

    let params = js_sys::Object::new();
    for (key, value) in &event.params {
        let _ = js_sys::Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    if let Err(e) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event.name),
        &params,
    ) {
        log::debug!("gtag rejected {}: {:?}", event.name, e);
    }
}

fn relay(event: AnalyticsEvent) {
    let page_path = web_sys::window().and_then(|w| w.location().pathname().ok());
    spawn_local(async move {
        let payload = RelayPayload {
            name: event.name,
            params: &event.params,
            page_path,
        };
        let request = match Api::post("/api/analytics/event").json(&payload) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("Failed to encode analytics event {}: {}", event.name, e);
                return;
            }
        };
        if let Err(e) = request.send().await {
            log::debug!("Analytics relay failed for {}: {:?}", event.name, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(event: &AnalyticsEvent) -> Vec<(&'static str, &str)> {
        event.params.iter().map(|(k, v)| (*k, v.as_str())).collect()
    }

    #[test]
    fn cta_click_includes_destination_when_given() {
        let event = AnalyticsEvent::cta_click("Book a Demo", "mobile_megamenu", Some("/contact"));
        assert_eq!(event.name, "cta_click");
        assert_eq!(
            params(&event),
            vec![
                ("cta_destination", "/contact"),
                ("cta_location", "mobile_megamenu"),
                ("cta_name", "Book a Demo"),
            ]
        );

        let event = AnalyticsEvent::cta_click("Sign In", "header", None);
        assert!(!event.params.contains_key("cta_destination"));
    }

    #[test]
    fn phone_click_defaults_label() {
        let event = AnalyticsEvent::phone_click(None, None);
        assert_eq!(
            params(&event),
            vec![("event_category", "engagement"), ("event_label", "phone_number")]
        );

        let event = AnalyticsEvent::phone_click(Some("865-346-6111"), Some("header"));
        assert_eq!(event.params["event_label"], "865-346-6111");
        assert_eq!(event.params["click_location"], "header");
    }

    #[test]
    fn menu_item_click_carries_label_location_and_target() {
        let event = AnalyticsEvent::menu_item_click("Pricing", "desktop_megamenu", "/pricing");
        assert_eq!(event.name, "menu_item_click");
        assert_eq!(event.params["item_label"], "Pricing");
        assert_eq!(event.params["menu_location"], "desktop_megamenu");
        assert_eq!(event.params["item_destination"], "/pricing");
    }

    #[test]
    fn empty_optional_values_are_skipped() {
        let event = AnalyticsEvent::outbound_click("https://app.captureclient.com/", Some(""));
        assert_eq!(params(&event), vec![("link_url", "https://app.captureclient.com/")]);
    }

    #[test]
    fn relay_payload_serializes_flat_params() {
        let event = AnalyticsEvent::cta_click("Sign In", "header", None);
        let payload = RelayPayload {
            name: event.name,
            params: &event.params,
            page_path: Some("/pricing".to_string()),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["name"], "cta_click");
        assert_eq!(value["params"]["cta_location"], "header");
        assert_eq!(value["page_path"], "/pricing");
    }
}
