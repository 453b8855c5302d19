use crate::navigation::nav_data::SectionKey;

pub fn get_backend_url() -> &'static str {
    if cfg!(debug_assertions) {
        "http://localhost:3000"
    } else {
        ""
    }
}

/// How long a dropdown stays open after the pointer leaves its trigger or panel.
pub const CLOSE_GRACE_MS: u32 = 300;

/// Section expanded every time the mobile menu is opened.
pub const DEFAULT_MOBILE_SECTION: SectionKey = SectionKey::Solutions;

/// Header switches to its solid style past this scroll offset.
pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

/// Relay analytics events to the backend in addition to gtag.
pub const ANALYTICS_RELAY: bool = true;

pub const SIGN_IN_URL: &str = "https://app.captureclient.com/";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhoneNumber {
    pub tel: &'static str,
    pub display: &'static str,
    /// Value reported as the analytics event label.
    pub label: &'static str,
}

pub const HEADER_PHONE: PhoneNumber = PhoneNumber {
    tel: "tel:865-346-6111",
    display: "(865) 346-6111",
    label: "865-346-6111",
};

pub const MOBILE_MENU_PHONE: PhoneNumber = PhoneNumber {
    tel: "tel:8653463339",
    display: "(865) 346-3339",
    label: "865-346-3339",
};
