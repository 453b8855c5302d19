pub mod accordion;
pub mod dropdown;
pub mod hover_intent;
pub mod mega_menu;
pub mod mobile;
pub mod nav_data;
pub mod nav_icons;

pub use mega_menu::MegaMenu;

use yew_router::prelude::Navigator;

use crate::Route;

pub(crate) const DESKTOP_LOCATION: &str = "desktop_megamenu";
pub(crate) const MOBILE_LOCATION: &str = "mobile_megamenu";

/// Client-side navigation to a catalog href, falling back to a full page load
/// when the router is unavailable.
pub(crate) fn go_to(navigator: Option<&Navigator>, href: &str) {
    match (navigator, Route::from_href(href)) {
        (Some(navigator), Some(route)) => navigator.push(&route),
        _ => {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(href) {
                    log::warn!("Failed to navigate to {}: {:?}", href, e);
                }
            }
        }
    }
}
