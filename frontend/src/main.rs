use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod navigation;
mod pages;
mod utils;

use navigation::MegaMenu;
use pages::destination::{Contact, Destination};
use pages::home::Home;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[at("/who-we-serve")]
    WhoWeServe,
    #[at("/industries/:slug")]
    Industry { slug: String },
    #[at("/:page")]
    Destination { page: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for an in-site href, ignoring anything the router does not know.
    pub fn from_href(href: &str) -> Option<Route> {
        Route::recognize(href).filter(|route| *route != Route::NotFound)
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Contact => html! { <Contact /> },
        Route::WhoWeServe => html! { <Destination path="/who-we-serve" /> },
        Route::Industry { slug } => html! { <Destination path={format!("/industries/{}", slug)} /> },
        Route::Destination { page } => html! { <Destination path={format!("/{}", page)} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <MegaMenu />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }));
    log::info!("Starting capture-frontend");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::nav_data;

    #[test]
    fn every_catalog_destination_has_a_route() {
        for href in nav_data::all_destinations() {
            assert!(Route::from_href(href).is_some(), "{} has no route", href);
        }
    }

    #[test]
    fn industry_paths_keep_their_slug() {
        assert_eq!(
            Route::from_href("/industries/med-spa"),
            Some(Route::Industry {
                slug: "med-spa".to_string()
            })
        );
        assert_eq!(Route::from_href("/who-we-serve"), Some(Route::WhoWeServe));
        assert_eq!(
            Route::from_href("/pricing"),
            Some(Route::Destination {
                page: "pricing".to_string()
            })
        );
    }
}
