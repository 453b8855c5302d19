use yew::prelude::*;
use yew_router::components::Link;

use crate::pages::home::PAGE_CSS;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="page not-found-page">
            <style>{PAGE_CSS}</style>
            <section class="hero">
                <h1>{"Page not found"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="hero-cta">{"Back to home"}</Link<Route>>
            </section>
        </main>
    }
}
