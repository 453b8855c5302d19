use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::navigation::nav_data;
use crate::pages::home::PAGE_CSS;
use crate::pages::not_found::NotFound;
use crate::utils::analytics;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct DestinationProps {
    pub path: String,
}

/// Landing shell for a menu destination: title and description from the
/// catalog, plus the rest of its section.
#[function_component(Destination)]
pub fn destination(props: &DestinationProps) -> Html {
    let Some((section, item)) = nav_data::find_item(&props.path) else {
        log::info!("No menu entry for {}", props.path);
        return html! { <NotFound /> };
    };

    let demo_click = Callback::from(move |_: MouseEvent| {
        analytics::track_cta_click("Book a Demo", item.href, Some("/contact"));
    });

    html! {
        <main class="page destination-page">
            <style>{PAGE_CSS}</style>
            <section class="hero">
                <div class="breadcrumb">{section.title}</div>
                <h1>{item.label}</h1>
                if let Some(description) = item.description {
                    <p>{description}</p>
                }
                <span onclick={demo_click}>
                    <Link<Route> to={Route::Contact} classes="hero-cta">{"Book a Demo"}</Link<Route>>
                </span>
            </section>
            <section class="related">
                <h2>{format!("More in {}", section.title)}</h2>
                <ul>
                    {
                        section.items.iter()
                            .filter(|other| other.href != item.href)
                            .filter_map(|other| {
                                let route = Route::from_href(other.href)?;
                                Some(html! {
                                    <li key={other.href}>
                                        <Link<Route> to={route}>{other.label}</Link<Route>>
                                    </li>
                                })
                            })
                            .collect::<Html>()
                    }
                </ul>
            </section>
        </main>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let phone_click = Callback::from(|_: MouseEvent| {
        analytics::track_phone_click(config::HEADER_PHONE.label, "contact_page");
    });

    html! {
        <main class="page contact-page">
            <style>{PAGE_CSS}</style>
            <section class="hero">
                <h1>{"Book a Demo"}</h1>
                <p>{"Hear an AI voice agent handle your calls. Talk to us today."}</p>
                <a href={config::HEADER_PHONE.tel} class="hero-cta" onclick={phone_click}>
                    {config::HEADER_PHONE.display}
                </a>
            </section>
        </main>
    }
}
