use yew::prelude::*;
use yew_router::components::Link;

use crate::navigation::nav_data;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="page home-page">
            <style>{PAGE_CSS}</style>
            <section class="hero">
                <h1>{"Never miss another call"}</h1>
                <p>{"AI voice agents that answer, qualify and book for your business around the clock."}</p>
                <Link<Route> to={Route::Contact} classes="hero-cta">{"Book a Demo"}</Link<Route>>
            </section>
            <section class="section-index">
                {
                    nav_data::sections().iter().map(|section| html! {
                        <div class="section-index-column" key={section.key.slug()}>
                            <h2>{section.title}</h2>
                            <ul>
                                {
                                    section.items.iter().filter_map(|item| {
                                        let route = Route::from_href(item.href)?;
                                        Some(html! {
                                            <li key={item.href}>
                                                <Link<Route> to={route}>{item.label}</Link<Route>>
                                            </li>
                                        })
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                    }).collect::<Html>()
                }
            </section>
        </main>
    }
}

pub(crate) const PAGE_CSS: &str = r#"
    .page {
        max-width: 1100px;
        margin: 0 auto;
        padding: 8rem 2rem 4rem;
        color: #0f172a;
    }
    .hero {
        text-align: center;
        margin-bottom: 4rem;
    }
    .hero h1 {
        font-size: 3rem;
        margin-bottom: 1rem;
    }
    .hero p {
        font-size: 1.25rem;
        color: #475569;
    }
    .hero-cta {
        display: inline-block;
        margin-top: 2rem;
        padding: 1rem 2rem;
        border-radius: 0.75rem;
        background: linear-gradient(to right, #4a69e2, #00c9ff);
        color: #fff;
        font-weight: 700;
        text-decoration: none;
    }
    .section-index {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 2rem;
    }
    .section-index ul {
        list-style: none;
        padding: 0;
    }
    .section-index li {
        margin-bottom: 0.5rem;
    }
    .section-index a,
    .related a {
        color: #2563eb;
        text-decoration: none;
    }
    .breadcrumb {
        color: #64748b;
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }
    .related {
        margin-top: 3rem;
    }
    .related ul {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        list-style: none;
        padding: 0;
    }
    @media (max-width: 768px) {
        .page {
            padding: 6rem 1rem 2rem;
        }
        .hero h1 {
            font-size: 2rem;
        }
    }
"#;
