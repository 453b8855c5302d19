use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::navigation::accordion::Accordion;
use crate::navigation::nav_data::{self, MenuItem, SectionKey};
use crate::navigation::{go_to, nav_icons, MOBILE_LOCATION};
use crate::utils::analytics;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub accordion: Accordion<SectionKey>,
    pub on_tap_header: Callback<SectionKey>,
    pub on_activate: Callback<&'static MenuItem>,
    pub on_close: Callback<()>,
}

/// Slide-in accordion shown below the desktop breakpoint.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let navigator = use_navigator();

    if !props.accordion.is_visible() {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let phone_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            analytics::track_phone_click(config::MOBILE_MENU_PHONE.label, MOBILE_LOCATION);
            on_close.emit(());
        })
    };

    let demo_click = {
        let on_close = props.on_close.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            analytics::track_cta_click("Book a Demo", MOBILE_LOCATION, Some("/contact"));
            go_to(navigator.as_ref(), "/contact");
            on_close.emit(());
        })
    };

    html! {
        <>
            <div class="mobile-menu-backdrop" aria-hidden="true" onclick={close.clone()}></div>
            <div class="mobile-menu" role="dialog" aria-label="Site menu">
                <div class="mobile-menu-header">
                    <h2>{"Menu"}</h2>
                    <button class="mobile-menu-close" aria-label="Close menu" onclick={close}>
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                        </svg>
                    </button>
                </div>

                <div class="mobile-menu-sections">
                    {
                        nav_data::sections().iter().map(|section| {
                            let key = section.key;
                            let expanded = props.accordion.is_expanded(key);
                            let panel_id = format!("mobile-section-{}", key.slug());
                            let onclick = {
                                let on_tap_header = props.on_tap_header.clone();
                                Callback::from(move |_: MouseEvent| on_tap_header.emit(key))
                            };
                            html! {
                                <div class="mobile-section" key={key.slug()}>
                                    <button
                                        class={classes!("mobile-section-header", expanded.then_some("expanded"))}
                                        aria-expanded={expanded.to_string()}
                                        aria-controls={panel_id.clone()}
                                        {onclick}
                                    >
                                        <span>{section.title}</span>
                                        <svg class="chevron" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                                        </svg>
                                    </button>
                                    {
                                        if expanded {
                                            html! {
                                                <div class="mobile-section-items" id={panel_id}>
                                                    { for section.items.iter().map(|item| mobile_item(item, &props.on_activate)) }
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="mobile-menu-ctas">
                    <a href={config::MOBILE_MENU_PHONE.tel} class="mobile-cta-phone" onclick={phone_click}>
                        {config::MOBILE_MENU_PHONE.display}
                    </a>
                    <a href="/contact" class="mobile-cta-demo" onclick={demo_click}>
                        {"Book a Demo"}
                    </a>
                </div>
            </div>
        </>
    }
}

fn mobile_item(item: &'static MenuItem, on_activate: &Callback<&'static MenuItem>) -> Html {
    let onclick = {
        let on_activate = on_activate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_activate.emit(item);
        })
    };
    html! {
        <a href={item.href} class="mobile-item" key={item.href} {onclick}>
            {
                match item.icon.and_then(nav_icons::lookup) {
                    Some(icon) => html! { <div class="mobile-item-icon">{ icon.render("icon") }</div> },
                    None => html! {},
                }
            }
            <div class="mobile-item-text">
                <div class="mobile-item-label">{item.label}</div>
                {
                    if let Some(description) = item.description {
                        html! { <div class="mobile-item-description">{description}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </a>
    }
}
