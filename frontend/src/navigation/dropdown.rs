use yew::prelude::*;

use crate::navigation::nav_data::{MenuItem, MenuSection};
use crate::navigation::nav_icons;

#[derive(Properties, PartialEq)]
pub struct MegaMenuDropdownProps {
    pub section: &'static MenuSection,
    pub is_open: bool,
    pub on_activate: Callback<&'static MenuItem>,
    pub on_mouse_enter: Callback<()>,
    pub on_mouse_leave: Callback<()>,
}

/// Two-column panel listing one section's items. Renders nothing while closed.
#[function_component(MegaMenuDropdown)]
pub fn mega_menu_dropdown(props: &MegaMenuDropdownProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let onmouseenter = {
        let cb = props.on_mouse_enter.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let onmouseleave = {
        let cb = props.on_mouse_leave.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div
            class="megamenu-panel"
            id={format!("megamenu-{}", props.section.key.slug())}
            role="menu"
            {onmouseenter}
            {onmouseleave}
        >
            // connector so the pointer never crosses a gap
            <div class="megamenu-panel-connector"></div>
            <div class="megamenu-panel-inner">
                <div class="megamenu-grid">
                    {
                        props.section.items.iter().map(|item| {
                            let onclick = {
                                let on_activate = props.on_activate.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    on_activate.emit(item);
                                })
                            };
                            html! {
                                <a href={item.href} class="megamenu-item" role="menuitem" key={item.href} {onclick}>
                                    {
                                        match item.icon.and_then(nav_icons::lookup) {
                                            Some(icon) => html! {
                                                <div class="megamenu-item-icon">{ icon.render("icon") }</div>
                                            },
                                            None => html! {},
                                        }
                                    }
                                    <div class="megamenu-item-text">
                                        <h3>{item.label}</h3>
                                        {
                                            if let Some(description) = item.description {
                                                html! { <p>{description}</p> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}
