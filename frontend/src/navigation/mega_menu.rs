use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::navigation::accordion::Accordion;
use crate::navigation::dropdown::MegaMenuDropdown;
use crate::navigation::hover_intent::{CloseToken, HoverIntent};
use crate::navigation::mobile::MobileMenu;
use crate::navigation::nav_data::{self, MenuItem, SectionKey};
use crate::navigation::{go_to, DESKTOP_LOCATION, MOBILE_LOCATION};
use crate::utils::analytics;
use crate::Route;

type DesktopMachine = HoverIntent<SectionKey, Timeout>;

/// Shared handle to the desktop machine and the state slot that renders it.
/// The machine is the source of truth; `open` mirrors it after every event.
#[derive(Clone)]
struct DesktopMenu {
    machine: Rc<RefCell<DesktopMachine>>,
    open: UseStateHandle<Option<SectionKey>>,
}

impl DesktopMenu {
    fn sync(&self) {
        let open = self.machine.borrow().open_key();
        self.open.set(open);
    }

    fn enter_trigger(&self, key: SectionKey) {
        self.machine.borrow_mut().enter_trigger(key);
        self.sync();
    }

    fn enter_panel(&self, key: SectionKey) {
        self.machine.borrow_mut().enter_panel(key);
    }

    fn leave(&self, key: SectionKey) {
        let handle = self.clone();
        self.machine.borrow_mut().leave(key, move |token, delay| {
            Timeout::new(delay, move || handle.close_elapsed(token))
        });
    }

    fn close_elapsed(&self, token: CloseToken) {
        let closed = self.machine.borrow_mut().close_elapsed(token);
        if closed {
            self.sync();
        }
    }

    fn is_open(&self) -> bool {
        self.machine.borrow().open_key().is_some()
    }

    fn dismiss(&self) {
        self.machine.borrow_mut().dismiss();
        self.sync();
    }

    fn teardown(&self) {
        self.machine.borrow_mut().teardown();
    }
}

fn close_mobile(mobile: &UseStateHandle<Accordion<SectionKey>>) {
    let mut next = **mobile;
    next.close();
    mobile.set(next);
}

#[function_component(MegaMenu)]
pub fn mega_menu() -> Html {
    let machine = use_mut_ref(|| DesktopMachine::new(config::CLOSE_GRACE_MS));
    let open_section = use_state_eq(|| None::<SectionKey>);
    let mobile = use_state_eq(|| Accordion::new(config::DEFAULT_MOBILE_SECTION));
    let is_scrolled = use_state_eq(|| false);
    let nav_ref = use_node_ref();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let desktop = DesktopMenu {
        machine,
        open: open_section.clone(),
    };

    // Cancel any pending close when the header unmounts
    {
        let desktop = desktop.clone();
        use_effect_with_deps(move |_| move || desktop.teardown(), ());
    }

    // Scroll state for header styling
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let update = {
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > config::SCROLLED_THRESHOLD_PX);
                                }
                            }
                        }
                    };
                    update();
                    let callback = Closure::<dyn Fn()>::new(update);
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to attach scroll listener: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            if let Err(e) = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            ) {
                                log::warn!("Failed to detach scroll listener: {:?}", e);
                            }
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Outside click closes the desktop dropdown, Escape closes everything
    {
        let desktop = desktop.clone();
        let mobile = mobile.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(document) =
                    web_sys::window().and_then(|w| w.document())
                {
                    let on_mousedown = {
                        let desktop = desktop.clone();
                        Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                            if !desktop.is_open() {
                                return;
                            }
                            let inside = match (nav_ref.get(), e.target()) {
                                (Some(nav), Some(target)) => target
                                    .dyn_ref::<Node>()
                                    .map(|node| nav.contains(Some(node)))
                                    .unwrap_or(false),
                                _ => false,
                            };
                            if !inside {
                                desktop.dismiss();
                            }
                        })
                    };
                    let on_keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            desktop.dismiss();
                            close_mobile(&mobile);
                        }
                    });
                    if let Err(e) = document.add_event_listener_with_callback(
                        "mousedown",
                        on_mousedown.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Failed to attach mousedown listener: {:?}", e);
                    }
                    if let Err(e) = document
                        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to attach keydown listener: {:?}", e);
                    }
                    Box::new(move || {
                        if let Err(e) = document.remove_event_listener_with_callback(
                            "mousedown",
                            on_mousedown.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Failed to detach mousedown listener: {:?}", e);
                        }
                        if let Err(e) = document.remove_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Failed to detach keydown listener: {:?}", e);
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Navigation closes both menus
    {
        let desktop = desktop.clone();
        let mobile = mobile.clone();
        use_effect_with_deps(
            move |_| {
                desktop.dismiss();
                close_mobile(&mobile);
                || ()
            },
            route,
        );
    }

    let on_desktop_activate = {
        let desktop = desktop.clone();
        let navigator = navigator.clone();
        Callback::from(move |item: &'static MenuItem| {
            log::debug!("desktop menu -> {}", item.href);
            analytics::track_menu_item_click(item.label, DESKTOP_LOCATION, item.href);
            go_to(navigator.as_ref(), item.href);
            desktop.dismiss();
        })
    };

    let on_mobile_activate = {
        let mobile = mobile.clone();
        Callback::from(move |item: &'static MenuItem| {
            log::debug!("mobile menu -> {}", item.href);
            analytics::track_menu_item_click(item.label, MOBILE_LOCATION, item.href);
            go_to(navigator.as_ref(), item.href);
            close_mobile(&mobile);
        })
    };

    let on_tap_header = {
        let mobile = mobile.clone();
        Callback::from(move |key: SectionKey| {
            let mut next = *mobile;
            next.tap_header(key);
            mobile.set(next);
        })
    };

    let on_mobile_close = {
        let mobile = mobile.clone();
        Callback::from(move |_: ()| close_mobile(&mobile))
    };

    let toggle_mobile = {
        let mobile = mobile.clone();
        let desktop = desktop.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *mobile;
            next.toggle();
            if next.is_visible() {
                desktop.dismiss();
            }
            mobile.set(next);
        })
    };

    let phone_click = Callback::from(|_: MouseEvent| {
        analytics::track_phone_click(config::HEADER_PHONE.label, "header");
    });

    let sign_in_click = Callback::from(|_: MouseEvent| {
        analytics::track_cta_click("Sign In", "header", Some(config::SIGN_IN_URL));
        analytics::track_outbound_click(config::SIGN_IN_URL, "Sign In");
    });

    let mobile_open = mobile.is_visible();

    html! {
        <header class={classes!("site-header", is_scrolled.then_some("scrolled"))}>
            <style>{HEADER_CSS}</style>
            <nav class="site-nav" ref={nav_ref}>
                <Link<Route> to={Route::Home} classes="site-logo">
                    <img src="/logo-desktop-light.svg" alt="Capture Client" />
                </Link<Route>>

                <div class="desktop-nav">
                    {
                        nav_data::sections().iter().map(|section| {
                            let key = section.key;
                            let is_open = *open_section == Some(key);
                            let onmouseenter = {
                                let desktop = desktop.clone();
                                Callback::from(move |_: MouseEvent| desktop.enter_trigger(key))
                            };
                            let onmouseleave = {
                                let desktop = desktop.clone();
                                Callback::from(move |_: MouseEvent| desktop.leave(key))
                            };
                            // The group does not re-fire mouseenter when the pointer
                            // comes back from its own panel.
                            let trigger_enter = {
                                let desktop = desktop.clone();
                                Callback::from(move |_: MouseEvent| desktop.enter_trigger(key))
                            };
                            let panel_enter = {
                                let desktop = desktop.clone();
                                Callback::from(move |_: ()| desktop.enter_panel(key))
                            };
                            let panel_leave = {
                                let desktop = desktop.clone();
                                Callback::from(move |_: ()| desktop.leave(key))
                            };
                            html! {
                                <div class="nav-trigger-group" key={key.slug()} {onmouseenter} {onmouseleave}>
                                    <button
                                        class={classes!("nav-trigger", is_open.then_some("open"))}
                                        aria-haspopup="true"
                                        aria-expanded={is_open.to_string()}
                                        aria-controls={format!("megamenu-{}", key.slug())}
                                        onmouseenter={trigger_enter}
                                    >
                                        <span>{section.title}</span>
                                        <svg class="chevron" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                                        </svg>
                                    </button>
                                    if is_open {
                                        <div class="hover-bridge"></div>
                                    }
                                    <MegaMenuDropdown
                                        {section}
                                        {is_open}
                                        on_activate={on_desktop_activate.clone()}
                                        on_mouse_enter={panel_enter}
                                        on_mouse_leave={panel_leave}
                                    />
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="desktop-ctas">
                    <a href={config::HEADER_PHONE.tel} class="header-phone" onclick={phone_click}>
                        {config::HEADER_PHONE.display}
                    </a>
                    <a
                        href={config::SIGN_IN_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="header-sign-in"
                        onclick={sign_in_click}
                    >
                        {"Sign In"}
                    </a>
                </div>

                <button
                    class={classes!("mobile-toggle", mobile_open.then_some("open"))}
                    aria-label="Toggle menu"
                    aria-expanded={mobile_open.to_string()}
                    onclick={toggle_mobile}
                >
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                        if mobile_open {
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                        } else {
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                        }
                    </svg>
                </button>
            </nav>

            <MobileMenu
                accordion={*mobile}
                {on_tap_header}
                on_activate={on_mobile_activate}
                on_close={on_mobile_close}
            />
        </header>
    }
}

const HEADER_CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #f1f5f9;
        transition: all 0.5s ease;
    }
    .site-header.scrolled {
        background: rgba(255, 255, 255, 0.95);
        border-bottom-color: #e2e8f0;
        box-shadow: 0 10px 15px -3px rgba(226, 232, 240, 0.5);
    }
    .site-nav {
        max-width: 1280px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
        position: relative;
    }
    .site-logo img {
        height: 48px;
        width: auto;
    }
    .desktop-nav {
        display: flex;
        align-items: center;
        gap: 0.25rem;
    }
    .nav-trigger-group {
        position: relative;
    }
    .nav-trigger {
        display: flex;
        align-items: center;
        gap: 0.25rem;
        min-height: 44px;
        padding: 0.75rem 1rem;
        background: none;
        border: none;
        color: #334155;
        font-size: 0.875rem;
        font-weight: 500;
        cursor: pointer;
    }
    .nav-trigger:hover,
    .nav-trigger.open {
        color: #2563eb;
    }
    .nav-trigger .chevron {
        width: 1rem;
        height: 1rem;
        transition: transform 0.3s ease;
    }
    .nav-trigger.open .chevron {
        transform: rotate(180deg);
    }
    .hover-bridge {
        position: absolute;
        left: -1rem;
        right: -1rem;
        top: 100%;
        height: 2rem;
    }
    .megamenu-panel {
        position: absolute;
        left: 50%;
        top: 100%;
        transform: translateX(-50%);
        width: 620px;
        max-width: 90vw;
        z-index: 50;
    }
    .megamenu-panel-connector {
        height: 0.5rem;
    }
    .megamenu-panel-inner {
        background: #030303;
        border: 1px solid rgba(255, 255, 255, 0.06);
        border-radius: 1rem;
        box-shadow: 0 20px 60px -15px rgba(0, 0, 0, 0.7);
    }
    .megamenu-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 0.25rem;
        padding: 1rem;
    }
    .megamenu-item {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
        padding: 0.875rem;
        border-radius: 0.75rem;
        text-decoration: none;
        border: 1px solid transparent;
    }
    .megamenu-item:hover {
        background: rgba(255, 255, 255, 0.08);
        border-color: rgba(255, 255, 255, 0.06);
    }
    .megamenu-item-icon {
        width: 2.5rem;
        height: 2.5rem;
        flex-shrink: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 0.5rem;
        background: #0a0a0a;
        border: 1px solid rgba(255, 255, 255, 0.06);
        color: #00c9ff;
    }
    .icon {
        width: 1.25rem;
        height: 1.25rem;
    }
    .megamenu-item-text h3 {
        margin: 0;
        font-size: 15px;
        font-weight: 600;
        color: #fff;
    }
    .megamenu-item:hover .megamenu-item-text h3 {
        color: #00c9ff;
    }
    .megamenu-item-text p {
        margin: 0.125rem 0 0;
        font-size: 13px;
        color: rgba(255, 255, 255, 0.5);
    }
    .desktop-ctas {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .header-phone {
        color: #334155;
        font-size: 0.875rem;
        font-weight: 500;
        padding: 0.75rem 1rem;
        border: 1px solid #e2e8f0;
        border-radius: 0.5rem;
        text-decoration: none;
    }
    .header-sign-in {
        background: #2563eb;
        color: #fff;
        font-weight: 600;
        font-size: 0.875rem;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        text-decoration: none;
    }
    .header-sign-in:hover {
        background: #1d4ed8;
    }
    .mobile-toggle {
        display: none;
        min-width: 48px;
        min-height: 48px;
        align-items: center;
        justify-content: center;
        background: none;
        border: 1px solid #e2e8f0;
        border-radius: 0.5rem;
        color: #334155;
        z-index: 120;
    }
    .mobile-toggle svg {
        width: 1.5rem;
        height: 1.5rem;
        transition: transform 0.3s ease;
    }
    .mobile-toggle.open svg {
        transform: rotate(90deg);
        color: #2563eb;
    }
    .mobile-menu-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(7, 11, 20, 0.95);
        z-index: 40;
    }
    .mobile-menu {
        position: fixed;
        top: 0;
        right: 0;
        bottom: 0;
        width: 100%;
        max-width: 24rem;
        background: #0f172a;
        border-left: 1px solid rgba(255, 255, 255, 0.1);
        z-index: 50;
        overflow-y: auto;
        display: flex;
        flex-direction: column;
    }
    .mobile-menu-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1.25rem 1.5rem;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        color: #f8fafc;
    }
    .mobile-menu-header h2 {
        margin: 0;
        font-size: 1.25rem;
    }
    .mobile-menu-close {
        width: 2.5rem;
        height: 2.5rem;
        background: none;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.5rem;
        color: #f8fafc;
    }
    .mobile-menu-sections {
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        flex: 1;
    }
    .mobile-section {
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        overflow: hidden;
        background: rgba(255, 255, 255, 0.05);
    }
    .mobile-section-header {
        width: 100%;
        min-height: 56px;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 1.25rem;
        background: none;
        border: none;
        color: #f8fafc;
        font-size: 1.125rem;
        font-weight: 600;
        text-align: left;
    }
    .mobile-section-header .chevron {
        width: 1.25rem;
        height: 1.25rem;
        color: #00c9ff;
        transition: transform 0.3s ease;
    }
    .mobile-section-header.expanded .chevron {
        transform: rotate(180deg);
    }
    .mobile-section-items {
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        padding: 0.5rem;
    }
    .mobile-item {
        display: flex;
        align-items: center;
        gap: 1rem;
        min-height: 56px;
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
        text-decoration: none;
    }
    .mobile-item:hover {
        background: rgba(255, 255, 255, 0.1);
    }
    .mobile-item-icon {
        width: 2.25rem;
        height: 2.25rem;
        flex-shrink: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 0.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        color: #00c9ff;
    }
    .mobile-item-label {
        color: #f8fafc;
        font-weight: 500;
    }
    .mobile-item-description {
        color: rgba(248, 250, 252, 0.6);
        font-size: 0.75rem;
    }
    .mobile-menu-ctas {
        position: sticky;
        bottom: 0;
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        background: #0f172a;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .mobile-cta-phone,
    .mobile-cta-demo {
        min-height: 56px;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 0.75rem;
        text-decoration: none;
        font-weight: 600;
    }
    .mobile-cta-phone {
        color: #f8fafc;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .mobile-cta-demo {
        color: #fff;
        background: linear-gradient(to right, #4a69e2, #00c9ff);
    }
    @media (max-width: 1024px) {
        .desktop-nav,
        .desktop-ctas {
            display: none;
        }
        .mobile-toggle {
            display: flex;
        }
    }
"#;
