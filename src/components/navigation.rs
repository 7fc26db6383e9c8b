//! Fixed navigation: side link rail, top-right action cluster with the
//! theme toggle and login link, and a full-screen mobile drawer.

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::NAV_ITEMS;
use crate::theme::{use_theme, Theme};
use crate::Route;

const NAV_STYLES: &str = r#"
.side-nav {
    position: fixed;
    left: 2rem;
    top: 33%;
    z-index: 50;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.side-nav a {
    font-size: 0.75rem;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: rgba(255,255,255,0.7);
    mix-blend-mode: difference;
    text-decoration: none;
    transition: color 0.3s;
}
.side-nav a:hover { color: white; }
.nav-actions {
    position: fixed;
    top: 1.5rem;
    right: 1.5rem;
    z-index: 50;
    display: flex;
    align-items: center;
    gap: 1rem;
}
.nav-login {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: rgba(255,255,255,0.7);
    mix-blend-mode: difference;
    text-decoration: none;
    transition: color 0.3s;
}
.nav-login:hover { color: white; }
.theme-toggle {
    background: rgba(255,255,255,0.1);
    backdrop-filter: blur(12px);
    color: white;
    border: 1px solid rgba(255,255,255,0.1);
    padding: 0.625rem;
    border-radius: 0.125rem;
    cursor: pointer;
    transition: background 0.3s;
}
.theme-toggle:hover { background: rgba(255,255,255,0.2); }
.nav-hire {
    background: white;
    color: black;
    font-weight: 700;
    padding: 0.5rem 1.5rem;
    border: none;
    border-radius: 0.125rem;
    font-size: 0.875rem;
    text-transform: uppercase;
    cursor: pointer;
    transition: background 0.3s;
}
.nav-hire:hover { background: #e5e5e5; }
.burger {
    display: none;
    position: fixed;
    top: 1.5rem;
    left: 1.5rem;
    z-index: 50;
    background: none;
    border: none;
    color: white;
    mix-blend-mode: difference;
    font-size: 2rem;
    cursor: pointer;
}
.mobile-drawer {
    position: fixed;
    inset: 0;
    background: black;
    z-index: 40;
    display: flex;
    align-items: center;
    justify-content: center;
}
.mobile-drawer nav {
    display: flex;
    flex-direction: column;
    gap: 2rem;
    text-align: center;
}
.mobile-drawer a {
    font-size: 1.5rem;
    font-weight: 700;
    color: white;
    text-transform: uppercase;
    text-decoration: none;
    transition: color 0.3s;
}
.mobile-drawer a:hover { color: #ff2e2e; }
.mobile-login {
    background: none;
    border: none;
    font-family: monospace;
    font-size: 1.25rem;
    font-weight: 700;
    color: #8fe000;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-top: 2rem;
    cursor: pointer;
}
@media (max-width: 1024px) {
    .side-nav { display: none; }
    .burger { display: block; }
}
"#;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let drawer_open = use_state(|| false);
    let theme_ctx = use_theme();

    let toggle_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drawer_open.set(!*drawer_open);
        })
    };

    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| {
            drawer_open.set(false);
        })
    };

    let toggle_theme = {
        let toggle = theme_ctx.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let theme_icon = match theme_ctx.theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };

    html! {
        <>
            <style>{NAV_STYLES}</style>

            <nav class="side-nav">
                { for NAV_ITEMS.iter().map(|item| html! {
                    <a key={item.label} href={item.href}>{item.label}</a>
                }) }
            </nav>

            <div class="nav-actions">
                <Link<Route> to={Route::Login} classes="nav-login">
                    {"Login"}
                </Link<Route>>
                <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle theme">
                    {theme_icon}
                </button>
                <button class="nav-hire">{"Hire Martians"}</button>
            </div>

            <button class="burger" onclick={toggle_drawer}>
                { if *drawer_open { "✕" } else { "☰" } }
            </button>

            if *drawer_open {
                <div class="mobile-drawer">
                    <nav>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a key={item.label} href={item.href} onclick={close_drawer.clone()}>
                                {item.label}
                            </a>
                        }) }
                        <Link<Route> to={Route::Login} classes="mobile-login">
                            {"[ Access Login ]"}
                        </Link<Route>>
                    </nav>
                </div>
            }
        </>
    }
}
