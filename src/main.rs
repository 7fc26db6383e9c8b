use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod content;
mod theme;
mod effects {
    pub mod parallax;
    pub mod reveal;
    pub mod scramble;
}
mod components {
    pub mod blog;
    pub mod case_studies;
    pub mod footer;
    pub mod hero;
    pub mod login;
    pub mod navigation;
    pub mod open_source;
    pub mod services;
}

use components::{
    blog::Blog, case_studies::CaseStudies, footer::Footer, hero::Hero, login::Login,
    navigation::Navigation, open_source::OpenSource, services::Services,
};
use theme::{use_theme, ThemeProvider};

const GLOBAL_STYLES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    -webkit-font-smoothing: antialiased;
}
.site {
    background: var(--bg);
    color: var(--fg);
    transition: background 0.5s, color 0.5s;
}
.theme-dark {
    --bg: #0a0a0a;
    --bg-alt: #111111;
    --fg: #ffffff;
    --fg-muted: #9ca3af;
    --border: rgba(255,255,255,0.1);
    --card-bg: rgba(255,255,255,0.03);
}
.theme-light {
    --bg: #f5f5f2;
    --bg-alt: #ffffff;
    --fg: #111111;
    --fg-muted: #4b5563;
    --border: rgba(0,0,0,0.1);
    --card-bg: rgba(0,0,0,0.02);
}
.reveal {
    opacity: 0;
    transform: translateY(3rem);
    transition: opacity 1s ease-out, transform 1s ease-out;
}
.reveal.revealed {
    opacity: 1;
    transform: translateY(0);
}
.tag-pill {
    display: inline-block;
    font-family: monospace;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    border: 1px solid var(--border);
    padding: 0.25rem 0.75rem;
    margin-right: 0.75rem;
    border-radius: 9999px;
}
.case-stat-value { font-size: 1.875rem; font-weight: 700; }
.case-stat-label {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--fg-muted);
    margin-top: 0.25rem;
}
"#;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        }
    }
}

#[function_component(Home)]
fn home() -> Html {
    let theme_ctx = use_theme();

    html! {
        <div class={classes!("site", theme_ctx.theme.class())}>
            <Navigation />
            <Hero />
            <Services />
            <CaseStudies />
            <OpenSource />
            <Blog />
            <Footer />
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <style>{GLOBAL_STYLES}</style>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
