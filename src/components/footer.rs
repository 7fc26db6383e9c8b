//! Footer: massive CTA, directory, world clocks and the newsletter uplink.
//! Reveals once on first viewport entry like every other section; the
//! clocks tick on a 1s interval that is dropped with the component.

use chrono::{FixedOffset, Utc};
use gloo_timers::callback::Interval;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::content::{FOOTER_LINKS, WORLD_CLOCKS};
use crate::effects::reveal::{use_reveal, RevealOptions};

const FOOTER_STYLES: &str = r#"
.footer {
    background: black;
    color: white;
    overflow: hidden;
    position: relative;
}
.footer-grid-bg {
    position: absolute;
    inset: 0;
    pointer-events: none;
    background-size: 50px 50px;
    background-image:
        linear-gradient(to right, rgba(255,255,255,0.03) 1px, transparent 1px),
        linear-gradient(to bottom, rgba(255,255,255,0.03) 1px, transparent 1px);
}
.footer-scanline {
    position: absolute;
    inset: 0;
    pointer-events: none;
    overflow: hidden;
    opacity: 0.2;
}
.footer-scanline div {
    width: 100%;
    height: 20%;
    background: linear-gradient(to bottom, transparent, rgba(143,224,0,0.1), transparent);
    filter: blur(4px);
    animation: scanline 4s linear infinite;
}
@keyframes scanline {
    0% { transform: translateY(-100%); }
    100% { transform: translateY(500%); }
}
.footer-cta {
    border-bottom: 1px solid rgba(255,255,255,0.1);
    position: relative;
    z-index: 10;
    padding: 5rem 3rem;
}
.footer-cta h2 {
    font-size: 12vw;
    line-height: 0.8;
    font-weight: 900;
    letter-spacing: -0.04em;
}
.footer-cta .dim { color: rgba(255,255,255,0.4); transition: color 0.3s; }
.footer-cta:hover .dim { color: #ff2e2e; }
.footer-columns {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    border-bottom: 1px solid rgba(255,255,255,0.1);
    position: relative;
    z-index: 10;
}
.footer-col {
    padding: 2.5rem;
    border-right: 1px solid rgba(255,255,255,0.1);
    min-height: 300px;
    display: flex;
    flex-direction: column;
    transition: background 0.3s;
}
.footer-col:hover { background: rgba(255,255,255,0.05); }
.footer-col:last-child { border-right: none; }
.footer-col-title {
    font-family: monospace;
    font-size: 0.75rem;
    font-weight: 700;
    color: #8fe000;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    margin-bottom: 2rem;
}
.footer-brand {
    font-weight: 900;
    font-size: 1.5rem;
    letter-spacing: -0.02em;
    margin-bottom: 1.5rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.footer-brand-dot {
    width: 0.75rem;
    height: 0.75rem;
    background: #ff2e2e;
    border-radius: 0.125rem;
    animation: brand-pulse 2s ease-in-out infinite;
}
@keyframes brand-pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.4; }
}
.footer-tagline { color: #9ca3af; line-height: 1.6; font-size: 0.875rem; max-width: 20rem; }
.footer-links { list-style: none; padding: 0; display: grid; gap: 1rem; }
.footer-links a {
    display: flex;
    justify-content: space-between;
    color: #9ca3af;
    font-size: 0.875rem;
    font-weight: 500;
    text-decoration: none;
    border-bottom: 1px solid rgba(255,255,255,0.05);
    padding-bottom: 0.5rem;
    transition: color 0.3s, padding-left 0.3s, border-color 0.3s;
}
.footer-links a:hover { color: white; padding-left: 0.5rem; border-color: rgba(255,255,255,0.2); }
.clock-list { list-style: none; padding: 0; font-family: monospace; font-size: 0.875rem; }
.clock-row {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1.25rem;
}
.clock-city { color: #9ca3af; transition: color 0.3s; }
.clock-row:hover .clock-city { color: white; }
.clock-time {
    color: rgba(255,255,255,0.6);
    background: rgba(255,255,255,0.05);
    padding: 0.25rem 0.5rem;
    border-radius: 0.125rem;
    transition: color 0.3s;
}
.clock-row:hover .clock-time { color: #ff2e2e; }
.uplink-blurb { color: #9ca3af; font-size: 0.875rem; margin-bottom: 1.5rem; }
.uplink-form { position: relative; margin-top: auto; }
.uplink-form input {
    width: 100%;
    background: rgba(0,0,0,0.5);
    border: 1px solid rgba(255,255,255,0.2);
    padding: 1rem;
    font-size: 0.875rem;
    font-family: monospace;
    color: white;
    outline: none;
    transition: border-color 0.3s;
}
.uplink-form input:focus { border-color: #ff2e2e; }
.uplink-form button {
    position: absolute;
    right: 0.5rem;
    top: 0.5rem;
    bottom: 0.5rem;
    aspect-ratio: 1;
    background: white;
    color: black;
    border: none;
    cursor: pointer;
    transition: background 0.3s;
}
.uplink-form button:hover { background: #ff2e2e; }
.uplink-status {
    margin-top: 1.5rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-family: monospace;
    font-size: 10px;
    color: #6b7280;
    text-transform: uppercase;
}
.uplink-dot {
    width: 0.5rem;
    height: 0.5rem;
    background: #22c55e;
    border-radius: 50%;
    box-shadow: 0 0 8px #22c55e;
}
.footer-bottom {
    padding: 2rem 3rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    font-family: monospace;
    font-size: 0.75rem;
    color: #6b7280;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    position: relative;
    z-index: 10;
}
.footer-bottom a { color: inherit; text-decoration: none; transition: color 0.3s; }
.footer-bottom a:hover { color: white; }
"#;

#[derive(Properties, PartialEq)]
struct LiveTimeProps {
    city: &'static str,
    utc_offset_hours: i32,
}

/// One world-clock row, refreshed every second.
#[function_component(LiveTime)]
fn live_time(props: &LiveTimeProps) -> Html {
    let time = use_state(String::new);

    {
        let time = time.clone();
        use_effect_with_deps(
            move |offset_hours| {
                let offset = FixedOffset::east_opt(offset_hours * 3600)
                    .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
                let render = move || Utc::now().with_timezone(&offset).format("%H:%M").to_string();
                time.set(render());
                let interval = Interval::new(1_000, move || time.set(render()));
                move || drop(interval)
            },
            props.utc_offset_hours,
        );
    }

    html! {
        <li class="clock-row">
            <span class="clock-city">{props.city}</span>
            <span class="clock-time">{(*time).clone()}</span>
        </li>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let revealed = use_reveal(footer_ref.clone(), RevealOptions::default());

    let on_subscribe = Callback::from(|e: SubmitEvent| {
        // Decorative uplink; nowhere to send it.
        e.prevent_default();
    });

    html! {
        <footer
            ref={footer_ref}
            class={classes!("footer", "reveal", revealed.then_some("revealed"))}
        >
            <style>{FOOTER_STYLES}</style>
            <div class="footer-grid-bg"></div>
            <div class="footer-scanline"><div></div></div>

            <div class="footer-cta">
                <h2>{"LET'S BUILD"}</h2>
                <h2 class="dim">{"THE FUTURE"}</h2>
            </div>

            <div class="footer-columns">
                <div class="footer-col">
                    <div class="footer-brand">
                        <span class="footer-brand-dot"></span>
                        {"EVIL MARTIANS"}
                    </div>
                    <p class="footer-tagline">
                        {"Product development studio for high-growth startups and enterprises."}
                    </p>
                </div>

                <div class="footer-col">
                    <h3 class="footer-col-title">{"[ DIRECTORY ]"}</h3>
                    <ul class="footer-links">
                        { for FOOTER_LINKS.iter().map(|label| html! {
                            <li key={*label}><a href="#">{label}</a></li>
                        }) }
                    </ul>
                </div>

                <div class="footer-col">
                    <h3 class="footer-col-title">{"[ TELEMETRY ]"}</h3>
                    <ul class="clock-list">
                        { for WORLD_CLOCKS.iter().map(|(city, offset)| html! {
                            <LiveTime key={*city} city={*city} utc_offset_hours={*offset} />
                        }) }
                        <li class="clock-row">
                            <span class="clock-city">{"Remote First"}</span>
                            <span>{"🌐"}</span>
                        </li>
                    </ul>
                </div>

                <div class="footer-col">
                    <h3 class="footer-col-title">{"[ UPLINK ]"}</h3>
                    <p class="uplink-blurb">{"Receive deep tech signals. No noise."}</p>
                    <form class="uplink-form" onsubmit={on_subscribe}>
                        <input type="email" placeholder="ACCESS_CODE (EMAIL)" />
                        <button type="submit">{"→"}</button>
                    </form>
                    <div class="uplink-status">
                        <span class="uplink-dot"></span>
                        {"System Operational"}
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <div>
                    <span>{"© 2025 Evil Martians"}</span>
                    {" | "}
                    <a href="#">{"Privacy"}</a>
                    {" "}
                    <a href="#">{"Terms"}</a>
                </div>
                <span>{"END OF TRANSMISSION"}</span>
            </div>
        </footer>
    }
}
