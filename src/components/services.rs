//! Services section: reveal-wrapped heading plus the service list.

use yew::prelude::*;

use crate::content::SERVICES;
use crate::effects::reveal::{use_reveal, RevealOptions};

const SERVICES_STYLES: &str = r#"
.services {
    background: var(--bg-alt);
    color: var(--fg);
    padding: 12rem 3rem 6rem;
    position: relative;
    overflow: hidden;
}
.services-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 5fr 7fr;
    gap: 6rem;
    position: relative;
    z-index: 10;
}
.services-heading {
    font-size: clamp(3rem, 7vw, 6rem);
    line-height: 0.9;
    letter-spacing: -0.02em;
    margin-bottom: 3rem;
}
.services-pitch {
    font-size: 1.375rem;
    line-height: 1.6;
    font-weight: 300;
    margin-bottom: 3rem;
}
.service-item {
    border-bottom: 1px solid var(--border);
    padding: 2rem 0;
    display: flex;
    align-items: center;
    justify-content: space-between;
    cursor: pointer;
    transition: border-color 0.3s;
}
.service-item:hover { border-color: var(--fg); }
.service-item h3 {
    font-size: clamp(1.5rem, 3vw, 2.25rem);
    font-weight: 500;
    transition: transform 0.3s;
}
.service-item:hover h3 { transform: translateX(1rem); }
.service-item .arrow {
    opacity: 0;
    transform: translateX(-1rem);
    transition: opacity 0.3s, transform 0.3s;
    color: #ff2e2e;
}
.service-item:hover .arrow { opacity: 1; transform: translateX(0); }
.services-cta {
    background: var(--fg);
    color: var(--bg);
    padding: 1.25rem 2.5rem;
    border: none;
    border-radius: 0.5rem;
    font-weight: 700;
    font-size: 1.125rem;
    cursor: pointer;
    transition: background 0.3s, color 0.3s;
}
.services-cta:hover { background: #ff2e2e; color: white; }
"#;

fn service_item(title: &str) -> Html {
    html! {
        <div class="service-item">
            <h3>{title}</h3>
            <span class="arrow">{"→"}</span>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), RevealOptions::default());

    html! {
        <div id="services" class="services">
            <style>{SERVICES_STYLES}</style>
            <div
                ref={section_ref}
                class={classes!("reveal", revealed.then_some("revealed"))}
            >
                <div class="services-grid">
                    <div>
                        <h2 class="services-heading">
                            {"Solve your "}<b>{"problems,"}</b><br/>
                            <b>{"ship value"}</b>
                        </h2>
                        <p class="services-pitch">
                            {"Hire us to take your product from PoC to MVP, iterate \
                              to PMF and scale efficiently through explosive growth."}
                        </p>
                        <button class="services-cta">{"All services"}</button>
                    </div>
                    <div>
                        { for SERVICES.iter().map(|title| service_item(title)) }
                    </div>
                </div>
            </div>
        </div>
    }
}
