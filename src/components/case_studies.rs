//! Case studies section. Two independent reveal latches: one for the
//! header, one for the card grid, whose cards stagger in at 150ms steps.

use yew::prelude::*;

use crate::content::{CaseStudy, CASE_STUDIES};
use crate::effects::reveal::{stagger_delay_ms, use_reveal, RevealOptions};

const CASES_STYLES: &str = r#"
.cases {
    background: var(--bg);
    color: var(--fg);
    padding: 6rem 3rem;
}
.cases-inner { max-width: 80rem; margin: 0 auto; }
.cases-header { margin-bottom: 6rem; max-width: 56rem; }
.cases-heading {
    font-size: clamp(3rem, 7vw, 6rem);
    line-height: 0.9;
    letter-spacing: -0.02em;
    margin-bottom: 3rem;
    font-weight: 500;
}
.cases-heading .red { color: #ff2e2e; }
.cases-sub {
    font-size: 1.25rem;
    color: var(--fg-muted);
    line-height: 1.6;
    max-width: 42rem;
}
.cases-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
}
.case-card {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    border: 1px solid var(--border);
    border-radius: 1rem;
    padding: 3rem;
    background: var(--card-bg);
    transition: opacity 0.7s ease-out, transform 0.7s ease-out,
        box-shadow 0.3s, border-color 0.3s;
}
.case-card:hover {
    box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25);
    border-color: var(--fg-muted);
    transform: translateY(-4px);
}
.case-card.featured { grid-row: span 2; }
.case-card.pending { opacity: 0; transform: translateY(3rem); }
.tag-pill {
    display: inline-block;
    padding: 0.375rem 0.75rem;
    margin: 0 0.5rem 0.5rem 0;
    border-radius: 9999px;
    font-size: 10px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    border: 1px solid var(--border);
    color: var(--fg-muted);
    cursor: default;
    transition: background 0.3s, color 0.3s, border-color 0.3s;
}
.tag-pill:hover { background: var(--fg); color: var(--bg); border-color: var(--fg); }
.case-logo {
    font-size: 2.5rem;
    font-weight: 800;
    font-style: italic;
    letter-spacing: -0.02em;
    margin: 2rem 0;
    min-height: 4rem;
    display: flex;
    align-items: center;
}
.case-description {
    font-size: 1.125rem;
    line-height: 1.6;
    font-weight: 300;
    margin-bottom: 3rem;
}
.case-stats {
    margin-top: auto;
    padding-top: 2rem;
    border-top: 1px solid var(--border);
    display: flex;
    flex-wrap: wrap;
    gap: 1rem 3rem;
}
.case-stat-value { font-size: 2.5rem; font-weight: 300; }
.case-stat-label {
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--fg-muted);
    font-weight: 700;
}
.cases-footer { margin-top: 4rem; text-align: center; }
.cases-all {
    background: var(--fg);
    color: var(--bg);
    padding: 1rem 2.5rem;
    border: none;
    border-radius: 0.5rem;
    font-weight: 700;
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    cursor: pointer;
    transition: background 0.3s, color 0.3s;
}
.cases-all:hover { background: #ff2e2e; color: white; }
"#;

fn case_card(case: &CaseStudy, index: usize, grid_revealed: bool) -> Html {
    // Cards share one container latch; each derives its own entry delay.
    let delay = if grid_revealed {
        stagger_delay_ms(index)
    } else {
        0
    };
    html! {
        <div
            key={case.id}
            class={classes!(
                "case-card",
                case.featured.then_some("featured"),
                (!grid_revealed).then_some("pending"),
            )}
            style={format!("transition-delay: {delay}ms;")}
        >
            <div>
                <div>
                    { for case.tags.iter().map(|tag| html! {
                        <span class="tag-pill" key={*tag}>{tag}</span>
                    }) }
                </div>
                <div class="case-logo">{case.logo_text}</div>
                <p class="case-description">{case.description}</p>
            </div>
            <div class="case-stats">
                { for case.stats.iter().map(|stat| html! {
                    <div>
                        <div class="case-stat-value">{stat.value}</div>
                        <div class="case-stat-label">{stat.label}</div>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    let header_ref = use_node_ref();
    let grid_ref = use_node_ref();

    let header_revealed = use_reveal(header_ref.clone(), RevealOptions::default());
    // Bias the grid trigger slightly below the viewport edge.
    let grid_revealed = use_reveal(
        grid_ref.clone(),
        RevealOptions {
            threshold: 0.1,
            root_margin: Some("0px 0px -50px 0px"),
        },
    );

    html! {
        <div id="clients" class="cases">
            <style>{CASES_STYLES}</style>
            <div class="cases-inner">
                <div
                    ref={header_ref}
                    class={classes!("cases-header", "reveal", header_revealed.then_some("revealed"))}
                >
                    <h2 class="cases-heading">
                        {"We build "}<br/>
                        <b>{"developer tools"}</b>{" that"}<br/>
                        <b class="red">{"developers love"}</b>
                    </h2>
                    <p class="cases-sub">
                        {"We work with 40+ early-stage startups each year. Investors \
                          from Conviction, Blossom Capital, SignalFire, Heavybit and \
                          Uncork Capital recommend us to their portfolio companies."}
                    </p>
                </div>

                <div ref={grid_ref} class="cases-grid">
                    { for CASE_STUDIES
                        .iter()
                        .enumerate()
                        .map(|(i, case)| case_card(case, i, grid_revealed)) }
                </div>

                <div class="cases-footer">
                    <button class="cases-all">{"All clients"}</button>
                </div>
            </div>
        </div>
    }
}
