//! Open-source showcase: headline stats plus the flagship project card.

use yew::prelude::*;

use crate::content::FLAGSHIP_PROJECT;
use crate::effects::reveal::{use_reveal, RevealOptions};

const OSS_STYLES: &str = r#"
.oss {
    position: relative;
    padding: 8rem 3rem;
    background: var(--bg);
    color: var(--fg);
    overflow: hidden;
}
.oss-inner { max-width: 80rem; margin: 0 auto; position: relative; z-index: 10; }
.oss-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-end;
    margin-bottom: 6rem;
    flex-wrap: wrap;
    gap: 3rem;
}
.oss-heading {
    font-size: clamp(3rem, 7vw, 6rem);
    line-height: 0.9;
    letter-spacing: -0.02em;
    font-weight: 700;
}
.oss-heading .serif { font-weight: 300; font-style: italic; }
.oss-stats { display: flex; gap: 3rem; }
.oss-stat-value { font-size: 4.5rem; font-weight: 900; }
.oss-stat-value.green { color: #8fe000; }
.oss-stat-label {
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    margin-top: 0.5rem;
}
.oss-card {
    border: 1px solid var(--border);
    border-radius: 1rem;
    padding: 3rem;
    background: var(--card-bg);
    display: flex;
    gap: 3rem;
    align-items: flex-start;
    transition: border-color 0.3s, box-shadow 0.3s;
}
.oss-card:hover { border-color: var(--fg); box-shadow: 0 20px 25px -5px rgba(0,0,0,0.1); }
.oss-card-body { flex: 1; }
.oss-card h3 {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 2rem 0 1.5rem;
    transition: color 0.3s;
}
.oss-card:hover h3 { color: #dd3a0a; }
.oss-card p { color: var(--fg-muted); line-height: 1.6; margin-bottom: 2.5rem; }
.oss-card-stats {
    display: flex;
    gap: 3rem;
    border-top: 1px solid var(--border);
    padding-top: 2rem;
}
.oss-sigil {
    width: 12rem;
    height: 12rem;
    position: relative;
    flex-shrink: 0;
    transition: transform 0.5s;
}
.oss-card:hover .oss-sigil { transform: scale(1.05); }
.oss-sigil-ring {
    position: absolute;
    inset: 0;
    border: 8px solid #dd3a0a;
    border-radius: 50%;
}
.oss-sigil-diamond {
    position: absolute;
    inset: 15%;
    border: 4px solid #dd3a0a;
    transform: rotate(45deg);
}
.oss-footer { text-align: center; margin-top: 3rem; }
.oss-all {
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
.oss-all:hover { background: #8fe000; color: black; }
"#;

#[function_component(OpenSource)]
pub fn open_source() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), RevealOptions::default());
    let project = &FLAGSHIP_PROJECT;

    html! {
        <div id="open-source" class="oss">
            <style>{OSS_STYLES}</style>
            <div
                ref={section_ref}
                class={classes!("oss-inner", "reveal", revealed.then_some("revealed"))}
            >
                <div class="oss-header">
                    <h2 class="oss-heading">
                        {"Open Source"}<br/>
                        <span class="serif">{"is in our DNA"}</span>
                    </h2>
                    <div class="oss-stats">
                        <div>
                            <div class="oss-stat-value green">{"123"}</div>
                            <div class="oss-stat-label">{"projects with"}</div>
                        </div>
                        <div>
                            <div class="oss-stat-value">{"180K+"}</div>
                            <div class="oss-stat-label">{"stars and climbing"}</div>
                        </div>
                    </div>
                </div>

                <div class="oss-card">
                    <div class="oss-card-body">
                        <div>
                            { for project.tags.iter().map(|tag| html! {
                                <span class="tag-pill" key={*tag}>{tag}</span>
                            }) }
                        </div>
                        <h3>{project.name}</h3>
                        <p>{project.description}</p>
                        <div class="oss-card-stats">
                            { for project.stats.iter().map(|stat| html! {
                                <div>
                                    <div class="case-stat-value">{stat.value}</div>
                                    <div class="case-stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="oss-sigil">
                        <div class="oss-sigil-ring"></div>
                        <div class="oss-sigil-diamond"></div>
                    </div>
                </div>

                <div class="oss-footer">
                    <button class="oss-all">{"All projects"}</button>
                </div>
            </div>
        </div>
    }
}
