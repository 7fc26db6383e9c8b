//! Blog section: reveal-wrapped grid of post cards from static records.

use yew::prelude::*;

use crate::content::{BlogPost, BLOG_POSTS};
use crate::effects::reveal::{use_reveal, RevealOptions};

const BLOG_STYLES: &str = r#"
.blog {
    background: var(--bg);
    color: var(--fg);
    padding: 8rem 3rem;
    border-top: 1px solid var(--border);
}
.blog-inner { max-width: 80rem; margin: 0 auto; }
.blog-heading {
    font-size: clamp(3rem, 7vw, 6rem);
    line-height: 0.95;
    letter-spacing: -0.02em;
    font-weight: 300;
    margin-bottom: 5rem;
}
.blog-heading b { font-weight: 700; }
.blog-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
}
.post-card {
    position: relative;
    overflow: hidden;
    border-radius: 1rem;
    min-height: 420px;
    padding: 2.5rem;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    cursor: pointer;
    color: white;
    transition: transform 0.5s, box-shadow 0.5s;
}
.post-card:hover {
    transform: translateY(-0.5rem);
    box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25);
}
.post-card.dark-text { color: black; }
.post-card-image {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
    opacity: 0.5;
    transition: transform 0.7s;
}
.post-card:hover .post-card-image { transform: scale(1.1); }
.post-tags { position: relative; z-index: 10; }
.post-tag {
    display: inline-block;
    background: rgba(255,255,255,0.1);
    backdrop-filter: blur(12px);
    border: 1px solid rgba(255,255,255,0.2);
    font-size: 11px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    padding: 0.25rem 0.75rem;
    margin-right: 0.75rem;
    border-radius: 0.125rem;
}
.post-card.dark-text .post-tag {
    background: rgba(0,0,0,0.05);
    border-color: rgba(0,0,0,0.1);
}
.post-body { position: relative; z-index: 10; }
.post-title {
    font-size: clamp(1.5rem, 3vw, 2.25rem);
    font-weight: 700;
    line-height: 1.1;
    margin-bottom: 1rem;
}
.post-card:hover .post-title { text-decoration: underline; text-underline-offset: 4px; }
.post-date { font-family: monospace; font-size: 0.875rem; opacity: 0.7; letter-spacing: 0.02em; }
"#;

fn post_card(post: &BlogPost) -> Html {
    html! {
        <div
            key={post.title}
            class={classes!("post-card", post.dark_text.then_some("dark-text"))}
            style={format!("background: {};", post.background)}
        >
            if let Some(image) = post.image {
                <div
                    class="post-card-image"
                    style={format!("background-image: url('{image}');")}
                ></div>
            }
            <div class="post-tags">
                { for post.tags.iter().map(|tag| html! {
                    <span class="post-tag" key={*tag}>{tag}</span>
                }) }
            </div>
            <div class="post-body">
                <h3 class="post-title">{post.title}</h3>
                <p class="post-date">{post.date}</p>
            </div>
        </div>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), RevealOptions::default());

    html! {
        <div id="blog" class="blog">
            <style>{BLOG_STYLES}</style>
            <div
                ref={section_ref}
                class={classes!("blog-inner", "reveal", revealed.then_some("revealed"))}
            >
                <h2 class="blog-heading">
                    {"Read our legendary "}<b>{"blog"}</b>{","}<br/>
                    {"meet us at "}<b>{"events"}</b><br/>
                    {"around the world"}
                </h2>
                <div class="blog-grid">
                    { for BLOG_POSTS.iter().map(post_card) }
                </div>
            </div>
        </div>
    }
}
