//! Hero section: layered space scene driven by the parallax frame loop,
//! glitch/scramble headline, HUD overlay and randomized starfields.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::effects::parallax::{FrameInput, HeroLayer, PointerState, TIME_SCALE};
use crate::effects::scramble::{GlitchText, ScrambleText};

const HERO_STYLES: &str = r#"
.hero {
    position: relative;
    width: 100%;
    min-height: 120vh;
    background: #0a0a0a;
    overflow: hidden;
    display: flex;
    flex-direction: column;
    perspective: 1000px;
    cursor: crosshair;
}
.hero-layer {
    position: absolute;
    inset: 0;
    pointer-events: none;
    will-change: transform;
}
.hero-grid-overlay {
    position: absolute;
    inset: 0;
    background-image:
        linear-gradient(rgba(255,255,255,0.03) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255,255,255,0.03) 1px, transparent 1px);
    background-size: 50px 50px;
    opacity: 0.3;
}
.hero-nebula {
    inset: -50%;
    width: 200%;
    height: 200%;
    opacity: 0.3;
    mix-blend-mode: screen;
}
.nebula-blob {
    position: absolute;
    border-radius: 50%;
}
.nebula-purple { top: 30%; left: 30%; width: 40vw; height: 40vw; background: rgba(76, 29, 149, 0.4); filter: blur(100px); }
.nebula-blue { top: 50%; right: 30%; width: 50vw; height: 50vw; background: rgba(30, 58, 138, 0.3); filter: blur(120px); }
.nebula-indigo { bottom: 20%; left: 20%; width: 30vw; height: 30vw; background: rgba(49, 46, 129, 0.2); filter: blur(80px); }
.hero-stars {
    top: -50vh;
    left: -50vw;
    width: 200vw;
    height: 200vh;
}
.star-dot {
    background: white;
    border-radius: 50%;
}
.hero-orbits { opacity: 0.2; }
.orbit-ring {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    border: 1px solid white;
    border-radius: 50%;
}
.orbit-outer { width: 80vw; height: 80vw; }
.orbit-inner { width: 60vw; height: 60vw; border-style: dashed; border-color: rgba(255,255,255,0.5); }
.red-planet {
    position: absolute;
    top: 12%;
    right: 15%;
    z-index: 10;
    will-change: transform;
}
.red-planet-sphere {
    position: relative;
    width: 14rem;
    height: 14rem;
    border-radius: 50%;
    background: radial-gradient(circle at 30% 30%, #ff4d4d 0%, #cc0000 50%, #4a0000 100%);
    box-shadow: 0 0 50px rgba(220, 38, 38, 0.4);
}
.red-planet-glow {
    position: absolute;
    inset: 0;
    background: #dc2626;
    filter: blur(100px);
    opacity: 0.3;
    transform: scale(1.5);
    border-radius: 50%;
    animation: pulse-slow 5s ease-in-out infinite;
}
.bottom-planet {
    position: absolute;
    bottom: 20%;
    left: 10%;
    z-index: 10;
    will-change: transform;
    opacity: 0.8;
}
.bottom-planet-sphere {
    position: relative;
    width: 12rem;
    height: 12rem;
    border-radius: 50%;
    background: radial-gradient(circle at 30% 30%, #eab308 0%, #a16207 60%, #422006 100%);
}
.bottom-planet-rings {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%) rotate(-12deg);
    width: 160%;
    height: 30%;
    border: 12px solid rgba(255,255,255,0.1);
    border-top-color: rgba(255,255,255,0.2);
    border-radius: 50%;
}
.hero-spotlight {
    position: absolute;
    inset: 0;
    pointer-events: none;
    z-index: 1;
}
.hero-content {
    position: relative;
    z-index: 20;
    margin: 0 auto;
    padding: 8rem 1.5rem 0;
    max-width: 72rem;
    width: 100%;
    will-change: transform;
}
.hero-inner {
    opacity: 0;
    transform: translateY(3rem);
    transition: opacity 1s ease-out, transform 1s ease-out;
}
.hero-inner.loaded {
    opacity: 1;
    transform: translateY(0);
}
.hero-intro {
    margin-bottom: 2rem;
    padding-left: 1.5rem;
    border-left: 2px solid rgba(255, 46, 46, 0.5);
    color: rgba(255,255,255,0.8);
    max-width: 28rem;
    min-height: 4.5em;
    letter-spacing: 0.02em;
    line-height: 1.6;
}
.hero-title {
    line-height: 0.85;
    font-weight: 900;
    letter-spacing: -0.04em;
    color: white;
}
.hero-title-row { display: flex; align-items: center; gap: 2rem; }
.hero-title-row.indent { margin-left: 15%; }
.hero-title-row.flush-right { justify-content: flex-end; padding-right: 15%; }
.hero-display { font-size: clamp(4rem, 16vw, 11rem); user-select: none; }
.glitch-wrap { position: relative; display: inline-block; }
.glitch-main { position: relative; z-index: 10; }
.glitch-layer {
    position: absolute;
    inset: 0;
    z-index: 0;
    opacity: 0;
    mix-blend-mode: screen;
    pointer-events: none;
}
.glitch-layer-red { color: #dc2626; animation: glitch-1 5s infinite linear alternate-reverse; }
.glitch-layer-cyan { color: #22d3ee; animation: glitch-2 5s infinite linear alternate-reverse; animation-delay: 0.2s; }
@keyframes glitch-1 {
    0% { clip-path: inset(20% 0 80% 0); transform: translate(-2px, 1px); opacity: 0; }
    5% { clip-path: inset(20% 0 80% 0); transform: translate(-2px, 1px); opacity: 1; }
    10% { clip-path: inset(60% 0 10% 0); transform: translate(2px, -1px); opacity: 1; }
    15% { clip-path: inset(40% 0 50% 0); transform: translate(-2px, 2px); opacity: 1; }
    20% { clip-path: inset(80% 0 5% 0); transform: translate(2px, -2px); opacity: 1; }
    25% { clip-path: inset(10% 0 70% 0); transform: translate(-1px, 1px); opacity: 1; }
    30% { clip-path: inset(0 0 0 0); transform: translate(0, 0); opacity: 0; }
    100% { clip-path: inset(0 0 0 0); transform: translate(0, 0); opacity: 0; }
}
@keyframes glitch-2 {
    0% { clip-path: inset(10% 0 60% 0); transform: translate(2px, -1px); opacity: 0; }
    5% { clip-path: inset(10% 0 60% 0); transform: translate(2px, -1px); opacity: 1; }
    10% { clip-path: inset(80% 0 5% 0); transform: translate(-2px, 2px); opacity: 1; }
    15% { clip-path: inset(30% 0 20% 0); transform: translate(1px, -2px); opacity: 1; }
    20% { clip-path: inset(10% 0 80% 0); transform: translate(-1px, 1px); opacity: 1; }
    25% { clip-path: inset(40% 0 10% 0); transform: translate(2px, 1px); opacity: 1; }
    30% { clip-path: inset(0 0 0 0); transform: translate(0, 0); opacity: 0; }
    100% { clip-path: inset(0 0 0 0); transform: translate(0, 0); opacity: 0; }
}
@keyframes scan-vertical {
    0% { top: -100%; }
    100% { top: 100%; }
}
@keyframes pulse-slow {
    0%, 100% { opacity: 0.3; }
    50% { opacity: 0.15; }
}
.hero-hud {
    position: absolute;
    inset: 0;
    pointer-events: none;
    z-index: 30;
    padding: 3rem;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    user-select: none;
    mix-blend-mode: screen;
    overflow: hidden;
}
.hud-row { display: flex; justify-content: space-between; }
.hud-label {
    font-family: monospace;
    font-size: 10px;
    color: rgba(255,255,255,0.5);
    letter-spacing: 0.2em;
    text-transform: uppercase;
}
.hud-tick { width: 6px; height: 6px; background: white; }
.hud-tick.outline { background: none; border: 1px solid rgba(255,255,255,0.5); }
.hud-scroll-track {
    height: 4rem;
    width: 1px;
    background: rgba(255,255,255,0.1);
    position: relative;
    overflow: hidden;
}
.hud-scroll-thumb {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 30%;
    background: white;
    animation: scan-vertical 2s linear infinite;
}
.hero-fog {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    height: 8rem;
    background: linear-gradient(to top, var(--bg), transparent);
    pointer-events: none;
    z-index: 20;
}
"#;

#[derive(Properties, PartialEq)]
struct StarLayerProps {
    count: u32,
    size: u32,
    opacity: f64,
}

/// Single div starfield: one randomized multi-value box-shadow, generated
/// once per mount.
#[function_component(StarLayer)]
fn star_layer(props: &StarLayerProps) -> Html {
    let shadow = use_memo(
        |count| {
            let mut parts = Vec::with_capacity(*count as usize);
            for _ in 0..*count {
                parts.push(format!(
                    "{:.2}vw {:.2}vh white",
                    js_sys::Math::random() * 300.0,
                    js_sys::Math::random() * 300.0
                ));
            }
            parts.join(", ")
        },
        props.count,
    );

    let style = format!(
        "width: {0}px; height: {0}px; box-shadow: {1}; opacity: {2};",
        props.size, shadow, props.opacity
    );
    html! { <div class="star-dot" style={style}></div> }
}

fn hero_hud() -> Html {
    html! {
        <div class="hero-hud">
            <div class="hud-row">
                <div>
                    <div class="hud-tick"></div>
                    <div class="hud-label">{"SYS.INIT.V2.5"}</div>
                </div>
                <div>
                    <div class="hud-label">{"SIGNAL STRONG"}</div>
                    <div class="hud-tick outline"></div>
                </div>
            </div>
            <div class="hud-row">
                <div>
                    <div class="hud-tick outline"></div>
                    <div class="hud-label">{"LAT: 40.7128 / LON: -74.0060"}</div>
                </div>
                <div>
                    <span class="hud-label">{"Scroll"}</span>
                    <div class="hud-scroll-track">
                        <div class="hud-scroll-thumb"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let bg_ref = use_node_ref();
    let nebula_ref = use_node_ref();
    let stars_far_ref = use_node_ref();
    let stars_mid_ref = use_node_ref();
    let stars_near_ref = use_node_ref();
    let red_planet_ref = use_node_ref();
    let orbits_ref = use_node_ref();
    let bottom_planet_ref = use_node_ref();
    let content_ref = use_node_ref();
    let spotlight_ref = use_node_ref();

    // Entry fade-in, latched once on mount.
    let is_loaded = use_state(|| false);

    {
        let is_loaded = is_loaded.clone();
        let layer_refs: [(HeroLayer, NodeRef); 9] = [
            (HeroLayer::Background, bg_ref.clone()),
            (HeroLayer::Nebula, nebula_ref.clone()),
            (HeroLayer::StarsFar, stars_far_ref.clone()),
            (HeroLayer::StarsMid, stars_mid_ref.clone()),
            (HeroLayer::StarsNear, stars_near_ref.clone()),
            (HeroLayer::RedPlanet, red_planet_ref.clone()),
            (HeroLayer::Orbits, orbits_ref.clone()),
            (HeroLayer::BottomPlanet, bottom_planet_ref.clone()),
            (HeroLayer::Content, content_ref.clone()),
        ];
        let spotlight_ref = spotlight_ref.clone();

        use_effect_with_deps(
            move |_| {
                is_loaded.set(true);

                let window = web_sys::window().expect("no window");
                let pointer = Rc::new(RefCell::new(PointerState::default()));
                let scroll_y = Rc::new(Cell::new(0.0_f64));

                // Producer: writes only the raw target; the frame loop is
                // the sole smoother.
                let on_mousemove = {
                    let pointer = pointer.clone();
                    let window = window.clone();
                    Closure::wrap(Box::new(move |event: MouseEvent| {
                        let vw = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                        let vh = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                        let (cx, cy) = (event.client_x() as f64, event.client_y() as f64);
                        pointer.borrow_mut().set_target_from_client(cx, cy, vw, vh);

                        // Spotlight tracks the raw cursor for responsiveness.
                        if let Some(el) = spotlight_ref.cast::<HtmlElement>() {
                            let _ = el.style().set_property(
                                "background",
                                &format!(
                                    "radial-gradient(600px circle at {cx}px {cy}px, rgba(255,255,255,0.06), transparent 40%)"
                                ),
                            );
                        }
                    }) as Box<dyn FnMut(MouseEvent)>)
                };

                let on_scroll = {
                    let scroll_y = scroll_y.clone();
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        scroll_y.set(window.scroll_y().unwrap_or(0.0));
                    }) as Box<dyn FnMut()>)
                };

                let _ = window.add_event_listener_with_callback(
                    "mousemove",
                    on_mousemove.as_ref().unchecked_ref(),
                );
                let _ = window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());

                // Frame loop: smooth the pointer, compute every layer's
                // transform, apply, reschedule. Layers whose node has not
                // mounted are skipped for that frame only.
                let raf_handle = Rc::new(Cell::new(None::<i32>));
                let raf_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));
                {
                    let raf_handle = raf_handle.clone();
                    let raf_closure_inner = raf_closure.clone();
                    let window_inner = window.clone();
                    let pointer = pointer.clone();
                    let scroll_y = scroll_y.clone();
                    *raf_closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        pointer.borrow_mut().step();
                        let time = window_inner
                            .performance()
                            .map(|p| p.now())
                            .unwrap_or(0.0)
                            * TIME_SCALE;
                        let input = FrameInput {
                            pointer: pointer.borrow().current,
                            scroll_y: scroll_y.get(),
                            time,
                        };
                        for (layer, node) in &layer_refs {
                            if let Some(el) = node.cast::<HtmlElement>() {
                                let _ = el
                                    .style()
                                    .set_property("transform", &layer.transform(&input));
                            }
                        }
                        if let Some(cb) = raf_closure_inner.borrow().as_ref() {
                            if let Ok(handle) = window_inner
                                .request_animation_frame(cb.as_ref().unchecked_ref())
                            {
                                raf_handle.set(Some(handle));
                            }
                        }
                    })
                        as Box<dyn FnMut()>));
                }
                if let Some(cb) = raf_closure.borrow().as_ref() {
                    if let Ok(handle) =
                        window.request_animation_frame(cb.as_ref().unchecked_ref())
                    {
                        raf_handle.set(Some(handle));
                    }
                }

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "mousemove",
                        on_mousemove.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                    if let Some(handle) = raf_handle.take() {
                        let _ = window.cancel_animation_frame(handle);
                    }
                    raf_closure.borrow_mut().take();
                    drop(on_mousemove);
                    drop(on_scroll);
                }
            },
            (),
        );
    }

    html! {
        <div class="hero">
            <style>{HERO_STYLES}</style>

            { hero_hud() }

            <div ref={bg_ref} class="hero-layer">
                <div class="hero-grid-overlay"></div>
            </div>

            <div ref={spotlight_ref} class="hero-spotlight"></div>

            <div ref={nebula_ref} class="hero-layer hero-nebula">
                <div class="nebula-blob nebula-purple"></div>
                <div class="nebula-blob nebula-blue"></div>
                <div class="nebula-blob nebula-indigo"></div>
            </div>

            <div ref={stars_far_ref} class="hero-layer hero-stars">
                <StarLayer count={300} size={1} opacity={0.4} />
            </div>
            <div ref={stars_mid_ref} class="hero-layer hero-stars">
                <StarLayer count={150} size={2} opacity={0.6} />
            </div>
            <div ref={stars_near_ref} class="hero-layer hero-stars">
                <StarLayer count={50} size={3} opacity={0.9} />
            </div>

            <div ref={orbits_ref} class="hero-layer hero-orbits">
                <div class="orbit-ring orbit-outer"></div>
                <div class="orbit-ring orbit-inner"></div>
            </div>

            <div ref={red_planet_ref} class="red-planet">
                <div class="red-planet-glow"></div>
                <div class="red-planet-sphere"></div>
            </div>

            <div ref={bottom_planet_ref} class="bottom-planet">
                <div class="bottom-planet-sphere">
                    <div class="bottom-planet-rings"></div>
                </div>
            </div>

            <div ref={content_ref} class="hero-content">
                <div class={classes!("hero-inner", (*is_loaded).then_some("loaded"))}>
                    <div class="hero-intro">
                        <ScrambleText
                            text="We design and develop high performance developer tools for startups and enterprises."
                            delay={800}
                        />
                    </div>

                    <div class="hero-title">
                        <GlitchText
                            text="EVIL"
                            base_class={classes!("hero-display")}
                            delay={0}
                        />
                        <div class="hero-title-row indent">
                            <GlitchText
                                text="MARTI"
                                base_class={classes!("hero-display")}
                                delay={200}
                            />
                        </div>
                        <div class="hero-title-row flush-right">
                            <GlitchText
                                text="ANS"
                                base_class={classes!("hero-display")}
                                delay={400}
                            />
                        </div>
                    </div>
                </div>
            </div>

            <div class="hero-fog"></div>
        </div>
    }
}
