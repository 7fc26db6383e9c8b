//! Character-scramble text reveal.
//!
//! [`Scramble`] is the pure state machine: each tick it emits the target
//! string with the not-yet-locked tail replaced by random pool characters,
//! locking in roughly one character every three ticks (left to right).
//! Randomness is injected so the machine stays deterministic under test;
//! the components below drive it with `js_sys::Math::random` on a 30ms
//! `Interval` and render the frames.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys;
use yew::prelude::*;

/// Tick period in milliseconds. One character resolves per ~3 ticks.
pub const TICK_MS: u32 = 30;

const POOL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+";

fn pool_char(rng: &mut dyn FnMut() -> f64) -> char {
    let idx = (rng() * POOL.len() as f64) as usize % POOL.len();
    POOL[idx] as char
}

/// Randomized-to-resolved text state machine.
///
/// Internally counts whole ticks instead of accumulating fractional
/// iterations, so the "three ticks per character" cadence is exact and free
/// of float drift: position `p` is locked once `3 * p < ticks`, and the
/// machine is done after `3 * len` ticks.
#[derive(Debug, Clone)]
pub struct Scramble {
    target: Vec<char>,
    ticks: u32,
    done: bool,
}

impl Scramble {
    pub fn new(target: &str) -> Self {
        let target: Vec<char> = target.chars().collect();
        let done = target.is_empty();
        Self {
            target,
            ticks: 0,
            done,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Fully random string of the target's length. Shown before the start
    /// delay elapses.
    pub fn scrambled(&self, rng: &mut dyn FnMut() -> f64) -> String {
        self.target.iter().map(|_| pool_char(rng)).collect()
    }

    /// Advance one tick and return the frame to display. Once done, the
    /// frame is always the target itself.
    pub fn tick(&mut self, rng: &mut dyn FnMut() -> f64) -> String {
        if self.done {
            return self.target();
        }
        let frame: String = self
            .target
            .iter()
            .enumerate()
            .map(|(p, &c)| {
                if (p as u32) * 3 < self.ticks {
                    c
                } else {
                    pool_char(rng)
                }
            })
            .collect();
        self.ticks += 1;
        if self.ticks >= self.target.len() as u32 * 3 {
            self.done = true;
        }
        frame
    }
}

fn js_random() -> f64 {
    js_sys::Math::random()
}

/// Drives a [`Scramble`] on a timer: waits `delay` ms showing a fully
/// random preview, then ticks every [`TICK_MS`] until the text resolves.
/// Returns (displayed text, still scrambling). All timers are dropped on
/// unmount or when the inputs change.
#[hook]
pub fn use_scramble(text: String, delay: u32) -> (String, bool) {
    let display = use_state({
        let text = text.clone();
        move || Scramble::new(&text).scrambled(&mut js_random)
    });
    let scrambling = use_state(|| true);

    {
        let display = display.clone();
        let scrambling = scrambling.clone();
        use_effect_with_deps(
            move |(text, delay)| {
                let machine = Rc::new(RefCell::new(Scramble::new(text)));
                display.set(machine.borrow().scrambled(&mut js_random));
                scrambling.set(!machine.borrow().is_done());

                let interval_slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let start = {
                    let interval_slot = interval_slot.clone();
                    Timeout::new(*delay, move || {
                        let tick_slot = interval_slot.clone();
                        let interval = Interval::new(TICK_MS, move || {
                            let frame = machine.borrow_mut().tick(&mut js_random);
                            display.set(frame);
                            if machine.borrow().is_done() {
                                scrambling.set(false);
                                // Stop ticking; dropping the Interval from
                                // inside its own callback is deferred safely.
                                tick_slot.borrow_mut().take();
                            }
                        });
                        *interval_slot.borrow_mut() = Some(interval);
                    })
                };

                move || {
                    drop(start);
                    interval_slot.borrow_mut().take();
                }
            },
            (text, delay),
        );
    }

    ((*display).clone(), *scrambling)
}

#[derive(Properties, PartialEq)]
pub struct ScrambleTextProps {
    pub text: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay: u32,
}

/// Inline scramble-reveal span.
#[function_component(ScrambleText)]
pub fn scramble_text(props: &ScrambleTextProps) -> Html {
    let (display, _) = use_scramble(props.text.clone(), props.delay);
    html! {
        <span class={props.class.clone()}>{display}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct GlitchTextProps {
    pub text: String,
    /// Size/typography classes shared by the main text and both overlays.
    pub base_class: Classes,
    #[prop_or_default]
    pub main_class: Classes,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay: u32,
}

/// Heading with the scramble reveal plus two color-split glitch duplicates.
/// The duplicates are pure CSS animation and only appear once the text has
/// resolved; they are not part of the text state machine.
#[function_component(GlitchText)]
pub fn glitch_text(props: &GlitchTextProps) -> Html {
    let (display, scrambling) = use_scramble(props.text.clone(), props.delay);

    html! {
        <div class={classes!("glitch-wrap", props.class.clone())}>
            <h1 class={classes!(props.base_class.clone(), props.main_class.clone(), "glitch-main")}>
                { if scrambling { display } else { props.text.clone() } }
            </h1>
            if !scrambling {
                <>
                    <h1 class={classes!(props.base_class.clone(), "glitch-layer", "glitch-layer-red")}
                        aria-hidden="true">
                        { props.text.clone() }
                    </h1>
                    <h1 class={classes!(props.base_class.clone(), "glitch-layer", "glitch-layer-cyan")}
                        aria-hidden="true">
                        { props.text.clone() }
                    </h1>
                </>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cycles through the pool deterministically.
    fn seq_rng() -> impl FnMut() -> f64 {
        let mut n = 0usize;
        move || {
            n += 7;
            (n % POOL.len()) as f64 / POOL.len() as f64
        }
    }

    #[test]
    fn mars_resolves_after_twelve_ticks() {
        let mut rng = seq_rng();
        let mut s = Scramble::new("MARS");
        for tick in 1..=12u32 {
            let frame = s.tick(&mut rng);
            assert_eq!(frame.chars().count(), 4);
            if tick < 12 {
                assert!(!s.is_done(), "done too early at tick {tick}");
            }
        }
        assert!(s.is_done());
        // Once done every frame is the target itself.
        assert_eq!(s.tick(&mut rng), "MARS");
    }

    #[test]
    fn final_tick_emits_exact_target() {
        let mut rng = seq_rng();
        let mut s = Scramble::new("MARS");
        let mut last = String::new();
        for _ in 0..12 {
            last = s.tick(&mut rng);
        }
        assert_eq!(last, "MARS");
    }

    #[test]
    fn locked_prefix_grows_left_to_right() {
        let mut rng = seq_rng();
        let target = "TELEMETRY";
        let mut s = Scramble::new(target);
        let mut ticks = 0usize;
        while !s.is_done() {
            let frame = s.tick(&mut rng);
            // One character locks in every three ticks, left to right.
            let locked = ((ticks + 2) / 3).min(target.len());
            assert_eq!(&frame[..locked], &target[..locked], "at tick {ticks}");
            ticks += 1;
        }
        assert_eq!(ticks, target.len() * 3);
        assert_eq!(s.tick(&mut rng), target);
    }

    #[test]
    fn preview_matches_length_and_pool() {
        let mut rng = seq_rng();
        let s = Scramble::new("MARS");
        let preview = s.scrambled(&mut rng);
        assert_eq!(preview.len(), 4);
        assert!(preview.bytes().all(|b| POOL.contains(&b)));
    }

    #[test]
    fn empty_target_is_done_immediately() {
        let mut rng = seq_rng();
        let mut s = Scramble::new("");
        assert!(s.is_done());
        assert_eq!(s.tick(&mut rng), "");
    }
}
