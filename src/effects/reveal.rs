//! One-shot reveal-on-visibility.
//!
//! Every section uses the same pattern: watch an element, flip a boolean the
//! first time it crosses the visibility threshold, then stop watching. The
//! latch itself is pure and the browser wiring lives in [`use_reveal`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Monotonic hidden-to-revealed latch. Once revealed it never reverts and
/// no further observation is wanted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed one intersection event. Returns `true` exactly once, on the
    /// transition; the caller should stop observing at that point.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && !self.revealed {
            self.revealed = true;
            true
        } else {
            false
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be on-screen.
    pub threshold: f64,
    /// Margin bias, e.g. `"0px 0px -50px 0px"` to trigger slightly early.
    pub root_margin: Option<&'static str>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: None,
        }
    }
}

/// Per-card transition delay for staggered grid reveals.
pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * 150
}

/// Observe `node` and return whether it has been revealed. The observer is
/// disconnected on the first reveal and again (idempotently) on unmount; a
/// node that never mounts is a no-op. An element already on screen reveals
/// on the first observer callback.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let latch = Rc::new(RefCell::new(RevealLatch::default()));
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node.cast::<Element>() {
                    let on_entries = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, obs: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if latch.borrow_mut().on_intersection(entry.is_intersecting()) {
                                    revealed.set(true);
                                    obs.disconnect();
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(options.threshold));
                    if let Some(margin) = options.root_margin {
                        init.set_root_margin(margin);
                    }

                    if let Ok(obs) = IntersectionObserver::new_with_options(
                        on_entries.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        obs.observe(&element);
                        observer = Some(obs);
                    }
                    callback = Some(on_entries);
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_flips_exactly_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert!(!latch.on_intersection(false));
        assert!(latch.on_intersection(true));
        assert!(latch.is_revealed());
        // Further events, intersecting or not, are ignored.
        assert!(!latch.on_intersection(true));
        assert!(!latch.on_intersection(false));
        assert!(latch.is_revealed());
    }

    #[test]
    fn latch_survives_arbitrary_event_sequences() {
        let sequences: [&[bool]; 4] = [
            &[true],
            &[false, false, true, false, true],
            &[true, true, true],
            &[false, true, false, false],
        ];
        for events in sequences {
            let mut latch = RevealLatch::default();
            let transitions = events
                .iter()
                .filter(|&&e| latch.on_intersection(e))
                .count();
            assert_eq!(transitions, 1, "sequence {events:?}");
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn default_threshold_is_ten_percent() {
        let opts = RevealOptions::default();
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin, None);
    }

    #[test]
    fn card_stagger_is_150ms_per_index() {
        assert_eq!(
            (0..4).map(stagger_delay_ms).collect::<Vec<_>>(),
            vec![0, 150, 300, 450]
        );
    }
}
