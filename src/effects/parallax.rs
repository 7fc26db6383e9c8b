//! Pointer/scroll parallax math for the hero section.
//!
//! Input handlers only ever write the raw `target` values; the frame loop is
//! the sole consumer and the sole smoother. The per-layer transform math is a
//! pure function of (smoothed pointer, scroll offset, time) so it can be
//! tested without a DOM. The hero component owns a thin requestAnimationFrame
//! driver that feeds this module and writes the resulting CSS transforms.

/// Exponential smoothing coefficient applied once per frame.
/// Convergence is frame-rate dependent on purpose; there is no completion
/// event for the filter.
pub const SMOOTHING: f64 = 0.05;

/// Scale applied to `performance.now()` before it enters the layer math.
pub const TIME_SCALE: f64 = 0.0005;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

/// Mouse position state, normalized to [-1, 1] per axis relative to the
/// viewport center. `target` is written synchronously on every mousemove;
/// `current` only advances through [`PointerState::step`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub target: Vec2,
    pub current: Vec2,
}

impl PointerState {
    pub fn set_target_from_client(&mut self, client_x: f64, client_y: f64, vw: f64, vh: f64) {
        if vw <= 0.0 || vh <= 0.0 {
            return;
        }
        self.target = Vec2 {
            x: (client_x / vw - 0.5) * 2.0,
            y: (client_y / vh - 0.5) * 2.0,
        };
    }

    /// One low-pass step toward the target. Called once per frame, never
    /// from input handlers.
    pub fn step(&mut self) {
        self.current.x = lerp(self.current.x, self.target.x, SMOOTHING);
        self.current.y = lerp(self.current.y, self.target.y, SMOOTHING);
    }
}

/// Everything the layer math needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Smoothed pointer position.
    pub pointer: Vec2,
    /// Raw vertical scroll offset in pixels (unsmoothed by design).
    pub scroll_y: f64,
    /// `performance.now() * TIME_SCALE`, monotonically increasing.
    pub time: f64,
}

/// The hero's visual layers, back to front. Each has fixed coefficients
/// controlling how strongly it reacts to pointer, scroll and time; larger
/// coefficients read as closer to the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroLayer {
    Background,
    Nebula,
    StarsFar,
    StarsMid,
    StarsNear,
    RedPlanet,
    Orbits,
    BottomPlanet,
    Content,
}

impl HeroLayer {
    pub const ALL: [HeroLayer; 9] = [
        HeroLayer::Background,
        HeroLayer::Nebula,
        HeroLayer::StarsFar,
        HeroLayer::StarsMid,
        HeroLayer::StarsNear,
        HeroLayer::RedPlanet,
        HeroLayer::Orbits,
        HeroLayer::BottomPlanet,
        HeroLayer::Content,
    ];

    /// CSS transform for this layer at the given frame input.
    pub fn transform(self, input: &FrameInput) -> String {
        let Vec2 { x: mx, y: my } = input.pointer;
        let sy = input.scroll_y;
        let t = input.time;

        match self {
            HeroLayer::Background => {
                format!("translate3d({}px, {}px, 0)", mx * -3.0, my * -3.0)
            }
            // Drifts with time and reacts slightly to the pointer.
            HeroLayer::Nebula => format!(
                "translate3d({}px, {}px, 0) rotate({}deg)",
                mx * -8.0 + (t * 0.5).sin() * 20.0,
                my * -8.0 + (t * 0.5).cos() * 20.0,
                t * 2.0
            ),
            HeroLayer::StarsFar => format!(
                "translate3d({}px, {}px, 0)",
                mx * -10.0 - t * 5.0,
                my * -10.0 + sy * 0.05
            ),
            HeroLayer::StarsMid => format!(
                "translate3d({}px, {}px, 0)",
                mx * -20.0 - t * 15.0,
                my * -20.0 + sy * 0.1
            ),
            HeroLayer::StarsNear => format!(
                "translate3d({}px, {}px, 0)",
                mx * -40.0 - t * 30.0,
                my * -40.0 + sy * 0.2
            ),
            HeroLayer::RedPlanet => format!(
                "translate3d({}px, {}px, 0) rotateY({}deg) rotateX({}deg)",
                mx * -45.0,
                my * -45.0 + sy * 0.15,
                mx * 10.0,
                -my * 10.0
            ),
            HeroLayer::Orbits => format!(
                "translate3d({}px, {}px, 0) rotate({}deg) rotateX({}deg) rotateY({}deg)",
                mx * -25.0,
                my * -25.0,
                sy * 0.02 + t * 5.0,
                my * 15.0,
                mx * 15.0
            ),
            HeroLayer::BottomPlanet => format!(
                "translate3d({}px, {}px, 0) rotateY({}deg) rotateX({}deg)",
                mx * -70.0,
                my * -70.0 + sy * -0.1,
                mx * 15.0,
                -my * 15.0
            ),
            HeroLayer::Content => {
                format!("translate3d({}px, {}px, 0)", mx * -12.0, my * -12.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_target_normalizes_to_unit_range() {
        let mut p = PointerState::default();
        p.set_target_from_client(1920.0, 0.0, 1920.0, 1080.0);
        assert_eq!(p.target, Vec2 { x: 1.0, y: -1.0 });
        p.set_target_from_client(960.0, 540.0, 1920.0, 1080.0);
        assert_eq!(p.target, Vec2 { x: 0.0, y: 0.0 });
    }

    #[test]
    fn pointer_target_ignores_degenerate_viewport() {
        let mut p = PointerState::default();
        p.set_target_from_client(100.0, 100.0, 0.0, 0.0);
        assert_eq!(p.target, Vec2::default());
    }

    #[test]
    fn smoothing_approaches_target_monotonically_without_overshoot() {
        let mut p = PointerState::default();
        p.target = Vec2 { x: 1.0, y: 1.0 };
        let mut prev = p.current;
        for _ in 0..500 {
            p.step();
            assert!(p.current.x > prev.x && p.current.x <= 1.0);
            assert!(p.current.y > prev.y && p.current.y <= 1.0);
            prev = p.current;
        }
        // Effectively converged after many frames.
        assert!((1.0 - p.current.x) < 1e-10);
    }

    #[test]
    fn current_untouched_by_target_writes() {
        let mut p = PointerState::default();
        p.set_target_from_client(1920.0, 1080.0, 1920.0, 1080.0);
        assert_eq!(p.current, Vec2::default());
    }

    #[test]
    fn background_layer_is_pointer_only() {
        let input = FrameInput {
            pointer: Vec2 { x: 1.0, y: -0.5 },
            scroll_y: 400.0,
            time: 7.0,
        };
        assert_eq!(
            HeroLayer::Background.transform(&input),
            "translate3d(-3px, 1.5px, 0)"
        );
    }

    #[test]
    fn star_layers_deepen_with_proximity() {
        // Nearer star layers react more strongly to the same input.
        let input = FrameInput {
            pointer: Vec2 { x: 0.5, y: 0.0 },
            scroll_y: 100.0,
            time: 0.0,
        };
        assert_eq!(
            HeroLayer::StarsFar.transform(&input),
            "translate3d(-5px, 5px, 0)"
        );
        assert_eq!(
            HeroLayer::StarsMid.transform(&input),
            "translate3d(-10px, 10px, 0)"
        );
        assert_eq!(
            HeroLayer::StarsNear.transform(&input),
            "translate3d(-20px, 20px, 0)"
        );
    }

    #[test]
    fn ambient_layers_move_with_time_alone() {
        // Zero pointer and scroll still produces motion on the drift layers.
        let at = |time| FrameInput {
            pointer: Vec2::default(),
            scroll_y: 0.0,
            time,
        };
        for layer in [HeroLayer::Nebula, HeroLayer::StarsFar, HeroLayer::Orbits] {
            assert_ne!(layer.transform(&at(1.0)), layer.transform(&at(2.0)));
        }
        // While the pointer-only layers stay put.
        for layer in [HeroLayer::Background, HeroLayer::Content] {
            assert_eq!(layer.transform(&at(1.0)), layer.transform(&at(2.0)));
        }
    }

    #[test]
    fn every_layer_reacts_distinctly() {
        // No two layers may share coefficients, or the depth illusion
        // collapses into a flat pan.
        let input = FrameInput {
            pointer: Vec2 { x: 0.3, y: -0.7 },
            scroll_y: 250.0,
            time: 3.0,
        };
        let transforms: Vec<String> = HeroLayer::ALL
            .iter()
            .map(|layer| layer.transform(&input))
            .collect();
        for (i, a) in transforms.iter().enumerate() {
            for b in &transforms[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn planet_tilts_follow_pointer() {
        let input = FrameInput {
            pointer: Vec2 { x: 1.0, y: 1.0 },
            scroll_y: 0.0,
            time: 0.0,
        };
        assert_eq!(
            HeroLayer::RedPlanet.transform(&input),
            "translate3d(-45px, -45px, 0) rotateY(10deg) rotateX(-10deg)"
        );
    }
}
