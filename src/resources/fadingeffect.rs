//! Screen fade service.
//!
//! [`FadingEffect`] drives a full-screen overlay used to hide teleports.
//! Callers only request fades; the timing is handled here. Requests are
//! queued and run one after another, so calling
//! [`fade_in`](FadingEffect::fade_in) and then
//! [`fade_out`](FadingEffect::fade_out) in the same frame produces a full
//! "darken, then reveal" sequence. A new `fade_in` replaces whatever is
//! pending, so the queue never holds more than that one sequence.
//!
//! The renderer reads [`FadingEffect::alpha`]: `0.0` is fully clear, `1.0`
//! fully opaque. [`fade_system`](crate::systems::fade::fade_system) advances
//! the queue every frame.

use bevy_ecs::prelude::Resource;
use std::collections::VecDeque;

const DEFAULT_FADE_DURATION: f32 = 0.5;
const OPAQUE: f32 = 1.0;
const CLEAR: f32 = 0.0;

/// Easing applied to a fade step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeCurve {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
}

impl FadeCurve {
    /// Parse a curve name as written in config files (`linear`, `quad_in`,
    /// `quad_out`, `quad_in_out`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(FadeCurve::Linear),
            "quad_in" => Some(FadeCurve::QuadIn),
            "quad_out" => Some(FadeCurve::QuadOut),
            "quad_in_out" => Some(FadeCurve::QuadInOut),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FadeCurve::Linear => "linear",
            FadeCurve::QuadIn => "quad_in",
            FadeCurve::QuadOut => "quad_out",
            FadeCurve::QuadInOut => "quad_in_out",
        }
    }

    /// Map normalized time `t` (clamped to [0, 1]) through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            FadeCurve::Linear => t,
            FadeCurve::QuadIn => t * t,
            FadeCurve::QuadOut => t * (2.0 - t),
            FadeCurve::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// One queued fade towards `target` alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FadeStep {
    from: f32,
    target: f32,
    elapsed: f32,
}

/// Full-screen fade overlay state.
#[derive(Resource, Debug, Clone)]
pub struct FadingEffect {
    alpha: f32,
    /// Seconds per fade step.
    pub duration: f32,
    pub curve: FadeCurve,
    queue: VecDeque<f32>,
    active: Option<FadeStep>,
}

impl Default for FadingEffect {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_DURATION)
    }
}

impl FadingEffect {
    pub fn new(duration: f32) -> Self {
        Self {
            alpha: 0.0,
            duration,
            curve: FadeCurve::default(),
            queue: VecDeque::new(),
            active: None,
        }
    }

    pub fn with_curve(mut self, curve: FadeCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Start a fade to fully opaque.
    ///
    /// Pending steps are dropped. A running fade to opaque keeps going; any
    /// other running step is cut and the new fade starts from the current
    /// alpha.
    pub fn fade_in(&mut self) {
        self.queue.clear();
        if self.active.is_some_and(|step| step.target == OPAQUE) {
            return;
        }
        self.active = None;
        self.queue.push_back(OPAQUE);
    }

    /// Queue a fade to fully clear, unless the last step already is one.
    pub fn fade_out(&mut self) {
        let last = self
            .queue
            .back()
            .copied()
            .or(self.active.map(|step| step.target));
        if last != Some(CLEAR) {
            self.queue.push_back(CLEAR);
        }
    }

    /// Running plus queued steps.
    pub fn pending_steps(&self) -> usize {
        self.queue.len() + usize::from(self.active.is_some())
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// No fade running and none queued.
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.queue.is_empty()
    }

    /// Advance the fade by `dt` seconds, carrying leftover time into the
    /// next queued step.
    pub fn advance(&mut self, mut dt: f32) {
        loop {
            if self.active.is_none() {
                let Some(target) = self.queue.pop_front() else {
                    return;
                };
                self.active = Some(FadeStep {
                    from: self.alpha,
                    target,
                    elapsed: 0.0,
                });
            }
            let Some(step) = self.active.as_mut() else {
                return;
            };

            if self.duration <= 0.0 {
                self.alpha = step.target;
                self.active = None;
                continue;
            }

            let remaining = self.duration - step.elapsed;
            if dt < remaining {
                step.elapsed += dt;
                let t = self.curve.apply(step.elapsed / self.duration);
                self.alpha = step.from + (step.target - step.from) * t;
                return;
            }

            dt -= remaining;
            self.alpha = step.target;
            self.active = None;
        }
    }
}
