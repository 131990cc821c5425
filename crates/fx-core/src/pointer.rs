//! Trailing pointer state.
//!
//! Raw pointer coordinates arrive from move events at any rate; the trail
//! catches up once per animation frame by closing a fixed fraction of the
//! remaining gap. Nothing here clamps coordinates to the viewport.

use crate::constants::{DOT_PULSE_PERIOD_SEC, DOT_PULSE_SCALE, INTERACTIVE_TAGS};
use crate::params::FollowerParams;
use glam::Vec2;

/// Whether an element tag name (as reported by the DOM, any case) marks a
/// clickable element.
#[inline]
pub fn is_interactive_tag(tag: &str) -> bool {
    INTERACTIVE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Exponential smoothing step: move `current` toward `target` by `factor`.
#[inline]
pub fn smooth_toward(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// Everything the frontend needs to position and style both indicators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerFrame {
    pub dot: Vec2,
    pub ring: Vec2,
    pub hover: bool,
    pub dot_size: f32,
    pub ring_size: f32,
    pub ring_opacity: f32,
    /// Period of the dot's scale pulse; only pulses while hovering.
    pub dot_pulse_sec: Option<f32>,
}

#[derive(Clone, Debug)]
pub struct PointerFollower {
    pub params: FollowerParams,
    raw: Vec2,
    trail: Vec2,
    hover: bool,
}

impl Default for PointerFollower {
    fn default() -> Self {
        Self::new(FollowerParams::default())
    }
}

impl PointerFollower {
    pub fn new(params: FollowerParams) -> Self {
        Self {
            params,
            raw: Vec2::ZERO,
            trail: Vec2::ZERO,
            hover: false,
        }
    }

    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    pub fn trail(&self) -> Vec2 {
        self.trail
    }

    pub fn hover(&self) -> bool {
        self.hover
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.raw = Vec2::new(x, y);
    }

    /// Pointer entered an element. Only interactive elements turn hover on.
    pub fn on_pointer_enter(&mut self, interactive: bool) {
        if interactive {
            self.hover = true;
        }
    }

    /// Pointer left an element. Only interactive elements turn hover off.
    pub fn on_pointer_leave(&mut self, interactive: bool) {
        if interactive {
            self.hover = false;
        }
    }

    pub fn tick(&mut self) -> FollowerFrame {
        self.trail = smooth_toward(self.trail, self.raw, self.params.smoothing);
        self.current_frame()
    }

    pub fn current_frame(&self) -> FollowerFrame {
        let p = &self.params;
        let (dot_size, ring_size, ring_opacity) = if self.hover {
            (p.dot_hover_size, p.ring_hover_size, p.ring_hover_opacity)
        } else {
            (p.dot_size, p.ring_size, p.ring_opacity)
        };
        FollowerFrame {
            dot: self.raw,
            ring: self.trail,
            hover: self.hover,
            dot_size,
            ring_size,
            ring_opacity,
            dot_pulse_sec: self.hover.then_some(DOT_PULSE_PERIOD_SEC),
        }
    }
}

/// CSS selector matching any interactive element, for ancestor lookups.
pub fn interactive_selector() -> String {
    INTERACTIVE_TAGS
        .iter()
        .map(|t| t.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `@keyframes` rule for the hover pulse.
///
/// Animates the standalone `scale` property so it composes with the
/// `transform: translate3d(..)` used for positioning.
pub fn pulse_keyframes_css(name: &str) -> String {
    format!(
        "@keyframes {name} {{ 0% {{ scale: 1; }} 50% {{ scale: {DOT_PULSE_SCALE}; }} 100% {{ scale: 1; }} }}"
    )
}
