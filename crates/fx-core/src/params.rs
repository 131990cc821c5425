//! Tunable parameters for both effects.
//!
//! Defaults come from [`crate::constants`]. Hosts may override individual
//! values by key (the web frontend reads them from `data-*` attributes);
//! every override is validated before it is applied.

use crate::constants::*;
use crate::surface::Rgba;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),
    #[error("parameter `{key}` is not a number: {value:?}")]
    NotANumber { key: String, value: String },
    #[error("parameter `{key}` must be positive and finite, got {value}")]
    NotPositive { key: &'static str, value: f32 },
    #[error("parameter `{key}` must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        key: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("smoothing factor must lie strictly between 0 and 1, got {0}")]
    SmoothingOutOfRange(f32),
    #[error("particle radius range is empty: min {min} >= max {max}")]
    EmptyRadiusRange { min: f32, max: f32 },
}

fn parse_number(key: &str, value: &str) -> Result<f32, ParamError> {
    value
        .trim()
        .parse::<f32>()
        .map_err(|_| ParamError::NotANumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn require_positive(key: &'static str, value: f32) -> Result<f32, ParamError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParamError::NotPositive { key, value })
    }
}

fn require_range(key: &'static str, value: f32, min: f32, max: f32) -> Result<f32, ParamError> {
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(ParamError::OutOfRange {
            key,
            value,
            min,
            max,
        })
    }
}

/// Particle field tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    /// Surface area per particle; count is `floor(w * h / density_divisor)`.
    pub density_divisor: f32,
    pub link_distance: f32,
    pub link_max_alpha: f32,
    pub speed_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub particle_color: Rgba,
    /// Alpha is replaced per line.
    pub link_color: Rgba,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            density_divisor: DENSITY_DIVISOR,
            link_distance: LINK_DISTANCE,
            link_max_alpha: LINK_MAX_ALPHA,
            speed_max: PARTICLE_SPEED_MAX,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            particle_color: Rgba::from_rgb(ACCENT_RGB, PARTICLE_ALPHA),
            link_color: Rgba::from_rgb(ACCENT_RGB, LINK_MAX_ALPHA),
        }
    }
}

impl FieldParams {
    pub const OVERRIDE_KEYS: [&'static str; 4] = [
        "density-divisor",
        "link-distance",
        "link-alpha",
        "particle-speed",
    ];

    pub fn validate(&self) -> Result<(), ParamError> {
        require_positive("density-divisor", self.density_divisor)?;
        require_range(
            "density-divisor",
            self.density_divisor,
            DENSITY_DIVISOR_MIN,
            f32::MAX,
        )?;
        require_positive("link-distance", self.link_distance)?;
        require_positive("link-alpha", self.link_max_alpha)?;
        require_range("link-alpha", self.link_max_alpha, 0.0, 1.0)?;
        require_positive("particle-speed", self.speed_max)?;
        require_positive("radius-min", self.radius_min)?;
        if self.radius_min >= self.radius_max {
            return Err(ParamError::EmptyRadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        Ok(())
    }

    /// Apply one `key = value` override. On error `self` is left untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ParamError> {
        let mut next = self.clone();
        match key {
            "density-divisor" => next.density_divisor = parse_number(key, value)?,
            "link-distance" => next.link_distance = parse_number(key, value)?,
            "link-alpha" => next.link_max_alpha = parse_number(key, value)?,
            "particle-speed" => next.speed_max = parse_number(key, value)?,
            _ => return Err(ParamError::UnknownKey(key.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Pointer follower tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct FollowerParams {
    pub smoothing: f32,
    pub dot_size: f32,
    pub dot_hover_size: f32,
    pub ring_size: f32,
    pub ring_hover_size: f32,
    pub ring_opacity: f32,
    pub ring_hover_opacity: f32,
}

impl Default for FollowerParams {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING_FACTOR,
            dot_size: DOT_SIZE_PX,
            dot_hover_size: DOT_HOVER_SIZE_PX,
            ring_size: RING_SIZE_PX,
            ring_hover_size: RING_HOVER_SIZE_PX,
            ring_opacity: RING_OPACITY,
            ring_hover_opacity: RING_HOVER_OPACITY,
        }
    }
}

impl FollowerParams {
    pub const OVERRIDE_KEYS: [&'static str; 1] = ["smoothing"];

    pub fn validate(&self) -> Result<(), ParamError> {
        if !(self.smoothing > 0.0 && self.smoothing < 1.0) {
            return Err(ParamError::SmoothingOutOfRange(self.smoothing));
        }
        require_positive("dot-size", self.dot_size)?;
        require_positive("ring-size", self.ring_size)?;
        Ok(())
    }

    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ParamError> {
        let mut next = self.clone();
        match key {
            "smoothing" => next.smoothing = parse_number(key, value)?,
            _ => return Err(ParamError::UnknownKey(key.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Parameters for both effects, resolved once at mount time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectParams {
    pub field: FieldParams,
    pub follower: FollowerParams,
}

impl EffectParams {
    /// Start from the defaults and apply every override `lookup` knows about.
    ///
    /// Rejected overrides are returned alongside the result and leave the
    /// corresponding default in place.
    pub fn from_overrides(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ParamError>) {
        let mut params = Self::default();
        let mut rejected = Vec::new();
        for key in FieldParams::OVERRIDE_KEYS {
            if let Some(value) = lookup(key) {
                if let Err(e) = params.field.apply_override(key, &value) {
                    rejected.push(e);
                }
            }
        }
        for key in FollowerParams::OVERRIDE_KEYS {
            if let Some(value) = lookup(key) {
                if let Err(e) = params.follower.apply_override(key, &value) {
                    rejected.push(e);
                }
            }
        }
        (params, rejected)
    }
}
