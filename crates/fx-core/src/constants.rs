// Shared visual tuning constants for the particle field and the pointer follower.

// Particle field
pub const DENSITY_DIVISOR: f32 = 15_000.0; // surface area (px²) per spawned particle
pub const DENSITY_DIVISOR_MIN: f32 = 1_000.0; // densest accepted override
pub const MAX_PARTICLES: usize = 4_096; // hard cap; the link pass is O(n²)
pub const LINK_DISTANCE: f32 = 100.0; // pairs closer than this are joined by a line
pub const LINK_MAX_ALPHA: f32 = 0.2; // line opacity at zero distance, in (0, 1]
pub const PARTICLE_SPEED_MAX: f32 = 1.0; // per-axis velocity range is [-max, max)
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;

// Palette (cyan accent)
pub const ACCENT_RGB: [u8; 3] = [0, 163, 196];
pub const PARTICLE_ALPHA: f32 = 0.5;

// Pointer follower
pub const SMOOTHING_FACTOR: f32 = 0.15; // fraction of the remaining gap closed per tick
pub const DOT_SIZE_PX: f32 = 8.0;
pub const DOT_HOVER_SIZE_PX: f32 = 16.0;
pub const RING_SIZE_PX: f32 = 32.0;
pub const RING_HOVER_SIZE_PX: f32 = 50.0;
pub const RING_OPACITY: f32 = 0.5;
pub const RING_HOVER_OPACITY: f32 = 0.8;
pub const DOT_PULSE_PERIOD_SEC: f32 = 1.5; // hover pulse cycle
pub const DOT_PULSE_SCALE: f32 = 1.1; // peak scale of the hover pulse

// Elements that switch the follower into its hover style
pub const INTERACTIVE_TAGS: [&str; 2] = ["BUTTON", "A"];
