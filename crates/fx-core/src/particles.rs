use crate::constants::MAX_PARTICLES;
use crate::params::FieldParams;
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Pixels per frame.
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Advance one frame and bounce off the surface edges.
    ///
    /// The check runs after the move, so a particle can sit up to one
    /// frame's velocity outside the bounds before it turns around.
    #[inline]
    pub fn update(&mut self, size: Vec2) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > size.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > size.y {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Number of particles spawned for a surface of the given size, never more
/// than [`MAX_PARTICLES`].
#[inline]
pub fn particle_count(size: Vec2, density_divisor: f32) -> usize {
    if size.x <= 0.0 || size.y <= 0.0 || density_divisor <= 0.0 {
        return 0;
    }
    let area = size.x as f64 * size.y as f64;
    let count = (area / density_divisor as f64).floor();
    if count >= MAX_PARTICLES as f64 {
        MAX_PARTICLES
    } else {
        count as usize
    }
}

/// Opacity of the line joining two particles `distance` apart, or `None`
/// when they are too far apart to be linked.
#[inline]
pub fn link_alpha(distance: f32, threshold: f32, max_alpha: f32) -> Option<f32> {
    (distance < threshold).then(|| max_alpha * (1.0 - distance / threshold))
}

/// Ambient field of drifting particles joined by distance-faded lines.
pub struct ParticleField {
    pub params: FieldParams,
    particles: Vec<Particle>,
    size: Vec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: FieldParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }

    fn with_rng(params: FieldParams, rng: StdRng) -> Self {
        Self {
            params,
            particles: Vec::new(),
            size: Vec2::ZERO,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Discard all particles and spawn a fresh set sized to the surface.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        let count = particle_count(self.size, self.params.density_divisor);
        let speed = self.params.speed_max;
        let (r_min, r_max) = (self.params.radius_min, self.params.radius_max);

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let position = Vec2::new(
                self.rng.gen::<f32>() * width,
                self.rng.gen::<f32>() * height,
            );
            let velocity = if speed > 0.0 {
                Vec2::new(
                    self.rng.gen_range(-speed..speed),
                    self.rng.gen_range(-speed..speed),
                )
            } else {
                Vec2::ZERO
            };
            let radius = if r_max > r_min {
                self.rng.gen_range(r_min..r_max)
            } else {
                r_min
            };
            self.particles.push(Particle {
                position,
                velocity,
                radius,
            });
        }
        log::debug!(
            "[particles] initialized {} particles for {}x{}",
            count,
            width,
            height
        );
    }

    pub fn step(&mut self, width: f32, height: f32) {
        let size = Vec2::new(width, height);
        for p in &mut self.particles {
            p.update(size);
        }
    }

    /// Draw every particle, then one line per close-enough unordered pair.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.size);

        let color = self.params.particle_color;
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, color);
        }

        let threshold = self.params.link_distance;
        let max_alpha = self.params.link_max_alpha;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if let Some(alpha) = link_alpha(distance, threshold, max_alpha) {
                    let line = self.params.link_color.with_alpha(alpha);
                    surface.stroke_line(a.position, b.position, line);
                }
            }
        }
    }

    /// One animation frame: physics against the current surface size, then draw.
    pub fn frame<S: Surface + ?Sized>(&mut self, width: f32, height: f32, surface: &mut S) {
        self.step(width, height);
        self.render(surface);
    }
}
