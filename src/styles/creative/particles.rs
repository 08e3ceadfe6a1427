use std::f64::consts::TAU;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::{
    animation::{interpolate, Easing, InterpolateOptions},
    scene::{ClipMask, Color, FrameSize, LayerContent, Point, Region, SceneLayer, Transform},
};

use super::PARTICLE;

/// Upper bound on the particle field size
pub const MAX_PARTICLES: usize = 12;

/// Frames per particle pulse
pub const PULSE_CYCLE: u32 = 60;

/// Pulse offset between consecutive particles, in frames
const PULSE_STAGGER: u32 = 5;

/// Hue step between consecutive particles, in degrees
const HUE_STEP: f64 = 30.0;

const PARTICLE_SIZE_PX: f64 = 8.0;

/// Layout of one particle, fixed for the render session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub index: usize,
    /// Resting position in percent of the frame
    pub anchor: Point,
    /// Sway amplitude in percent, horizontal and vertical
    pub drift: Point,
    /// Phase offset in radians
    pub phase: f64,
    /// Angular speed in radians per frame
    pub speed: f64,
}

/// Particle layout generated once per session from a seed.
///
/// Positions are pure functions of the global frame and this table, so the
/// field never jitters between repaints and can be shared across threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleField {
    seed: u64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate `count` particles (at most [`MAX_PARTICLES`]) from `seed`
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count.min(MAX_PARTICLES))
            .map(|index| Particle {
                index,
                anchor: Point::new(
                    index as f64 * 8.0 + rng.gen_range(0.0..8.0),
                    rng.gen_range(10.0..90.0),
                ),
                drift: Point::new(rng.gen_range(2.0..6.0), rng.gen_range(4.0..12.0)),
                phase: rng.gen_range(0.0..TAU),
                speed: TAU / rng.gen_range(90.0..240.0),
            })
            .collect();

        Self { seed, particles }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Center of a particle at a global frame, in percent of the frame
    pub fn position(particle: &Particle, frame: u32) -> Point {
        let angle = frame as f64 * particle.speed + particle.phase;
        Point::new(
            particle.anchor.x + particle.drift.x * angle.sin(),
            particle.anchor.y + particle.drift.y * (angle * 0.75).cos(),
        )
    }

    /// Pulse of a particle in `[0, 1]`, rising and falling once per cycle
    pub fn pulse(index: usize, frame: u32) -> f64 {
        let offset = (index as u32).wrapping_mul(PULSE_STAGGER);
        let phase = frame.wrapping_add(offset) % PULSE_CYCLE;
        interpolate(
            phase as f64,
            [0.0, 30.0, 60.0],
            [0.0, 1.0, 0.0],
            InterpolateOptions::clamped(Easing::QuadInOut),
        )
    }

    /// Particle layers at a global frame.
    ///
    /// `hue` is the global hue in degrees and `fade` scales every particle's
    /// opacity (used to fade the field in and out at slot edges).
    pub fn layers(&self, frame: u32, hue: f64, fade: f64, canvas: FrameSize) -> Vec<SceneLayer> {
        let width = canvas.px_to_pct_x(PARTICLE_SIZE_PX);
        let height = canvas.px_to_pct_y(PARTICLE_SIZE_PX);

        self.particles
            .iter()
            .map(|particle| {
                let center = Self::position(particle, frame);
                let pulse = Self::pulse(particle.index, frame);

                SceneLayer::new(
                    PARTICLE,
                    LayerContent::Fill {
                        color: Color::hsl(hue + particle.index as f64 * HUE_STEP, 80.0, 60.0),
                    },
                )
                .with_region(Region::new(
                    center.x - width / 2.0,
                    center.y - height / 2.0,
                    width,
                    height,
                ))
                .with_clip(Some(ClipMask::ellipse()))
                .with_transform(Transform::scale(pulse))
                .with_opacity(pulse * fade)
                .with_blur(1.0)
            })
            .collect()
    }
}
