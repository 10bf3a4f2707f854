//! Particles: short-lived bodies with a fading lifespan.
//!
//! A [`Particle`] is a [`Body`] plus a lifespan that doubles as display
//! opacity: it starts at 255, fades by 2 every step, and the particle is
//! dead — permanently — once it reaches zero. Each particle also carries a
//! [`ParticleShape`] tag so a renderer can vary the drawn glyph without
//! the particles themselves branching on type.

use glam::Vec2;

use crate::body::Body;
use crate::math::remap;

/// Initial lifespan of a freshly spawned particle.
pub const INITIAL_LIFESPAN: f32 = 255.0;

/// Amount of lifespan burned per step.
pub const FADE_PER_STEP: f32 = 2.0;

/// Speed at which a particle's display orientation reaches a full turn.
const ORIENTATION_FULL_SPEED: f32 = 10.0;

/// Which glyph a renderer should draw for a particle.
///
/// Purely a display tag: every shape shares the same kinematics and
/// lifecycle. Dispatch on it at draw time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParticleShape {
    /// Soft dot (default).
    #[default]
    Circle,
    /// Spinning square.
    Square,
}

/// A body with a lifespan and a display shape.
///
/// # Example
///
/// ```ignore
/// use flit::{Particle, ParticleShape, Vec2};
///
/// let mut p = Particle::new(Vec2::new(100.0, 20.0), Vec2::new(0.4, -1.2), ParticleShape::Square);
/// while !p.is_dead() {
///     p.update();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Particle {
    /// Kinematic state.
    pub body: Body,
    /// Remaining lifespan, usable directly as display opacity.
    pub lifespan: f32,
    /// Display glyph tag.
    pub shape: ParticleShape,
    /// Display orientation in radians, derived from speed each step.
    pub orientation: f32,
}

impl Particle {
    /// Spawn a particle of unit mass at `position` with the given initial
    /// velocity.
    pub fn new(position: Vec2, velocity: Vec2, shape: ParticleShape) -> Self {
        // Unit mass can't fail validation.
        let body = Body::new(position, 1.0)
            .expect("unit mass is valid")
            .with_velocity(velocity);
        Self {
            body,
            lifespan: INITIAL_LIFESPAN,
            shape,
            orientation: 0.0,
        }
    }

    /// Accumulate a force on the underlying body.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.body.apply_force(force);
    }

    /// Advance one step: integrate, age by 2, and refresh the display
    /// orientation from the current speed.
    pub fn update(&mut self) {
        self.body.update();
        self.lifespan -= FADE_PER_STEP;
        self.orientation = remap(
            self.body.velocity.length(),
            0.0,
            ORIENTATION_FULL_SPEED,
            0.0,
            std::f32::consts::TAU,
        );
    }

    /// Whether the particle has faded out. Terminal: lifespan only ever
    /// decreases.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.lifespan <= 0.0
    }
}
