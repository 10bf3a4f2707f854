//! Particle emitters: spawn, age, and cull a population of particles.
//!
//! An [`Emitter`] owns an insertion-ordered collection of
//! [`Particle`](crate::Particle)s. Each [`Emitter::step`] spawns one
//! particle at the origin (until the emitter starts dying), applies the
//! emitter's gravity, updates every particle, and removes the dead in a
//! single ordered pass.
//!
//! # Dying
//!
//! Once the population observed at the start of a step has reached the
//! ceiling (250), the emitter stops spawning forever. Aging and culling
//! continue until the collection drains, at which point
//! [`Emitter::is_dead`] reports true and the owner can drop the emitter.
//!
//! # Example
//!
//! ```ignore
//! use flit::{Emitter, Vec2};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut emitter = Emitter::new(Vec2::new(320.0, 40.0));
//! let mut rng = SmallRng::seed_from_u64(1);
//!
//! loop {
//!     emitter.step(&mut rng);
//!     for p in emitter.particles() {
//!         // draw p.body.position with alpha p.lifespan
//!     }
//! }
//! ```

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::forces::ForceField;
use crate::particle::{Particle, ParticleShape};

/// Population at which an emitter permanently stops spawning.
pub const POPULATION_CEILING: usize = 250;

/// Default per-step gravity applied to every owned particle.
const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 0.05);

/// Owner of a particle population anchored at an origin point.
pub struct Emitter {
    origin: Vec2,
    particles: Vec<Particle>,
    gravity: Vec2,
    dying: bool,
}

impl Emitter {
    /// Create an emitter spawning from `origin`.
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            particles: Vec::new(),
            gravity: DEFAULT_GRAVITY,
            dying: false,
        }
    }

    /// Override the per-step gravity broadcast to every particle.
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Spawn point for new particles.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Live particles, in insertion order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the population is currently empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Whether the emitter has stopped spawning for good.
    #[inline]
    pub fn is_dying(&self) -> bool {
        self.dying
    }

    /// Whether the population has drained.
    ///
    /// Drivers check this after stepping; a dying emitter reports dead
    /// once its last particle fades out.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.particles.is_empty()
    }

    /// Push one particle spawned at the origin with a randomized initial
    /// velocity (x in [-1, 1], y in [-2, 0]) and a coin-flipped shape.
    ///
    /// [`Emitter::step`] calls this once per step while the emitter is
    /// healthy; drivers may also call it directly to thicken the stream,
    /// exactly like pushing extra particles per frame from a sketch loop.
    pub fn add_particle<R: Rng>(&mut self, rng: &mut R) {
        let velocity = Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-2.0..0.0));
        let shape = if rng.gen_bool(0.5) {
            ParticleShape::Circle
        } else {
            ParticleShape::Square
        };
        self.particles.push(Particle::new(self.origin, velocity, shape));
    }

    /// Advance the whole system by one step.
    ///
    /// In order: check the population against the ceiling (the dying flag
    /// is sticky once set), spawn one particle unless dying, apply
    /// gravity, update every particle, and drop the dead while preserving
    /// the relative order of survivors.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        if !self.dying && self.particles.len() >= POPULATION_CEILING {
            self.dying = true;
            debug!(population = self.particles.len(), "emitter entered dying state");
        }

        if !self.dying {
            self.add_particle(rng);
        }

        for particle in &mut self.particles {
            particle.apply_force(self.gravity * particle.body.mass());
            particle.update();
        }
        self.particles.retain(|p| !p.is_dead());
    }

    /// Broadcast a force to every particle.
    pub fn apply_force(&mut self, force: Vec2) {
        for particle in &mut self.particles {
            particle.apply_force(force);
        }
    }

    /// Evaluate a force field against every particle and apply the
    /// result, e.g. a [`Repeller`](crate::Repeller) pushing the stream
    /// aside.
    pub fn apply_field<F: ForceField>(&mut self, field: &F) {
        for particle in &mut self.particles {
            let force = field.force_on(&particle.body);
            particle.apply_force(force);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forces::Repeller;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(99)
    }

    #[test]
    fn test_spawns_one_per_step() {
        let mut emitter = Emitter::new(Vec2::ZERO).with_gravity(Vec2::ZERO);
        let mut rng = rng();
        for expected in 1..=10 {
            emitter.step(&mut rng);
            assert_eq!(emitter.len(), expected);
        }
    }

    #[test]
    fn test_spawn_velocity_within_range() {
        let mut emitter = Emitter::new(Vec2::ZERO);
        let mut rng = rng();
        for _ in 0..100 {
            emitter.add_particle(&mut rng);
        }
        for p in emitter.particles() {
            assert!(p.body.velocity.x >= -1.0 && p.body.velocity.x < 1.0);
            assert!(p.body.velocity.y >= -2.0 && p.body.velocity.y < 0.0);
        }
    }

    #[test]
    fn test_ceiling_makes_dying_sticky() {
        let mut emitter = Emitter::new(Vec2::ZERO).with_gravity(Vec2::ZERO);
        let mut rng = rng();
        for _ in 0..POPULATION_CEILING {
            emitter.add_particle(&mut rng);
        }
        assert!(!emitter.is_dying());

        emitter.step(&mut rng);
        assert!(emitter.is_dying());

        // No step may ever grow the population again.
        let mut last = emitter.len();
        for _ in 0..300 {
            emitter.step(&mut rng);
            assert!(emitter.len() <= last);
            last = emitter.len();
            assert!(emitter.is_dying());
        }
    }

    #[test]
    fn test_dying_emitter_eventually_drains() {
        let mut emitter = Emitter::new(Vec2::ZERO).with_gravity(Vec2::ZERO);
        let mut rng = rng();
        for _ in 0..POPULATION_CEILING {
            emitter.add_particle(&mut rng);
        }
        for _ in 0..=255 {
            emitter.step(&mut rng);
        }
        assert!(emitter.is_dead());
    }

    #[test]
    fn test_cull_preserves_survivor_order() {
        let mut emitter = Emitter::new(Vec2::ZERO).with_gravity(Vec2::ZERO);
        let mut rng = rng();
        emitter.add_particle(&mut rng);
        // Age the first particle almost to death.
        emitter.particles[0].lifespan = 1.0;
        emitter.add_particle(&mut rng);
        emitter.add_particle(&mut rng);
        let second = emitter.particles[1].body.velocity;
        let third = emitter.particles[2].body.velocity;

        emitter.step(&mut rng);

        // First died; the other two (plus the fresh spawn) keep their order.
        assert_eq!(emitter.particles[0].body.velocity, second);
        assert_eq!(emitter.particles[1].body.velocity, third);
    }

    #[test]
    fn test_gravity_accelerates_particles() {
        let mut emitter = Emitter::new(Vec2::ZERO);
        let mut rng = rng();
        emitter.add_particle(&mut rng);
        let vy0 = emitter.particles[0].body.velocity.y;
        emitter.step(&mut rng);
        // Oldest particle gained one tick of downward gravity.
        assert!((emitter.particles[0].body.velocity.y - (vy0 + 0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_field_broadcast_pushes_particles() {
        let mut emitter = Emitter::new(Vec2::ZERO).with_gravity(Vec2::ZERO);
        let mut rng = rng();
        emitter.add_particle(&mut rng);
        emitter.particles[0].body.position = Vec2::new(20.0, 0.0);
        emitter.particles[0].body.velocity = Vec2::ZERO;

        let repeller = Repeller::new(Vec2::ZERO, 5.0, 132.0).unwrap();
        emitter.apply_field(&repeller);
        emitter.step(&mut rng);

        // Pushed away from the repeller at the origin.
        assert!(emitter.particles[0].body.velocity.x > 0.0);
    }

    #[test]
    fn test_fresh_emitter_reports_dead_until_first_spawn() {
        let mut emitter = Emitter::new(Vec2::ZERO);
        assert!(emitter.is_dead());
        emitter.step(&mut rng());
        assert!(!emitter.is_dead());
    }
}
