//! # Flit - 2D motion primitives
//!
//! Kinematic bodies, steering agents, force fields, and particle systems
//! for interactive sketches, with a simple, composable API.
//!
//! Flit handles the simulation arithmetic (integration, damping, steering,
//! lifespans) so a sketch can focus on what to draw. The crate never
//! draws: every primitive exposes read-only state — positions, headings,
//! lifespans, vertex lists — for whatever renderer the driver prefers.
//!
//! ## Quick Start
//!
//! ```ignore
//! use flit::prelude::*;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! fn main() -> Result<(), ParamError> {
//!     let mut emitter = Emitter::new(Vec2::new(320.0, 40.0));
//!     let repeller = Repeller::new(Vec2::new(320.0, 300.0), 5.0, 132.0)?;
//!     let mut rng = SmallRng::seed_from_u64(1);
//!
//!     loop {
//!         emitter.apply_field(&repeller);
//!         emitter.step(&mut rng);
//!         for p in emitter.particles() {
//!             // draw p.shape at p.body.position with alpha p.lifespan
//!         }
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Bodies
//!
//! A [`Body`] integrates accumulated forces with semi-implicit Euler once
//! per frame. Forces are transient: `apply_force` feeds an accumulator
//! that `update` consumes and zeroes, so continuous forces are reapplied
//! every frame.
//!
//! ### Force fields
//!
//! [`Spring`] and [`Repeller`] are pure functions from a body's position
//! to a force vector, unified under the [`ForceField`] trait so particle
//! systems can broadcast them.
//!
//! ### Agents
//!
//! An [`Agent`] turns intent into bounded steering forces: seek with
//! arrival braking, random wandering, and boundary avoidance. Randomness
//! is always injected (`rand::Rng`), so behavior is reproducible under a
//! seeded generator.
//!
//! ### Particle systems
//!
//! An [`Emitter`] owns [`Particle`]s — bodies with fading lifespans and a
//! [`ParticleShape`] display tag — spawning one per step until its
//! population ceiling trips, then draining to empty.
//!
//! ### Rigid-body handles
//!
//! A [`World`] registers externally-simulated rigid bodies behind opaque
//! generational [`BodyHandle`]s with an explicit release contract
//! ([`World::remove`], or [`World::scoped`] for release-on-drop).
//!
//! ## Feature Overview
//!
//! | Category | Types |
//! |----------|-------|
//! | Kinematics | [`Body`] |
//! | Force fields | [`Spring`], [`Repeller`], [`ForceField`] |
//! | Steering | [`Agent`] |
//! | Particles | [`Particle`], [`ParticleShape`], [`Emitter`] |
//! | Oscillators | [`Pendulum`] |
//! | Rigid-body registry | [`World`], [`BodyHandle`], [`ShapeDef`], [`Joint`] |

mod body;
mod emitter;
mod error;
pub mod math;
mod particle;
mod pendulum;
mod steering;
mod world;

pub mod forces;

pub use body::Body;
pub use emitter::{Emitter, POPULATION_CEILING};
pub use error::ParamError;
pub use forces::{ForceField, Repeller, Spring};
pub use glam::Vec2;
pub use particle::{Particle, ParticleShape, FADE_PER_STEP, INITIAL_LIFESPAN};
pub use pendulum::Pendulum;
pub use steering::Agent;
pub use world::{BodyHandle, Joint, RigidBody, ScopedBody, ShapeDef, World};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use flit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::body::Body;
    pub use crate::emitter::Emitter;
    pub use crate::error::ParamError;
    pub use crate::forces::{ForceField, Repeller, Spring};
    pub use crate::particle::{Particle, ParticleShape};
    pub use crate::pendulum::Pendulum;
    pub use crate::steering::Agent;
    pub use crate::world::{BodyHandle, ShapeDef, World};
    pub use crate::Vec2;
}
