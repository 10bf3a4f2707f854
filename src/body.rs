//! Kinematic bodies integrated with semi-implicit Euler.
//!
//! A [`Body`] is the shared motion record of everything that moves: forces
//! accumulate into a per-step acceleration, and [`Body::update`] folds the
//! accumulator into velocity and position once per simulated frame.
//!
//! # Force accumulation
//!
//! `acceleration` is a transient accumulator, not persistent state. Every
//! call to [`Body::update`] consumes it and resets it to zero, so a force
//! that should act continuously must be applied again each frame:
//!
//! ```ignore
//! use flit::{Body, Vec2};
//!
//! let mut body = Body::new(Vec2::ZERO, 2.0)?;
//! loop {
//!     body.apply_force(Vec2::new(0.0, 0.1)); // gravity, reapplied per frame
//!     body.update();
//! }
//! ```

use glam::Vec2;

use crate::error::ParamError;

/// Angular velocity is clamped to this magnitude so bodies never spin out
/// of control.
const ANGULAR_VELOCITY_LIMIT: f32 = 0.1;

/// Divisor coupling the linear accumulator's x component into angular
/// acceleration.
const ANGULAR_COUPLING: f32 = 10.0;

/// A point mass moving under accumulated forces.
///
/// Linear state integrates with semi-implicit Euler (velocity first, then
/// position), with a multiplicative damping factor applied to velocity each
/// step. Angular state is driven by the horizontal component of the force
/// accumulator, giving pushed bodies a lean in the direction they are
/// shoved.
///
/// # Example
///
/// ```ignore
/// use flit::{Body, Vec2};
///
/// let mut body = Body::new(Vec2::new(50.0, 50.0), 1.0)?
///     .with_velocity(Vec2::new(1.0, 0.0))
///     .with_damping(0.98)?;
///
/// body.apply_force(Vec2::new(2.0, 0.0));
/// body.update();
/// ```
#[derive(Debug, Clone)]
pub struct Body {
    /// World position.
    pub position: Vec2,
    /// Velocity in units per step.
    pub velocity: Vec2,
    /// Per-step force accumulator. Consumed and zeroed by [`Body::update`];
    /// never carries over between steps.
    pub acceleration: Vec2,
    /// Orientation in radians.
    pub angle: f32,
    /// Angular velocity in radians per step, clamped to ±0.1.
    pub angular_velocity: f32,
    /// Angular acceleration derived each step from the force accumulator.
    pub angular_acceleration: f32,
    mass: f32,
    damping: f32,
}

impl Body {
    /// Create a body at rest.
    ///
    /// Fails with [`ParamError::Mass`] when `mass` is not positive.
    pub fn new(position: Vec2, mass: f32) -> Result<Self, ParamError> {
        if mass <= 0.0 {
            return Err(ParamError::Mass(mass));
        }
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            mass,
            damping: 1.0,
        })
    }

    /// Set the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the per-step velocity damping factor.
    ///
    /// `1.0` (the default) preserves momentum; values below `1.0` bleed
    /// energy each step. Fails with [`ParamError::Damping`] outside
    /// `(0, 1]`.
    pub fn with_damping(mut self, damping: f32) -> Result<Self, ParamError> {
        if damping <= 0.0 || damping > 1.0 {
            return Err(ParamError::Damping(damping));
        }
        self.damping = damping;
        Ok(self)
    }

    /// Mass of the body. Always positive.
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Per-step velocity damping factor, in `(0, 1]`.
    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Accumulate a force for the next update.
    ///
    /// The force is scaled by `1 / mass` and added to the acceleration
    /// accumulator. Nothing moves until [`Body::update`] runs.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force / self.mass;
    }

    /// Advance the body by one simulated step.
    ///
    /// Velocity picks up the accumulated acceleration, damping is applied,
    /// position picks up the velocity, and the accumulator is reset to
    /// zero. Angular state integrates from the accumulator's x component
    /// before it is consumed.
    pub fn update(&mut self) {
        self.angular_acceleration = self.acceleration.x / ANGULAR_COUPLING;

        self.velocity += self.acceleration;
        self.velocity *= self.damping;
        self.position += self.velocity;

        self.angular_velocity = (self.angular_velocity + self.angular_acceleration)
            .clamp(-ANGULAR_VELOCITY_LIMIT, ANGULAR_VELOCITY_LIMIT);
        self.angle += self.angular_velocity;

        self.acceleration = Vec2::ZERO;
    }

    /// Direction of travel in radians.
    ///
    /// A body at rest has no direction; the zero vector reports `0.0`
    /// rather than propagating a NaN through `atan2`.
    #[inline]
    pub fn heading(&self) -> f32 {
        if self.velocity.length_squared() == 0.0 {
            0.0
        } else {
            self.velocity.to_angle()
        }
    }
}
