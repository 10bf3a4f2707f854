//! Steering agents: bodies with intent.
//!
//! An [`Agent`] wraps a [`Body`] with a speed limit and a force budget and
//! converts *desired velocities* into bounded steering forces. Each
//! behavior computes where the agent wants to be going, subtracts where it
//! is actually going, clamps the correction to `max_force`, and feeds it
//! to the body's force accumulator.
//!
//! # Behaviors
//!
//! | Behavior | Desired velocity |
//! |----------|------------------|
//! | [`Agent::seek`] | Toward a target, slowing inside the arrival radius |
//! | [`Agent::wander`] | Toward a random point on a circle projected ahead |
//! | [`Agent::avoid_boundaries`] | Inward, when within `offset` of a world edge |
//!
//! # Example
//!
//! ```ignore
//! use flit::{Agent, Body, Vec2};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let body = Body::new(Vec2::new(320.0, 240.0), 1.0)?;
//! let mut agent = Agent::new(body, 4.0, 0.3)?;
//! let mut rng = SmallRng::seed_from_u64(7);
//!
//! loop {
//!     agent.wander(25.0, &mut rng);
//!     agent.avoid_boundaries(50.0, 640.0, 480.0);
//!     agent.update();
//! }
//! ```

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::Rng;

use crate::body::Body;
use crate::error::ParamError;
use crate::math::remap;

/// Within this distance of a seek target, desired speed scales down
/// linearly to zero to avoid overshooting.
const ARRIVE_RADIUS: f32 = 100.0;

/// How far ahead of the agent the wander circle is projected.
const WANDER_PROJECTION: f32 = 80.0;

/// A kinematic body steered by seek/wander/boundary behaviors.
///
/// Behaviors only accumulate forces; the caller still drives the frame
/// with [`Agent::update`] (or `agent.body.update()`), so several
/// behaviors can be blended within a single step.
#[derive(Debug, Clone)]
pub struct Agent {
    /// The wrapped kinematic body.
    pub body: Body,
    max_speed: f32,
    max_force: f32,
}

impl Agent {
    /// Wrap a body with steering limits.
    ///
    /// Fails with [`ParamError::MaxSpeed`] or [`ParamError::MaxForce`]
    /// when a limit is not positive.
    pub fn new(body: Body, max_speed: f32, max_force: f32) -> Result<Self, ParamError> {
        if max_speed <= 0.0 {
            return Err(ParamError::MaxSpeed(max_speed));
        }
        if max_force <= 0.0 {
            return Err(ParamError::MaxForce(max_force));
        }
        Ok(Self {
            body,
            max_speed,
            max_force,
        })
    }

    /// Top speed the agent steers toward.
    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Largest steering force a behavior may apply in one step.
    #[inline]
    pub fn max_force(&self) -> f32 {
        self.max_force
    }

    /// Steer toward `target`.
    ///
    /// Desired speed is `max_speed`, except inside the arrival radius
    /// (100 units) where it scales linearly down to zero at the target so
    /// the agent brakes instead of orbiting.
    pub fn seek(&mut self, target: Vec2) {
        let offset = target - self.body.position;
        let distance = offset.length();

        let speed = if distance < ARRIVE_RADIUS {
            remap(distance, 0.0, ARRIVE_RADIUS, 0.0, self.max_speed)
        } else {
            self.max_speed
        };
        let desired = offset.normalize_or_zero() * speed;

        self.apply_steering(desired);
    }

    /// Drift in a deliberately aimless way.
    ///
    /// Projects a circle of the given `radius` 80 units ahead along the
    /// current heading, picks a point on it within ±90° of the heading,
    /// and seeks that point. This is the one stochastic behavior in the
    /// crate; pass a seeded generator for reproducible runs.
    pub fn wander<R: Rng>(&mut self, radius: f32, rng: &mut R) {
        let heading = self.body.heading();
        let center = self.body.position + Vec2::from_angle(heading) * WANDER_PROJECTION;
        let theta = heading + rng.gen_range(-FRAC_PI_2..FRAC_PI_2);
        let target = center + Vec2::from_angle(theta) * radius;
        self.seek(target);
    }

    /// Steer back inside a `width` × `height` world when within `offset`
    /// of any edge.
    ///
    /// Each violated axis contributes an inward component at `max_speed`;
    /// in a corner both axes combine, so the agent leaves diagonally
    /// instead of hugging one wall. Does nothing in the interior.
    pub fn avoid_boundaries(&mut self, offset: f32, width: f32, height: f32) {
        let position = self.body.position;
        let mut desired = self.body.velocity;
        let mut violated = false;

        if position.x < offset {
            desired.x = self.max_speed;
            violated = true;
        } else if position.x > width - offset {
            desired.x = -self.max_speed;
            violated = true;
        }
        if position.y < offset {
            desired.y = self.max_speed;
            violated = true;
        } else if position.y > height - offset {
            desired.y = -self.max_speed;
            violated = true;
        }

        if violated {
            let desired = desired.normalize_or_zero() * self.max_speed;
            self.apply_steering(desired);
        }
    }

    /// Advance the wrapped body by one step.
    #[inline]
    pub fn update(&mut self) {
        self.body.update();
    }

    /// Turn a desired velocity into a bounded correction force.
    fn apply_steering(&mut self, desired: Vec2) {
        let steer = (desired - self.body.velocity).clamp_length_max(self.max_force);
        self.body.apply_force(steer);
    }
}
