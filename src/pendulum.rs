//! A damped single-pivot pendulum.
//!
//! One angular degree of freedom under a gravity-like torque. The sine of
//! the angle is used directly, so swings stay accurate at large
//! amplitudes, not just near the bottom.

use glam::Vec2;

use crate::error::ParamError;

/// Geometric decay applied to the damping factor itself every step.
const DAMPING_DECAY: f32 = 0.999_99;

/// Default sketch-space gravity constant.
const DEFAULT_GRAVITY: f32 = 0.4;

/// Default per-step angular damping.
const DEFAULT_DAMPING: f32 = 0.995;

/// An angular oscillator hanging from a fixed anchor.
///
/// Runs forever: the per-step damping multiply bleeds energy, and the
/// damping factor itself decays geometrically toward zero, so the bob
/// settles toward hanging straight down.
///
/// # Example
///
/// ```ignore
/// use flit::{Pendulum, Vec2};
///
/// let mut pendulum = Pendulum::new(Vec2::new(320.0, 0.0), 175.0)?
///     .with_angle(std::f32::consts::FRAC_PI_4);
///
/// loop {
///     pendulum.update();
///     let bob = pendulum.bob_position(); // draw arm from anchor to bob
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Pendulum {
    anchor: Vec2,
    arm_length: f32,
    angle: f32,
    angular_velocity: f32,
    angular_acceleration: f32,
    gravity: f32,
    damping: f32,
}

impl Pendulum {
    /// Create a pendulum at rest, hanging from `anchor` by an arm of
    /// `arm_length`.
    ///
    /// Fails with [`ParamError::ArmLength`] when the arm is not positive.
    pub fn new(anchor: Vec2, arm_length: f32) -> Result<Self, ParamError> {
        if arm_length <= 0.0 {
            return Err(ParamError::ArmLength(arm_length));
        }
        Ok(Self {
            anchor,
            arm_length,
            angle: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            gravity: DEFAULT_GRAVITY,
            damping: DEFAULT_DAMPING,
        })
    }

    /// Start from a displaced angle (radians from straight down).
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Override the gravity constant.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Current angle in radians from straight down.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current angular velocity in radians per step.
    #[inline]
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Current damping factor. Monotonically non-increasing.
    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Fixed pivot point.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Arm length from anchor to bob.
    #[inline]
    pub fn arm_length(&self) -> f32 {
        self.arm_length
    }

    /// World position of the bob, for display callers.
    #[inline]
    pub fn bob_position(&self) -> Vec2 {
        self.anchor + self.arm_length * Vec2::new(self.angle.sin(), self.angle.cos())
    }

    /// Advance one step.
    ///
    /// Torque `-gravity * sin(angle) / arm_length` integrates into angular
    /// velocity, damping multiplies it, the angle integrates, and then the
    /// damping factor itself decays by ×0.99999 — a slow leak on top of
    /// the per-step multiply.
    pub fn update(&mut self) {
        self.angular_acceleration = -self.gravity * self.angle.sin() / self.arm_length;
        self.angular_velocity += self.angular_acceleration;
        self.angular_velocity *= self.damping;
        self.angle += self.angular_velocity;
        self.damping *= DAMPING_DECAY;
    }
}
