//! Force generators: fields that map a body's position to a force.
//!
//! A generator never touches the body it evaluates; it returns a force
//! vector and the caller decides what to do with it, usually feeding it
//! straight to [`Body::apply_force`]:
//!
//! ```ignore
//! use flit::{Body, ForceField, Spring, Vec2};
//!
//! let spring = Spring::new(Vec2::new(200.0, 0.0), 100.0, 0.1)?;
//! let mut bob = Body::new(Vec2::new(350.0, 0.0), 2.0)?;
//!
//! let f = spring.force_on(&bob);
//! bob.apply_force(f);
//! bob.update();
//! ```
//!
//! # Generators
//!
//! | Type | Force |
//! |------|-------|
//! | [`Spring`] | Hookean restoring force toward a fixed anchor |
//! | [`Repeller`] | Inverse-square repulsion away from a fixed point |

use glam::Vec2;

use crate::body::Body;
use crate::error::ParamError;

/// A stateless field evaluated against a body's position.
///
/// Implemented by [`Spring`] and [`Repeller`]; anything that can turn a
/// body's position into a force can participate, and containers like
/// [`Emitter`](crate::Emitter) broadcast a field across everything they
/// own via this trait.
pub trait ForceField {
    /// Force the field exerts on `body` at its current position.
    fn force_on(&self, body: &Body) -> Vec2;
}

/// Hookean spring anchored at a fixed point.
///
/// The force is proportional to how far the body sits from its rest
/// length: stretched springs pull the body toward the anchor, compressed
/// springs push it away.
///
/// # Example
///
/// ```ignore
/// // Anchored at the origin, resting at 100 units, softly sprung.
/// let spring = Spring::new(Vec2::ZERO, 100.0, 0.05)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    /// Fixed anchor point.
    pub anchor: Vec2,
    /// Length at which the spring exerts no force.
    pub rest_length: f32,
    /// Spring constant (higher = stiffer, snappier).
    pub stiffness: f32,
}

impl Spring {
    /// Create a spring.
    ///
    /// Fails with [`ParamError::RestLength`] when `rest_length` is not
    /// positive.
    pub fn new(anchor: Vec2, rest_length: f32, stiffness: f32) -> Result<Self, ParamError> {
        if rest_length <= 0.0 {
            return Err(ParamError::RestLength(rest_length));
        }
        Ok(Self {
            anchor,
            rest_length,
            stiffness,
        })
    }
}

impl ForceField for Spring {
    /// Hooke's law: `stiffness * stretch` along the line to the anchor.
    ///
    /// A body sitting exactly on the anchor has no defined direction; the
    /// force is the zero vector rather than a division by zero.
    fn force_on(&self, body: &Body) -> Vec2 {
        let displacement = self.anchor - body.position;
        let stretch = displacement.length() - self.rest_length;
        displacement.normalize_or_zero() * (self.stiffness * stretch)
    }
}

/// Inverse-square repulsion field around a fixed point.
///
/// Distance is clamped to `[5, 50]`: the lower bound keeps the field
/// finite at the center, the upper bound keeps far-away bodies from
/// feeling a vanishing but never-zero push.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Repeller {
    /// Center of the field.
    pub position: Vec2,
    /// Repulsion power.
    pub power: f32,
    /// Effective radius scaling the field's reach.
    pub radius: f32,
}

/// Distance floor for the repulsion falloff.
const MIN_DISTANCE: f32 = 5.0;
/// Distance ceiling for the repulsion falloff.
const MAX_DISTANCE: f32 = 50.0;

impl Repeller {
    /// Create a repeller.
    ///
    /// Fails with [`ParamError::Radius`] when `radius` is not positive.
    pub fn new(position: Vec2, power: f32, radius: f32) -> Result<Self, ParamError> {
        if radius <= 0.0 {
            return Err(ParamError::Radius(radius));
        }
        Ok(Self {
            position,
            power,
            radius,
        })
    }
}

impl ForceField for Repeller {
    /// `-power * radius / d²` along the line toward the field center.
    ///
    /// The negative magnitude flips the direction vector, so the returned
    /// force points away from the repeller.
    fn force_on(&self, body: &Body) -> Vec2 {
        let displacement = self.position - body.position;
        let distance = displacement.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let strength = -self.power * self.radius / (distance * distance);
        displacement.normalize_or_zero() * strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), 1.0).unwrap()
    }

    #[test]
    fn test_spring_rejects_non_positive_rest_length() {
        assert!(Spring::new(Vec2::ZERO, 0.0, 0.1).is_err());
        assert!(Spring::new(Vec2::ZERO, -5.0, 0.1).is_err());
    }

    #[test]
    fn test_spring_at_rest_length_is_zero() {
        let spring = Spring::new(Vec2::ZERO, 10.0, 0.1).unwrap();
        let f = spring.force_on(&body_at(10.0, 0.0));
        assert!(f.length() < 1e-6);
    }

    #[test]
    fn test_spring_stretched_pulls_toward_anchor() {
        // Anchor (0,0), rest 10, stiffness 0.1, body at (20,0):
        // stretch = 10, magnitude = 1, direction toward the anchor.
        let spring = Spring::new(Vec2::ZERO, 10.0, 0.1).unwrap();
        let f = spring.force_on(&body_at(20.0, 0.0));
        assert!((f.x - (-1.0)).abs() < 1e-6);
        assert!(f.y.abs() < 1e-6);
    }

    #[test]
    fn test_spring_compressed_pushes_away() {
        let spring = Spring::new(Vec2::ZERO, 10.0, 0.1).unwrap();
        let f = spring.force_on(&body_at(5.0, 0.0));
        // Body sits to the right of the anchor; compression pushes it
        // further right.
        assert!(f.x > 0.0);
        assert!(f.y.abs() < 1e-6);
    }

    #[test]
    fn test_spring_on_anchor_is_zero() {
        let spring = Spring::new(Vec2::ZERO, 10.0, 0.1).unwrap();
        let f = spring.force_on(&body_at(0.0, 0.0));
        assert_eq!(f, Vec2::ZERO);
    }

    #[test]
    fn test_repeller_rejects_non_positive_radius() {
        assert!(Repeller::new(Vec2::ZERO, 5.0, 0.0).is_err());
    }

    #[test]
    fn test_repeller_pushes_away() {
        // Repeller at origin, power 5, radius 132, body at (50,0):
        // distance clamps to 50, strength = -5*132/2500 = -0.264,
        // force = (0.264, 0) pointing away from the field.
        let repeller = Repeller::new(Vec2::ZERO, 5.0, 132.0).unwrap();
        let f = repeller.force_on(&body_at(50.0, 0.0));
        assert!((f.x - 0.264).abs() < 1e-4);
        assert!(f.y.abs() < 1e-6);
    }

    #[test]
    fn test_repeller_monotonic_within_clamp_band() {
        let repeller = Repeller::new(Vec2::ZERO, 5.0, 132.0).unwrap();
        let mut last = f32::INFINITY;
        for d in [5.0, 10.0, 20.0, 35.0, 50.0] {
            let magnitude = repeller.force_on(&body_at(d, 0.0)).length();
            assert!(magnitude < last);
            last = magnitude;
        }
    }

    #[test]
    fn test_repeller_clamped_outside_band() {
        let repeller = Repeller::new(Vec2::ZERO, 5.0, 132.0).unwrap();
        // Below the floor everything feels like distance 5.
        let near = repeller.force_on(&body_at(1.0, 0.0)).length();
        let floor = repeller.force_on(&body_at(5.0, 0.0)).length();
        assert!((near - floor).abs() < 1e-6);
        // Beyond the ceiling everything feels like distance 50.
        let far = repeller.force_on(&body_at(300.0, 0.0)).length();
        let ceiling = repeller.force_on(&body_at(50.0, 0.0)).length();
        assert!((far - ceiling).abs() < 1e-6);
    }

    #[test]
    fn test_repeller_on_center_is_zero_vector() {
        let repeller = Repeller::new(Vec2::ZERO, 5.0, 132.0).unwrap();
        let f = repeller.force_on(&body_at(0.0, 0.0));
        assert_eq!(f, Vec2::ZERO);
    }
}
