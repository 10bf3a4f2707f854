//! Error types for flit.
//!
//! Construction is the only fallible surface in the crate: every per-step
//! operation is total arithmetic. Constructors validate their scalar
//! parameters and reject the values that would make later steps meaningless
//! (zero mass, zero-length springs, and so on).

use std::fmt;

/// Errors raised when constructing a primitive with an invalid parameter.
///
/// Each variant carries the offending value. Once a primitive is built,
/// no further errors can occur.
///
/// # Example
///
/// ```ignore
/// use flit::{Body, ParamError, Vec2};
///
/// match Body::new(Vec2::ZERO, 0.0) {
///     Err(ParamError::Mass(m)) => println!("rejected mass {m}"),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamError {
    /// Body mass must be positive.
    Mass(f32),
    /// Damping factor must lie in (0, 1].
    Damping(f32),
    /// Spring rest length must be positive.
    RestLength(f32),
    /// Repeller radius must be positive.
    Radius(f32),
    /// Pendulum arm length must be positive.
    ArmLength(f32),
    /// Agent maximum speed must be positive.
    MaxSpeed(f32),
    /// Agent maximum steering force must be positive.
    MaxForce(f32),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Mass(v) => write!(f, "Body mass must be positive, got {}", v),
            ParamError::Damping(v) => {
                write!(f, "Damping factor must be in (0, 1], got {}", v)
            }
            ParamError::RestLength(v) => {
                write!(f, "Spring rest length must be positive, got {}", v)
            }
            ParamError::Radius(v) => write!(f, "Repeller radius must be positive, got {}", v),
            ParamError::ArmLength(v) => {
                write!(f, "Pendulum arm length must be positive, got {}", v)
            }
            ParamError::MaxSpeed(v) => {
                write!(f, "Agent max speed must be positive, got {}", v)
            }
            ParamError::MaxForce(v) => {
                write!(f, "Agent max force must be positive, got {}", v)
            }
        }
    }
}

impl std::error::Error for ParamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_value() {
        let msg = ParamError::Mass(-2.0).to_string();
        assert!(msg.contains("-2"));
        assert!(msg.contains("mass"));
    }
}
