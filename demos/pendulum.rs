//! Headless pendulum swing.
//!
//! Prints the decaying oscillation of a damped pendulum released from 45
//! degrees. Run with: cargo run --example pendulum

use flit::{ParamError, Pendulum, Vec2};

fn main() -> Result<(), ParamError> {
    tracing_subscriber::fmt().init();

    let mut pendulum =
        Pendulum::new(Vec2::new(320.0, 0.0), 175.0)?.with_angle(std::f32::consts::FRAC_PI_4);

    for frame in 1..=2000 {
        pendulum.update();
        if frame % 250 == 0 {
            let bob = pendulum.bob_position();
            println!(
                "frame {frame:>4}: angle {:>7.4} rad, bob ({:>6.1}, {:>6.1})",
                pendulum.angle(),
                bob.x,
                bob.y
            );
        }
    }

    Ok(())
}
