//! Headless particle fountain.
//!
//! Runs an emitter with a repeller bending the stream, prints the
//! population curve, then floods the emitter past its ceiling and watches
//! it drain. Run with: cargo run --example fountain

use flit::{Emitter, ParamError, Repeller, Vec2};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() -> Result<(), ParamError> {
    tracing_subscriber::fmt().init();

    let mut emitter = Emitter::new(Vec2::new(320.0, 40.0));
    let repeller = Repeller::new(Vec2::new(320.0, 200.0), 5.0, 132.0)?;
    let mut rng = SmallRng::seed_from_u64(1);

    println!("steady stream:");
    for frame in 1..=300 {
        emitter.apply_field(&repeller);
        emitter.step(&mut rng);
        if frame % 60 == 0 {
            println!("  frame {frame:>4}: {} particles", emitter.len());
        }
    }

    println!("flooding past the ceiling:");
    while !emitter.is_dying() {
        for _ in 0..8 {
            emitter.add_particle(&mut rng);
        }
        emitter.step(&mut rng);
    }
    println!("  dying at {} particles", emitter.len());

    let mut frame = 0;
    while !emitter.is_dead() {
        emitter.step(&mut rng);
        frame += 1;
    }
    println!("  drained after {frame} more frames");

    Ok(())
}
