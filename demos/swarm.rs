//! Headless wandering swarm.
//!
//! A handful of agents wander a 640x480 world, steering back inside when
//! they near an edge. Run with: cargo run --example swarm

use flit::{Agent, Body, ParamError, Vec2};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 480.0;

fn main() -> Result<(), ParamError> {
    tracing_subscriber::fmt().init();

    let mut rng = SmallRng::seed_from_u64(42);
    let mut swarm = Vec::new();
    for i in 0..5 {
        let position = Vec2::new(100.0 + 100.0 * i as f32, HEIGHT / 2.0);
        let body = Body::new(position, 1.0)?;
        swarm.push(Agent::new(body, 3.0, 0.3)?);
    }

    for frame in 1..=1000 {
        for agent in &mut swarm {
            agent.wander(25.0, &mut rng);
            agent.avoid_boundaries(50.0, WIDTH, HEIGHT);
            agent.update();
        }
        if frame % 200 == 0 {
            println!("frame {frame:>4}:");
            for (i, agent) in swarm.iter().enumerate() {
                let p = agent.body.position;
                println!("  agent {i}: ({:>6.1}, {:>6.1})", p.x, p.y);
            }
        }
    }

    Ok(())
}
