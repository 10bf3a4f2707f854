//! Cross-module scenario tests.
//!
//! Each test drives a small simulation the way a sketch loop would,
//! checking the behavior that emerges from several primitives working
//! together rather than any single step in isolation.

use flit::{Agent, Body, Emitter, ForceField, Repeller, ShapeDef, Spring, Vec2, World};
use rand::rngs::SmallRng;
use rand::SeedableRng;

// ============================================================================
// Spring-mass scenarios
// ============================================================================

#[test]
fn test_spring_bob_settles_at_rest_length() {
    let spring = Spring::new(Vec2::ZERO, 10.0, 0.1).unwrap();
    let mut bob = Body::new(Vec2::new(20.0, 0.0), 1.0)
        .unwrap()
        .with_damping(0.9)
        .unwrap();

    for _ in 0..2000 {
        let f = spring.force_on(&bob);
        bob.apply_force(f);
        bob.update();
    }

    assert!((bob.position.length() - 10.0).abs() < 0.1);
    assert!(bob.velocity.length() < 0.01);
}

#[test]
fn test_spring_force_matches_hand_derivation() {
    // Anchor (0,0), rest 10, stiffness 0.1, body at (20,0) => force (-1, 0).
    let spring = Spring::new(Vec2::ZERO, 10.0, 0.1).unwrap();
    let body = Body::new(Vec2::new(20.0, 0.0), 1.0).unwrap();
    let f = spring.force_on(&body);
    assert!((f.x + 1.0).abs() < 1e-6);
    assert!(f.y.abs() < 1e-6);
}

// ============================================================================
// Emitter scenarios
// ============================================================================

#[test]
fn test_fountain_reaches_steady_state_below_ceiling() {
    let mut emitter = Emitter::new(Vec2::new(320.0, 40.0));
    let mut rng = SmallRng::seed_from_u64(3);

    for _ in 0..500 {
        emitter.step(&mut rng);
    }

    // One spawn per step against a 128-step lifespan: the population
    // plateaus at the lifespan, well under the ceiling.
    assert_eq!(emitter.len(), 128);
    assert!(!emitter.is_dying());
    for p in emitter.particles() {
        assert!(p.body.position.is_finite());
    }
}

#[test]
fn test_repeller_bends_the_stream() {
    let repeller = Repeller::new(Vec2::new(10.0, 50.0), 5.0, 132.0).unwrap();

    let mut pushed = Emitter::new(Vec2::new(10.0, 0.0)).with_gravity(Vec2::new(0.0, 0.05));
    let mut free = Emitter::new(Vec2::new(10.0, 0.0)).with_gravity(Vec2::new(0.0, 0.05));
    let mut rng_a = SmallRng::seed_from_u64(7);
    let mut rng_b = SmallRng::seed_from_u64(7);

    for _ in 0..120 {
        pushed.apply_field(&repeller);
        pushed.step(&mut rng_a);
        free.step(&mut rng_b);
    }

    // Identical spawn streams, but the repelled population is shoved off
    // the line through the field center.
    let spread = |e: &Emitter| {
        e.particles()
            .iter()
            .map(|p| (p.body.position.x - 10.0).abs())
            .sum::<f32>()
            / e.len() as f32
    };
    assert!(spread(&pushed) > spread(&free));
}

#[test]
fn test_driver_thickened_emitter_dies_out() {
    let mut emitter = Emitter::new(Vec2::ZERO);
    let mut rng = SmallRng::seed_from_u64(11);

    // A sketch loop pushing extra particles every frame trips the ceiling.
    let mut steps_until_dying = 0;
    while !emitter.is_dying() {
        for _ in 0..4 {
            emitter.add_particle(&mut rng);
        }
        emitter.step(&mut rng);
        steps_until_dying += 1;
        assert!(steps_until_dying < 100, "ceiling never tripped");
    }

    let peak = emitter.len();
    for _ in 0..=255 {
        emitter.step(&mut rng);
        assert!(emitter.len() <= peak);
    }
    assert!(emitter.is_dead());
}

// ============================================================================
// Steering scenarios
// ============================================================================

#[test]
fn test_agent_arrives_without_orbiting() {
    let body = Body::new(Vec2::ZERO, 1.0).unwrap();
    let mut agent = Agent::new(body, 4.0, 0.4).unwrap();
    let target = Vec2::new(300.0, 0.0);

    for _ in 0..600 {
        agent.seek(target);
        agent.update();
    }

    assert!(agent.body.position.distance(target) < 5.0);
    assert!(agent.body.velocity.length() < 0.5);
}

#[test]
fn test_wandering_agent_respects_world_edges() {
    let body = Body::new(Vec2::new(320.0, 240.0), 1.0).unwrap();
    let mut agent = Agent::new(body, 3.0, 0.3).unwrap();
    let mut rng = SmallRng::seed_from_u64(21);

    for _ in 0..3000 {
        agent.wander(25.0, &mut rng);
        agent.avoid_boundaries(50.0, 640.0, 480.0);
        agent.update();

        let p = agent.body.position;
        assert!(p.x > -150.0 && p.x < 790.0, "escaped horizontally: {p}");
        assert!(p.y > -150.0 && p.y < 630.0, "escaped vertically: {p}");
    }
}

// ============================================================================
// World scenarios
// ============================================================================

#[test]
fn test_ragdoll_assembly_and_teardown() {
    let mut world = World::new();

    let torso = world.add(
        &ShapeDef::Rect {
            width: 20.0,
            height: 40.0,
        },
        Vec2::new(100.0, 100.0),
    );
    let head = world.add(&ShapeDef::Circle { radius: 8.0 }, Vec2::new(100.0, 70.0));
    let arms = world.add(
        &ShapeDef::Compound {
            parts: vec![
                (
                    Vec2::new(-15.0, 0.0),
                    ShapeDef::Rect {
                        width: 10.0,
                        height: 4.0,
                    },
                ),
                (
                    Vec2::new(15.0, 0.0),
                    ShapeDef::Rect {
                        width: 10.0,
                        height: 4.0,
                    },
                ),
            ],
        },
        Vec2::new(100.0, 90.0),
    );

    assert!(world.add_joint(torso, head, 30.0));
    assert!(world.add_joint(torso, arms, 10.0));
    assert_eq!(world.len(), 3);
    assert_eq!(world.joints().len(), 2);

    world.set_velocity(head, Vec2::new(0.0, -2.0));
    assert_eq!(world.get(head).unwrap().velocity, Vec2::new(0.0, -2.0));

    // Tearing down the torso releases both of its joints.
    assert!(world.remove(torso));
    assert!(world.joints().is_empty());
    assert_eq!(world.len(), 2);
    assert!(world.get(torso).is_none());

    assert!(world.remove(head));
    assert!(world.remove(arms));
    assert!(world.is_empty());
}
