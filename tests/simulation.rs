use nbody_direct::{Body, Simulation, SimulationParameters, Vector2, compute_forces, move_bodies, utils};

/// Two bodies at rest separated along the x-axis.
fn two_body(dist: f32, m1: f32, m2: f32) -> Vec<Body> {
    vec![
        Body::at_rest(Vector2::new(0.0, 0.0), m1).unwrap(),
        Body::at_rest(Vector2::new(dist, 0.0), m2).unwrap(),
    ]
}

fn params(gravity: f32, dt: f32) -> SimulationParameters {
    SimulationParameters::new(gravity, dt).unwrap()
}

// ==================================================================================
// Force pass
// ==================================================================================

#[test]
fn two_equal_bodies_attract_symmetrically() {
    let mut sim = Simulation::with_bodies(two_body(10.0, 1.0, 1.0), params(1.0, 0.01));
    sim.step();

    let [a, b] = [sim.bodies()[0], sim.bodies()[1]];

    assert!(a.vel.x() > 0.0, "first body should move towards +x");
    assert!(b.vel.x() < 0.0, "second body should move towards -x");
    assert_eq!(a.vel.y(), 0.0);
    assert_eq!(b.vel.y(), 0.0);
    assert_eq!(a.vel, -b.vel);

    // G · m / r² · dt = 1 / 100 · 0.01
    assert!((a.vel.x() - 1e-4).abs() < 1e-9);
}

#[test]
fn pair_contributions_are_antiparallel() {
    let mut bodies = vec![
        Body::at_rest(Vector2::new(-3.0, 2.0), 2.0).unwrap(),
        Body::at_rest(Vector2::new(4.0, -5.0), 5.0).unwrap(),
    ];
    compute_forces(&mut bodies, 1.0, 1.0);

    let [a, b] = [bodies[0], bodies[1]];
    // Δv_a = d/r³·m_b and Δv_b = -d/r³·m_a, so the mass-weighted kicks cancel.
    let p_a = a.vel * a.mass();
    let p_b = b.vel * b.mass();
    assert!(p_a.x() > 0.0 && p_a.y() < 0.0, "{p_a:?}");
    assert_eq!(p_a, -p_b);
    // Both kicks lie along the separation (7, -7).
    assert!((p_a.x() + p_a.y()).abs() < 1e-7);

    // Unequal masses give unequal speeds.
    assert!(a.vel.length() > b.vel.length());
}

#[test]
fn momentum_is_conserved_by_force_pass() {
    let mut bodies = utils::uniform_field(32, 11);
    compute_forces(&mut bodies, 20.0, 0.01);

    let momentum = bodies
        .iter()
        .fold(Vector2::ZERO, |acc, b| acc + b.vel * b.mass());
    assert!(momentum.length() < 1e-4, "net momentum {momentum:?}");
}

#[test]
fn clamp_applies_at_close_range() {
    let mut bodies = two_body(1.0, 3.0, 4.0);
    compute_forces(&mut bodies, 1.0, 1.0);

    let r = 3.5f32;
    let expected = 1.0 / (r * r * r) * 4.0;
    assert!((bodies[0].vel.x() - expected).abs() < 1e-7);

    // Raw distance 1.0 would have given 4.0.
    assert!(bodies[0].vel.x() < 0.1);
}

#[test]
fn empty_and_single_body_collections_are_trivial() {
    let mut empty: Vec<Body> = Vec::new();
    compute_forces(&mut empty, 20.0, 0.01);
    move_bodies(&mut empty, 0.01);
    assert!(empty.is_empty());

    let start = Body::new(Vector2::new(3.0, -1.0), Vector2::new(0.5, 2.0), 4.0).unwrap();
    let mut sim = Simulation::with_bodies(vec![start], params(20.0, 0.1));
    for _ in 0..10 {
        sim.step();
    }

    let body = sim.bodies()[0];
    assert_eq!(body.vel.x().to_bits(), start.vel.x().to_bits());
    assert_eq!(body.vel.y().to_bits(), start.vel.y().to_bits());
    assert_eq!(body.pos, start.pos + start.vel * 1.0);
}

#[test]
fn zero_gravity_only_drifts() {
    let mut bodies = utils::uniform_field(16, 5);
    for (i, b) in bodies.iter_mut().enumerate() {
        b.vel = Vector2::new(i as f32 + 1.0, -(i as f32) * 0.5 - 1.0);
    }
    let before = bodies.clone();

    let mut sim = Simulation::with_bodies(bodies, params(0.0, 0.25));
    sim.step();

    for (after, before) in sim.bodies().iter().zip(&before) {
        assert_eq!(after.vel.x().to_bits(), before.vel.x().to_bits());
        assert_eq!(after.vel.y().to_bits(), before.vel.y().to_bits());

        let expected = before.pos + before.vel * 0.25;
        assert_eq!(after.pos.x().to_bits(), expected.x().to_bits());
        assert_eq!(after.pos.y().to_bits(), expected.y().to_bits());
    }
}

// ==================================================================================
// Stepping
// ==================================================================================

#[test]
fn steps_are_deterministic() {
    let run = || {
        let mut sim = Simulation::with_params(50, 9, params(20.0, 0.01));
        for _ in 0..20 {
            sim.step();
        }
        sim.into_bodies()
    };

    let (a, b) = (run(), run());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.pos.x().to_bits(), y.pos.x().to_bits());
        assert_eq!(x.pos.y().to_bits(), y.pos.y().to_bits());
        assert_eq!(x.vel.x().to_bits(), y.vel.x().to_bits());
        assert_eq!(x.vel.y().to_bits(), y.vel.y().to_bits());
    }
}

#[test]
fn negative_time_step_retraces_drift() {
    let start = Body::new(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0), 1.0).unwrap();
    let mut bodies = vec![start];
    move_bodies(&mut bodies, 0.5);
    move_bodies(&mut bodies, -0.5);
    assert_eq!(bodies[0].pos, start.pos);
}

#[test]
fn body_count_is_fixed() {
    let mut sim = Simulation::with_params(12, 1, SimulationParameters::default());
    sim.run(5, |_| Ok(())).unwrap();
    assert_eq!(sim.bodies().len(), 12);
    assert_eq!(sim.frame, 5);
}
