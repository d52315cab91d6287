use termfireworks::{OffscreenPolicy, PhysicsConfig, Simulation};

fn simulation(width: u16, height: u16) -> Simulation {
    Simulation::with_rng(
        PhysicsConfig::default(),
        width,
        height,
        fastrand::Rng::with_seed(42),
    )
}

#[test]
fn test_advance_on_empty_simulation_stays_empty() {
    let mut sim = simulation(80, 24);
    for _ in 0..100 {
        sim.advance();
    }
    assert!(sim.rockets().is_empty());
    assert!(sim.bursts().is_empty());
    assert!(sim.is_idle());
}

#[test]
fn test_rocket_launches_from_bottom_row() {
    let mut sim = simulation(80, 24);
    sim.spawn_rocket(30, 5);

    let rocket = &sim.rockets()[0];
    assert_eq!((rocket.x, rocket.y, rocket.target_y), (30, 23, 5));
}

#[test]
fn test_rocket_turns_into_one_burst_at_its_final_position() {
    let mut sim = simulation(80, 24);
    sim.spawn_rocket(30, 20);

    // 23 -> 20 takes three ticks, the fourth reports the explosion
    for _ in 0..3 {
        sim.advance();
        assert_eq!(sim.rockets().len(), 1);
        assert!(sim.bursts().is_empty());
    }
    sim.advance();

    assert!(sim.rockets().is_empty());
    assert_eq!(sim.bursts().len(), 1);
    let burst = &sim.bursts()[0];
    assert_eq!(burst.age(), 0, "fresh bursts are not stepped on the tick they appear");
    assert!(
        burst
            .particles()
            .iter()
            .all(|p| (p.x, p.y) == (30.0, 20.0))
    );
}

#[test]
fn test_burst_is_gone_after_61_ticks() {
    let mut sim = simulation(80, 24);
    sim.spawn_burst(40.0, 12.0);
    assert_eq!(sim.bursts().len(), 1);

    for _ in 0..61 {
        sim.advance();
    }
    assert!(sim.bursts().is_empty());
}

#[test]
fn test_burst_capped_at_max_age_even_with_long_lived_particles() {
    let physics = PhysicsConfig {
        min_lifetime: 500,
        max_lifetime: 500,
        min_speed: 0.0,
        max_speed: 0.0,
        gravity: 0.0,
        ..PhysicsConfig::default()
    };
    let mut sim = Simulation::with_rng(physics, 80, 24, fastrand::Rng::with_seed(1));
    sim.spawn_burst(40.0, 12.0);

    for _ in 0..59 {
        sim.advance();
    }
    assert_eq!(sim.bursts().len(), 1);
    assert_eq!(sim.bursts()[0].age(), 59);
    sim.advance();
    assert!(sim.bursts().is_empty());
}

#[test]
fn test_offscreen_rockets_never_panic() {
    let mut sim = simulation(10, 10);
    sim.spawn_rocket(-5, 2);
    sim.spawn_rocket(500, 2);
    sim.spawn_rocket(3, -40);

    for _ in 0..200 {
        sim.advance();
    }
    assert!(sim.is_idle());
}

#[test]
fn test_launch_random_aims_for_upper_half() {
    let mut sim = simulation(80, 24);
    for _ in 0..200 {
        sim.launch_random();
    }
    for rocket in sim.rockets() {
        assert!((2..=77).contains(&rocket.x), "x out of range: {}", rocket.x);
        assert!((4..12).contains(&rocket.target_y), "target out of range: {}", rocket.target_y);
    }
}

#[test]
fn test_launch_random_on_tiny_grids() {
    for (w, h) in [(0, 0), (1, 1), (3, 2), (5, 3)] {
        let mut sim = simulation(w, h);
        sim.launch_random();
        for _ in 0..100 {
            sim.advance();
        }
    }
}

#[test]
fn test_resize_culls_against_new_bounds() {
    let physics = PhysicsConfig {
        min_speed: 0.0,
        max_speed: 0.0,
        gravity: 0.0,
        ..PhysicsConfig::default()
    };
    let mut sim = Simulation::with_rng(physics.clone(), 80, 24, fastrand::Rng::with_seed(5));
    sim.spawn_burst(60.0, 20.0);
    sim.advance();
    assert!(sim.particle_count() > 0);

    sim.resize(40, 12);
    sim.advance();
    assert_eq!(sim.particle_count(), 0);

    let retain = PhysicsConfig {
        offscreen: OffscreenPolicy::Retain,
        ..physics
    };
    let mut sim = Simulation::with_rng(retain, 80, 24, fastrand::Rng::with_seed(5));
    sim.spawn_burst(60.0, 20.0);
    sim.resize(40, 12);
    sim.advance();
    assert!(sim.particle_count() > 0);
}

#[test]
fn test_same_seed_same_show() {
    let run = || {
        let mut sim = simulation(80, 24);
        sim.launch_random();
        sim.spawn_burst(10.0, 10.0);
        for _ in 0..15 {
            sim.advance();
        }
        sim.bursts()
            .iter()
            .flat_map(|b| b.particles().iter().map(|p| (p.x, p.y, p.glyph)))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
