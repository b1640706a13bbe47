//! End-to-end checks on generation plus a simulated frame schedule.

use orbitfield::prelude::*;

fn config() -> GalaxyConfig {
    GalaxyConfig {
        seed: Some(1234),
        ..GalaxyConfig::default()
    }
}

#[test]
fn generation_then_animation_keeps_buffers_in_step() {
    let mut field = StarField::generate(&config()).unwrap();

    // Simulate a minute of 60 Hz frames, coarsely.
    for frame in 0..120 {
        let t = frame as f32 * 0.5;
        field.update(t);
        assert_eq!(field.positions().len(), field.len() * 3);
    }

    // Colors and sizes never move during animation.
    let before = (field.colors().to_vec(), field.sizes().to_vec());
    field.update(999.0);
    assert_eq!(field.colors(), before.0.as_slice());
    assert_eq!(field.sizes(), before.1.as_slice());
}

#[test]
fn every_star_stays_near_its_orbit_radius() {
    let mut field = StarField::generate(&config()).unwrap();
    field.update(3.0);

    for (i, star) in field.stars().iter().enumerate() {
        let p = Vec3::new(
            field.positions()[i * 3],
            field.positions()[i * 3 + 1],
            field.positions()[i * 3 + 2],
        );
        // Tilts are rotations, so |p| is bounded by the larger semi-axis.
        let bound = star.ellipse_major.abs().max(star.ellipse_minor.abs());
        assert!(p.length() <= bound + 1e-3, "star {i} left its ellipse");
    }
}

#[test]
fn config_change_swaps_in_a_new_field() {
    let field = StarField::generate(&config()).unwrap();

    let recolored = GalaxyConfig {
        num_particles: 20_000,
        num_orbits: 30,
        start_color: hex_color("#ffffff").unwrap(),
        ..config()
    };
    let regenerated = StarField::generate(&recolored).unwrap();

    assert!(regenerated.len() <= 20_000);
    assert_ne!(regenerated.len(), field.len());
    assert_eq!(regenerated.config(), &recolored);

    // Innermost stars pick up the new start color.
    let first = Vec3::new(
        regenerated.colors()[0],
        regenerated.colors()[1],
        regenerated.colors()[2],
    );
    assert!((first - Vec3::ONE).length() < 0.05);
}

#[test]
fn render_shader_is_valid_wgsl() {
    let source = include_str!("../src/shader.wgsl");
    let module = naga::front::wgsl::parse_str(source).expect("shader must parse");

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    );
    validator.validate(&module).expect("shader must validate");
}
