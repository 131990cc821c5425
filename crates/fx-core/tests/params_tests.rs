// Host-side tests for parameter overrides and validation.

use fx_core::*;
use glam::Vec2;
use std::collections::HashMap;

#[test]
fn defaults_are_valid() {
    assert_eq!(FieldParams::default().validate(), Ok(()));
    assert_eq!(FollowerParams::default().validate(), Ok(()));
}

#[test]
fn density_override_changes_particle_count() {
    let mut params = FieldParams::default();
    params.apply_override("density-divisor", " 20000 ").unwrap();
    assert_eq!(params.density_divisor, 20_000.0);

    let mut field = ParticleField::new(params, 7);
    field.initialize(800.0, 600.0);
    assert_eq!(field.particles().len(), 24);
    assert_eq!(
        particle_count(Vec2::new(800.0, 600.0), field.params.density_divisor),
        24
    );
}

#[test]
fn rejected_override_leaves_params_untouched() {
    let mut params = FieldParams::default();
    assert_eq!(
        params.apply_override("link-distance", "far"),
        Err(ParamError::NotANumber {
            key: "link-distance".into(),
            value: "far".into(),
        })
    );
    assert_eq!(
        params.apply_override("density-divisor", "-5"),
        Err(ParamError::NotPositive {
            key: "density-divisor",
            value: -5.0,
        })
    );
    assert_eq!(
        params.apply_override("particle-speed", "0"),
        Err(ParamError::NotPositive {
            key: "particle-speed",
            value: 0.0,
        })
    );
    assert_eq!(params, FieldParams::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let mut field = FieldParams::default();
    assert_eq!(
        field.apply_override("colour", "red"),
        Err(ParamError::UnknownKey("colour".into()))
    );
    let mut follower = FollowerParams::default();
    assert!(matches!(
        follower.apply_override("density-divisor", "1"),
        Err(ParamError::UnknownKey(_))
    ));
}

#[test]
fn smoothing_must_be_strictly_inside_unit_interval() {
    let mut p = FollowerParams::default();
    assert_eq!(
        p.apply_override("smoothing", "1.0"),
        Err(ParamError::SmoothingOutOfRange(1.0))
    );
    assert_eq!(
        p.apply_override("smoothing", "0"),
        Err(ParamError::SmoothingOutOfRange(0.0))
    );
    assert!(p.apply_override("smoothing", "NaN").is_err());
    assert_eq!(p.smoothing, 0.15);

    p.apply_override("smoothing", "0.3").unwrap();
    let mut f = PointerFollower::new(p);
    f.on_pointer_move(100.0, 0.0);
    assert!((f.tick().ring.x - 30.0).abs() < 1e-4);
}

#[test]
fn empty_radius_range_is_invalid() {
    let params = FieldParams {
        radius_min: 3.0,
        radius_max: 3.0,
        ..FieldParams::default()
    };
    assert_eq!(
        params.validate(),
        Err(ParamError::EmptyRadiusRange { min: 3.0, max: 3.0 })
    );
}

#[test]
fn from_overrides_applies_valid_and_reports_invalid() {
    let attrs: HashMap<&str, &str> = [
        ("density-divisor", "30000"),
        ("link-alpha", "0.4"),
        ("smoothing", "2"),
    ]
    .into_iter()
    .collect();
    let (params, rejected) = EffectParams::from_overrides(|k| attrs.get(k).map(|v| v.to_string()));

    assert_eq!(params.field.density_divisor, 30_000.0);
    assert_eq!(params.field.link_max_alpha, 0.4);
    assert_eq!(params.field.link_distance, LINK_DISTANCE);
    assert_eq!(params.follower, FollowerParams::default());
    assert_eq!(rejected, vec![ParamError::SmoothingOutOfRange(2.0)]);
}

#[test]
fn from_overrides_without_attributes_is_default() {
    let (params, rejected) = EffectParams::from_overrides(|_| None);
    assert_eq!(params, EffectParams::default());
    assert!(rejected.is_empty());
}

#[test]
fn error_messages_name_the_parameter() {
    let e = ParamError::NotPositive {
        key: "link-distance",
        value: -1.0,
    };
    assert_eq!(
        e.to_string(),
        "parameter `link-distance` must be positive and finite, got -1"
    );
}

#[test]
fn tiny_density_divisor_is_rejected() {
    let mut params = FieldParams::default();
    assert_eq!(
        params.apply_override("density-divisor", "1e-30"),
        Err(ParamError::OutOfRange {
            key: "density-divisor",
            value: 1e-30,
            min: DENSITY_DIVISOR_MIN,
            max: f32::MAX,
        })
    );
    assert!(params.apply_override("density-divisor", "1").is_err());
    assert_eq!(params.density_divisor, DENSITY_DIVISOR);

    params
        .apply_override("density-divisor", &DENSITY_DIVISOR_MIN.to_string())
        .unwrap();
    assert_eq!(params.density_divisor, DENSITY_DIVISOR_MIN);
}

#[test]
fn link_alpha_above_one_is_rejected() {
    let mut params = FieldParams::default();
    assert_eq!(
        params.apply_override("link-alpha", "5"),
        Err(ParamError::OutOfRange {
            key: "link-alpha",
            value: 5.0,
            min: 0.0,
            max: 1.0,
        })
    );
    assert_eq!(params.link_max_alpha, LINK_MAX_ALPHA);
    params.apply_override("link-alpha", "1").unwrap();
    assert_eq!(params.link_max_alpha, 1.0);
}
