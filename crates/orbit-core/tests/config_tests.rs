// Host-side tests for configuration defaults and validation.

use orbit_core::*;

#[test]
fn default_config_is_valid() {
    let config = OrbitConfig::default();
    assert!(config.validate().is_ok());
    for name in ["outer", "middle", "inner"] {
        assert!(config.has_ring(name), "missing ring {name}");
    }
}

#[test]
fn default_rings_are_nested() {
    let config = OrbitConfig::default();
    let outer = config.rings["outer"];
    let middle = config.rings["middle"];
    let inner = config.rings["inner"];
    assert!(outer.radius > middle.radius && middle.radius > inner.radius);
    assert!(outer.radius <= 1.0);
}

#[test]
fn ring_lookup_falls_back() {
    let config = OrbitConfig::default();
    assert_eq!(config.ring("nope"), config.ring("outer"));
    assert_eq!(config.resolve_ring_name(Some("nope")), "outer");
    assert_eq!(config.resolve_ring_name(None), "outer");
    assert_eq!(config.resolve_ring_name(Some("inner")), "inner");
}

#[test]
fn spin_factor_defaults_to_one() {
    assert_eq!(RingConfig::new(0.5, 0.1).spin_factor(), 1.0);
    assert_eq!(
        RingConfig::new(0.5, 0.1).with_drag_multiplier(0.5).spin_factor(),
        0.5
    );
}

#[test]
fn missing_fallback_ring_is_rejected() {
    let config = OrbitConfig::empty("outer").with_ring("inner", RingConfig::new(0.2, 0.1));
    assert_eq!(
        config.validate(),
        Err(OrbitError::UnknownFallbackRing("outer".to_string()))
    );
}

#[test]
fn bad_ring_values_are_rejected() {
    let negative = OrbitConfig::default().with_ring("outer", RingConfig::new(-0.1, 0.1));
    assert!(matches!(
        negative.validate(),
        Err(OrbitError::InvalidRing { .. })
    ));
    let nan_speed = OrbitConfig::default().with_ring("outer", RingConfig::new(0.4, f64::NAN));
    assert!(matches!(
        nan_speed.validate(),
        Err(OrbitError::InvalidRing { .. })
    ));
    let reversed = OrbitConfig::default().with_ring("middle", RingConfig::new(0.3, -0.1));
    assert!(matches!(
        reversed.validate(),
        Err(OrbitError::InvalidRing { ref name, .. }) if name == "middle"
    ));
    let still = OrbitConfig::default().with_ring("middle", RingConfig::new(0.3, 0.0));
    assert!(still.validate().is_ok());
}

#[test]
fn inertia_decay_must_be_a_fraction() {
    for decay in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
        let config = OrbitConfig::default().with_inertia_decay(decay);
        assert!(
            matches!(
                config.validate(),
                Err(OrbitError::InvalidParameter {
                    name: "inertia_decay",
                    ..
                })
            ),
            "decay {decay} accepted"
        );
    }
    assert!(OrbitConfig::default()
        .with_inertia_decay(0.5)
        .validate()
        .is_ok());
}

#[test]
fn drag_sensitivity_must_be_positive() {
    let config = OrbitConfig::default().with_drag_sensitivity(0.0);
    assert!(config.validate().is_err());
}

#[test]
fn errors_render_readable_messages() {
    let msg = OrbitError::InvalidParameter {
        name: "inertia_decay",
        value: 2.0,
    }
    .to_string();
    assert!(msg.contains("inertia_decay"));
    assert_eq!(OrbitError::NoItems.to_string(), "no orbit items to animate");
}
