//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

use proptest::prelude::*;

/// Test that mesh functions are accessible via absolute path.
#[test]
fn test_mesh_module_exports() {
    use pricer_core::math::mesh::{uniform, MAX_MESH_POINTS};
    use pricer_core::math::uniform as reexported;

    let a = uniform(10.0_f64, 50.0, 1.0).unwrap();
    let b = reexported(10.0_f64, 50.0, 1.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 41);
    assert!(MAX_MESH_POINTS > a.len());
}

/// A range too wide to allocate is refused instead of aborting.
#[test]
fn test_oversized_mesh_is_an_error() {
    use pricer_core::math::mesh::uniform;
    use pricer_core::types::{MeshError, PricingError};

    let err = uniform(0.0_f64, 1e18, 1.0).unwrap_err();
    assert!(matches!(err, MeshError::TooManyPoints { .. }));

    match PricingError::from(err) {
        PricingError::InvalidInput(msg) => assert!(msg.contains("Mesh too large")),
        _ => panic!("Expected InvalidInput variant"),
    }
}

/// Test that trait module is accessible via absolute path.
#[test]
fn test_traits_module_exports() {
    use pricer_core::traits::priceable::Priceable;
    use pricer_core::traits::Float;

    struct Digital {
        strike: f64,
    }

    impl Priceable for Digital {
        fn price(&self, spot: f64) -> f64 {
            if spot > self.strike {
                1.0
            } else {
                0.0
            }
        }
    }

    fn halve<T: Float>(x: T) -> T {
        x / (T::one() + T::one())
    }

    let d = Digital { strike: 100.0 };
    assert_eq!(d.price(101.0), 1.0);
    assert_eq!(halve(d.price(101.0)), 0.5);
}

/// Test that types are re-exported at the module level.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::{MeshError, PricingError};
    use pricer_core::types::{OptionType, PricingError as Reexported};

    let err: Reexported = MeshError::InvalidStep { step: 0.0 }.into();
    assert!(matches!(err, PricingError::InvalidInput(_)));
    assert_eq!(OptionType::Put.code(), "P");
}

proptest! {
    /// Every generated point lies inside [start, end] and spacing is uniform.
    #[test]
    fn prop_uniform_mesh_within_bounds(
        start in -100.0_f64..100.0,
        width in 0.0_f64..50.0,
        h in 0.01_f64..5.0,
    ) {
        let end = start + width;
        let mesh = pricer_core::math::mesh::uniform(start, end, h).unwrap();
        prop_assert!(!mesh.is_empty());
        prop_assert_eq!(mesh[0], start);
        for s in &mesh {
            prop_assert!(*s >= start && *s <= end + 1e-9 * h.max(1.0) * 10.0);
        }
        for w in mesh.windows(2) {
            prop_assert!(((w[1] - w[0]) - h).abs() < 1e-9 * (1.0 + start.abs() + end.abs()));
        }
    }
}
