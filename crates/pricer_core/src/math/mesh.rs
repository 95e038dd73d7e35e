//! Uniform mesh generation.
//!
//! Produces ascending, equally spaced points used to sweep prices and
//! Greeks over a range of spot prices (or any other scalar parameter).

use crate::traits::Float;

use crate::types::MeshError;

/// Slack (in units of `h`) allowed when deciding whether `end` is on the mesh.
const ENDPOINT_TOLERANCE: f64 = 1e-9;

/// Largest mesh [`uniform`] will allocate.
pub const MAX_MESH_POINTS: usize = 10_000_000;

/// Generates `start, start + h, ..., end` inclusive of `end` within
/// floating-point tolerance.
///
/// Points are computed as `start + i·h` rather than by repeated addition, so
/// no rounding error accumulates along the mesh.
///
/// # Errors
/// - `MeshError::InvalidStep` if `h <= 0` or `h` is not finite
/// - `MeshError::InvalidBounds` if either bound is not finite
/// - `MeshError::EmptyRange` if `end < start`
/// - `MeshError::TooManyPoints` if the mesh would exceed [`MAX_MESH_POINTS`]
///
/// # Examples
/// ```
/// use pricer_core::math::mesh::uniform;
///
/// let mesh = uniform(10.0_f64, 50.0, 1.0).unwrap();
/// assert_eq!(mesh.len(), 41);
/// assert_eq!(mesh[0], 10.0);
/// assert_eq!(mesh[40], 50.0);
/// ```
pub fn uniform<T: Float>(start: T, end: T, h: T) -> Result<Vec<T>, MeshError> {
    let as_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);

    if !(h.is_finite() && h > T::zero()) {
        return Err(MeshError::InvalidStep { step: as_f64(h) });
    }
    if !(start.is_finite() && end.is_finite()) {
        return Err(MeshError::InvalidBounds {
            start: as_f64(start),
            end: as_f64(end),
        });
    }
    if end < start {
        return Err(MeshError::EmptyRange {
            start: as_f64(start),
            end: as_f64(end),
        });
    }

    let tolerance = T::from(ENDPOINT_TOLERANCE).unwrap_or_else(T::epsilon);
    let intervals = as_f64(((end - start) / h + tolerance).floor());

    // Checked in f64, before any allocation.
    if !(intervals < MAX_MESH_POINTS as f64) {
        return Err(MeshError::TooManyPoints {
            points: intervals + 1.0,
            max: MAX_MESH_POINTS,
        });
    }
    let n = intervals as usize;

    Ok((0..=n)
        .map(|i| start + T::from(i).unwrap_or_else(T::nan) * h)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Shape tests
    // ==========================================================

    #[test]
    fn test_integer_mesh_has_41_points() {
        let mesh = uniform(10.0_f64, 50.0, 1.0).unwrap();
        assert_eq!(mesh.len(), 41);
        for (i, s) in mesh.iter().enumerate() {
            assert_eq!(*s, 10.0 + i as f64);
        }
    }

    #[test]
    fn test_fractional_step_includes_endpoint() {
        // 0.1 is not representable; repeated addition would stop at 0.9999...
        let mesh = uniform(0.0_f64, 1.0, 0.1).unwrap();
        assert_eq!(mesh.len(), 11);
        assert_relative_eq!(*mesh.last().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_step_not_dividing_range() {
        let mesh = uniform(0.0_f64, 1.0, 0.3).unwrap();
        assert_eq!(mesh.len(), 4);
        assert!(*mesh.last().unwrap() <= 1.0);
    }

    #[test]
    fn test_single_point_mesh() {
        let mesh = uniform(100.0_f64, 100.0, 5.0).unwrap();
        assert_eq!(mesh, vec![100.0]);
    }

    #[test]
    fn test_mesh_is_ascending() {
        let mesh = uniform(80.0_f64, 120.0, 0.25).unwrap();
        assert!(mesh.windows(2).all(|w| w[1] > w[0]));
    }

    // ==========================================================
    // Error tests
    // ==========================================================

    #[test]
    fn test_rejects_non_positive_step() {
        assert!(matches!(
            uniform(0.0_f64, 1.0, 0.0),
            Err(MeshError::InvalidStep { .. })
        ));
        assert!(matches!(
            uniform(0.0_f64, 1.0, -0.5),
            Err(MeshError::InvalidStep { .. })
        ));
        assert!(matches!(
            uniform(0.0_f64, 1.0, f64::NAN),
            Err(MeshError::InvalidStep { .. })
        ));
    }

    #[test]
    fn test_rejects_reversed_range() {
        match uniform(50.0_f64, 10.0, 1.0) {
            Err(MeshError::EmptyRange { start, end }) => {
                assert_eq!(start, 50.0);
                assert_eq!(end, 10.0);
            }
            other => panic!("Expected EmptyRange, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_infinite_bounds() {
        assert!(matches!(
            uniform(0.0_f64, f64::INFINITY, 1.0),
            Err(MeshError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_mesh() {
        match uniform(0.0_f64, 1e18, 1.0) {
            Err(MeshError::TooManyPoints { points, max }) => {
                assert_eq!(max, MAX_MESH_POINTS);
                assert!(points > 1e17);
            }
            other => panic!("Expected TooManyPoints, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_allowed_mesh_is_accepted() {
        let last = (MAX_MESH_POINTS - 1) as f64;
        assert!(matches!(
            uniform(0.0_f64, last + 1.0, 1.0),
            Err(MeshError::TooManyPoints { .. })
        ));
        assert_eq!(uniform(0.0_f64, last, 1.0).unwrap().len(), MAX_MESH_POINTS);
    }

    #[test]
    fn test_f32_compatibility() {
        let mesh = uniform(1.0_f32, 2.0, 0.5).unwrap();
        assert_eq!(mesh, vec![1.0_f32, 1.5, 2.0]);
    }
}
