//! Single-step linear blend of 2D vectors

use crate::common::types::Point2D;

/// Blend `previous` toward `current` by `factor`
///
/// Returns `(1 - factor) * previous + factor * current`. A factor of 0 keeps
/// the previous vector and 1 takes the current one. Factors outside [0, 1]
/// are accepted and extrapolate past either end, overshooting the inputs.
pub fn blend(previous: Point2D, current: Point2D, factor: f64) -> Point2D {
    previous * (1.0 - factor) + current * factor
}
