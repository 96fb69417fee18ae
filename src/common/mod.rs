//! Common utilities and types for joint smoothing

/// Common types and utilities used across the codebase
pub mod types {
    use nalgebra::{Vector2, Vector3};

    /// A 3D joint position
    pub type Point3D = Vector3<f64>;

    /// A 2D direction or relative vector
    pub type Point2D = Vector2<f64>;

    /// Returns true when every component is a finite number
    pub fn is_finite3(p: &Point3D) -> bool {
        p.iter().all(|c| c.is_finite())
    }
}
