//! Math utilities and types
//!
//! Provides the vector types used by the collision code plus the handful of
//! helpers needed to move between world space and ellipsoid space.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Lengths below this are treated as zero when normalizing
pub const NORMALIZE_EPSILON: f32 = 1.0e-12;

/// Extension trait for Vec3 with collision-specific conveniences
pub trait Vec3Ext {
    /// Convert a world-space vector into ellipsoid space (component-wise divide by radius)
    fn to_ellipsoid_space(self, radius: &Vec3) -> Vec3;

    /// Convert an ellipsoid-space vector back into world space (component-wise multiply by radius)
    fn to_world_space(self, radius: &Vec3) -> Vec3;

    /// Unit vector in the same direction, or zero for a zero-length vector
    fn normalize_or_zero(self) -> Vec3;

    /// Vector in the same direction with the given length (zero stays zero)
    fn with_length(self, length: f32) -> Vec3;

    /// Copy of this vector with the vertical (Y) component cleared
    fn horizontal(self) -> Vec3;
}

impl Vec3Ext for Vec3 {
    fn to_ellipsoid_space(self, radius: &Vec3) -> Vec3 {
        self.component_div(radius)
    }

    fn to_world_space(self, radius: &Vec3) -> Vec3 {
        self.component_mul(radius)
    }

    fn normalize_or_zero(self) -> Vec3 {
        self.try_normalize(NORMALIZE_EPSILON).unwrap_or_else(Vec3::zeros)
    }

    fn with_length(self, length: f32) -> Vec3 {
        self.normalize_or_zero() * length
    }

    fn horizontal(self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.z)
    }
}

/// Math utility functions
pub mod utils {
    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees.to_radians()
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }
}
