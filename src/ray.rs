//! Ray representation for 4D ray marching.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a
//! semi-infinite line in 4D space along which the marcher samples the
//! distance field.

use crate::vec4::Vec4;

/// Ray in 4D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray, typically the camera position.
    pub origin: Vec4,

    /// Direction vector of the ray.
    ///
    /// The marcher interprets the distance field's estimates as arc
    /// length along the ray, so the direction must be unit length. The
    /// frame driver normalizes it once at construction.
    pub direction: Vec4,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec4, direction: Vec4) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec4 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let r = Ray::new(Vec4::new(0.0, 1.0, 2.0, 3.0), Vec4::Z);
        let p = r.at(2.5);
        assert_eq!(p, Vec4::new(0.0, 1.0, 2.0, 5.5));
    }

    #[test]
    fn test_at_zero_is_origin() {
        let origin = Vec4::new(0.0, 0.0, 0.0, -5.0);
        let r = Ray::new(origin, Vec4::Z);
        assert_eq!(r.at(0.0), origin);
    }
}
