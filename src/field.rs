//! Signed-distance fields in 4D.
//!
//! Defines the DistanceField trait the marcher samples and the single
//! primitive field of the scene, a hypersphere. Any Lipschitz-1 function
//! from 4-space to a signed distance can stand in for the sphere without
//! touching the marcher.

use crate::vec4::Vec4;

/// A signed-distance field over 4D space.
///
/// Implementations return a value whose magnitude is a lower bound on the
/// distance to the nearest surface: negative inside, zero on the surface,
/// positive outside. Must be thread-safe (Sync + Send) for the parallel
/// render loop.
pub trait DistanceField: Sync + Send {
    /// Signed distance from `p` to the nearest surface of the field.
    fn distance(&self, p: Vec4) -> f32;

    /// Estimate the outward unit normal at a point on the surface.
    ///
    /// Central finite differences along each of the four axes with step
    /// `eps`, eight field evaluations in total. Only meaningful when `p`
    /// lies on (or extremely near) the surface and the field is locally
    /// smooth there. Returns `None` when the sampled gradient
    /// degenerates and cannot be normalized.
    fn normal(&self, p: Vec4, eps: f32) -> Option<Vec4> {
        let gradient = Vec4::new(
            self.distance(p + Vec4::T * eps) - self.distance(p - Vec4::T * eps),
            self.distance(p + Vec4::X * eps) - self.distance(p - Vec4::X * eps),
            self.distance(p + Vec4::Y * eps) - self.distance(p - Vec4::Y * eps),
            self.distance(p + Vec4::Z * eps) - self.distance(p - Vec4::Z * eps),
        );
        gradient.try_normalize()
    }
}

/// Hypersphere defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct HyperSphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec4,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,
}

impl HyperSphere {
    /// Create a new hypersphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec4, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }
}

impl DistanceField for HyperSphere {
    fn distance(&self, p: Vec4) -> f32 {
        (p - self.center).length() - self.radius
    }
}
