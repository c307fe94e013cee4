//! 4D vector algebra.
//!
//! The vector lives in a Euclidean 4-space with a positive-definite inner
//! product. The first component is labelled `t` after the convention of the
//! scene it renders, but it is a genuine fourth spatial axis, not a
//! Minkowski time coordinate.

/// Immutable 4-component vector with components (t, x, y, z).
///
/// Every operation produces a new value; nothing mutates in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    /// Fourth-axis component (the "time" label of the scene convention).
    pub t: f32,
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec4 {
    /// Zero vector.
    pub const ZERO: Self = Self { t: 0.0, x: 0.0, y: 0.0, z: 0.0 };
    /// Unit vector along the t axis.
    pub const T: Self = Self { t: 1.0, x: 0.0, y: 0.0, z: 0.0 };
    /// Unit vector along the x axis.
    pub const X: Self = Self { t: 0.0, x: 1.0, y: 0.0, z: 0.0 };
    /// Unit vector along the y axis.
    pub const Y: Self = Self { t: 0.0, x: 0.0, y: 1.0, z: 0.0 };
    /// Unit vector along the z axis.
    pub const Z: Self = Self { t: 0.0, x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new vector from its four components.
    #[inline]
    pub const fn new(t: f32, x: f32, y: f32, z: f32) -> Self {
        Self { t, x, y, z }
    }

    /// Euclidean dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.t * other.t + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length (avoids the square root).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Length of the spatial (x, y, z) part, ignoring the t component.
    ///
    /// Used by the equirectangular projection, which maps only the 3D
    /// position of a point onto the sphere's surface.
    #[inline]
    pub fn xyz_length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalize to unit length, or `None` for a degenerate vector.
    ///
    /// Normalization is undefined when the length is zero; rather than
    /// dividing through and propagating NaN/Inf, this returns `None` for
    /// any vector whose length is not strictly positive and finite.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self * (1.0 / len))
        } else {
            None
        }
    }
}

// Operator overloads

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.t + other.t,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.t - other.t,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl std::ops::Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.t * scalar,
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.t, -self.x, -self.y, -self.z)
    }
}
