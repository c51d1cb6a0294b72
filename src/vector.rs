use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use ultraviolet::Vec2;

/// A 2D vector used for positions, velocities and accumulated forces.
///
/// Wraps [`ultraviolet::Vec2`] but adds the guarantees the integrators rely on:
/// scalar division by zero panics instead of producing infinities, and equality
/// is epsilon-tolerant.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector2(Vec2);

impl Vector2 {
    /// Tolerance used by `==`.
    pub const EPSILON: f32 = 1e-5;

    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2 { x, y })
    }

    /// Both components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.0.x = x;
        self.0.y = y;
    }

    /// True if both components differ by at most `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x() - other.x()).abs() <= epsilon && (self.y() - other.y()).abs() <= epsilon
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.0.mag()
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.0.mag_sq()
    }

    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.0.dot(other.0)
    }

    pub fn abs_dot(&self, other: Self) -> f32 {
        self.dot(other).abs()
    }

    pub fn distance(a: Self, b: Self) -> f32 {
        (b - a).length()
    }

    pub fn distance_squared(a: Self, b: Self) -> f32 {
        (b - a).length_squared()
    }

    /// Unit vector in the same direction.
    ///
    /// # Panics
    /// Panics on the zero vector.
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// `v / sqrt(|v|)`, kept for reproducing legacy snapshot files bit for bit.
    ///
    /// The result is not a unit vector. The integrators never call this.
    pub fn normalized_legacy(&self) -> Self {
        *self / self.length().sqrt()
    }

    pub fn min_component(&self) -> f32 {
        self.x().min(self.y())
    }

    pub fn max_component(&self) -> f32 {
        self.x().max(self.y())
    }

    pub fn min_abs_component(&self) -> f32 {
        self.x().abs().min(self.y().abs())
    }

    pub fn max_abs_component(&self) -> f32 {
        self.x().abs().max(self.y().abs())
    }

    /// Component-wise minimum.
    pub fn min(a: Self, b: Self) -> Self {
        Self(a.0.min_by_component(b.0))
    }

    /// Component-wise maximum.
    pub fn max(a: Self, b: Self) -> Self {
        Self(a.0.max_by_component(b.0))
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        v.0
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Self::EPSILON)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

/// Component-wise product.
impl Mul for Vector2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        assert!(rhs != 0.0, "Vector2 divided by zero");
        self * (1.0 / rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

impl MulAssign for Vector2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
