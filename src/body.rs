use crate::error::{Result, SimError};
use crate::vector::Vector2;

/// A point mass in the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Position vector.
    pub pos: Vector2,
    /// Velocity vector.
    pub vel: Vector2,
    /// Mass of the body, fixed at construction.
    mass: f32,
}

impl Body {
    /// Smallest accepted mass.
    ///
    /// The force law divides by the cube of a distance floored at half the
    /// combined mass. Below this bound that cube leaves the normal f32 range
    /// and its reciprocal is no longer finite.
    pub const MIN_MASS: f32 = 1e-12;

    /// Creates a new Body with the given properties.
    /// Fails unless `mass` is finite and at least [`Body::MIN_MASS`].
    pub fn new(pos: Vector2, vel: Vector2, mass: f32) -> Result<Self> {
        if !mass.is_finite() || mass < Self::MIN_MASS {
            return Err(SimError::InvalidMass(mass));
        }
        Ok(Self { pos, vel, mass })
    }

    /// Creates a body at rest.
    pub fn at_rest(pos: Vector2, mass: f32) -> Result<Self> {
        Self::new(pos, Vector2::ZERO, mass)
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Advances the position by the current velocity over `dt`.
    #[inline]
    pub fn drift(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}
