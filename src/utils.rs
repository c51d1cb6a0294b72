use crate::{body::Body, vector::Vector2};

/// Width of the square field bodies are scattered over, centred on the origin.
pub const FIELD_WIDTH: f32 = 1000.0;
pub const FIELD_HEIGHT: f32 = 1000.0;

/// Lightest body `uniform_field` will create.
pub const MIN_BODY_MASS: f32 = 2.5;
/// Spread added on top of `MIN_BODY_MASS`.
pub const MAX_BODY_MASS_VARIANCE: f32 = 5.0;

/// Generates `n` bodies at rest, placed uniformly over the field.
/// - Positions lie in `[-FIELD_WIDTH / 2, FIELD_WIDTH / 2)` (same for height).
/// - Masses lie in `[MIN_BODY_MASS, MIN_BODY_MASS + MAX_BODY_MASS_VARIANCE)`.
///
/// The same `seed` always yields the same bodies.
pub fn uniform_field(n: usize, seed: u64) -> Vec<Body> {
    let mut rng = fastrand::Rng::with_seed(seed);

    (0..n)
        .map(|_| {
            let x = rng.f32() * FIELD_WIDTH - FIELD_WIDTH * 0.5;
            let y = rng.f32() * FIELD_HEIGHT - FIELD_HEIGHT * 0.5;
            let mass = rng.f32() * MAX_BODY_MASS_VARIANCE + MIN_BODY_MASS;

            Body::at_rest(Vector2::new(x, y), mass)
                .expect("generated mass is always >= MIN_BODY_MASS")
        })
        .collect()
}
