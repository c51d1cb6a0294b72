use crate::{
    body::Body,
    error::{Result, SimError},
    utils,
    vector::Vector2,
};

use log::debug;

/// Gravitational constant and time step applied to every step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Gravitational constant `G`.
    pub gravity: f32,
    /// Simulated seconds advanced per step. Negative values run time backwards.
    pub dt: f32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            gravity: Simulation::DEFAULT_GRAVITY,
            dt: Simulation::DEFAULT_DT,
        }
    }
}

impl SimulationParameters {
    pub fn new(gravity: f32, dt: f32) -> Result<Self> {
        let params = Self { gravity, dt };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidParameter(format!(
                "gravitational constant must be finite, got {}",
                self.gravity
            )));
        }
        if !self.dt.is_finite() {
            return Err(SimError::InvalidParameter(format!(
                "time step must be finite, got {}",
                self.dt
            )));
        }
        Ok(())
    }
}

/// Distance used by the force law between bodies of mass `m1` and `m2`
/// separated by `direction`.
///
/// Floored at half the combined mass so near or coincident bodies never hit
/// the `1/r²` singularity.
#[inline]
pub fn clamped_distance(direction: Vector2, m1: f32, m2: f32) -> f32 {
    (0.5 * (m1 + m2)).max(direction.length())
}

/// Direct-summation gravity: integrates the net pull of every other body into
/// each body's velocity.
///
/// Positions are only read here, so every body sees the same start-of-step
/// snapshot. Each ordered pair is visited once, giving O(n²) work.
pub fn compute_forces(bodies: &mut [Body], gravity: f32, dt: f32) {
    for i in 0..bodies.len() {
        let p1 = bodies[i];
        let mut force = Vector2::ZERO;

        for (k, p2) in bodies.iter().enumerate() {
            if k == i {
                continue;
            }

            let direction = p2.pos - p1.pos;
            let distance = clamped_distance(direction, p1.mass(), p2.mass());

            force += direction / (distance * distance * distance) * p2.mass();
        }

        let acceleration = force * gravity;
        bodies[i].vel += acceleration * dt;
    }
}

/// Explicit Euler position update using the velocities from [`compute_forces`].
pub fn move_bodies(bodies: &mut [Body], dt: f32) {
    for body in bodies.iter_mut() {
        body.drift(dt);
    }
}

/// Owns the body collection and advances it with the direct O(n²) method.
#[derive(Clone, Debug)]
pub struct Simulation {
    /// Gravitational constant and time step.
    pub params: SimulationParameters,
    /// Number of completed steps.
    pub frame: usize,
    bodies: Vec<Body>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// Default constants.
    pub const DEFAULT_DT: f32 = 0.01;
    pub const DEFAULT_N: usize = 10;
    pub const DEFAULT_GRAVITY: f32 = 20.0;

    /// Initializes a new simulation with default parameters and a uniform field of bodies.
    pub fn new() -> Self {
        Self::with_bodies(
            utils::uniform_field(Self::DEFAULT_N, 0),
            SimulationParameters::default(),
        )
    }

    /// Initializes a new simulation with `n` randomly placed bodies.
    pub fn with_params(n: usize, seed: u64, params: SimulationParameters) -> Self {
        Self::with_bodies(utils::uniform_field(n, seed), params)
    }

    /// Initializes a new simulation with the given bodies and parameters.
    pub fn with_bodies(bodies: Vec<Body>, params: SimulationParameters) -> Self {
        Self {
            params,
            frame: 0,
            bodies,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to the bodies. The slice cannot grow or shrink, so the
    /// body count stays fixed for the run.
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn into_bodies(self) -> Vec<Body> {
        self.bodies
    }

    /// Advances the simulation by one step: velocities first, then positions.
    pub fn step(&mut self) {
        self.compute_forces();
        self.move_bodies();
        self.frame += 1;
        debug!("step {} complete ({} bodies)", self.frame, self.bodies.len());
    }

    /// Runs `iterations` steps, handing the state to `on_step` after each one.
    /// Stops at the first error returned by the callback.
    pub fn run<F>(&mut self, iterations: usize, mut on_step: F) -> Result<()>
    where
        F: FnMut(&Simulation) -> Result<()>,
    {
        for _ in 0..iterations {
            self.step();
            on_step(self)?;
        }
        Ok(())
    }

    /// Updates every body's velocity from the gravitational pull of all the others.
    pub fn compute_forces(&mut self) {
        compute_forces(&mut self.bodies, self.params.gravity, self.params.dt);
    }

    /// Updates every body's position from its current velocity.
    pub fn move_bodies(&mut self) {
        move_bodies(&mut self.bodies, self.params.dt);
    }
}
