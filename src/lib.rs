pub mod body;
pub mod config;
pub mod error;
pub mod persist;
pub mod simulation;
pub mod utils;
pub mod vector;

pub use body::Body;
pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use simulation::{Simulation, SimulationParameters, compute_forces, move_bodies};
pub use vector::Vector2;
