//! Error types for the simulator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid body mass {0}: mass must be finite and at least {min}", min = crate::body::Body::MIN_MASS)]
    InvalidMass(f32),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, SimError>;
