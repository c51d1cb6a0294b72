//! Run configuration loaded from YAML.
//!
//! Every field is optional and falls back to the defaults of [`Simulation`]:
//!
//! ```yaml
//! bodies: 10        # number of randomly placed bodies
//! iterations: 1     # steps to run
//! dt: 0.01          # time step
//! gravity: 20.0     # gravitational constant
//! seed: 0           # initial-condition seed
//! output: "."       # directory receiving nbody_<i>.txt snapshots
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    error::Result,
    simulation::{Simulation, SimulationParameters},
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub bodies: usize,
    pub iterations: usize,
    pub dt: f32,
    pub gravity: f32,
    pub seed: u64,
    pub output: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bodies: Simulation::DEFAULT_N,
            iterations: 1,
            dt: Simulation::DEFAULT_DT,
            gravity: Simulation::DEFAULT_GRAVITY,
            seed: 0,
            output: PathBuf::from("."),
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(BufReader::new(file))?)
    }

    /// Checked physical parameters for this run.
    pub fn params(&self) -> Result<SimulationParameters> {
        SimulationParameters::new(self.gravity, self.dt)
    }

    pub fn validate(&self) -> Result<()> {
        self.params().map(|_| ())
    }
}
