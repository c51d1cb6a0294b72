use nbody_direct::{Simulation, SimulationConfig, persist, utils};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

/// Direct-summation 2D n-body simulator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file with run settings; flags below override it
    #[arg(short = 'f', long)]
    config: Option<PathBuf>,

    /// Number of randomly placed bodies
    #[arg(short, long)]
    bodies: Option<usize>,

    /// Number of steps to run
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Time step
    #[arg(short, long, allow_negative_numbers = true)]
    dt: Option<f32>,

    /// Gravitational constant
    #[arg(short, long, allow_negative_numbers = true)]
    gravity: Option<f32>,

    /// Seed for the initial conditions
    #[arg(long)]
    seed: Option<u64>,

    /// Directory receiving nbody_<i>.txt snapshots
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Start from a snapshot file instead of random bodies
    #[arg(long)]
    input: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<(SimulationConfig, Option<PathBuf>)> {
        let mut cfg = match &self.config {
            Some(path) => SimulationConfig::from_yaml_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(bodies) = self.bodies {
            cfg.bodies = bodies;
        }
        if let Some(iterations) = self.iterations {
            cfg.iterations = iterations;
        }
        if let Some(dt) = self.dt {
            cfg.dt = dt;
        }
        if let Some(gravity) = self.gravity {
            cfg.gravity = gravity;
        }
        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
        if let Some(output) = self.output {
            cfg.output = output;
        }

        Ok((cfg, self.input))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let (cfg, input) = Args::parse().into_config()?;
    let params = cfg.params()?;

    let bodies = match &input {
        Some(path) => persist::load_bodies(path)
            .with_context(|| format!("failed to read bodies from {}", path.display()))?,
        None => utils::uniform_field(cfg.bodies, cfg.seed),
    };

    std::fs::create_dir_all(&cfg.output)
        .with_context(|| format!("failed to create {}", cfg.output.display()))?;

    info!(
        "simulating {} bodies for {} steps (G = {}, dt = {})",
        bodies.len(),
        cfg.iterations,
        params.gravity,
        params.dt
    );

    let mut sim = Simulation::with_bodies(bodies, params);
    sim.run(cfg.iterations, |sim| {
        persist::persist_positions(persist::snapshot_path(&cfg.output, sim.frame - 1), sim.bodies())
    })
    .context("simulation aborted")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_without_config_override_defaults() {
        let args = Args::try_parse_from(["nbody", "-g", "-1", "-d", "-0.5", "-b", "5", "-o", "out"]).unwrap();
        let (cfg, input) = args.into_config().unwrap();

        assert_eq!(cfg.gravity, -1.0);
        assert_eq!(cfg.dt, -0.5);
        assert_eq!(cfg.bodies, 5);
        assert_eq!(cfg.output, PathBuf::from("out"));
        assert_eq!(cfg.iterations, SimulationConfig::default().iterations);
        assert!(input.is_none());
    }

    #[test]
    fn flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("nbody-args-{}.yaml", std::process::id()));
        std::fs::write(&path, "bodies: 64\niterations: 3\ngravity: 2.0\n").unwrap();

        let config = path.to_str().unwrap();
        let args = Args::try_parse_from([
            "nbody", "-f", config, "--gravity", "7.5", "--input", "start.txt",
        ])
        .unwrap();
        let (cfg, input) = args.into_config().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(cfg.bodies, 64);
        assert_eq!(cfg.iterations, 3);
        assert_eq!(cfg.gravity, 7.5);
        assert_eq!(cfg.dt, SimulationConfig::default().dt);
        assert_eq!(input, Some(PathBuf::from("start.txt")));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args::try_parse_from(["nbody", "-f", "/nonexistent/nbody.yaml"]).unwrap();
        assert!(args.into_config().is_err());
    }
}
