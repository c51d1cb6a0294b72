//! Snapshot files: one body per line as `mass, x, y`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::{
    body::Body,
    error::{Result, SimError},
    vector::Vector2,
};

/// Path of the snapshot written after `iteration`: `dir/nbody_{iteration}.txt`.
pub fn snapshot_path(dir: impl AsRef<Path>, iteration: usize) -> PathBuf {
    dir.as_ref().join(format!("nbody_{iteration}.txt"))
}

pub fn write_bodies<W: Write>(mut writer: W, bodies: &[Body]) -> Result<()> {
    for body in bodies {
        writeln!(writer, "{}, {}, {}", body.mass(), body.pos.x(), body.pos.y())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `bodies` to a new file at `path`, replacing any existing one.
pub fn persist_positions(path: impl AsRef<Path>, bodies: &[Body]) -> Result<()> {
    let path = path.as_ref();
    info!("writing {} bodies to {}", bodies.len(), path.display());

    let file = File::create(path)?;
    write_bodies(BufWriter::new(file), bodies)
}

/// Reads bodies back from the snapshot format. Velocities are not stored, so
/// every body starts at rest. Blank lines are skipped.
pub fn read_bodies<R: BufRead>(reader: R) -> Result<Vec<Body>> {
    let mut bodies = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields = line
            .split(',')
            .map(|field| {
                field.trim().parse::<f32>().map_err(|err| SimError::Parse {
                    line: line_no,
                    message: format!("`{}`: {err}", field.trim()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let &[mass, x, y] = fields.as_slice() else {
            return Err(SimError::Parse {
                line: line_no,
                message: format!("expected 3 fields (mass, x, y), found {}", fields.len()),
            });
        };

        let body = Body::at_rest(Vector2::new(x, y), mass).map_err(|err| SimError::Parse {
            line: line_no,
            message: err.to_string(),
        })?;
        bodies.push(body);
    }

    Ok(bodies)
}

pub fn load_bodies(path: impl AsRef<Path>) -> Result<Vec<Body>> {
    let file = File::open(path)?;
    read_bodies(BufReader::new(file))
}
