use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::DVec3;

use crate::{Error, ParseErrorKind, Trajectory};

/// Read all trajectories from a log file at `path`.
///
/// See [`parse_trajectories`] for the format.
pub fn read_trajectories<P: AsRef<Path>>(path: P) -> Result<Vec<Trajectory>, Error> {
    let file = File::open(path)?;
    parse_trajectories(BufReader::new(file))
}

/// Parse a trajectory log.
///
/// The first line is a header and is discarded. Every line after that is
/// either a run marker (the token `Run:` followed by a non-negative integer
/// id) or a data line of four whitespace-separated floats, `time x y z`,
/// belonging to the most recently opened run.
///
/// Any line that fits neither shape is a fatal [`Error::Parse`] carrying the
/// 1-based line number. Lines are never silently skipped.
pub fn parse_trajectories<R: BufRead>(reader: R) -> Result<Vec<Trajectory>, Error> {
    let mut trajectories: Vec<Trajectory> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        if lineno == 1 {
            // Header.
            continue;
        }
        if line.starts_with("Run:") {
            trajectories.push(Trajectory::new(parse_run_id(&line, lineno)?));
        } else {
            let (time, position) = parse_sample(&line, lineno)?;
            trajectories
                .last_mut()
                .ok_or(Error::Parse {
                    line: lineno,
                    kind: ParseErrorKind::MissingRunMarker,
                })?
                .push(time, position);
        }
    }
    Ok(trajectories)
}

/// Parse the run id out of a `Run: <int>` marker line.
///
/// Tokens after the id are ignored.
fn parse_run_id(line: &str, lineno: usize) -> Result<u32, Error> {
    line.split_whitespace()
        .nth(1)
        .and_then(|token| token.parse().ok())
        .ok_or(Error::Parse {
            line: lineno,
            kind: ParseErrorKind::BadRunId,
        })
}

/// Parse a `time x y z` data line.
fn parse_sample(line: &str, lineno: usize) -> Result<(f64, DVec3), Error> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[time, x, y, z] = fields.as_slice() else {
        return Err(Error::Parse {
            line: lineno,
            kind: ParseErrorKind::FieldCount {
                found: fields.len(),
            },
        });
    };
    let [time, x, y, z] = [time, x, y, z].map(|token| parse_float(token, lineno));
    Ok((time?, DVec3::new(x?, y?, z?)))
}

fn parse_float(token: &str, lineno: usize) -> Result<f64, Error> {
    token.parse().map_err(|_| Error::Parse {
        line: lineno,
        kind: ParseErrorKind::BadFloat {
            token: token.to_string(),
        },
    })
}
