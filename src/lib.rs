use glam::DVec3;

pub use crate::window::TrailWindow;

pub mod animate;
pub mod plot;
pub mod reader;
mod window;

/// Anything that can go wrong between opening a log and writing the last
/// output file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A malformed line in a trajectory log. `line` is 1-based.
    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    /// The log parsed fine but contains no `Run:` markers at all.
    #[error("log contains no runs")]
    NoRuns,
    /// A renderer was handed a trajectory without any samples.
    #[error("trajectory holds no samples")]
    Empty,
    #[error("drawing failed: {0}")]
    Render(String),
}

/// The ways a single log line can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("data line appears before any `Run:` marker")]
    MissingRunMarker,
    #[error("expected 4 fields `time x y z`, found {found}")]
    FieldCount { found: usize },
    #[error("`{token}` is not a number")]
    BadFloat { token: String },
    #[error("`Run:` marker without a valid run id")]
    BadRunId,
}

/// One simulation run: a chronological sequence of timed 3D samples.
///
/// `times` and `positions` are indexed in lock-step, so sample `i` is
/// `(times[i], positions[i])`. The run id is descriptive metadata; the order
/// of trajectories in a parsed log is authoritative, and run ids are not
/// required to be unique.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Trajectory {
    pub run: u32,
    /// Sample times, in the time unit of the log.
    pub times: Vec<f64>,
    pub positions: Vec<DVec3>,
}

impl Trajectory {
    pub fn new(run: u32) -> Self {
        Self {
            run,
            ..Default::default()
        }
    }

    pub(crate) fn push(&mut self, time: f64, position: DVec3) {
        self.times.push(time);
        self.positions.push(position);
    }

    /// The number of samples in this run.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn xs<'t>(&'t self) -> impl Iterator<Item = f64> + 't {
        self.positions.iter().map(|p| p.x)
    }

    pub fn ys<'t>(&'t self) -> impl Iterator<Item = f64> + 't {
        self.positions.iter().map(|p| p.y)
    }

    pub fn zs<'t>(&'t self) -> impl Iterator<Item = f64> + 't {
        self.positions.iter().map(|p| p.z)
    }
}
