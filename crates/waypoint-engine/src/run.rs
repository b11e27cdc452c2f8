use serde::{Deserialize, Serialize};
use waypoint_core::GridLocation;
use waypoint_paths::{Algorithm, Path, Solution, Trace};

use crate::reveal::Reveal;

/// How a run was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Revealed step by step; the controller stays Running until told the
    /// reveal finished.
    Full,
    /// Shown at once, e.g. while a marker is dragged.
    Instant,
}

/// Outcome of one controller run, owned by whoever asked for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub algorithm: Algorithm,
    pub mode: RunMode,
    pub start: GridLocation,
    pub end: GridLocation,
    /// Nodes in the order they were visited.
    pub visited: Trace,
    /// Start to end, both included; empty if `end` was unreachable.
    pub path: Path,
}

impl RunResult {
    pub(crate) fn new(
        algorithm: Algorithm,
        mode: RunMode,
        start: GridLocation,
        end: GridLocation,
        solution: Solution,
    ) -> Self {
        Self {
            algorithm,
            mode,
            start,
            end,
            visited: solution.trace,
            path: solution.path,
        }
    }

    /// Whether a path to `end` was found.
    #[inline]
    pub fn reached(&self) -> bool {
        !self.path.is_empty()
    }

    /// Reveal events: every visited node, then every path node. Each call
    /// starts from the beginning.
    pub fn reveal(&self) -> Reveal<'_> {
        Reveal::new(&self.visited, &self.path)
    }
}
