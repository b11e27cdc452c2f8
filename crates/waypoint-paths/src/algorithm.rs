use std::fmt;
use std::str::FromStr;

use waypoint_core::{Grid, GridLocation};

use crate::backtrack::backtrack;
use crate::best_first::{KeyRule, SortedFrontier};
use crate::bfs::QueueFrontier;
use crate::search::search;
use crate::{Path, Trace};

/// The search variants, selected by their short names
/// `bfs`, `dijkstra`, `gbfs` and `astar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Breadth-first search over a plain queue.
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    Bfs,
    /// Uniform-cost search. Every step costs 1: cell weights are not
    /// consulted, unlike [`AStar`](Algorithm::AStar).
    #[cfg_attr(feature = "serde", serde(rename = "dijkstra"))]
    Dijkstra,
    /// Greedy best-first search ordered by the Manhattan estimate alone.
    #[cfg_attr(feature = "serde", serde(rename = "gbfs"))]
    GreedyBestFirst,
    /// Weighted cost plus Manhattan estimate.
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
    ];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::GreedyBestFirst => "gbfs",
            Self::AStar => "astar",
        }
    }

    /// Human-readable name for pickers and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "breadth-first search",
            Self::Dijkstra => "Dijkstra's algorithm",
            Self::GreedyBestFirst => "greedy best-first search",
            Self::AStar => "A*",
        }
    }

    /// Whether the variant reads cell weights.
    pub const fn uses_weights(self) -> bool {
        matches!(self, Self::AStar)
    }

    /// Search `grid` from `start` to `end` and return the visitation trace.
    ///
    /// The grid must be fresh: the run writes `distance`, `visited` and
    /// `prev` into it. Identical inputs always produce identical traces.
    pub fn run(self, grid: &mut Grid, start: GridLocation, end: GridLocation) -> Trace {
        match self {
            Self::Bfs => search(grid, start, end, &mut QueueFrontier::new()),
            Self::Dijkstra => search(grid, start, end, &mut SortedFrontier::new(KeyRule::UnitCost)),
            Self::GreedyBestFirst => {
                search(grid, start, end, &mut SortedFrontier::new(KeyRule::Heuristic))
            }
            Self::AStar => search(
                grid,
                start,
                end,
                &mut SortedFrontier::new(KeyRule::CostPlusHeuristic),
            ),
        }
    }

    /// [`run`](Algorithm::run) followed by [`backtrack`].
    pub fn solve(self, grid: &mut Grid, start: GridLocation, end: GridLocation) -> Solution {
        let trace = self.run(grid, start, end);
        let path = backtrack(grid, trace.last().copied(), end);
        Solution { trace, path }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

/// An algorithm name outside `bfs | dijkstra | gbfs | astar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dijkstra, gbfs or astar)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

/// Trace and reconstructed path of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub trace: Trace,
    /// Empty when the goal was not reached.
    pub path: Path,
}

impl Solution {
    /// Whether the goal was reached.
    #[inline]
    pub fn reached(&self) -> bool {
        !self.path.is_empty()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_wire_names() {
        for a in Algorithm::ALL {
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, format!("\"{}\"", a.name()));
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, a);
        }
    }
}
