//! Step-traced shortest-path searches on a [`Grid`](waypoint_core::Grid).
//!
//! Unlike a plain path query, every search here reports the order in which
//! it finalized nodes (the *trace*), so the exploration itself can be
//! replayed. Four variants are available through [`Algorithm`]:
//!
//! - **BFS** — plain queue, unit steps
//! - **Dijkstra** — cheapest accumulated step count first
//! - **Greedy best-first** — closest Manhattan estimate first
//! - **A\*** — accumulated weight plus Manhattan estimate
//!
//! All of them share one loop ([`search`]) and differ only in their
//! [`Frontier`]. [`backtrack`] turns the last trace entry into a path.
//!
//! | Frontier | Used by |
//! |---|---|
//! | [`QueueFrontier`] | BFS |
//! | [`SortedFrontier`] with a [`KeyRule`] | Dijkstra, greedy best-first, A* |

mod algorithm;
mod backtrack;
mod best_first;
mod bfs;
mod distance;
mod search;
mod traits;

use waypoint_core::GridLocation;

pub use algorithm::{Algorithm, Solution, UnknownAlgorithm};
pub use backtrack::backtrack;
pub use best_first::{KeyRule, SortedFrontier};
pub use bfs::QueueFrontier;
pub use distance::manhattan;
pub use search::search;
pub use traits::Frontier;

/// Locations in the order a search marked them visited.
pub type Trace = Vec<GridLocation>;

/// Locations from start to end, both included. Empty when unreachable.
///
/// The start node is part of the path, so a renderer replaying a run gets it
/// once as a visited event and again as a path event.
pub type Path = Vec<GridLocation>;
