use waypoint_core::{Grid, GridLocation};

use crate::Trace;
use crate::traits::Frontier;

/// Run the shared search skeleton from `start` towards `end`.
///
/// Nodes are marked visited and appended to the returned trace in the order
/// the frontier yields them. Obstacles are dropped without being visited or
/// expanded. The run stops right after `end` is visited, when the frontier
/// reports the unreachable remainder, or when it runs dry; in every case the
/// last trace entry is the last node visited.
///
/// Mutates the `distance`, `visited` and `prev` fields of the grid, so the
/// grid must be fresh. Returns an empty trace if `start` or `end` is outside
/// the grid.
pub fn search<F: Frontier>(
    grid: &mut Grid,
    start: GridLocation,
    end: GridLocation,
    frontier: &mut F,
) -> Trace {
    let mut trace = Trace::new();
    let Some(start_idx) = grid.idx(start) else {
        return trace;
    };
    if !grid.contains(end) {
        return trace;
    }

    frontier.seed(grid, start_idx);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = frontier.pop(grid) {
        let node = &grid[ci];
        if node.obstacle {
            continue;
        }
        if frontier.is_exhausted(node) {
            break;
        }

        grid[ci].visited = true;
        let current = grid.location(ci);
        trace.push(current);
        if current == end {
            break;
        }

        nbuf.clear();
        grid.unvisited_neighbors(ci, &mut nbuf);
        for &ni in nbuf.iter() {
            frontier.discover(grid, ci, ni, end);
        }
    }

    trace
}
