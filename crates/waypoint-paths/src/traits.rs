use waypoint_core::{Grid, GridLocation, GridNode};

/// Node-selection policy plugged into [`search`](crate::search).
///
/// The search loop owns everything the variants share (obstacle skipping,
/// trace recording, goal test, neighbour enumeration); a frontier decides
/// which node comes next and what discovering a neighbour writes into it.
pub trait Frontier {
    /// Prepare for a run starting at flat index `start`.
    fn seed(&mut self, grid: &mut Grid, start: usize);

    /// Remove and return the next node to finalize, or `None` when empty.
    fn pop(&mut self, grid: &Grid) -> Option<usize>;

    /// Whether dequeuing `node` means nothing reachable is left.
    fn is_exhausted(&self, _node: &GridNode) -> bool {
        false
    }

    /// Record that `next` was discovered from the just-visited `current`.
    fn discover(&mut self, grid: &mut Grid, current: usize, next: usize, end: GridLocation);
}
