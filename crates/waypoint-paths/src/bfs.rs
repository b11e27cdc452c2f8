use std::collections::VecDeque;

use waypoint_core::{Grid, GridLocation};

use crate::traits::Frontier;

/// First-in first-out frontier for breadth-first search.
///
/// Neighbours are marked visited as soon as they are discovered, so each
/// node is queued at most once. Obstacles are never queued. The `distance`
/// field is left untouched.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<usize>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn seed(&mut self, _grid: &mut Grid, start: usize) {
        self.queue.clear();
        self.queue.push_back(start);
    }

    fn pop(&mut self, _grid: &Grid) -> Option<usize> {
        self.queue.pop_front()
    }

    fn discover(&mut self, grid: &mut Grid, current: usize, next: usize, _end: GridLocation) {
        let node = &mut grid[next];
        if node.obstacle {
            return;
        }
        node.visited = true;
        node.prev = Some(current);
        self.queue.push_back(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search;
    use waypoint_core::UNREACHABLE;

    fn loc(row: i32, column: i32) -> GridLocation {
        GridLocation::new(row, column)
    }

    #[test]
    fn visits_in_discovery_order() {
        let mut g = Grid::new(3, 3);
        let trace = search(&mut g, loc(0, 0), loc(2, 2), &mut QueueFrontier::new());
        assert_eq!(
            trace,
            vec![
                loc(0, 0),
                loc(1, 0),
                loc(0, 1),
                loc(2, 0),
                loc(1, 1),
                loc(0, 2),
                loc(2, 1),
                loc(1, 2),
                loc(2, 2),
            ]
        );
    }

    #[test]
    fn discovered_nodes_are_marked_eagerly() {
        let mut g = Grid::new(3, 3);
        let trace = search(&mut g, loc(0, 0), loc(0, 1), &mut QueueFrontier::new());
        assert_eq!(trace, vec![loc(0, 0), loc(1, 0), loc(0, 1)]);
        // Discovered from (1, 0) but never dequeued.
        for p in [loc(2, 0), loc(1, 1)] {
            let n = g.node(p).unwrap();
            assert!(n.visited);
            assert_eq!(n.prev, g.idx(loc(1, 0)));
            assert!(!trace.contains(&p));
        }
        assert!(!g.node(loc(0, 2)).unwrap().visited);
        assert_eq!(g.node(loc(0, 1)).unwrap().distance, UNREACHABLE);
    }

    #[test]
    fn obstacles_are_never_queued() {
        let mut g = Grid::new(1, 3);
        g.apply_obstacles(&[loc(0, 1)]);
        let trace = search(&mut g, loc(0, 0), loc(0, 2), &mut QueueFrontier::new());
        assert_eq!(trace, vec![loc(0, 0)]);
        assert!(!g[1].visited);
        assert_eq!(g[1].prev, None);
        assert!(!g[2].visited);
    }
}
