use waypoint_core::{Grid, GridLocation, GridNode, UNREACHABLE};

use crate::distance::manhattan;
use crate::traits::Frontier;

/// What a best-first search writes into a neighbour's `distance` when it is
/// discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRule {
    /// `current + 1`. Cell weights are ignored.
    UnitCost,
    /// `manhattan(neighbour, end)`; nothing accumulates.
    Heuristic,
    /// `current + neighbour.weight + manhattan(neighbour, end)`.
    CostPlusHeuristic,
}

impl KeyRule {
    fn key(self, grid: &Grid, current: usize, next: usize, end: GridLocation) -> i32 {
        let here = grid[current].distance;
        let node = &grid[next];
        match self {
            Self::UnitCost => here.saturating_add(1),
            Self::Heuristic => manhattan(node.location, end),
            Self::CostPlusHeuristic => here
                .saturating_add(node.weight)
                .saturating_add(manhattan(node.location, end)),
        }
    }
}

/// Frontier holding every node of the grid, ordered by `distance`.
///
/// Before each extraction the whole frontier is stable-sorted by key, so
/// nodes with equal keys keep their current relative order. The frontier
/// starts in row-major order; that is the whole tie-break.
///
/// Discovery overwrites the neighbour's key and back-pointer
/// unconditionally, even if the old key was smaller.
#[derive(Debug)]
pub struct SortedFrontier {
    open: Vec<usize>,
    rule: KeyRule,
}

impl SortedFrontier {
    pub fn new(rule: KeyRule) -> Self {
        Self {
            open: Vec::new(),
            rule,
        }
    }

    #[inline]
    pub fn rule(&self) -> KeyRule {
        self.rule
    }
}

impl Frontier for SortedFrontier {
    fn seed(&mut self, grid: &mut Grid, start: usize) {
        grid[start].distance = 0;
        self.open.clear();
        self.open.extend(0..grid.len());
    }

    fn pop(&mut self, grid: &Grid) -> Option<usize> {
        if self.open.is_empty() {
            return None;
        }
        self.open.sort_by_key(|&i| grid[i].distance);
        Some(self.open.remove(0))
    }

    fn is_exhausted(&self, node: &GridNode) -> bool {
        node.distance == UNREACHABLE
    }

    fn discover(&mut self, grid: &mut Grid, current: usize, next: usize, end: GridLocation) {
        let key = self.rule.key(grid, current, next, end);
        let node = &mut grid[next];
        node.distance = key;
        node.prev = Some(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search;
    use waypoint_core::WEIGHTED_CELL_WEIGHT;

    fn loc(row: i32, column: i32) -> GridLocation {
        GridLocation::new(row, column)
    }

    fn run(grid: &mut Grid, rule: KeyRule, start: GridLocation, end: GridLocation) -> Vec<GridLocation> {
        search(grid, start, end, &mut SortedFrontier::new(rule))
    }

    #[test]
    fn unit_cost_ties_follow_row_major_order() {
        let mut g = Grid::new(3, 3);
        let trace = run(&mut g, KeyRule::UnitCost, loc(0, 0), loc(2, 2));
        assert_eq!(
            trace,
            vec![
                loc(0, 0),
                loc(0, 1),
                loc(1, 0),
                loc(0, 2),
                loc(1, 1),
                loc(2, 0),
                loc(1, 2),
                loc(2, 1),
                loc(2, 2),
            ]
        );
        assert_eq!(g.node(loc(2, 2)).unwrap().distance, 4);
    }

    #[test]
    fn unit_cost_ignores_weights() {
        let mut plain = Grid::new(3, 5);
        let mut weighted = Grid::new(3, 5);
        weighted.apply_weights(&[loc(0, 1), loc(0, 2), loc(0, 3)], WEIGHTED_CELL_WEIGHT);
        let a = run(&mut plain, KeyRule::UnitCost, loc(0, 0), loc(0, 4));
        let b = run(&mut weighted, KeyRule::UnitCost, loc(0, 0), loc(0, 4));
        assert_eq!(a, b);
    }

    #[test]
    fn heuristic_heads_straight_for_the_goal() {
        let mut g = Grid::new(3, 3);
        let trace = run(&mut g, KeyRule::Heuristic, loc(0, 0), loc(2, 2));
        assert_eq!(
            trace,
            vec![loc(0, 0), loc(0, 1), loc(0, 2), loc(1, 2), loc(2, 2)]
        );
        // Keys are estimates, not accumulated costs.
        assert_eq!(g.node(loc(1, 2)).unwrap().distance, 1);
    }

    #[test]
    fn cost_plus_heuristic_accumulates() {
        let mut g = Grid::new(1, 3);
        g.apply_weights(&[loc(0, 1)], 4);
        run(&mut g, KeyRule::CostPlusHeuristic, loc(0, 0), loc(0, 2));
        // (0, 1): 0 + 4 + 1; (0, 2): 5 + 1 + 0
        assert_eq!(g[1].distance, 5);
        assert_eq!(g[2].distance, 6);
    }

    #[test]
    fn stops_at_unreachable_remainder() {
        let mut g = Grid::new(3, 3);
        g.apply_obstacles(&[loc(0, 1), loc(1, 0)]);
        let trace = run(&mut g, KeyRule::UnitCost, loc(0, 0), loc(2, 2));
        assert_eq!(trace, vec![loc(0, 0)]);
        assert!(!g.node(loc(2, 2)).unwrap().visited);
    }
}
