use waypoint_core::{Grid, GridLocation};

use crate::Path;

/// Rebuild the path ending at `last` by following back-pointers.
///
/// Returns an empty path when `last` is `None` or is not `end` (the search
/// ran out before reaching the goal). Otherwise the path runs from the node
/// with no back-pointer (the start) to `end`, both included. A back-pointer
/// chain that leaves the grid or loops also yields an empty path.
pub fn backtrack(grid: &Grid, last: Option<GridLocation>, end: GridLocation) -> Path {
    let Some(last) = last else {
        return Path::new();
    };
    if last != end {
        return Path::new();
    }
    let Some(mut ci) = grid.idx(last) else {
        return Path::new();
    };

    let mut path = vec![last];
    while let Some(pi) = grid[ci].prev {
        if pi >= grid.len() || path.len() >= grid.len() {
            return Path::new();
        }
        path.push(grid.location(pi));
        ci = pi;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn loc(row: i32, column: i32) -> GridLocation {
        GridLocation::new(row, column)
    }

    #[test]
    fn follows_prev_links_to_the_start() {
        let mut g = Grid::new(2, 2);
        // (0,0) -> (0,1) -> (1,1)
        g[1].prev = Some(0);
        g[3].prev = Some(1);
        assert_eq!(
            backtrack(&g, Some(loc(1, 1)), loc(1, 1)),
            vec![loc(0, 0), loc(0, 1), loc(1, 1)]
        );
    }

    #[test]
    fn start_equal_to_end_is_a_single_node_path() {
        let g = Grid::new(2, 2);
        assert_eq!(backtrack(&g, Some(loc(1, 0)), loc(1, 0)), vec![loc(1, 0)]);
    }

    #[test]
    fn cyclic_chain_is_rejected() {
        let mut g = Grid::new(1, 2);
        g[0].prev = Some(1);
        g[1].prev = Some(0);
        assert!(backtrack(&g, Some(loc(0, 1)), loc(0, 1)).is_empty());
    }

    #[test]
    fn dangling_prev_is_rejected() {
        let mut g = Grid::new(1, 2);
        g[1].prev = Some(42);
        assert!(backtrack(&g, Some(loc(0, 1)), loc(0, 1)).is_empty());
    }

    proptest! {
        #[test]
        fn missing_or_misplaced_last_gives_empty_path(
            rows in 1usize..8,
            cols in 1usize..8,
            lr in 0i32..8, lc in 0i32..8,
            er in 0i32..8, ec in 0i32..8,
        ) {
            let g = Grid::new(rows, cols);
            let end = loc(er, ec);
            prop_assert!(backtrack(&g, None, end).is_empty());
            let last = loc(lr, lc);
            prop_assume!(last != end);
            prop_assert!(backtrack(&g, Some(last), end).is_empty());
        }
    }
}
