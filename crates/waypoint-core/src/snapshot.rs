//! Plain-data copy of a grid's persistent state.
//!
//! A [`GridSnapshot`] carries only what survives a regeneration (obstacles
//! and weights) in row-major order. It has no back-pointers, so it can cross
//! a thread or serialization boundary and be rebuilt into a fresh [`Grid`]
//! on the other side.

use crate::error::GridError;
use crate::grid::{DEFAULT_WEIGHT, Grid};

/// Persistent state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSnapshot {
    pub obstacle: bool,
    pub weight: i32,
}

impl Default for CellSnapshot {
    fn default() -> Self {
        Self {
            obstacle: false,
            weight: DEFAULT_WEIGHT,
        }
    }
}

/// A deep, prev-free copy of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    pub rows: usize,
    pub columns: usize,
    /// Row-major, `rows * columns` entries.
    pub cells: Vec<CellSnapshot>,
}

impl Grid {
    /// Copy the obstacle and weight layout of this grid.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.rows(),
            columns: self.columns(),
            cells: self
                .nodes()
                .iter()
                .map(|n| CellSnapshot {
                    obstacle: n.obstacle,
                    weight: n.weight,
                })
                .collect(),
        }
    }

    /// Build a fresh grid carrying the snapshot's obstacles and weights.
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Result<Grid, GridError> {
        let too_large = GridError::TooLarge {
            rows: snapshot.rows,
            columns: snapshot.columns,
        };
        if snapshot.rows > i32::MAX as usize || snapshot.columns > i32::MAX as usize {
            return Err(too_large);
        }
        let len = snapshot.rows.checked_mul(snapshot.columns).ok_or(too_large)?;
        if snapshot.cells.len() != len {
            return Err(GridError::ShapeMismatch {
                rows: snapshot.rows,
                columns: snapshot.columns,
                cells: snapshot.cells.len(),
            });
        }
        let mut grid = Grid::new(snapshot.rows, snapshot.columns);
        for (i, cell) in snapshot.cells.iter().enumerate() {
            let node = &mut grid[i];
            node.obstacle = cell.obstacle;
            node.weight = cell.weight.max(DEFAULT_WEIGHT);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::GridLocation;
    use crate::grid::{UNREACHABLE, WEIGHTED_CELL_WEIGHT};

    #[test]
    fn snapshot_drops_search_state() {
        let mut g = Grid::new(2, 3);
        g.apply_obstacles(&[GridLocation::new(0, 1)]);
        g.apply_weights(&[GridLocation::new(1, 2)], WEIGHTED_CELL_WEIGHT);
        g[0].visited = true;
        g[0].distance = 0;
        g[3].prev = Some(0);

        let restored = Grid::from_snapshot(&g.snapshot()).unwrap();
        assert!(restored.node(GridLocation::new(0, 1)).unwrap().obstacle);
        assert_eq!(
            restored.node(GridLocation::new(1, 2)).unwrap().weight,
            WEIGHTED_CELL_WEIGHT
        );
        assert!(!restored[0].visited);
        assert_eq!(restored[0].distance, UNREACHABLE);
        assert_eq!(restored[3].prev, None);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let snap = GridSnapshot {
            rows: 2,
            columns: 2,
            cells: vec![CellSnapshot::default(); 3],
        };
        assert_eq!(
            Grid::from_snapshot(&snap),
            Err(GridError::ShapeMismatch {
                rows: 2,
                columns: 2,
                cells: 3,
            })
        );
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let overflowing = GridSnapshot {
            rows: 1 << (usize::BITS - 1),
            columns: 2,
            cells: Vec::new(),
        };
        assert!(matches!(
            Grid::from_snapshot(&overflowing),
            Err(GridError::TooLarge { .. })
        ));

        let wide = GridSnapshot {
            rows: 1,
            columns: i32::MAX as usize + 1,
            cells: Vec::new(),
        };
        assert_eq!(
            Grid::from_snapshot(&wide),
            Err(GridError::TooLarge {
                rows: 1,
                columns: i32::MAX as usize + 1,
            })
        );
    }
}
