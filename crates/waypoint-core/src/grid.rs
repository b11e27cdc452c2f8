//! The [`Grid`] type — a rectangular arena of [`GridNode`]s.
//!
//! Nodes live in one flat row-major `Vec`; the search back-pointer
//! ([`GridNode::prev`]) is an index into that same storage. A grid is cheap to
//! rebuild and is meant to be regenerated before every search, so the
//! back-pointers never outlive the run that wrote them.

use std::ops::{Index, IndexMut};

use crate::error::GridError;
use crate::geom::GridLocation;

/// Sentinel distance meaning "not reached yet" (the ∞ of a fresh node).
pub const UNREACHABLE: i32 = i32::MAX;

/// Traversal weight of an ordinary cell.
pub const DEFAULT_WEIGHT: i32 = 1;

/// Traversal weight given to cells the user marks as weighted.
pub const WEIGHTED_CELL_WEIGHT: i32 = 10;

// ---------------------------------------------------------------------------
// GridNode
// ---------------------------------------------------------------------------

/// One cell of the grid together with the per-run search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridNode {
    /// Always equal to the node's position in its grid.
    pub location: GridLocation,
    /// Ordering key written by the searches. Its meaning depends on the
    /// algorithm (path cost, heuristic, or both).
    pub distance: i32,
    /// Cost of entering this cell. Never below [`DEFAULT_WEIGHT`].
    pub weight: i32,
    pub visited: bool,
    pub obstacle: bool,
    /// Flat index of the node this one was discovered from.
    pub prev: Option<usize>,
}

impl GridNode {
    fn fresh(location: GridLocation) -> Self {
        Self {
            location,
            distance: UNREACHABLE,
            weight: DEFAULT_WEIGHT,
            visited: false,
            obstacle: false,
            prev: None,
        }
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.location.row
    }

    #[inline]
    pub fn column(&self) -> i32 {
        self.location.column
    }

    /// Whether the node carries a non-default weight.
    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.weight != DEFAULT_WEIGHT
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows` x `columns` grid of nodes indexed `[row][column]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    nodes: Vec<GridNode>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Create a fresh grid: every node unreached, unvisited, unblocked, with
    /// the default weight and no back-pointer.
    ///
    /// Both dimensions must fit in an `i32`; [`Grid::from_snapshot`] checks
    /// this for untrusted input.
    pub fn new(rows: usize, columns: usize) -> Self {
        let mut nodes = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                nodes.push(GridNode::fresh(GridLocation::new(row as i32, column as i32)));
            }
        }
        Self {
            nodes,
            rows,
            columns,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `loc` is inside the grid.
    #[inline]
    pub fn contains(&self, loc: GridLocation) -> bool {
        loc.row >= 0
            && loc.column >= 0
            && (loc.row as usize) < self.rows
            && (loc.column as usize) < self.columns
    }

    /// Convert a location to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, loc: GridLocation) -> Option<usize> {
        if !self.contains(loc) {
            return None;
        }
        Some(loc.row as usize * self.columns + loc.column as usize)
    }

    /// Like [`idx`](Grid::idx) but reports which bounds were violated.
    pub fn checked_index(&self, loc: GridLocation) -> Result<usize, GridError> {
        self.idx(loc).ok_or(GridError::OutOfBounds {
            location: loc,
            rows: self.rows,
            columns: self.columns,
        })
    }

    /// Convert a flat index back to a location.
    #[inline]
    pub fn location(&self, idx: usize) -> GridLocation {
        self.nodes[idx].location
    }

    pub fn node(&self, loc: GridLocation) -> Option<&GridNode> {
        let i = self.idx(loc)?;
        Some(&self.nodes[i])
    }

    pub fn node_mut(&mut self, loc: GridLocation) -> Option<&mut GridNode> {
        let i = self.idx(loc)?;
        Some(&mut self.nodes[i])
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[GridNode] {
        &self.nodes
    }

    /// Row `row` as a slice, or `None` if out of range.
    pub fn row(&self, row: usize) -> Option<&[GridNode]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.nodes[start..start + self.columns])
    }

    /// Mark every in-bounds location of `locations` as an obstacle.
    ///
    /// Returns how many nodes changed; re-applying the same set changes
    /// nothing. Out-of-bounds entries are skipped.
    pub fn apply_obstacles<'a, I>(&mut self, locations: I) -> usize
    where
        I: IntoIterator<Item = &'a GridLocation>,
    {
        let mut changed = 0;
        for &loc in locations {
            if let Some(node) = self.node_mut(loc) {
                if !node.obstacle {
                    node.obstacle = true;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Set the weight of every in-bounds location of `locations`.
    ///
    /// Weights below [`DEFAULT_WEIGHT`] are raised to it. Returns how many
    /// nodes changed.
    pub fn apply_weights<'a, I>(&mut self, locations: I, weight: i32) -> usize
    where
        I: IntoIterator<Item = &'a GridLocation>,
    {
        let weight = weight.max(DEFAULT_WEIGHT);
        let mut changed = 0;
        for &loc in locations {
            if let Some(node) = self.node_mut(loc) {
                if node.weight != weight {
                    node.weight = weight;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Append the flat indices of the unvisited cardinal neighbours of node
    /// `idx` into `buf`, in up, down, left, right order. The caller clears
    /// `buf` before calling.
    ///
    /// Obstacles are not filtered out here: the searches discover them and
    /// skip them when they are dequeued.
    pub fn unvisited_neighbors(&self, idx: usize, buf: &mut Vec<usize>) {
        let loc = self.nodes[idx].location;
        for n in loc.neighbors_4() {
            if let Some(ni) = self.idx(n) {
                if !self.nodes[ni].visited {
                    buf.push(ni);
                }
            }
        }
    }
}

impl Index<usize> for Grid {
    type Output = GridNode;

    #[inline]
    fn index(&self, idx: usize) -> &GridNode {
        &self.nodes[idx]
    }
}

impl IndexMut<usize> for Grid {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut GridNode {
        &mut self.nodes[idx]
    }
}
