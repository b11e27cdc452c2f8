//! Geometry primitive: [`GridLocation`].
//!
//! Rows grow downward and columns grow right, matching how the grid is laid
//! out on screen. Coordinates are signed so that drag positions outside the
//! grid can be represented and rejected instead of wrapping.

use std::fmt;

// ---------------------------------------------------------------------------
// GridLocation
// ---------------------------------------------------------------------------

/// A cell coordinate. Has no identity beyond its position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLocation {
    pub row: i32,
    pub column: i32,
}

impl GridLocation {
    /// Top-left cell.
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    /// Create a new location.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Return a location shifted by (drow, dcolumn).
    #[inline]
    pub const fn shift(self, drow: i32, dcolumn: i32) -> Self {
        Self {
            row: self.row + drow,
            column: self.column + dcolumn,
        }
    }

    /// The four cardinal neighbours in discovery order: up, down, left,
    /// right. Some of them may lie outside any particular grid.
    #[inline]
    pub const fn neighbors_4(self) -> [GridLocation; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }
}

impl PartialOrd for GridLocation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order, the same order the grid stores its nodes in.
impl Ord for GridLocation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row
            .cmp(&other.row)
            .then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(i32, i32)> for GridLocation {
    #[inline]
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn neighbors_order_is_up_down_left_right() {
        let p = GridLocation::new(2, 3);
        assert_eq!(
            p.neighbors_4(),
            [
                GridLocation::new(1, 3),
                GridLocation::new(3, 3),
                GridLocation::new(2, 2),
                GridLocation::new(2, 4),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        let set: BTreeSet<_> = [(1, 0), (0, 5), (0, 1), (1, -1)]
            .into_iter()
            .map(GridLocation::from)
            .collect();
        let ordered: Vec<_> = set.into_iter().collect();
        assert_eq!(
            ordered,
            vec![
                GridLocation::new(0, 1),
                GridLocation::new(0, 5),
                GridLocation::new(1, -1),
                GridLocation::new(1, 0),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(GridLocation::new(7, 8).to_string(), "(7, 8)");
    }
}
