use std::fmt;

use crate::geom::GridLocation;

/// Errors produced by grid lookups and snapshot restoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A location lies outside the `rows` x `columns` grid.
    OutOfBounds {
        location: GridLocation,
        rows: usize,
        columns: usize,
    },
    /// A snapshot's cell list does not match its declared shape.
    ShapeMismatch {
        rows: usize,
        columns: usize,
        cells: usize,
    },
    /// A dimension does not fit a `GridLocation` coordinate, or the cell
    /// count overflows.
    TooLarge { rows: usize, columns: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                location,
                rows,
                columns,
            } => write!(f, "location {location} is outside the {rows}x{columns} grid"),
            Self::ShapeMismatch {
                rows,
                columns,
                cells,
            } => write!(
                f,
                "snapshot declares {rows}x{columns} but carries {cells} cells"
            ),
            Self::TooLarge { rows, columns } => {
                write!(f, "grid {rows}x{columns} exceeds the addressable size")
            }
        }
    }
}

impl std::error::Error for GridError {}
