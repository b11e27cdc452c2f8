//! **waypoint-core** — grid model for the waypoint pathfinding engine.
//!
//! This crate provides the state the searches run over: cell coordinates,
//! the node arena with its per-run search fields, the location-keyed
//! obstacle and weight mutations, and a prev-free snapshot form that can be
//! handed to another thread.

pub mod error;
pub mod geom;
pub mod grid;
pub mod snapshot;

pub use error::GridError;
pub use geom::GridLocation;
pub use grid::{DEFAULT_WEIGHT, Grid, GridNode, UNREACHABLE, WEIGHTED_CELL_WEIGHT};
pub use snapshot::{CellSnapshot, GridSnapshot};
