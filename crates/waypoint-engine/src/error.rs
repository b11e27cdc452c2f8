use std::fmt;

use waypoint_core::{GridError, GridLocation};

/// Why the engine turned a request down.
///
/// None of these are fatal: the controller is left exactly as it was and
/// keeps accepting further requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A location outside the `rows` x `columns` grid.
    InvalidLocation {
        location: GridLocation,
        rows: usize,
        columns: usize,
    },
    /// A full run is being revealed; edits and runs wait until it settles.
    Busy,
    /// Instant runs need a completed full run with no edits since.
    NotSettled,
    /// Reveal completion was reported while no full run was in flight.
    NotRunning,
    /// The start marker would sit on an obstacle.
    BlockedStart(GridLocation),
    /// The end marker would sit on an obstacle.
    BlockedEnd(GridLocation),
    /// Start and end would share a cell.
    MarkerCollision(GridLocation),
    /// An offloaded response no longer matches the controller's layout.
    StaleResponse,
    InvalidConfig(String),
    Grid(GridError),
    /// The search worker thread is gone.
    WorkerDisconnected,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLocation {
                location,
                rows,
                columns,
            } => write!(f, "location {location} is outside the {rows}x{columns} grid"),
            Self::Busy => f.write_str("a run is still being revealed"),
            Self::NotSettled => f.write_str("no settled full run to re-run instantly"),
            Self::NotRunning => f.write_str("no run is being revealed"),
            Self::BlockedStart(loc) => write!(f, "start {loc} is on an obstacle"),
            Self::BlockedEnd(loc) => write!(f, "end {loc} is on an obstacle"),
            Self::MarkerCollision(loc) => write!(f, "start and end both at {loc}"),
            Self::StaleResponse => f.write_str("offloaded result does not match the current grid"),
            Self::InvalidConfig(msg) => write!(f, "invalid engine config: {msg}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::WorkerDisconnected => f.write_str("search worker disconnected"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for EngineError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::OutOfBounds {
                location,
                rows,
                columns,
            } => Self::InvalidLocation {
                location,
                rows,
                columns,
            },
            other => Self::Grid(other),
        }
    }
}
