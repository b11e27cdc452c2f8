//! Engine configuration.
//!
//! The defaults reproduce the classic visualizer layout: a 30x50 board with
//! the start at (7, 8) and the end at (10, 19).

use serde::{Deserialize, Serialize};
use waypoint_core::{GridLocation, WEIGHTED_CELL_WEIGHT};

use crate::error::EngineError;
use crate::reveal::RevealTiming;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub columns: usize,
    /// Initial start marker, restored by [`Controller::reset`](crate::Controller::reset).
    pub start: GridLocation,
    /// Initial end marker.
    pub end: GridLocation,
    /// Weight applied to cells added with
    /// [`Controller::add_weighted_cell`](crate::Controller::add_weighted_cell).
    pub weighted_cell_weight: i32,
    pub timing: RevealTiming,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            columns: 50,
            start: GridLocation::new(7, 8),
            end: GridLocation::new(10, 19),
            weighted_cell_weight: WEIGHTED_CELL_WEIGHT,
            timing: RevealTiming::default(),
        }
    }
}

impl EngineConfig {
    /// Whether `loc` lies on the configured board.
    pub fn contains(&self, loc: GridLocation) -> bool {
        loc.row >= 0
            && loc.column >= 0
            && (loc.row as usize) < self.rows
            && (loc.column as usize) < self.columns
    }

    /// Check that the config describes a usable board.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.rows > i32::MAX as usize || self.columns > i32::MAX as usize {
            return Err(EngineError::InvalidConfig(format!(
                "grid {}x{} exceeds the addressable size",
                self.rows, self.columns
            )));
        }
        for (name, loc) in [("start", self.start), ("end", self.end)] {
            if !self.contains(loc) {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} {loc} is outside the {}x{} grid",
                    self.rows, self.columns
                )));
            }
        }
        if self.start == self.end {
            return Err(EngineError::InvalidConfig(format!(
                "start and end both at {}",
                self.start
            )));
        }
        if self.weighted_cell_weight < 1 {
            return Err(EngineError::InvalidConfig(format!(
                "weighted cell weight must be at least 1, got {}",
                self.weighted_cell_weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!((cfg.rows, cfg.columns), (30, 50));
        assert_eq!(cfg.weighted_cell_weight, 10);
    }

    #[test]
    fn rejects_bad_boards() {
        let empty = EngineConfig {
            rows: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(empty.validate(), Err(EngineError::InvalidConfig(_))));

        let outside = EngineConfig {
            end: GridLocation::new(30, 0),
            ..EngineConfig::default()
        };
        assert!(matches!(outside.validate(), Err(EngineError::InvalidConfig(_))));

        let same = EngineConfig {
            end: GridLocation::new(7, 8),
            ..EngineConfig::default()
        };
        assert!(matches!(same.validate(), Err(EngineError::InvalidConfig(_))));

        let light = EngineConfig {
            weighted_cell_weight: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(light.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"rows": 12, "columns": 20}"#).unwrap();
        assert_eq!(cfg.rows, 12);
        assert_eq!(cfg.columns, 20);
        assert_eq!(cfg.start, GridLocation::new(7, 8));
        assert_eq!(cfg.timing, RevealTiming::default());
    }
}
