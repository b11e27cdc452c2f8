//! The recompute controller: edit API, run API and the Idle / Running /
//! Settled state machine.
//!
//! ```text
//!            run_full                finish_reveal
//!   Idle ─────────────▶ Running ─────────────────▶ Settled
//!    ▲                                              │  ▲
//!    │              edit (obstacle, weight, marker) │  │ run_instant
//!    └──────────────────────────────────────────────┘  └──┘
//! ```
//!
//! Only the obstacle and weighted-cell sets (plus the two markers) survive
//! between runs. Every run starts from a freshly generated [`Grid`] with those
//! sets applied as one batch.

use std::collections::BTreeSet;

use log::{debug, trace};
use waypoint_core::{Grid, GridLocation};
use waypoint_paths::Algorithm;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::run::{RunMode, RunResult};
use crate::worker::{SearchRequest, SearchResponse};

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No run in flight; the last result is stale or absent.
    Idle,
    /// A full run is being revealed. Edits and runs are rejected.
    Running,
    /// The last full run is current and nothing has been edited since.
    Settled,
}

/// Result of an accepted edit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The edit conflicted with a marker or an already-special cell and was
    /// dropped.
    Ignored,
}

/// Owns the grid and serializes every edit and run against it.
#[derive(Debug)]
pub struct Controller {
    config: EngineConfig,
    start: GridLocation,
    end: GridLocation,
    obstacles: BTreeSet<GridLocation>,
    weighted: BTreeSet<GridLocation>,
    grid: Grid,
    phase: Phase,
    algorithm: Option<Algorithm>,
    last: Option<RunResult>,
}

impl Controller {
    /// Create an idle controller with an empty board.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            start: config.start,
            end: config.end,
            obstacles: BTreeSet::new(),
            weighted: BTreeSet::new(),
            grid: Grid::new(config.rows, config.columns),
            phase: Phase::Idle,
            algorithm: None,
            last: None,
            config,
        })
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn start(&self) -> GridLocation {
        self.start
    }

    #[inline]
    pub fn end(&self) -> GridLocation {
        self.end
    }

    pub fn obstacles(&self) -> &BTreeSet<GridLocation> {
        &self.obstacles
    }

    pub fn weighted_cells(&self) -> &BTreeSet<GridLocation> {
        &self.weighted
    }

    /// The grid of the most recent run (or the blank board before any run).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Algorithm of the most recent full run.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    pub fn last_result(&self) -> Option<&RunResult> {
        self.last.as_ref()
    }

    // -----------------------------------------------------------------------
    // Edit API
    // -----------------------------------------------------------------------

    /// Record an obstacle. Ignored on a marker or on a cell that is already
    /// an obstacle or weighted.
    pub fn add_obstacle(&mut self, loc: GridLocation) -> Result<EditOutcome, EngineError> {
        self.check_edit(loc)?;
        if self.is_special(loc) {
            debug!("obstacle at {loc} ignored");
            return Ok(EditOutcome::Ignored);
        }
        self.obstacles.insert(loc);
        trace!("obstacle added at {loc} ({} total)", self.obstacles.len());
        self.mark_stale();
        Ok(EditOutcome::Applied)
    }

    /// Record a weighted cell. Ignored on a marker or on a cell that is
    /// already an obstacle or weighted.
    pub fn add_weighted_cell(&mut self, loc: GridLocation) -> Result<EditOutcome, EngineError> {
        self.check_edit(loc)?;
        if self.is_special(loc) {
            debug!("weighted cell at {loc} ignored");
            return Ok(EditOutcome::Ignored);
        }
        self.weighted.insert(loc);
        trace!("weighted cell added at {loc} ({} total)", self.weighted.len());
        self.mark_stale();
        Ok(EditOutcome::Applied)
    }

    /// Move the start marker. Ignored onto the end marker or an obstacle.
    pub fn set_start(&mut self, loc: GridLocation) -> Result<EditOutcome, EngineError> {
        self.check_edit(loc)?;
        if loc == self.start || loc == self.end || self.obstacles.contains(&loc) {
            debug!("start move to {loc} ignored");
            return Ok(EditOutcome::Ignored);
        }
        self.start = loc;
        self.mark_stale();
        Ok(EditOutcome::Applied)
    }

    /// Move the end marker. Ignored onto the start marker or an obstacle.
    pub fn set_end(&mut self, loc: GridLocation) -> Result<EditOutcome, EngineError> {
        self.check_edit(loc)?;
        if loc == self.end || loc == self.start || self.obstacles.contains(&loc) {
            debug!("end move to {loc} ignored");
            return Ok(EditOutcome::Ignored);
        }
        self.end = loc;
        self.mark_stale();
        Ok(EditOutcome::Applied)
    }

    /// Clear every obstacle and weighted cell, put the markers back where
    /// the config has them and forget the last result.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.check_not_running()?;
        self.obstacles.clear();
        self.weighted.clear();
        self.start = self.config.start;
        self.end = self.config.end;
        self.grid = Grid::new(self.config.rows, self.config.columns);
        self.algorithm = None;
        self.last = None;
        self.phase = Phase::Idle;
        debug!("board reset");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Run API
    // -----------------------------------------------------------------------

    /// Regenerate the grid, run `algorithm` between the current markers and
    /// enter Running. Call [`finish_reveal`](Controller::finish_reveal) once
    /// the result has been shown.
    pub fn run_full(&mut self, algorithm: Algorithm) -> Result<&RunResult, EngineError> {
        self.check_not_running()?;
        self.check_markers(self.start, self.end)?;

        let (start, end) = (self.start, self.end);
        let result = self.execute(algorithm, RunMode::Full, start, end);
        self.algorithm = Some(algorithm);
        self.phase = Phase::Running;
        Ok(self.last.insert(result))
    }

    /// Report that the reveal of the current full run is over.
    pub fn finish_reveal(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Running {
            return Err(EngineError::NotRunning);
        }
        self.phase = Phase::Settled;
        Ok(())
    }

    /// Re-run the last full run's algorithm at once, optionally with moved
    /// markers, and stay Settled. Overrides become the new markers.
    pub fn run_instant(
        &mut self,
        start_override: Option<GridLocation>,
        end_override: Option<GridLocation>,
    ) -> Result<&RunResult, EngineError> {
        let (algorithm, start, end) = self.instant_target(start_override, end_override)?;
        let result = self.execute(algorithm, RunMode::Instant, start, end);
        self.start = start;
        self.end = end;
        Ok(self.last.insert(result))
    }

    /// Build the worker request an instant run with these overrides would
    /// execute, without running it.
    pub fn prepare_offload(
        &self,
        start_override: Option<GridLocation>,
        end_override: Option<GridLocation>,
    ) -> Result<SearchRequest, EngineError> {
        let (algorithm, start, end) = self.instant_target(start_override, end_override)?;
        Ok(SearchRequest {
            grid: self.fresh_grid().snapshot(),
            start_node: start,
            end_node: end,
            algorithm,
        })
    }

    /// Adopt the worker's answer to a request from
    /// [`prepare_offload`](Controller::prepare_offload), as if
    /// [`run_instant`](Controller::run_instant) had produced it.
    ///
    /// Rejected with [`EngineError::StaleResponse`] if the board or the
    /// algorithm changed since the request was prepared. The controller's
    /// grid is regenerated but carries no search state afterwards.
    pub fn accept_offloaded(
        &mut self,
        request: &SearchRequest,
        response: SearchResponse,
    ) -> Result<&RunResult, EngineError> {
        let (algorithm, start, end) =
            self.instant_target(Some(request.start_node), Some(request.end_node))?;
        let grid = self.fresh_grid();
        if algorithm != request.algorithm || grid.snapshot() != request.grid {
            debug!("offloaded {} result is stale", request.algorithm);
            return Err(EngineError::StaleResponse);
        }

        self.grid = grid;
        self.start = start;
        self.end = end;
        let result = RunResult {
            algorithm,
            mode: RunMode::Instant,
            start,
            end,
            visited: response.visited_nodes,
            path: response.shortest_path,
        };
        Ok(self.last.insert(result))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn fresh_grid(&self) -> Grid {
        let mut grid = Grid::new(self.config.rows, self.config.columns);
        grid.apply_obstacles(&self.obstacles);
        grid.apply_weights(&self.weighted, self.config.weighted_cell_weight);
        grid
    }

    fn execute(
        &mut self,
        algorithm: Algorithm,
        mode: RunMode,
        start: GridLocation,
        end: GridLocation,
    ) -> RunResult {
        self.grid = self.fresh_grid();
        let solution = algorithm.solve(&mut self.grid, start, end);
        debug!(
            "{mode:?} {algorithm} run {start} -> {end}: {} visited, path of {}",
            solution.trace.len(),
            solution.path.len()
        );
        RunResult::new(algorithm, mode, start, end, solution)
    }

    fn instant_target(
        &self,
        start_override: Option<GridLocation>,
        end_override: Option<GridLocation>,
    ) -> Result<(Algorithm, GridLocation, GridLocation), EngineError> {
        match self.phase {
            Phase::Running => return Err(EngineError::Busy),
            Phase::Idle => return Err(EngineError::NotSettled),
            Phase::Settled => {}
        }
        let algorithm = self.algorithm.ok_or(EngineError::NotSettled)?;
        let start = start_override.unwrap_or(self.start);
        let end = end_override.unwrap_or(self.end);
        self.check_bounds(start)?;
        self.check_bounds(end)?;
        self.check_markers(start, end)?;
        Ok((algorithm, start, end))
    }

    fn check_bounds(&self, loc: GridLocation) -> Result<(), EngineError> {
        if self.config.contains(loc) {
            Ok(())
        } else {
            debug!("rejected out-of-bounds location {loc}");
            Err(EngineError::InvalidLocation {
                location: loc,
                rows: self.config.rows,
                columns: self.config.columns,
            })
        }
    }

    fn check_not_running(&self) -> Result<(), EngineError> {
        if self.phase == Phase::Running {
            debug!("request rejected while a run is revealed");
            return Err(EngineError::Busy);
        }
        Ok(())
    }

    fn check_edit(&self, loc: GridLocation) -> Result<(), EngineError> {
        self.check_bounds(loc)?;
        self.check_not_running()
    }

    fn check_markers(&self, start: GridLocation, end: GridLocation) -> Result<(), EngineError> {
        if start == end {
            return Err(EngineError::MarkerCollision(start));
        }
        if self.obstacles.contains(&start) {
            return Err(EngineError::BlockedStart(start));
        }
        if self.obstacles.contains(&end) {
            return Err(EngineError::BlockedEnd(end));
        }
        Ok(())
    }

    fn is_special(&self, loc: GridLocation) -> bool {
        loc == self.start
            || loc == self.end
            || self.obstacles.contains(&loc)
            || self.weighted.contains(&loc)
    }

    fn mark_stale(&mut self) {
        if self.phase == Phase::Settled {
            self.phase = Phase::Idle;
        }
    }
}
