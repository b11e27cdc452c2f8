//! **waypoint-engine** — the interactive side of the waypoint pathfinding
//! engine.
//!
//! [`Controller`] owns the board (markers, obstacles, weighted cells) and
//! serializes edits and runs through an Idle / Running / Settled state
//! machine. A full run is revealed step by step from its [`RunResult`];
//! [`RevealTiming`] turns that into a timed schedule. Instant re-runs can be
//! executed inline or handed to a [`SearchWorker`] thread as a
//! [`SearchRequest`].
//!
//! ```
//! use waypoint_core::GridLocation;
//! use waypoint_engine::{Controller, EngineConfig, Phase};
//! use waypoint_paths::Algorithm;
//!
//! let mut controller = Controller::new(EngineConfig::default()).unwrap();
//! controller.add_obstacle(GridLocation::new(8, 8)).unwrap();
//! let result = controller.run_full(Algorithm::AStar).unwrap();
//! assert!(result.reached());
//! controller.finish_reveal().unwrap();
//! assert_eq!(controller.phase(), Phase::Settled);
//! ```

mod config;
mod controller;
mod error;
mod reveal;
mod run;
mod worker;

pub use config::EngineConfig;
pub use controller::{Controller, EditOutcome, Phase};
pub use error::EngineError;
pub use reveal::{Reveal, RevealEvent, RevealRole, RevealTiming, ScheduledReveal};
pub use run::{RunMode, RunResult};
pub use worker::{Answer, SearchRequest, SearchResponse, SearchWorker, Ticket, handle_request};
