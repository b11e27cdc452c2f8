//! The reveal stream handed to renderers.
//!
//! A run is shown as a finite sequence of [`RevealEvent`]s: all visited
//! nodes in trace order, then the path from start to end. The engine does
//! not wait between events. [`RevealTiming`] computes when each event is due
//! so an external scheduler can pace them.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use waypoint_core::GridLocation;

use crate::run::RunResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealRole {
    Visited,
    Path,
}

/// One node to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealEvent {
    pub location: GridLocation,
    pub role: RevealRole,
}

/// Iterator over the reveal events of a [`RunResult`].
#[derive(Debug, Clone)]
pub struct Reveal<'a> {
    visited: std::slice::Iter<'a, GridLocation>,
    path: std::slice::Iter<'a, GridLocation>,
}

impl<'a> Reveal<'a> {
    pub(crate) fn new(visited: &'a [GridLocation], path: &'a [GridLocation]) -> Self {
        Self {
            visited: visited.iter(),
            path: path.iter(),
        }
    }
}

impl Iterator for Reveal<'_> {
    type Item = RevealEvent;

    fn next(&mut self) -> Option<RevealEvent> {
        if let Some(&location) = self.visited.next() {
            return Some(RevealEvent {
                location,
                role: RevealRole::Visited,
            });
        }
        self.path.next().map(|&location| RevealEvent {
            location,
            role: RevealRole::Path,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.visited.len() + self.path.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Reveal<'_> {}

/// A reveal event with the offset, from the start of the reveal, at which
/// it is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub at: Duration,
    pub event: RevealEvent,
}

/// Pacing of an animated reveal.
///
/// Visited node `i` is due at `i * visit_step`. The path starts together
/// with the last visited node and advances by `path_step` per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    pub visit_step_ms: u64,
    pub path_step_ms: u64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            visit_step_ms: 10,
            path_step_ms: 50,
        }
    }
}

impl RevealTiming {
    #[inline]
    pub fn visit_step(&self) -> Duration {
        Duration::from_millis(self.visit_step_ms)
    }

    #[inline]
    pub fn path_step(&self) -> Duration {
        Duration::from_millis(self.path_step_ms)
    }

    /// Every reveal event of `result` with its due offset, in order.
    pub fn schedule(&self, result: &RunResult) -> Vec<ScheduledReveal> {
        let n = result.visited.len() as u32;
        let path_origin = self.visit_step() * n.saturating_sub(1);
        let mut out = Vec::with_capacity(result.visited.len() + result.path.len());
        let mut visits = 0u32;
        let mut steps = 0u32;
        for event in result.reveal() {
            let at = match event.role {
                RevealRole::Visited => {
                    visits += 1;
                    self.visit_step() * (visits - 1)
                }
                RevealRole::Path => {
                    steps += 1;
                    path_origin + self.path_step() * (steps - 1)
                }
            };
            out.push(ScheduledReveal { at, event });
        }
        out
    }

    /// Time after which the reveal of `result` counts as finished.
    pub fn total(&self, result: &RunResult) -> Duration {
        self.visit_step() * result.visited.len() as u32
            + self.path_step() * result.path.len() as u32
    }
}
