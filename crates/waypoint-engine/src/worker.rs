//! Off-thread search execution.
//!
//! A [`SearchRequest`] carries a prev-free grid snapshot plus the markers and
//! the algorithm; the worker rebuilds the grid on its side, runs the search
//! and answers with a [`SearchResponse`]. Field names on the wire are
//! camelCase (`grid`, `startNode`, `endNode`, `algorithm`, `visitedNodes`,
//! `shortestPath`).

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use waypoint_core::{Grid, GridLocation, GridSnapshot};
use waypoint_paths::{Algorithm, Path, Trace};

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub grid: GridSnapshot,
    pub start_node: GridLocation,
    pub end_node: GridLocation,
    pub algorithm: Algorithm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub visited_nodes: Trace,
    pub shortest_path: Path,
}

/// Run one request to completion on the calling thread.
pub fn handle_request(request: &SearchRequest) -> Result<SearchResponse, EngineError> {
    let mut grid = Grid::from_snapshot(&request.grid)?;
    grid.checked_index(request.start_node)?;
    grid.checked_index(request.end_node)?;
    let solution = request
        .algorithm
        .solve(&mut grid, request.start_node, request.end_node);
    Ok(SearchResponse {
        visited_nodes: solution.trace,
        shortest_path: solution.path,
    })
}

/// Ticket identifying a submitted request.
pub type Ticket = u64;

/// A ticket paired with the outcome of its request.
pub type Answer = (Ticket, Result<SearchResponse, EngineError>);

type Job = (Ticket, SearchRequest);

/// A background thread answering [`SearchRequest`]s in submission order.
///
/// Dropping the worker closes its queue and joins the thread.
#[derive(Debug)]
pub struct SearchWorker {
    jobs: Option<Sender<Job>>,
    answers: Receiver<Answer>,
    handle: Option<JoinHandle<()>>,
    next: Ticket,
}

impl SearchWorker {
    /// Spawn the worker thread.
    pub fn spawn() -> std::io::Result<Self> {
        let (job_tx, job_rx): (Sender<Job>, Receiver<Job>) = mpsc::channel();
        let (answer_tx, answer_rx): (Sender<Answer>, Receiver<Answer>) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("waypoint-search".into())
            .spawn(move || {
                for (ticket, request) in job_rx {
                    debug!("worker: {} request #{ticket}", request.algorithm);
                    let answer = handle_request(&request);
                    if answer_tx.send((ticket, answer)).is_err() {
                        break;
                    }
                }
                debug!("worker: queue closed");
            })?;
        Ok(Self {
            jobs: Some(job_tx),
            answers: answer_rx,
            handle: Some(handle),
            next: 0,
        })
    }

    /// Queue a request. The returned ticket comes back with its answer.
    pub fn submit(&mut self, request: SearchRequest) -> Result<Ticket, EngineError> {
        let ticket = self.next;
        let jobs = self.jobs.as_ref().ok_or(EngineError::WorkerDisconnected)?;
        jobs.send((ticket, request))
            .map_err(|_| EngineError::WorkerDisconnected)?;
        self.next += 1;
        Ok(ticket)
    }

    /// Block until the next answer arrives.
    ///
    /// A request the worker could not serve still comes back with its
    /// ticket; the outer error only reports a lost worker.
    pub fn recv(&self) -> Result<Answer, EngineError> {
        self.answers
            .recv()
            .map_err(|_| EngineError::WorkerDisconnected)
    }

    /// The next answer if one is ready.
    pub fn try_recv(&self) -> Result<Option<Answer>, EngineError> {
        match self.answers.try_recv() {
            Ok(answer) => Ok(Some(answer)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(EngineError::WorkerDisconnected),
        }
    }

    /// Close the queue and wait for the thread to finish pending requests.
    pub fn shutdown(mut self) {
        self.join();
    }

    fn join(&mut self) {
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("search worker panicked");
            }
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::{CellSnapshot, GridError};

    fn loc(row: i32, column: i32) -> GridLocation {
        GridLocation::new(row, column)
    }

    fn request(algorithm: Algorithm) -> SearchRequest {
        let mut grid = Grid::new(3, 3);
        grid.apply_obstacles(&[loc(1, 1)]);
        SearchRequest {
            grid: grid.snapshot(),
            start_node: loc(0, 0),
            end_node: loc(2, 2),
            algorithm,
        }
    }

    #[test]
    fn handles_a_request_inline() {
        let response = handle_request(&request(Algorithm::Bfs)).unwrap();
        assert_eq!(response.shortest_path.len(), 5);
        assert!(!response.visited_nodes.contains(&loc(1, 1)));
        assert_eq!(response.visited_nodes.last(), Some(&loc(2, 2)));
    }

    #[test]
    fn out_of_range_markers_are_rejected() {
        let mut req = request(Algorithm::Dijkstra);
        req.end_node = loc(3, 0);
        assert!(matches!(
            handle_request(&req),
            Err(EngineError::InvalidLocation { .. })
        ));
    }

    #[test]
    fn malformed_snapshot_is_rejected() {
        let mut req = request(Algorithm::AStar);
        req.grid.cells.push(CellSnapshot::default());
        assert!(matches!(handle_request(&req), Err(EngineError::Grid(_))));
    }

    #[test]
    fn worker_answers_in_order() {
        let mut worker = SearchWorker::spawn().unwrap();
        let mut tickets = Vec::new();
        for algorithm in Algorithm::ALL {
            tickets.push(worker.submit(request(algorithm)).unwrap());
        }
        for (expected, algorithm) in tickets.into_iter().zip(Algorithm::ALL) {
            let (ticket, response) = worker.recv().unwrap();
            assert_eq!(ticket, expected);
            assert_eq!(response, handle_request(&request(algorithm)));
        }
        assert_eq!(worker.try_recv(), Ok(None));
        worker.shutdown();
    }

    #[test]
    fn worker_reports_request_errors() {
        let mut worker = SearchWorker::spawn().unwrap();
        let mut req = request(Algorithm::GreedyBestFirst);
        req.start_node = loc(-1, 0);
        let bad = worker.submit(req).unwrap();
        let good = worker.submit(request(Algorithm::Bfs)).unwrap();

        let (ticket, answer) = worker.recv().unwrap();
        assert_eq!(ticket, bad);
        assert!(matches!(answer, Err(EngineError::InvalidLocation { .. })));

        // The worker keeps serving after a bad request.
        let (ticket, answer) = worker.recv().unwrap();
        assert_eq!(ticket, good);
        assert!(answer.is_ok());
    }

    #[test]
    fn oversized_wire_grid_is_rejected() {
        let json = r#"{
            "grid": {"rows": 9223372036854775808, "columns": 2, "cells": []},
            "startNode": {"row": 0, "column": 0},
            "endNode": {"row": 0, "column": 1},
            "algorithm": "bfs"
        }"#;
        let req: SearchRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(
            handle_request(&req),
            Err(EngineError::Grid(GridError::TooLarge { .. }))
        ));
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let json = serde_json::to_value(request(Algorithm::AStar)).unwrap();
        assert_eq!(json["algorithm"], "astar");
        assert_eq!(json["startNode"]["row"], 0);
        assert_eq!(json["endNode"]["column"], 2);
        assert_eq!(json["grid"]["cells"][4]["obstacle"], true);

        let response = handle_request(&request(Algorithm::Bfs)).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("visitedNodes").is_some());
        assert_eq!(json["shortestPath"].as_array().map(Vec::len), Some(5));

        let back: SearchResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }
}
