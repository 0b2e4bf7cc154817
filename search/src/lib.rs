//! Waypoint Search: a generic best-first (A*-style) search core.
//!
//! The core is the algorithm only — open-list management, node ordering
//! and tie-breaking, cost accumulation, goal detection, and iteration
//! bounding. Domains plug in through a small capability contract and are
//! otherwise opaque; `waypoint-reversi` is the illustrative collaborator.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint-search  ←  waypoint-reversi
//! (driver, frontier)   (board domain implementing the contract)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`] — immutable-payload node with driver bookkeeping
//! - [`contract::Searchable`] — the capability a domain provides
//! - [`contract::Searcher`] — the contract the algorithm offers callers
//! - [`heuristic::Estimate`] — domain estimate with tagged terminal sentinels
//! - [`search::Astar`] — the driver; [`search::SearchResult`] its outcome
//! - [`trace::TraceSink`] — observational event log of a run

#![forbid(unsafe_code)]

pub mod contract;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod search;
pub mod trace;
