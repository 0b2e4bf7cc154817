//! Search trace: an append-only log of driver decisions.
//!
//! The driver reports every frontier pop, admission, duplicate decision,
//! and the final termination to a [`TraceSink`]. Tracing is observational
//! only — a sink must not (and cannot) alter search behavior. The default
//! sink is [`NullTrace`]; [`JsonlTrace`] captures the run as JSON Lines
//! for debugging and golden-file inspection.

use std::fs;
use std::io;
use std::path::Path;

use crate::heuristic::Rank;
use crate::node::{FrontierKey, NodeId};
use crate::search::Termination;

/// Receiver for search events, in the order the driver makes decisions.
///
/// All hooks default to no-ops so sinks implement only what they record.
pub trait TraceSink {
    /// A node was removed from the frontier for expansion.
    fn on_pop(&mut self, id: NodeId, key: FrontierKey) {
        let _ = (id, key);
    }

    /// A successor entered the frontier.
    fn on_admit(&mut self, id: NodeId, parent: Option<NodeId>, cost: f64, key: FrontierKey) {
        let _ = (id, parent, cost, key);
    }

    /// A candidate was dropped: an open node with an equal payload already
    /// has a path cost no worse than `candidate_cost`.
    fn on_discard(&mut self, kept: NodeId, candidate_cost: f64) {
        let _ = (kept, candidate_cost);
    }

    /// An open node was evicted in favor of a strictly cheaper candidate
    /// with an equal payload. `on_admit` follows for the replacement.
    fn on_replace(&mut self, evicted: NodeId, admitted: NodeId) {
        let _ = (evicted, admitted);
    }

    /// The search terminated.
    fn on_finish(&mut self, termination: Termination, expansions: u64) {
        let _ = (termination, expansions);
    }
}

/// Sink that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {}

/// Sink that records one JSON object per event.
#[derive(Debug, Default)]
pub struct JsonlTrace {
    lines: Vec<String>,
}

impl JsonlTrace {
    /// Create an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, one JSON object per line.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write the trace as a JSON Lines file.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from creating or writing the file.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let mut out = self.lines.join("\n");
        out.push('\n');
        fs::write(path, out)
    }

    fn push(&mut self, value: &serde_json::Value) {
        self.lines.push(value.to_string());
    }
}

fn rank_json(rank: Rank) -> serde_json::Value {
    match rank {
        Rank::MinusInf => serde_json::json!("-inf"),
        Rank::Finite(f) => serde_json::json!(f),
        Rank::PlusInf => serde_json::json!("inf"),
    }
}

impl TraceSink for JsonlTrace {
    fn on_pop(&mut self, id: NodeId, key: FrontierKey) {
        self.push(&serde_json::json!({
            "event": "pop",
            "node": id,
            "f": rank_json(key.rank),
            "depth": key.depth,
        }));
    }

    fn on_admit(&mut self, id: NodeId, parent: Option<NodeId>, cost: f64, key: FrontierKey) {
        self.push(&serde_json::json!({
            "event": "admit",
            "node": id,
            "parent": parent,
            "cost": cost,
            "f": rank_json(key.rank),
            "depth": key.depth,
        }));
    }

    fn on_discard(&mut self, kept: NodeId, candidate_cost: f64) {
        self.push(&serde_json::json!({
            "event": "discard",
            "kept": kept,
            "candidate_cost": candidate_cost,
        }));
    }

    fn on_replace(&mut self, evicted: NodeId, admitted: NodeId) {
        self.push(&serde_json::json!({
            "event": "replace",
            "evicted": evicted,
            "admitted": admitted,
        }));
    }

    fn on_finish(&mut self, termination: Termination, expansions: u64) {
        let reason = match termination {
            Termination::GoalFound => "goal_found",
            Termination::FrontierExhausted => "frontier_exhausted",
            Termination::BudgetExhausted => "budget_exhausted",
        };
        self.push(&serde_json::json!({
            "event": "finish",
            "termination": reason,
            "expansions": expansions,
        }));
    }
}
