//! The open list: discovered-but-not-yet-expanded nodes, kept sorted.
//!
//! A linear structure kept in key order is deliberate: duplicate handling
//! needs payload-equality lookup and removal, and both the successor
//! branching and the iteration budget are small for the intended use. A
//! heap plus a payload index would also satisfy the observable ordering;
//! the sorted list keeps admission-order stability trivial.

use crate::node::{FrontierKey, NodeId};

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: NodeId,
    key: FrontierKey,
}

/// A frontier of arena node ids ordered ascending by [`FrontierKey`].
///
/// The node arena itself lives in the driver; the frontier only tracks
/// which ids are open and in what order. Admission inserts *after* all
/// entries with an equal key, so full ties dequeue in admission order —
/// the stable, deterministic tie order the driver relies on.
#[derive(Debug, Default)]
pub struct Frontier {
    entries: Vec<Entry>,
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id` at its sorted position, after any equal keys.
    pub fn admit(&mut self, id: NodeId, key: FrontierKey) {
        let at = self.entries.partition_point(|e| e.key <= key);
        self.entries.insert(at, Entry { id, key });
        if self.entries.len() > self.high_water {
            self.high_water = self.entries.len();
        }
    }

    /// Remove and return the best-ranked entry.
    #[must_use]
    pub fn pop_best(&mut self) -> Option<(NodeId, FrontierKey)> {
        if self.entries.is_empty() {
            return None;
        }
        let e = self.entries.remove(0);
        Some((e.id, e.key))
    }

    /// Iterate the open node ids in rank order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Remove the entry for `id`. Returns `false` if `id` is not open.
    pub fn evict(&mut self, id: NodeId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
