//! Search node and frontier ordering key.

use std::fmt;

use crate::heuristic::Rank;

/// Index of a node in the arena built up during one search run.
///
/// Parent links are arena indices, never owning references: the arena
/// (carried by the search result) owns node lifetime, so the full
/// predecessor chain of the goal stays reachable after the run.
pub type NodeId = usize;

/// A node carried through the search.
///
/// The `element` payload is immutable for the node's lifetime and defines
/// node identity: two nodes are equal iff their elements are equal (`cost`
/// and `depth` do not participate).
///
/// `cost` is two-phase: a domain constructs a successor with `cost` holding
/// the *edge weight* from its predecessor; on admission the driver rewrites
/// it to the *cumulative path cost* `g = g(parent) + edge_weight`.
#[derive(Debug, Clone)]
pub struct SearchNode<E> {
    element: E,
    /// Edge weight at construction, cumulative path cost after admission.
    pub cost: f64,
    /// Edges from the initial node; ordering tie-break only.
    pub depth: u32,
    /// Arena index of the predecessor (`None` for the initial node).
    pub parent: Option<NodeId>,
}

impl<E> SearchNode<E> {
    /// Construct a candidate node: `cost` holds the edge weight from the
    /// predecessor, no parent link, depth 0. Domains create nodes through
    /// this constructor only; the driver rewrites the bookkeeping fields
    /// and never fabricates payloads.
    #[must_use]
    pub fn new(element: E, edge_weight: f64) -> Self {
        Self {
            element,
            cost: edge_weight,
            depth: 0,
            parent: None,
        }
    }

    /// The immutable domain payload.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Consume the node, yielding its payload.
    #[must_use]
    pub fn into_element(self) -> E {
        self.element
    }
}

impl<E: PartialEq> PartialEq for SearchNode<E> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl<E: fmt::Display> fmt::Display for SearchNode<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.element.fmt(f)
    }
}

/// The frontier ordering key: `(rank, depth)`.
///
/// Lower rank first (`rank` is the f-value `g + h` with terminal sentinels
/// mapped to the infinities — see [`Rank`]); ties broken by shallower
/// depth. Full ties keep admission order, which the frontier guarantees by
/// inserting after all equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub rank: Rank,
    pub depth: u32,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.depth.cmp(&other.depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_rank_sorts_first() {
        let a = FrontierKey {
            rank: Rank::Finite(1.0),
            depth: 9,
        };
        let b = FrontierKey {
            rank: Rank::Finite(2.0),
            depth: 0,
        };
        assert!(a < b, "lower f-value should sort first regardless of depth");
    }

    #[test]
    fn rank_ties_broken_by_depth() {
        let shallow = FrontierKey {
            rank: Rank::Finite(3.0),
            depth: 1,
        };
        let deep = FrontierKey {
            rank: Rank::Finite(3.0),
            depth: 2,
        };
        assert!(shallow < deep, "shallower node should sort first on f tie");
    }

    #[test]
    fn sentinel_ranks_bracket_all_finite_keys() {
        let min = FrontierKey {
            rank: Rank::MinusInf,
            depth: u32::MAX,
        };
        let finite = FrontierKey {
            rank: Rank::Finite(f64::MAX),
            depth: 0,
        };
        let max = FrontierKey {
            rank: Rank::PlusInf,
            depth: 0,
        };
        assert!(min < finite);
        assert!(finite < max);
    }

    #[test]
    fn node_equality_ignores_bookkeeping() {
        let mut a = SearchNode::new("pos", 0.0);
        let b = SearchNode::new("pos", 7.5);
        a.depth = 4;
        a.parent = Some(2);
        assert_eq!(a, b, "equality is payload equality only");
        assert_ne!(SearchNode::new("other", 0.0), b);
    }

    #[test]
    fn new_node_has_no_bookkeeping() {
        let n = SearchNode::new(42u8, 5.0);
        assert_eq!(n.cost, 5.0, "cost starts as the edge weight");
        assert_eq!(n.depth, 0);
        assert!(n.parent.is_none());
    }

    #[test]
    fn display_delegates_to_element() {
        let n = SearchNode::new(17, 0.0);
        assert_eq!(n.to_string(), "17");
    }
}
