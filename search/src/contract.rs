//! Capability contracts between a domain and the search driver.

use crate::heuristic::Estimate;
use crate::node::SearchNode;
use crate::search::SearchResult;

/// The capability a domain must provide to be searched.
///
/// # Contract
///
/// - Nodes are created by the domain only (initial node and successor
///   candidates); the driver rewrites their bookkeeping fields but never
///   fabricates payloads.
/// - `successors` must be deterministic: the same node yields the same
///   candidates in the same order.
/// - The driver validates none of these outputs. Negative edge weights,
///   a negative `size_hint`, or unreachable successors are domain defects
///   with unspecified search behavior; a panicking domain aborts the
///   search as-is.
pub trait Searchable {
    /// The opaque payload each node wraps (e.g., a board position).
    /// Payload equality defines node identity for duplicate suppression.
    type Element: PartialEq;

    /// The node the search starts from: cost 0, depth 0, no predecessor.
    fn initial_state(&self) -> SearchNode<Self::Element>;

    /// Candidate successors of `node`, each carrying its *edge weight* in
    /// `cost` (the driver converts it to a path cost on admission).
    fn successors(&self, node: &SearchNode<Self::Element>) -> Vec<SearchNode<Self::Element>>;

    /// Pure goal predicate.
    fn is_goal(&self, node: &SearchNode<Self::Element>) -> bool;

    /// Estimate for `node`. Admissibility is the domain's responsibility.
    fn heuristic(&self, node: &SearchNode<Self::Element>) -> Estimate;

    /// Opaque scalar the driver squares into the iteration budget.
    /// Uninterpreted otherwise: not validated for sign or magnitude.
    fn size_hint(&self) -> f64;
}

/// The contract a search algorithm offers to callers.
pub trait Searcher<D: Searchable> {
    /// Run the search over `domain` to completion. A goal is reported via
    /// [`SearchResult::goal_node`]; exhaustion (empty frontier or consumed
    /// budget) yields a result without a goal, never an error.
    fn search(&self, domain: &D) -> SearchResult<D::Element>;
}
