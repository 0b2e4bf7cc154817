//! The A* driver: frontier loop, duplicate policy, iteration budget.

use crate::contract::{Searchable, Searcher};
use crate::frontier::Frontier;
use crate::heuristic::Rank;
use crate::node::{FrontierKey, NodeId, SearchNode};
use crate::trace::{NullTrace, TraceSink};

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The popped node satisfied the goal predicate.
    GoalFound,
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
    /// The iteration budget (`size_hint²` expansions) was consumed.
    BudgetExhausted,
}

/// Result of a search run.
///
/// The arena retains every admitted node so the goal's predecessor chain
/// stays walkable after the run. Absence of a goal is a value, never an
/// error: `goal` is `None` and [`Termination`] says which way the loop
/// exited.
#[derive(Debug)]
pub struct SearchResult<E> {
    /// Every admitted node, indexed by [`NodeId`]; id 0 is the initial node.
    pub nodes: Vec<SearchNode<E>>,
    /// Arena id of the goal node, if one was reached.
    pub goal: Option<NodeId>,
    /// Why the run stopped.
    pub termination: Termination,
    /// Outer-loop iterations consumed (goal pops do not count).
    pub expansions: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
}

impl<E> SearchResult<E> {
    /// Whether the run ended on a goal.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.goal.is_some()
    }

    /// The goal node, if one was reached.
    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNode<E>> {
        self.goal.map(|id| &self.nodes[id])
    }

    /// The solution path, initial node first, reconstructed by walking the
    /// goal's predecessor chain. Empty when no goal was reached.
    #[must_use]
    pub fn path(&self) -> Vec<&SearchNode<E>> {
        let mut path = Vec::new();
        let mut current = self.goal;
        while let Some(id) = current {
            path.push(&self.nodes[id]);
            current = self.nodes[id].parent;
        }
        path.reverse();
        path
    }
}

/// Best-first informed search over any [`Searchable`] domain.
///
/// Single-threaded and synchronous: one call runs the whole loop with no
/// suspension or cancellation beyond the iteration budget. Concurrent
/// searches over independent domains are independent — the frontier and
/// arena are confined to one invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Astar;

impl Astar {
    /// Create a driver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run the search, reporting every decision to `trace`.
    ///
    /// Tracing is observational; `search_traced` and [`Searcher::search`]
    /// produce identical results for a deterministic domain.
    pub fn search_traced<D, T>(&self, domain: &D, trace: &mut T) -> SearchResult<D::Element>
    where
        D: Searchable,
        T: TraceSink,
    {
        let budget = domain.size_hint().powi(2);

        let mut nodes: Vec<SearchNode<D::Element>> = Vec::new();
        let mut frontier = Frontier::new();
        let mut expansions: u64 = 0;
        let mut goal: Option<NodeId> = None;

        let initial = domain.initial_state();
        let initial_key = key_for(domain, &initial);
        let initial_cost = initial.cost;
        nodes.push(initial);
        frontier.admit(0, initial_key);
        trace.on_admit(0, None, initial_cost, initial_key);

        let termination = loop {
            if frontier.is_empty() {
                break Termination::FrontierExhausted;
            }
            #[allow(clippy::cast_precision_loss)]
            if expansions as f64 >= budget {
                break Termination::BudgetExhausted;
            }
            let Some((current_id, current_key)) = frontier.pop_best() else {
                break Termination::FrontierExhausted;
            };
            trace.on_pop(current_id, current_key);

            if domain.is_goal(&nodes[current_id]) {
                goal = Some(current_id);
                break Termination::GoalFound;
            }

            for mut candidate in domain.successors(&nodes[current_id]) {
                // Edge weight → cumulative path cost, then link to parent.
                candidate.cost += nodes[current_id].cost;
                candidate.depth = nodes[current_id].depth + 1;
                candidate.parent = Some(current_id);

                // Duplicate policy: only the current frontier is checked
                // (no closed set); an open node with an equal payload
                // survives unless the candidate is strictly cheaper.
                let duplicate = frontier.ids().find(|&id| nodes[id] == candidate);
                if let Some(open_id) = duplicate {
                    if nodes[open_id].cost <= candidate.cost {
                        trace.on_discard(open_id, candidate.cost);
                        continue;
                    }
                    frontier.evict(open_id);
                    trace.on_replace(open_id, nodes.len());
                }

                let key = key_for(domain, &candidate);
                let cost = candidate.cost;
                let id = nodes.len();
                nodes.push(candidate);
                frontier.admit(id, key);
                trace.on_admit(id, Some(current_id), cost, key);
            }

            expansions += 1;
        };

        trace.on_finish(termination, expansions);

        SearchResult {
            nodes,
            goal,
            termination,
            expansions,
            frontier_high_water: frontier.high_water(),
        }
    }
}

impl<D: Searchable> Searcher<D> for Astar {
    fn search(&self, domain: &D) -> SearchResult<D::Element> {
        self.search_traced(domain, &mut NullTrace)
    }
}

fn key_for<D: Searchable>(domain: &D, node: &SearchNode<D::Element>) -> FrontierKey {
    FrontierKey {
        rank: Rank::from_parts(node.cost, domain.heuristic(node)),
        depth: node.depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Estimate;
    use crate::trace::JsonlTrace;

    /// Weighted digraph over string labels; zero heuristic everywhere.
    struct TinyGraph {
        edges: Vec<(&'static str, &'static str, f64)>,
        start: &'static str,
        goals: Vec<&'static str>,
        size_hint: f64,
    }

    impl Searchable for TinyGraph {
        type Element = &'static str;

        fn initial_state(&self) -> SearchNode<&'static str> {
            SearchNode::new(self.start, 0.0)
        }

        fn successors(&self, node: &SearchNode<&'static str>) -> Vec<SearchNode<&'static str>> {
            self.edges
                .iter()
                .filter(|(from, _, _)| from == node.element())
                .map(|&(_, to, weight)| SearchNode::new(to, weight))
                .collect()
        }

        fn is_goal(&self, node: &SearchNode<&'static str>) -> bool {
            self.goals.contains(node.element())
        }

        fn heuristic(&self, _node: &SearchNode<&'static str>) -> Estimate {
            Estimate::Finite(0.0)
        }

        fn size_hint(&self) -> f64 {
            self.size_hint
        }
    }

    #[test]
    fn trivial_goal_returns_initial_with_zero_expansions() {
        let domain = TinyGraph {
            edges: vec![("start", "other", 1.0)],
            start: "start",
            goals: vec!["start"],
            size_hint: 4.0,
        };
        let result = Astar::new().search(&domain);

        assert_eq!(result.termination, Termination::GoalFound);
        assert_eq!(result.expansions, 0, "no successor expansion happened");
        let goal = result.goal_node().unwrap();
        assert_eq!(*goal.element(), "start");
        assert_eq!(goal.cost, 0.0);
        assert_eq!(goal.depth, 0);
        assert!(goal.parent.is_none());
        assert_eq!(result.path().len(), 1);
    }

    #[test]
    fn two_ply_comparison_reaches_goal_via_cheaper_edge() {
        let domain = TinyGraph {
            edges: vec![
                ("i", "a", 5.0),
                ("i", "b", 1.0),
                ("a", "g", 1.0),
                ("b", "g", 1.0),
            ],
            start: "i",
            goals: vec!["g"],
            size_hint: 4.0,
        };
        let result = Astar::new().search(&domain);

        let goal = result.goal_node().unwrap();
        assert_eq!(*goal.element(), "g");
        assert_eq!(goal.cost, 2.0, "goal reached through the weight-1 edge");
        let path: Vec<&str> = result.path().iter().map(|n| *n.element()).collect();
        assert_eq!(path, vec!["i", "b", "g"]);
    }

    #[test]
    fn cheaper_duplicate_replaces_open_node() {
        // "m" is discovered at cost 5 directly, then rediscovered at cost 2
        // through "s" while still open; the cheaper entry must win.
        let domain = TinyGraph {
            edges: vec![
                ("i", "m", 5.0),
                ("i", "s", 1.0),
                ("s", "m", 1.0),
                ("m", "g", 1.0),
            ],
            start: "i",
            goals: vec!["g"],
            size_hint: 4.0,
        };
        let mut trace = JsonlTrace::new();
        let result = Astar::new().search_traced(&domain, &mut trace);

        let goal = result.goal_node().unwrap();
        assert_eq!(goal.cost, 3.0);
        let path: Vec<&str> = result.path().iter().map(|n| *n.element()).collect();
        assert_eq!(path, vec!["i", "s", "m", "g"]);
        assert!(
            trace.lines().iter().any(|l| l.contains("\"replace\"")),
            "the open duplicate must have been evicted"
        );
    }

    #[test]
    fn worse_duplicate_leaves_frontier_unchanged() {
        // "m" is discovered at cost 1 and still open when "s" rediscovers
        // it at cost 2; the candidate must be discarded and the original
        // expanded. ("s" is admitted first, so it pops before "m" on the
        // full f/depth tie.)
        let domain = TinyGraph {
            edges: vec![
                ("i", "s", 1.0),
                ("i", "m", 1.0),
                ("s", "m", 1.0),
                ("m", "g", 1.0),
            ],
            start: "i",
            goals: vec!["g"],
            size_hint: 4.0,
        };
        let mut trace = JsonlTrace::new();
        let result = Astar::new().search_traced(&domain, &mut trace);

        assert_eq!(result.goal_node().unwrap().cost, 2.0);
        let path: Vec<&str> = result.path().iter().map(|n| *n.element()).collect();
        assert_eq!(path, vec!["i", "m", "g"]);
        assert!(trace.lines().iter().any(|l| l.contains("\"discard\"")));
        assert!(!trace.lines().iter().any(|l| l.contains("\"replace\"")));
    }

    #[test]
    fn budget_exhaustion_returns_no_goal() {
        // Goal two expansions away, budget of size_hint² = 1.
        let domain = TinyGraph {
            edges: vec![("i", "x", 1.0), ("x", "g", 1.0)],
            start: "i",
            goals: vec!["g"],
            size_hint: 1.0,
        };
        let result = Astar::new().search(&domain);

        assert_eq!(result.termination, Termination::BudgetExhausted);
        assert!(result.goal.is_none());
        assert_eq!(result.expansions, 1);
        assert!(result.path().is_empty());
    }

    #[test]
    fn zero_size_hint_never_enters_the_loop() {
        // A zero hint squares to a zero budget: even an immediately
        // satisfied goal is never popped.
        let domain = TinyGraph {
            edges: vec![],
            start: "i",
            goals: vec!["i"],
            size_hint: 0.0,
        };
        let result = Astar::new().search(&domain);

        assert_eq!(result.termination, Termination::BudgetExhausted);
        assert!(result.goal.is_none());
    }

    #[test]
    fn exhausted_frontier_returns_no_goal() {
        let domain = TinyGraph {
            edges: vec![("i", "a", 1.0), ("i", "b", 1.0)],
            start: "i",
            goals: vec!["unreachable"],
            size_hint: 10.0,
        };
        let result = Astar::new().search(&domain);

        assert_eq!(result.termination, Termination::FrontierExhausted);
        assert!(result.goal.is_none());
        assert_eq!(result.expansions, 3, "i, a, b each expanded once");
    }

    #[test]
    fn path_costs_are_cumulative_edge_weights() {
        let domain = TinyGraph {
            edges: vec![("i", "a", 2.5), ("a", "b", 0.5), ("b", "g", 4.0)],
            start: "i",
            goals: vec!["g"],
            size_hint: 4.0,
        };
        let result = Astar::new().search(&domain);

        let costs: Vec<f64> = result.path().iter().map(|n| n.cost).collect();
        assert_eq!(costs, vec![0.0, 2.5, 3.0, 7.0]);
        let depths: Vec<u32> = result.path().iter().map(|n| n.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 3]);
    }

    #[test]
    fn equal_f_prefers_shallower_node() {
        // After two expansions the frontier holds "d1" (f 2, depth 1) and
        // "d2" (f 2, depth 2); both are goals, the shallower must win.
        let domain = TinyGraph {
            edges: vec![("i", "s", 1.0), ("i", "d1", 2.0), ("s", "d2", 1.0)],
            start: "i",
            goals: vec!["d1", "d2"],
            size_hint: 4.0,
        };
        let result = Astar::new().search(&domain);

        let goal = result.goal_node().unwrap();
        assert_eq!(*goal.element(), "d1");
        assert_eq!(goal.depth, 1);
    }

    #[test]
    fn full_tie_dequeues_in_admission_order() {
        let domain = TinyGraph {
            edges: vec![("i", "g1", 1.0), ("i", "g2", 1.0)],
            start: "i",
            goals: vec!["g1", "g2"],
            size_hint: 4.0,
        };
        let result = Astar::new().search(&domain);
        assert_eq!(*result.goal_node().unwrap().element(), "g1");
    }

    #[test]
    fn tracing_does_not_change_the_outcome() {
        let domain = TinyGraph {
            edges: vec![
                ("i", "a", 5.0),
                ("i", "b", 1.0),
                ("a", "g", 1.0),
                ("b", "g", 1.0),
            ],
            start: "i",
            goals: vec!["g"],
            size_hint: 4.0,
        };
        let plain = Astar::new().search(&domain);
        let mut trace = JsonlTrace::new();
        let traced = Astar::new().search_traced(&domain, &mut trace);

        assert_eq!(plain.termination, traced.termination);
        assert_eq!(plain.expansions, traced.expansions);
        assert_eq!(plain.goal, traced.goal);
        let last = trace.lines().last().unwrap();
        assert!(last.contains("\"finish\""), "finish event is last");
    }

    /// Both terminal successors are immediately reachable; the min-win
    /// sentinel ranks first, so the driver explores toward it first.
    struct TerminalPair;

    impl Searchable for TerminalPair {
        type Element = &'static str;

        fn initial_state(&self) -> SearchNode<&'static str> {
            SearchNode::new("root", 0.0)
        }

        fn successors(&self, node: &SearchNode<&'static str>) -> Vec<SearchNode<&'static str>> {
            match *node.element() {
                "root" => vec![SearchNode::new("max_win", 0.0), SearchNode::new("min_win", 0.0)],
                _ => Vec::new(),
            }
        }

        fn is_goal(&self, node: &SearchNode<&'static str>) -> bool {
            *node.element() != "root"
        }

        fn heuristic(&self, node: &SearchNode<&'static str>) -> Estimate {
            match *node.element() {
                "max_win" => Estimate::MaxWin,
                "min_win" => Estimate::MinWin,
                _ => Estimate::Finite(0.0),
            }
        }

        fn size_hint(&self) -> f64 {
            2.0
        }
    }

    #[test]
    fn min_win_terminal_is_explored_first() {
        let result = Astar::new().search(&TerminalPair);
        assert_eq!(*result.goal_node().unwrap().element(), "min_win");
    }

    #[test]
    fn negative_size_hint_squares_to_a_positive_budget() {
        let domain = TinyGraph {
            edges: vec![("i", "g", 1.0)],
            start: "i",
            goals: vec!["g"],
            size_hint: -2.0,
        };
        let result = Astar::new().search(&domain);
        assert!(result.is_goal_reached(), "(-2)² = 4 expansions available");
    }
}
