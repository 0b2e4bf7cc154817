//! Heuristic estimates and f-value ranks.
//!
//! Terminal utility is a tagged value rather than an extreme float:
//! arithmetic with `±MAX`-style sentinels can overflow or silently lose
//! the sentinel property once a path cost is added. [`Estimate`] keeps the
//! win/loss markers out of the arithmetic entirely and [`Rank`] maps them
//! to the ordering extremes, which preserves the sentinel ordering exactly.

use std::cmp::Ordering;

/// A domain's estimate for a node.
///
/// The driver combines an estimate with the node's path cost `g` to form
/// the frontier rank (`Rank::from_parts`). Admissibility is a domain
/// responsibility; the driver interprets estimates only for ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Terminal state won by the maximizing side. Ranks after every finite
    /// f-value, so the frontier explores it last.
    MaxWin,
    /// Terminal state won by the minimizing side. Ranks before every finite
    /// f-value, so the frontier explores it first.
    MinWin,
    /// Terminal tie; contributes zero to the f-value.
    Draw,
    /// Remaining-cost estimate for a non-terminal state.
    Finite(f64),
}

/// An f-value with the terminal sentinels lifted out of the arithmetic.
///
/// Total order: `MinusInf < Finite(_) < PlusInf`, finite values compared
/// by `f64::total_cmp`. Total even for NaN, which keeps the frontier
/// comparator a strict weak ordering whatever the domain returns.
#[derive(Debug, Clone, Copy)]
pub enum Rank {
    MinusInf,
    Finite(f64),
    PlusInf,
}

impl Rank {
    /// Combine a path cost with a domain estimate.
    #[must_use]
    pub fn from_parts(cost: f64, estimate: Estimate) -> Self {
        match estimate {
            Estimate::MaxWin => Self::PlusInf,
            Estimate::MinWin => Self::MinusInf,
            Estimate::Draw => Self::Finite(cost),
            Estimate::Finite(h) => Self::Finite(cost + h),
        }
    }
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rank {}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::MinusInf, Self::MinusInf) | (Self::PlusInf, Self::PlusInf) => Ordering::Equal,
            (Self::MinusInf, _) | (_, Self::PlusInf) => Ordering::Less,
            (_, Self::MinusInf) | (Self::PlusInf, _) => Ordering::Greater,
            (Self::Finite(a), Self::Finite(b)) => a.total_cmp(b),
        }
    }
}
