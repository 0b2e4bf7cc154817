//! Waypoint Reversi: the illustrative domain for `waypoint-search`.
//!
//! A two-player board game implementing the search core's [`Searchable`]
//! capability. The domain owns all game knowledge — placement legality,
//! flip resolution, terminal detection, and the positional evaluation —
//! while the driver sees only opaque board payloads.
//!
//! [`Searchable`]: waypoint_search::contract::Searchable

#![forbid(unsafe_code)]

pub mod board;
pub mod game;
