// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker table.
//!
//! A [Table] seats players, deals them cards from a shuffled deck and ranks
//! their hands at showdown using a [Ranker](showdown_eval::Ranker). The state
//! of a [Deal] as seen by a player is returned as a serializable [TableState]
//! value, the caller decides where to write it.
//!
//! ```
//! # use showdown_table::*;
//! # use showdown_eval::BestOfRanker;
//! let mut table = Table::new(BestOfRanker::holdem(), Config::default()).unwrap();
//! table.add_player(0, "alice").unwrap();
//! table.add_player(3, "bob").unwrap();
//!
//! let deal = table.deal(&mut rand::rng()).unwrap();
//! let state = deal.state(0);
//! assert!(state.players[0].cards.is_some());
//! assert!(state.players[1].cards.is_none());
//!
//! let showdown = table.showdown(&deal).unwrap();
//! assert!(!showdown.winners.is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod state;
pub mod table;

pub use state::{Deal, PlayerState, SeatedPlayer, Showdown, ShowdownEntry, TableState};
pub use table::{Config, Table, TableError};
