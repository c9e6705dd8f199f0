// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand ranking strategies.
//!
//! The [PokerRanker] ranks five cards hands for standard and short deck poker,
//! producing a [HandValue] that orders hands by category and then by the
//! values of the cards that break ties. The [BestOfRanker] ranks larger hands
//! by their best subset, i.e. the best 5 cards out of 7 for Texas Hold'em.

mod best;
mod poker;
mod value;

pub use best::BestOfRanker;
pub use poker::{PokerRanker, Variant};
pub use value::{HandRank, HandValue};
