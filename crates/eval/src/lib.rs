// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! A [Hand] is built from cards, or their text notation, and a [Ranker] that
//! defines the number of cards in a hand, how cards are valued and how the
//! hand strength is computed. Building a hand checks the number of cards and
//! rejects duplicates, then the ranker computes the strength using the hand
//! derived views: sorted cards, cards grouped by rank, flush and straight
//! checks.
//!
//! ```
//! # use showdown_eval::*;
//! let ranker = PokerRanker::standard();
//! let h1 = Hand::new(["AS", "KS", "QS", "JS", "TS"], &ranker).unwrap();
//! let h2 = Hand::new(["2H", "2D", "5S", "9C", "KH"], &ranker).unwrap();
//! assert!(h1.strength() > h2.strength());
//! assert_eq!(h2.short_name(), "One Pair");
//!
//! let err = Hand::new(["AS", "AS", "2D", "3C", "4H"], &ranker).unwrap_err();
//! assert_eq!(err, HandError::DuplicateCard("AS".to_string()));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub mod hand;
pub mod ranker;

pub use eval::{BestOfRanker, HandRank, HandValue, PokerRanker, Variant};
pub use hand::{CardInput, Hand, HandCards, HandError, RankGroup};
pub use ranker::{Ranker, Strength};

// Reexport cards types.
pub use showdown_cards::{AceHigh, AceLow, Card, CardError, Deck, Rank, Suit, Valuator};
