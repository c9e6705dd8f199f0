// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.value() > kd.value());
//! ```
//!
//! the [Valuator] policies that assign numeric values to ranks:
//!
//! ```
//! # use showdown_cards::{AceLow, Card};
//! let ace = Card::parse("AS", &AceLow).unwrap();
//! assert_eq!(ace.value(), 1);
//! ```
//!
//! and a [Deck] type for shuffling and drawing cards until the deck is exhausted:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let mut counter = 0;
//! while let Some(_card) = deck.draw() {
//!     counter += 1;
//! }
//! assert_eq!(counter, Deck::SIZE);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
mod deck;
mod value;

pub use cards::{Card, CardError, Rank, Suit};
pub use deck::Deck;
pub use value::{AceHigh, AceLow, Valuator};
