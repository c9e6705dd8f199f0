// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories and values.
use serde::{Deserialize, Serialize};
use std::{cmp, fmt, hash};

use showdown_cards::{Card, Rank};

use crate::ranker::Strength;

/// A poker hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs, straights or flushes.
    HighCard = 0,
    /// Two cards with the same rank.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with cards of the same suit.
    StraightFlush,
}

impl HandRank {
    /// Returns all hand ranks from low to high.
    pub fn hand_ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The value of a poker hand.
///
/// The value packs the category weight and up to five tie-break card values,
/// from the most to the least significant, into a single integer:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxxxxxx|wwwwaaaa|bbbbcccc|ddddeeee|
///   +--------+--------+--------+--------+
///   w = category weight
///   a-e = tie-break card values
/// ```
///
/// Two values compare equal when their packed values are the same.
#[derive(Clone, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    ranks: Vec<Rank>,
    value: u32,
}

impl HandValue {
    /// The maximum number of tie-break cards.
    pub const MAX_KICKERS: usize = 5;

    /// Creates a new hand value.
    ///
    /// The `weight` orders categories, `kickers` are the cards that break ties
    /// between hands with the same category, in order of significance.
    ///
    /// The weight and the kickers values are packed in 4 bits each and must be
    /// at most 15, the [AceHigh](showdown_cards::AceHigh) and
    /// [AceLow](showdown_cards::AceLow) valuators stay in this range.
    pub fn new(rank: HandRank, weight: u8, kickers: &[Card]) -> Self {
        let kickers = &kickers[..kickers.len().min(Self::MAX_KICKERS)];

        debug_assert!(weight <= 0xf, "weight={weight} must be <= 15");
        debug_assert!(
            kickers.iter().all(|c| c.value() <= 0xf),
            "kickers values must be <= 15"
        );

        let value = kickers
            .iter()
            .enumerate()
            .fold((weight as u32 & 0xf) << 20, |acc, (idx, c)| {
                acc | ((c.value() as u32 & 0xf) << (16 - 4 * idx))
            });

        Self {
            rank,
            ranks: kickers.iter().map(Card::rank).collect(),
            value,
        }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break ranks in order of significance.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }
}

impl Strength for HandValue {
    fn value(&self) -> u32 {
        self.value
    }

    fn short_name(&self) -> &str {
        self.rank.name()
    }

    fn long_name(&self) -> String {
        match (self.rank, self.ranks.as_slice()) {
            (HandRank::HighCard, [r, ..]) => format!("{} High", r.name()),
            (HandRank::OnePair, [r, ..]) => format!("Pair of {}", r.plural()),
            (HandRank::TwoPair, [r1, r2, ..]) => {
                format!("Two Pair, {} and {}", r1.plural(), r2.plural())
            }
            (HandRank::ThreeOfAKind, [r, ..]) => format!("Three of a Kind, {}", r.plural()),
            (HandRank::Straight, [r, ..]) => format!("Straight, {} High", r.name()),
            (HandRank::Flush, [r, ..]) => format!("Flush, {} High", r.name()),
            (HandRank::FullHouse, [r1, r2, ..]) => {
                format!("Full House, {} over {}", r1.plural(), r2.plural())
            }
            (HandRank::FourOfAKind, [r, ..]) => format!("Four of a Kind, {}", r.plural()),
            (HandRank::StraightFlush, [Rank::Ace, ..]) => "Royal Flush".to_string(),
            (HandRank::StraightFlush, [r, ..]) => format!("Straight Flush, {} High", r.name()),
            (rank, _) => rank.name().to_string(),
        }
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl hash::Hash for HandValue {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Debug for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandValue({}, 0x{:06x})", self.long_name(), self.value)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.long_name())
    }
}
