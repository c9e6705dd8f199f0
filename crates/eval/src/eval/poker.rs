// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards poker ranking.
use serde::{Deserialize, Serialize};

use showdown_cards::{AceHigh, Rank, Valuator};

use super::value::{HandRank, HandValue};
use crate::{
    hand::{HandCards, RankGroup},
    ranker::Ranker,
};

/// The poker variant a [PokerRanker] ranks hands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Standard 52 cards poker.
    #[default]
    Standard,
    /// Short deck poker, 36 cards from six to ace, a flush beats a full house.
    ShortDeck,
}

/// Ranks five cards poker hands with aces high.
///
/// The ace plays low in the wheel straight (A-5-4-3-2 or A-9-8-7-6 for the
/// short deck variant).
#[derive(Debug, Clone, Copy, Default)]
pub struct PokerRanker {
    variant: Variant,
}

impl PokerRanker {
    /// The number of cards in a hand.
    pub const HAND_SIZE: usize = 5;

    /// Creates a ranker for the given variant.
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    /// Creates a standard poker ranker.
    pub fn standard() -> Self {
        Self::new(Variant::Standard)
    }

    /// Creates a short deck poker ranker.
    pub fn short_deck() -> Self {
        Self::new(Variant::ShortDeck)
    }

    /// The ranker variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The weight of a hand category for this variant.
    pub fn weight(&self, rank: HandRank) -> u8 {
        match (self.variant, rank) {
            (Variant::ShortDeck, HandRank::Flush) => HandRank::FullHouse as u8,
            (Variant::ShortDeck, HandRank::FullHouse) => HandRank::Flush as u8,
            (_, rank) => rank as u8,
        }
    }

    fn wheel(&self) -> [Rank; 5] {
        use Rank::*;
        match self.variant {
            Variant::Standard => [Ace, Five, Four, Trey, Deuce],
            Variant::ShortDeck => [Ace, Nine, Eight, Seven, Six],
        }
    }
}

impl Ranker for PokerRanker {
    type Strength = HandValue;

    fn hand_size(&self) -> usize {
        Self::HAND_SIZE
    }

    fn valuator(&self) -> &dyn Valuator {
        &AceHigh
    }

    fn is_short_deck(&self) -> bool {
        self.variant() == Variant::ShortDeck
    }

    fn strength(&self, cards: &mut HandCards) -> HandValue {
        cards.sort();

        let is_flush = cards.is_flush();
        let is_wheel = cards.iter().map(|c| c.rank()).eq(self.wheel());

        if is_wheel || cards.is_straight() {
            let rank = if is_flush {
                HandRank::StraightFlush
            } else {
                HandRank::Straight
            };

            // The wheel high card is the one after the ace.
            let high = if is_wheel { &cards[1..2] } else { &cards[0..1] };
            return HandValue::new(rank, self.weight(rank), high);
        }

        let groups = cards.grouped_cards();
        let sizes = groups.iter().map(RankGroup::len).collect::<Vec<_>>();

        let rank = match sizes.as_slice() {
            [4, ..] => HandRank::FourOfAKind,
            [3, 2, ..] => HandRank::FullHouse,
            _ if is_flush => HandRank::Flush,
            [3, ..] => HandRank::ThreeOfAKind,
            [2, 2, ..] => HandRank::TwoPair,
            [2, ..] => HandRank::OnePair,
            _ => HandRank::HighCard,
        };

        let kickers = groups.iter().map(|g| g.cards[0]).collect::<Vec<_>>();
        HandValue::new(rank, self.weight(rank), &kickers)
    }
}
