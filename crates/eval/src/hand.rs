// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand construction and derived views.
use ahash::AHashMap;
use std::ops;
use thiserror::Error;

use showdown_cards::{Card, CardError, Rank, Valuator};

use crate::ranker::{Ranker, Strength};

/// Error returned when a hand cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The number of cards doesn't match the ranker hand size.
    #[error("Hand must contain exactly {expected} cards, got {actual}")]
    InvalidHandSize {
        /// The ranker hand size.
        expected: usize,
        /// The number of cards given.
        actual: usize,
    },
    /// The same card appears more than once.
    #[error("Duplicate cards: {0}")]
    DuplicateCard(String),
    /// A card text notation is invalid.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// A card given to build a hand, either a card or its text notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardInput {
    /// A card.
    Card(Card),
    /// A card text notation parsed with the ranker valuator.
    Text(String),
}

impl CardInput {
    fn into_card(self, valuator: &dyn Valuator) -> Result<Card, CardError> {
        match self {
            CardInput::Card(card) => Ok(card),
            CardInput::Text(text) => Card::parse(&text, valuator),
        }
    }
}

impl From<Card> for CardInput {
    fn from(card: Card) -> Self {
        CardInput::Card(card)
    }
}

impl From<&Card> for CardInput {
    fn from(card: &Card) -> Self {
        CardInput::Card(*card)
    }
}

impl From<&str> for CardInput {
    fn from(text: &str) -> Self {
        CardInput::Text(text.to_string())
    }
}

impl From<String> for CardInput {
    fn from(text: String) -> Self {
        CardInput::Text(text)
    }
}

/// A group of cards with the same rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    /// The cards rank.
    pub rank: Rank,
    /// The cards with this rank in hand order.
    pub cards: Vec<Card>,
}

impl RankGroup {
    /// The number of cards in this group.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The value of the cards in this group.
    pub fn value(&self) -> u8 {
        self.cards.first().map(Card::value).unwrap_or_default()
    }
}

/// The validated cards of a hand.
///
/// Derefs to a slice of cards in the current hand order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandCards {
    cards: Vec<Card>,
}

impl HandCards {
    pub(crate) fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Sorts the cards from high to low value.
    ///
    /// Cards with the same value keep their relative order.
    pub fn sort(&mut self) {
        self.cards.sort_by(|c1, c2| c2.value().cmp(&c1.value()));
    }

    /// Groups the cards by rank.
    ///
    /// Larger groups come first, groups with the same size are sorted from
    /// high to low value. Each group keeps its cards in hand order.
    pub fn grouped_cards(&self) -> Vec<RankGroup> {
        let mut index = AHashMap::<Rank, usize>::with_capacity(self.cards.len());
        let mut groups = Vec::<RankGroup>::with_capacity(self.cards.len());

        for card in &self.cards {
            let idx = *index.entry(card.rank()).or_insert_with(|| {
                groups.push(RankGroup {
                    rank: card.rank(),
                    cards: Vec::default(),
                });
                groups.len() - 1
            });

            groups[idx].cards.push(*card);
        }

        groups.sort_by(|g1, g2| {
            g2.len()
                .cmp(&g1.len())
                .then_with(|| g2.value().cmp(&g1.value()))
        });

        groups
    }

    /// Checks if all cards have the same suit.
    pub fn is_flush(&self) -> bool {
        self.cards
            .first()
            .is_some_and(|first| self.cards.iter().all(|c| c.suit() == first.suit()))
    }

    /// Checks if the cards form a descending run of consecutive values.
    ///
    /// This checks the cards in their current order and doesn't sort them,
    /// call [HandCards::sort] first or an unsorted straight returns false.
    pub fn is_straight(&self) -> bool {
        !self.cards.is_empty()
            && self
                .cards
                .windows(2)
                .all(|w| w[1].value().checked_add(1) == Some(w[0].value()))
    }

    /// Returns the cards as a vector.
    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }
}

impl ops::Deref for HandCards {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

/// A poker hand.
///
/// A hand has exactly the number of distinct cards required by the [Ranker]
/// used to build it and the strength the ranker computed for those cards. The
/// strength never changes, only the cards order may change with [Hand::sort].
///
/// ```
/// # use showdown_eval::*;
/// let mut hand = Hand::new(["TS", "JS", "QS", "KS", "AS"], &PokerRanker::standard()).unwrap();
/// hand.sort();
/// assert!(hand.is_flush() && hand.is_straight());
/// assert_eq!(hand.long_name(), "Royal Flush");
/// ```
#[derive(Debug, Clone)]
pub struct Hand<S> {
    cards: HandCards,
    strength: S,
}

impl<S: Strength> Hand<S> {
    /// Creates a hand from cards or cards text notations.
    ///
    /// Text is parsed using the ranker valuator, cards are used as they are.
    pub fn new<R, I>(cards: I, ranker: &R) -> Result<Self, HandError>
    where
        R: Ranker<Strength = S> + ?Sized,
        I: IntoIterator,
        I::Item: Into<CardInput>,
    {
        let cards = cards.into_iter().map(Into::into).collect::<Vec<CardInput>>();

        let expected = ranker.hand_size();
        if cards.len() != expected {
            return Err(HandError::InvalidHandSize {
                expected,
                actual: cards.len(),
            });
        }

        let valuator = ranker.valuator();
        let cards = cards
            .into_iter()
            .map(|c| c.into_card(valuator))
            .collect::<Result<Vec<_>, _>>()?;

        for (idx, c1) in cards.iter().enumerate() {
            if cards[idx + 1..].iter().any(|c2| c1 == c2) {
                return Err(HandError::DuplicateCard(c1.to_string()));
            }
        }

        let mut cards = HandCards::new(cards);
        let strength = ranker.strength(&mut cards);

        Ok(Self { cards, strength })
    }

    /// The hand cards in their current order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sorts the cards from high to low value.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Groups the cards by rank, see [HandCards::grouped_cards].
    pub fn grouped_cards(&self) -> Vec<RankGroup> {
        self.cards.grouped_cards()
    }

    /// Checks if all cards have the same suit.
    pub fn is_flush(&self) -> bool {
        self.cards.is_flush()
    }

    /// Checks if the cards are a straight, the hand must be sorted first.
    pub fn is_straight(&self) -> bool {
        self.cards.is_straight()
    }

    /// The hand strength.
    pub fn strength(&self) -> &S {
        &self.strength
    }

    /// The hand strength short name.
    pub fn short_name(&self) -> &str {
        self.strength.short_name()
    }

    /// The hand strength long name.
    pub fn long_name(&self) -> String {
        self.strength.long_name()
    }

    /// The hand strength value.
    pub fn value(&self) -> u32 {
        self.strength.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::prelude::*;
    use showdown_cards::{AceHigh, AceLow, Deck, Suit};

    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Points(u32);

    impl Strength for Points {
        fn value(&self) -> u32 {
            self.0
        }

        fn short_name(&self) -> &str {
            "Points"
        }

        fn long_name(&self) -> String {
            format!("{} points", self.0)
        }
    }

    /// Sums the cards values and leaves the cards order untouched.
    struct SumRanker {
        size: usize,
        ace_low: bool,
    }

    impl SumRanker {
        fn new(size: usize) -> Self {
            Self {
                size,
                ace_low: false,
            }
        }
    }

    impl Ranker for SumRanker {
        type Strength = Points;

        fn hand_size(&self) -> usize {
            self.size
        }

        fn valuator(&self) -> &dyn Valuator {
            if self.ace_low { &AceLow } else { &AceHigh }
        }

        fn strength(&self, cards: &mut HandCards) -> Points {
            Points(cards.iter().map(|c| c.value() as u32).sum())
        }
    }

    fn hand(cards: &[&str]) -> Hand<Points> {
        Hand::new(cards.iter().copied(), &SumRanker::new(cards.len())).unwrap()
    }

    fn to_strings(cards: &[Card]) -> Vec<String> {
        cards.iter().map(Card::to_string).collect()
    }

    #[test]
    fn hand_from_text() {
        let hand = hand(&["AS", "KS", "QS", "JS", "TS"]);
        assert_eq!(to_strings(hand.cards()), ["AS", "KS", "QS", "JS", "TS"]);
        assert_eq!(hand.value(), 14 + 13 + 12 + 11 + 10);
        assert_eq!(hand.short_name(), "Points");
        assert_eq!(hand.long_name(), "60 points");
        assert_eq!(hand.strength(), &Points(60));
    }

    #[test]
    fn hand_from_mixed_input() {
        let cards = vec![
            CardInput::from(Card::new(Rank::Ace, Suit::Spades)),
            CardInput::from("2d"),
            CardInput::from(String::from("10h")),
            CardInput::from(&Card::new(Rank::Five, Suit::Clubs)),
            CardInput::from("KH"),
        ];

        let hand = Hand::new(cards, &SumRanker::new(5)).unwrap();
        assert_eq!(to_strings(hand.cards()), ["AS", "2D", "TH", "5C", "KH"]);
    }

    #[test]
    fn text_uses_ranker_valuator() {
        let ranker = SumRanker {
            size: 2,
            ace_low: true,
        };

        // Prebuilt cards keep their value, text is parsed with the ranker valuator.
        let hand = Hand::new(
            [CardInput::from("AS"), Card::new(Rank::Ace, Suit::Hearts).into()],
            &ranker,
        )
        .unwrap();
        assert_eq!(hand.cards()[0].value(), 1);
        assert_eq!(hand.cards()[1].value(), 14);
        assert_eq!(hand.value(), 15);
    }

    #[test]
    fn invalid_hand_size() {
        let ranker = SumRanker::new(5);

        let res = Hand::new(["AS", "KS", "QS", "JS"], &ranker);
        assert_eq!(
            res.unwrap_err(),
            HandError::InvalidHandSize {
                expected: 5,
                actual: 4
            }
        );

        let res = Hand::new(["AS", "KS", "QS", "JS", "TS", "9S"], &ranker);
        assert_eq!(
            res.unwrap_err(),
            HandError::InvalidHandSize {
                expected: 5,
                actual: 6
            }
        );

        // The size is checked before parsing.
        let res = Hand::new(["XX"], &ranker);
        assert!(matches!(res, Err(HandError::InvalidHandSize { .. })));

        let err = Hand::new(Vec::<Card>::new(), &ranker).unwrap_err();
        assert_eq!(err.to_string(), "Hand must contain exactly 5 cards, got 0");
    }

    #[test]
    fn duplicate_card() {
        let res = Hand::new(["AS", "AS", "2D", "3C", "4H"], &SumRanker::new(5));
        assert_eq!(res.unwrap_err(), HandError::DuplicateCard("AS".to_string()));

        // Same rank different suit and same suit different rank are fine.
        assert!(Hand::new(["AS", "AH", "KS", "3C", "4H"], &SumRanker::new(5)).is_ok());
    }

    #[test]
    fn duplicate_card_any_position() {
        let cards = ["7C", "8D", "9H", "TS", "JC"];

        for i in 0..cards.len() {
            for j in 0..cards.len() {
                if i == j {
                    continue;
                }

                let mut dup = cards;
                dup[j] = cards[i];

                let res = Hand::new(dup, &SumRanker::new(5));
                assert_eq!(
                    res.unwrap_err(),
                    HandError::DuplicateCard(cards[i].to_string()),
                    "positions {i} {j}"
                );
            }
        }
    }

    #[test]
    fn duplicate_card_prebuilt_with_different_value() {
        let ranker = SumRanker {
            size: 2,
            ace_low: true,
        };

        let res = Hand::new(
            [CardInput::from("as"), Card::new(Rank::Ace, Suit::Spades).into()],
            &ranker,
        );
        assert_eq!(res.unwrap_err(), HandError::DuplicateCard("AS".to_string()));
    }

    #[test]
    fn invalid_card_text() {
        let res = Hand::new(["AS", "KS", "QX", "JS", "TS"], &SumRanker::new(5));
        assert_eq!(
            res.unwrap_err(),
            HandError::Card(CardError::InvalidCard("QX".to_string()))
        );
    }

    #[test]
    fn sort_cards() {
        let mut hand = hand(&["5S", "KH", "2H", "9C", "KD"]);
        let value = hand.value();

        hand.sort();
        assert_eq!(to_strings(hand.cards()), ["KH", "KD", "9C", "5S", "2H"]);
        assert_eq!(hand.value(), value);

        // Idempotent.
        hand.sort();
        assert_eq!(to_strings(hand.cards()), ["KH", "KD", "9C", "5S", "2H"]);
        assert_eq!(hand.value(), value);
    }

    #[test]
    fn sort_random_hands() {
        let mut rng = StdRng::seed_from_u64(101);
        let ranker = SumRanker::new(7);

        for _ in 0..1_000 {
            let cards = Deck::new_and_shuffled(&mut rng)
                .into_iter()
                .take(7)
                .collect::<Vec<_>>();

            let mut hand = Hand::new(&cards, &ranker).unwrap();
            let value = hand.value();

            hand.sort();
            assert!(hand.cards().windows(2).all(|w| w[0].value() >= w[1].value()));
            assert_eq!(hand.value(), value);

            let before = cards.iter().collect::<HashSet<_>>();
            let after = hand.cards().iter().collect::<HashSet<_>>();
            assert_eq!(hand.cards().len(), cards.len());
            assert_eq!(before, after);

            let sorted = hand.cards().to_vec();
            hand.sort();
            assert_eq!(hand.cards(), sorted.as_slice());
        }
    }

    #[test]
    fn grouped_cards() {
        let hand = hand(&["2H", "5S", "9C", "2D", "KH"]);
        let groups = hand.grouped_cards();

        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].rank, Rank::Deuce);
        assert_eq!(to_strings(&groups[0].cards), ["2H", "2D"]);
        assert_eq!(groups[1].rank, Rank::King);
        assert_eq!(groups[2].rank, Rank::Nine);
        assert_eq!(groups[3].rank, Rank::Five);
        assert!(groups[1..].iter().all(|g| g.len() == 1));

        // Grouping doesn't reorder the hand.
        assert_eq!(to_strings(hand.cards()), ["2H", "5S", "9C", "2D", "KH"]);
    }

    #[test]
    fn grouped_cards_full_house() {
        let groups = hand(&["7C", "KS", "7D", "KD", "KH"]).grouped_cards();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].rank, Rank::King);
        assert_eq!(to_strings(&groups[0].cards), ["KS", "KD", "KH"]);
        assert_eq!(groups[1].rank, Rank::Seven);
        assert_eq!(to_strings(&groups[1].cards), ["7C", "7D"]);

        let groups = hand(&["3C", "JS", "3D", "JD", "AH"]).grouped_cards();
        let ranks = groups.iter().map(|g| g.rank).collect::<Vec<_>>();
        assert_eq!(ranks, [Rank::Jack, Rank::Trey, Rank::Ace]);
    }

    #[test]
    fn grouped_cards_partition_random_hands() {
        let mut rng = StdRng::seed_from_u64(7);
        let ranker = SumRanker::new(7);

        for _ in 0..1_000 {
            let cards = Deck::new_and_shuffled(&mut rng)
                .into_iter()
                .take(7)
                .collect::<Vec<_>>();
            let hand = Hand::new(&cards, &ranker).unwrap();
            let groups = hand.grouped_cards();

            let total = groups.iter().map(RankGroup::len).sum::<usize>();
            assert_eq!(total, cards.len());

            let grouped = groups
                .iter()
                .flat_map(|g| g.cards.iter())
                .collect::<HashSet<_>>();
            assert_eq!(grouped.len(), cards.len());

            for g in &groups {
                assert!(g.cards.iter().all(|c| c.rank() == g.rank));
            }

            for w in groups.windows(2) {
                assert!(w[0].len() >= w[1].len());
                if w[0].len() == w[1].len() {
                    assert!(w[0].value() > w[1].value());
                }
            }
        }
    }

    #[test]
    fn flush() {
        assert!(hand(&["AS", "KS", "QS", "JS", "TS"]).is_flush());
        assert!(hand(&["2H", "9H", "4H", "JH", "7H"]).is_flush());
        assert!(!hand(&["2H", "9H", "4H", "JH", "7D"]).is_flush());
        assert!(!hand(&["2C", "9H", "4H", "JH", "7H"]).is_flush());
        assert!(hand(&["2H", "9H", "4H", "JH", "7H", "AH", "KH"]).is_flush());
        assert!(!hand(&["2H", "9H", "4H", "JH", "7H", "AH", "KS"]).is_flush());
    }

    #[test]
    fn straight_sorted() {
        let mut h = hand(&["TS", "QS", "AS", "JS", "KS"]);
        h.sort();
        assert!(h.is_flush());
        assert!(h.is_straight());

        let mut h = hand(&["6C", "9D", "7H", "8S", "5C"]);
        h.sort();
        assert!(h.is_straight());

        // Gap.
        let mut h = hand(&["6C", "9D", "7H", "TS", "5C"]);
        h.sort();
        assert!(!h.is_straight());

        // Repeat.
        let mut h = hand(&["6C", "6D", "7H", "8S", "9C"]);
        h.sort();
        assert!(!h.is_straight());
    }

    #[test]
    fn straight_requires_sorted_cards() {
        // A straight in the wrong order is not detected until the hand is sorted.
        let mut hand = hand(&["TS", "JH", "QS", "KD", "AC"]);
        assert!(!hand.is_straight());

        hand.sort();
        assert!(hand.is_straight());
    }

    #[test]
    fn straight_ace_low_depends_on_valuator() {
        let cards = ["5S", "4H", "3S", "2D", "AC"];

        let mut hand = Hand::new(cards, &SumRanker::new(5)).unwrap();
        hand.sort();
        assert!(!hand.is_straight());

        let ranker = SumRanker {
            size: 5,
            ace_low: true,
        };
        let mut hand = Hand::new(cards, &ranker).unwrap();
        hand.sort();
        assert_eq!(to_strings(hand.cards()), ["5S", "4H", "3S", "2D", "AC"]);
        assert!(hand.is_straight());
    }

    #[test]
    fn straight_values_at_u8_bounds() {
        struct Extremes;

        impl Valuator for Extremes {
            fn value(&self, rank: Rank) -> u8 {
                match rank {
                    Rank::Ace => 0,
                    Rank::King => 255,
                    _ => 254,
                }
            }
        }

        struct ExtremesRanker;

        impl Ranker for ExtremesRanker {
            type Strength = Points;

            fn hand_size(&self) -> usize {
                2
            }

            fn valuator(&self) -> &dyn Valuator {
                &Extremes
            }

            fn strength(&self, _cards: &mut HandCards) -> Points {
                Points(0)
            }
        }

        assert!(!Hand::new(["AS", "KS"], &ExtremesRanker).unwrap().is_straight());
        assert!(!Hand::new(["KS", "AS"], &ExtremesRanker).unwrap().is_straight());
        assert!(Hand::new(["KS", "QS"], &ExtremesRanker).unwrap().is_straight());
    }

    #[test]
    fn single_card_hand() {
        let hand = hand(&["QD"]);
        assert!(hand.is_flush());
        assert!(hand.is_straight());
        assert_eq!(hand.grouped_cards().len(), 1);
    }
}
