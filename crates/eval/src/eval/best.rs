// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand ranking for hands with more cards than a ranked hand.
use showdown_cards::{Card, Valuator};

use super::poker::PokerRanker;
use crate::{hand::HandCards, ranker::Ranker};

/// Ranks a hand using the best subset of cards ranked by an inner ranker.
///
/// For example a Texas Hold'em hand has 7 cards, the hole cards and the board
/// cards, and its strength is the strength of its best 5 cards hand:
///
/// ```
/// # use showdown_eval::*;
/// let ranker = BestOfRanker::holdem();
/// let hand = Hand::new(["AS", "KD", "7C", "7D", "AH", "2S", "9C"], &ranker).unwrap();
/// assert_eq!(hand.long_name(), "Two Pair, Aces and Sevens");
/// ```
#[derive(Debug, Clone)]
pub struct BestOfRanker<R> {
    inner: R,
    hand_size: usize,
}

impl<R: Ranker> BestOfRanker<R> {
    /// Creates a ranker for hands with `hand_size` cards.
    ///
    /// Panics if `hand_size` is less than the inner ranker hand size.
    pub fn new(inner: R, hand_size: usize) -> Self {
        assert!(
            hand_size >= inner.hand_size(),
            "hand_size={hand_size} must be >= {}",
            inner.hand_size()
        );

        Self { inner, hand_size }
    }

    /// The inner ranker.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the best cards subset and its strength.
    ///
    /// Returns `None` if there are fewer cards than the inner ranker needs, the
    /// cards are expected to be distinct.
    pub fn best_cards(&self, cards: &[Card]) -> Option<(Vec<Card>, R::Strength)> {
        (cards.len() >= self.inner.hand_size()).then(|| self.best_of(cards))
    }

    fn best_of(&self, cards: &[Card]) -> (Vec<Card>, R::Strength) {
        let k = self.inner.hand_size();

        let mut best_cards = HandCards::new(cards[..k].to_vec());
        let mut best = self.inner.strength(&mut best_cards);

        for_each_subset(cards, k, |subset| {
            let mut cards = HandCards::new(subset.to_vec());
            let strength = self.inner.strength(&mut cards);
            if strength > best {
                best = strength;
                best_cards = cards;
            }
        });

        (best_cards.into_vec(), best)
    }
}

impl BestOfRanker<PokerRanker> {
    /// The Texas Hold'em hand size, 2 hole cards and 5 board cards.
    pub const HOLDEM_HAND_SIZE: usize = 7;

    /// Creates a Texas Hold'em ranker, best 5 cards out of 7.
    pub fn holdem() -> Self {
        Self::new(PokerRanker::standard(), Self::HOLDEM_HAND_SIZE)
    }
}

impl<R: Ranker> Ranker for BestOfRanker<R> {
    type Strength = R::Strength;

    fn hand_size(&self) -> usize {
        self.hand_size
    }

    fn valuator(&self) -> &dyn Valuator {
        self.inner.valuator()
    }

    fn is_short_deck(&self) -> bool {
        self.inner.is_short_deck()
    }

    fn strength(&self, cards: &mut HandCards) -> Self::Strength {
        cards.sort();
        self.best_of(cards).1
    }
}

/// Calls the `f` closure for each k-cards subset of the given cards.
fn for_each_subset<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card]),
{
    let n = cards.len();
    if k > n {
        return;
    }

    let mut indices = (0..k).collect::<Vec<_>>();
    let mut subset = Vec::with_capacity(k);

    loop {
        subset.clear();
        subset.extend(indices.iter().map(|&idx| cards[idx]));
        f(&subset);

        // Find the rightmost index that can move right.
        let Some(pos) = (0..k).rev().find(|&pos| indices[pos] != pos + n - k) else {
            return;
        };

        indices[pos] += 1;
        for next in (pos + 1)..k {
            indices[next] = indices[next - 1] + 1;
        }
    }
}
