// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranking strategies interface.
use showdown_cards::Valuator;

use crate::hand::HandCards;

/// A hand strength.
///
/// The strength is an opaque value produced by a [Ranker], it is totally
/// ordered and [Strength::value] must be consistent with the ordering, a
/// stronger hand has a higher value.
pub trait Strength: Ord {
    /// The numeric value of this strength.
    fn value(&self) -> u32;

    /// A short description, i.e. `Full House`.
    fn short_name(&self) -> &str;

    /// A long description, i.e. `Full House, Kings over Sevens`.
    fn long_name(&self) -> String;
}

/// A ranking strategy for a poker variant.
pub trait Ranker {
    /// The strength this ranker computes.
    type Strength: Strength;

    /// The number of cards in a hand.
    fn hand_size(&self) -> usize;

    /// The policy used to value cards parsed from text.
    fn valuator(&self) -> &dyn Valuator;

    /// Checks if hands are dealt from a 36 cards deck, six to ace.
    fn is_short_deck(&self) -> bool {
        false
    }

    /// Computes the strength of a validated hand.
    ///
    /// The cards contain exactly [Ranker::hand_size] distinct cards, the
    /// ranker may reorder them with [HandCards::sort].
    fn strength(&self, cards: &mut HandCards) -> Self::Strength;
}

impl<R: Ranker + ?Sized> Ranker for &R {
    type Strength = R::Strength;

    fn hand_size(&self) -> usize {
        (**self).hand_size()
    }

    fn valuator(&self) -> &dyn Valuator {
        (**self).valuator()
    }

    fn is_short_deck(&self) -> bool {
        (**self).is_short_deck()
    }

    fn strength(&self, cards: &mut HandCards) -> Self::Strength {
        (**self).strength(cards)
    }
}

impl<R: Ranker + ?Sized> Ranker for Box<R> {
    type Strength = R::Strength;

    fn hand_size(&self) -> usize {
        (**self).hand_size()
    }

    fn valuator(&self) -> &dyn Valuator {
        (**self).valuator()
    }

    fn is_short_deck(&self) -> bool {
        (**self).is_short_deck()
    }

    fn strength(&self, cards: &mut HandCards) -> Self::Strength {
        (**self).strength(cards)
    }
}
