// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card valuation policies.
use crate::Rank;

/// A policy that assigns a numeric value to a card rank.
///
/// Values define the order used for sorting cards and must be consecutive
/// integers for consecutive ranks for straight detection to work.
pub trait Valuator {
    /// Returns the value for the given rank.
    fn value(&self, rank: Rank) -> u8;
}

/// Ace high valuation, deuce is 2 and ace is 14.
#[derive(Debug, Clone, Copy, Default)]
pub struct AceHigh;

impl Valuator for AceHigh {
    fn value(&self, rank: Rank) -> u8 {
        rank as u8 + 2
    }
}

/// Ace low valuation, ace is 1, deuce is 2 and king is 13.
#[derive(Debug, Clone, Copy, Default)]
pub struct AceLow;

impl Valuator for AceLow {
    fn value(&self, rank: Rank) -> u8 {
        match rank {
            Rank::Ace => 1,
            _ => rank as u8 + 2,
        }
    }
}
