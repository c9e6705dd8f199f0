// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table state snapshots and showdown results.
use serde::{Deserialize, Serialize};

use showdown_eval::Card;

/// A player dealt into a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatedPlayer {
    /// The player seat.
    pub seat: usize,
    /// The player name.
    pub name: String,
    /// The player hole cards.
    pub cards: Vec<Card>,
}

/// The cards dealt to the players at a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// The players in seat order.
    pub players: Vec<SeatedPlayer>,
    /// The cards shared by all players.
    pub community_cards: Vec<Card>,
}

impl Deal {
    /// The state of the deal as seen by the player at index `perspective`.
    ///
    /// Only the perspective player cards are disclosed, an out of range
    /// perspective discloses no player cards.
    pub fn state(&self, perspective: usize) -> TableState {
        TableState {
            community_cards: to_strings(&self.community_cards),
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(idx, player)| PlayerState {
                    name: player.name.clone(),
                    cards: (idx == perspective).then(|| to_strings(&player.cards)),
                })
                .collect(),
        }
    }
}

/// A table state snapshot for a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    /// The community cards.
    pub community_cards: Vec<String>,
    /// The players in the hand.
    pub players: Vec<PlayerState>,
}

/// A player state in a [TableState].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// The player name.
    pub name: String,
    /// The player cards if disclosed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<String>>,
}

/// A player hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    /// The player seat.
    pub seat: usize,
    /// The player name.
    pub name: String,
    /// The player hand cards, hole and community cards, as sorted by the ranker.
    pub cards: Vec<String>,
    /// The hand strength short name.
    pub short_name: String,
    /// The hand strength long name.
    pub long_name: String,
    /// The hand strength value.
    pub value: u32,
}

/// The showdown result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    /// The players hands from the strongest to the weakest.
    pub entries: Vec<ShowdownEntry>,
    /// The seats of the players with the strongest hand.
    pub winners: Vec<usize>,
}

fn to_strings(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}
