// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker table seats, dealing and showdown.
use log::{debug, info};
use rand::prelude::*;
use thiserror::Error;

use showdown_eval::{Card, Deck, Hand, HandError, Ranker};

use crate::state::{Deal, SeatedPlayer, Showdown, ShowdownEntry};

/// Table errors.
#[derive(Debug, Error)]
pub enum TableError {
    /// The seat position is out of range.
    #[error("Invalid position {position}, the table has {seats} seats")]
    InvalidPosition {
        /// The requested position.
        position: usize,
        /// The number of seats.
        seats: usize,
    },
    /// The table configuration doesn't match the ranker.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// There are no players to deal to.
    #[error("No players at the table")]
    NoPlayers,
    /// The deck has not enough cards for all players.
    #[error("Deck exhausted")]
    DeckExhausted,
    /// A player hand is invalid.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// The table configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of seats.
    pub seats: usize,
    /// Number of cards dealt to each player.
    pub hole_cards: usize,
    /// Number of cards shared by all players.
    pub community_cards: usize,
    /// Deal from a 36 cards deck, must match the ranker deck.
    pub short_deck: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seats: 9,
            hole_cards: 2,
            community_cards: 5,
            short_deck: false,
        }
    }
}

/// A poker table.
#[derive(Debug)]
pub struct Table<R> {
    ranker: R,
    config: Config,
    seats: Vec<Option<String>>,
}

impl<R: Ranker> Table<R> {
    /// Creates a new table with empty seats.
    ///
    /// The number of hole and community cards must add up to the ranker hand
    /// size and the deck must be the one the ranker ranks hands for.
    pub fn new(ranker: R, config: Config) -> Result<Self, TableError> {
        if config.seats == 0 {
            return Err(TableError::InvalidConfig("a table needs seats".to_string()));
        }

        let cards = config.hole_cards + config.community_cards;
        if cards != ranker.hand_size() {
            return Err(TableError::InvalidConfig(format!(
                "{} hole and {} community cards don't make a {} cards hand",
                config.hole_cards,
                config.community_cards,
                ranker.hand_size()
            )));
        }

        if config.short_deck != ranker.is_short_deck() {
            let deck = |short| if short { "short" } else { "full" };
            return Err(TableError::InvalidConfig(format!(
                "a {} deck config with a {} deck ranker",
                deck(config.short_deck),
                deck(ranker.is_short_deck())
            )));
        }

        Ok(Self {
            ranker,
            seats: vec![None; config.seats],
            config,
        })
    }

    /// The table ranker.
    pub fn ranker(&self) -> &R {
        &self.ranker
    }

    /// The table configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Seats a player at the given position.
    ///
    /// Returns false if the seat is already taken.
    pub fn add_player(
        &mut self,
        position: usize,
        name: impl Into<String>,
    ) -> Result<bool, TableError> {
        let seat = self.seat_mut(position)?;
        if seat.is_some() {
            return Ok(false);
        }

        let name = name.into();
        info!("Player {name} joined seat {position}");
        *seat = Some(name);

        Ok(true)
    }

    /// Removes the player at the given position, returns the removed player name.
    pub fn remove_player(&mut self, position: usize) -> Result<Option<String>, TableError> {
        let name = self.seat_mut(position)?.take();
        if let Some(name) = &name {
            info!("Player {name} left seat {position}");
        }

        Ok(name)
    }

    /// Returns the seated players positions and names.
    pub fn players(&self) -> impl Iterator<Item = (usize, &str)> {
        self.seats
            .iter()
            .enumerate()
            .filter_map(|(seat, name)| name.as_deref().map(|name| (seat, name)))
    }

    /// Deals hole cards to the seated players and the community cards.
    ///
    /// Cards come from a new shuffled deck and are valued with the ranker valuator.
    pub fn deal<G: Rng>(&self, rng: &mut G) -> Result<Deal, TableError> {
        if self.players().next().is_none() {
            return Err(TableError::NoPlayers);
        }

        let mut deck = if self.config.short_deck {
            Deck::short_and_shuffled(rng)
        } else {
            Deck::new_and_shuffled(rng)
        };

        let valuator = self.ranker.valuator();
        let mut draw = |count: usize| -> Result<Vec<Card>, TableError> {
            let mut cards = Vec::with_capacity(count);
            for _ in 0..count {
                let card = deck.draw().ok_or(TableError::DeckExhausted)?;
                cards.push(Card::with_valuator(card.rank(), card.suit(), valuator));
            }

            Ok(cards)
        };

        let mut players = Vec::default();
        for (seat, name) in self.players() {
            players.push(SeatedPlayer {
                seat,
                name: name.to_string(),
                cards: draw(self.config.hole_cards)?,
            });
        }

        let community_cards = draw(self.config.community_cards)?;

        debug!(
            "Dealt {} cards to {} players and {} community cards",
            self.config.hole_cards,
            players.len(),
            community_cards.len()
        );

        Ok(Deal {
            players,
            community_cards,
        })
    }

    /// Ranks the players hands, the winners are the players with the strongest hand.
    ///
    /// Each player hand is made of the player cards and the community cards.
    pub fn showdown(&self, deal: &Deal) -> Result<Showdown, TableError> {
        let mut hands = deal
            .players
            .iter()
            .map(|p| {
                let cards = p.cards.iter().chain(&deal.community_cards);
                Hand::new(cards, &self.ranker).map(|hand| (p, hand))
            })
            .collect::<Result<Vec<_>, HandError>>()?;

        // Strongest first, players with the same strength keep the seat order.
        hands.sort_by(|(_, h1), (_, h2)| h2.strength().cmp(h1.strength()));

        let winners = match hands.first() {
            Some((_, best)) => hands
                .iter()
                .take_while(|(_, h)| h.strength() == best.strength())
                .map(|(p, _)| p.seat)
                .collect(),
            None => Vec::default(),
        };

        let entries = hands
            .iter()
            .map(|(p, hand)| ShowdownEntry {
                seat: p.seat,
                name: p.name.clone(),
                cards: hand.cards().iter().map(Card::to_string).collect(),
                short_name: hand.short_name().to_string(),
                long_name: hand.long_name(),
                value: hand.value(),
            })
            .collect();

        info!("Showdown winners at seats {winners:?}");

        Ok(Showdown { entries, winners })
    }

    fn seat_mut(&mut self, position: usize) -> Result<&mut Option<String>, TableError> {
        let seats = self.seats.len();
        self.seats
            .get_mut(position)
            .ok_or(TableError::InvalidPosition { position, seats })
    }
}
