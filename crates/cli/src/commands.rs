// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! CLI commands.
use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use log::{debug, info};
use rand::prelude::*;
use std::io::Write;

use showdown_eval::{BestOfRanker, Card, Hand, HandValue, PokerRanker, Ranker};
use showdown_table::{Config, Table};

/// A ranker for any of the supported games.
pub type GameRanker = Box<dyn Ranker<Strength = HandValue>>;

/// The game used to rank hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Game {
    /// Five cards standard poker.
    #[default]
    Standard,
    /// Five cards short deck poker.
    ShortDeck,
    /// Texas Hold'em, best five out of seven cards.
    Holdem,
}

impl Game {
    /// The ranker for this game.
    pub fn ranker(&self) -> GameRanker {
        match self {
            Game::Standard => Box::new(PokerRanker::standard()),
            Game::ShortDeck => Box::new(PokerRanker::short_deck()),
            Game::Holdem => Box::new(BestOfRanker::holdem()),
        }
    }

    /// The table configuration for this game.
    pub fn table_config(&self, seats: usize) -> Config {
        match self {
            Game::Standard | Game::ShortDeck => Config {
                seats,
                hole_cards: PokerRanker::HAND_SIZE,
                community_cards: 0,
                short_deck: *self == Game::ShortDeck,
            },
            Game::Holdem => Config {
                seats,
                ..Config::default()
            },
        }
    }
}

/// Splits a cards list separated by spaces or commas.
pub fn split_cards(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
}

/// Evaluates a hand and writes its strength and derived views.
pub fn eval<W: Write>(out: &mut W, game: Game, cards: &[String]) -> Result<()> {
    let ranker = game.ranker();
    let cards = cards.iter().flat_map(|c| split_cards(c));
    let mut hand = Hand::new(cards, &ranker).context("Invalid hand")?;
    hand.sort();

    debug!("Evaluated {:?}", hand.strength());

    let groups = hand
        .grouped_cards()
        .iter()
        .map(|g| format!("{}({})", g.rank, join(&g.cards)))
        .collect::<Vec<_>>();

    writeln!(out, "Cards:    {}", join(hand.cards()))?;
    writeln!(out, "Hand:     {}", hand.long_name())?;
    writeln!(out, "Rank:     {}", hand.short_name())?;
    writeln!(out, "Value:    0x{:06x}", hand.value())?;
    writeln!(out, "Groups:   {}", groups.join(" "))?;
    writeln!(out, "Flush:    {}", hand.is_flush())?;
    writeln!(out, "Straight: {}", hand.is_straight())?;

    Ok(())
}

/// Compares hands and writes them from the strongest to the weakest.
pub fn compare<W: Write>(out: &mut W, game: Game, hands: &[String]) -> Result<()> {
    let ranker = game.ranker();

    let mut hands = hands
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            Hand::new(split_cards(text), &ranker)
                .map(|hand| (idx + 1, hand))
                .with_context(|| format!("Invalid hand {} '{text}'", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    hands.sort_by(|(_, h1), (_, h2)| h2.strength().cmp(h1.strength()));

    for (idx, hand) in &hands {
        writeln!(out, "{idx}: {} {}", join(hand.cards()), hand.long_name())?;
    }

    let Some((_, best)) = hands.first() else {
        return Ok(());
    };

    let winners = hands
        .iter()
        .take_while(|(_, h)| h.strength() == best.strength())
        .map(|(idx, _)| idx.to_string())
        .collect::<Vec<_>>();

    if winners.len() == 1 {
        writeln!(out, "Winner: {}", winners[0])?;
    } else {
        writeln!(out, "Split: {}", winners.join(", "))?;
    }

    Ok(())
}

/// Seats players at a table, deals and writes each player state and the showdown.
pub fn deal<W: Write>(
    out: &mut W,
    game: Game,
    players: usize,
    seats: usize,
    seed: Option<u64>,
) -> Result<()> {
    if players > seats {
        bail!("Cannot seat {players} players at a {seats} seats table");
    }

    let mut table = Table::new(game.ranker(), game.table_config(seats))?;
    for seat in 0..players {
        table.add_player(seat, format!("player{}", seat + 1))?;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!("Dealing {game:?} to {players} players");
    let deal = table.deal(&mut rng)?;

    for perspective in 0..deal.players.len() {
        let state = deal.state(perspective);
        writeln!(out, "{}", serde_json::to_string(&state)?)?;
    }

    let showdown = table.showdown(&deal)?;
    for entry in &showdown.entries {
        writeln!(
            out,
            "Seat {}: {} {} {}",
            entry.seat,
            entry.name,
            entry.cards.join(" "),
            entry.long_name
        )?;
    }

    let winners = showdown
        .winners
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    writeln!(out, "Winners: {}", winners.join(", "))?;

    Ok(())
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
