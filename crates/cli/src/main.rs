// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use std::io;

pub mod commands;

use commands::Game;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a hand.
    Eval {
        /// The game used to rank the hand.
        #[clap(long, short, value_enum, default_value_t = Game::Standard)]
        game: Game,
        /// The hand cards, i.e. AS KD 7C 7D 2H.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Compares hands and shows the winner.
    Compare {
        /// The game used to rank the hands.
        #[clap(long, short, value_enum, default_value_t = Game::Standard)]
        game: Game,
        /// The hands, each a quoted list of cards, i.e. "AS KD 7C 7D 2H".
        #[clap(required = true)]
        hands: Vec<String>,
    },
    /// Seats players at a table, deals cards and ranks their hands.
    Deal {
        /// The game dealt at the table.
        #[clap(long, short, value_enum, default_value_t = Game::Holdem)]
        game: Game,
        /// Number of players.
        #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=9))]
        players: u8,
        /// Number of seats at the table.
        #[clap(long, short, default_value_t = 9, value_parser = clap::value_parser!(u8).range(1..=9))]
        seats: u8,
        /// Seed for a repeatable deal.
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn run(cli: Cli) -> Result<()> {
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Eval { game, cards } => commands::eval(&mut out, game, &cards),
        Command::Compare { game, hands } => commands::compare(&mut out, game, &hands),
        Command::Deal {
            game,
            players,
            seats,
            seed,
        } => commands::deal(&mut out, game, players as usize, seats as usize, seed),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
