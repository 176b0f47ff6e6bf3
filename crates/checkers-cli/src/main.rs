//! Terminal checkers.
//!
//! `checkers play` starts an interactive game, `checkers selfplay` runs a
//! batch of random-vs-random games and summarizes the results.

use anyhow::Context;
use checkers_cli::config::CheckersConfig;
use checkers_cli::contestant::{Contestant, ContestantKind, RandomContestant};
use checkers_cli::human::HumanContestant;
use checkers_cli::session::{self, RunOptions};
use checkers_engine::Game;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Simplified checkers in the terminal")]
struct Cli {
    /// Configuration file (defaults to ./checkers.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Who plays Red
        #[arg(long, value_enum)]
        red: Option<ContestantKind>,
        /// Who plays Black
        #[arg(long, value_enum)]
        black: Option<ContestantKind>,
        /// Seed for random contestants
        #[arg(long)]
        seed: Option<u64>,
        /// Abandon the game after this many turns
        #[arg(long)]
        max_turns: Option<u32>,
    },
    /// Play random games against each other and summarize the results
    Selfplay {
        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,
        /// Abandon each game after this many turns
        #[arg(long)]
        max_turns: Option<u32>,
        /// Base seed for the batch
        #[arg(long)]
        seed: Option<u64>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();
    let mut config =
        CheckersConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::Play {
            red,
            black,
            seed,
            max_turns,
        } => {
            if let Some(red) = red {
                config.players.red = red;
            }
            if let Some(black) = black {
                config.players.black = black;
            }
            config.seed = seed.or(config.seed);
            if let Some(max_turns) = max_turns {
                config.max_turns = max_turns;
            }
            play(&config)
        }
        Commands::Selfplay {
            games,
            max_turns,
            seed,
            json,
        } => {
            let games = games.unwrap_or(config.games);
            let max_turns = max_turns.unwrap_or(config.max_turns);
            let seed = seed.unwrap_or_else(|| config.seed_or_random());
            tracing::info!(games, seed, "starting self-play");

            let summary = session::self_play(games, max_turns, seed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Games:         {}", summary.games);
                println!("Seed:          {}", summary.seed);
                println!("Red stalled:   {}", summary.red_stalled);
                println!("Black stalled: {}", summary.black_stalled);
                println!("Unfinished:    {}", summary.unfinished);
                if summary.games > 0 {
                    println!(
                        "Average plies: {:.1}",
                        summary.total_plies as f64 / f64::from(summary.games)
                    );
                }
                println!("Longest game:  {}", summary.longest_game);
            }
            Ok(())
        }
    }
}

fn play(config: &CheckersConfig) -> anyhow::Result<()> {
    let seed = config.seed_or_random();
    tracing::info!(seed, red = ?config.players.red, black = ?config.players.black, "starting game");

    println!("Welcome to checkers!");
    println!("X = Red's pieces");
    println!("O = Black's pieces");
    println!("The rules have been simplified for your convenience! Good luck!");

    let mut red = contestant(config.players.red, seed);
    let mut black = contestant(config.players.black, seed.wrapping_add(1));
    let options = RunOptions {
        max_turns: config.max_turns,
        show_board: true,
    };
    session::run_game(
        Game::new(),
        red.as_mut(),
        black.as_mut(),
        &mut io::stdout(),
        options,
    )?;
    Ok(())
}

fn contestant(kind: ContestantKind, seed: u64) -> Box<dyn Contestant> {
    match kind {
        // Stdin is shared when both sides are human, so neither side may read ahead.
        ContestantKind::Human => Box::new(HumanContestant::new(
            io::BufReader::with_capacity(1, io::stdin()),
            io::stdout(),
        )),
        ContestantKind::Random => Box::new(RandomContestant::new(StdRng::seed_from_u64(seed))),
    }
}
