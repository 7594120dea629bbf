/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Rift Daily.

Rift Daily is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Rift Daily is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Rift Daily. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! List the game modes and the size of their catalog:
//!
//! ```text
//! $ riftdaily modes
//! connections     3
//! timeline        3
//! draft           2
//! lore            3
//! ability-sound   3
//! patch-note      3
//! ```
//!
//! Print the puzzle of the day, as the JSON document served to the players:
//!
//! ```text
//! $ riftdaily daily lore --date 2024-03-07
//! ```
//!
//! Play the daily ability sound puzzle and record the result for the player `u1`:
//!
//! ```text
//! $ printf 'Lux\nAhri\n' | riftdaily play ability-sound --user u1
//! ```

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use log::{debug, error, warn};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use riftdaily::catalog::{PuzzleCatalog, PuzzleResponse};
use riftdaily::config::{COPYRIGHT_NOTICE, DATA_DIR_ENV, DEFAULT_DATA_DIR, STORE_DIR_ENV};
use riftdaily::daily;
use riftdaily::game_mode::GameMode;
use riftdaily::play::{self, PlayReport};
use riftdaily::results::{ResultStore, Results, StoreError, Submission};
use riftdaily::saver::results::SaverResults;

/// Daily League of Legends puzzle games.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Directory with the puzzle catalog files
    #[arg(long, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR, global = true)]
    data_dir: PathBuf,

    /// Directory where the results are saved (defaults to the data directory)
    #[arg(long, env = STORE_DIR_ENV, global = true)]
    store_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the game modes and the number of puzzles for each
    Modes,

    /// Print the puzzle of the day
    Daily {
        #[arg(value_enum)]
        mode: GameMode,

        /// UTC date (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print a random practice puzzle
    Random {
        #[arg(value_enum)]
        mode: GameMode,
    },

    /// Print the shortest lore chain between two champions
    Path { from: String, to: String },

    /// Play a puzzle, reading the moves from the standard input
    Play {
        #[arg(value_enum)]
        mode: GameMode,

        /// Play a random puzzle instead of the puzzle of the day
        #[arg(long, default_value_t = false)]
        practice: bool,

        /// UTC date of the daily puzzle (YYYY-MM-DD), today by default
        #[arg(long, conflicts_with = "practice")]
        date: Option<NaiveDate>,

        /// Player identifier. The result is saved only when a player is given
        #[arg(long)]
        user: Option<String>,
    },

    /// Print the leaderboard of a game mode
    Leaderboard {
        #[arg(value_enum)]
        mode: GameMode,

        /// Number of entries (at most 100)
        #[arg(long)]
        limit: Option<usize>,

        /// Only include the daily puzzles
        #[arg(long, default_value_t = false)]
        daily: bool,
    },

    /// Print the statistics of a player
    Stats { user: String },
}

/// Initialize the logger. The `--debug` option overrides the `RUST_LOG` variable.
fn init_logger(debug: bool) {
    let mut builder: env_logger::Builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Parse and process command-line options.
pub fn parse() -> ExitCode {
    let args: Args = Args::parse();
    init_logger(args.debug);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let store_dir: PathBuf = args.store_dir.unwrap_or_else(|| args.data_dir.clone());
    debug!("Data directory: {:?}, store directory: {store_dir:?}", args.data_dir);

    match args.command {
        Command::Modes => {
            let catalog: PuzzleCatalog = PuzzleCatalog::load(&args.data_dir)?;
            for mode in GameMode::all() {
                println!("{:<15} {}", mode.as_str(), catalog.pool_size(mode));
            }
        }

        Command::Daily { mode, date } => {
            let catalog: PuzzleCatalog = PuzzleCatalog::load(&args.data_dir)?;
            let date: NaiveDate = date.unwrap_or_else(daily::today_utc);
            let response: PuzzleResponse = catalog.daily(mode, date)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Command::Random { mode } => {
            let catalog: PuzzleCatalog = PuzzleCatalog::load(&args.data_dir)?;
            let response: PuzzleResponse = catalog.random(mode, &mut rand::rng())?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Command::Path { from, to } => {
            let catalog: PuzzleCatalog = PuzzleCatalog::load(&args.data_dir)?;
            match catalog.lore_graph().shortest_path(&from, &to) {
                Some(path) => println!("{} ({} steps)", path.join(" → "), path.len() - 1),
                None => println!("No path from {from} to {to}"),
            }
        }

        Command::Play {
            mode,
            practice,
            date,
            user,
        } => {
            let catalog: PuzzleCatalog = PuzzleCatalog::load(&args.data_dir)?;
            let mut rng = rand::rng();
            let response: PuzzleResponse = if practice {
                catalog.random(mode, &mut rng)?
            } else {
                catalog.daily(mode, date.unwrap_or_else(daily::today_utc))?
            };

            let saver: SaverResults = SaverResults::new(store_dir);
            let results: Results = saver.get_results_or_default()?;
            if let Some(user_id) = &user {
                if response.is_daily && results.has_daily_result(user_id, &response.puzzle_id) {
                    println!("You already played {} today", response.puzzle_id);
                    return Ok(());
                }
            }

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let report: PlayReport = play::play(
                &response,
                catalog.lore_graph(),
                stdin.lock(),
                &mut stdout,
                &mut rng,
            )?;
            println!("\n{}", report.share_text);

            match (user, report.outcome) {
                (Some(user_id), Some(outcome)) => {
                    let submission: Submission = Submission::from_outcome(
                        &user_id,
                        mode,
                        &response.puzzle_id,
                        response.is_daily,
                        &outcome,
                    );
                    match saver.submit(submission, Utc::now())? {
                        Ok(_) => (),
                        Err(e @ StoreError::AlreadySubmitted { .. }) => {
                            warn!("{e}");
                            println!("You already played {} today", response.puzzle_id);
                        }
                    }
                }
                (None, Some(_)) => debug!("No player given, the result is not saved"),
                (_, None) => (),
            }
        }

        Command::Leaderboard { mode, limit, daily } => {
            let saver: SaverResults = SaverResults::new(store_dir);
            let results: Results = saver.get_results_or_default()?;
            for entry in results.leaderboard(mode, limit, daily) {
                println!(
                    "{:>3}. {:<20} {:>5} pts  {} attempt(s)  {}{}",
                    entry.rank,
                    entry.user_id,
                    entry.score,
                    entry.attempts,
                    entry.completed_at.format("%Y-%m-%d %H:%M"),
                    if entry.is_daily { "  daily" } else { "" }
                );
            }
        }

        Command::Stats { user } => {
            let saver: SaverResults = SaverResults::new(store_dir);
            let results: Results = saver.get_results_or_default()?;
            println!("{}", serde_json::to_string_pretty(&results.stats(&user))?);
        }
    }
    Ok(())
}
