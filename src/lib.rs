/*
lib.rs

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

//! Rift Daily: daily puzzle games themed around League of Legends.
//!
//! * [`daily`] picks the puzzle of the day for each game mode, deterministically.
//! * [`games`] validates the player's moves and computes the scores.
//! * [`round`] tracks the life cycle of a round, so that its result is submitted once.
//! * [`catalog`] loads the puzzles and the lore graph.
//! * [`results`] stores the results, builds the leaderboards and the player statistics.
//! * [`saver`] saves and restores the results.
//! * [`play`] plays a round from a text stream.

pub mod catalog;
pub mod config;
pub mod daily;
pub mod game_mode;
pub mod games;
pub mod play;
pub mod results;
pub mod round;
pub mod saver;
