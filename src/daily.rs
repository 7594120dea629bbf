/*
daily.rs

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

//! Pick the puzzle of the day.
//!
//! All the players see the same puzzle for a game mode on a given UTC calendar date.
//! No schedule is stored: the puzzle index is derived from a SHA-256 hash of the game mode and
//! the date, so the same inputs always produce the same puzzle, on any machine.
//!
//! The date is formatted as `year-month-day` without zero padding (`2024-3-7`).
//! That string is part of the hash input and of the puzzle identifiers that are already stored
//! with the results, so the format must be kept as is.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use riftdaily::daily;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! assert_eq!(daily::date_key(date), "2024-3-7");
//! assert_eq!(daily::daily_puzzle_id("connections", date), "connections-2024-3-7");
//! assert_eq!(daily::daily_index("connections", 50, date), Ok(18));
//! ```

use chrono::{Datelike, NaiveDate, Utc};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors returned by the daily selector.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyError {
    /// The puzzle pool is empty. Callers must provide a non-empty catalog.
    #[error("cannot pick a puzzle from an empty pool")]
    InvalidPool,
}

/// Puzzle selected for a game mode and a date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailySelection {
    /// Index of the puzzle in the catalog of the game mode.
    pub puzzle_index: usize,

    /// Stable identifier of the puzzle, used as the key of the stored results.
    pub puzzle_id: String,
}

/// Return the current UTC calendar date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format the date as `year-month-day` with no zero padding.
pub fn date_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Return the index of the puzzle of the day, in the range `[0, pool_size)`.
///
/// # Errors
///
/// Return [`DailyError::InvalidPool`] when `pool_size` is 0.
pub fn daily_index(game_mode: &str, pool_size: usize, date: NaiveDate) -> Result<usize, DailyError> {
    if pool_size == 0 {
        return Err(DailyError::InvalidPool);
    }
    let seed: String = format!("{game_mode}:{}", date_key(date));
    let digest = Sha256::digest(seed.as_bytes());

    // The first eight hex characters of the digest are its first four bytes
    let mut prefix: [u8; 4] = [0; 4];
    prefix.copy_from_slice(&digest[..4]);
    let value: u32 = u32::from_be_bytes(prefix);

    let index: usize = value as usize % pool_size;
    debug!("Daily index for {seed}: {value:08x} % {pool_size} = {index}");
    Ok(index)
}

/// Return the identifier of the puzzle of the day: `<game_mode>-<year>-<month>-<day>`.
pub fn daily_puzzle_id(game_mode: &str, date: NaiveDate) -> String {
    format!("{game_mode}-{}", date_key(date))
}

/// Select the puzzle of the day.
pub fn select_daily(
    game_mode: &str,
    pool_size: usize,
    date: NaiveDate,
) -> Result<DailySelection, DailyError> {
    Ok(DailySelection {
        puzzle_index: daily_index(game_mode, pool_size, date)?,
        puzzle_id: daily_puzzle_id(game_mode, date),
    })
}

/// Return a random puzzle index for practice mode.
pub fn practice_index<R: Rng>(pool_size: usize, rng: &mut R) -> Result<usize, DailyError> {
    if pool_size == 0 {
        return Err(DailyError::InvalidPool);
    }
    Ok(rng.random_range(0..pool_size))
}

/// Return the identifier of a practice puzzle: `<game_mode>-practice-<index>`.
pub fn practice_puzzle_id(game_mode: &str, index: usize) -> String {
    format!("{game_mode}-practice-{index}")
}
