/*
results.rs

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

//! Store the results of the completed rounds.
//!
//! The main object, [`Results`], keeps one [`SubmissionRecord`] per submitted round.
//! It enforces that a player submits the puzzle of the day only once, and computes the
//! leaderboards and the player statistics.
//! This object is saved after each submission and is restored when Rift Daily starts.
//! See the [`crate::saver::results`] module that saves and restores the [`Results`] object.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{LEADERBOARD_DEFAULT_LIMIT, LEADERBOARD_MAX_LIMIT};
use crate::game_mode::GameMode;
use crate::round::Outcome;

/// Errors returned by the result store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The player already submitted a result for this daily puzzle.
    /// This is not a failure to retry: the player already played today.
    #[error("{user_id} already submitted a result for {puzzle_id}")]
    AlreadySubmitted { user_id: String, puzzle_id: String },
}

/// Result of a round, as sent by the player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Opaque identifier of the verified player.
    pub user_id: String,

    pub game_mode: GameMode,

    pub puzzle_id: String,

    pub is_daily: bool,

    pub attempts: u32,

    pub score: u32,
}

impl Submission {
    /// Create a [`Submission`] object from the outcome of a round.
    pub fn from_outcome(
        user_id: &str,
        game_mode: GameMode,
        puzzle_id: &str,
        is_daily: bool,
        outcome: &Outcome,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            game_mode,
            puzzle_id: puzzle_id.to_string(),
            is_daily,
            attempts: outcome.attempts,
            score: outcome.score,
        }
    }
}

/// Stored result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub user_id: String,

    pub game_mode: GameMode,

    pub puzzle_id: String,

    pub is_daily: bool,

    pub attempts: u32,

    pub score: u32,

    /// Completion timestamp.
    pub completed_at: DateTime<Utc>,
}

/// Leaderboard line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Position in the board, starting at 1 (top score).
    pub rank: usize,

    pub user_id: String,

    pub score: u32,

    pub attempts: u32,

    pub completed_at: DateTime<Utc>,

    pub is_daily: bool,
}

/// Statistics of a player for a game mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub game_mode: GameMode,

    pub total_played: usize,

    pub daily_played: usize,

    /// None when the player never played the game mode.
    pub best_score: Option<u32>,

    /// Average score, rounded to the nearest integer.
    pub avg_score: Option<u32>,

    pub last_played: Option<DateTime<Utc>>,
}

/// Storage of the results.
pub trait ResultStore {
    /// Store the result of a round.
    ///
    /// # Errors
    ///
    /// Return [`StoreError::AlreadySubmitted`] for a second daily submission of the same puzzle
    /// by the same player. Practice submissions are never rejected.
    fn submit(
        &mut self,
        submission: Submission,
        completed_at: DateTime<Utc>,
    ) -> Result<SubmissionRecord, StoreError>;

    /// Whether the player already submitted a daily result for the puzzle.
    fn has_daily_result(&self, user_id: &str, puzzle_id: &str) -> bool;

    /// Return the best results for the game mode, highest score first.
    ///
    /// `limit` defaults to 20 and is capped at 100.
    fn leaderboard(
        &self,
        mode: GameMode,
        limit: Option<usize>,
        daily_only: bool,
    ) -> Vec<LeaderboardEntry>;

    /// Return the statistics of the player, for every game mode.
    fn stats(&self, user_id: &str) -> Vec<GameStats>;
}

/// List of all the submitted results.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Results {
    /// Records in submission order.
    records: Vec<SubmissionRecord>,
}

impl Results {
    /// Create a [`Results`] object.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Return all the records, in submission order.
    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    /// Return whether no result has been submitted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ResultStore for Results {
    fn submit(
        &mut self,
        submission: Submission,
        completed_at: DateTime<Utc>,
    ) -> Result<SubmissionRecord, StoreError> {
        // Prevent duplicate daily submissions
        if submission.is_daily && self.has_daily_result(&submission.user_id, &submission.puzzle_id)
        {
            debug!(
                "Rejected second daily result of {} for {}",
                submission.user_id, submission.puzzle_id
            );
            return Err(StoreError::AlreadySubmitted {
                user_id: submission.user_id,
                puzzle_id: submission.puzzle_id,
            });
        }

        let record: SubmissionRecord = SubmissionRecord {
            user_id: submission.user_id,
            game_mode: submission.game_mode,
            puzzle_id: submission.puzzle_id,
            is_daily: submission.is_daily,
            attempts: submission.attempts,
            score: submission.score,
            completed_at,
        };
        info!(
            "Result for {}: {} point(s) in {} attempt(s)",
            record.puzzle_id, record.score, record.attempts
        );
        self.records.push(record.clone());
        Ok(record)
    }

    fn has_daily_result(&self, user_id: &str, puzzle_id: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.is_daily && r.user_id == user_id && r.puzzle_id == puzzle_id)
    }

    fn leaderboard(
        &self,
        mode: GameMode,
        limit: Option<usize>,
        daily_only: bool,
    ) -> Vec<LeaderboardEntry> {
        let limit: usize = limit
            .unwrap_or(LEADERBOARD_DEFAULT_LIMIT)
            .min(LEADERBOARD_MAX_LIMIT);

        let mut board: Vec<&SubmissionRecord> = self
            .records
            .iter()
            .filter(|r| r.game_mode == mode && (!daily_only || r.is_daily))
            .collect();
        // Highest score first. For the same score, the earliest result first.
        board.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.completed_at.cmp(&b.completed_at))
        });

        board
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, r)| LeaderboardEntry {
                rank: i + 1,
                user_id: r.user_id.clone(),
                score: r.score,
                attempts: r.attempts,
                completed_at: r.completed_at,
                is_daily: r.is_daily,
            })
            .collect()
    }

    fn stats(&self, user_id: &str) -> Vec<GameStats> {
        GameMode::all()
            .map(|mode| {
                let played: Vec<&SubmissionRecord> = self
                    .records
                    .iter()
                    .filter(|r| r.user_id == user_id && r.game_mode == mode)
                    .collect();
                let n: u64 = played.len() as u64;
                let total: u64 = played.iter().map(|r| r.score as u64).sum();
                GameStats {
                    game_mode: mode,
                    total_played: played.len(),
                    daily_played: played.iter().filter(|r| r.is_daily).count(),
                    best_score: played.iter().map(|r| r.score).max(),
                    avg_score: if n == 0 {
                        None
                    } else {
                        Some(((2 * total + n) / (2 * n)) as u32)
                    },
                    last_played: played.iter().map(|r| r.completed_at).max(),
                }
            })
            .collect()
    }
}
