/*
round.rs

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

//! Life cycle of a round.
//!
//! A round starts [`RoundStatus::InProgress`].
//! The player's moves can only end the round from that state, either as
//! [`RoundStatus::Won`] or as [`RoundStatus::Lost`].
//! The outcome of a finished round is then handed over exactly once, through
//! [`RoundTracker::take_outcome`], which moves the round to [`RoundStatus::Submitted`].
//! This latch prevents the same terminal state from being submitted twice.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::game_mode::GameMode;

/// Status of a round.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    #[default]
    InProgress,
    Won,
    Lost,
    Submitted,
}

/// Values to hand over to the result store when a round is over.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Number of attempts, as counted by the game mode.
    pub attempts: u32,

    /// Final score.
    pub score: u32,

    /// Whether the player won the round.
    pub won: bool,
}

/// State machine shared by all the game rounds.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RoundTracker {
    status: RoundStatus,

    /// Whether the round was won, kept after the round is submitted.
    won: bool,
}

impl RoundTracker {
    /// Create a [`RoundTracker`] object for a new round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Whether the player can still make moves.
    pub fn is_in_progress(&self) -> bool {
        self.status == RoundStatus::InProgress
    }

    /// Whether the round has been won, before or after submission.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// End the round as won. Return false if the round was not in progress.
    pub fn win(&mut self) -> bool {
        self.finish(true)
    }

    /// End the round as lost. Return false if the round was not in progress.
    pub fn lose(&mut self) -> bool {
        self.finish(false)
    }

    fn finish(&mut self, won: bool) -> bool {
        if !self.is_in_progress() {
            return false;
        }
        self.won = won;
        self.status = if won {
            RoundStatus::Won
        } else {
            RoundStatus::Lost
        };
        debug!("Round over: {:?}", self.status);
        true
    }

    /// Close the latch and return the outcome of the finished round.
    ///
    /// Return None while the round is in progress, and for every call after the first one.
    pub fn take_outcome(&mut self, attempts: u32, score: u32) -> Option<Outcome> {
        match self.status {
            RoundStatus::Won | RoundStatus::Lost => {
                self.status = RoundStatus::Submitted;
                Some(Outcome {
                    attempts,
                    score,
                    won: self.won,
                })
            }
            RoundStatus::InProgress | RoundStatus::Submitted => None,
        }
    }
}

/// Common interface of the game rounds.
pub trait Round {
    /// Game mode of the round.
    fn mode(&self) -> GameMode;

    /// Current status of the round.
    fn status(&self) -> RoundStatus;

    /// Number of attempts so far.
    fn attempts(&self) -> u32;

    /// Score of the round in its current state. Unfinished or lost rounds usually score 0.
    fn score(&self) -> u32;

    /// Return the outcome to submit, only once, when the round is over.
    fn take_outcome(&mut self) -> Option<Outcome>;

    /// Text that the player can share, with spoiler-free emojis.
    fn share_text(&self, is_daily: bool) -> String;
}

/// Return the label of the daily or practice mode, used in the share text.
pub fn mode_label(is_daily: bool) -> &'static str {
    if is_daily { "(Daily)" } else { "(Practice)" }
}
