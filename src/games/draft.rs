/*
draft.rs

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

//! Draft: counter-pick the enemy team.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::SHARE_SITE;
use crate::game_mode::GameMode;
use crate::round::{Outcome, Round, RoundStatus, RoundTracker, mode_label};

/// Number of champions in a team.
pub const TEAM_SIZE: usize = 5;

/// Score of a perfect draft.
const MAX_SCORE: u32 = 1000;

/// Draft puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DraftPuzzle {
    /// Enemy team composition shown to the player.
    pub enemy_comp: Vec<String>,

    /// Expected counter composition.
    pub answer_comp: Vec<String>,

    /// Champions the player can pick from.
    pub pool: Vec<String>,

    /// Why the answer counters the enemy team, revealed after submission.
    #[serde(default)]
    pub explanation: String,
}

/// Number of distinct picks that belong to the answer composition.
pub fn overlap(puzzle: &DraftPuzzle, picks: &[String]) -> usize {
    let answer: HashSet<&str> = puzzle.answer_comp.iter().map(String::as_str).collect();
    let given: HashSet<&str> = picks.iter().map(String::as_str).collect();
    answer.intersection(&given).count()
}

/// Score: `round(1000 * overlap / 5)`.
pub fn score(puzzle: &DraftPuzzle, picks: &[String]) -> u32 {
    let correct: u32 = overlap(puzzle, picks).min(TEAM_SIZE) as u32;
    let n: u32 = TEAM_SIZE as u32;
    (2 * MAX_SCORE * correct + n) / (2 * n)
}

/// Whether the picks are exactly the answer composition.
pub fn is_solved(puzzle: &DraftPuzzle, picks: &[String]) -> bool {
    overlap(puzzle, picks) == TEAM_SIZE
}

/// Result of toggling a champion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PickResult {
    Added,
    Removed,

    /// The team is full, the champion is not in the pool, or the round is over.
    Rejected,
}

/// Draft round in progress.
#[derive(Debug, Clone)]
pub struct DraftRound {
    puzzle: DraftPuzzle,

    picks: Vec<String>,

    tracker: RoundTracker,
}

impl DraftRound {
    /// Create a [`DraftRound`] object.
    pub fn new(puzzle: DraftPuzzle) -> Self {
        Self {
            puzzle,
            picks: Vec::with_capacity(TEAM_SIZE),
            tracker: RoundTracker::new(),
        }
    }

    /// Return the puzzle.
    pub fn puzzle(&self) -> &DraftPuzzle {
        &self.puzzle
    }

    /// Return the current picks, in the order they were made.
    pub fn picks(&self) -> &[String] {
        &self.picks
    }

    /// Add the champion to the team, or remove it if it is already picked.
    pub fn toggle(&mut self, name: &str) -> PickResult {
        if !self.tracker.is_in_progress() {
            return PickResult::Rejected;
        }
        if let Some(i) = self.picks.iter().position(|p| p == name) {
            self.picks.remove(i);
            return PickResult::Removed;
        }
        if self.picks.len() >= TEAM_SIZE || !self.puzzle.pool.iter().any(|p| p == name) {
            warn!("Cannot pick {name}");
            return PickResult::Rejected;
        }
        self.picks.push(name.to_string());
        PickResult::Added
    }

    /// Lock the team. Return the score, or None if the team is not complete.
    pub fn submit(&mut self) -> Option<u32> {
        if self.picks.len() != TEAM_SIZE {
            return None;
        }
        if self.tracker.is_in_progress() {
            if is_solved(&self.puzzle, &self.picks) {
                self.tracker.win();
            } else {
                self.tracker.lose();
            }
            debug!("Draft submitted: {:?}", self.picks);
        }
        Some(self.score())
    }
}

impl Round for DraftRound {
    fn mode(&self) -> GameMode {
        GameMode::Draft
    }

    fn status(&self) -> RoundStatus {
        self.tracker.status()
    }

    fn attempts(&self) -> u32 {
        1
    }

    fn score(&self) -> u32 {
        score(&self.puzzle, &self.picks)
    }

    fn take_outcome(&mut self) -> Option<Outcome> {
        let attempts: u32 = self.attempts();
        let score: u32 = self.score();
        self.tracker.take_outcome(attempts, score)
    }

    fn share_text(&self, is_daily: bool) -> String {
        format!(
            "LoL {} {}\n{}/{TEAM_SIZE} optimal picks · Score: {}\n{SHARE_SITE}/{}",
            self.mode().title(),
            mode_label(is_daily),
            overlap(&self.puzzle, &self.picks),
            self.score(),
            self.mode()
        )
    }
}
