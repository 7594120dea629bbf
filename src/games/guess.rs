/*
guess.rs

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

//! Guess-the-champion games: ability sound and patch note.
//!
//! Both games give the player five guesses to name the answer.
//! The earlier the right guess, the higher the score.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SHARE_SITE;
use crate::game_mode::GameMode;
use crate::round::{Outcome, Round, RoundStatus, RoundTracker, mode_label};

/// Number of guesses in a round.
pub const MAX_GUESSES: usize = 5;

/// Score for a right guess, indexed by the attempt number minus one.
pub const SCORE_PER_GUESS: [u32; MAX_GUESSES] = [1000, 800, 600, 400, 200];

/// Ability sound puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AbilitySoundPuzzle {
    /// Champion to guess.
    pub champion: String,

    /// Ability key: Q, W, E, R, or P (passive).
    pub ability: String,

    /// Audio file played to the player.
    pub audio_file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Kind of entity a patch note excerpt is about.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PatchNoteKind {
    Champion,
    Item,
}

/// Patch note puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatchNotePuzzle {
    /// Excerpt of the patch note, with the name of the entity removed.
    pub excerpt: String,

    /// Champion or item to guess.
    pub answer: String,

    /// Patch version, such as `14.5`.
    pub patch: String,

    #[serde(rename = "type")]
    pub kind: PatchNoteKind,
}

/// Whether the guess names the answer, ignoring case.
pub fn is_correct(answer: &str, guess: &str) -> bool {
    guess.to_lowercase() == answer.to_lowercase()
}

/// Score of a right guess at the given attempt (starting at 1). Return 0 outside the table.
pub fn score_for_attempt(attempt: usize) -> u32 {
    match attempt.checked_sub(1) {
        Some(i) => SCORE_PER_GUESS.get(i).copied().unwrap_or(0),
        None => 0,
    }
}

/// Score of a list of guesses: the first right guess within the allowed attempts wins.
///
/// Repeated guesses are not counted.
pub fn score(answer: &str, guesses: &[String]) -> u32 {
    let mut round: GuessRound = GuessRound::new(GameMode::AbilitySound, answer);
    for guess in guesses {
        round.guess(guess);
    }
    round.score()
}

/// Result of a guess.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuessResult {
    Correct,
    Incorrect,

    /// The guess was already made, or the round is over. Nothing changed.
    Ignored,
}

/// Guessing round, shared by the ability sound and patch note games.
#[derive(Debug, Clone)]
pub struct GuessRound {
    mode: GameMode,

    answer: String,

    guesses: Vec<String>,

    tracker: RoundTracker,
}

impl GuessRound {
    /// Create a [`GuessRound`] object for the given game mode and answer.
    pub fn new(mode: GameMode, answer: &str) -> Self {
        Self {
            mode,
            answer: answer.to_string(),
            guesses: Vec::with_capacity(MAX_GUESSES),
            tracker: RoundTracker::new(),
        }
    }

    /// Create a round for an ability sound puzzle.
    pub fn ability_sound(puzzle: &AbilitySoundPuzzle) -> Self {
        Self::new(GameMode::AbilitySound, &puzzle.champion)
    }

    /// Create a round for a patch note puzzle.
    pub fn patch_note(puzzle: &PatchNotePuzzle) -> Self {
        Self::new(GameMode::PatchNote, &puzzle.answer)
    }

    /// Return the guesses made so far.
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Return the number of guesses left.
    pub fn remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    /// Submit a guess.
    pub fn guess(&mut self, name: &str) -> GuessResult {
        if !self.tracker.is_in_progress() || self.guesses.iter().any(|g| g == name) {
            return GuessResult::Ignored;
        }
        self.guesses.push(name.to_string());
        debug!("Guess {}/{MAX_GUESSES}: {name}", self.guesses.len());

        if is_correct(&self.answer, name) {
            self.tracker.win();
            GuessResult::Correct
        } else {
            if self.guesses.len() >= MAX_GUESSES {
                self.tracker.lose();
            }
            GuessResult::Incorrect
        }
    }

    /// Return the answer. Only reveal it when the round is over.
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

impl Round for GuessRound {
    fn mode(&self) -> GameMode {
        self.mode
    }

    fn status(&self) -> RoundStatus {
        self.tracker.status()
    }

    fn attempts(&self) -> u32 {
        self.guesses.len() as u32
    }

    fn score(&self) -> u32 {
        if self.tracker.is_won() {
            score_for_attempt(self.guesses.len())
        } else {
            0
        }
    }

    fn take_outcome(&mut self) -> Option<Outcome> {
        let attempts: u32 = self.attempts();
        let score: u32 = self.score();
        self.tracker.take_outcome(attempts, score)
    }

    fn share_text(&self, is_daily: bool) -> String {
        let emojis: String = self
            .guesses
            .iter()
            .map(|g| {
                if is_correct(&self.answer, g) {
                    "🟩"
                } else {
                    "🟥"
                }
            })
            .collect();
        format!(
            "LoL {} {}\n{emojis}\n{SHARE_SITE}/{}",
            self.mode.title(),
            mode_label(is_daily),
            self.mode
        )
    }
}
