/*
connections.rs

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

//! Connections: find the four groups of four.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::SHARE_SITE;
use crate::game_mode::GameMode;
use crate::round::{Outcome, Round, RoundStatus, RoundTracker, mode_label};

/// Number of items in a category, and in a guess.
pub const GROUP_SIZE: usize = 4;

/// Number of categories in a puzzle.
pub const CATEGORY_COUNT: usize = 4;

/// Number of mistakes that ends the round.
pub const MAX_MISTAKES: u32 = 4;

/// Points lost for each mistake.
const MISTAKE_PENALTY: u32 = 200;

/// Score of a perfect round.
const MAX_SCORE: u32 = 1000;

/// Difficulty color of a category.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Yellow,
    Green,
    Blue,
    Purple,
}

impl CategoryColor {
    /// Square emoji used in the share text.
    fn emoji(&self) -> &'static str {
        match self {
            CategoryColor::Yellow => "🟨",
            CategoryColor::Green => "🟩",
            CategoryColor::Blue => "🟦",
            CategoryColor::Purple => "🟪",
        }
    }
}

/// A category and its four items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Theme shared by the items.
    pub category: String,

    pub color: CategoryColor,

    pub items: Vec<String>,
}

impl Category {
    /// Whether the guess is exactly the item set of the category, in any order.
    pub fn matches(&self, guess: &[String]) -> bool {
        if guess.len() != GROUP_SIZE || self.items.len() != GROUP_SIZE {
            return false;
        }
        let expected: HashSet<&str> = self.items.iter().map(String::as_str).collect();
        let given: HashSet<&str> = guess.iter().map(String::as_str).collect();
        given.len() == GROUP_SIZE && expected == given
    }
}

/// A connections puzzle is the list of its categories.
pub type ConnectionsPuzzle = Vec<Category>;

/// Score of a won round.
pub fn score(mistakes: u32) -> u32 {
    MAX_SCORE.saturating_sub(MISTAKE_PENALTY.saturating_mul(mistakes))
}

/// Whether the list of solved categories covers the whole puzzle.
pub fn is_solved(puzzle: &[Category], solved: &[usize]) -> bool {
    let distinct: HashSet<usize> = solved.iter().copied().collect();
    !puzzle.is_empty() && distinct.len() == puzzle.len() && distinct.iter().all(|i| *i < puzzle.len())
}

/// Result of a guess.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// The guess solved the category at the given index in the puzzle.
    Correct(usize),

    /// The guess does not match any unsolved category. The mistake counter was incremented.
    Incorrect,

    /// The round is over; the guess was not evaluated.
    Ignored,
}

/// Entry of the guess log, used for the share text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum LogEntry {
    Correct(CategoryColor),
    Incorrect,
}

/// Connections round in progress.
#[derive(Debug, Clone)]
pub struct ConnectionsRound {
    puzzle: ConnectionsPuzzle,

    /// Indexes of the solved categories, in the order they were found.
    solved: Vec<usize>,

    mistakes: u32,

    log: Vec<LogEntry>,

    tracker: RoundTracker,
}

impl ConnectionsRound {
    /// Create a [`ConnectionsRound`] object for the given puzzle.
    pub fn new(puzzle: ConnectionsPuzzle) -> Self {
        Self {
            puzzle,
            solved: Vec::with_capacity(CATEGORY_COUNT),
            mistakes: 0,
            log: Vec::new(),
            tracker: RoundTracker::new(),
        }
    }

    /// Submit four items.
    ///
    /// Anything that is not exactly the item set of an unsolved category is a mistake,
    /// including a category that is already solved and a guess with the wrong number of items.
    pub fn guess(&mut self, items: &[String]) -> GuessResult {
        if !self.tracker.is_in_progress() {
            return GuessResult::Ignored;
        }

        let found: Option<usize> = self
            .puzzle
            .iter()
            .enumerate()
            .find(|(i, c)| !self.solved.contains(i) && c.matches(items))
            .map(|(i, _)| i);

        match found {
            Some(i) => {
                self.solved.push(i);
                self.log.push(LogEntry::Correct(self.puzzle[i].color));
                debug!("Category solved: {}", self.puzzle[i].category);
                if self.solved.len() == self.puzzle.len() {
                    self.tracker.win();
                }
                GuessResult::Correct(i)
            }
            None => {
                self.mistakes += 1;
                self.log.push(LogEntry::Incorrect);
                warn!("Wrong group {items:?}: {} mistake(s)", self.mistakes);
                if self.mistakes >= MAX_MISTAKES {
                    self.tracker.lose();
                }
                GuessResult::Incorrect
            }
        }
    }

    /// Return the number of mistakes.
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Return the solved categories, in the order they were found.
    pub fn solved(&self) -> Vec<&Category> {
        self.solved.iter().map(|i| &self.puzzle[*i]).collect()
    }

    /// Return the items that do not belong to a solved category, in puzzle order.
    pub fn remaining_items(&self) -> Vec<&str> {
        self.puzzle
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.solved.contains(i))
            .flat_map(|(_, c)| c.items.iter().map(String::as_str))
            .collect()
    }

    /// Return the remaining items in a random order, for display.
    pub fn shuffled_items<R: Rng>(&self, rng: &mut R) -> Vec<&str> {
        let mut items: Vec<&str> = self.remaining_items();
        items.shuffle(rng);
        items
    }
}

impl Round for ConnectionsRound {
    fn mode(&self) -> GameMode {
        GameMode::Connections
    }

    fn status(&self) -> RoundStatus {
        self.tracker.status()
    }

    fn attempts(&self) -> u32 {
        self.mistakes + self.solved.len() as u32
    }

    fn score(&self) -> u32 {
        if self.tracker.is_won() {
            score(self.mistakes)
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
        let rows: String = self
            .log
            .iter()
            .map(|entry| match entry {
                LogEntry::Correct(color) => color.emoji(),
                LogEntry::Incorrect => "🟥",
            })
            .collect();
        format!(
            "LoL {} {}\n{rows}\n{}/{} solved · {} mistakes\n{SHARE_SITE}/{}",
            self.mode().title(),
            mode_label(is_daily),
            self.solved.len(),
            self.puzzle.len(),
            self.mistakes,
            self.mode()
        )
    }
}
