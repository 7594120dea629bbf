/*
timeline.rs

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

//! Timeline: order champions from the oldest to the newest release date.

use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::SHARE_SITE;
use crate::game_mode::GameMode;
use crate::round::{Outcome, Round, RoundStatus, RoundTracker, mode_label};

/// Score of a perfect order.
const MAX_SCORE: u32 = 1000;

/// Champion to place on the timeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineChampion {
    pub id: String,

    pub name: String,

    /// Release date, stored as `YYYY-MM-DD`.
    pub release_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A timeline puzzle is the list of its champions, in any order.
pub type TimelinePuzzle = Vec<TimelineChampion>;

/// Return the champion identifiers sorted by release date.
///
/// Champions released the same day keep their puzzle order.
pub fn chronological_order(puzzle: &[TimelineChampion]) -> Vec<&str> {
    let mut sorted: Vec<&TimelineChampion> = puzzle.iter().collect();
    sorted.sort_by_key(|c| c.release_date);
    sorted.iter().map(|c| c.id.as_str()).collect()
}

/// Return, for each position of the submitted order, whether it holds the right champion.
///
/// The submitted order must be a permutation of the puzzle identifiers. Otherwise, every
/// position is wrong.
pub fn position_marks(puzzle: &[TimelineChampion], order: &[String]) -> Vec<bool> {
    let expected: Vec<&str> = chronological_order(puzzle);
    if !is_permutation(&expected, order) {
        return vec![false; order.len()];
    }
    order
        .iter()
        .zip(expected.iter())
        .map(|(given, wanted)| given == wanted)
        .collect()
}

/// Number of positions that hold the right champion.
pub fn correct_positions(puzzle: &[TimelineChampion], order: &[String]) -> usize {
    position_marks(puzzle, order).iter().filter(|ok| **ok).count()
}

/// Score: `round(1000 * correct_positions / N)`.
pub fn score(puzzle: &[TimelineChampion], order: &[String]) -> u32 {
    scaled_score(correct_positions(puzzle, order), puzzle.len())
}

/// `round(1000 * correct / n)`, rounded half up. Return 0 when `n` is 0.
fn scaled_score(correct: usize, n: usize) -> u32 {
    let n: u64 = n as u64;
    if n == 0 {
        return 0;
    }
    let correct: u64 = correct as u64;
    ((2 * MAX_SCORE as u64 * correct + n) / (2 * n)) as u32
}

/// Whether the submitted order is the chronological order.
pub fn is_solved(puzzle: &[TimelineChampion], order: &[String]) -> bool {
    !puzzle.is_empty() && correct_positions(puzzle, order) == puzzle.len()
}

fn is_permutation(expected: &[&str], order: &[String]) -> bool {
    if expected.len() != order.len() {
        return false;
    }
    let wanted: HashSet<&str> = expected.iter().copied().collect();
    let given: HashSet<&str> = order.iter().map(String::as_str).collect();
    given.len() == order.len() && wanted == given
}

/// Timeline round in progress.
#[derive(Debug, Clone)]
pub struct TimelineRound {
    puzzle: TimelinePuzzle,

    /// Current order of the champion identifiers.
    order: Vec<String>,

    tracker: RoundTracker,
}

impl TimelineRound {
    /// Create a [`TimelineRound`] object with the champions in a random order.
    pub fn new<R: Rng>(puzzle: TimelinePuzzle, rng: &mut R) -> Self {
        let mut order: Vec<String> = puzzle.iter().map(|c| c.id.clone()).collect();
        order.shuffle(rng);
        Self::with_order(puzzle, order)
    }

    /// Create a [`TimelineRound`] object with the champions in the given order.
    pub fn with_order(puzzle: TimelinePuzzle, order: Vec<String>) -> Self {
        Self {
            puzzle,
            order,
            tracker: RoundTracker::new(),
        }
    }

    /// Return the current order of the champion identifiers.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Return the champion with the given identifier.
    pub fn champion(&self, id: &str) -> Option<&TimelineChampion> {
        self.puzzle.iter().find(|c| c.id == id)
    }

    /// Move the champion at position `from` to position `to`, shifting the others.
    ///
    /// Return false if a position is out of range or the round is over.
    pub fn move_champion(&mut self, from: usize, to: usize) -> bool {
        if !self.tracker.is_in_progress() || from >= self.order.len() || to >= self.order.len() {
            return false;
        }
        let id: String = self.order.remove(from);
        self.order.insert(to, id);
        true
    }

    /// Replace the whole order.
    ///
    /// Return false if the round is over.
    pub fn set_order(&mut self, order: Vec<String>) -> bool {
        if !self.tracker.is_in_progress() {
            return false;
        }
        self.order = order;
        true
    }

    /// Lock the current order and reveal the result. Return the score.
    pub fn submit(&mut self) -> u32 {
        if self.tracker.is_in_progress() {
            if is_solved(&self.puzzle, &self.order) {
                self.tracker.win();
            } else {
                self.tracker.lose();
            }
            debug!("Timeline submitted: {:?}", self.order);
        }
        self.score()
    }
}

impl Round for TimelineRound {
    fn mode(&self) -> GameMode {
        GameMode::Timeline
    }

    fn status(&self) -> RoundStatus {
        self.tracker.status()
    }

    fn attempts(&self) -> u32 {
        1
    }

    fn score(&self) -> u32 {
        score(&self.puzzle, &self.order)
    }

    fn take_outcome(&mut self) -> Option<Outcome> {
        let attempts: u32 = self.attempts();
        let score: u32 = self.score();
        self.tracker.take_outcome(attempts, score)
    }

    fn share_text(&self, is_daily: bool) -> String {
        let marks: Vec<bool> = position_marks(&self.puzzle, &self.order);
        let emojis: String = marks
            .iter()
            .map(|ok| if *ok { "🟩" } else { "🟥" })
            .collect();
        let correct: usize = marks.iter().filter(|ok| **ok).count();
        format!(
            "LoL {} {}\n{emojis}\n{correct}/{} correct · Score: {}\n{SHARE_SITE}/{}",
            self.mode().title(),
            mode_label(is_daily),
            self.order.len(),
            self.score(),
            self.mode()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn champion(id: &str, date: &str) -> TimelineChampion {
        TimelineChampion {
            id: id.to_string(),
            name: id.to_string(),
            release_date: date.parse().unwrap(),
            image_url: None,
        }
    }

    fn puzzle() -> TimelinePuzzle {
        vec![
            champion("Yasuo", "2013-12-13"),
            champion("Annie", "2009-02-21"),
            champion("Zeri", "2022-01-20"),
            champion("Thresh", "2013-01-23"),
        ]
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn chronological_order_sorts_by_date() {
        assert_eq!(
            chronological_order(&puzzle()),
            ["Annie", "Thresh", "Yasuo", "Zeri"]
        );
    }

    #[test]
    fn exact_order_scores_1000() {
        let order: Vec<String> = ids(&["Annie", "Thresh", "Yasuo", "Zeri"]);
        assert_eq!(score(&puzzle(), &order), 1000);
        assert!(is_solved(&puzzle(), &order));

        let single: TimelinePuzzle = vec![champion("Annie", "2009-02-21")];
        assert_eq!(score(&single, &ids(&["Annie"])), 1000);
    }

    #[test]
    fn reversed_order_scores_0() {
        let order: Vec<String> = ids(&["Zeri", "Yasuo", "Thresh", "Annie"]);
        assert_eq!(score(&puzzle(), &order), 0);
    }

    #[test]
    fn positional_match_only() {
        // Every champion is one step away from its place: nothing is counted
        let order: Vec<String> = ids(&["Thresh", "Yasuo", "Zeri", "Annie"]);
        assert_eq!(correct_positions(&puzzle(), &order), 0);

        let order: Vec<String> = ids(&["Annie", "Yasuo", "Thresh", "Zeri"]);
        assert_eq!(score(&puzzle(), &order), 500);
    }

    #[test]
    fn score_is_rounded() {
        let three: TimelinePuzzle = vec![
            champion("Annie", "2009-02-21"),
            champion("Thresh", "2013-01-23"),
            champion("Zeri", "2022-01-20"),
        ];
        assert_eq!(score(&three, &ids(&["Annie", "Zeri", "Thresh"])), 333);
        assert_eq!(score(&three, &ids(&["Zeri", "Thresh", "Annie"])), 333);
        let order: Vec<String> = ids(&["Annie", "Thresh", "Zeri"]);
        assert_eq!(score(&three, &order), 1000);

        let six: TimelinePuzzle = (1..=6)
            .map(|i| champion(&format!("c{i}"), &format!("2010-01-0{i}")))
            .collect();
        // 4 of 6 correct: 666.67 rounds to 667
        let order: Vec<String> = ids(&["c1", "c2", "c3", "c4", "c6", "c5"]);
        assert_eq!(score(&six, &order), 667);
    }

    #[test]
    fn large_puzzles_do_not_overflow() {
        assert_eq!(scaled_score(3_000_000, 3_000_000), 1000);
        assert_eq!(scaled_score(2_999_999, 3_000_000), 1000);
        assert_eq!(scaled_score(1_500_000, 3_000_000), 500);
        assert_eq!(scaled_score(1, 3), 333);
        assert_eq!(scaled_score(0, 0), 0);
    }

    #[test]
    fn malformed_order_scores_0() {
        assert_eq!(score(&puzzle(), &ids(&["Annie", "Thresh", "Yasuo"])), 0);
        assert_eq!(
            score(&puzzle(), &ids(&["Annie", "Thresh", "Yasuo", "Yasuo"])),
            0
        );
        assert_eq!(
            score(&puzzle(), &ids(&["Annie", "Thresh", "Yasuo", "Teemo"])),
            0
        );
        assert_eq!(score(&[], &[]), 0);
    }

    #[test]
    fn round_moves_and_submits_once() {
        let mut round: TimelineRound =
            TimelineRound::with_order(puzzle(), ids(&["Zeri", "Annie", "Thresh", "Yasuo"]));
        assert!(round.move_champion(0, 3));
        assert_eq!(round.order(), ids(&["Annie", "Thresh", "Yasuo", "Zeri"]));
        assert!(!round.move_champion(0, 4));
        assert_eq!(round.submit(), 1000);
        assert_eq!(round.status(), RoundStatus::Won);
        assert!(!round.move_champion(0, 1));
        assert_eq!(
            round.take_outcome(),
            Some(Outcome {
                attempts: 1,
                score: 1000,
                won: true
            })
        );
        assert_eq!(round.take_outcome(), None);
    }

    #[test]
    fn imperfect_round_still_reports_its_score() {
        let mut round: TimelineRound =
            TimelineRound::with_order(puzzle(), ids(&["Annie", "Yasuo", "Thresh", "Zeri"]));
        assert_eq!(round.submit(), 500);
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(
            round.share_text(false),
            "LoL Timeline (Practice)\n🟩🟥🟥🟩\n2/4 correct · Score: 500\nlolhub.gg/timeline"
        );
        assert_eq!(round.take_outcome().map(|o| o.score), Some(500));
    }

    #[test]
    fn shuffled_round_keeps_all_champions() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let round: TimelineRound = TimelineRound::new(puzzle(), &mut rng);
        let mut order: Vec<String> = round.order().to_vec();
        order.sort();
        assert_eq!(order, ids(&["Annie", "Thresh", "Yasuo", "Zeri"]));
        assert_eq!(round.champion("Zeri").map(|c| c.name.as_str()), Some("Zeri"));
    }

    #[test]
    fn puzzle_json() {
        let json: &str = r#"[{"id": "Ahri", "name": "Ahri", "releaseDate": "2011-12-14",
            "imageUrl": "https://example.invalid/ahri.png"}]"#;
        let p: TimelinePuzzle = serde_json::from_str(json).unwrap();
        assert_eq!(p[0].release_date, NaiveDate::from_ymd_opt(2011, 12, 14).unwrap());
    }
}
