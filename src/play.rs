/*
play.rs

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

//! Play a round from a text stream.
//!
//! The command-line front end reads the player's moves from the standard input, one move per
//! line, and writes the feedback to the standard output.
//!
//! | Game mode       | Line                                                        |
//! |-----------------|-------------------------------------------------------------|
//! | `connections`   | four items, separated by commas                             |
//! | `timeline`      | all the champion IDs in order, separated by commas          |
//! | `draft`         | a champion to pick or unpick, or `submit`                   |
//! | `lore`          | the next champion of the chain, `undo`, or `submit`         |
//! | `ability-sound` | a champion name                                             |
//! | `patch-note`    | a champion or item name                                     |
//!
//! Blank lines are skipped. At the end of the input, a timeline, draft, or lore round that is
//! still in progress is submitted as it is.

use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

use crate::catalog::{PuzzleRecord, PuzzleResponse};
use crate::games::connections::{self, ConnectionsRound};
use crate::games::draft::{DraftRound, PickResult};
use crate::games::guess::{self, GuessRound};
use crate::games::lore::{LinkResult, LoreGraph, LoreRound};
use crate::games::timeline::TimelineRound;
use crate::round::{Outcome, Round, RoundStatus};

/// Number of wrong guesses before the ability sound hint is shown.
const HINT_AFTER_GUESSES: usize = 2;

/// Split a comma-separated line into trimmed, non-empty names.
fn split_names(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Read the moves from `input`: one per line, trimmed. Blank lines are skipped.
fn moves(input: impl BufRead) -> impl Iterator<Item = io::Result<String>> {
    input.lines().filter_map(|line| match line {
        Ok(line) => {
            let name: &str = line.trim();
            (!name.is_empty()).then(|| Ok(name.to_string()))
        }
        Err(e) => Some(Err(e)),
    })
}

/// Final report of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    /// Outcome to submit, or None if the round did not finish.
    pub outcome: Option<Outcome>,

    /// Text the player can share.
    pub share_text: String,
}

/// Play the puzzle with the moves read from `input`.
pub fn play<R: Rng>(
    response: &PuzzleResponse,
    graph: &LoreGraph,
    input: impl BufRead,
    output: &mut impl Write,
    rng: &mut R,
) -> io::Result<PlayReport> {
    debug!("Playing {}", response.puzzle_id);
    match &response.puzzle {
        PuzzleRecord::Connections(p) => {
            let round: ConnectionsRound = ConnectionsRound::new(p.clone());
            play_connections(round, response.is_daily, input, output, rng)
        }
        PuzzleRecord::Timeline(p) => {
            let round: TimelineRound = TimelineRound::new(p.clone(), rng);
            play_timeline(round, response.is_daily, input, output)
        }
        PuzzleRecord::Draft(p) => {
            play_draft(DraftRound::new(p.clone()), response.is_daily, input, output)
        }
        PuzzleRecord::Lore(p) => {
            play_lore(LoreRound::new(graph, p.clone()), response.is_daily, input, output)
        }
        PuzzleRecord::AbilitySound(p) => {
            writeln!(output, "Which champion uses this ability ({})?", p.ability)?;
            writeln!(output, "Sound: {}", p.audio_file)?;
            let round: GuessRound = GuessRound::ability_sound(p);
            play_guess(round, p.hint.as_deref(), response.is_daily, input, output)
        }
        PuzzleRecord::PatchNote(p) => {
            writeln!(output, "Patch {}: \"{}\"", p.patch, p.excerpt)?;
            play_guess(GuessRound::patch_note(p), None, response.is_daily, input, output)
        }
    }
}

/// Close the round and build the report.
fn finish(mut round: impl Round, is_daily: bool, output: &mut impl Write) -> io::Result<PlayReport> {
    match round.status() {
        RoundStatus::Won => writeln!(output, "Solved! Score: {}", round.score())?,
        RoundStatus::Lost => writeln!(output, "Round over. Score: {}", round.score())?,
        _ => writeln!(output, "Round not finished")?,
    }
    let share_text: String = round.share_text(is_daily);
    Ok(PlayReport {
        outcome: round.take_outcome(),
        share_text,
    })
}

fn play_connections<R: Rng>(
    mut round: ConnectionsRound,
    is_daily: bool,
    input: impl BufRead,
    output: &mut impl Write,
    rng: &mut R,
) -> io::Result<PlayReport> {
    writeln!(output, "{}", round.shuffled_items(rng).join(", "))?;
    for line in moves(input) {
        let guess: Vec<String> = split_names(&line?);
        match round.guess(&guess) {
            connections::GuessResult::Correct(_) => {
                if let Some(category) = round.solved().last() {
                    writeln!(output, "Correct: {}", category.category)?;
                }
            }
            connections::GuessResult::Incorrect => writeln!(
                output,
                "Wrong ({}/{} mistakes)",
                round.mistakes(),
                connections::MAX_MISTAKES
            )?,
            connections::GuessResult::Ignored => (),
        }
        if round.status() != RoundStatus::InProgress {
            break;
        }
        writeln!(output, "{}", round.shuffled_items(rng).join(", "))?;
    }
    finish(round, is_daily, output)
}

fn play_timeline(
    mut round: TimelineRound,
    is_daily: bool,
    input: impl BufRead,
    output: &mut impl Write,
) -> io::Result<PlayReport> {
    writeln!(output, "Order from oldest to newest: {}", round.order().join(", "))?;
    if let Some(line) = moves(input).next() {
        round.set_order(split_names(&line?));
    }
    let score: u32 = round.submit();
    writeln!(output, "Score: {score}")?;
    finish(round, is_daily, output)
}

fn play_draft(
    mut round: DraftRound,
    is_daily: bool,
    input: impl BufRead,
    output: &mut impl Write,
) -> io::Result<PlayReport> {
    writeln!(output, "Enemy team: {}", round.puzzle().enemy_comp.join(", "))?;
    writeln!(output, "Pool: {}", round.puzzle().pool.join(", "))?;
    for line in moves(input) {
        let line: String = line?;
        let name: &str = line.as_str();
        if name == "submit" {
            match round.submit() {
                Some(_) => break,
                None => writeln!(output, "Pick five champions first")?,
            }
            continue;
        }
        match round.toggle(name) {
            PickResult::Added => writeln!(output, "Picked {name}")?,
            PickResult::Removed => writeln!(output, "Removed {name}")?,
            PickResult::Rejected => writeln!(output, "Cannot pick {name}")?,
        }
    }
    // End of input: submit a complete team
    round.submit();
    if round.status() != RoundStatus::InProgress {
        writeln!(output, "Answer: {}", round.puzzle().answer_comp.join(", "))?;
        writeln!(output, "{}", round.puzzle().explanation)?;
    }
    finish(round, is_daily, output)
}

fn play_lore(
    mut round: LoreRound,
    is_daily: bool,
    input: impl BufRead,
    output: &mut impl Write,
) -> io::Result<PlayReport> {
    writeln!(
        output,
        "Link {} to {}",
        round.puzzle().champion_a,
        round.puzzle().champion_b
    )?;
    for line in moves(input) {
        let line: String = line?;
        let name: &str = line.as_str();
        match name {
            "submit" => break,
            "undo" => {
                if let Some(removed) = round.undo() {
                    writeln!(output, "Removed {removed}")?;
                }
            }
            _ => match round.add(name) {
                LinkResult::Added => (),
                LinkResult::Complete => break,
                LinkResult::AlreadyInChain => writeln!(output, "{name} is already in the chain")?,
                LinkResult::NotLinked => writeln!(output, "{name} is not linked")?,
                LinkResult::Ignored => break,
            },
        }
        writeln!(output, "Chain: {}", round.chain().get().join(" → "))?;
        if round.is_dead_end() {
            writeln!(output, "Dead end: undo or submit")?;
        }
    }
    round.submit();
    writeln!(output, "Your chain: {}", round.chain().get().join(" → "))?;
    match round.shortest_path() {
        Some(path) => writeln!(output, "Shortest: {}", path.join(" → "))?,
        None => writeln!(output, "No path exists")?,
    }
    finish(round, is_daily, output)
}

/// The hint, if any, is revealed after the second wrong guess.
fn play_guess(
    mut round: GuessRound,
    hint: Option<&str>,
    is_daily: bool,
    input: impl BufRead,
    output: &mut impl Write,
) -> io::Result<PlayReport> {
    for line in moves(input) {
        let line: String = line?;
        match round.guess(&line) {
            guess::GuessResult::Correct => break,
            guess::GuessResult::Incorrect => {
                writeln!(output, "Wrong, {} guess(es) left", round.remaining())?;
                let reveal: bool = round.guesses().len() == HINT_AFTER_GUESSES;
                if let Some(hint) = hint.filter(|_| reveal) {
                    writeln!(output, "Hint: {hint}")?;
                }
            }
            guess::GuessResult::Ignored => writeln!(output, "Already guessed")?,
        }
        if round.status() != RoundStatus::InProgress {
            break;
        }
    }
    if round.status() != RoundStatus::InProgress {
        writeln!(output, "Answer: {}", round.answer())?;
    }
    finish(round, is_daily, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::guess::{AbilitySoundPuzzle, PatchNotePuzzle};
    use crate::games::timeline::TimelinePuzzle;
    use crate::games::lore::LorePuzzle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn response(puzzle: PuzzleRecord) -> PuzzleResponse {
        PuzzleResponse {
            puzzle_id: "test".to_string(),
            is_daily: true,
            index: 0,
            puzzle,
        }
    }

    #[test]
    fn guess_from_lines() {
        let puzzle: PatchNotePuzzle = serde_json::from_str(
            r#"{"excerpt": "Cost reduced", "answer": "Trinity Force", "patch": "14.1",
                "type": "item"}"#,
        )
        .unwrap();
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let mut output: Vec<u8> = Vec::new();
        let report: PlayReport = play(
            &response(PuzzleRecord::PatchNote(puzzle)),
            &LoreGraph::new(),
            Cursor::new("Sheen\nSheen\ntrinity force\nNashor's Tooth\n"),
            &mut output,
            &mut rng,
        )
        .unwrap();
        assert_eq!(
            report.outcome,
            Some(Outcome {
                attempts: 2,
                score: 800,
                won: true
            })
        );
        let text: String = String::from_utf8(output).unwrap();
        assert!(text.contains("Already guessed"));
        assert!(text.contains("Answer: Trinity Force"));
    }

    #[test]
    fn lore_from_lines() {
        let graph: LoreGraph =
            serde_json::from_str(r#"{"A": ["B", "C"], "B": ["D"], "C": ["D"]}"#).unwrap();
        let puzzle: LorePuzzle = LorePuzzle {
            champion_a: "A".to_string(),
            champion_b: "D".to_string(),
        };
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let mut output: Vec<u8> = Vec::new();
        let report: PlayReport = play(
            &response(PuzzleRecord::Lore(puzzle)),
            &graph,
            Cursor::new("D\nC\nundo\nC\nD\n"),
            &mut output,
            &mut rng,
        )
        .unwrap();
        assert_eq!(report.outcome.map(|o| o.score), Some(1000));
        assert!(report.share_text.contains("Solved in 2 steps (optimal: 2)"));
        let text: String = String::from_utf8(output).unwrap();
        assert!(text.contains("D is not linked"));
        assert!(text.contains("Shortest: A → B → D"));
    }

    #[test]
    fn unfinished_guess_round_has_no_outcome() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let mut output: Vec<u8> = Vec::new();
        let puzzle: PatchNotePuzzle = PatchNotePuzzle {
            excerpt: "Armor increased".to_string(),
            answer: "Garen".to_string(),
            patch: "13.2".to_string(),
            kind: guess::PatchNoteKind::Champion,
        };
        let report: PlayReport = play(
            &response(PuzzleRecord::PatchNote(puzzle)),
            &LoreGraph::new(),
            Cursor::new("Darius\n"),
            &mut output,
            &mut rng,
        )
        .unwrap();
        assert_eq!(report.outcome, None);
    }

    fn ability_sound() -> PuzzleRecord {
        PuzzleRecord::AbilitySound(AbilitySoundPuzzle {
            champion: "Ahri".to_string(),
            ability: "R".to_string(),
            audio_file: "ahri_r.ogg".to_string(),
            hint: Some("Vastaya".to_string()),
        })
    }

    fn run(puzzle: PuzzleRecord, moves: &str) -> (PlayReport, String) {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let mut output: Vec<u8> = Vec::new();
        let report: PlayReport = play(
            &response(puzzle),
            &LoreGraph::new(),
            Cursor::new(moves.to_string()),
            &mut output,
            &mut rng,
        )
        .unwrap();
        (report, String::from_utf8(output).unwrap())
    }

    #[test]
    fn blank_lines_do_not_use_a_guess() {
        let (report, text) = run(ability_sound(), "\n  \nAhri\n");
        assert_eq!(
            report.outcome,
            Some(Outcome {
                attempts: 1,
                score: 1000,
                won: true
            })
        );
        assert!(!text.contains("Wrong"));
    }

    #[test]
    fn hint_after_two_wrong_guesses() {
        let (_, text) = run(ability_sound(), "Lux\n");
        assert!(!text.contains("Vastaya"));

        let (report, text) = run(ability_sound(), "Lux\nZed\nZed\n");
        assert_eq!(report.outcome, None);
        assert_eq!(text.matches("Hint: Vastaya").count(), 1);
        let hint: usize = text.find("Hint: Vastaya").unwrap();
        assert!(text.find("Wrong, 3 guess(es) left").unwrap() < hint);
    }

    #[test]
    fn connections_from_lines() {
        let puzzle: connections::ConnectionsPuzzle = serde_json::from_str(
            r#"[
                {"category": "Yordles", "color": "yellow", "items": ["Teemo", "Tristana", "Veigar", "Poppy"]},
                {"category": "Demacians", "color": "green", "items": ["Garen", "Lux", "Galio", "Sona"]},
                {"category": "Void", "color": "blue", "items": ["Kha'Zix", "Vel'Koz", "Cho'Gath", "Kog'Maw"]},
                {"category": "Darkin", "color": "purple", "items": ["Aatrox", "Varus", "Rhaast", "Naafiri"]}
            ]"#,
        )
        .unwrap();
        let (report, text) = run(
            PuzzleRecord::Connections(puzzle),
            "\nPoppy, Teemo, Veigar, Tristana\nLux, Garen, Galio, Sona\n\n\
             Kog'Maw, Kha'Zix, Vel'Koz, Cho'Gath\nAatrox, Varus, Rhaast, Naafiri\n",
        );
        assert_eq!(
            report.outcome,
            Some(Outcome {
                attempts: 4,
                score: 1000,
                won: true
            })
        );
        assert!(text.contains("Correct: Darkin"));
        assert!(!text.contains("Wrong"));
    }

    #[test]
    fn timeline_skips_blank_lines() {
        let puzzle: TimelinePuzzle = serde_json::from_str(
            r#"[
                {"id": "yasuo", "name": "Yasuo", "releaseDate": "2013-12-13"},
                {"id": "annie", "name": "Annie", "releaseDate": "2009-02-21"},
                {"id": "ahri", "name": "Ahri", "releaseDate": "2011-12-14"}
            ]"#,
        )
        .unwrap();
        let (report, text) = run(PuzzleRecord::Timeline(puzzle), "\n\nannie, ahri, yasuo\n");
        assert_eq!(
            report.outcome,
            Some(Outcome {
                attempts: 1,
                score: 1000,
                won: true
            })
        );
        assert!(text.contains("Score: 1000"));
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(split_names(" Ahri ,Yasuo,, Shen "), ["Ahri", "Yasuo", "Shen"]);
    }
}
