/*
catalog.rs

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

//! Puzzle catalog.
//!
//! The catalog holds the list of puzzles for each game mode, and the lore graph.
//! It is loaded once, from the JSON files of a data directory, and is read-only afterwards.
//! Puzzles are addressed by their index in the list of their game mode, so the files are
//! append-only: changing the order of published puzzles changes the daily rotation.
//!
//! | Game mode       | File                         |
//! |-----------------|------------------------------|
//! | `connections`   | `connections-puzzles.json`   |
//! | `timeline`      | `timeline-puzzles.json`      |
//! | `draft`         | `draft-puzzles.json`         |
//! | `lore`          | `lore-puzzles.json`          |
//! | `ability-sound` | `ability-sound-puzzles.json` |
//! | `patch-note`    | `patch-puzzles.json`         |
//! | (lore graph)    | `lore-graph.json`            |

use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::LORE_GRAPH_FILE;
use crate::daily;
use crate::game_mode::GameMode;
use crate::games::connections::ConnectionsPuzzle;
use crate::games::draft::DraftPuzzle;
use crate::games::guess::{AbilitySoundPuzzle, PatchNotePuzzle};
use crate::games::lore::{LoreGraph, LorePuzzle};
use crate::games::timeline::TimelinePuzzle;

/// Errors returned when loading or reading the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid puzzle data in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog of the game mode has no puzzle.
    #[error("no puzzle available for {0}")]
    EmptyPool(GameMode),
}

/// A puzzle of any game mode.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum PuzzleRecord {
    Connections(ConnectionsPuzzle),
    Timeline(TimelinePuzzle),
    Draft(DraftPuzzle),
    Lore(LorePuzzle),
    AbilitySound(AbilitySoundPuzzle),
    PatchNote(PatchNotePuzzle),
}

impl PuzzleRecord {
    /// Game mode of the puzzle.
    pub fn mode(&self) -> GameMode {
        match self {
            PuzzleRecord::Connections(_) => GameMode::Connections,
            PuzzleRecord::Timeline(_) => GameMode::Timeline,
            PuzzleRecord::Draft(_) => GameMode::Draft,
            PuzzleRecord::Lore(_) => GameMode::Lore,
            PuzzleRecord::AbilitySound(_) => GameMode::AbilitySound,
            PuzzleRecord::PatchNote(_) => GameMode::PatchNote,
        }
    }
}

/// Puzzle handed to a player, with the identifier to use when submitting the result.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleResponse {
    pub puzzle_id: String,

    pub is_daily: bool,

    /// Index of the puzzle in its catalog.
    #[serde(skip)]
    pub index: usize,

    pub puzzle: PuzzleRecord,
}

/// Catalog of all the puzzles.
#[derive(Debug, Clone, Default)]
pub struct PuzzleCatalog {
    pub connections: Vec<ConnectionsPuzzle>,
    pub timeline: Vec<TimelinePuzzle>,
    pub draft: Vec<DraftPuzzle>,
    pub lore: Vec<LorePuzzle>,
    pub ability_sound: Vec<AbilitySoundPuzzle>,
    pub patch_note: Vec<PatchNotePuzzle>,
    pub lore_graph: LoreGraph,
}

/// Read and parse a JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let file: File = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader: BufReader<File> = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl PuzzleCatalog {
    /// Load the catalog from the given directory.
    ///
    /// # Errors
    ///
    /// Every catalog file must exist and be valid.
    pub fn load(data_dir: &Path) -> Result<Self, CatalogError> {
        debug!("Loading the puzzle catalog from {data_dir:?}");
        let file = |mode: GameMode| -> PathBuf { data_dir.join(mode.data_file()) };

        let catalog: PuzzleCatalog = Self {
            connections: read_json(&file(GameMode::Connections))?,
            timeline: read_json(&file(GameMode::Timeline))?,
            draft: read_json(&file(GameMode::Draft))?,
            lore: read_json(&file(GameMode::Lore))?,
            ability_sound: read_json(&file(GameMode::AbilitySound))?,
            patch_note: read_json(&file(GameMode::PatchNote))?,
            lore_graph: read_json(&data_dir.join(LORE_GRAPH_FILE))?,
        };

        for mode in GameMode::all() {
            debug!("{mode}: {} puzzle(s)", catalog.pool_size(mode));
        }
        info!(
            "Puzzle catalog loaded, lore graph with {} champion(s)",
            catalog.lore_graph.len()
        );
        Ok(catalog)
    }

    /// Number of puzzles for the game mode.
    pub fn pool_size(&self, mode: GameMode) -> usize {
        match mode {
            GameMode::Connections => self.connections.len(),
            GameMode::Timeline => self.timeline.len(),
            GameMode::Draft => self.draft.len(),
            GameMode::Lore => self.lore.len(),
            GameMode::AbilitySound => self.ability_sound.len(),
            GameMode::PatchNote => self.patch_note.len(),
        }
    }

    /// Return the puzzle at the given index. The same index always returns the same puzzle.
    pub fn get(&self, mode: GameMode, index: usize) -> Option<PuzzleRecord> {
        match mode {
            GameMode::Connections => self
                .connections
                .get(index)
                .cloned()
                .map(PuzzleRecord::Connections),
            GameMode::Timeline => self.timeline.get(index).cloned().map(PuzzleRecord::Timeline),
            GameMode::Draft => self.draft.get(index).cloned().map(PuzzleRecord::Draft),
            GameMode::Lore => self.lore.get(index).cloned().map(PuzzleRecord::Lore),
            GameMode::AbilitySound => self
                .ability_sound
                .get(index)
                .cloned()
                .map(PuzzleRecord::AbilitySound),
            GameMode::PatchNote => self
                .patch_note
                .get(index)
                .cloned()
                .map(PuzzleRecord::PatchNote),
        }
    }

    /// Return the puzzle of the day for the game mode and the UTC date.
    pub fn daily(&self, mode: GameMode, date: NaiveDate) -> Result<PuzzleResponse, CatalogError> {
        let selection: daily::DailySelection =
            daily::select_daily(mode.as_str(), self.pool_size(mode), date)
                .map_err(|_| CatalogError::EmptyPool(mode))?;
        self.response(mode, selection.puzzle_index, selection.puzzle_id, true)
    }

    /// Return a random puzzle for practice mode.
    pub fn random<R: Rng>(&self, mode: GameMode, rng: &mut R) -> Result<PuzzleResponse, CatalogError> {
        let index: usize = daily::practice_index(self.pool_size(mode), rng)
            .map_err(|_| CatalogError::EmptyPool(mode))?;
        let puzzle_id: String = daily::practice_puzzle_id(mode.as_str(), index);
        self.response(mode, index, puzzle_id, false)
    }

    fn response(
        &self,
        mode: GameMode,
        index: usize,
        puzzle_id: String,
        is_daily: bool,
    ) -> Result<PuzzleResponse, CatalogError> {
        let puzzle: PuzzleRecord = self.get(mode, index).ok_or(CatalogError::EmptyPool(mode))?;
        debug!("Puzzle {puzzle_id} is {mode} #{index}");
        Ok(PuzzleResponse {
            puzzle_id,
            is_daily,
            index,
            puzzle,
        })
    }

    /// Return the lore graph.
    pub fn lore_graph(&self) -> &LoreGraph {
        &self.lore_graph
    }
}
