/*
game_mode.rs

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

//! Game modes.
//!
//! The kebab-case identifier of a [`GameMode`] is part of the daily hash input, of the puzzle
//! identifiers, and of the stored results. It must never change.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;
use thiserror::Error;

/// The six puzzle games.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
)]
#[repr(u8)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum GameMode {
    Connections,
    Timeline,
    Draft,
    Lore,
    AbilitySound,
    PatchNote,
}

/// Error returned when parsing an unknown game mode identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown game mode `{0}`")]
pub struct UnknownGameMode(pub String);

impl GameMode {
    /// Iterate over all the game modes, in their canonical order.
    pub fn all() -> impl Iterator<Item = GameMode> {
        (0u8..).map_while(GameMode::from_repr)
    }

    /// Return the identifier used in hashes, puzzle IDs, and stored results.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Connections => "connections",
            GameMode::Timeline => "timeline",
            GameMode::Draft => "draft",
            GameMode::Lore => "lore",
            GameMode::AbilitySound => "ability-sound",
            GameMode::PatchNote => "patch-note",
        }
    }

    /// Return the name of the catalog file that stores the puzzles for the mode.
    pub fn data_file(&self) -> &'static str {
        match self {
            GameMode::Connections => "connections-puzzles.json",
            GameMode::Timeline => "timeline-puzzles.json",
            GameMode::Draft => "draft-puzzles.json",
            GameMode::Lore => "lore-puzzles.json",
            GameMode::AbilitySound => "ability-sound-puzzles.json",
            GameMode::PatchNote => "patch-puzzles.json",
        }
    }

    /// Return the title displayed in the share text.
    pub fn title(&self) -> &'static str {
        match self {
            GameMode::Connections => "Connections",
            GameMode::Timeline => "Timeline",
            GameMode::Draft => "Draft Puzzle",
            GameMode::Lore => "Lore Connections",
            GameMode::AbilitySound => "Ability Sound",
            GameMode::PatchNote => "Patch Note",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = UnknownGameMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::all()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownGameMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_the_six_modes_in_order() {
        let modes: Vec<&str> = GameMode::all().map(|m| m.as_str()).collect();
        assert_eq!(
            modes,
            [
                "connections",
                "timeline",
                "draft",
                "lore",
                "ability-sound",
                "patch-note"
            ]
        );
    }

    #[test]
    fn parse_matches_display() {
        for mode in GameMode::all() {
            assert_eq!(mode.to_string().parse::<GameMode>(), Ok(mode));
        }
        assert_eq!(
            "chess".parse::<GameMode>(),
            Err(UnknownGameMode("chess".to_string()))
        );
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json: String = serde_json::to_string(&GameMode::AbilitySound).unwrap();
        assert_eq!(json, "\"ability-sound\"");
        let mode: GameMode = serde_json::from_str("\"patch-note\"").unwrap();
        assert_eq!(mode, GameMode::PatchNote);
    }
}
