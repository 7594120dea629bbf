/*
daily_rotation.rs

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

use chrono::NaiveDate;
use riftdaily::catalog::{PuzzleCatalog, PuzzleRecord, PuzzleResponse};
use riftdaily::game_mode::GameMode;
use std::path::PathBuf;

fn sample_catalog() -> PuzzleCatalog {
    let data_dir: PathBuf = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    PuzzleCatalog::load(&data_dir).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn sample_catalog_has_every_mode() {
    let catalog: PuzzleCatalog = sample_catalog();
    for mode in GameMode::all() {
        assert!(catalog.pool_size(mode) > 0, "{mode} has no puzzle");
    }
}

#[test]
fn daily_puzzle_is_stable() {
    let catalog: PuzzleCatalog = sample_catalog();
    let expected: [(GameMode, usize, usize); 6] = [
        (GameMode::Connections, 1, 2),
        (GameMode::Timeline, 0, 1),
        (GameMode::Draft, 1, 0),
        (GameMode::Lore, 1, 2),
        (GameMode::AbilitySound, 2, 2),
        (GameMode::PatchNote, 1, 1),
    ];
    for (mode, new_year, march) in expected {
        let first: PuzzleResponse = catalog.daily(mode, date(2024, 1, 1)).unwrap();
        assert_eq!(first.index, new_year, "{mode} on 2024-1-1");
        assert_eq!(first.puzzle_id, format!("{mode}-2024-1-1"));
        assert!(first.is_daily);

        let second: PuzzleResponse = catalog.daily(mode, date(2024, 3, 7)).unwrap();
        assert_eq!(second.index, march, "{mode} on 2024-3-7");
        assert_eq!(second.puzzle_id, format!("{mode}-2024-3-7"));
        assert_eq!(second.puzzle.mode(), mode);
    }
}

#[test]
fn every_daily_lore_puzzle_has_a_path() {
    let catalog: PuzzleCatalog = sample_catalog();
    for day in 1..=31 {
        let response: PuzzleResponse = catalog.daily(GameMode::Lore, date(2024, 1, day)).unwrap();
        let PuzzleRecord::Lore(puzzle) = response.puzzle else {
            panic!("not a lore puzzle");
        };
        assert!(
            catalog
                .lore_graph()
                .shortest_path(&puzzle.champion_a, &puzzle.champion_b)
                .is_some(),
            "{} and {} are not linked",
            puzzle.champion_a,
            puzzle.champion_b
        );
    }
}

#[test]
fn daily_response_json() {
    let catalog: PuzzleCatalog = sample_catalog();
    let response: PuzzleResponse = catalog.daily(GameMode::Lore, date(2024, 1, 1)).unwrap();
    let json: serde_json::Value = serde_json::to_value(&response).unwrap();
    assert_eq!(json["puzzleId"], "lore-2024-1-1");
    assert_eq!(json["isDaily"], true);
    assert_eq!(json["puzzle"]["championA"], "Vi");
    assert_eq!(json["puzzle"]["championB"], "Jinx");
}
