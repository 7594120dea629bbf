/*
games.rs

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

//! Rules of the six puzzle games.
//!
//! Each module defines the puzzle record as it is stored in the catalog, the pure scoring
//! function of the game, and a round object that validates the player's moves one at a time.
//! Rounds implement the [`crate::round::Round`] trait.
//!
//! * [`connections`]: group 16 items into four categories of four.
//! * [`timeline`]: order champions by release date.
//! * [`draft`]: pick five champions that counter an enemy composition.
//! * [`lore`]: link two champions through their lore relationships.
//! * [`guess`]: guess a champion from an ability sound, or from a patch note excerpt.

pub mod connections;
pub mod draft;
pub mod guess;
pub mod lore;
pub mod timeline;
