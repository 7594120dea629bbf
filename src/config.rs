/*
config.rs

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

//! Build-time constants and default locations.

/// Copyright notice printed by `--version`.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n\nCopyright 2025 Hervé Quatremain\n",
    "License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>"
);

/// Default directory holding the puzzle catalog files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Environment variable overriding the catalog directory.
pub const DATA_DIR_ENV: &str = "RIFTDAILY_DATA_DIR";

/// Environment variable overriding the directory where results are saved.
pub const STORE_DIR_ENV: &str = "RIFTDAILY_STORE_DIR";

/// Name of the file that stores the submitted results.
pub const RESULTS_FILE: &str = "results.json";

/// Name of the file that stores the lore graph.
pub const LORE_GRAPH_FILE: &str = "lore-graph.json";

/// Number of leaderboard entries returned when the caller does not ask for a limit.
pub const LEADERBOARD_DEFAULT_LIMIT: usize = 20;

/// Maximum number of leaderboard entries returned.
pub const LEADERBOARD_MAX_LIMIT: usize = 100;

/// Site address appended to the share text.
pub const SHARE_SITE: &str = "lolhub.gg";
