/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Dotpath.

Dotpath is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Dotpath is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Dotpath. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Tuning constants and defaults.

use crate::stage::Difficulty;

/// Text displayed with `--version`.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Maximum number of search nodes the solver expands before giving up.
pub const DEFAULT_NODE_BUDGET: usize = 200_000;

/// The solver stops counting at that number of solutions. Two is enough to tell a unique
/// solution from an ambiguous stage.
pub const DEFAULT_SOLUTION_CAP: usize = 2;

/// Stage number multiplier for building the random seed.
pub const SEED_MULTIPLIER: u64 = 2_654_435_761;

/// Multiplied by the length of the difficulty label, and then added to the seed.
pub const SEED_DIFFICULTY_OFFSET: u64 = 97;

/// Stages generated by [`crate::generator::stages::generate_example_stages`].
pub const EXAMPLE_STAGES: [(u32, Difficulty); 3] = [
    (11, Difficulty::Easy),
    (22, Difficulty::Medium),
    (33, Difficulty::Hard),
];

/// Grid sizes for the easy level, one is picked at random.
pub const EASY_SIZES: [usize; 2] = [5, 6];

/// Grid sizes for the medium level, one is picked at random.
pub const MEDIUM_SIZES: [usize; 2] = [6, 7];

/// Inclusive range of the grid size for the hard level.
pub const HARD_SIZE_RANGE: (usize, usize) = (7, 10);

/// Inclusive range of the number of walls for the medium level.
pub const MEDIUM_WALL_RANGE: (usize, usize) = (2, 8);

/// Inclusive range of the number of walls for the hard level.
pub const HARD_WALL_RANGE: (usize, usize) = (8, 20);

/// Fraction of the path that is hinted for each level.
pub const EASY_HINT_RATIO: f64 = 0.4;
pub const MEDIUM_HINT_RATIO: f64 = 0.24;
pub const HARD_HINT_RATIO: f64 = 0.14;
