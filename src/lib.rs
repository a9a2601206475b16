/*
lib.rs

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

//! Dotpath generates "connect the dots" path puzzles on square grids.
//!
//! A stage asks the player to draw a path that visits every cell exactly once.
//! Some cells carry their number in the path (hints), and some edges between cells are blocked
//! (walls). Hints and walls are chosen so that only one path solves the stage.
//!
//! * [`generator::stages::generate_stage`] builds the stage for a stage number and a difficulty
//!   level. The same pair always gives the same stage.
//! * [`validator::check_move`] verifies the path that the player is drawing.
//! * [`solver::count_solutions`] counts the solutions of a stage within a node budget.
//! * [`game::Game`] tracks a stage being played.

pub mod config;
pub mod game;
pub mod generator;
pub mod grid;
pub mod saver;
pub mod solver;
pub mod stage;
pub mod validator;

pub use generator::stages::{generate_example_stages, generate_stage};
pub use grid::{Cell, Wall};
pub use solver::{SolveResult, count_solutions, verify_unique_solution};
pub use stage::{Difficulty, Hint, Stage};
pub use validator::{MoveError, check_move, covers_all_cells, orders_match_hints};
