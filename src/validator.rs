/*
validator.rs

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

//! Verify a path that the player draws.
//!
//! The player's path is an ordered list of cells starting at the cell holding hint 1.
//! The path is verified after each move so that the player gets immediate feedback.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::grid::{Cell, Grid};
use crate::stage::Stage;

/// Reasons for rejecting a path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A cell is off the grid.
    OutOfBounds,

    /// A cell appears twice in the path.
    Revisit,

    /// Two consecutive cells are not orthogonally adjacent.
    NotOrthogonal,

    /// Two consecutive cells are separated by a wall.
    WallBlock,

    /// A hinted cell is not at the position that its number requires.
    HintOrderMismatch,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason: &str = match self {
            MoveError::OutOfBounds => "OUT_OF_BOUNDS",
            MoveError::Revisit => "REVISIT",
            MoveError::NotOrthogonal => "NOT_ORTHOGONAL",
            MoveError::WallBlock => "WALL_BLOCK",
            MoveError::HintOrderMismatch => "HINT_ORDER_MISMATCH",
        };
        write!(f, "{reason}")
    }
}

impl std::error::Error for MoveError {}

/// Verify the given path against the stage rules.
///
/// The structure of the path is verified first (bounds, revisits, adjacency, walls), and then the
/// hint positions.
///
/// # Errors
///
/// Return the first rule that the path breaks.
pub fn check_move(stage: &Stage, path: &[Cell]) -> Result<(), MoveError> {
    let grid: Grid = stage.grid();
    let mut seen: HashSet<Cell> = HashSet::with_capacity(path.len());

    for (i, cell) in path.iter().enumerate() {
        if !grid.is_inside(cell) {
            return Err(MoveError::OutOfBounds);
        }
        if !seen.insert(*cell) {
            return Err(MoveError::Revisit);
        }
        if i > 0 {
            let previous: &Cell = &path[i - 1];
            if !previous.is_adjacent(cell) {
                return Err(MoveError::NotOrthogonal);
            }
            if grid.is_blocked(previous, cell) {
                return Err(MoveError::WallBlock);
            }
        }
    }

    if orders_match_hints(stage, path) {
        Ok(())
    } else {
        Err(MoveError::HintOrderMismatch)
    }
}

/// Whether the path goes through all the cells of the grid.
pub fn covers_all_cells(stage: &Stage, path: &[Cell]) -> bool {
    path.len() == stage.num_cells()
}

/// Whether every hinted cell in the path sits at the position given by its number.
pub fn orders_match_hints(stage: &Stage, path: &[Cell]) -> bool {
    let hints: HashMap<Cell, usize> = stage.hints().iter().map(|h| (h.cell, h.number)).collect();

    path.iter()
        .enumerate()
        .all(|(i, cell)| hints.get(cell).is_none_or(|number| *number == i + 1))
}
