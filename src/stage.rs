/*
stage.rs

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

//! Stage definition.
//!
//! A [`Stage`] is the puzzle handed to the player: the grid size, the walls, the numbered hint
//! cells, and the solution path.
//! It is the whole data contract with the outside world and serializes to JSON with [`serde`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, IntoStaticStr};

use crate::grid::{Cell, Grid, Wall};

/// Stage difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Display,
    IntoStaticStr,
    Default,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Return the label of the difficulty level (`EASY`, `MEDIUM`, or `HARD`).
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Hint: a cell for which the number is provided from the beginning.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Hint {
    /// Sequence number, starting at 1.
    pub number: usize,

    /// Hinted cell.
    pub cell: Cell,
}

impl Hint {
    /// Create a [`Hint`] object.
    pub const fn new(number: usize, cell: Cell) -> Self {
        Self { number, cell }
    }
}

/// Puzzle definition.
///
/// The win sequence is written to JSON but never read back: it is derived again from the path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "StageRecord")]
pub struct Stage {
    /// Number of rows (and columns).
    grid_size: usize,

    /// Difficulty level the stage was built for.
    difficulty: Difficulty,

    /// Stage number the stage was generated from.
    stage_number: u32,

    /// Solution as an ordered list of cells.
    path: Vec<Cell>,

    /// Hints, sorted by number.
    hints: Vec<Hint>,

    /// Blocked edges.
    walls: Vec<Wall>,

    /// Linear cell numbers (`row * size + col + 1`) in path order. Cells off the grid get 0.
    win_sequence: Vec<usize>,
}

/// Fields of a [`Stage`] read from JSON.
#[derive(Deserialize)]
struct StageRecord {
    grid_size: usize,
    difficulty: Difficulty,
    stage_number: u32,
    path: Vec<Cell>,
    hints: Vec<Hint>,
    walls: Vec<Wall>,
}

impl From<StageRecord> for Stage {
    fn from(record: StageRecord) -> Self {
        Stage::new(
            record.grid_size,
            record.difficulty,
            record.stage_number,
            record.path,
            record.hints,
            record.walls,
        )
    }
}

impl Stage {
    /// Create a [`Stage`] object. The win sequence is derived from the path.
    pub fn new(
        grid_size: usize,
        difficulty: Difficulty,
        stage_number: u32,
        path: Vec<Cell>,
        hints: Vec<Hint>,
        walls: Vec<Wall>,
    ) -> Self {
        let win_sequence: Vec<usize> = path
            .iter()
            .map(|c| c.index(grid_size).map_or(0, |i| i + 1))
            .collect();
        Self {
            grid_size,
            difficulty,
            stage_number,
            path,
            hints,
            walls,
            win_sequence,
        }
    }

    /// Replace the hints. Only the generator does that, while it builds the stage.
    pub(crate) fn set_hints(&mut self, hints: Vec<Hint>) {
        self.hints = hints;
    }

    /// Number of rows (and columns).
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Difficulty level.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Stage number.
    pub fn stage_number(&self) -> u32 {
        self.stage_number
    }

    /// Solution path.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Hints, sorted by number.
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    /// Walls.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Linear cell numbers in path order.
    pub fn win_sequence(&self) -> &[usize] {
        &self.win_sequence
    }

    /// Build the [`Grid`] (size and walls) of the stage.
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size, &self.walls)
    }

    /// Return the hint number for the given cell, if the cell is hinted.
    pub fn hint_at(&self, cell: &Cell) -> Option<usize> {
        self.hints.iter().find(|h| h.cell == *cell).map(|h| h.number)
    }

    /// Return the cell that holds the given hint number.
    pub fn hint_cell(&self, number: usize) -> Option<Cell> {
        self.hints.iter().find(|h| h.number == number).map(|h| h.cell)
    }

    /// Whether every cell is hinted. That happens when the generator could not confirm a unique
    /// solution with fewer hints.
    pub fn is_fully_revealed(&self) -> bool {
        self.hints.len() == self.num_cells()
    }
}

/// Text representation of the stage: hint numbers, `.` for empty cells, `|` and `---` for walls.
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let grid: Grid = self.grid();
        let n: i32 = self.grid_size as i32;
        let width: usize = self.num_cells().to_string().len();

        writeln!(
            f,
            "Stage {} {} {}x{}",
            self.stage_number, self.difficulty, self.grid_size, self.grid_size
        )?;
        for r in 0..n {
            let mut line: String = String::new();
            let mut below: String = String::new();
            for c in 0..n {
                let cell: Cell = Cell::new(r, c);
                match self.hint_at(&cell) {
                    Some(number) => line.push_str(&format!("{number:>width$}")),
                    None => line.push_str(&format!("{:>width$}", ".")),
                }
                if c + 1 < n {
                    if grid.is_blocked(&cell, &Cell::new(r, c + 1)) {
                        line.push_str(" | ");
                    } else {
                        line.push_str("   ");
                    }
                }
                let mark: &str = if r + 1 < n && grid.is_blocked(&cell, &Cell::new(r + 1, c)) {
                    "-"
                } else {
                    " "
                };
                below.push_str(&mark.repeat(width));
                if c + 1 < n {
                    below.push_str("   ");
                }
            }
            writeln!(f, "{}", line.trim_end())?;
            if r + 1 < n {
                writeln!(f, "{}", below.trim_end())?;
            }
        }
        Ok(())
    }
}
