/*
game.rs

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

//! Manage a stage being played.
//!
//! The player draws the path cell by cell from the cell holding hint 1.
//! After each change, [`Game::evaluate`] verifies the path with the [`crate::validator`]
//! functions and returns the feedback to display.

use log::debug;
use std::fmt;

use crate::generator::path::Path;
use crate::grid::Cell;
use crate::stage::Stage;
use crate::validator::{MoveError, check_move, covers_all_cells, orders_match_hints};

/// Reasons for ignoring a cell that the player selects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The path must start on the cell holding hint 1.
    NotStart,

    /// The cell is not next to the last cell of the path.
    NotAdjacent,

    /// The cell is already in the path.
    AlreadyInPath,

    /// The path already covers the grid.
    Complete,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::NotStart => write!(f, "Start at 1."),
            InputError::NotAdjacent => write!(f, "Not next to the last cell."),
            InputError::AlreadyInPath => write!(f, "Already in the path."),
            InputError::Complete => write!(f, "The path is complete."),
        }
    }
}

impl std::error::Error for InputError {}

/// Feedback on the current path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The path breaks a rule.
    Invalid(MoveError),

    /// The path is valid so far. The number of the next cell to draw is provided.
    Valid { next_target: usize },

    /// The path solves the stage.
    Cleared,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Feedback::Invalid(reason) => write!(f, "Invalid: {reason}"),
            Feedback::Valid { next_target } => write!(f, "Valid path. Next target: {next_target}"),
            Feedback::Cleared => write!(f, "Cleared!"),
        }
    }
}

/// Manage the status of the stage being played.
#[derive(Debug, Clone)]
pub struct Game {
    /// Stage details.
    stage: Stage,

    /// Path drawn by the player.
    path: Path,

    /// Number of cells that the player revealed instead of drawing them.
    revealed: usize,

    /// Whether the stage is solved.
    solved: bool,
}

impl Game {
    /// Create a [`Game`] object for the given stage.
    pub fn new(stage: Stage) -> Self {
        let num_cells: usize = stage.num_cells();
        Self {
            stage,
            path: Path::new(num_cells),
            revealed: 0,
            solved: false,
        }
    }

    /// Stage being played.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Path drawn so far.
    pub fn path(&self) -> &[Cell] {
        self.path.get()
    }

    /// Number of cells revealed with [`Game::reveal_next`].
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Whether a previous evaluation established that the stage was solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Extend the path with the given cell.
    ///
    /// The first cell must hold hint 1. The next cells must be adjacent to the last cell and not
    /// already in the path. Walls and hint numbers are not verified here: [`Game::evaluate`]
    /// reports them.
    ///
    /// # Errors
    ///
    /// Return the reason why the cell is not added.
    pub fn add_cell(&mut self, cell: Cell) -> Result<(), InputError> {
        if self.path.len() >= self.stage.num_cells() {
            return Err(InputError::Complete);
        }
        match self.path.get_last() {
            None => {
                if self.stage.hint_cell(1) != Some(cell) {
                    return Err(InputError::NotStart);
                }
            }
            Some(last) => {
                if !last.is_adjacent(&cell) {
                    return Err(InputError::NotAdjacent);
                }
                if self.path.contains(&cell) {
                    return Err(InputError::AlreadyInPath);
                }
            }
        }
        self.path.push(cell);
        Ok(())
    }

    /// Shorten the path to its first `len` cells. Used when the player drags back along the path.
    pub fn truncate(&mut self, len: usize) {
        self.path.truncate(len);
        self.solved = false;
    }

    /// Shorten the path so that it ends on the given cell.
    ///
    /// Return false if the cell is not in the path.
    pub fn back_to(&mut self, cell: &Cell) -> bool {
        match self.path.cell_index(cell) {
            Some(i) => {
                self.truncate(i + 1);
                true
            }
            None => false,
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.solved = false;
    }

    /// Add the next cell of the solution to the path, and return it.
    ///
    /// Return None when the path already has the length of the solution.
    pub fn reveal_next(&mut self) -> Option<Cell> {
        let cell: Cell = *self.stage.path().get(self.path.len())?;
        debug!("Revealing cell {cell} at position {}", self.path.len() + 1);
        self.path.push(cell);
        self.revealed += 1;
        Some(cell)
    }

    /// Verify the current path and return the feedback.
    pub fn evaluate(&mut self) -> Feedback {
        let path: &[Cell] = self.path.get();

        if let Err(reason) = check_move(&self.stage, path) {
            return Feedback::Invalid(reason);
        }
        if covers_all_cells(&self.stage, path) && orders_match_hints(&self.stage, path) {
            self.solved = true;
            return Feedback::Cleared;
        }
        Feedback::Valid {
            next_target: path.len() + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Wall;
    use crate::stage::{Difficulty, Hint};

    // 3x3 snake, hints 1, 5, 9, wall between (0,1) and (1,1)
    fn game() -> Game {
        let path: Vec<Cell> = vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
            Cell::new(1, 1),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(2, 1),
            Cell::new(2, 2),
        ];
        let hints: Vec<Hint> = vec![
            Hint::new(1, path[0]),
            Hint::new(5, path[4]),
            Hint::new(9, path[8]),
        ];
        let walls: Vec<Wall> = vec![Wall::new(Cell::new(0, 1), Cell::new(1, 1))];
        Game::new(Stage::new(3, Difficulty::Easy, 1, path, hints, walls))
    }

    #[test]
    fn must_start_at_one() {
        let mut game = game();
        assert_eq!(game.add_cell(Cell::new(1, 1)), Err(InputError::NotStart));
        assert_eq!(game.add_cell(Cell::new(0, 0)), Ok(()));
        assert_eq!(game.evaluate(), Feedback::Valid { next_target: 2 });
    }

    #[test]
    fn rejected_inputs() {
        let mut game = game();
        game.add_cell(Cell::new(0, 0)).unwrap();
        game.add_cell(Cell::new(0, 1)).unwrap();
        assert_eq!(game.add_cell(Cell::new(2, 2)), Err(InputError::NotAdjacent));
        assert_eq!(game.add_cell(Cell::new(0, 0)), Err(InputError::AlreadyInPath));
        assert_eq!(game.path().len(), 2);
    }

    #[test]
    fn walls_are_reported_by_evaluation() {
        let mut game = game();
        game.add_cell(Cell::new(0, 0)).unwrap();
        game.add_cell(Cell::new(0, 1)).unwrap();
        game.add_cell(Cell::new(1, 1)).unwrap();
        assert_eq!(game.evaluate(), Feedback::Invalid(MoveError::WallBlock));

        assert!(game.back_to(&Cell::new(0, 1)));
        assert_eq!(game.evaluate(), Feedback::Valid { next_target: 3 });
    }

    #[test]
    fn hint_mismatch() {
        let mut game = game();
        game.add_cell(Cell::new(0, 0)).unwrap();
        game.add_cell(Cell::new(1, 0)).unwrap();
        game.add_cell(Cell::new(1, 1)).unwrap();
        assert_eq!(
            game.evaluate(),
            Feedback::Invalid(MoveError::HintOrderMismatch)
        );
    }

    #[test]
    fn reveal_until_cleared() {
        let mut game = game();
        game.add_cell(Cell::new(0, 0)).unwrap();
        while game.reveal_next().is_some() {}
        assert_eq!(game.revealed(), 8);
        assert_eq!(game.evaluate(), Feedback::Cleared);
        assert!(game.is_solved());
        assert_eq!(game.add_cell(Cell::new(2, 1)), Err(InputError::Complete));

        game.truncate(4);
        assert!(!game.is_solved());
        assert_eq!(game.evaluate(), Feedback::Valid { next_target: 5 });

        game.clear();
        assert!(game.path().is_empty());
        assert_eq!(game.evaluate(), Feedback::Valid { next_target: 1 });
    }

    #[test]
    fn feedback_text() {
        assert_eq!(
            Feedback::Invalid(MoveError::Revisit).to_string(),
            "Invalid: REVISIT"
        );
        assert_eq!(
            Feedback::Valid { next_target: 4 }.to_string(),
            "Valid path. Next target: 4"
        );
    }
}
