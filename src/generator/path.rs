/*
path.rs

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

//! Path on the grid.

use std::collections::HashSet;

use crate::grid::Cell;

/// Path object.
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Cell>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Cell>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(num_cells: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_cells),
            visited: HashSet::with_capacity(num_cells),
        }
    }

    /// Create a [`Path`] object from a list of cells.
    pub fn from_vec(path: &[Cell]) -> Self {
        Self {
            path: path.to_vec(),
            visited: path.iter().copied().collect(),
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: Cell) {
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Remove the last cell from the path.
    pub fn pop(&mut self) -> Option<Cell> {
        let cell: Option<Cell> = self.path.pop();
        if let Some(c) = cell {
            self.visited.remove(&c);
        }
        cell
    }

    /// Keep only the first `len` cells.
    pub fn truncate(&mut self, len: usize) {
        while self.path.len() > len {
            self.pop();
        }
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.visited.contains(cell)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<Cell> {
        &self.path
    }

    /// Return the position of the given cell in the path. Add one to the return value to get
    /// the cell number.
    pub fn cell_index(&self, cell: &Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        self.path.iter().position(|c| c == cell)
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    /// Reverse the order of the cells.
    pub fn reverse(&mut self) {
        self.path.reverse();
    }
}
