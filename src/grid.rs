/*
grid.rs

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

//! Grid geometry: cells, edges, and walls.
//!
//! A [`Grid`] is a square board of `size` × `size` cells.
//! Two orthogonally adjacent cells share an [`Edge`].
//! A [`Wall`] is an edge that the path cannot cross.
//!
//! These primitives are shared by the solver, the generator, and the path validator.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Neighbor directions (row, column) in exploration order: down, up, right, left.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Cell coordinates, starting at 0.
///
/// Coordinates are signed so that a candidate path coming from the outside can hold cells that
/// are off the grid. See [`crate::validator::check_move`].
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row number.
    pub row: i32,

    /// Column number.
    pub col: i32,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl Cell {
    /// Create a [`Cell`] object.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether the cell is inside a grid of the given size.
    pub fn is_inside(&self, size: usize) -> bool {
        let n: i32 = size as i32;
        self.row >= 0 && self.row < n && self.col >= 0 && self.col < n
    }

    /// Whether the two cells are orthogonally adjacent (Manhattan distance of 1).
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }

    /// Linear index of the cell (`row * size + col`), or None if the cell is off the grid.
    pub fn index(&self, size: usize) -> Option<usize> {
        if self.is_inside(size) {
            Some(self.row as usize * size + self.col as usize)
        } else {
            None
        }
    }

    /// Build the cell from its linear index.
    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new((index / size) as i32, (index % size) as i32)
    }

    /// Return the cell shifted by the given offset. The result might be off the grid.
    fn offset(&self, delta: (i32, i32)) -> Self {
        Self::new(self.row + delta.0, self.col + delta.1)
    }
}

/// Unordered pair of adjacent cells.
///
/// `Edge::new(a, b)` and `Edge::new(b, a)` are equal and hash identically.
#[derive(Debug, Copy, Clone)]
pub struct Edge {
    cell1: Cell,
    cell2: Cell,
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = self.ordered();
        a.hash(state);
        b.hash(state);
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for Edge {}

impl Edge {
    /// Create an [`Edge`] object.
    pub fn new(cell1: Cell, cell2: Cell) -> Self {
        Self { cell1, cell2 }
    }

    /// Return the two cells, smallest first.
    pub fn ordered(&self) -> (Cell, Cell) {
        if self.cell1 <= self.cell2 {
            (self.cell1, self.cell2)
        } else {
            (self.cell2, self.cell1)
        }
    }
}

/// Blocked movement between two orthogonally adjacent cells.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Wall {
    /// First cell.
    pub from: Cell,

    /// Second cell.
    pub to: Cell,
}

impl Wall {
    /// Create a [`Wall`] object.
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    /// Return the edge that the wall blocks.
    pub fn edge(&self) -> Edge {
        Edge::new(self.from, self.to)
    }
}

/// Set of the blocked edges, for fast lookup.
#[derive(Debug, Default, Clone)]
pub struct WallSet {
    edges: HashSet<Edge>,
}

impl WallSet {
    /// Create a [`WallSet`] object from a list of walls.
    pub fn new(walls: &[Wall]) -> Self {
        Self {
            edges: walls.iter().map(Wall::edge).collect(),
        }
    }

    /// Whether the edge between the two cells is blocked.
    pub fn is_blocked(&self, a: &Cell, b: &Cell) -> bool {
        self.edges.contains(&Edge::new(*a, *b))
    }
}

/// Square grid with its walls.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of rows (and columns).
    pub size: usize,

    /// Blocked edges.
    walls: WallSet,
}

impl Grid {
    /// Create a [`Grid`] object.
    pub fn new(size: usize, walls: &[Wall]) -> Self {
        Self {
            size,
            walls: WallSet::new(walls),
        }
    }

    /// Number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    /// Whether the cell is on the grid.
    pub fn is_inside(&self, cell: &Cell) -> bool {
        cell.is_inside(self.size)
    }

    /// Whether a wall separates the two cells.
    pub fn is_blocked(&self, a: &Cell, b: &Cell) -> bool {
        self.walls.is_blocked(a, b)
    }

    /// Return the adjacent cells that are on the grid and not behind a wall (up to four), in the
    /// down, up, right, left order.
    pub fn neighbors(&self, cell: &Cell) -> Vec<Cell> {
        DIRECTIONS
            .iter()
            .map(|d| cell.offset(*d))
            .filter(|c| self.is_inside(c) && !self.is_blocked(cell, c))
            .collect()
    }

    /// Return all the internal edges of the grid, walled or not.
    ///
    /// Edges are listed row by row. For each cell, the edge going down comes before the edge
    /// going right.
    pub fn internal_edges(&self) -> Vec<(Cell, Cell)> {
        let n: i32 = self.size as i32;
        let mut edges: Vec<(Cell, Cell)> = Vec::with_capacity(2 * self.size * self.size);

        for r in 0..n {
            for c in 0..n {
                if r + 1 < n {
                    edges.push((Cell::new(r, c), Cell::new(r + 1, c)));
                }
                if c + 1 < n {
                    edges.push((Cell::new(r, c), Cell::new(r, c + 1)));
                }
            }
        }
        edges
    }
}
