/*
random_path.rs

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

//! Generate a random path.
//!
//! The path is a "snake" that covers the grid row by row (left to right, then right to left),
//! which is then flipped, transposed, and reversed at random. That gives up to 16 variants that
//! all visit every cell exactly once.

use log::debug;

use super::path;
use super::random::SeededRandom;
use crate::grid::Cell;

/// Geometric transformation applied to the snake.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Transform {
    /// Mirror the columns.
    pub flip_h: bool,

    /// Mirror the rows.
    pub flip_v: bool,

    /// Swap rows and columns. Applied before the flips.
    pub transpose: bool,
}

impl Transform {
    /// Apply the transformation to a cell of a grid of the given size.
    pub fn apply(&self, cell: &Cell, size: usize) -> Cell {
        let last: i32 = size as i32 - 1;
        let (mut r, mut c) = (cell.row, cell.col);

        if self.transpose {
            (r, c) = (c, r);
        }
        if self.flip_h {
            c = last - c;
        }
        if self.flip_v {
            r = last - r;
        }
        Cell::new(r, c)
    }
}

/// [`RandomPath`] object.
#[derive(Debug)]
pub struct RandomPath {
    /// Number of rows (and columns) in the grid.
    pub size: usize,

    /// Transformation used for the last generated path.
    pub transform: Transform,

    /// Whether the last generated path was reversed.
    pub reversed: bool,
}

impl RandomPath {
    /// Create the object.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            transform: Transform::default(),
            reversed: false,
        }
    }

    /// Return the snake path: row 0 left to right, row 1 right to left, and so on.
    pub fn snake(size: usize) -> path::Path {
        let n: i32 = size as i32;
        let mut path: path::Path = path::Path::new(size * size);

        for r in 0..n {
            if r % 2 == 0 {
                for c in 0..n {
                    path.push(Cell::new(r, c));
                }
            } else {
                for c in (0..n).rev() {
                    path.push(Cell::new(r, c));
                }
            }
        }
        path
    }

    /// Generate and return a random path.
    ///
    /// Four values are drawn from the generator: horizontal flip, vertical flip, transposition,
    /// and reversal.
    pub fn generate(&mut self, random: &mut SeededRandom) -> path::Path {
        self.transform = Transform {
            flip_h: random.flip(),
            flip_v: random.flip(),
            transpose: random.flip(),
        };

        let cells: Vec<Cell> = Self::snake(self.size)
            .get()
            .iter()
            .map(|c| self.transform.apply(c, self.size))
            .collect();
        let mut path: path::Path = path::Path::from_vec(&cells);

        self.reversed = random.flip();
        if self.reversed {
            path.reverse();
        }

        debug!(
            "Path {}x{}: {:?}  reversed = {}",
            self.size, self.size, self.transform, self.reversed
        );
        path
    }
}
