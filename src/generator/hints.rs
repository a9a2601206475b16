/*
hints.rs

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

//! Select the hinted cells.
//!
//! Hints are stored as positions in the solution path: the cell at position `i` gets the number
//! `i + 1`.
//! The first selection always contains the anchors: both ends of the path and the positions
//! where the snake turns (first and last position of each row in the snake order). Those
//! positions cut most of the branching. Random positions are added up to the hint ratio of the
//! difficulty level.

use std::collections::BTreeSet;

use super::path;
use super::random::SeededRandom;
use crate::stage::Hint;

/// Set of hinted path positions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HintSet {
    positions: BTreeSet<usize>,
}

impl HintSet {
    /// Create an empty [`HintSet`] object.
    pub fn new() -> Self {
        Self {
            positions: BTreeSet::new(),
        }
    }

    /// Return the anchors for a path of `path_len` cells on a grid of the given size.
    ///
    /// Positions past the end of the path are left out.
    pub fn anchors(path_len: usize, size: usize) -> Self {
        let mut set: Self = Self::new();
        if path_len == 0 {
            return set;
        }

        set.insert(0);
        set.insert(path_len - 1);
        for r in 0..size {
            for position in [r * size, r * size + size - 1] {
                if position < path_len {
                    set.insert(position);
                }
            }
        }
        set
    }

    /// Return the anchors plus random positions, up to `path_len * ratio` positions.
    ///
    /// The target never exceeds `path_len`. Paths shorter than three cells have no interior
    /// position, and all their positions are anchors.
    pub fn pick(path_len: usize, size: usize, ratio: f64, random: &mut SeededRandom) -> Self {
        let mut set: Self = Self::anchors(path_len, size);
        let target: usize = set
            .len()
            .max((path_len as f64 * ratio).floor() as usize)
            .min(path_len);

        while set.len() < target {
            set.insert(random.int_range(1, path_len - 2));
        }
        set
    }

    /// Return all the positions of a path of `path_len` cells.
    pub fn full(path_len: usize) -> Self {
        Self {
            positions: (0..path_len).collect(),
        }
    }

    /// Add a position. Return whether the position was not already in the set.
    pub fn insert(&mut self, position: usize) -> bool {
        self.positions.insert(position)
    }

    /// Number of hinted positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Build the hints for the given path, sorted by number.
    pub fn to_hints(&self, path: &path::Path) -> Vec<Hint> {
        self.positions
            .iter()
            .filter_map(|&i| path.get().get(i).map(|cell| Hint::new(i + 1, *cell)))
            .collect()
    }
}
