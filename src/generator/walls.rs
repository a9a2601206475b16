/*
walls.rs

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

//! Place walls.
//!
//! A wall blocks an edge between two adjacent cells.
//! Walls are only placed on edges that the solution path does not use, so that the solution
//! stays valid.

use log::debug;
use std::collections::HashSet;

use super::path;
use super::random::SeededRandom;
use crate::grid::{Cell, Edge, Grid, Wall};

/// Pick up to `target` walls for the given path on a grid of the given size.
///
/// The candidate edges are all the internal edges not used by the path. They are shuffled, and
/// the first `target` are kept. When `target` is 0, no value is drawn from the generator.
pub fn pick_walls(
    path: &path::Path,
    size: usize,
    target: usize,
    random: &mut SeededRandom,
) -> Vec<Wall> {
    if target == 0 {
        return Vec::new();
    }

    let used: HashSet<Edge> = path
        .get()
        .windows(2)
        .map(|w| Edge::new(w[0], w[1]))
        .collect();

    let mut candidates: Vec<Wall> = Grid::new(size, &[])
        .internal_edges()
        .into_iter()
        .filter(|(a, b)| !used.contains(&Edge::new(*a, *b)))
        .map(|(a, b): (Cell, Cell)| Wall::new(a, b))
        .collect();

    debug!(
        "Wall candidates = {}  Target = {}",
        candidates.len(),
        target
    );
    random.shuffle(&mut candidates);
    candidates.truncate(target);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random_path::RandomPath;

    #[test]
    fn no_wall_no_draw() {
        let mut a = SeededRandom::new(4);
        let mut b = SeededRandom::new(4);
        let walls = pick_walls(&RandomPath::snake(5), 5, 0, &mut a);
        assert!(walls.is_empty());
        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
    }

    #[test]
    fn walls_avoid_the_path() {
        let path = RandomPath::snake(6);
        let used: HashSet<Edge> = path
            .get()
            .windows(2)
            .map(|w| Edge::new(w[0], w[1]))
            .collect();
        let mut random = SeededRandom::new(12);
        let walls = pick_walls(&path, 6, 20, &mut random);
        assert_eq!(walls.len(), 20);
        for wall in &walls {
            assert!(wall.from.is_adjacent(&wall.to));
            assert!(!used.contains(&wall.edge()));
        }
        let distinct: HashSet<Edge> = walls.iter().map(Wall::edge).collect();
        assert_eq!(distinct.len(), walls.len());
    }

    #[test]
    fn target_above_candidates() {
        // 5x5: 40 internal edges, 24 used by the snake
        let mut random = SeededRandom::new(1);
        let walls = pick_walls(&RandomPath::snake(5), 5, 100, &mut random);
        assert_eq!(walls.len(), 16);
    }

    #[test]
    fn deterministic() {
        let path = RandomPath::snake(7);
        let a = pick_walls(&path, 7, 8, &mut SeededRandom::new(99));
        let b = pick_walls(&path, 7, 8, &mut SeededRandom::new(99));
        assert_eq!(a, b);
    }
}
