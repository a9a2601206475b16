/*
solver.rs

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

//! Count the paths that solve a stage.
//!
//! The solver walks the grid from the cell holding hint 1 and explores every path that visits
//! all the cells, goes through the hinted cells at the right step, and does not cross any wall.
//!
//! The search is a depth-first search that uses an explicit stack, so that the depth (one level
//! per cell) does not depend on the call stack.
//! It stops as soon as the solution cap is reached, or when it has expanded more nodes than the
//! node budget. In that later case the result is inconclusive.

use log::debug;

use crate::config::{DEFAULT_NODE_BUDGET, DEFAULT_SOLUTION_CAP};
use crate::grid::{Cell, Grid};
use crate::stage::Stage;

/// Result of a search.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// Number of solutions found, at most the solution cap.
    pub solutions: usize,

    /// Whether the node budget was exhausted. In that case `solutions` is not a confirmed count.
    pub aborted: bool,

    /// Number of nodes expanded.
    pub nodes: usize,
}

impl SolveResult {
    /// Whether the search completed and found exactly one solution.
    pub fn is_unique(&self) -> bool {
        !self.aborted && self.solutions == 1
    }
}

/// Search level: the cell reached at a given step and the cells still to try from there.
struct Frame {
    /// Step number, starting at 1.
    step: usize,

    /// Cell index.
    cell: usize,

    /// Next cells to explore, in order.
    candidates: Vec<usize>,

    /// Position of the next candidate to explore.
    next: usize,
}

/// Search data that does not change during the search. Cells are identified by their linear
/// index.
struct Solver {
    /// Number of cells.
    num_cells: usize,

    /// Open (not walled) neighbors of each cell, in the down, up, right, left order.
    adjacency: Vec<Vec<usize>>,

    /// Cell for each hint number. Index 0 is not used.
    /// Hints on cells off the grid are stored as `usize::MAX` so that they never match.
    cell_by_number: Vec<Option<usize>>,

    /// Hint number for each cell.
    number_by_cell: Vec<Option<usize>>,
}

impl Solver {
    /// Create a [`Solver`] object for the given stage.
    fn new(stage: &Stage) -> Self {
        let grid: Grid = stage.grid();
        let size: usize = grid.size;
        let num_cells: usize = grid.num_cells();

        let adjacency: Vec<Vec<usize>> = (0..num_cells)
            .map(|i| {
                grid.neighbors(&Cell::from_index(i, size))
                    .iter()
                    .filter_map(|c| c.index(size))
                    .collect()
            })
            .collect();

        let mut cell_by_number: Vec<Option<usize>> = vec![None; num_cells + 2];
        let mut number_by_cell: Vec<Option<usize>> = vec![None; num_cells];
        for hint in stage.hints() {
            let index: Option<usize> = hint.cell.index(size);
            if let Some(slot) = cell_by_number.get_mut(hint.number) {
                *slot = Some(index.unwrap_or(usize::MAX));
            }
            // Number 0 is not a sequence number: the cell is treated as not hinted
            if let Some(i) = index
                && hint.number > 0
            {
                number_by_cell[i] = Some(hint.number);
            }
        }

        Self {
            num_cells,
            adjacency,
            cell_by_number,
            number_by_cell,
        }
    }

    /// Return the cell that holds the given hint number.
    fn hinted_cell(&self, number: usize) -> Option<usize> {
        self.cell_by_number.get(number).copied().flatten()
    }

    /// Number of unvisited neighbors of the cell.
    fn options(&self, cell: usize, visited: &[bool]) -> usize {
        self.adjacency[cell].iter().filter(|&&c| !visited[c]).count()
    }

    /// Enter a node of the search tree.
    ///
    /// Return the [`Frame`] to explore from that node, or None if the node is a leaf: budget
    /// exhausted, hint not matched, or full path found.
    fn enter(
        &self,
        step: usize,
        cell: usize,
        visited: &[bool],
        node_budget: usize,
        result: &mut SolveResult,
    ) -> Option<Frame> {
        result.nodes += 1;
        if result.nodes > node_budget {
            result.aborted = true;
            return None;
        }

        if let Some(hinted) = self.hinted_cell(step)
            && hinted != cell
        {
            return None;
        }

        if step == self.num_cells {
            result.solutions += 1;
            return None;
        }

        let mut candidates: Vec<usize> = self.adjacency[cell]
            .iter()
            .copied()
            .filter(|&c| !visited[c])
            .collect();

        // A hinted next step leaves only one way to go
        if let Some(hinted) = self.hinted_cell(step + 1) {
            candidates.retain(|&c| c == hinted);
        }

        // Try the cells with the fewest exits first (stable sort)
        candidates.sort_by_key(|&c| self.options(c, visited));

        Some(Frame {
            step,
            cell,
            candidates,
            next: 0,
        })
    }

    /// Run the search.
    fn count(&self, solution_cap: usize, node_budget: usize) -> SolveResult {
        let mut result: SolveResult = SolveResult::default();

        let Some(start) = self.hinted_cell(1).filter(|c| *c < self.num_cells) else {
            debug!("No valid cell for hint 1: no solution");
            return result;
        };
        if solution_cap == 0 {
            return result;
        }

        let mut visited: Vec<bool> = vec![false; self.num_cells];
        visited[start] = true;

        let mut stack: Vec<Frame> = Vec::with_capacity(self.num_cells);
        if let Some(frame) = self.enter(1, start, &visited, node_budget, &mut result) {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            if result.solutions >= solution_cap || result.aborted {
                break;
            }

            let (step, next): (usize, usize) = match frame.candidates.get(frame.next) {
                Some(c) => {
                    frame.next += 1;
                    (frame.step + 1, *c)
                }
                None => {
                    // All the candidates have been explored: back to the previous level
                    let (step, cell): (usize, usize) = (frame.step, frame.cell);
                    stack.pop();
                    if step > 1 {
                        visited[cell] = false;
                    }
                    continue;
                }
            };

            // The candidate carries another number
            if let Some(number) = self.number_by_cell[next]
                && number != step
            {
                continue;
            }

            visited[next] = true;
            match self.enter(step, next, &visited, node_budget, &mut result) {
                Some(child) => stack.push(child),
                None => visited[next] = false,
            }
        }
        result
    }
}

/// Count the solutions of the stage, up to `solution_cap`, expanding at most `node_budget`
/// search nodes.
///
/// A stage without hint 1 has no solution.
pub fn count_solutions(stage: &Stage, solution_cap: usize, node_budget: usize) -> SolveResult {
    let result: SolveResult = Solver::new(stage).count(solution_cap, node_budget);
    debug!(
        "Solutions = {}  Aborted = {}  Nodes = {}",
        result.solutions, result.aborted, result.nodes
    );
    result
}

/// Whether the stage has exactly one solution, confirmed within the default node budget.
pub fn verify_unique_solution(stage: &Stage) -> bool {
    count_solutions(stage, DEFAULT_SOLUTION_CAP, DEFAULT_NODE_BUDGET).is_unique()
}
