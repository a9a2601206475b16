/*
stages.rs

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

//! Generate stages.
//!
//! A stage is fully determined by its stage number and its difficulty level: both are combined
//! into the seed of a [`SeededRandom`] generator, which drives every random choice.
//!
//! The generation steps are:
//!
//! 1. Select the grid size, the hint ratio, and the number of walls ([`DifficultyConfig`]).
//! 2. Build a random snake path ([`RandomPath`]).
//! 3. Place walls on edges that the path does not use ([`walls::pick_walls`]).
//! 4. Select the anchor hints plus random hints ([`HintSet::pick`]).
//! 5. Run the solver. While the solution is not confirmed unique, reveal more path positions,
//!    in a random order, one at a time.
//! 6. If the solution is still not confirmed unique, reveal the whole path.

use log::{Level, debug, info, log_enabled, warn};
use std::time::Instant;

use super::hints::HintSet;
use super::path;
use super::random::SeededRandom;
use super::random_path::RandomPath;
use super::walls;
use crate::config::{
    DEFAULT_NODE_BUDGET, DEFAULT_SOLUTION_CAP, EASY_HINT_RATIO, EASY_SIZES, EXAMPLE_STAGES,
    HARD_HINT_RATIO, HARD_SIZE_RANGE, HARD_WALL_RANGE, MEDIUM_HINT_RATIO, MEDIUM_SIZES,
    MEDIUM_WALL_RANGE, SEED_DIFFICULTY_OFFSET, SEED_MULTIPLIER,
};
use crate::grid::Wall;
use crate::solver::{SolveResult, count_solutions};
use crate::stage::{Difficulty, Stage};

/// Generation parameters for a difficulty level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DifficultyConfig {
    /// Number of rows (and columns).
    pub size: usize,

    /// Fraction of the path positions to hint.
    pub hint_ratio: f64,

    /// Number of walls to place.
    pub walls: usize,
}

impl DifficultyConfig {
    /// Select the parameters for the difficulty level.
    ///
    /// The grid size is drawn first, then the number of walls. The easy level has no walls and
    /// does not draw a value for them.
    pub fn new(difficulty: Difficulty, random: &mut SeededRandom) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                size: random.pick(&EASY_SIZES).copied().unwrap_or(EASY_SIZES[0]),
                hint_ratio: EASY_HINT_RATIO,
                walls: 0,
            },
            Difficulty::Medium => {
                let size: usize = random.pick(&MEDIUM_SIZES).copied().unwrap_or(MEDIUM_SIZES[0]);
                Self {
                    size,
                    hint_ratio: MEDIUM_HINT_RATIO,
                    walls: random.int_range(MEDIUM_WALL_RANGE.0, MEDIUM_WALL_RANGE.1),
                }
            }
            Difficulty::Hard => {
                let size: usize = random.int_range(HARD_SIZE_RANGE.0, HARD_SIZE_RANGE.1);
                Self {
                    size,
                    hint_ratio: HARD_HINT_RATIO,
                    walls: random.int_range(HARD_WALL_RANGE.0, HARD_WALL_RANGE.1),
                }
            }
        }
    }
}

/// Return the seed for the given stage number and difficulty level.
///
/// The seed is `stage_number * 2654435761 + 97 * len(label)`, truncated to 32 bits.
pub fn stage_seed(stage_number: u32, difficulty: Difficulty) -> u32 {
    let offset: u64 = difficulty.label().len() as u64 * SEED_DIFFICULTY_OFFSET;
    u64::from(stage_number)
        .wrapping_mul(SEED_MULTIPLIER)
        .wrapping_add(offset) as u32
}

/// [`StageGenerator`] object.
///
/// The object keeps statistics about the last generated stage.
#[derive(Debug)]
pub struct StageGenerator {
    /// Maximum number of nodes for each solver run.
    pub node_budget: usize,

    /// Number of solver runs for the last generated stage.
    pub solver_runs: usize,

    /// Total number of solver nodes for the last generated stage.
    pub nodes: usize,

    /// Duration in seconds it took to generate the last stage.
    pub duration: f32,

    /// Whether the last stage had to reveal its whole path.
    pub fully_revealed: bool,

    /// Time when the generation started. Used to compute the [`StageGenerator::duration`].
    start: Instant,
}

impl Default for StageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl StageGenerator {
    /// Create the object.
    pub fn new() -> Self {
        Self::with_node_budget(DEFAULT_NODE_BUDGET)
    }

    /// Create the object with a custom node budget for the solver.
    pub fn with_node_budget(node_budget: usize) -> Self {
        Self {
            node_budget,
            solver_runs: 0,
            nodes: 0,
            duration: 0.0,
            fully_revealed: false,
            start: Instant::now(),
        }
    }

    /// Generate and return the stage for the given stage number and difficulty level.
    pub fn generate(&mut self, stage_number: u32, difficulty: Difficulty) -> Stage {
        self.solver_runs = 0;
        self.nodes = 0;
        self.duration = 0.0;
        self.fully_revealed = false;
        self.start = Instant::now();

        let seed: u32 = stage_seed(stage_number, difficulty);
        let mut random: SeededRandom = SeededRandom::new(seed);
        let config: DifficultyConfig = DifficultyConfig::new(difficulty, &mut random);
        debug!("Stage {stage_number} {difficulty}: seed = {seed}  {config:?}");

        let n: usize = config.size;
        let path: path::Path = RandomPath::new(n).generate(&mut random);
        let walls: Vec<Wall> = walls::pick_walls(&path, n, config.walls, &mut random);
        let mut hints: HintSet = HintSet::pick(path.len(), n, config.hint_ratio, &mut random);

        let mut stage: Stage = Stage::new(
            n,
            difficulty,
            stage_number,
            path.get().clone(),
            hints.to_hints(&path),
            walls,
        );

        let mut result: SolveResult = self.solve(&stage);
        if !result.is_unique() {
            // Reveal more positions until the solution is confirmed unique. The order covers all
            // the interior positions so that the draws do not depend on the hints already set.
            let mut order: Vec<usize> = (1..path.len() - 1).collect();
            random.shuffle(&mut order);
            if log_enabled!(Level::Debug) {
                debug!("Not unique with {} hints: {result:?}", hints.len());
                debug!("    reveal order = {order:?}");
            }

            for position in order {
                // Already hinted: the stage does not change, and neither does the result
                if !hints.insert(position) {
                    continue;
                }
                stage.set_hints(hints.to_hints(&path));
                result = self.solve(&stage);
                if result.is_unique() {
                    break;
                }
            }
        }

        if !result.is_unique() {
            warn!(
                "Stage {stage_number} {difficulty}: uniqueness not confirmed ({result:?}), revealing the whole path"
            );
            hints = HintSet::full(path.len());
            stage.set_hints(hints.to_hints(&path));
            self.fully_revealed = true;
        }

        self.duration = self.start.elapsed().as_secs_f32();
        info!(
            "Stage {stage_number} {difficulty}: {n}x{n}  hints = {}  walls = {}  solver runs = {}  nodes = {}  duration = {}s",
            stage.hints().len(),
            stage.walls().len(),
            self.solver_runs,
            self.nodes,
            self.duration
        );
        stage
    }

    /// Run the solver and update the statistics.
    fn solve(&mut self, stage: &Stage) -> SolveResult {
        let result: SolveResult = count_solutions(stage, DEFAULT_SOLUTION_CAP, self.node_budget);
        self.solver_runs += 1;
        self.nodes += result.nodes;
        result
    }
}

/// Generate and return the stage for the given stage number and difficulty level.
pub fn generate_stage(stage_number: u32, difficulty: Difficulty) -> Stage {
    StageGenerator::new().generate(stage_number, difficulty)
}

/// Generate one stage per difficulty level, from fixed stage numbers.
pub fn generate_example_stages() -> Vec<Stage> {
    EXAMPLE_STAGES
        .iter()
        .map(|(stage_number, difficulty)| generate_stage(*stage_number, *difficulty))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::verify_unique_solution;

    #[test]
    fn seed_formula() {
        assert_eq!(stage_seed(0, Difficulty::Easy), 388);
        assert_eq!(stage_seed(1, Difficulty::Medium), 2_654_435_761 + 582);
        // 42 * 2654435761 + 582 = 111486302544, modulo 2^32
        assert_eq!(stage_seed(42, Difficulty::Medium), 4_112_120_144);
        // EASY and HARD labels have the same length
        assert_eq!(stage_seed(7, Difficulty::Easy), stage_seed(7, Difficulty::Hard));
    }

    #[test]
    fn config_ranges() {
        for seed in 1..200 {
            let mut random = SeededRandom::new(seed);
            let easy = DifficultyConfig::new(Difficulty::Easy, &mut random);
            assert!(EASY_SIZES.contains(&easy.size));
            assert_eq!(easy.walls, 0);

            let medium = DifficultyConfig::new(Difficulty::Medium, &mut random);
            assert!(MEDIUM_SIZES.contains(&medium.size));
            assert!((2..=8).contains(&medium.walls));

            let hard = DifficultyConfig::new(Difficulty::Hard, &mut random);
            assert!((7..=10).contains(&hard.size));
            assert!((8..=20).contains(&hard.walls));
            assert!(hard.hint_ratio < medium.hint_ratio && medium.hint_ratio < easy.hint_ratio);
        }
    }

    #[test]
    fn generated_stage_is_unique() {
        let mut generator = StageGenerator::new();
        let stage = generator.generate(5, Difficulty::Easy);
        assert!(verify_unique_solution(&stage));
        assert!(generator.solver_runs >= 1);
        assert!(generator.nodes >= stage.num_cells());
    }

    #[test]
    fn tiny_budget_falls_back_to_full_reveal() {
        let mut generator = StageGenerator::with_node_budget(1);
        let stage = generator.generate(3, Difficulty::Medium);
        assert!(generator.fully_revealed);
        assert!(stage.is_fully_revealed());
        assert!(verify_unique_solution(&stage));
    }

    #[test]
    fn examples_cover_each_level() {
        let stages = generate_example_stages();
        let levels: Vec<Difficulty> = stages.iter().map(Stage::difficulty).collect();
        assert_eq!(
            levels,
            vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
        assert_eq!(stages[0].stage_number(), 11);
    }
}
