/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning the generator.
//! In command-line mode, Dotpath generates stages, prints them, saves them in JSON format, and
//! verifies candidate paths.
//!
//! # Examples
//!
//! Print stage 42 at the medium difficulty level:
//!
//! ```text
//! $ dotpath -n 42 -f medium
//! ```
//!
//! Generate 50 random hard stages and print some statistics:
//!
//! ```text
//! $ dotpath -f hard -r -c 50 -s
//! ```
//!
//! Verify a path, stored as a JSON list of cells, against stage 7:
//!
//! ```text
//! $ dotpath -n 7 -f easy --check path.json
//! ```

use clap::Parser;
use log::{debug, error};
use rand::Rng;
use std::env;
use std::path::PathBuf;

use dotpath::config::{COPYRIGHT_NOTICE, EXAMPLE_STAGES};
use dotpath::game::{Feedback, Game};
use dotpath::generator::stages::StageGenerator;
use dotpath::grid::Cell;
use dotpath::saver::stage::{SaverStage, read_path};
use dotpath::stage::{Difficulty, Stage};

/// Generate Dotpath stages for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Stage number of the first stage to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    stage: u32,

    /// Difficulty level for the stages
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of stages to generate (consecutive stage numbers)
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Use random stage numbers instead of consecutive ones
    #[arg(short, long, default_value_t = false)]
    random: bool,

    /// Generate the example stages (one per difficulty level)
    #[arg(short, long, default_value_t = false, conflicts_with_all = ["random", "count"])]
    examples: bool,

    /// Print the stages in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Directory where to save the stages in JSON format
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with a candidate path to verify against the first stage
    #[arg(long)]
    check: Option<PathBuf>,

    /// Print some statistics after generating the stages
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    // List of the stages to generate
    let requests: Vec<(u32, Difficulty)> = if args.examples {
        EXAMPLE_STAGES.to_vec()
    } else if args.random {
        let mut rng = rand::rng();
        (0..args.count)
            .map(|_| (rng.random_range(1..=1_000_000), args.difficulty))
            .collect()
    } else {
        (0..args.count)
            .map(|i| (args.stage.saturating_add(i as u32), args.difficulty))
            .collect()
    };

    let mut generator: StageGenerator = StageGenerator::new();
    let mut stages: Vec<Stage> = Vec::with_capacity(requests.len());
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut solver_runs: usize = 0;
    let mut fully_revealed: usize = 0;

    for (stage_number, difficulty) in requests {
        debug!("Generating stage {stage_number} {difficulty}");
        let stage: Stage = generator.generate(stage_number, difficulty);

        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        solver_runs += generator.solver_runs;
        if generator.fully_revealed {
            fully_revealed += 1;
        }

        if let Some(dir) = &args.output {
            let saver: SaverStage = SaverStage::new(dir.clone(), stage_number, difficulty);
            if let Err(e) = saver.save_stage(&stage) {
                error!("Cannot save {:?}: {e}", saver.file());
                return 1;
            }
        }

        if args.json {
            match serde_json::to_string_pretty(&stage) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    error!("Cannot serialize stage {stage_number}: {e}");
                    return 1;
                }
            }
        } else {
            println!("{stage}");
        }
        stages.push(stage);
    }

    //
    // Verify the candidate path against the first stage
    //
    let mut ret: u8 = 0;
    if let Some(file) = &args.check {
        let cells: Vec<Cell> = match read_path(file) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Cannot read the path from {file:?}: {e}");
                return 1;
            }
        };
        let Some(stage) = stages.first() else {
            eprintln!("No stage to verify the path against");
            return 1;
        };

        let mut game: Game = Game::new(stage.clone());
        let mut accepted: usize = 0;
        for cell in cells {
            if let Err(e) = game.add_cell(cell) {
                println!("Cell {cell} rejected: {e}");
                break;
            }
            accepted += 1;
        }
        let feedback: Feedback = game.evaluate();
        println!("{accepted} cells accepted. {feedback}");
        if feedback != Feedback::Cleared {
            ret = 2;
        }
    }

    // Print some stats
    if args.summary && !stages.is_empty() {
        println!(
            "
          stages = {}
      total time = {}s
    average time = {}s
        max time = {}s
     solver runs = {}
  fully revealed = {}",
            stages.len(),
            total,
            total / stages.len() as f32,
            max,
            solver_runs,
            fully_revealed
        );
    }
    ret
}
