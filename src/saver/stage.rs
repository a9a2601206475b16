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

//! Save and restore stages and candidate paths in JSON format.
//!
//! A stage is saved in a `stage-<number>-<difficulty>.json` file in the given directory.
//! The saved object is a serialization of the [`Stage`] object by using [`serde`].
//!
//! Candidate paths are JSON lists of `{"row": r, "col": c}` objects.

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::grid::Cell;
use crate::stage::{Difficulty, Stage};

/// Object to save and restore a stage.
pub struct SaverStage {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverStage {
    /// Create a [`SaverStage`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the stage must be saved.
    pub fn new(mut data_dir: PathBuf, stage_number: u32, difficulty: Difficulty) -> Self {
        data_dir.push(format!(
            "stage-{stage_number}-{}.json",
            difficulty.label().to_lowercase()
        ));
        debug!("Stage file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Path to the save file.
    pub fn file(&self) -> &Path {
        &self.save_file
    }

    /// Retrieve the saved [`Stage`] object.
    ///
    /// Return the [`Stage`] object or None if the stage has not been saved.
    pub fn get_stage(&self) -> Result<Option<Stage>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let stage: Stage = serde_json::from_reader(reader)?;
        Ok(Some(stage))
    }

    /// Save the provided [`Stage`] object.
    pub fn save_stage(&self, stage: &Stage) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, stage)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved stage.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

/// Read a candidate path from a JSON file.
pub fn read_path(file_path: &Path) -> Result<Vec<Cell>, Box<dyn Error>> {
    let file: File = File::open(file_path)?;
    let reader: BufReader<File> = BufReader::new(file);
    let cells: Vec<Cell> = serde_json::from_reader(reader)?;
    Ok(cells)
}
