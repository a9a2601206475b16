/*
generator.rs

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

//! Generate random stages.
//!
//! Everything that is random in a stage comes from a [`random::SeededRandom`] generator seeded
//! from the stage number and the difficulty level, so a stage can be rebuilt at any time from
//! these two values.
//!
//! A stage is composed of three parts:
//!
//! * The solution path, represented by a [`path::Path`] object.
//!   You create this object by creating a [`random_path::RandomPath`] object and by using its
//!   [`random_path::RandomPath::generate`] method.
//!   The path is a snake that covers the grid, randomly flipped, transposed, and reversed.
//!
//! * The walls, selected by [`walls::pick_walls`] among the edges that the path does not use.
//!
//! * The hints, represented by a [`hints::HintSet`] object.
//!   The initial selection contains anchor positions and random positions.
//!   [`stages::StageGenerator`] then asks the solver whether the solution is unique, and reveals
//!   more positions until it is.
//!   If the solver cannot confirm uniqueness within its node budget, then the whole path is
//!   revealed.

pub mod hints;
pub mod path;
pub mod random;
pub mod random_path;
pub mod stages;
pub mod walls;
