/*
generation.rs

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

//! Performance measurement for stage generation and solving

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use dotpath::{Difficulty, count_solutions, generate_stage};
use std::hint::black_box;

/// Measures time to generate a stage at each difficulty level
fn bench_generate_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_stage");
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        group.bench_function(difficulty.label(), |b| {
            b.iter(|| black_box(generate_stage(black_box(99), difficulty)));
        });
    }
    group.finish();
}

/// Measures one uniqueness check on a generated hard stage
fn bench_count_solutions(c: &mut Criterion) {
    let stage = generate_stage(99, Difficulty::Hard);
    c.bench_function("count_solutions_hard", |b| {
        b.iter(|| black_box(count_solutions(black_box(&stage), 2, 200_000)));
    });
}

criterion_group!(benches, bench_generate_stage, bench_count_solutions);
criterion_main!(benches);
