/*
random.rs

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

//! Seeded pseudo-random number generator.
//!
//! Stages must be reproducible from their stage number and difficulty level, on any platform.
//! [`SeededRandom`] is a small counter-based generator (Mulberry32): the state is advanced by a
//! fixed increment and then mixed with xor-shifts and two multiplications.
//! Every derived operation ([`SeededRandom::int_range`], [`SeededRandom::pick`],
//! [`SeededRandom::shuffle`]) is expressed with [`SeededRandom::next_f64`], so the same stream
//! always produces the same choices.
//!
//! The generator is not cryptographically secure.

use rand::RngCore;
use rand::rand_core::impls;

/// Increment applied to the state for each draw. Also used as the state when the seed is 0.
const INCREMENT: u32 = 0x6d2b_79f5;

/// Seeded generator.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create a [`SeededRandom`] object.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { INCREMENT } else { seed },
        }
    }

    /// Advance the state and return the next mixed 32-bit value.
    fn advance(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t: u32 = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Return a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.advance()) / 4_294_967_296.0
    }

    /// Return an integer between `min` and `max`, both included.
    ///
    /// When `max` is below `min`, `min` is returned (one value is still drawn).
    pub fn int_range(&mut self, min: usize, max: usize) -> usize {
        let span: f64 = (max.saturating_sub(min) + 1) as f64;
        (self.next_f64() * span).floor() as usize + min
    }

    /// Return a coin flip.
    pub fn flip(&mut self) -> bool {
        self.int_range(0, 1) == 1
    }

    /// Return a random element of the slice, or None if the slice is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i: usize = self.int_range(0, items.len() - 1);
        items.get(i)
    }

    /// Shuffle the slice in place (Fisher-Yates, from the end).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j: usize = self.int_range(0, i);
            items.swap(i, j);
        }
    }
}

/// Lets the `rand` sampling helpers draw from the seeded stream.
impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut zero = SeededRandom::new(0);
        let mut remapped = SeededRandom::new(INCREMENT);
        assert_eq!(zero.next_u32(), remapped.next_u32());
    }

    #[test]
    fn known_stream_for_seed_one() {
        let mut random = SeededRandom::new(1);
        assert_eq!(random.next_u32(), 2_693_262_067);
        assert_eq!(random.next_u32(), 11_749_833);

        let mut random = SeededRandom::new(1);
        assert_eq!(random.next_f64(), 2_693_262_067.0 / 4_294_967_296.0);
    }

    #[test]
    fn inverted_range_returns_min() {
        let mut random = SeededRandom::new(6);
        assert_eq!(random.int_range(4, 2), 4);
        assert_eq!(random.int_range(0, 0), 0);
    }

    #[test]
    fn floats_in_unit_interval() {
        let mut random = SeededRandom::new(7);
        for _ in 0..1000 {
            let x: f64 = random.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn int_range_is_inclusive() {
        let mut random = SeededRandom::new(3);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let v: usize = random.int_range(2, 5);
            assert!((2..=5).contains(&v));
            seen[v - 2] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn pick_and_shuffle() {
        let mut random = SeededRandom::new(9);
        assert_eq!(random.pick::<usize>(&[]), None);
        assert_eq!(random.pick(&[5]), Some(&5));

        let mut items: Vec<usize> = (0..20).collect();
        random.shuffle(&mut items);
        let mut sorted: Vec<usize> = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<usize>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn shuffle_consumes_one_draw_per_swap() {
        let mut a = SeededRandom::new(11);
        let mut b = SeededRandom::new(11);
        let mut items = [1, 2, 3, 4];
        a.shuffle(&mut items);
        for _ in 0..3 {
            b.next_f64();
        }
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn usable_as_rand_generator() {
        let mut random = SeededRandom::new(5);
        for _ in 0..100 {
            let v: u32 = random.random_range(1..=10);
            assert!((1..=10).contains(&v));
        }
    }
}
