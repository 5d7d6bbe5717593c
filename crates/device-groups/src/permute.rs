// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Permutation expansion of grouped partitions.
//!
//! Orderings are produced by position, not by value: `k` units always
//! give `k!` orderings even when some units are equal. The first
//! ordering is the identity, and the rest follow in lexicographic order
//! of the position indices.

use crate::unit::{group_units, Unit};
use std::iter::FusedIterator;

/// Lazily yields every ordering of a pool of items.
///
/// Keeps one index vector and one countdown vector, so each step costs
/// `O(k)` regardless of how many orderings remain.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(pool: Vec<T>) -> Self {
        let n = pool.len();
        Self {
            pool,
            indices: (0..n).collect(),
            cycles: (1..=n).rev().collect(),
            started: false,
            done: false,
        }
    }

    /// The items being permuted, in their original order.
    pub fn pool(&self) -> &[T] {
        &self.pool
    }

    fn current(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }

        let n = self.pool.len();
        if !self.started {
            self.started = true;
            // The empty pool has exactly one (empty) ordering.
            self.done = n == 0;
            return Some(self.current());
        }

        for i in (0..n).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = self.cycles[i];
                self.indices.swap(i, n - j);
                return Some(self.current());
            }
        }

        self.done = true;
        None
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

/// Orderings of the units of one partition.
pub type UnitPermutations = Permutations<Unit>;

/// Groups `partition` with [`group_units`] and yields every ordering of
/// the resulting units.
///
/// # Examples
/// ```
/// use device_groups::{flatten, permute};
///
/// let orders: Vec<Vec<usize>> = permute(&[1, 1, 2, 4], 2).map(|u| flatten(&u)).collect();
/// assert_eq!(orders.len(), 6);
/// assert_eq!(orders[0], vec![1, 1, 2, 4]);
/// assert_eq!(orders[5], vec![4, 2, 1, 1]);
/// ```
pub fn permute(partition: &[usize], max_permute_len: usize) -> UnitPermutations {
    Permutations::new(group_units(partition, max_permute_len))
}

/// Concatenates the stages of each unit, in order.
pub fn flatten(units: &[Unit]) -> Vec<usize> {
    units
        .iter()
        .flat_map(|u| u.stages().iter().copied())
        .collect()
}

/// Yields every ordering of `units`, flattened back into per-stage
/// device counts.
pub fn expand_units(units: Vec<Unit>) -> impl Iterator<Item = Vec<usize>> {
    Permutations::new(units).map(|order| flatten(&order))
}
