// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Depth-first enumeration of stage-size partitions.
//!
//! A partition assigns one vocabulary value to each of `num_stages`
//! stages so that the values sum to `num_gpus`. Every DFS is seeded with
//! one vocabulary entry as the first stage and only explores
//! continuations that never step back to a smaller vocabulary index, so
//! each partition comes out in non-decreasing order. The orderings of a
//! partition are produced later by [`crate::permute`].
//!
//! # Pruning
//!
//! A branch is cut before its candidates are visited when
//!
//! ```text
//! max(shapes) * remaining_stages < num_gpus - sum    (cannot reach the pool)
//! min(shapes) * remaining_stages > num_gpus - sum    (must overshoot the pool)
//! ```
//!
//! and the candidate loop stops at the first value that would push the
//! running sum past `num_gpus`, since the vocabulary is ascending.

use std::iter::FusedIterator;

/// Lazily enumerates every partition of `num_gpus` devices into
/// `num_stages` stages drawn from `shapes`.
///
/// `shapes` must be sorted ascending without duplicates, and both counts
/// must be positive. An empty vocabulary or an infeasible target simply
/// yields nothing.
///
/// # Examples
/// ```
/// use device_groups::enumerate_partitions;
///
/// let found: Vec<Vec<usize>> = enumerate_partitions(4, 8, &[1, 2, 4, 8]).collect();
/// assert_eq!(found, vec![vec![1, 1, 2, 4], vec![2, 2, 2, 2]]);
/// ```
pub fn enumerate_partitions(num_stages: usize, num_gpus: usize, shapes: &[usize]) -> Partitions<'_> {
    Partitions {
        num_stages,
        num_gpus,
        shapes,
        next_seed: 0,
        prefix: Vec::with_capacity(num_stages),
        stack: Vec::with_capacity(num_stages),
    }
}

/// One suspended DFS node: the running sum at this depth and the next
/// vocabulary index to try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    sum: usize,
    cursor: usize,
}

/// Iterator returned by [`enumerate_partitions`].
///
/// The recursion is unrolled into an explicit stack: `stack[d]` is the
/// node whose path is `prefix[..=d]`. Memory stays `O(num_stages)`.
#[derive(Debug, Clone)]
pub struct Partitions<'a> {
    num_stages: usize,
    num_gpus: usize,
    shapes: &'a [usize],
    next_seed: usize,
    prefix: Vec<usize>,
    stack: Vec<Frame>,
}

impl Partitions<'_> {
    fn is_pruned(&self, sum: usize) -> bool {
        let (Some(&min), Some(&max)) = (self.shapes.first(), self.shapes.last()) else {
            return true;
        };
        let remaining = self.num_stages.saturating_sub(self.prefix.len());
        max.saturating_mul(remaining).saturating_add(sum) < self.num_gpus
            || min.saturating_mul(remaining).saturating_add(sum) > self.num_gpus
    }

    /// Visits the node whose value was just pushed onto `prefix`.
    ///
    /// Returns the completed partition when the node is a matching leaf.
    /// Pruned nodes and leaves are popped straight away; interior nodes
    /// are suspended on the stack.
    fn enter(&mut self, sum: usize, index: usize) -> Option<Vec<usize>> {
        if self.is_pruned(sum) {
            self.prefix.pop();
            return None;
        }

        if self.prefix.len() >= self.num_stages {
            let leaf = (sum == self.num_gpus).then(|| self.prefix.clone());
            self.prefix.pop();
            return leaf;
        }

        self.stack.push(Frame { sum, cursor: index });
        None
    }
}

impl Iterator for Partitions<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                // Current tree exhausted: seed the next first-stage value.
                let index = self.next_seed;
                let &value = self.shapes.get(index)?;
                self.next_seed += 1;
                self.prefix.clear();
                self.prefix.push(value);
                if let Some(partition) = self.enter(value, index) {
                    return Some(partition);
                }
                continue;
            };

            let num_gpus = self.num_gpus;
            let candidate = self
                .shapes
                .get(frame.cursor)
                .copied()
                .filter(|&value| frame.sum + value <= num_gpus);

            match candidate {
                Some(value) => {
                    let index = frame.cursor;
                    let sum = frame.sum + value;
                    frame.cursor += 1;
                    self.prefix.push(value);
                    if let Some(partition) = self.enter(sum, index) {
                        return Some(partition);
                    }
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }
}

impl FusedIterator for Partitions<'_> {}
