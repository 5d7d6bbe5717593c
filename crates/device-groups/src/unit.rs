// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Grouping of stage sizes into permutation units.
//!
//! The number of orderings of a partition grows factorially with its
//! length. Stages with identical device counts are interchangeable, so
//! runs of equal minimal stages can be fused into composite [`Unit`]s
//! that move as one block when the partition is permuted. This keeps
//! the permutation domain at or near `max_permute_len` units.
//!
//! # Merge policy
//!
//! ```text
//! units = one unit per stage
//! while len(units) > max_permute_len:
//!     run    = number of leading units equal to units[0]
//!     merges = min(len(units) - max_permute_len, run / 2)
//!     fuse the first `merges` adjacent pairs
//!     stop if the list did not shrink
//! ```
//!
//! Units are compared by content, so `(1,1)` never merges with `(2)`.
//! When the leading run is used up before the target is reached the
//! result stays above `max_permute_len`.

use std::fmt;

/// A block of one or more consecutive stage sizes that is permuted as a
/// single position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Unit {
    stages: Vec<usize>,
}

impl Unit {
    /// A unit holding a single stage.
    pub fn single(devices: usize) -> Self {
        Self {
            stages: vec![devices],
        }
    }

    /// The stage sizes carried by this unit, in order.
    pub fn stages(&self) -> &[usize] {
        &self.stages
    }

    /// Number of stages in this unit.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the unit holds no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns `true` if this unit fuses more than one stage.
    pub fn is_composite(&self) -> bool {
        self.stages.len() > 1
    }

    /// Total devices across the unit's stages.
    pub fn device_count(&self) -> usize {
        self.stages.iter().sum()
    }

    fn merge(mut self, other: Unit) -> Unit {
        self.stages.extend(other.stages);
        self
    }
}

impl From<Vec<usize>> for Unit {
    fn from(stages: Vec<usize>) -> Self {
        Self { stages }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, s) in self.stages.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{s}")?;
        }
        write!(f, ")")
    }
}

/// Groups a partition into at most `max_permute_len` units where the
/// merge policy allows it.
///
/// Concatenating the returned units reproduces `partition`. If
/// `partition.len() <= max_permute_len` every stage is its own unit.
///
/// # Examples
/// ```
/// use device_groups::{group_units, Unit};
///
/// let units = group_units(&[1, 1, 2, 4], 2);
/// assert_eq!(
///     units,
///     vec![Unit::from(vec![1, 1]), Unit::single(2), Unit::single(4)],
/// );
/// ```
pub fn group_units(partition: &[usize], max_permute_len: usize) -> Vec<Unit> {
    let mut units: Vec<Unit> = partition.iter().map(|&s| Unit::single(s)).collect();
    let mut num_reduce = units.len().saturating_sub(max_permute_len);

    while num_reduce > 0 {
        let Some(head) = units.first().cloned() else {
            break;
        };
        let num_min_groups = units.iter().take_while(|u| **u == head).count();
        let merges = num_reduce.min(num_min_groups / 2);

        units = merge_leading_pairs(units, &head, merges);

        let next = units.len().saturating_sub(max_permute_len);
        if next >= num_reduce {
            break;
        }
        num_reduce = next;
    }

    if units.len() > max_permute_len {
        tracing::debug!(
            "partition {partition:?} stays at {} units (target {max_permute_len})",
            units.len(),
        );
    }
    units
}

/// Walks the first `pairs` adjacent pairs, fusing those whose members
/// both equal `head`. Everything after is kept as is.
fn merge_leading_pairs(units: Vec<Unit>, head: &Unit, pairs: usize) -> Vec<Unit> {
    let mut merged = Vec::with_capacity(units.len());
    let mut rest = units.into_iter();

    for _ in 0..pairs {
        match (rest.next(), rest.next()) {
            (Some(a), Some(b)) if a == *head && b == *head => merged.push(a.merge(b)),
            (Some(a), Some(b)) => {
                merged.push(a);
                merged.push(b);
            }
            (Some(a), None) => merged.push(a),
            (None, _) => break,
        }
    }

    merged.extend(rest);
    merged
}
