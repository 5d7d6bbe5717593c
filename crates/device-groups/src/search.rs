// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Orchestration: vocabulary filter → partition DFS → grouping →
//! permutation expansion.

use crate::partition::enumerate_partitions;
use crate::permute::expand_units;
use crate::space::{SearchSpace, SearchSpaceBuilder};
use crate::unit::group_units;

/// Soft lower bound on the devices per stage.
///
/// Takes the per-stage count of an even split, `max(num_gpus / num_stages,
/// num_stages / num_gpus)` with integer division, and scales it by
/// `variance`. A variance of `0` disables the bound.
pub fn min_group_stage(num_stages: usize, num_gpus: usize, variance: f64) -> f64 {
    let even = num_gpus
        .checked_div(num_stages)
        .unwrap_or(0)
        .max(num_stages.checked_div(num_gpus).unwrap_or(0));
    even as f64 * variance
}

/// Keeps the shapes that are at least `min_group_stage`, preserving order.
pub fn filter_shapes(shapes: &[usize], min_group_stage: f64) -> Vec<usize> {
    shapes
        .iter()
        .copied()
        .filter(|&s| s as f64 >= min_group_stage)
        .collect()
}

/// Runs the full search and returns every device group in discovery
/// order.
///
/// Infeasible inputs, including a variance that filters out every
/// shape, produce an empty list.
///
/// # Examples
/// ```
/// use device_groups::device_groups_with_variance;
///
/// let groups = device_groups_with_variance(3, 8, &[1, 2, 4, 8], 0.0, 3);
/// assert_eq!(groups, vec![
///     vec![2, 2, 4], vec![2, 4, 2], vec![2, 2, 4],
///     vec![2, 4, 2], vec![4, 2, 2], vec![4, 2, 2],
/// ]);
/// ```
pub fn device_groups_with_variance(
    num_stages: usize,
    num_gpus: usize,
    group_shapes: &[usize],
    variance: f64,
    max_permute_len: usize,
) -> Vec<Vec<usize>> {
    search_space(num_stages, num_gpus, group_shapes, variance, max_permute_len)
        .into_device_groups()
}

pub(crate) fn search_space(
    num_stages: usize,
    num_gpus: usize,
    group_shapes: &[usize],
    variance: f64,
    max_permute_len: usize,
) -> SearchSpace {
    let min_stage = min_group_stage(num_stages, num_gpus, variance);
    let shapes = filter_shapes(group_shapes, min_stage);
    if shapes.is_empty() {
        tracing::warn!(
            "no group shape reaches the per-stage minimum of {min_stage:.2}; search space is empty"
        );
    }

    let mut builder = SearchSpaceBuilder::new(num_stages, num_gpus, shapes.clone());
    for partition in enumerate_partitions(num_stages, num_gpus, &shapes) {
        let units = group_units(&partition, max_permute_len);
        tracing::debug!("partition {partition:?} → {} units", units.len());
        builder.add_partition(expand_units(units));
    }

    let space = builder.build();
    tracing::info!("{}", space.summary());
    space
}
