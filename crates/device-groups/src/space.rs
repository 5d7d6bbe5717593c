// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The search space: the output of one orchestrated search.
//!
//! A [`SearchSpace`] holds every emitted device group in discovery order,
//! together with the parameters that produced it. It is the contract
//! between this crate and the planner that scores candidates.

use crate::SearchError;
use std::collections::HashSet;

/// Ordered collection of candidate per-stage device counts.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchSpace {
    /// Number of pipeline stages each device group covers.
    pub num_stages: usize,
    /// Size of the device pool being partitioned.
    pub num_gpus: usize,
    /// Vocabulary left after the variance filter.
    pub shapes: Vec<usize>,
    /// Number of partitions the DFS produced.
    pub num_partitions: usize,
    /// Every emitted device group, in discovery order.
    pub device_groups: Vec<Vec<usize>>,
}

impl SearchSpace {
    /// Returns the number of device groups.
    pub fn len(&self) -> usize {
        self.device_groups.len()
    }

    /// Returns `true` if no candidate was produced.
    pub fn is_empty(&self) -> bool {
        self.device_groups.is_empty()
    }

    /// Number of distinct device groups.
    ///
    /// Permuting equal units yields repeated sequences, so this is
    /// usually smaller than [`Self::len`].
    pub fn distinct_count(&self) -> usize {
        self.device_groups
            .iter()
            .map(Vec::as_slice)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Consumes the space and returns the device groups.
    pub fn into_device_groups(self) -> Vec<Vec<usize>> {
        self.device_groups
    }

    /// Validates every device group.
    ///
    /// Checks:
    /// - Each group has exactly `num_stages` entries.
    /// - Each entry is one of `shapes`.
    /// - Each group sums to `num_gpus`.
    ///
    /// An empty space is valid.
    pub fn validate(&self) -> Result<(), SearchError> {
        for (index, group) in self.device_groups.iter().enumerate() {
            if group.len() != self.num_stages {
                return Err(SearchError::InvalidDeviceGroup {
                    index,
                    detail: format!("expected {} stages, got {}", self.num_stages, group.len()),
                });
            }

            if let Some(bad) = group.iter().find(|&&s| !self.shapes.contains(&s)) {
                return Err(SearchError::InvalidDeviceGroup {
                    index,
                    detail: format!("stage size {bad} is not in {:?}", self.shapes),
                });
            }

            let total: usize = group.iter().sum();
            if total != self.num_gpus {
                return Err(SearchError::InvalidDeviceGroup {
                    index,
                    detail: format!("sums to {total}, expected {}", self.num_gpus),
                });
            }
        }
        Ok(())
    }

    /// Returns a human-readable summary of the space.
    pub fn summary(&self) -> String {
        format!(
            "Search space: {} device groups ({} distinct) from {} partitions, \
             {} stages over {} GPUs, shapes {:?}",
            self.len(),
            self.distinct_count(),
            self.num_partitions,
            self.num_stages,
            self.num_gpus,
            self.shapes,
        )
    }
}

/// Builder helper for collecting a `SearchSpace` partition by partition.
pub(crate) struct SearchSpaceBuilder {
    num_stages: usize,
    num_gpus: usize,
    shapes: Vec<usize>,
    num_partitions: usize,
    device_groups: Vec<Vec<usize>>,
}

impl SearchSpaceBuilder {
    pub fn new(num_stages: usize, num_gpus: usize, shapes: Vec<usize>) -> Self {
        Self {
            num_stages,
            num_gpus,
            shapes,
            num_partitions: 0,
            device_groups: Vec::new(),
        }
    }

    /// Records one partition and appends all of its expanded orderings.
    pub fn add_partition(&mut self, groups: impl IntoIterator<Item = Vec<usize>>) {
        self.num_partitions += 1;
        self.device_groups.extend(groups);
    }

    pub fn build(self) -> SearchSpace {
        SearchSpace {
            num_stages: self.num_stages,
            num_gpus: self.num_gpus,
            shapes: self.shapes,
            num_partitions: self.num_partitions,
            device_groups: self.device_groups,
        }
    }
}
