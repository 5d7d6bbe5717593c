// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # device-groups
//!
//! Generates the candidate ways to split a pool of accelerators into an
//! ordered sequence of pipeline stages. A downstream planner scores the
//! candidates; this crate only enumerates them.
//!
//! # Pipeline
//!
//! | Step | Item | Produces |
//! |---|---|---|
//! | Vocabulary | [`device_group_shapes`] | `[1, 2, 4, ...]` up to the pool size |
//! | Partitions | [`enumerate_partitions`] | non-decreasing stage sizes summing to the pool |
//! | Grouping | [`group_units`] | equal leading stages fused into [`Unit`]s |
//! | Expansion | [`permute`], [`expand_units`] | every ordering of the units, flattened |
//! | Orchestration | [`device_groups_with_variance`], [`SearchConfig::search`] | the full candidate list |
//!
//! The enumeration is single-threaded and lazy: [`Partitions`] and
//! [`Permutations`] are plain iterators, so callers can stop consuming
//! at any point. Only the orchestrator materialises its output.
//!
//! # Failure model
//!
//! Infeasible inputs yield empty results, never errors. Counts must be
//! positive and vocabularies sorted ascending without duplicates; these
//! are caller contracts and are not checked. Only [`SearchConfig`]
//! validation and [`SearchSpace::validate`] return [`SearchError`].
//!
//! # Example
//! ```
//! use device_groups::{device_group_shapes, SearchConfig};
//!
//! let shapes = device_group_shapes(8);
//! let config = SearchConfig { variance: 0.0, max_permute_len: 4 };
//! let space = config.search(4, 8, &shapes).unwrap();
//! assert_eq!(space.len(), 48);
//! assert!(space.device_groups.iter().all(|g| g.iter().sum::<usize>() == 8));
//! ```

mod config;
mod error;
mod partition;
mod permute;
mod search;
mod shapes;
mod space;
mod unit;

pub use config::SearchConfig;
pub use error::SearchError;
pub use partition::{enumerate_partitions, Partitions};
pub use permute::{expand_units, flatten, permute, Permutations, UnitPermutations};
pub use search::{device_groups_with_variance, filter_shapes, min_group_stage};
pub use shapes::device_group_shapes;
pub use space::SearchSpace;
pub use unit::{group_units, Unit};
