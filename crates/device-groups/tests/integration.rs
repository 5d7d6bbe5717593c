// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end candidate generation.
//!
//! These tests drive the public API the way a planner would: build a
//! vocabulary, run the search, and check the candidates it gets back.

use device_groups::{
    device_group_shapes, device_groups_with_variance, enumerate_partitions, flatten,
    group_units, permute, SearchConfig, SearchError, Unit,
};
use std::collections::BTreeSet;

// ── Helpers ────────────────────────────────────────────────────

fn factorial(k: usize) -> usize {
    (1..=k).product()
}

fn assert_valid(groups: &[Vec<usize>], num_stages: usize, num_gpus: usize, shapes: &[usize]) {
    for g in groups {
        assert_eq!(g.len(), num_stages, "{g:?}");
        assert_eq!(g.iter().sum::<usize>(), num_gpus, "{g:?}");
        assert!(g.iter().all(|s| shapes.contains(s)), "{g:?}");
    }
}

// ── Scenarios ──────────────────────────────────────────────────

#[test]
fn test_vocabulary_for_eight_gpus() {
    assert_eq!(device_group_shapes(8), vec![1, 2, 4, 8]);
}

#[test]
fn test_permute_collapses_leading_ones() {
    let sequences: Vec<Vec<Unit>> = permute(&[1, 1, 2, 4], 2).collect();
    assert_eq!(sequences.len(), 6);
    assert_eq!(
        sequences[0],
        vec![Unit::from(vec![1, 1]), Unit::single(2), Unit::single(4)]
    );

    let flat: BTreeSet<Vec<usize>> = sequences.iter().map(|s| flatten(s)).collect();
    let expected: BTreeSet<Vec<usize>> = [
        vec![1, 1, 2, 4],
        vec![1, 1, 4, 2],
        vec![2, 1, 1, 4],
        vec![2, 4, 1, 1],
        vec![4, 1, 1, 2],
        vec![4, 2, 1, 1],
    ]
    .into_iter()
    .collect();
    assert_eq!(flat, expected);
}

#[test]
fn test_three_stage_partitions() {
    let shapes = [1, 2, 4, 8];
    let partitions: Vec<_> = enumerate_partitions(3, 8, &shapes).collect();
    assert!(!partitions.is_empty());
    assert_valid(&partitions, 3, 8, &shapes);
}

#[test]
fn test_four_stage_search() {
    let shapes = [1, 2, 4, 8];
    let groups = device_groups_with_variance(4, 8, &shapes, 0.0, 4);
    assert!(!groups.is_empty());
    assert_valid(&groups, 4, 8, &shapes);
}

// ── Properties ─────────────────────────────────────────────────

#[test]
fn test_expansion_count_is_factorial_of_units() {
    let shapes = device_group_shapes(16);
    for num_stages in 1..=6 {
        for p in enumerate_partitions(num_stages, 16, &shapes) {
            for max_len in 1..=num_stages {
                let k = group_units(&p, max_len).len();
                let orders: Vec<_> = permute(&p, max_len).collect();
                assert_eq!(orders.len(), factorial(k));
                assert_eq!(flatten(&orders[0]), p);
            }
        }
    }
}

#[test]
fn test_max_permute_len_one_merges_equal_runs() {
    assert_eq!(group_units(&[1, 1, 1, 1, 1, 1, 1, 1], 1).len(), 1);
    assert_eq!(group_units(&[2, 2, 2, 2, 4, 4], 1).len(), 3);
}

#[test]
fn test_larger_pool_is_consistent() {
    let shapes = device_group_shapes(32);
    let groups = device_groups_with_variance(8, 32, &shapes, 0.0, 4);
    assert_valid(&groups, 8, 32, &shapes);

    let partitions = enumerate_partitions(8, 32, &shapes).count();
    assert!(groups.len() >= partitions);
    assert!(groups.len() <= partitions * factorial(8));
}

#[test]
fn test_discovery_order_follows_partitions() {
    let shapes = [1, 2, 4, 8];
    let groups = device_groups_with_variance(4, 8, &shapes, 0.0, 4);
    let (first, second) = groups.split_at(24);
    assert!(first.iter().all(|g| g.contains(&1)));
    assert!(second.iter().all(|g| g == &vec![2, 2, 2, 2]));
}

// ── Configuration Layer ────────────────────────────────────────

#[test]
fn test_config_search_matches_free_function() {
    let shapes = device_group_shapes(16);
    let config = SearchConfig {
        variance: 0.5,
        max_permute_len: 3,
    };
    let space = config.search(4, 16, &shapes).unwrap();
    space.validate().unwrap();
    assert_eq!(
        space.device_groups,
        device_groups_with_variance(4, 16, &shapes, 0.5, 3)
    );
}

#[test]
fn test_config_rejects_negative_variance() {
    let config = SearchConfig {
        variance: -0.5,
        max_permute_len: 4,
    };
    assert!(matches!(
        config.search(4, 8, &[1, 2, 4, 8]),
        Err(SearchError::InvalidConfig(_))
    ));
}

#[test]
fn test_empty_result_is_not_an_error() {
    let config = SearchConfig {
        variance: 100.0,
        max_permute_len: 4,
    };
    let space = config.search(4, 8, &[1, 2, 4, 8]).unwrap();
    assert!(space.is_empty());
    assert!(space.shapes.is_empty());
    space.validate().unwrap();
}

#[test]
fn test_search_space_json_shape() {
    let space = SearchConfig::default().search(2, 4, &[1, 2, 4]).unwrap();
    let json = serde_json::to_value(&space).unwrap();
    assert_eq!(json["num_stages"], 2);
    assert_eq!(json["device_groups"].as_array().unwrap().len(), space.len());
}
