// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The vocabulary of legal per-stage device counts.

/// Returns every power of two not exceeding `num_gpus`, ascending.
///
/// `num_gpus` must be at least 1; zero yields an empty vocabulary.
///
/// # Examples
/// ```
/// use device_groups::device_group_shapes;
///
/// assert_eq!(device_group_shapes(8), vec![1, 2, 4, 8]);
/// assert_eq!(device_group_shapes(6), vec![1, 2, 4]);
/// ```
pub fn device_group_shapes(num_gpus: usize) -> Vec<usize> {
    std::iter::successors(Some(1usize), |&s| s.checked_mul(2))
        .take_while(|&s| s <= num_gpus)
        .collect()
}
