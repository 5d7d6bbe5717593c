// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dgroups partitions` command: print the raw DFS partitions.
//!
//! Partitions come out non-decreasing; their orderings are what
//! `dgroups permute` and `dgroups search` add on top.

use super::{format_sizes, resolve_shapes};

pub fn execute(stages: usize, gpus: usize, shapes: Option<Vec<usize>>) -> anyhow::Result<()> {
    if stages == 0 || gpus == 0 {
        anyhow::bail!("--stages and --gpus must be at least 1");
    }
    let shapes = resolve_shapes(gpus, shapes)?;

    let mut count = 0;
    for partition in device_groups::enumerate_partitions(stages, gpus, &shapes) {
        println!("{}", format_sizes(&partition));
        count += 1;
    }
    tracing::info!(
        "{count} partitions of {gpus} GPUs into {stages} stages over {}",
        format_sizes(&shapes),
    );
    Ok(())
}
