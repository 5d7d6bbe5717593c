// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dgroups shapes` command: print the device-count vocabulary.

use super::format_sizes;

pub fn execute(gpus: usize) -> anyhow::Result<()> {
    if gpus == 0 {
        anyhow::bail!("--gpus must be at least 1");
    }
    println!("{}", format_sizes(&device_groups::device_group_shapes(gpus)));
    Ok(())
}
