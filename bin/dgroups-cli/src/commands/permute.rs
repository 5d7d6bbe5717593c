// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dgroups permute` command: show how one partition is grouped and
//! every ordering of its units.

use device_groups::{flatten, group_units, permute, SearchConfig};

use super::format_sizes;

pub fn execute(
    config: SearchConfig,
    partition: Vec<usize>,
    max_permute_len: Option<usize>,
) -> anyhow::Result<()> {
    let max_permute_len = max_permute_len.unwrap_or(config.max_permute_len);

    let units = group_units(&partition, max_permute_len);
    let rendered: Vec<String> = units.iter().map(|u| u.to_string()).collect();
    println!(
        "{} -> {} units: {}",
        format_sizes(&partition),
        units.len(),
        rendered.join(" "),
    );

    for sequence in permute(&partition, max_permute_len) {
        let rendered: Vec<String> = sequence.iter().map(|u| u.to_string()).collect();
        println!("  {:<32} {}", rendered.join(" "), format_sizes(&flatten(&sequence)));
    }
    Ok(())
}
