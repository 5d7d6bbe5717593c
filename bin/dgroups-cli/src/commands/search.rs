// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `dgroups search` command: run the full search and print candidates.

use device_groups::SearchConfig;

use super::{format_sizes, resolve_shapes, OutputFormat};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    mut config: SearchConfig,
    stages: usize,
    gpus: usize,
    shapes: Option<Vec<usize>>,
    variance: Option<f64>,
    max_permute_len: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if stages == 0 || gpus == 0 {
        anyhow::bail!("--stages and --gpus must be at least 1");
    }
    if let Some(v) = variance {
        config.variance = v;
    }
    if let Some(k) = max_permute_len {
        config.max_permute_len = k;
    }
    let shapes = resolve_shapes(gpus, shapes)?;

    let space = config.search(stages, gpus, &shapes)?;
    space.validate()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&space)?);
        }
        OutputFormat::Text => {
            println!("{}", space.summary());
            if space.is_empty() {
                tracing::warn!("no candidates: try a smaller --variance");
            }
            for group in &space.device_groups {
                println!("  {}", format_sizes(group));
            }
        }
    }
    Ok(())
}
