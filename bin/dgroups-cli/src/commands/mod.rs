// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI helpers.

pub mod partitions;
pub mod permute;
pub mod search;
pub mod shapes;

use device_groups::SearchConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// How `dgroups search` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` counts map to
/// warn / info / debug / trace.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the TOML config if one was given, else the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SearchConfig> {
    match path {
        Some(p) => {
            let config = SearchConfig::from_file(p)?;
            tracing::info!("loaded config from '{}'", p.display());
            Ok(config)
        }
        None => Ok(SearchConfig::default()),
    }
}

/// Falls back to the power-of-two vocabulary when no shapes were given.
pub fn resolve_shapes(gpus: usize, shapes: Option<Vec<usize>>) -> anyhow::Result<Vec<usize>> {
    let Some(mut shapes) = shapes else {
        return Ok(device_groups::device_group_shapes(gpus));
    };
    shapes.sort_unstable();
    shapes.dedup();
    if shapes.first() == Some(&0) {
        anyhow::bail!("group shapes must be positive");
    }
    Ok(shapes)
}

/// Formats a stage-size list as `[a, b, c]`.
pub fn format_sizes(sizes: &[usize]) -> String {
    let parts: Vec<String> = sizes.iter().map(|s| s.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_shapes_default() {
        assert_eq!(resolve_shapes(8, None).unwrap(), vec![1, 2, 4, 8]);
    }

    #[test]
    fn test_resolve_shapes_sorts_and_dedups() {
        assert_eq!(resolve_shapes(8, Some(vec![4, 1, 4, 2])).unwrap(), vec![1, 2, 4]);
    }

    #[test]
    fn test_resolve_shapes_rejects_zero() {
        assert!(resolve_shapes(8, Some(vec![0, 2])).is_err());
    }

    #[test]
    fn test_format_sizes() {
        assert_eq!(format_sizes(&[1, 1, 2]), "[1, 1, 2]");
        assert_eq!(format_sizes(&[]), "[]");
    }

    #[test]
    fn test_load_config_default() {
        assert_eq!(load_config(None).unwrap(), SearchConfig::default());
    }
}
