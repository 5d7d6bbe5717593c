// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # dgroups
//!
//! Command-line interface for the device-group search space.
//!
//! ## Usage
//! ```bash
//! # Legal per-stage device counts for a 32-GPU pool
//! dgroups shapes --gpus 32
//!
//! # Stage-size partitions before permutation
//! dgroups partitions --stages 4 --gpus 32
//!
//! # Orderings of one partition
//! dgroups permute --partition 1,1,2,4 --max-permute-len 2
//!
//! # Full candidate list as JSON
//! dgroups search --stages 8 --gpus 32 --variance 0.5 --format json
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dgroups",
    about = "Enumerate pipeline-stage device partitions for a GPU pool",
    version,
    author
)]
struct Cli {
    /// Path to a TOML search configuration (CLI flags take precedence).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the powers of two up to the pool size.
    Shapes {
        /// Number of GPUs in the pool.
        #[arg(short, long)]
        gpus: usize,
    },

    /// Print every stage-size partition of the pool.
    Partitions {
        /// Number of pipeline stages.
        #[arg(short, long)]
        stages: usize,

        /// Number of GPUs in the pool.
        #[arg(short, long)]
        gpus: usize,

        /// Comma-separated group shapes (defaults to powers of two).
        #[arg(long, value_delimiter = ',')]
        shapes: Option<Vec<usize>>,
    },

    /// Print every unit ordering of a single partition.
    Permute {
        /// Comma-separated stage sizes, e.g. "1,1,2,4".
        #[arg(short, long, value_delimiter = ',', required = true)]
        partition: Vec<usize>,

        /// Upper bound on the number of permuted units.
        #[arg(short = 'k', long)]
        max_permute_len: Option<usize>,
    },

    /// Run the full search and print every candidate device group.
    Search {
        /// Number of pipeline stages.
        #[arg(short, long)]
        stages: usize,

        /// Number of GPUs in the pool.
        #[arg(short, long)]
        gpus: usize,

        /// Comma-separated group shapes (defaults to powers of two).
        #[arg(long, value_delimiter = ',')]
        shapes: Option<Vec<usize>>,

        /// Scale for the per-stage lower bound (0 disables it).
        #[arg(long)]
        variance: Option<f64>,

        /// Upper bound on the number of permuted units.
        #[arg(short = 'k', long)]
        max_permute_len: Option<usize>,

        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: commands::OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Shapes { gpus } => commands::shapes::execute(gpus),
        Commands::Partitions {
            stages,
            gpus,
            shapes,
        } => commands::partitions::execute(stages, gpus, shapes),
        Commands::Permute {
            partition,
            max_permute_len,
        } => commands::permute::execute(config, partition, max_permute_len),
        Commands::Search {
            stages,
            gpus,
            shapes,
            variance,
            max_permute_len,
            format,
        } => commands::search::execute(
            config,
            stages,
            gpus,
            shapes,
            variance,
            max_permute_len,
            format,
        ),
    }
}
