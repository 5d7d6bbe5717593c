// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the device-group search.

use std::path::PathBuf;

/// Errors surfaced by the configuration and validation layers.
///
/// The enumeration routines themselves never fail: infeasible inputs
/// produce an empty search space instead.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A configuration value is out of range or could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("cannot read config '{}': {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An emitted device group breaks the length/sum/vocabulary invariants.
    #[error("device group {index} is invalid: {detail}")]
    InvalidDeviceGroup { index: usize, detail: String },
}
