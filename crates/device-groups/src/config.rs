// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Search configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! variance = 0.5
//! max_permute_len = 4
//! ```
//!
//! Missing keys fall back to [`SearchConfig::default`].

use crate::search::{filter_shapes, min_group_stage, search_space};
use crate::{SearchError, SearchSpace};
use std::path::Path;

/// Knobs that bound the size of the generated search space.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Scales the even-split lower bound on devices per stage. `0`
    /// disables the filter; smaller values widen the search.
    pub variance: f64,
    /// Upper bound on the number of units a partition is permuted over.
    pub max_permute_len: usize,
}

impl SearchConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SearchError> {
        let content = std::fs::read_to_string(path).map_err(|source| SearchError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SearchError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| SearchError::InvalidConfig(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, SearchError> {
        toml::to_string_pretty(self)
            .map_err(|e| SearchError::InvalidConfig(format!("TOML serialise error: {e}")))
    }

    /// Checks that `variance` is finite and non-negative and that
    /// `max_permute_len` is at least 1.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.variance.is_finite() || self.variance < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "variance must be a non-negative number, got {}",
                self.variance
            )));
        }
        if self.max_permute_len == 0 {
            return Err(SearchError::InvalidConfig(
                "max_permute_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Per-stage device lower bound under this config's variance.
    pub fn min_group_stage(&self, num_stages: usize, num_gpus: usize) -> f64 {
        min_group_stage(num_stages, num_gpus, self.variance)
    }

    /// Applies the variance filter to a vocabulary.
    pub fn filter_shapes(&self, num_stages: usize, num_gpus: usize, shapes: &[usize]) -> Vec<usize> {
        filter_shapes(shapes, self.min_group_stage(num_stages, num_gpus))
    }

    /// Validates the config, then runs the full search.
    pub fn search(
        &self,
        num_stages: usize,
        num_gpus: usize,
        group_shapes: &[usize],
    ) -> Result<SearchSpace, SearchError> {
        self.validate()?;
        Ok(search_space(
            num_stages,
            num_gpus,
            group_shapes,
            self.variance,
            self.max_permute_len,
        ))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            variance: 0.5,
            max_permute_len: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = SearchConfig::default();
        assert_eq!(c.variance, 0.5);
        assert_eq!(c.max_permute_len, 4);
        c.validate().unwrap();
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
variance = 0.25
max_permute_len = 6
"#;
        let c = SearchConfig::from_toml(toml).unwrap();
        assert_eq!(c.variance, 0.25);
        assert_eq!(c.max_permute_len, 6);
    }

    #[test]
    fn test_from_toml_missing_keys_use_defaults() {
        let c = SearchConfig::from_toml("max_permute_len = 3").unwrap();
        assert_eq!(c.variance, 0.5);
        assert_eq!(c.max_permute_len, 3);

        assert_eq!(SearchConfig::from_toml("").unwrap(), SearchConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(
            SearchConfig::from_toml("variance = -1.0"),
            Err(SearchError::InvalidConfig(_))
        ));
        assert!(matches!(
            SearchConfig::from_toml("max_permute_len = 0"),
            Err(SearchError::InvalidConfig(_))
        ));
        assert!(SearchConfig::from_toml("variance = \"wide\"").is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let c = SearchConfig {
            variance: f64::NAN,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = SearchConfig {
            variance: 0.0,
            max_permute_len: 5,
        };
        let back = SearchConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("dgroups-config-{}.toml", std::process::id()));
        std::fs::write(&path, "variance = 1.0\nmax_permute_len = 2\n").unwrap();
        let c = SearchConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(c.variance, 1.0);
        assert_eq!(c.max_permute_len, 2);
    }

    #[test]
    fn test_from_missing_file() {
        let err = SearchConfig::from_file(Path::new("/nonexistent/dgroups.toml")).unwrap_err();
        assert!(matches!(err, SearchError::ConfigIo { .. }));
        assert!(err.to_string().contains("/nonexistent/dgroups.toml"));
    }

    #[test]
    fn test_filter_shapes() {
        let c = SearchConfig::default();
        // Even split of 32 over 4 stages is 8; half of that is 4.
        assert_eq!(c.min_group_stage(4, 32), 4.0);
        assert_eq!(c.filter_shapes(4, 32, &[1, 2, 4, 8, 16, 32]), vec![4, 8, 16, 32]);
    }

    #[test]
    fn test_search() {
        let space = SearchConfig::default().search(4, 32, &[1, 2, 4, 8, 16, 32]).unwrap();
        assert!(!space.is_empty());
        assert_eq!(space.shapes, vec![4, 8, 16, 32]);
        space.validate().unwrap();
    }

    #[test]
    fn test_search_rejects_invalid_config() {
        let c = SearchConfig {
            max_permute_len: 0,
            ..Default::default()
        };
        assert!(c.search(4, 8, &[1, 2, 4, 8]).is_err());
    }
}
