//! Query configuration.
//!
//! Paging defaults are read from YAML. Missing keys take their defaults:
//!
//! ```yaml
//! default_page_size: 20
//! max_page_size: 2000
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CriteriaError, Result};

/// Paging limits applied when binding query parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Page size used when the request gives none.
    pub default_page_size: usize,
    /// Requested sizes above this are clamped down to it.
    pub max_page_size: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            default_page_size: 20,
            max_page_size: 2000,
        }
    }
}

impl QueryConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: QueryConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(CriteriaError::InvalidPageSize {
                default: self.default_page_size,
                max: self.max_page_size,
            });
        }
        Ok(())
    }

    /// Resolves a requested page size against the configured limits.
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        match requested {
            None | Some(0) => self.default_page_size,
            Some(size) => size.min(self.max_page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = QueryConfig::from_yaml_str("max_page_size: 100\n").unwrap();
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.max_page_size, 100);

        let config = QueryConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, QueryConfig::default());
    }

    #[test]
    fn rejects_default_above_max() {
        let err = QueryConfig::from_yaml_str("default_page_size: 50\nmax_page_size: 10\n")
            .unwrap_err();
        assert!(matches!(
            err,
            CriteriaError::InvalidPageSize {
                default: 50,
                max: 10
            }
        ));
    }

    #[test]
    fn rejects_zero_default() {
        assert!(QueryConfig::from_yaml_str("default_page_size: 0").is_err());
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let err = QueryConfig::from_yaml_str("default_page_size: [").unwrap_err();
        assert!(matches!(err, CriteriaError::Config(_)));
    }

    #[test]
    fn page_size_defaults_and_clamps() {
        let config = QueryConfig::default();
        assert_eq!(config.page_size(None), 20);
        assert_eq!(config.page_size(Some(0)), 20);
        assert_eq!(config.page_size(Some(50)), 50);
        assert_eq!(config.page_size(Some(5000)), 2000);
    }
}
