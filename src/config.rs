// Copyright 2025 Cowboy AI, LLC.

//! Verification configuration
//!
//! Controls which optional checks run and how parallel morphisms are
//! compared. Hosts usually embed this in their own settings and load it
//! from JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::equality::{EndpointEquality, MorphismEquality, SampledEquality};
use crate::errors::CategoryResult;

/// Default bound on path length for diagram path enumeration
pub const DEFAULT_MAX_PATH_LENGTH: usize = 5;

/// Which notion of morphism equality verification uses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum EqualityStrategy {
    /// Compare `(source, target)` only
    #[default]
    Endpoints,
    /// Also compare denotations over a finite sample domain
    Sampled {
        /// Values each denotation is evaluated on
        samples: Vec<Value>,
    },
}

impl EqualityStrategy {
    /// Build the strategy object
    pub fn build(&self) -> Box<dyn MorphismEquality> {
        match self {
            EqualityStrategy::Endpoints => Box::new(EndpointEquality),
            EqualityStrategy::Sampled { samples } => Box::new(SampledEquality::new(samples.clone())),
        }
    }
}

/// Verification settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VerificationConfig {
    /// Maximum number of edges in an enumerated path
    pub max_path_length: usize,
    /// Equality used for commutativity and naturality
    pub equality: EqualityStrategy,
    /// Also check `F(g∘f) = F(g)∘F(f)` when verifying functors
    pub check_functor_composition: bool,
    /// Also check associativity when verifying categories
    pub check_associativity: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            equality: EqualityStrategy::Endpoints,
            check_functor_composition: false,
            check_associativity: false,
        }
    }
}

impl VerificationConfig {
    /// Parse a configuration from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> CategoryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Enable every optional check
    pub fn strict() -> Self {
        Self {
            check_functor_composition: true,
            check_associativity: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CategoryError;

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.max_path_length, 5);
        assert_eq!(config.equality, EqualityStrategy::Endpoints);
        assert!(!config.check_functor_composition);
        assert_eq!(config.equality.build().name(), "endpoints");
    }

    #[test]
    fn test_partial_json() {
        let config = VerificationConfig::from_json(
            r#"{"max_path_length": 3, "equality": {"strategy": "sampled", "samples": [0, 1]}}"#,
        )
        .unwrap();
        assert_eq!(config.max_path_length, 3);
        assert!(!config.check_associativity);
        assert_eq!(config.equality.build().name(), "sampled");
    }

    #[test]
    fn test_invalid_json() {
        let err = VerificationConfig::from_json(r#"{"max_path_length": "five"}"#).unwrap_err();
        assert!(matches!(err, CategoryError::InvalidConfiguration(_)));
    }
}
