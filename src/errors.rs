// Copyright 2025 Cowboy AI, LLC.

//! Error types for category construction and composition
//!
//! Only structural failures live here. Axiom and naturality violations are
//! not errors: they are collected into a
//! [`VerificationReport`](crate::category::VerificationReport).

use thiserror::Error;

/// Which endpoint of a morphism referenced an unregistered object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    /// The morphism's domain
    Source,
    /// The morphism's codomain
    Target,
}

impl std::fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndpointRole::Source => write!(f, "source"),
            EndpointRole::Target => write!(f, "target"),
        }
    }
}

/// Errors that can occur while building or composing within a category
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryError {
    /// An object with this id is already registered
    #[error("Duplicate object: {0}")]
    DuplicateObject(String),

    /// A morphism with this id is already registered
    #[error("Duplicate morphism: {0}")]
    DuplicateMorphism(String),

    /// A morphism endpoint references an object that was never added
    #[error("Unknown {role} object {object} for morphism {morphism}")]
    UnknownObject {
        /// Morphism being registered
        morphism: String,
        /// Which endpoint was unresolved
        role: EndpointRole,
        /// The missing object id
        object: String,
    },

    /// A morphism id could not be resolved
    #[error("Unknown morphism: {0}")]
    UnknownMorphism(String),

    /// `first.target != second.source`
    #[error("Cannot compose {first} then {second}: target {first_target} != source {second_source}")]
    NotComposable {
        /// Morphism applied first
        first: String,
        /// Morphism applied second
        second: String,
        /// Codomain of the first morphism
        first_target: String,
        /// Domain of the second morphism
        second_source: String,
    },

    /// Two functors do not act between the same pair of categories
    #[error("Incompatible functors {left} and {right}: {reason}")]
    IncompatibleFunctors {
        /// First functor name
        left: String,
        /// Second functor name
        right: String,
        /// Which categories disagree
        reason: String,
    },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for category operations
pub type CategoryResult<T> = Result<T, CategoryError>;

impl From<serde_json::Error> for CategoryError {
    fn from(err: serde_json::Error) -> Self {
        CategoryError::InvalidConfiguration(err.to_string())
    }
}

impl CategoryError {
    /// Check if this error was raised while registering objects or morphisms
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            CategoryError::DuplicateObject(_)
                | CategoryError::DuplicateMorphism(_)
                | CategoryError::UnknownObject { .. }
        )
    }

    /// Check if this error was raised by composition
    pub fn is_composition_error(&self) -> bool {
        matches!(
            self,
            CategoryError::NotComposable { .. } | CategoryError::UnknownMorphism(_)
        )
    }
}
