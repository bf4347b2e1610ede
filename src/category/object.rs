// Copyright 2025 Cowboy AI, LLC.

//! Objects of a finite category

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An object in a finite category
///
/// Identity is by `id`: two objects with the same id are the same object.
/// Objects are immutable once registered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MathObject {
    /// Unique identifier within the owning category
    pub id: String,

    /// Display name
    pub label: String,

    /// Opaque payload carried for the presentation layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl MathObject {
    /// Create an object with the given id and label
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            data: None,
            definition: None,
        }
    }

    /// Attach an opaque payload
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach a description
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }
}

impl std::fmt::Display for MathObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
