// Copyright 2025 Cowboy AI, LLC.

//! Morphisms between objects of a finite category
//!
//! A morphism is an arrow with explicit endpoints. It may optionally carry a
//! concrete denotation (a unary function on JSON values) used only for
//! illustrative evaluation; axiom verification never looks at it unless a
//! sampling equality strategy is selected.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

type DenotationFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Concrete function a morphism denotes
#[derive(Clone)]
pub struct Denotation {
    function: DenotationFn,
}

impl Denotation {
    /// Wrap a unary function
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// The identity map
    pub fn identity() -> Self {
        Self::new(|value| value)
    }

    /// Apply the function to a value
    pub fn apply(&self, value: Value) -> Value {
        (self.function)(value)
    }

    /// Function composition: `next` applied to the result of `self`
    pub fn then(&self, next: &Denotation) -> Denotation {
        let first = Arc::clone(&self.function);
        let second = Arc::clone(&next.function);
        Denotation {
            function: Arc::new(move |value| second(first(value))),
        }
    }
}

impl fmt::Debug for Denotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Denotation(<fn>)")
    }
}

/// How a morphism came to exist in its category
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MorphismKind {
    /// Supplied by the client
    #[default]
    Basic,

    /// Synthesized when its object was registered
    Identity,

    /// Produced by composition; `first` is applied before `second`
    Composed {
        /// Morphism applied first
        first: String,
        /// Morphism applied second
        second: String,
    },

    /// Reversed copy of a morphism from the opposite category
    Dual {
        /// Id of the morphism this one reverses
        original_id: String,
        /// Label of the morphism this one reverses
        original_label: String,
    },
}

/// A morphism in a finite category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Morphism {
    /// Unique identifier within the owning category
    pub id: String,

    /// Source object id
    pub source: String,

    /// Target object id
    pub target: String,

    /// Display name
    pub label: String,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    /// Origin of the morphism
    #[serde(default)]
    pub kind: MorphismKind,

    /// Optional concrete function, never serialized
    #[serde(skip)]
    pub data: Option<Denotation>,
}

impl Morphism {
    /// Create a basic morphism `source -> target`
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: label.into(),
            definition: None,
            kind: MorphismKind::Basic,
            data: None,
        }
    }

    /// Attach a description
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Attach a concrete function
    pub fn with_data<F>(mut self, function: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.data = Some(Denotation::new(function));
        self
    }

    /// Whether this is an identity morphism
    pub fn is_identity(&self) -> bool {
        self.kind == MorphismKind::Identity
    }

    /// Whether this morphism was produced by composition
    pub fn is_composed(&self) -> bool {
        matches!(self.kind, MorphismKind::Composed { .. })
    }

    /// Components `[first, second]` of a composed morphism
    pub fn components(&self) -> Option<(&str, &str)> {
        match &self.kind {
            MorphismKind::Composed { first, second } => Some((first.as_str(), second.as_str())),
            _ => None,
        }
    }

    /// Whether `next` can follow this morphism
    pub fn composable_with(&self, next: &Morphism) -> bool {
        self.target == next.source
    }

    /// `(source, target)` pair
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.source, &self.target)
    }

    /// Evaluate the denotation, if any
    pub fn apply(&self, value: Value) -> Option<Value> {
        self.data.as_ref().map(|d| d.apply(value))
    }

    pub(crate) fn identity_for(object_id: &str, object_label: &str) -> Self {
        Self {
            id: identity_id(object_id),
            source: object_id.to_string(),
            target: object_id.to_string(),
            label: format!("id_{}", object_label),
            definition: None,
            kind: MorphismKind::Identity,
            data: Some(Denotation::identity()),
        }
    }

    /// `second ∘ first`, with no check that the endpoints line up
    pub(crate) fn composite(first: &Morphism, second: &Morphism) -> Self {
        let data = match (&first.data, &second.data) {
            (Some(f), Some(g)) => Some(f.then(g)),
            _ => None,
        };
        Self {
            id: composite_id(first, second),
            source: first.source.clone(),
            target: second.target.clone(),
            label: format!("{}∘{}", second.label, first.label),
            definition: None,
            kind: MorphismKind::Composed {
                first: first.id.clone(),
                second: second.id.clone(),
            },
            data,
        }
    }
}

impl fmt::Display for Morphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.label, self.source, self.target)
    }
}

/// Id of the identity morphism of an object
pub fn identity_id(object_id: &str) -> String {
    format!("id_{}", object_id)
}

/// Deterministic id of `second ∘ first`
///
/// Composed operands are parenthesized, so `(k∘g)∘f` and `k∘(g∘f)` get
/// distinct ids.
pub fn composite_id(first: &Morphism, second: &Morphism) -> String {
    format!("{}∘{}", operand_id(second), operand_id(first))
}

fn operand_id(morphism: &Morphism) -> String {
    if morphism.is_composed() {
        format!("({})", morphism.id)
    } else {
        morphism.id.clone()
    }
}

/// Pure predicate: `f.target == g.source`
pub fn composable(f: &Morphism, g: &Morphism) -> bool {
    f.composable_with(g)
}
