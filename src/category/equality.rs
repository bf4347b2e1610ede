// Copyright 2025 Cowboy AI, LLC.

//! Equality strategies for comparing parallel morphisms
//!
//! Commutativity and naturality checks reduce to "are these two composites
//! the same morphism?". Structurally distinct composites are never
//! identical, so the question is delegated to a [`MorphismEquality`].

use serde_json::Value;

use super::morphism::Morphism;

/// Decides whether two morphisms count as equal
pub trait MorphismEquality: Send + Sync {
    /// Compare two morphisms
    fn equivalent(&self, left: &Morphism, right: &Morphism) -> bool;

    /// Short name for reports
    fn name(&self) -> &str;
}

/// Morphisms are equal when their `(source, target)` pairs match
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointEquality;

impl MorphismEquality for EndpointEquality {
    fn equivalent(&self, left: &Morphism, right: &Morphism) -> bool {
        left.endpoints() == right.endpoints()
    }

    fn name(&self) -> &str {
        "endpoints"
    }
}

/// Morphisms are equal when their endpoints match and their denotations
/// agree on every sample value
///
/// If either side has no denotation, only endpoints are compared.
#[derive(Debug, Clone, Default)]
pub struct SampledEquality {
    samples: Vec<Value>,
}

impl SampledEquality {
    /// Create a strategy probing the given sample domain
    pub fn new(samples: Vec<Value>) -> Self {
        Self { samples }
    }

    /// Sample values in use
    pub fn samples(&self) -> &[Value] {
        &self.samples
    }
}

impl MorphismEquality for SampledEquality {
    fn equivalent(&self, left: &Morphism, right: &Morphism) -> bool {
        if left.endpoints() != right.endpoints() {
            return false;
        }
        match (&left.data, &right.data) {
            (Some(l), Some(r)) => self
                .samples
                .iter()
                .all(|sample| l.apply(sample.clone()) == r.apply(sample.clone())),
            _ => true,
        }
    }

    fn name(&self) -> &str {
        "sampled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn int_map(id: &str, f: fn(i64) -> i64) -> Morphism {
        Morphism::new(id, "Z", "Z", id).with_data(move |v| json!(f(v.as_i64().unwrap_or(0))))
    }

    #[test]
    fn test_endpoint_equality_ignores_denotation() {
        let a = int_map("neg", |x| -x);
        let b = int_map("id", |x| x);
        assert!(EndpointEquality.equivalent(&a, &b));

        let c = Morphism::new("c", "Z", "Q", "c");
        assert!(!EndpointEquality.equivalent(&a, &c));
    }

    #[test]
    fn test_sampled_equality_detects_different_functions() {
        let strategy = SampledEquality::new(vec![json!(0), json!(1), json!(-3)]);
        let neg = int_map("neg", |x| -x);
        let also_neg = int_map("neg2", |x| 0 - x);
        let ident = int_map("id", |x| x);

        assert!(strategy.equivalent(&neg, &also_neg));
        assert!(!strategy.equivalent(&neg, &ident));
        assert_eq!(strategy.name(), "sampled");
    }

    #[test]
    fn test_sampled_equality_falls_back_to_endpoints() {
        let strategy = SampledEquality::new(vec![json!(2)]);
        let plain = Morphism::new("p", "Z", "Z", "p");
        let neg = int_map("neg", |x| -x);
        assert!(strategy.equivalent(&plain, &neg));
    }
}
