//! Finite category theory for interactive diagrams
//!
//! This module provides explicitly presented categories, functors between
//! them and natural transformations between functors, together with the
//! checks that tell whether a hand-built structure actually satisfies the
//! axioms. Structural mistakes (unknown ids, mismatched endpoints) fail
//! fast; axiom violations are reported as data.

pub mod diagram;
pub mod equality;
pub mod finite_category;
pub mod functor;
pub mod morphism;
pub mod natural_transformation;
pub mod object;
pub mod report;

pub use diagram::{
    category_from_graph, composable, discrete_category, find_default_paths, find_paths,
    find_paths_with, opposite_category, paths_commute,
};
pub use equality::{EndpointEquality, MorphismEquality, SampledEquality};
pub use finite_category::{Category, CategoryDefinition};
pub use functor::Functor;
pub use morphism::{Denotation, Morphism, MorphismKind};
pub use natural_transformation::NaturalTransformation;
pub use object::MathObject;
pub use report::VerificationReport;
