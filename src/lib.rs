//! # CIM Category
//!
//! Finite, explicitly presented categories for driving interactive diagrams.
//!
//! This crate provides the algebraic substrate behind category-theory
//! lessons:
//! - **Category**: objects, morphisms, automatic identities and memoized composition
//! - **Functor**: explicit object and morphism maps between two categories
//! - **Natural Transformation**: components between two parallel functors
//! - **Diagrams**: opposite categories, path enumeration, commutativity checks
//! - **Verification**: axiom checks that report violations instead of failing
//!
//! ## Design Principles
//!
//! 1. **Append-only**: objects and morphisms are never removed, so ids stay valid
//! 2. **Fail fast on structure**: unknown ids and endpoint mismatches are errors
//! 3. **Report on semantics**: axiom and naturality violations are data
//! 4. **Pluggable equality**: endpoint comparison by default, sampled
//!    denotations when stricter checks are wanted
//!
//! ## Example
//!
//! ```
//! use cim_category::{Category, MathObject, Morphism};
//!
//! let category = Category::with_contents(
//!     "Set-toy",
//!     [MathObject::new("A", "A"), MathObject::new("B", "B"), MathObject::new("C", "C")],
//!     [Morphism::new("f", "A", "B", "f"), Morphism::new("g", "B", "C", "g")],
//! )?;
//!
//! let h = category.compose("f", "g")?;
//! assert_eq!(h.label, "g∘f");
//! assert!(category.verify().valid);
//! # Ok::<(), cim_category::CategoryError>(())
//! ```

#![warn(missing_docs)]

pub mod category;
mod config;
mod errors;

pub use category::{
    category_from_graph, composable, discrete_category, find_default_paths, find_paths,
    find_paths_with, opposite_category, paths_commute, Category, CategoryDefinition, Denotation,
    EndpointEquality, Functor, MathObject, Morphism, MorphismEquality, MorphismKind,
    NaturalTransformation, SampledEquality, VerificationReport,
};
pub use config::{EqualityStrategy, VerificationConfig, DEFAULT_MAX_PATH_LENGTH};
pub use errors::{CategoryError, CategoryResult, EndpointRole};
