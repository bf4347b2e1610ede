// Copyright 2025 Cowboy AI, LLC.

//! Natural transformations between parallel functors
//!
//! A natural transformation `α: F ⇒ G` assigns to every object `A` of the
//! shared domain a component `α_A: F(A) → G(A)` in the shared codomain, such
//! that for every `f: A → B` the naturality square commutes:
//!
//! ```text
//!   F(A) --α_A--> G(A)
//!    |             |
//!  F(f)           G(f)
//!    v             v
//!   F(B) --α_B--> G(B)
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use super::equality::{EndpointEquality, MorphismEquality};
use super::finite_category::Category;
use super::functor::Functor;
use super::morphism::Morphism;
use super::report::VerificationReport;
use crate::config::VerificationConfig;
use crate::errors::{CategoryError, CategoryResult};

/// A natural transformation `α: F ⇒ G`
pub struct NaturalTransformation {
    name: String,
    source: Arc<Functor>,
    target: Arc<Functor>,
    components: IndexMap<String, String>,
}

impl NaturalTransformation {
    /// Create a natural transformation from its components
    ///
    /// Fails with [`CategoryError::IncompatibleFunctors`] unless both functors
    /// share their source and their target category.
    pub fn new<K, V>(
        name: impl Into<String>,
        source: Arc<Functor>,
        target: Arc<Functor>,
        components: impl IntoIterator<Item = (K, V)>,
    ) -> CategoryResult<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if !source.parallel_to(&target) {
            let reason = if source.source().id() != target.source().id() {
                format!(
                    "source categories differ ({} vs {})",
                    source.source().name(),
                    target.source().name()
                )
            } else {
                format!(
                    "target categories differ ({} vs {})",
                    source.target().name(),
                    target.target().name()
                )
            };
            return Err(CategoryError::IncompatibleFunctors {
                left: source.name().to_string(),
                right: target.name().to_string(),
                reason,
            });
        }

        debug!(transformation = %name, source = source.name(), target = target.name(), "creating natural transformation");
        Ok(Self {
            name,
            source,
            target,
            components: components
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        })
    }

    /// Identity transformation `F ⇒ F` with components `id_{F(A)}`
    pub fn identity(functor: Arc<Functor>) -> Self {
        let components: IndexMap<String, String> = functor
            .source()
            .get_objects()
            .into_iter()
            .filter_map(|object| {
                let image = functor.map_object(&object.id)?;
                let identity = functor.target().get_identity(&image.id)?;
                Some((object.id.clone(), identity.id.clone()))
            })
            .collect();

        Self {
            name: format!("1_{}", functor.name()),
            source: Arc::clone(&functor),
            target: functor,
            components,
        }
    }

    /// Vertical composite `β·α: F ⇒ H` with components `β_A ∘ α_A`
    ///
    /// Only objects with both components survive.
    pub fn vertical(
        alpha: &NaturalTransformation,
        beta: &NaturalTransformation,
    ) -> CategoryResult<Self> {
        if !Arc::ptr_eq(&alpha.target, &beta.source) {
            return Err(CategoryError::IncompatibleFunctors {
                left: alpha.name.clone(),
                right: beta.name.clone(),
                reason: format!(
                    "target functor {} is not source functor {}",
                    alpha.target.name(),
                    beta.source.name()
                ),
            });
        }

        let codomain = alpha.codomain();
        let mut components = IndexMap::new();
        for (object, first) in &alpha.components {
            if let Some(second) = beta.components.get(object) {
                let composed = codomain.compose(first, second)?;
                components.insert(object.clone(), composed.id.clone());
            }
        }

        Ok(Self {
            name: format!("{}·{}", beta.name, alpha.name),
            source: Arc::clone(&alpha.source),
            target: Arc::clone(&beta.target),
            components,
        })
    }

    /// Transformation name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source functor `F`
    pub fn source(&self) -> &Arc<Functor> {
        &self.source
    }

    /// Target functor `G`
    pub fn target(&self) -> &Arc<Functor> {
        &self.target
    }

    /// Shared domain category
    pub fn domain(&self) -> &Arc<Category> {
        self.source.source()
    }

    /// Shared codomain category
    pub fn codomain(&self) -> &Arc<Category> {
        self.target.target()
    }

    /// Raw component map
    pub fn components(&self) -> &IndexMap<String, String> {
        &self.components
    }

    /// `α_A`, resolved in the codomain
    pub fn get_component(&self, object_id: &str) -> Option<Arc<Morphism>> {
        self.components
            .get(object_id)
            .and_then(|id| self.codomain().get_morphism(id))
    }

    /// Check every naturality square by endpoints
    pub fn verify(&self) -> VerificationReport {
        self.verify_naturality(&EndpointEquality)
    }

    /// Check every naturality square under the configured equality
    pub fn verify_with(&self, config: &VerificationConfig) -> VerificationReport {
        let equality = config.equality.build();
        self.verify_naturality(equality.as_ref())
    }

    /// Check `G(f)∘α_A ≡ α_B∘F(f)` for every generating `f: A → B`
    ///
    /// Missing images or components are recorded and the morphism is
    /// skipped.
    pub fn verify_naturality(&self, equality: &dyn MorphismEquality) -> VerificationReport {
        let mut report = VerificationReport::new(self.name.clone());
        let f_functor = &self.source;
        let g_functor = &self.target;
        let codomain = self.codomain();

        for f in self.domain().generating_morphisms() {
            let mut complete = true;
            for (functor, object) in [
                (f_functor, &f.source),
                (f_functor, &f.target),
                (g_functor, &f.source),
                (g_functor, &f.target),
            ] {
                if functor.map_object(object).is_none() {
                    report.record(format!(
                        "{}({}) is not mapped (needed for {})",
                        functor.name(),
                        object,
                        f.id
                    ));
                    complete = false;
                }
            }
            if !complete {
                continue;
            }

            let alpha_a = self.get_component(&f.source);
            let alpha_b = self.get_component(&f.target);
            let f_image = f_functor.map_morphism(&f.id);
            let g_image = g_functor.map_morphism(&f.id);
            let (Some(alpha_a), Some(alpha_b), Some(f_image), Some(g_image)) =
                (alpha_a, alpha_b, f_image, g_image)
            else {
                report.record(format!(
                    "Naturality square for {} is incomplete: missing component or functor image",
                    f.id
                ));
                continue;
            };

            let left = codomain.compose(&alpha_a.id, &g_image.id);
            let right = codomain.compose(&f_image.id, &alpha_b.id);
            match (left, right) {
                (Ok(left), Ok(right)) => {
                    if !equality.equivalent(&left, &right) {
                        report.record(format!(
                            "Naturality fails for {}: {} ({} → {}) != {} ({} → {}) under {} equality",
                            f.id,
                            left.id,
                            left.source,
                            left.target,
                            right.id,
                            right.source,
                            right.target,
                            equality.name()
                        ));
                    }
                }
                (Err(err), _) | (_, Err(err)) => {
                    report.record(format!("Naturality square for {} does not compose: {}", f.id, err));
                }
            }
        }

        report.finish("naturality")
    }
}

impl fmt::Debug for NaturalTransformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaturalTransformation")
            .field("name", &self.name)
            .field("source", &self.source.name())
            .field("target", &self.target.name())
            .field("components", &self.components)
            .finish()
    }
}
