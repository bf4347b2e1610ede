// Copyright 2025 Cowboy AI, LLC.

//! Functors between finite categories
//!
//! A functor is given by two explicit maps, one on object ids and one on
//! morphism ids. The maps only need to cover the part of the source the
//! client cares about; anything unmapped resolves to `None`. A functor
//! borrows its categories through `Arc` and never mutates them, apart from
//! the composition cache populated while verifying.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use super::equality::MorphismEquality;
use super::finite_category::Category;
use super::morphism::Morphism;
use super::object::MathObject;
use super::report::VerificationReport;
use crate::config::VerificationConfig;
use crate::errors::{CategoryError, CategoryResult};

/// A functor `F: source → target`
pub struct Functor {
    name: String,
    source: Arc<Category>,
    target: Arc<Category>,
    object_map: IndexMap<String, String>,
    morphism_map: IndexMap<String, String>,
}

impl Functor {
    /// Create a functor from explicit maps
    ///
    /// Either map may be a `HashMap`, an `IndexMap` or a list of pairs. No
    /// totality or shape validation happens here; use [`verify`](Self::verify).
    pub fn new<OK, OV, MK, MV>(
        name: impl Into<String>,
        source: Arc<Category>,
        target: Arc<Category>,
        object_map: impl IntoIterator<Item = (OK, OV)>,
        morphism_map: impl IntoIterator<Item = (MK, MV)>,
    ) -> Self
    where
        OK: Into<String>,
        OV: Into<String>,
        MK: Into<String>,
        MV: Into<String>,
    {
        let name = name.into();
        debug!(functor = %name, source = source.name(), target = target.name(), "creating functor");
        Self {
            name,
            source,
            target,
            object_map: object_map
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            morphism_map: morphism_map
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Identity functor on a category
    ///
    /// Maps every object and every generating morphism to itself.
    pub fn identity(category: Arc<Category>) -> Self {
        let objects: Vec<_> = category
            .get_objects()
            .into_iter()
            .map(|o| (o.id.clone(), o.id.clone()))
            .collect();
        let morphisms: Vec<_> = category
            .generating_morphisms()
            .into_iter()
            .map(|m| (m.id.clone(), m.id.clone()))
            .collect();
        let name = format!("Id_{}", category.name());
        Self::new(name, Arc::clone(&category), category, objects, morphisms)
    }

    /// Composite functor `second ∘ first`
    ///
    /// Only ids mapped by both functors survive.
    pub fn compose(first: &Functor, second: &Functor) -> CategoryResult<Functor> {
        if first.target.id() != second.source.id() {
            return Err(CategoryError::IncompatibleFunctors {
                left: first.name.clone(),
                right: second.name.clone(),
                reason: format!(
                    "target {} of the first is not source {} of the second",
                    first.target.name(),
                    second.source.name()
                ),
            });
        }

        let chain = |outer: &IndexMap<String, String>, inner: &IndexMap<String, String>| {
            outer
                .iter()
                .filter_map(|(k, v)| inner.get(v).map(|w| (k.clone(), w.clone())))
                .collect::<Vec<_>>()
        };

        Ok(Functor::new(
            format!("{}∘{}", second.name, first.name),
            Arc::clone(&first.source),
            Arc::clone(&second.target),
            chain(&first.object_map, &second.object_map),
            chain(&first.morphism_map, &second.morphism_map),
        ))
    }

    /// Functor name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source category
    pub fn source(&self) -> &Arc<Category> {
        &self.source
    }

    /// Target category
    pub fn target(&self) -> &Arc<Category> {
        &self.target
    }

    /// Raw object map
    pub fn object_map(&self) -> &IndexMap<String, String> {
        &self.object_map
    }

    /// Raw morphism map
    pub fn morphism_map(&self) -> &IndexMap<String, String> {
        &self.morphism_map
    }

    /// Whether both functors act between the same pair of categories
    pub fn parallel_to(&self, other: &Functor) -> bool {
        self.source.id() == other.source.id() && self.target.id() == other.target.id()
    }

    /// `F(A)`, resolved in the target category
    pub fn map_object(&self, object_id: &str) -> Option<&MathObject> {
        self.object_map
            .get(object_id)
            .and_then(|id| self.target.get_object(id))
    }

    /// `F(f)`, resolved in the target category
    pub fn map_morphism(&self, morphism_id: &str) -> Option<Arc<Morphism>> {
        self.morphism_map
            .get(morphism_id)
            .and_then(|id| self.target.get_morphism(id))
    }

    /// Check that identities are preserved: `F(id_A) = id_{F(A)}`
    ///
    /// Missing images are recorded and the object is skipped.
    /// Composition preservation is checked separately by
    /// [`verify_composition`](Self::verify_composition).
    pub fn verify(&self) -> VerificationReport {
        let mut report = VerificationReport::new(self.name.clone());

        for object in self.source.get_objects() {
            let Some(image) = self.map_object(&object.id) else {
                report.record(format!("Object {} is not mapped", object.id));
                continue;
            };
            let Some(identity) = self.source.get_identity(&object.id) else {
                report.record(format!("Object {} has no identity morphism", object.id));
                continue;
            };
            let Some(mapped_identity) = self.map_morphism(&identity.id) else {
                report.record(format!("Identity {} is not mapped", identity.id));
                continue;
            };
            let Some(expected) = self.target.get_identity(&image.id) else {
                report.record(format!(
                    "Target object {} has no identity morphism",
                    image.id
                ));
                continue;
            };
            if mapped_identity.id != expected.id {
                report.record(format!(
                    "Identity not preserved: F({}) = {}, expected {}",
                    identity.id, mapped_identity.id, expected.id
                ));
            }
        }

        report.finish("functor identity")
    }

    /// Check that mapped morphisms respect endpoints and that
    /// `F(g∘f) ≡ F(g)∘F(f)` for composable mapped generating morphisms
    ///
    /// Pairs whose images are not both mapped are skipped. When `g∘f` itself
    /// is not mapped, only composability of the images is checked.
    pub fn verify_composition(&self, equality: &dyn MorphismEquality) -> VerificationReport {
        let mut report = VerificationReport::new(self.name.clone());

        let mapped: Vec<(Arc<Morphism>, Arc<Morphism>)> = self
            .source
            .generating_morphisms()
            .into_iter()
            .filter_map(|m| self.map_morphism(&m.id).map(|image| (m, image)))
            .collect();

        for (f, image) in &mapped {
            let expected_source = self.object_map.get(&f.source);
            let expected_target = self.object_map.get(&f.target);
            if expected_source != Some(&image.source) || expected_target != Some(&image.target) {
                report.record(format!(
                    "F({}) = {} has endpoints {} → {}, expected F({}) → F({})",
                    f.id, image.id, image.source, image.target, f.source, f.target
                ));
            }
        }

        for (f, f_image) in &mapped {
            for (g, g_image) in mapped.iter().filter(|(g, _)| f.composable_with(g)) {
                let composed_image = match self.target.compose(&f_image.id, &g_image.id) {
                    Ok(composed) => composed,
                    Err(err) => {
                        report.record(format!(
                            "F({})∘F({}) is undefined: {}",
                            g.id, f.id, err
                        ));
                        continue;
                    }
                };
                let composite = match self.source.compose(&f.id, &g.id) {
                    Ok(composite) => composite,
                    Err(err) => {
                        report.record(format!("{}∘{} is undefined: {}", g.id, f.id, err));
                        continue;
                    }
                };
                if let Some(image_of_composite) = self.map_morphism(&composite.id) {
                    if !equality.equivalent(&image_of_composite, &composed_image) {
                        report.record(format!(
                            "Composition not preserved: F({}) = {} but F({})∘F({}) = {} under {} equality",
                            composite.id,
                            image_of_composite.id,
                            g.id,
                            f.id,
                            composed_image.id,
                            equality.name()
                        ));
                    }
                }
            }
        }

        report.finish("functor composition")
    }

    /// Run the identity check plus whatever optional checks `config` enables
    pub fn verify_with(&self, config: &VerificationConfig) -> VerificationReport {
        let report = self.verify();
        if config.check_functor_composition {
            let equality = config.equality.build();
            report.merge(self.verify_composition(equality.as_ref()))
        } else {
            report
        }
    }
}

impl fmt::Debug for Functor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Functor")
            .field("name", &self.name)
            .field("source", &self.source.name())
            .field("target", &self.target.name())
            .field("object_map", &self.object_map)
            .field("morphism_map", &self.morphism_map)
            .finish()
    }
}
