// Copyright 2025 Cowboy AI, LLC.

//! Finite, explicitly presented categories
//!
//! A [`Category`] is an append-only arena of objects and morphisms:
//! - Registering an object synthesizes its identity `id_<object>`
//! - Morphisms must connect registered objects
//! - Composition is computed lazily and memoized, so composing the same
//!   pair twice yields the very same [`Morphism`]
//! - Nothing is ever removed, so an id that resolves once resolves forever
//!
//! Objects are only added through `&mut self`. Composition works through
//! `&self` and populates the cache behind a lock, which lets a finished
//! category be shared (typically through `Arc`) by functors and natural
//! transformations that compose inside it.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};
use uuid::Uuid;

use super::equality::{EndpointEquality, MorphismEquality};
use super::morphism::{composite_id, Morphism, MorphismKind};
use super::object::MathObject;
use super::report::VerificationReport;
use crate::config::VerificationConfig;
use crate::errors::{CategoryError, CategoryResult, EndpointRole};

/// Plain-record description of a category, as exchanged with the
/// presentation layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Category name
    pub name: String,
    /// Objects, identities are implied
    #[serde(default)]
    pub objects: Vec<MathObject>,
    /// Client morphisms
    #[serde(default)]
    pub morphisms: Vec<Morphism>,
}

#[derive(Debug, Default)]
struct MorphismStore {
    morphisms: IndexMap<String, Arc<Morphism>>,
    /// (first, second) -> id of `second ∘ first`
    composition_cache: HashMap<(String, String), String>,
}

/// A finite category
#[derive(Debug)]
pub struct Category {
    id: Uuid,
    name: String,
    objects: IndexMap<String, MathObject>,
    identities: HashMap<String, String>,
    store: RwLock<MorphismStore>,
}

impl Category {
    /// Create an empty category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            objects: IndexMap::new(),
            identities: HashMap::new(),
            store: RwLock::new(MorphismStore::default()),
        }
    }

    /// Create a category from objects, then morphisms
    pub fn with_contents(
        name: impl Into<String>,
        objects: impl IntoIterator<Item = MathObject>,
        morphisms: impl IntoIterator<Item = Morphism>,
    ) -> CategoryResult<Self> {
        let mut category = Self::new(name);
        for object in objects {
            category.add_object(object)?;
        }
        for morphism in morphisms {
            category.add_morphism(morphism)?;
        }
        Ok(category)
    }

    /// Build a category from its record form
    pub fn from_definition(definition: CategoryDefinition) -> CategoryResult<Self> {
        Self::with_contents(definition.name, definition.objects, definition.morphisms)
    }

    /// Record form: objects and generating morphisms
    ///
    /// Identities and memoized composites are omitted since rebuilding the
    /// category regenerates them.
    pub fn to_definition(&self) -> CategoryDefinition {
        CategoryDefinition {
            name: self.name.clone(),
            objects: self.objects.values().cloned().collect(),
            morphisms: self
                .generating_morphisms()
                .into_iter()
                .filter(|m| !m.is_identity())
                .map(|m| (*m).clone())
                .collect(),
        }
    }

    /// Unique identity of this category instance
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register an object and synthesize its identity morphism
    pub fn add_object(&mut self, object: MathObject) -> CategoryResult<()> {
        if self.objects.contains_key(&object.id) {
            return Err(CategoryError::DuplicateObject(object.id));
        }

        let identity = Morphism::identity_for(&object.id, &object.label);
        let store = self.store.get_mut();
        if store.morphisms.contains_key(&identity.id) {
            return Err(CategoryError::DuplicateMorphism(identity.id));
        }

        debug!(category = %self.name, object = %object.id, "adding object");
        self.identities.insert(object.id.clone(), identity.id.clone());
        store.morphisms.insert(identity.id.clone(), Arc::new(identity));
        self.objects.insert(object.id.clone(), object);
        Ok(())
    }

    /// Register a morphism between existing objects
    pub fn add_morphism(&mut self, morphism: Morphism) -> CategoryResult<()> {
        for (role, object) in [
            (EndpointRole::Source, &morphism.source),
            (EndpointRole::Target, &morphism.target),
        ] {
            if !self.objects.contains_key(object) {
                return Err(CategoryError::UnknownObject {
                    morphism: morphism.id.clone(),
                    role,
                    object: object.clone(),
                });
            }
        }

        let store = self.store.get_mut();
        if store.morphisms.contains_key(&morphism.id) {
            return Err(CategoryError::DuplicateMorphism(morphism.id));
        }

        debug!(
            category = %self.name,
            morphism = %morphism.id,
            source = %morphism.source,
            target = %morphism.target,
            "adding morphism"
        );
        store.morphisms.insert(morphism.id.clone(), Arc::new(morphism));
        Ok(())
    }

    /// Look up an object
    pub fn get_object(&self, id: &str) -> Option<&MathObject> {
        self.objects.get(id)
    }

    /// Look up a morphism, including identities and memoized composites
    pub fn get_morphism(&self, id: &str) -> Option<Arc<Morphism>> {
        self.store.read().morphisms.get(id).cloned()
    }

    /// All objects in registration order
    pub fn get_objects(&self) -> Vec<&MathObject> {
        self.objects.values().collect()
    }

    /// All morphisms in registration order
    pub fn get_morphisms(&self) -> Vec<Arc<Morphism>> {
        self.store.read().morphisms.values().cloned().collect()
    }

    /// Morphisms whose source is `object_id`
    pub fn get_morphisms_from(&self, object_id: &str) -> Vec<Arc<Morphism>> {
        self.filter_morphisms(|m| m.source == object_id)
    }

    /// Morphisms whose target is `object_id`
    pub fn get_morphisms_to(&self, object_id: &str) -> Vec<Arc<Morphism>> {
        self.filter_morphisms(|m| m.target == object_id)
    }

    /// Identity morphism of a registered object
    pub fn get_identity(&self, object_id: &str) -> Option<Arc<Morphism>> {
        self.identities
            .get(object_id)
            .and_then(|id| self.get_morphism(id))
    }

    /// Number of objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of morphisms, including identities and memoized composites
    pub fn morphism_count(&self) -> usize {
        self.store.read().morphisms.len()
    }

    /// Identities, client morphisms and dual morphisms, without memoized
    /// composites
    pub fn generating_morphisms(&self) -> Vec<Arc<Morphism>> {
        self.filter_morphisms(|m| !m.is_composed())
    }

    fn filter_morphisms(&self, predicate: impl Fn(&Morphism) -> bool) -> Vec<Arc<Morphism>> {
        self.store
            .read()
            .morphisms
            .values()
            .filter(|m| predicate(m))
            .cloned()
            .collect()
    }

    /// Compose `first` then `second`, yielding `second ∘ first`
    ///
    /// The result is memoized: the same pair always returns the same
    /// morphism.
    pub fn compose(&self, first: &str, second: &str) -> CategoryResult<Arc<Morphism>> {
        let key = (first.to_string(), second.to_string());

        let (f, g) = {
            let store = self.store.read();
            if let Some(cached) = store
                .composition_cache
                .get(&key)
                .and_then(|id| store.morphisms.get(id))
            {
                trace!(category = %self.name, first, second, "composition cache hit");
                return Ok(Arc::clone(cached));
            }
            let f = store
                .morphisms
                .get(first)
                .cloned()
                .ok_or_else(|| CategoryError::UnknownMorphism(first.to_string()))?;
            let g = store
                .morphisms
                .get(second)
                .cloned()
                .ok_or_else(|| CategoryError::UnknownMorphism(second.to_string()))?;
            (f, g)
        };

        if !f.composable_with(&g) {
            return Err(CategoryError::NotComposable {
                first: f.id.clone(),
                second: g.id.clone(),
                first_target: f.target.clone(),
                second_source: g.source.clone(),
            });
        }

        let mut store = self.store.write();
        // Another caller may have composed the pair since the read lock was released
        if let Some(cached) = store
            .composition_cache
            .get(&key)
            .and_then(|id| store.morphisms.get(id))
        {
            return Ok(Arc::clone(cached));
        }

        let id = composite_id(&f, &g);
        let expected = MorphismKind::Composed {
            first: key.0.clone(),
            second: key.1.clone(),
        };
        let existing = store.morphisms.get(&id).cloned();
        let composed = match existing {
            Some(existing) if existing.kind == expected => existing,
            Some(_) => return Err(CategoryError::DuplicateMorphism(id)),
            None => {
                debug!(category = %self.name, first, second, composite = %id, "memoizing composite");
                let composed = Arc::new(Morphism::composite(&f, &g));
                store.morphisms.insert(id.clone(), Arc::clone(&composed));
                composed
            }
        };
        store.composition_cache.insert(key, id);
        Ok(composed)
    }

    /// Fold a path left to right through [`compose`](Self::compose)
    ///
    /// Returns `None` for an empty path.
    pub fn compose_path<S: AsRef<str>>(&self, path: &[S]) -> CategoryResult<Option<Arc<Morphism>>> {
        let mut iter = path.iter();
        let Some(head) = iter.next() else {
            return Ok(None);
        };
        let mut acc = self
            .get_morphism(head.as_ref())
            .ok_or_else(|| CategoryError::UnknownMorphism(head.as_ref().to_string()))?;
        for next in iter {
            acc = self.compose(&acc.id, next.as_ref())?;
        }
        Ok(Some(acc))
    }

    /// Whether every path composes to the same morphism, by endpoints
    pub fn diagram_commutes<P, S>(&self, paths: &[P]) -> CategoryResult<bool>
    where
        P: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.diagram_commutes_with(paths, &EndpointEquality)
    }

    /// Whether every path composes to the same morphism under `equality`
    ///
    /// Paths must share the first source and the last target, otherwise the
    /// diagram does not commute. An empty path never commutes.
    pub fn diagram_commutes_with<P, S>(
        &self,
        paths: &[P],
        equality: &dyn MorphismEquality,
    ) -> CategoryResult<bool>
    where
        P: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut endpoints: Option<(String, String)> = None;
        for path in paths {
            let path = path.as_ref();
            let (Some(head), Some(last)) = (path.first(), path.last()) else {
                return Ok(false);
            };
            let head = self
                .get_morphism(head.as_ref())
                .ok_or_else(|| CategoryError::UnknownMorphism(head.as_ref().to_string()))?;
            let last = self
                .get_morphism(last.as_ref())
                .ok_or_else(|| CategoryError::UnknownMorphism(last.as_ref().to_string()))?;
            let current = (head.source.clone(), last.target.clone());
            match &endpoints {
                None => endpoints = Some(current),
                Some(expected) if *expected != current => return Ok(false),
                Some(_) => {}
            }
        }

        let mut composites = Vec::with_capacity(paths.len());
        for path in paths {
            if let Some(composite) = self.compose_path(path.as_ref())? {
                composites.push(composite);
            }
        }

        Ok(composites
            .windows(2)
            .all(|pair| equality.equivalent(&pair[0], &pair[1])))
    }

    /// Apply a morphism's denotation to a value
    ///
    /// `Ok(None)` means the morphism exists but carries no function.
    pub fn evaluate(&self, morphism_id: &str, value: Value) -> CategoryResult<Option<Value>> {
        let morphism = self
            .get_morphism(morphism_id)
            .ok_or_else(|| CategoryError::UnknownMorphism(morphism_id.to_string()))?;
        Ok(morphism.apply(value))
    }

    /// Verify the identity axioms
    ///
    /// For each object `A` checks that `id_A: A → A`, that `f ∘ id_A` keeps
    /// the target of every `f` leaving `A`, and that `id_A ∘ f` keeps the
    /// source of every `f` entering `A`. Memoized composites are not
    /// re-verified, so repeated runs do not grow the category.
    pub fn verify(&self) -> VerificationReport {
        let mut report = VerificationReport::new(self.name.clone());

        for object_id in self.objects.keys() {
            let Some(identity) = self.get_identity(object_id) else {
                report.record(format!("Object {} has no identity morphism", object_id));
                continue;
            };

            if identity.source != *object_id || identity.target != *object_id {
                report.record(format!(
                    "Identity {} has wrong source/target: {} → {}, expected {} → {}",
                    identity.id, identity.source, identity.target, object_id, object_id
                ));
            }

            let outgoing: Vec<_> = self
                .get_morphisms_from(object_id)
                .into_iter()
                .filter(|m| !m.is_composed())
                .collect();
            for f in outgoing {
                match self.compose(&identity.id, &f.id) {
                    Ok(composed) if composed.target != f.target => report.record(format!(
                        "Right identity failed for {}: {}∘{} ends at {}, expected {}",
                        f.id, f.id, identity.id, composed.target, f.target
                    )),
                    Ok(_) => {}
                    Err(err) => report.record(format!(
                        "Right identity failed for {}: {}",
                        f.id, err
                    )),
                }
            }

            let incoming: Vec<_> = self
                .get_morphisms_to(object_id)
                .into_iter()
                .filter(|m| !m.is_composed())
                .collect();
            for f in incoming {
                match self.compose(&f.id, &identity.id) {
                    Ok(composed) if composed.source != f.source => report.record(format!(
                        "Left identity failed for {}: {}∘{} starts at {}, expected {}",
                        f.id, identity.id, f.id, composed.source, f.source
                    )),
                    Ok(_) => {}
                    Err(err) => report.record(format!(
                        "Left identity failed for {}: {}",
                        f.id, err
                    )),
                }
            }
        }

        report.finish("identity")
    }

    /// Verify `(h∘g)∘f ≡ h∘(g∘f)` for every composable triple of
    /// non-identity generating morphisms
    pub fn verify_associativity(&self, equality: &dyn MorphismEquality) -> VerificationReport {
        let mut report = VerificationReport::new(self.name.clone());
        let generators: Vec<_> = self
            .generating_morphisms()
            .into_iter()
            .filter(|m| !m.is_identity())
            .collect();

        for f in &generators {
            for g in generators.iter().filter(|g| f.composable_with(g)) {
                for h in generators.iter().filter(|h| g.composable_with(h)) {
                    let left = self
                        .compose(&f.id, &g.id)
                        .and_then(|gf| self.compose(&gf.id, &h.id));
                    let right = self
                        .compose(&g.id, &h.id)
                        .and_then(|hg| self.compose(&f.id, &hg.id));
                    match (left, right) {
                        (Ok(left), Ok(right)) if !equality.equivalent(&left, &right) => {
                            report.record(format!(
                                "Associativity violated: ({}∘{})∘{} != {}∘({}∘{}) under {} equality",
                                h.id,
                                g.id,
                                f.id,
                                h.id,
                                g.id,
                                f.id,
                                equality.name()
                            ))
                        }
                        (Ok(_), Ok(_)) => {}
                        (Err(err), _) | (_, Err(err)) => report.record(format!(
                            "Associativity check failed for ({}, {}, {}): {}",
                            f.id, g.id, h.id, err
                        )),
                    }
                }
            }
        }

        report.finish("associativity")
    }

    /// Run the identity check plus whatever optional checks `config` enables
    pub fn verify_with(&self, config: &VerificationConfig) -> VerificationReport {
        let report = self.verify();
        if config.check_associativity {
            let equality = config.equality.build();
            report.merge(self.verify_associativity(equality.as_ref()))
        } else {
            report
        }
    }
}
