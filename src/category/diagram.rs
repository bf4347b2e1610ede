// Copyright 2025 Cowboy AI, LLC.

//! Diagram utilities
//!
//! Constructors for common shapes, the opposite category, and path
//! enumeration feeding [`Category::diagram_commutes`].

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use super::finite_category::Category;
use super::morphism::{Morphism, MorphismKind};
use super::object::MathObject;
use crate::config::{VerificationConfig, DEFAULT_MAX_PATH_LENGTH};
use crate::errors::CategoryResult;

pub use super::morphism::composable;

/// A category with the given objects and only their identities
pub fn discrete_category(
    name: impl Into<String>,
    objects: impl IntoIterator<Item = MathObject>,
) -> CategoryResult<Category> {
    Category::with_contents(name, objects, Vec::<Morphism>::new())
}

/// A category generated by a graph of objects and morphisms
pub fn category_from_graph(
    name: impl Into<String>,
    objects: impl IntoIterator<Item = MathObject>,
    morphisms: impl IntoIterator<Item = Morphism>,
) -> CategoryResult<Category> {
    Category::with_contents(name, objects, morphisms)
}

/// Build the opposite category
///
/// Every generating non-identity `f: A → B` becomes `f_op: B → A` labelled
/// `f^op`; identities are regenerated. Reversing a dual morphism restores
/// the original id and label, so taking the opposite twice gives back the
/// same presentation. Denotations are dropped since they cannot be reversed.
pub fn opposite_category(category: &Category) -> CategoryResult<Category> {
    let objects = category.get_objects().into_iter().cloned();
    let morphisms: Vec<Morphism> = category
        .generating_morphisms()
        .into_iter()
        .filter(|m| !m.is_identity())
        .map(|m| reverse(&m))
        .collect();

    debug!(category = category.name(), reversed = morphisms.len(), "building opposite category");
    Category::with_contents(opposite_name(category.name()), objects, morphisms)
}

fn opposite_name(name: &str) -> String {
    match name.strip_suffix("^op") {
        Some(original) => original.to_string(),
        None => format!("{}^op", name),
    }
}

fn reverse(morphism: &Morphism) -> Morphism {
    let (id, label, kind) = match &morphism.kind {
        MorphismKind::Dual {
            original_id,
            original_label,
        } => (original_id.clone(), original_label.clone(), MorphismKind::Basic),
        _ => (
            format!("{}_op", morphism.id),
            format!("{}^op", morphism.label),
            MorphismKind::Dual {
                original_id: morphism.id.clone(),
                original_label: morphism.label.clone(),
            },
        ),
    };

    Morphism {
        id,
        source: morphism.target.clone(),
        target: morphism.source.clone(),
        label,
        definition: morphism.definition.clone(),
        kind,
        data: None,
    }
}

/// Enumerate every path of generating non-identity morphisms from `source`
/// to `target` with at most `max_length` edges
///
/// No morphism repeats within a path, which keeps the search finite on
/// cyclic graphs. Memoized composites are not edges. A path that reaches
/// `target` is reported and still extended, so loops through `target` show
/// up as longer paths.
pub fn find_paths(
    category: &Category,
    source: &str,
    target: &str,
    max_length: usize,
) -> Vec<Vec<String>> {
    let mut adjacency: IndexMap<String, Vec<Arc<Morphism>>> = IndexMap::new();
    for morphism in category.generating_morphisms() {
        if !morphism.is_identity() {
            adjacency
                .entry(morphism.source.clone())
                .or_default()
                .push(morphism);
        }
    }

    let mut search = PathSearch {
        adjacency: &adjacency,
        target,
        max_length,
        path: Vec::new(),
        used: HashSet::new(),
        found: Vec::new(),
    };
    if category.get_object(source).is_some() {
        search.extend(source);
    }
    debug!(
        category = category.name(),
        source,
        target,
        max_length,
        paths = search.found.len(),
        "enumerated paths"
    );
    search.found
}

/// [`find_paths`] bounded by the configured maximum length
pub fn find_paths_with(
    category: &Category,
    source: &str,
    target: &str,
    config: &VerificationConfig,
) -> Vec<Vec<String>> {
    find_paths(category, source, target, config.max_path_length)
}

/// Whether every path from `source` to `target` composes to the same
/// morphism under the configured equality
///
/// Objects with no path between them trivially commute.
pub fn paths_commute(
    category: &Category,
    source: &str,
    target: &str,
    config: &VerificationConfig,
) -> CategoryResult<bool> {
    let paths = find_paths_with(category, source, target, config);
    let equality = config.equality.build();
    category.diagram_commutes_with(&paths, equality.as_ref())
}

/// [`find_paths`] with the default bound
pub fn find_default_paths(category: &Category, source: &str, target: &str) -> Vec<Vec<String>> {
    find_paths(category, source, target, DEFAULT_MAX_PATH_LENGTH)
}

struct PathSearch<'a> {
    adjacency: &'a IndexMap<String, Vec<Arc<Morphism>>>,
    target: &'a str,
    max_length: usize,
    path: Vec<String>,
    used: HashSet<String>,
    found: Vec<Vec<String>>,
}

impl PathSearch<'_> {
    fn extend(&mut self, current: &str) {
        if !self.path.is_empty() && current == self.target {
            self.found.push(self.path.clone());
        }
        if self.path.len() >= self.max_length {
            return;
        }
        let adjacency = self.adjacency;
        let Some(edges) = adjacency.get(current) else {
            return;
        };
        for edge in edges {
            if !self.used.insert(edge.id.clone()) {
                continue;
            }
            self.path.push(edge.id.clone());
            self.extend(&edge.target);
            self.path.pop();
            self.used.remove(&edge.id);
        }
    }
}
