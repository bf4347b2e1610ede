use std::sync::Arc;

use cim_category::{
    Category, Functor, MathObject, Morphism, NaturalTransformation, VerificationConfig,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

/// A → B → C
fn chain() -> Arc<Category> {
    Arc::new(
        Category::with_contents(
            "Chain",
            [
                MathObject::new("A", "A"),
                MathObject::new("B", "B"),
                MathObject::new("C", "C"),
            ],
            [
                Morphism::new("f", "A", "B", "f"),
                Morphism::new("g", "B", "C", "g"),
            ],
        )
        .expect("chain"),
    )
}

/// X → Y
fn arrow() -> Arc<Category> {
    Arc::new(
        Category::with_contents(
            "Arrow",
            [MathObject::new("X", "X"), MathObject::new("Y", "Y")],
            [Morphism::new("p", "X", "Y", "p")],
        )
        .expect("arrow"),
    )
}

/// Everything collapses onto X
fn constant(c: &Arc<Category>, d: &Arc<Category>) -> Arc<Functor> {
    Arc::new(Functor::new(
        "F",
        Arc::clone(c),
        Arc::clone(d),
        [("A", "X"), ("B", "X"), ("C", "X")],
        [
            ("id_A", "id_X"),
            ("id_B", "id_X"),
            ("id_C", "id_X"),
            ("f", "id_X"),
            ("g", "id_X"),
        ],
    ))
}

/// A ↦ X, B, C ↦ Y
fn split(c: &Arc<Category>, d: &Arc<Category>, composite_image: Option<&str>) -> Functor {
    let mut morphisms = vec![
        ("id_A", "id_X"),
        ("id_B", "id_Y"),
        ("id_C", "id_Y"),
        ("f", "p"),
        ("g", "id_Y"),
    ];
    if let Some(image) = composite_image {
        morphisms.push(("g∘f", image));
    }
    Functor::new(
        "G",
        Arc::clone(c),
        Arc::clone(d),
        [("A", "X"), ("B", "Y"), ("C", "Y")],
        morphisms,
    )
}

#[test]
fn both_functors_preserve_identities() {
    let (c, d) = (chain(), arrow());
    assert!(constant(&c, &d).verify().valid);
    assert!(split(&c, &d, None).verify().valid);
}

#[test_case(Some("p"), 0 ; "well typed component")]
#[test_case(Some("id_X"), 3 ; "component stuck at X")]
#[test_case(None, 3 ; "missing component")]
fn naturality_of_collapse(component_b: Option<&str>, expected_errors: usize) {
    let (c, d) = (chain(), arrow());
    let f = constant(&c, &d);
    let g = Arc::new(split(&c, &d, None));

    let mut components = vec![("A", "id_X"), ("C", "p")];
    if let Some(component) = component_b {
        components.push(("B", component));
    }
    let alpha = NaturalTransformation::new("α", f, g, components).expect("parallel functors");

    let report = alpha.verify();
    assert_eq!(report.errors.len(), expected_errors, "{:?}", report.errors);
    assert_eq!(report.valid, expected_errors == 0);
}

#[test_case(Some("p"), true ; "composite mapped correctly")]
#[test_case(Some("id_X"), false ; "composite mapped to wrong endpoints")]
#[test_case(None, true ; "composite unmapped")]
fn composition_preservation(composite_image: Option<&str>, valid: bool) {
    let (c, d) = (chain(), arrow());
    // Memoize g∘f so the functor can name it
    c.compose("f", "g").expect("composable");
    let functor = split(&c, &d, composite_image);

    let lenient = functor.verify_with(&VerificationConfig::default());
    assert!(lenient.valid, "{:?}", lenient.errors);

    let strict = functor.verify_with(&VerificationConfig::strict());
    assert_eq!(strict.valid, valid, "{:?}", strict.errors);
}

#[test]
fn composite_functor_into_arrow() {
    let (c, d) = (chain(), arrow());
    let identity = Functor::identity(Arc::clone(&c));
    let composed = Functor::compose(&identity, &split(&c, &d, None)).expect("composable functors");

    assert_eq!(composed.map_object("C").map(|o| o.id.clone()), Some("Y".to_string()));
    assert_eq!(composed.map_morphism("f").map(|m| m.id.clone()), Some("p".to_string()));
    assert!(composed.verify().valid);
}

#[test]
fn vertical_composition_of_naturals() {
    let (c, d) = (chain(), arrow());
    let f = constant(&c, &d);
    let g = Arc::new(split(&c, &d, None));

    let alpha = NaturalTransformation::new(
        "α",
        Arc::clone(&f),
        Arc::clone(&g),
        [("A", "id_X"), ("B", "p"), ("C", "p")],
    )
    .expect("parallel");
    let one_g = NaturalTransformation::identity(Arc::clone(&g));

    let composed = NaturalTransformation::vertical(&alpha, &one_g).expect("composable");
    assert_eq!(
        composed.get_component("B").map(|m| m.id.clone()),
        Some("id_Y∘p".to_string())
    );
    let report = composed.verify();
    assert!(report.valid, "{:?}", report.errors);
}
