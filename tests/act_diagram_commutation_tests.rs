// Copyright (c) 2025 - Cowboy AI, LLC.

mod tests {
    pub mod act {
        use std::sync::Arc;

        use cim_category::{
            find_default_paths, paths_commute, Category, CategoryError, EqualityStrategy,
            Functor, MathObject, Morphism, NaturalTransformation, VerificationConfig,
        };
        use serde_json::json;

        fn set_toy() -> Category {
            Category::with_contents(
                "Set-toy",
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
            .expect("set toy")
        }

        #[test]
        fn set_toy_composition_and_triangle() {
            let mut category = set_toy();
            let h = category.compose("f", "g").expect("f then g");
            assert_eq!(h.label, "g∘f");
            assert_eq!(h.endpoints(), ("A", "C"));

            category
                .add_morphism(Morphism::new("h", "A", "C", "h"))
                .expect("independent h");
            assert!(
                category
                    .diagram_commutes(&[vec!["f", "g"], vec!["h"]])
                    .expect("paths compose"),
                "diagram: triangle commutes by endpoints"
            );
            assert!(
                !category
                    .diagram_commutes(&[vec!["f"], vec!["h"]])
                    .expect("paths compose"),
                "diagram: mismatched targets never commute"
            );
        }

        #[test]
        fn unknown_source_object_is_rejected() {
            let mut category = set_toy();
            let err = category
                .add_morphism(Morphism::new("k", "Ghost", "A", "k"))
                .unwrap_err();
            assert!(matches!(err, CategoryError::UnknownObject { .. }));
            assert!(err.is_registration_error());
            assert!(category.get_morphism("k").is_none());
        }

        #[test]
        fn functors_into_different_targets_are_incompatible() {
            let c = Arc::new(set_toy());
            let d = Arc::new(set_toy());
            let e = Arc::new(set_toy());

            let f = Arc::new(Functor::identity(Arc::clone(&c)));
            let to_d = Functor::new(
                "F",
                Arc::clone(&c),
                d,
                [("A", "A"), ("B", "B"), ("C", "C")],
                [("f", "f"), ("g", "g")],
            );
            let to_e = Functor::new(
                "G",
                Arc::clone(&c),
                e,
                [("A", "A"), ("B", "B"), ("C", "C")],
                [("f", "f"), ("g", "g")],
            );

            let err = NaturalTransformation::new("α", Arc::new(to_d), Arc::new(to_e), [("A", "id_A")])
                .unwrap_err();
            assert!(matches!(err, CategoryError::IncompatibleFunctors { .. }));

            // A functor is parallel to itself
            assert!(NaturalTransformation::new("1", Arc::clone(&f), f, Vec::<(String, String)>::new()).is_ok());
        }

        #[test]
        fn square_diagram_commutes_under_sampled_equality() {
            // ℤ --double--> ℤ
            // |              |
            // inc2          inc4
            // v              v
            // ℤ --double--> ℤ
            let category = Category::with_contents(
                "Z-square",
                [MathObject::new("Z1", "ℤ"), MathObject::new("Z2", "ℤ"), MathObject::new("Z3", "ℤ"), MathObject::new("Z4", "ℤ")],
                [
                    Morphism::new("top", "Z1", "Z2", "double").with_data(|v| json!(v.as_i64().unwrap_or(0) * 2)),
                    Morphism::new("right", "Z2", "Z4", "inc4").with_data(|v| json!(v.as_i64().unwrap_or(0) + 4)),
                    Morphism::new("left", "Z1", "Z3", "inc2").with_data(|v| json!(v.as_i64().unwrap_or(0) + 2)),
                    Morphism::new("bottom", "Z3", "Z4", "double").with_data(|v| json!(v.as_i64().unwrap_or(0) * 2)),
                    Morphism::new("skew", "Z3", "Z4", "inc").with_data(|v| json!(v.as_i64().unwrap_or(0) + 1)),
                ],
            )
            .expect("square");

            let config = VerificationConfig {
                equality: EqualityStrategy::Sampled {
                    samples: vec![json!(-1), json!(0), json!(5)],
                },
                ..VerificationConfig::default()
            };
            let equality = config.equality.build();

            assert!(category
                .diagram_commutes_with(&[vec!["top", "right"], vec!["left", "bottom"]], equality.as_ref())
                .expect("paths compose"));
            assert!(!category
                .diagram_commutes_with(&[vec!["top", "right"], vec!["left", "skew"]], equality.as_ref())
                .expect("paths compose"));

            // Endpoint equality cannot tell the two bottom edges apart
            assert!(paths_commute(&category, "Z1", "Z4", &VerificationConfig::default()).expect("commutes"));
            assert_eq!(find_default_paths(&category, "Z1", "Z4").len(), 3);
            assert!(!paths_commute(&category, "Z1", "Z4", &config).expect("paths compose"));
        }
    }
}
