//! Integration tests for triangle classification.

use trishape::{
    Classification, Classifier, ErrorKind, RawSide, Shape, SidePosition, TolerancePolicy,
    TriangleAnalysis, TriangleError, TriangleResult, classify,
};

fn label(result: TriangleResult<Classification>) -> String {
    match result {
        Ok(classification) => classification.to_string(),
        Err(err) => err.to_string(),
    }
}

fn kind<T>(result: TriangleResult<T>) -> Option<ErrorKind> {
    result.err().map(|err| err.kind())
}

#[test]
fn test_end_to_end_workflow() {
    // 1. Build a classifier with the default tolerances
    let classifier = Classifier::default();

    // 2. Validate raw input of mixed representation
    let sides = classifier.validate(3, "4", 5.0);
    let Ok(sides) = sides else {
        panic!("expected valid sides, got {sides:?}");
    };
    assert_eq!(sides.sorted().largest(), 5.0);

    // 3. Classify the validated sides
    let classification = classifier.classify_sides(sides);
    assert_eq!(
        classification,
        Ok(Classification::new(Shape::Scalene, true))
    );

    // 4. Render and parse the label
    assert_eq!(label(classification), "Scalene Right");
    assert_eq!(
        "Scalene Right".parse::<Classification>(),
        Ok(Classification::new(Shape::Scalene, true))
    );
}

#[test]
fn test_equilateral_triangles() {
    for side in [1.0, 5.0, 10.0, 0.5, 1000.0, 3.333, 7.5, 0.001, 0.0001] {
        assert_eq!(label(classify(side, side, side)), "Equilateral", "side {side}");
    }
}

#[test]
fn test_isosceles_triangles() {
    assert_eq!(label(classify(5, 5, 8)), "Isosceles");
    assert_eq!(label(classify(5, 8, 5)), "Isosceles");
    assert_eq!(label(classify(8, 5, 5)), "Isosceles");
    assert_eq!(label(classify(10, 6, 10)), "Isosceles");
    assert_eq!(label(classify(100, 100, 150)), "Isosceles");
    // Close to the degenerate boundary
    assert_eq!(label(classify(5.0, 5.0, 9.99)), "Isosceles");
    assert_eq!(label(classify(10.0, 10.0, 19.9)), "Isosceles");
}

#[test]
fn test_scalene_triangles() {
    assert_eq!(label(classify(3, 7, 5)), "Scalene");
    assert_eq!(label(classify(4, 6, 8)), "Scalene");
    assert_eq!(label(classify(6, 10, 14)), "Scalene");
    assert_eq!(label(classify(100, 150, 200)), "Scalene");
    assert_eq!(label(classify(2.3, 4.7, 5.9)), "Scalene");
    assert_eq!(label(classify(0.0001, 0.0002, 0.00025)), "Scalene");
}

#[test]
fn test_pythagorean_triples() {
    for (a, b, c) in [(3, 4, 5), (5, 12, 13), (8, 15, 17), (7, 24, 25), (20, 21, 29)] {
        assert_eq!(label(classify(a, b, c)), "Scalene Right", "{a}-{b}-{c}");
        assert_eq!(label(classify(c, a, b)), "Scalene Right", "{c}-{a}-{b}");
    }
    assert_eq!(label(classify(1.5, 2.0, 2.5)), "Scalene Right");
    assert_eq!(label(classify(0.3, 0.4, 0.5)), "Scalene Right");

    let hypotenuse = (3.0f64 * 3.0 + 4.0 * 4.0).sqrt();
    assert_eq!(label(classify(3.0, 4.0, hypotenuse)), "Scalene Right");
}

#[test]
fn test_right_angle_scale_invariance() {
    for scale in [1, 2, 10, 100, 1000] {
        let result = classify(3 * scale, 4 * scale, 5 * scale);
        assert_eq!(label(result), "Scalene Right", "scale {scale}");
    }
}

#[test]
fn test_isosceles_right_triangles() {
    for leg in [1.0f64, 2.0, 3.0, 5.0, 7.0, 10.0] {
        let hypotenuse = (2.0 * leg * leg).sqrt();
        assert_eq!(label(classify(leg, leg, hypotenuse)), "Isosceles Right");
        assert_eq!(label(classify(leg, hypotenuse, leg)), "Isosceles Right");
        assert_eq!(label(classify(hypotenuse, leg, leg)), "Isosceles Right");
    }
}

#[test]
fn test_not_a_triangle() {
    for (a, b, c) in [(1, 2, 10), (1, 10, 2), (10, 1, 2), (1, 1, 3), (5, 5, 20), (1, 100, 2)] {
        assert_eq!(classify(a, b, c), Err(TriangleError::NotATriangle));
    }
}

#[test]
fn test_degenerate_triangles_rejected() {
    for (a, b, c) in [(1, 2, 3), (2, 3, 5), (5, 5, 10), (10, 5, 5)] {
        assert_eq!(label(classify(a, b, c)), "Not a triangle");
    }
}

#[test]
fn test_non_positive_sides() {
    assert_eq!(
        classify(-1, 2, 2),
        Err(TriangleError::NonPositiveInput {
            side: SidePosition::A
        })
    );
    assert_eq!(
        classify(2, 2, -1),
        Err(TriangleError::NonPositiveInput {
            side: SidePosition::C
        })
    );
    assert_eq!(
        classify(1, -2, -3),
        Err(TriangleError::NonPositiveInput {
            side: SidePosition::B
        })
    );
    assert_eq!(kind(classify(0, 0, 0)), Some(ErrorKind::NonPositiveInput));
    assert_eq!(
        label(classify(0, 5, 5)),
        "Invalid input: All sides must be positive"
    );
}

#[test]
fn test_non_numeric_sides() {
    assert_eq!(
        label(classify("a", "b", "c")),
        "Invalid input: Sides must be numeric"
    );
    assert_eq!(kind(classify("five", "six", "seven")), Some(ErrorKind::NonNumericInput));
    assert_eq!(
        classify(5, None::<i32>, 5),
        Err(TriangleError::NonNumericInput {
            side: SidePosition::B
        })
    );
    assert_eq!(
        classify(5, 5, RawSide::Other),
        Err(TriangleError::NonNumericInput {
            side: SidePosition::C
        })
    );
    assert_eq!(kind(classify(f64::NAN, 5, 5)), Some(ErrorKind::NonNumericInput));
    assert_eq!(kind(classify(5, "NaN", 5)), Some(ErrorKind::NonNumericInput));
}

#[test]
fn test_mixed_type_sides() {
    assert_eq!(label(classify(5, "6", 7)), "Scalene");
    assert_eq!(label(classify("5", 6, 7)), "Scalene");
    assert_eq!(label(classify(5, 6, " 7 ")), "Scalene");
    assert_eq!(label(classify(Some(5u8), 5i64, 5.0f32)), "Equilateral");
    assert_eq!(label(classify("1_0", "1_0", "1_0")), "Equilateral");
    assert_eq!(kind(classify("1__0", 10, 10)), Some(ErrorKind::NonNumericInput));
}

#[test]
fn test_infinite_sides() {
    for position in SidePosition::ALL {
        let mut sides = [RawSide::from(5); 3];
        sides[position.index()] = RawSide::from(f64::INFINITY);
        assert_eq!(
            sides.classify(),
            Err(TriangleError::InfiniteInput { side: position })
        );
    }
    assert_eq!(
        label(classify(5, "-inf", 5)),
        "Invalid input: Sides cannot be infinite"
    );
}

#[test]
fn test_validation_precedence() {
    assert_eq!(kind(classify(-1, f64::INFINITY, f64::NAN)), Some(ErrorKind::NonNumericInput));
    assert_eq!(kind(classify(-1, f64::INFINITY, 2e10)), Some(ErrorKind::InfiniteInput));
    assert_eq!(kind(classify(2e10, 0, 1)), Some(ErrorKind::NonPositiveInput));
    assert_eq!(kind(classify(2e10, 1, 1)), Some(ErrorKind::MagnitudeTooLarge));
    // Magnitude is checked before the triangle inequality
    assert_eq!(
        label(classify(1, 1, 1e11)),
        "Invalid input: Side lengths too large"
    );
}

#[test]
fn test_large_magnitudes() {
    assert_eq!(label(classify(10_000, 10_000, 10_000)), "Equilateral");
    assert_eq!(label(classify(100_000, 100_000, 150_000)), "Isosceles");
    assert_eq!(label(classify(3000, 4000, 5000)), "Scalene Right");
    assert_eq!(label(classify(1e10, 1e10, 1e10)), "Equilateral");
}

#[test]
fn test_idempotence() {
    let inputs: [(f64, f64, f64); 4] = [
        (3.0, 4.0, 5.0),
        (1.0, 2.0, 3.0),
        (0.0, 1.0, 1.0),
        (7.0, 7.0, 7.0),
    ];
    for (a, b, c) in inputs {
        let first = classify(a, b, c);
        for _ in 0..3 {
            assert_eq!(classify(a, b, c), first);
        }
    }
}

#[test]
fn test_custom_policy() {
    let policy = TolerancePolicy::default()
        .with_equality_epsilon(0.01)
        .with_right_angle_epsilon(1e-3);
    let classifier = Classifier::new(policy);

    assert_eq!(
        classifier.classify(3.0, 4.0, 5.001),
        Ok(Classification::new(Shape::Scalene, true))
    );
    assert_eq!(
        classifier.classify(2.0, 2.005, 3.0).map(Shape::from),
        Ok(Shape::Isosceles)
    );
    assert_eq!(
        (3.0, 4.0, 5.001).classify().map(Classification::is_right),
        Ok(false)
    );
}

#[test]
fn test_classifier_is_shareable_across_threads() {
    let classifier = Classifier::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=4)
            .map(|k| scope.spawn(move || classifier.classify(3 * k, 4 * k, 5 * k)))
            .collect();
        for handle in handles {
            let result = handle.join();
            assert!(matches!(result, Ok(Ok(c)) if c == Classification::new(Shape::Scalene, true)));
        }
    });
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_classification_roundtrip() {
    for classification in Classification::ALL {
        let json = serde_json::to_string(&classification).unwrap();
        let parsed: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(classification, parsed);
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_error_and_policy() {
    let err = TriangleError::InfiniteInput {
        side: SidePosition::B,
    };
    let json = serde_json::to_string(&err).unwrap();
    let parsed: TriangleError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, parsed);

    let policy = TolerancePolicy::default().with_equality_epsilon(1e-6);
    let json = serde_json::to_string(&policy).unwrap();
    let parsed: TolerancePolicy = serde_json::from_str(&json).unwrap();
    assert_eq!(policy, parsed);

    let Ok(sides) = Classifier::default().validate(3, 4, 5) else {
        panic!("expected valid sides");
    };
    let value = serde_json::to_value(sides).unwrap();
    assert_eq!(value, serde_json::json!({ "sides": [3.0, 4.0, 5.0] }));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_embedded_in_caller_types() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Report {
        name: String,
        outcome: Result<Classification, TriangleError>,
    }

    let reports = vec![
        Report {
            name: "roof truss".into(),
            outcome: classify(3, 4, 5),
        },
        Report {
            name: "bent rail".into(),
            outcome: classify(1, 2, 3),
        },
    ];

    let json = serde_json::to_string(&reports).unwrap();
    let parsed: Vec<Report> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, reports);
    assert_eq!(parsed[1].outcome, Err(TriangleError::NotATriangle));
}
