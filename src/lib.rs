//! # Trishape - A Rust library for classifying triangles from untrusted side lengths.
//!
//! ## Overview
//!
//! Given three side lengths of unknown origin, this library validates them
//! and classifies the triangle they form:
//!
//! - **Equilateral**: all sides equal
//! - **Isosceles**: exactly two sides equal
//! - **Scalene**: no sides equal
//!
//! Each shape additionally carries a right-angle flag, so the six possible
//! outcomes read `"Equilateral"`, `"Isosceles Right"`, `"Scalene Right"` and so on.
//!
//! Validation runs in a fixed order and the first failing check wins:
//! non-numeric (or NaN), infinite, non-positive, too large. Valid lengths
//! that fail the strict triangle inequality are rejected as
//! [`TriangleError::NotATriangle`]; degenerate triples like 1-2-3 included.
//!
//! ## Quick Start
//!
//! ```rust
//! use trishape::{classify, Classification, ErrorKind, Shape};
//!
//! assert_eq!(classify(3, 4, 5), Ok(Classification::new(Shape::Scalene, true)));
//!
//! // Numeric text is accepted, missing values are not
//! assert_eq!(classify(5, "6", 7).unwrap().to_string(), "Scalene");
//! assert_eq!(classify(None::<f64>, 5, 5).unwrap_err().kind(), ErrorKind::NonNumericInput);
//! ```
//!
//! ## Tolerances
//!
//! Side equality uses a fixed epsilon ([`EQUALITY_EPSILON`]); the right-angle
//! test uses `max(ε, ε·c²)` for the longest side `c` ([`RIGHT_ANGLE_EPSILON`]),
//! which keeps 3-4-5 and 300-400-500 on equal footing. Both, plus the
//! [`MAX_SIDE_LENGTH`] bound, live in an immutable [`TolerancePolicy`] that a
//! [`Classifier`] can be built with.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization for classifications, errors and policies
//! - `std`: Enable standard library support (enabled by default). Disable for `no_std` environments.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

/// Output types: shape tags and classifications.
pub mod classification;
/// The validate-then-classify pipeline.
pub mod classifier;
pub mod error;
/// Raw, untrusted side inputs.
pub mod input;
pub mod tolerance;
pub mod validate;

pub use classification::{Classification, InvalidShapeValue, ParseClassificationError, Shape};
pub use classifier::{Classifier, TriangleAnalysis, TriangleSides, classify};
pub use error::{ErrorKind, TriangleError, TriangleResult};
pub use input::{RawSide, SidePosition};
pub use tolerance::{EQUALITY_EPSILON, MAX_SIDE_LENGTH, RIGHT_ANGLE_EPSILON, TolerancePolicy};
pub use validate::{SortedSides, ValidatedSides};
