use tracing::{debug, trace};

use crate::classification::{Classification, Shape};
use crate::error::{TriangleError, TriangleResult};
use crate::input::RawSide;
use crate::tolerance::TolerancePolicy;
use crate::validate::ValidatedSides;

/// Validate-then-classify pipeline bound to one [`TolerancePolicy`].
///
/// Stateless apart from its immutable policy, so a single instance can be
/// shared freely across threads.
///
/// # Example
///
/// ```
/// use trishape::{Classifier, Shape, TolerancePolicy};
///
/// let classifier = Classifier::default();
/// let result = classifier.classify(300, 400, 500).unwrap();
/// assert_eq!(result.shape, Shape::Scalene);
/// assert!(result.right);
///
/// // Treat sides within a millimetre as equal
/// let lenient = Classifier::new(TolerancePolicy::default().with_equality_epsilon(1e-3));
/// let result = lenient.classify(2.0, 2.0004, 3.0).unwrap();
/// assert_eq!(result.shape, Shape::Isosceles);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Classifier {
    policy: TolerancePolicy,
}

impl Classifier {
    /// Creates a classifier that applies `policy`
    #[must_use]
    pub const fn new(policy: TolerancePolicy) -> Self {
        Self { policy }
    }

    /// The policy this classifier applies
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> &TolerancePolicy {
        &self.policy
    }

    /// Validates and classifies three raw sides.
    ///
    /// # Errors
    ///
    /// Any validation error from [`validate`](Self::validate), then
    /// [`TriangleError::NotATriangle`] if the strict triangle inequality fails.
    pub fn classify<'a>(
        &self,
        a: impl Into<RawSide<'a>>,
        b: impl Into<RawSide<'a>>,
        c: impl Into<RawSide<'a>>,
    ) -> TriangleResult<Classification> {
        let sides = self.validate(a, b, c)?;
        self.classify_sides(sides)
    }

    /// Runs only the validation stage.
    ///
    /// # Errors
    ///
    /// See [`ValidatedSides::new`].
    pub fn validate<'a>(
        &self,
        a: impl Into<RawSide<'a>>,
        b: impl Into<RawSide<'a>>,
        c: impl Into<RawSide<'a>>,
    ) -> TriangleResult<ValidatedSides> {
        ValidatedSides::new([a.into(), b.into(), c.into()], &self.policy).inspect_err(|err| {
            debug!(
                kind = err.kind().as_str(),
                side = ?err.side(),
                "rejected triangle input"
            );
        })
    }

    /// Runs only the geometric stage on already validated sides.
    ///
    /// Shape comparisons use the sides in argument order; the right-angle
    /// test uses them sorted.
    ///
    /// # Errors
    ///
    /// [`TriangleError::NotATriangle`] for sides violating the strict
    /// triangle inequality, degenerate triples included.
    pub fn classify_sides(&self, sides: ValidatedSides) -> TriangleResult<Classification> {
        if !sides.satisfies_triangle_inequality() {
            debug!(sides = ?sides.as_array(), "sides do not form a triangle");
            return Err(TriangleError::NotATriangle);
        }

        let shape = self.shape_of(&sides);
        let sorted = sides.sorted();
        let right = self
            .policy
            .is_pythagorean(sorted.smallest(), sorted.middle(), sorted.largest());

        let classification = Classification::new(shape, right);
        trace!(sides = ?sides.as_array(), %classification, "classified triangle");
        Ok(classification)
    }

    fn shape_of(&self, sides: &ValidatedSides) -> Shape {
        let eq = |x, y| self.policy.approx_eq(x, y);
        let [a, b, c] = sides.as_array();

        if eq(a, b) && eq(b, c) {
            Shape::Equilateral
        } else if eq(a, b) || eq(b, c) || eq(a, c) {
            Shape::Isosceles
        } else {
            Shape::Scalene
        }
    }
}

/// Classifies three raw sides with the default [`TolerancePolicy`].
///
/// # Errors
///
/// Returns the highest-precedence [`TriangleError`] for invalid input.
///
/// # Examples
///
/// ```
/// use trishape::{classify, ErrorKind};
///
/// assert_eq!(classify(3, 4, 5).unwrap().to_string(), "Scalene Right");
/// assert_eq!(classify(1, 2, 3).unwrap_err().kind(), ErrorKind::NotATriangle);
/// assert_eq!(classify(0, 5, 5).unwrap_err().kind(), ErrorKind::NonPositiveInput);
/// ```
pub fn classify<'a>(
    a: impl Into<RawSide<'a>>,
    b: impl Into<RawSide<'a>>,
    c: impl Into<RawSide<'a>>,
) -> TriangleResult<Classification> {
    Classifier::default().classify(a, b, c)
}

/// Anything that can hand over three raw side lengths
pub trait TriangleSides<'a> {
    /// The three sides in argument order
    fn raw_sides(&self) -> [RawSide<'a>; 3];
}

impl<'a, A, B, C> TriangleSides<'a> for (A, B, C)
where
    A: Into<RawSide<'a>> + Copy,
    B: Into<RawSide<'a>> + Copy,
    C: Into<RawSide<'a>> + Copy,
{
    fn raw_sides(&self) -> [RawSide<'a>; 3] {
        [self.0.into(), self.1.into(), self.2.into()]
    }
}

impl<'a, T> TriangleSides<'a> for [T; 3]
where
    T: Into<RawSide<'a>> + Copy,
{
    fn raw_sides(&self) -> [RawSide<'a>; 3] {
        self.map(Into::into)
    }
}

/// Extension methods for classifying any [`TriangleSides`].
///
/// Automatically implemented for every type implementing [`TriangleSides`].
///
/// ```
/// use trishape::{Shape, TriangleAnalysis};
///
/// assert_eq!((5, 5, 8).classify().map(|c| c.shape), Ok(Shape::Isosceles));
/// assert!([1.0, 1.0, 2f64.sqrt()].is_right_triangle());
/// assert!(!(1, 2, 3).is_triangle());
/// ```
pub trait TriangleAnalysis<'a>: TriangleSides<'a> {
    /// Classifies with the default policy
    ///
    /// # Errors
    ///
    /// See [`classify`](crate::classify).
    fn classify(&self) -> TriangleResult<Classification> {
        self.classify_with(&Classifier::default())
    }

    /// Classifies with the given classifier
    ///
    /// # Errors
    ///
    /// See [`Classifier::classify`].
    fn classify_with(&self, classifier: &Classifier) -> TriangleResult<Classification> {
        let [a, b, c] = self.raw_sides();
        classifier.classify(a, b, c)
    }

    /// Returns true if the sides are valid and form a non-degenerate triangle
    #[must_use]
    fn is_triangle(&self) -> bool {
        self.classify().is_ok()
    }

    /// Returns true if the sides form a right triangle
    #[must_use]
    fn is_right_triangle(&self) -> bool {
        self.classify().is_ok_and(Classification::is_right)
    }
}

impl<'a, T: TriangleSides<'a> + ?Sized> TriangleAnalysis<'a> for T {}
