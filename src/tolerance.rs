//! Numeric tolerances shared by validation and classification.

/// Pairwise side-equality threshold used for shape classification
pub const EQUALITY_EPSILON: f64 = 1e-10;

/// Base threshold for the right-angle test, scaled by the largest side squared
pub const RIGHT_ANGLE_EPSILON: f64 = 1e-10;

/// Largest accepted side length
pub const MAX_SIDE_LENGTH: f64 = 1e10;

/// Immutable set of tolerances applied by a [`Classifier`](crate::Classifier).
///
/// # Example
///
/// ```
/// use trishape::{TolerancePolicy, EQUALITY_EPSILON};
///
/// let policy = TolerancePolicy::default();
/// assert!((policy.equality_epsilon - EQUALITY_EPSILON).abs() < f64::EPSILON);
///
/// // A looser policy for measured, noisy lengths
/// let loose = TolerancePolicy::default().with_equality_epsilon(1e-3);
/// assert!(loose.approx_eq(2.0, 2.0005));
/// assert!(!policy.approx_eq(2.0, 2.0005));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TolerancePolicy {
    /// Two sides closer than this are considered equal.
    pub equality_epsilon: f64,

    /// Base epsilon of the adaptive right-angle tolerance.
    pub right_angle_epsilon: f64,

    /// Inputs above this magnitude are rejected.
    pub max_side_length: f64,
}

impl Default for TolerancePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl TolerancePolicy {
    /// Policy built from [`EQUALITY_EPSILON`], [`RIGHT_ANGLE_EPSILON`] and
    /// [`MAX_SIDE_LENGTH`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            equality_epsilon: EQUALITY_EPSILON,
            right_angle_epsilon: RIGHT_ANGLE_EPSILON,
            max_side_length: MAX_SIDE_LENGTH,
        }
    }

    /// Set the equality epsilon.
    #[must_use]
    pub const fn with_equality_epsilon(mut self, epsilon: f64) -> Self {
        self.equality_epsilon = epsilon;
        self
    }

    /// Set the base right-angle epsilon.
    #[must_use]
    pub const fn with_right_angle_epsilon(mut self, epsilon: f64) -> Self {
        self.right_angle_epsilon = epsilon;
        self
    }

    /// Set the maximum accepted side length.
    #[must_use]
    pub const fn with_max_side_length(mut self, max: f64) -> Self {
        self.max_side_length = max;
        self
    }

    /// Returns true if `x` and `y` differ by strictly less than the equality epsilon
    #[inline]
    #[must_use]
    pub fn approx_eq(&self, x: f64, y: f64) -> bool {
        distance(x, y) < self.equality_epsilon
    }

    /// Tolerance for `|s1² + s2² - c²|` given the largest side `c`.
    ///
    /// Grows with `c²` so that 3-4-5 and 300-400-500 are judged alike, but
    /// never drops below the base epsilon for tiny triangles.
    #[inline]
    #[must_use]
    pub fn right_angle_tolerance(&self, largest: f64) -> f64 {
        let scaled = self.right_angle_epsilon * largest * largest;
        self.right_angle_epsilon.max(scaled)
    }

    /// Returns true if the sorted sides satisfy the Pythagorean relation
    /// within [`right_angle_tolerance`](Self::right_angle_tolerance)
    #[must_use]
    pub fn is_pythagorean(&self, smallest: f64, middle: f64, largest: f64) -> bool {
        let legs = smallest * smallest + middle * middle;
        let hypotenuse = largest * largest;
        distance(legs, hypotenuse) < self.right_angle_tolerance(largest)
    }
}

// Absolute difference of two floats.
#[inline]
fn distance(x: f64, y: f64) -> f64 {
    if x >= y { x - y } else { y - x }
}
