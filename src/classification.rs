use core::cmp::Ordering;
use core::fmt::{self, Display};
use core::str::FromStr;

use thiserror::Error;

/// Shape tag: the side-equality pattern of a triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Shape {
    /// All three sides equal
    Equilateral,
    /// Exactly one pair of equal sides
    Isosceles,
    /// No equal sides
    Scalene,
}

impl Shape {
    /// Returns the number of distinct side lengths minus one:
    /// Equilateral=0, Isosceles=1, Scalene=2
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Shape::Equilateral => 0,
            Shape::Isosceles => 1,
            Shape::Scalene => 2,
        }
    }

    /// Label used in classification output
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Equilateral => "Equilateral",
            Shape::Isosceles => "Isosceles",
            Shape::Scalene => "Scalene",
        }
    }

    /// Returns true if all sides are equal
    #[inline]
    #[must_use]
    pub const fn is_equilateral(self) -> bool {
        matches!(self, Shape::Equilateral)
    }

    /// Returns true if exactly two sides are equal
    #[inline]
    #[must_use]
    pub const fn is_isosceles(self) -> bool {
        matches!(self, Shape::Isosceles)
    }

    /// Returns true if no sides are equal
    #[inline]
    #[must_use]
    pub const fn is_scalene(self) -> bool {
        matches!(self, Shape::Scalene)
    }
}

impl PartialOrd for Shape {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Shape {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl From<Shape> for u8 {
    #[inline]
    fn from(shape: Shape) -> Self {
        shape.rank()
    }
}

impl From<Shape> for &'static str {
    #[inline]
    fn from(shape: Shape) -> Self {
        shape.as_str()
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when converting an invalid rank to [`Shape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid shape value: {0} (expected 0, 1, or 2)")]
pub struct InvalidShapeValue(pub u8);

impl TryFrom<u8> for Shape {
    type Error = InvalidShapeValue;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Equilateral),
            1 => Ok(Self::Isosceles),
            2 => Ok(Self::Scalene),
            n => Err(InvalidShapeValue(n)),
        }
    }
}

/// Error returned when text is not a known shape or classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized triangle label")]
pub struct ParseClassificationError;

impl FromStr for Shape {
    type Err = ParseClassificationError;

    /// Parses a shape label, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Equilateral, Self::Isosceles, Self::Scalene]
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseClassificationError)
    }
}

/// Successful outcome: a shape tag plus an independent right-angle flag.
///
/// Displays as the canonical label, e.g. `"Scalene"` or `"Isosceles Right"`.
///
/// # Examples
///
/// ```
/// use trishape::{Classification, Shape};
///
/// let c = Classification::new(Shape::Isosceles, true);
/// assert_eq!(c.to_string(), "Isosceles Right");
/// assert_eq!("isosceles right".parse(), Ok(c));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Classification {
    /// Side-equality pattern
    pub shape: Shape,
    /// Whether the sides satisfy the Pythagorean relation within tolerance
    pub right: bool,
}

impl Classification {
    /// Creates a classification from its two facets
    #[inline]
    pub const fn new(shape: Shape, right: bool) -> Self {
        Self { shape, right }
    }

    /// The shape tag
    #[inline]
    pub const fn shape(self) -> Shape {
        self.shape
    }

    /// Returns true if the triangle is a right triangle
    #[inline]
    #[must_use]
    pub const fn is_right(self) -> bool {
        self.right
    }

    /// All six outcomes, in rank order with the right variant after each shape
    pub const ALL: [Self; 6] = [
        Self::new(Shape::Equilateral, false),
        Self::new(Shape::Equilateral, true),
        Self::new(Shape::Isosceles, false),
        Self::new(Shape::Isosceles, true),
        Self::new(Shape::Scalene, false),
        Self::new(Shape::Scalene, true),
    ];
}

impl From<Classification> for Shape {
    #[inline]
    fn from(classification: Classification) -> Self {
        classification.shape
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.right {
            write!(f, "{} Right", self.shape)
        } else {
            write!(f, "{}", self.shape)
        }
    }
}

impl FromStr for Classification {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let shape = words.next().ok_or(ParseClassificationError)?.parse()?;
        let right = match words.next() {
            None => false,
            Some(word) if word.eq_ignore_ascii_case("right") => true,
            Some(_) => return Err(ParseClassificationError),
        };
        if words.next().is_some() {
            return Err(ParseClassificationError);
        }
        Ok(Self::new(shape, right))
    }
}
