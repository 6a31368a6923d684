//! Validation stage: raw inputs to checked side lengths.
//!
//! Each check runs over all three sides before the next check starts, so the
//! reported error depends on check order first and argument order second.

use crate::error::{TriangleError, TriangleResult};
use crate::input::{RawSide, SidePosition};
use crate::tolerance::TolerancePolicy;

/// Three finite, positive side lengths no larger than the policy's maximum.
///
/// Only constructible through validation, so holding one is proof the checks
/// passed. Sides keep their argument order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidatedSides {
    sides: [f64; 3],
}

impl ValidatedSides {
    /// Runs every validation check against `raw` with the given policy.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in this order:
    /// [`NonNumericInput`](TriangleError::NonNumericInput) (also for NaN),
    /// [`InfiniteInput`](TriangleError::InfiniteInput),
    /// [`NonPositiveInput`](TriangleError::NonPositiveInput),
    /// [`MagnitudeTooLarge`](TriangleError::MagnitudeTooLarge).
    ///
    /// # Examples
    ///
    /// ```
    /// use trishape::{RawSide, SidePosition, TolerancePolicy, TriangleError, ValidatedSides};
    ///
    /// let policy = TolerancePolicy::default();
    /// let sides = ValidatedSides::new([3.into(), "4".into(), 5.0.into()], &policy).unwrap();
    /// assert_eq!(sides.as_array(), [3.0, 4.0, 5.0]);
    ///
    /// let err = ValidatedSides::new([1.into(), RawSide::Missing, 0.into()], &policy);
    /// assert_eq!(err, Err(TriangleError::NonNumericInput { side: SidePosition::B }));
    /// ```
    pub fn new(raw: [RawSide<'_>; 3], policy: &TolerancePolicy) -> TriangleResult<Self> {
        let values = coerce_all(raw)?;
        reject_first(&values, f64::is_nan, |side| TriangleError::NonNumericInput { side })?;
        reject_first(&values, f64::is_infinite, |side| TriangleError::InfiniteInput { side })?;
        reject_first(&values, |v| v <= 0.0, |side| TriangleError::NonPositiveInput { side })?;
        reject_first(
            &values,
            |v| v > policy.max_side_length,
            |side| TriangleError::MagnitudeTooLarge { side },
        )?;
        Ok(Self { sides: values })
    }

    /// First side
    #[inline]
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.sides[0]
    }

    /// Second side
    #[inline]
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.sides[1]
    }

    /// Third side
    #[inline]
    #[must_use]
    pub const fn c(&self) -> f64 {
        self.sides[2]
    }

    /// Sides in argument order
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        self.sides
    }

    /// Side at the given argument position
    #[inline]
    #[must_use]
    pub const fn get(&self, position: SidePosition) -> f64 {
        self.sides[position.index()]
    }

    /// Longest side
    #[must_use]
    pub fn largest(&self) -> f64 {
        self.sorted().largest()
    }

    /// Sides reordered ascending
    #[must_use]
    pub fn sorted(&self) -> SortedSides {
        let mut sides = self.sides;
        sides.sort_unstable_by(f64::total_cmp);
        SortedSides { sides }
    }

    /// Returns true if every pair of sides sums to strictly more than the third.
    ///
    /// Degenerate triples such as 1-2-3 fail.
    #[must_use]
    pub fn satisfies_triangle_inequality(&self) -> bool {
        let [a, b, c] = self.sides;
        a + b > c && a + c > b && b + c > a
    }
}

/// [`ValidatedSides`] in ascending order: `smallest <= middle <= largest`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortedSides {
    sides: [f64; 3],
}

impl SortedSides {
    /// Shortest side
    #[inline]
    #[must_use]
    pub const fn smallest(&self) -> f64 {
        self.sides[0]
    }

    /// Middle side
    #[inline]
    #[must_use]
    pub const fn middle(&self) -> f64 {
        self.sides[1]
    }

    /// Longest side
    #[inline]
    #[must_use]
    pub const fn largest(&self) -> f64 {
        self.sides[2]
    }

    /// Sides in ascending order
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        self.sides
    }
}

fn coerce_all(raw: [RawSide<'_>; 3]) -> TriangleResult<[f64; 3]> {
    let mut values = [0.0; 3];
    for (position, (slot, side)) in SidePosition::ALL.into_iter().zip(values.iter_mut().zip(raw)) {
        *slot = side
            .coerce()
            .ok_or(TriangleError::NonNumericInput { side: position })?;
    }
    Ok(values)
}

fn reject_first(
    values: &[f64; 3],
    invalid: impl Fn(f64) -> bool,
    error: impl FnOnce(SidePosition) -> TriangleError,
) -> TriangleResult<()> {
    match SidePosition::ALL
        .into_iter()
        .find(|&position| invalid(values[position.index()]))
    {
        Some(position) => Err(error(position)),
        None => Ok(()),
    }
}
