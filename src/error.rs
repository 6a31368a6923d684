//! Error types for triangle classification.

use core::fmt::{self, Display};

use thiserror::Error;

use crate::input::SidePosition;

/// Result type alias for classification operations.
pub type TriangleResult<T> = Result<T, TriangleError>;

/// Reasons a set of side lengths cannot be classified.
///
/// Variants are listed in check order: when several inputs are invalid at
/// once, the earliest kind wins regardless of argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriangleError {
    /// A side is not a number, or is NaN.
    #[error("Invalid input: Sides must be numeric")]
    NonNumericInput {
        /// First offending argument
        side: SidePosition,
    },

    /// A side is positive or negative infinity.
    #[error("Invalid input: Sides cannot be infinite")]
    InfiniteInput {
        /// First offending argument
        side: SidePosition,
    },

    /// A side is zero or negative.
    #[error("Invalid input: All sides must be positive")]
    NonPositiveInput {
        /// First offending argument
        side: SidePosition,
    },

    /// A side exceeds the maximum accepted length.
    #[error("Invalid input: Side lengths too large")]
    MagnitudeTooLarge {
        /// First offending argument
        side: SidePosition,
    },

    /// The sides are valid lengths but violate the strict triangle inequality.
    #[error("Not a triangle")]
    NotATriangle,
}

impl TriangleError {
    /// The fieldless kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NonNumericInput { .. } => ErrorKind::NonNumericInput,
            Self::InfiniteInput { .. } => ErrorKind::InfiniteInput,
            Self::NonPositiveInput { .. } => ErrorKind::NonPositiveInput,
            Self::MagnitudeTooLarge { .. } => ErrorKind::MagnitudeTooLarge,
            Self::NotATriangle => ErrorKind::NotATriangle,
        }
    }

    /// The argument that failed validation, if the error came from validation.
    #[must_use]
    pub const fn side(&self) -> Option<SidePosition> {
        match self {
            Self::NonNumericInput { side }
            | Self::InfiniteInput { side }
            | Self::NonPositiveInput { side }
            | Self::MagnitudeTooLarge { side } => Some(*side),
            Self::NotATriangle => None,
        }
    }

    /// Returns true if the error was raised while validating individual sides
    #[inline]
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::NotATriangle)
    }
}

/// Kind of a [`TriangleError`], without its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Value is not a number or is NaN
    NonNumericInput,
    /// Value is infinite
    InfiniteInput,
    /// Value is zero or negative
    NonPositiveInput,
    /// Value exceeds the magnitude bound
    MagnitudeTooLarge,
    /// Strict triangle inequality fails
    NotATriangle,
}

impl ErrorKind {
    /// Check-order rank, 1 for the check that runs first
    #[inline]
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::NonNumericInput => 1,
            Self::InfiniteInput => 2,
            Self::NonPositiveInput => 3,
            Self::MagnitudeTooLarge => 4,
            Self::NotATriangle => 5,
        }
    }

    /// Stable identifier of the kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonNumericInput => "NonNumericInput",
            Self::InfiniteInput => "InfiniteInput",
            Self::NonPositiveInput => "NonPositiveInput",
            Self::MagnitudeTooLarge => "MagnitudeTooLarge",
            Self::NotATriangle => "NotATriangle",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TriangleError> for ErrorKind {
    #[inline]
    fn from(error: TriangleError) -> Self {
        error.kind()
    }
}
