use alloc::borrow::Cow;
use core::fmt::{self, Display};

/// A side length of unknown trustworthiness.
///
/// Callers rarely build this directly: every primitive number, `&str`,
/// `&String` and `Option<T>` converts into it, so
/// `classify(3, "4", 5.0)` just works.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawSide<'a> {
    /// A genuine number, possibly NaN or infinite
    Number(f64),
    /// Text that may or may not hold a number
    Text(&'a str),
    /// An absent value
    Missing,
    /// Anything else; never coerces to a number
    Other,
}

impl RawSide<'_> {
    /// Interprets the value as a float.
    ///
    /// Text is trimmed first and accepts the same grammar as
    /// [`f64::from_str`](core::str::FromStr), including `inf`, `infinity`
    /// and `nan` in any case. Single underscores between digits are allowed
    /// as separators (`"1_000"`). NaN and infinities are returned as-is; rejecting
    /// them is the job of later validation checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use trishape::RawSide;
    ///
    /// assert_eq!(RawSide::Text(" 4.5 ").coerce(), Some(4.5));
    /// assert_eq!(RawSide::Text("1_000").coerce(), Some(1000.0));
    /// assert_eq!(RawSide::Text("four").coerce(), None);
    /// assert_eq!(RawSide::Missing.coerce(), None);
    /// ```
    #[must_use]
    pub fn coerce(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Text(text) => without_digit_separators(text.trim())?.parse().ok(),
            Self::Missing | Self::Other => None,
        }
    }

    /// Returns true if the value is [`RawSide::Missing`]
    #[inline]
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Removes `_` separators, or returns `None` if any underscore is not
/// surrounded by ASCII digits.
fn without_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    let separated = bytes
        .iter()
        .enumerate()
        .filter(|&(_, &byte)| byte == b'_')
        .all(|(i, _)| {
            i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        });
    separated.then(|| Cow::Owned(text.replace('_', "")))
}

macro_rules! lossless_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawSide<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Number(f64::from(value))
                }
            }
        )*
    };
}

lossless_from!(f64, f32, i8, i16, i32, u8, u16, u32);

macro_rules! rounding_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawSide<'_> {
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

rounding_from!(i64, u64, i128, u128, isize, usize);

impl<'a> From<&'a str> for RawSide<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

#[cfg(feature = "std")]
impl<'a> From<&'a String> for RawSide<'a> {
    #[inline]
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl<'a, T: Into<RawSide<'a>>> From<Option<T>> for RawSide<'a> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Argument position of a side, used to report which input failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SidePosition {
    /// First argument
    A,
    /// Second argument
    B,
    /// Third argument
    C,
}

impl SidePosition {
    /// All positions in argument order
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Zero-based argument index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
}

impl Display for SidePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        };
        f.write_str(name)
    }
}
