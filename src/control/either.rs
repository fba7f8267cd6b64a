//! Either type - a value that is one of two cases.
//!
//! `Either<L, R>` is the sum type the optics speak in. A prism classifies a
//! structure into `Right(focus)` when the case it targets is present, or
//! `Left(structure)` when the structure is already in its final form, and
//! [`traverse_left`](crate::optics::traverse_left) /
//! [`traverse_right`](crate::optics::traverse_right) focus one of its
//! payloads.
//!
//! # Examples
//!
//! ```rust
//! use lenticular::control::Either;
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! assert_eq!(right.map_right(|s| s.len()).swap(), Either::Left(5));
//! ```

use std::fmt;

use crate::typeclass::{Foldable, Functor, TypeConstructor};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Unlike `Result`, neither case means failure: a non-matching prism
/// reports `Left` with a perfectly valid structure.
///
/// # Examples
///
/// ```rust
/// use lenticular::control::Either;
///
/// let value: Either<String, i32> = Either::Right(42);
/// assert_eq!(value.map_right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left case.
    Left(L),
    /// The right case.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Applies a function to the left value, passing a right value through.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, passing a left value through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenticular::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_right(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Swaps the two cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenticular::control::Either;
    ///
    /// assert_eq!(Either::<i32, char>::Left(1).swap(), Either::Right(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// Container Type Classes (right-biased)
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnMut(R) -> B,
    {
        self.map_right(function)
    }
}

impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }
}
