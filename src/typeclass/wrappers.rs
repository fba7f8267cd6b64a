//! Newtype wrappers selecting a combination strategy.
//!
//! The same underlying type can be combined in several ways. These wrappers
//! pick one, so that a fold such as
//! [`fold_map_of`](crate::optics::fold_map_of) knows how to merge the
//! per-focus results:
//!
//! - [`Sum`]: Addition (identity: 0)
//! - [`Product`]: Multiplication (identity: 1)
//! - [`Max`]: Maximum (identity: type minimum)
//! - [`Min`]: Minimum (identity: type maximum)
//! - [`First`]: Leftmost present value (identity: absent)
//! - [`Last`]: Rightmost present value (identity: absent)
//!
//! The [`Bounded`] trait supplies the extreme values `Max` and `Min` need
//! for their identity elements.

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive monoid.
///
/// # Examples
///
/// ```rust
/// use lenticular::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that represents the multiplicative monoid.
///
/// # Examples
///
/// ```rust
/// use lenticular::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i32>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Max / Min Wrappers
// =============================================================================

/// A newtype wrapper keeping the larger of two values.
///
/// # Examples
///
/// ```rust
/// use lenticular::typeclass::{Max, Monoid, Semigroup};
///
/// assert_eq!(Max(3).combine(Max(7)), Max(7));
/// assert_eq!(Max::<u8>::empty(), Max(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max<A>(pub A);

impl<A> Max<A> {
    /// Creates a new `Max` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Max` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// A newtype wrapper keeping the smaller of two values.
///
/// # Examples
///
/// ```rust
/// use lenticular::typeclass::{Min, Monoid, Semigroup};
///
/// assert_eq!(Min(3).combine(Min(7)), Min(3));
/// assert_eq!(Min::<u8>::empty(), Min(255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min<A>(pub A);

impl<A> Min<A> {
    /// Creates a new `Min` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Min` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

// =============================================================================
// First / Last Wrappers
// =============================================================================

/// A newtype wrapper keeping the leftmost present value.
///
/// Folding with `First` reads the first focus of an optic, or nothing when
/// there is none.
///
/// # Examples
///
/// ```rust
/// use lenticular::typeclass::{First, Monoid, Semigroup};
///
/// assert_eq!(First(Some(1)).combine(First(Some(2))), First(Some(1)));
/// assert_eq!(First(None).combine(First(Some(2))), First(Some(2)));
/// assert_eq!(First::<i32>::empty(), First(None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct First<A>(pub Option<A>);

impl<A> First<A> {
    /// Creates a `First` holding a present value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(Some(value))
    }

    /// Consumes the `First` and returns the held value, if any.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

/// A newtype wrapper keeping the rightmost present value.
///
/// # Examples
///
/// ```rust
/// use lenticular::typeclass::{Last, Semigroup};
///
/// assert_eq!(Last(Some(1)).combine(Last(Some(2))), Last(Some(2)));
/// assert_eq!(Last(Some(1)).combine(Last(None)), Last(Some(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last<A>(pub Option<A>);

impl<A> Last<A> {
    /// Creates a `Last` holding a present value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(Some(value))
    }

    /// Consumes the `Last` and returns the held value, if any.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

// =============================================================================
// Bounded Trait
// =============================================================================

/// A trait for types with a minimum and maximum value.
///
/// - `Max<A>` uses `A::MIN_VALUE` as its identity
/// - `Min<A>` uses `A::MAX_VALUE` as its identity
///
/// # Examples
///
/// ```rust
/// use lenticular::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Score::MAX_VALUE.0, 100);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Bounded for $integer {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

impl_bounded_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_from_wraps_value() {
        let wrapped: Sum<i32> = 42.into();
        assert_eq!(wrapped.into_inner(), 42);
    }

    #[rstest]
    fn product_new_and_into_inner() {
        assert_eq!(Product::new(6).into_inner(), 6);
    }

    #[rstest]
    fn first_and_last_hold_present_values() {
        assert_eq!(First::new('a').into_inner(), Some('a'));
        assert_eq!(Last::new('z').into_inner(), Some('z'));
    }

    #[rstest]
    #[case(i8::MIN, i8::MAX)]
    fn bounded_i8(#[case] minimum: i8, #[case] maximum: i8) {
        assert_eq!(i8::MIN_VALUE, minimum);
        assert_eq!(i8::MAX_VALUE, maximum);
    }

    #[rstest]
    fn bounded_char_and_bool() {
        assert_eq!(char::MIN_VALUE, '\0');
        assert!(bool::MAX_VALUE);
    }

    #[rstest]
    fn max_and_min_unwrap() {
        assert_eq!(Max::new(3).into_inner(), 3);
        assert_eq!(Min::new(4).into_inner(), 4);
    }
}
