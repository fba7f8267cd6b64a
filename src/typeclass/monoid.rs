//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is what a fold over an optic needs: `empty` is the answer when
//! there are no foci, and `combine` merges the answers for several foci.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lenticular::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert!(Vec::<i32>::empty().is_empty());
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, First, Last, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenticular::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenticular::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

// `Default` is zero for numbers, so the multiplicative identity is spelled out.
macro_rules! impl_product_monoid {
    ($one:literal => $($number:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$number> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_product_monoid!(1.0 => f32, f64);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn product_identity_for_integers_and_floats() {
        assert_eq!(Product::<u64>::empty(), Product(1));
        assert_eq!(Product::<f64>::empty(), Product(1.0));
    }

    #[rstest]
    fn bounded_identities() {
        assert_eq!(Max::<i16>::empty(), Max(i16::MIN));
        assert_eq!(Min::<i16>::empty(), Min(i16::MAX));
    }

    #[rstest]
    fn selection_identities_are_absent() {
        assert_eq!(First::<char>::empty(), First(None));
        assert_eq!(Last::<char>::empty(), Last(None));
    }

    #[rstest]
    fn tuple_identity() {
        let identity: (Sum<i32>, String) = Monoid::empty();
        assert_eq!(identity, (Sum(0), String::new()));
    }

    #[rstest]
    fn combine_all_preserves_order() {
        let combined = Vec::combine_all(vec![vec![1], vec![2, 3], vec![]]);
        assert_eq!(combined, vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn sum_identity_laws(value in any::<i32>()) {
            prop_assert_eq!(Sum::empty().combine(Sum(value)), Sum(value));
            prop_assert_eq!(Sum(value).combine(Sum::empty()), Sum(value));
        }

        #[test]
        fn first_identity_laws(value in proptest::option::of(any::<u8>())) {
            prop_assert_eq!(First::empty().combine(First(value)), First(value));
            prop_assert_eq!(First(value).combine(First::empty()), First(value));
        }

        #[test]
        fn max_identity_laws(value in any::<u8>()) {
            prop_assert_eq!(Max::empty().combine(Max(value)), Max(value));
        }
    }
}
