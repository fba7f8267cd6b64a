//! Foldable type class - ordered reduction of containers.
//!
//! A `Foldable` container can have its elements reduced, in natural order,
//! into a single summary value. [`folded`](crate::optics::folded) combines
//! the per-element results of a fold with exactly this reduction.
//!
//! # Examples
//!
//! ```rust
//! use lenticular::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let none_value: Option<i32> = None;
//! let result = none_value.fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 5);
//! ```

use std::collections::VecDeque;

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for containers that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold in natural element order
///
/// # Provided Methods
///
/// - `fold_map`: Map each element to a `Monoid` and combine results in order
///
/// # Examples
///
/// ```rust
/// use lenticular::typeclass::{Foldable, Sum};
///
/// let values = vec![1, 2, 3, 4, 5];
/// let sum: Sum<i32> = values.fold_map(Sum);
/// assert_eq!(sum.0, 15);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenticular::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// An empty container yields `M::empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenticular::typeclass::{Foldable, Product};
    ///
    /// let product: Product<i32> = vec![1, 2, 3, 4].fold_map(Product);
    /// assert_eq!(product.0, 24);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }
}

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(value) => function(init, value),
            Err(_) => init,
        }
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }
}

impl<T> Foldable for VecDeque<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }
}

impl<T> Foldable for Box<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        function(init, *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn vec_fold_left_is_left_associative() {
        let result = vec!["a", "b", "c"].fold_left(String::new(), |mut accumulator, element| {
            accumulator.push_str(element);
            accumulator
        });
        assert_eq!(result, "abc");
    }

    #[rstest]
    #[case(Some(10), 15)]
    #[case(None, 5)]
    fn option_fold_left(#[case] input: Option<i32>, #[case] expected: i32) {
        assert_eq!(input.fold_left(5, |accumulator, element| accumulator + element), expected);
    }

    #[rstest]
    fn result_error_folds_to_initial() {
        let failure: Result<i32, &str> = Err("nope");
        assert_eq!(failure.fold_left(7, |accumulator, element| accumulator + element), 7);
    }

    #[rstest]
    fn fold_map_on_empty_yields_neutral_element() {
        let empty: Vec<i32> = Vec::new();
        let total: Sum<i32> = empty.fold_map(Sum);
        assert_eq!(total, Sum(0));
    }

    #[rstest]
    fn fold_map_combines_in_order() {
        let letters = VecDeque::from(vec!['x', 'y', 'z']);
        let combined: String = letters.fold_map(|letter| letter.to_string());
        assert_eq!(combined, "xyz");
    }
}
