//! Functor type class - structure-preserving maps over containers.
//!
//! A container `Functor` can have a function applied to every element it
//! holds while keeping its shape. [`mapped`](crate::optics::mapped) rebuilds a
//! structure with exactly this map, so an implementation here is all a
//! container needs to become the target of a setter.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lenticular::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let doubled: Vec<i32> = vec![1, 2, 3].fmap(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use std::collections::VecDeque;

use super::higher::TypeConstructor;

/// A type class for containers that can have a function mapped over their
/// elements.
///
/// The function is `FnMut` because multi-element containers call it once per
/// element. Elements are visited in the container's natural order.
pub trait Functor: TypeConstructor {
    /// Applies a function to every element, preserving the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenticular::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<T> Functor for VecDeque<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> VecDeque<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> B,
    {
        Box::new(function(*self))
    }
}
