//! The constant context - running an optic accumulates a result.
//!
//! `Const<R, A>` holds an `R` and only pretends to hold an `A`. Mapping over
//! the pretended value therefore does nothing at all: the function is
//! dropped without being called. This no-op is the one mechanism every read
//! goes through. An optic body always ends by rebuilding its structure, and
//! in this context the rebuild step is skipped, leaving the accumulated
//! result untouched.

use std::fmt;
use std::marker::PhantomData;

use super::{Context, ContextApplicative, ContextFunctor};
use crate::typeclass::Monoid;

/// A carrier holding an accumulated `R` in place of a nominal `A`.
///
/// # Examples
///
/// ```rust
/// use lenticular::context::Const;
///
/// let held: Const<&str, u64> = Const::new("result");
/// let retagged: Const<&str, char> = held.retag();
/// assert_eq!(retagged.into_inner(), "result");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "R: serde::Serialize", deserialize = "R: serde::Deserialize<'de>"))
)]
pub struct Const<R, A> {
    result: R,
    #[cfg_attr(feature = "serde", serde(skip))]
    nominal: PhantomData<fn() -> A>,
}

impl<R, A> Const<R, A> {
    /// Creates a `Const` holding `result`.
    #[inline]
    pub const fn new(result: R) -> Self {
        Self {
            result,
            nominal: PhantomData,
        }
    }

    /// Consumes the `Const` and returns the held result.
    #[inline]
    pub fn into_inner(self) -> R {
        self.result
    }

    /// Returns a reference to the held result.
    #[inline]
    pub const fn as_inner(&self) -> &R {
        &self.result
    }

    /// Changes the nominal type, keeping the held result.
    #[inline]
    pub fn retag<B>(self) -> Const<R, B> {
        Const::new(self.result)
    }
}

// Manual impls: the nominal `A` must not pick up derive bounds.
impl<R: Clone, A> Clone for Const<R, A> {
    fn clone(&self) -> Self {
        Self::new(self.result.clone())
    }
}

impl<R: Copy, A> Copy for Const<R, A> {}

impl<R: PartialEq, A> PartialEq for Const<R, A> {
    fn eq(&self, other: &Self) -> bool {
        self.result == other.result
    }
}

impl<R: Eq, A> Eq for Const<R, A> {}

impl<R: fmt::Debug, A> fmt::Debug for Const<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.result).finish()
    }
}

impl<R: Default, A> Default for Const<R, A> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

/// Brand of the [`Const`] context accumulating an `R`.
pub struct ConstContext<R>(PhantomData<fn() -> R>);

impl<R> Context for ConstContext<R> {
    type Wrapped<X> = Const<R, X>;
}

impl<R> ContextFunctor for ConstContext<R> {
    /// Discards `function` and keeps the held result.
    #[inline]
    fn map<A, B, G>(wrapped: Const<R, A>, _function: G) -> Const<R, B>
    where
        G: FnOnce(A) -> B,
    {
        wrapped.retag()
    }
}

impl<R: Monoid> ContextApplicative for ConstContext<R> {
    /// Ignores `value`; nothing has been accumulated yet.
    #[inline]
    fn pure<A>(_value: A) -> Const<R, A> {
        Const::new(R::empty())
    }

    #[inline]
    fn map2<A, B, C, G>(first: Const<R, A>, second: Const<R, B>, _function: G) -> Const<R, C>
    where
        G: FnOnce(A, B) -> C,
    {
        Const::new(first.result.combine(second.result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn map_never_calls_the_function() {
        let calls = Cell::new(0);
        let held: Const<i32, i32> = Const::new(7);
        let mapped = ConstContext::<i32>::map(held, |value: i32| {
            calls.set(calls.get() + 1);
            value.to_string()
        });
        assert_eq!(mapped.into_inner(), 7);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn pure_is_the_neutral_element() {
        let lifted: Const<Vec<char>, u8> = ConstContext::<Vec<char>>::pure(99);
        assert!(lifted.into_inner().is_empty());
    }

    #[rstest]
    fn map2_combines_in_visitation_order() {
        let first: Const<Vec<i32>, ()> = Const::new(vec![1, 2]);
        let second: Const<Vec<i32>, ()> = Const::new(vec![3]);
        let combined: Const<Vec<i32>, ()> =
            ConstContext::<Vec<i32>>::map2(first, second, |(), ()| ());
        assert_eq!(combined.into_inner(), vec![1, 2, 3]);
    }

    #[rstest]
    fn map2_never_calls_the_function() {
        let combined: Const<Sum<i32>, String> = ConstContext::<Sum<i32>>::map2(
            Const::<Sum<i32>, u8>::new(Sum(2)),
            Const::<Sum<i32>, u8>::new(Sum(3)),
            |_, _| -> String { unreachable!("Const never produces a nominal value") },
        );
        assert_eq!(combined, Const::new(Sum(5)));
    }

    #[rstest]
    fn clone_and_debug_ignore_the_nominal_type() {
        let held: Const<String, std::sync::Mutex<u8>> = Const::new("x".to_string());
        let cloned = held.clone();
        assert_eq!(format!("{cloned:?}"), "Const(\"x\")");
        assert_eq!(held.as_inner(), "x");
    }
}
