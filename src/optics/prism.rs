//! Prisms: optics onto one case of a sum type.
//!
//! A prism is described by two functions:
//!
//! - `classify: S -> Either<T, A>` answers `Right(focus)` when the targeted
//!   case is present, or `Left(structure)` when it is not. The `Left` value
//!   is the final result already, with nothing left to rebuild.
//! - `build: B -> T` makes a structure from a focus alone.
//!
//! Run as a traversal, a prism has zero or one focus. Through the branching
//! machinery it additionally supports [`set_p`](super::set_p) (classify)
//! and [`get_p`](super::get_p) (build).
//!
//! # Laws
//!
//! ```text
//! set_p(p, get_p(p, b)) == Right(b)
//! set_p(p, s) == Right(a)  implies  get_p(p, a) == s
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lenticular::control::Either;
//! use lenticular::optics::{get_p, over, prism, set_p};
//!
//! // Focus non-negative integers as unsigned values.
//! let natural = prism(
//!     |n: u32| i64::from(n),
//!     |n: i64| match u32::try_from(n) {
//!         Ok(natural) => Either::Right(natural),
//!         Err(_) => Either::Left(n),
//!     },
//! );
//!
//! assert_eq!(set_p(&natural, 7), Either::Right(7_u32));
//! assert_eq!(set_p(&natural, -7), Either::Left(-7));
//! assert_eq!(get_p(&natural, 3_u32), 3_i64);
//! assert_eq!(over(&natural, |n: u32| n * 2, -7), -7);
//! ```

use std::fmt;

use super::choice::{Branching, Choice};
use super::optic::Optic;
use crate::context::ContextApplicative;
use crate::control::Either;

/// A prism built from a `build` and a `classify` function.
pub struct PrismFn<Bu, Cl> {
    build: Bu,
    classify: Cl,
}

impl<Bu, Cl> PrismFn<Bu, Cl> {
    /// Creates a prism from a `build` and a `classify` function.
    pub const fn new(build: Bu, classify: Cl) -> Self {
        Self { build, classify }
    }
}

impl<Bu: Clone, Cl: Clone> Clone for PrismFn<Bu, Cl> {
    fn clone(&self) -> Self {
        Self::new(self.build.clone(), self.classify.clone())
    }
}

impl<Bu: Copy, Cl: Copy> Copy for PrismFn<Bu, Cl> {}

impl<Bu, Cl> fmt::Debug for PrismFn<Bu, Cl> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("PrismFn").finish_non_exhaustive()
    }
}

impl<F, S, T, A, B, Bu, Cl> Optic<F, S, T, A, B> for PrismFn<Bu, Cl>
where
    F: ContextApplicative,
    Bu: Fn(B) -> T,
    Cl: Fn(S) -> Either<T, A>,
{
    fn run<K>(&self, source: S, mut processor: K) -> F::Wrapped<T>
    where
        K: FnMut(A) -> F::Wrapped<B>,
    {
        match (self.classify)(source) {
            Either::Right(focus) => F::map(processor(focus), &self.build),
            Either::Left(complete) => F::pure(complete),
        }
    }
}

impl<P, F, S, T, A, B, Bu, Cl> Branching<P, F, S, T, A, B> for PrismFn<Bu, Cl>
where
    P: Choice + 'static,
    F: ContextApplicative + 'static,
    F::Wrapped<B>: 'static,
    F::Wrapped<T>: 'static,
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    Bu: Fn(B) -> T + Clone + 'static,
    Cl: Fn(S) -> Either<T, A> + Clone + 'static,
{
    fn branch(&self, processor: P::Arrow<A, F::Wrapped<B>>) -> P::Arrow<S, F::Wrapped<T>> {
        let build = self.build.clone();
        P::dimap(
            P::right::<A, F::Wrapped<B>, T>(processor),
            self.classify.clone(),
            move |outcome: Either<T, F::Wrapped<B>>| match outcome {
                Either::Left(complete) => F::pure(complete),
                Either::Right(processed) => F::map(processed, &build),
            },
        )
    }
}

/// Creates a prism from `build` and `classify`.
///
/// `classify` answers `Right(focus)` for a match and `Left(structure)` for a
/// structure that is already final; `build` turns a new focus into a
/// structure.
pub const fn prism<S, T, A, B, Bu, Cl>(build: Bu, classify: Cl) -> PrismFn<Bu, Cl>
where
    Bu: Fn(B) -> T,
    Cl: Fn(S) -> Either<T, A>,
{
    PrismFn::new(build, classify)
}

/// The prism type of [`left_prism`].
pub type LeftPrism<A, B, C> =
    PrismFn<fn(B) -> Either<B, C>, fn(Either<A, C>) -> Either<Either<B, C>, A>>;

/// The prism type of [`right_prism`].
pub type RightPrism<C, A, B> =
    PrismFn<fn(B) -> Either<C, B>, fn(Either<C, A>) -> Either<Either<C, B>, A>>;

/// The prism type of [`just_prism`].
pub type JustPrism<A, B> = PrismFn<fn(B) -> Option<B>, fn(Option<A>) -> Either<Option<B>, A>>;

/// The prism type of [`nothing_prism`].
pub type NothingPrism<A> = PrismFn<fn(()) -> Option<A>, fn(Option<A>) -> Either<Option<A>, ()>>;

/// Returns the prism onto the payload of a `Left` value.
///
/// # Examples
///
/// ```rust
/// use lenticular::control::Either;
/// use lenticular::optics::{get_p, left_prism, set_p};
///
/// let left = left_prism::<i32, i32, char>();
/// assert_eq!(set_p(&left, Either::Left(1)), Either::Right(1));
/// assert_eq!(set_p(&left, Either::Right('c')), Either::Left(Either::Right('c')));
/// assert_eq!(get_p(&left, 2), Either::Left(2));
/// ```
pub fn left_prism<A, B, C>() -> LeftPrism<A, B, C> {
    PrismFn::new(Either::Left, |source: Either<A, C>| match source {
        Either::Left(focus) => Either::Right(focus),
        Either::Right(other) => Either::Left(Either::Right(other)),
    })
}

/// Returns the prism onto the payload of a `Right` value.
pub fn right_prism<C, A, B>() -> RightPrism<C, A, B> {
    PrismFn::new(Either::Right, |source: Either<C, A>| match source {
        Either::Left(other) => Either::Left(Either::Left(other)),
        Either::Right(focus) => Either::Right(focus),
    })
}

/// Returns the prism onto the value inside `Some`.
///
/// # Examples
///
/// ```rust
/// use lenticular::control::Either;
/// use lenticular::optics::{get_p, just_prism, set_p};
///
/// assert_eq!(set_p(&just_prism::<i32, i32>(), Some(5)), Either::Right(5));
/// assert_eq!(set_p(&just_prism::<i32, i32>(), None), Either::Left(None));
/// assert_eq!(get_p(&just_prism::<i32, i32>(), 5), Some(5));
/// ```
pub fn just_prism<A, B>() -> JustPrism<A, B> {
    prism(Some, |source: Option<A>| match source {
        Some(focus) => Either::Right(focus),
        None => Either::Left(None),
    })
}

/// Returns the prism onto the absence of a value.
///
/// The focus is `()`: there is nothing inside `None` but the fact of its
/// presence.
///
/// # Examples
///
/// ```rust
/// use lenticular::control::Either;
/// use lenticular::optics::{get_p, nothing_prism, set_p};
///
/// assert_eq!(set_p(&nothing_prism::<i32>(), None), Either::Right(()));
/// assert_eq!(set_p(&nothing_prism(), Some(1)), Either::Left(Some(1)));
/// assert_eq!(get_p(&nothing_prism::<i32>(), ()), None);
/// ```
pub fn nothing_prism<A>() -> NothingPrism<A> {
    prism(|()| None, |source: Option<A>| match source {
        None => Either::Right(()),
        Some(value) => Either::Left(Some(value)),
    })
}
