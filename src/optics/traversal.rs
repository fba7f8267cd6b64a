//! Traversals: optics with any number of foci.
//!
//! A traversal processes each focus in a fixed left-to-right order and
//! stitches the results back together with `map2`. Zero foci are handled with
//! `pure`, which is why traversals need an applicative context.
//!
//! # Laws
//!
//! ```text
//! over(t, |a| a, s) == s
//! over(t, g, over(t, f, s)) == over(t, |a| g(f(a)), s)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lenticular::control::Either;
//! use lenticular::optics::{both, over, to_list_of, traverse_left};
//!
//! assert_eq!(over(&both(), |x: i32| x * 10, (1, 2)), (10, 20));
//! assert_eq!(to_list_of(&both(), ('a', 'b')), vec!['a', 'b']);
//!
//! let untouched: Either<i32, &str> = Either::Right("no focus");
//! assert_eq!(over(&traverse_left(), |x: i32| x + 1, untouched), Either::Right("no focus"));
//! ```

use super::optic::Optic;
use crate::context::{ContextApplicative, Identity, IdentityContext};
use crate::control::Either;
use crate::typeclass::Functor;

/// The traversal over both components of a homogeneous pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Both;

impl<F, A, B> Optic<F, (A, A), (B, B), A, B> for Both
where
    F: ContextApplicative,
{
    fn run<K>(&self, source: (A, A), mut processor: K) -> F::Wrapped<(B, B)>
    where
        K: FnMut(A) -> F::Wrapped<B>,
    {
        let (left, right) = source;
        let left = processor(left);
        let right = processor(right);
        F::map2(left, right, |left, right| (left, right))
    }
}

/// Returns the traversal over both components of a pair, left first.
pub const fn both() -> Both {
    Both
}

/// The traversal over the payload of a `Left` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TraverseLeft;

impl<F, A, B, C> Optic<F, Either<A, C>, Either<B, C>, A, B> for TraverseLeft
where
    F: ContextApplicative,
{
    fn run<K>(&self, source: Either<A, C>, mut processor: K) -> F::Wrapped<Either<B, C>>
    where
        K: FnMut(A) -> F::Wrapped<B>,
    {
        match source {
            Either::Left(focus) => F::map(processor(focus), Either::Left),
            Either::Right(other) => F::pure(Either::Right(other)),
        }
    }
}

/// Returns the traversal over the payload of a `Left` value.
///
/// A `Right` value has no focus and is rebuilt unchanged.
pub const fn traverse_left() -> TraverseLeft {
    TraverseLeft
}

/// The traversal over the payload of a `Right` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TraverseRight;

impl<F, A, B, C> Optic<F, Either<C, A>, Either<C, B>, A, B> for TraverseRight
where
    F: ContextApplicative,
{
    fn run<K>(&self, source: Either<C, A>, mut processor: K) -> F::Wrapped<Either<C, B>>
    where
        K: FnMut(A) -> F::Wrapped<B>,
    {
        match source {
            Either::Left(other) => F::pure(Either::Left(other)),
            Either::Right(focus) => F::map(processor(focus), Either::Right),
        }
    }
}

/// Returns the traversal over the payload of a `Right` value.
///
/// # Examples
///
/// ```rust
/// use lenticular::control::Either;
/// use lenticular::optics::{over, traverse_right};
///
/// let value: Either<&str, i32> = Either::Right(4);
/// assert_eq!(over(&traverse_right(), |n: i32| n.to_string(), value), Either::Right("4".to_string()));
/// ```
pub const fn traverse_right() -> TraverseRight {
    TraverseRight
}

/// The setter over every element of a [`Functor`] container.
///
/// Only the identity context is supported: the container's own `fmap` does
/// the rebuilding, and it cannot combine results the way `map2` does.
/// `Mapped` is therefore not a [`Fold`](super::Fold) or a
/// [`Get`](super::Get) and cannot be read. Use [`folded`](super::folded) to
/// read the elements of a container.
///
/// ```compile_fail
/// use lenticular::optics::{mapped, to_list_of};
///
/// let _ = to_list_of(&mapped(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mapped;

impl<S, B> Optic<IdentityContext, S, S::WithType<B>, S::Inner, B> for Mapped
where
    S: Functor,
{
    fn run<K>(&self, source: S, mut processor: K) -> Identity<S::WithType<B>>
    where
        K: FnMut(S::Inner) -> Identity<B>,
    {
        Identity(source.fmap(|element| processor(element).into_inner()))
    }
}

/// Returns the setter over every element of a container.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{mapped, over, set};
///
/// assert_eq!(over(&mapped(), |n: i32| n * 2, vec![1, 2, 3]), vec![2, 4, 6]);
/// assert_eq!(set(&mapped(), 'x', Some(1)), Some('x'));
/// ```
pub const fn mapped() -> Mapped {
    Mapped
}
