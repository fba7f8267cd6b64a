//! The either context - rebuild with early exit.

use std::marker::PhantomData;

use super::{Context, ContextApplicative, ContextFunctor};
use crate::control::Either;

/// Brand of the context whose carrier is `Either<E, _>`.
///
/// `Right` carries a value being rebuilt; the first `Left` produced by a
/// processor stops the rebuild and becomes the result. [`set_p`] runs a
/// prism here to tell "the focus was found" apart from "the structure is
/// already complete".
///
/// [`set_p`]: crate::optics::set_p
///
/// # Examples
///
/// ```rust
/// use lenticular::context::{ContextApplicative, EitherContext};
/// use lenticular::control::Either;
///
/// let stopped: Either<&str, i32> =
///     EitherContext::<&str>::map2(Either::Left("first"), Either::Left("second"), |x: i32, y: i32| x + y);
/// assert_eq!(stopped, Either::Left("first"));
/// ```
pub struct EitherContext<E>(PhantomData<fn() -> E>);

impl<E> Context for EitherContext<E> {
    type Wrapped<X> = Either<E, X>;
}

impl<E> ContextFunctor for EitherContext<E> {
    #[inline]
    fn map<A, B, G>(wrapped: Either<E, A>, function: G) -> Either<E, B>
    where
        G: FnOnce(A) -> B,
    {
        wrapped.map_right(function)
    }
}

impl<E> ContextApplicative for EitherContext<E> {
    #[inline]
    fn pure<A>(value: A) -> Either<E, A> {
        Either::Right(value)
    }

    fn map2<A, B, C, G>(first: Either<E, A>, second: Either<E, B>, function: G) -> Either<E, C>
    where
        G: FnOnce(A, B) -> C,
    {
        match (first, second) {
            (Either::Right(left), Either::Right(right)) => Either::Right(function(left, right)),
            (Either::Left(stop), _) | (_, Either::Left(stop)) => Either::Left(stop),
        }
    }
}
