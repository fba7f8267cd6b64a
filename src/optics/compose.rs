//! Composition of optics.
//!
//! Since every optic has the same shape, composing two of them is function
//! composition: the inner optic turns the focus processor into a processor
//! of the intermediate structure, which the outer optic turns into a
//! processor of the whole.
//!
//! The result runs in exactly the contexts both halves run in, so its
//! strength is the weaker of the two. A lens composed with a prism runs in
//! applicative contexts only (a traversal), and branches only if both halves
//! branch (lens composed with prism does not).

use std::fmt;
use std::marker::PhantomData;

use super::choice::{Branching, Choice};
use super::optic::Optic;
use crate::context::{Context, ContextApplicative};

/// Two optics composed, `outer` then `inner`.
///
/// `U` and `V` are the intermediate structure types: `inner` focuses into a
/// `U` and rebuilds a `V`.
pub struct Composed<O, I, U, V> {
    outer: O,
    inner: I,
    intermediate: PhantomData<fn(U) -> V>,
}

impl<O, I, U, V> Composed<O, I, U, V> {
    /// Composes `outer` with `inner`.
    pub const fn new(outer: O, inner: I) -> Self {
        Self {
            outer,
            inner,
            intermediate: PhantomData,
        }
    }

    /// Returns the outer optic.
    pub const fn outer(&self) -> &O {
        &self.outer
    }

    /// Returns the inner optic.
    pub const fn inner(&self) -> &I {
        &self.inner
    }
}

impl<O: Clone, I: Clone, U, V> Clone for Composed<O, I, U, V> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<O: Copy, I: Copy, U, V> Copy for Composed<O, I, U, V> {}

impl<O: fmt::Debug, I: fmt::Debug, U, V> fmt::Debug for Composed<O, I, U, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<F, S, T, A, B, O, I, U, V> Optic<F, S, T, A, B> for Composed<O, I, U, V>
where
    F: Context,
    O: Optic<F, S, T, U, V>,
    I: Optic<F, U, V, A, B>,
{
    fn run<K>(&self, source: S, mut processor: K) -> F::Wrapped<T>
    where
        K: FnMut(A) -> F::Wrapped<B>,
    {
        Optic::<F, S, T, U, V>::run(&self.outer, source, |middle| {
            Optic::<F, U, V, A, B>::run(&self.inner, middle, &mut processor)
        })
    }
}

impl<P, F, S, T, A, B, O, I, U, V> Branching<P, F, S, T, A, B> for Composed<O, I, U, V>
where
    P: Choice,
    F: ContextApplicative,
    O: Branching<P, F, S, T, U, V>,
    I: Branching<P, F, U, V, A, B>,
{
    fn branch(&self, processor: P::Arrow<A, F::Wrapped<B>>) -> P::Arrow<S, F::Wrapped<T>> {
        let middle = Branching::<P, F, U, V, A, B>::branch(&self.inner, processor);
        Branching::<P, F, S, T, U, V>::branch(&self.outer, middle)
    }
}

/// Composes `outer` with `inner`, focusing through both.
///
/// # Examples
///
/// ```rust
/// use lenticular::control::Either;
/// use lenticular::optics::{both, compose, first, get_p, just_prism, over, right_prism, set_p};
///
/// let first_pair = compose(first(), both());
/// assert_eq!(over(&first_pair, |n: i32| n + 1, ((1, 2), "tag")), ((2, 3), "tag"));
///
/// // Prisms compose into prisms.
/// let right_just = compose(right_prism::<(), Option<i32>, Option<i32>>(), just_prism::<i32, i32>());
/// assert_eq!(set_p(&right_just, Either::Right(Some(4))), Either::Right(4));
/// assert_eq!(get_p(&right_just, 4), Either::Right(Some(4)));
/// ```
pub const fn compose<O, I, U, V>(outer: O, inner: I) -> Composed<O, I, U, V> {
    Composed::new(outer, inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Const, ConstContext, Identity, IdentityContext};
    use crate::optics::{FirstLens, SecondLens, first, second};
    use rstest::rstest;

    #[rstest]
    fn composed_lenses_read_nested_focus() {
        let nested: Composed<FirstLens, SecondLens, (char, u8), (char, u8)> =
            compose(first(), second());
        let read: Const<u8, ((char, u8), bool)> =
            Optic::<ConstContext<u8>, _, _, _, _>::run(&nested, (('a', 7), true), Const::new);
        assert_eq!(read.into_inner(), 7);
    }

    #[rstest]
    fn composed_lenses_write_nested_focus() {
        let nested = compose(second(), first());
        let written: Identity<(bool, (String, char))> = Optic::<IdentityContext, _, _, _, _>::run(
            &nested,
            (true, (3_u8, 'z')),
            |n: u8| Identity(n.to_string()),
        );
        assert_eq!(written.into_inner(), (true, ("3".to_string(), 'z')));
    }

    #[rstest]
    fn accessors_return_halves() {
        let nested: Composed<FirstLens, SecondLens, (i32, i32), (i32, i32)> =
            compose(first(), second());
        assert_eq!(nested.outer(), &FirstLens);
        assert_eq!(nested.inner(), &SecondLens);
        assert_eq!(
            format!("{nested:?}"),
            "Composed { outer: FirstLens, inner: SecondLens }"
        );
    }
}
