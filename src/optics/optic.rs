//! The single optic shape and the contracts derived from it.
//!
//! Every optic is a function from a focus processor `A -> F<B>` to a
//! structure processor `S -> F<T>`, for some set of contexts `F`. The set is
//! the whole difference between optic kinds:
//!
//! | Contract | Runs in | Foci |
//! |---|---|---|
//! | [`Get`] | `ConstContext<R>` | exactly one |
//! | [`Fold`] | `ConstContext<R>`, `R: Monoid` | any number |
//! | [`Setter`] | `IdentityContext` | any number |
//! | [`Lens`] | every [`ContextFunctor`](crate::context::ContextFunctor) | exactly one |
//! | [`Traversal`] | every [`ContextApplicative`](crate::context::ContextApplicative) | any number |
//! | [`Prism`] | as Traversal, plus [`Branching`] | zero or one |
//!
//! The contracts are marker traits with blanket implementations. Nothing is
//! declared per optic: a concrete optic implements [`Optic`] for the
//! contexts it can handle and thereby satisfies every contract those
//! contexts add up to.

use super::choice::{Branching, FunctionAdapter, TaggedAdapter};
use crate::context::{ConstContext, Context, EitherContext, IdentityContext};
use crate::typeclass::Monoid;

/// An optic runnable in the context `F`.
///
/// `S` is the source structure and `T` the rebuilt one; `A` is the focus as
/// read and `B` the focus as written. `S == T` and `A == B` for updates that
/// keep the types.
///
/// # Examples
///
/// ```rust
/// use lenticular::context::ContextFunctor;
/// use lenticular::optics::{Optic, over};
///
/// // Focuses the counter of a labelled count.
/// struct Count;
///
/// impl<F: ContextFunctor> Optic<F, (usize, String), (usize, String), usize, usize> for Count {
///     fn run<K>(&self, source: (usize, String), mut processor: K) -> F::Wrapped<(usize, String)>
///     where
///         K: FnMut(usize) -> F::Wrapped<usize>,
///     {
///         let (count, label) = source;
///         F::map(processor(count), move |count| (count, label))
///     }
/// }
///
/// assert_eq!(over(&Count, |n: usize| n + 1, (1, "a".to_string())), (2, "a".to_string()));
/// ```
pub trait Optic<F: Context, S, T, A, B> {
    /// Runs `processor` on every focus of `source`, threading the results
    /// through the context to produce the rebuilt structure.
    fn run<K>(&self, source: S, processor: K) -> F::Wrapped<T>
    where
        K: FnMut(A) -> F::Wrapped<B>;
}

/// An optic that reads one focus into any result type `R`.
pub trait Get<R, S, A>: Optic<ConstContext<R>, S, S, A, A> {}

impl<O, R, S, A> Get<R, S, A> for O where O: Optic<ConstContext<R>, S, S, A, A> + ?Sized {}

/// An optic that reads any number of foci, combining them with `R`.
pub trait Fold<R: Monoid, S, A>: Optic<ConstContext<R>, S, S, A, A> {}

impl<O, R, S, A> Fold<R, S, A> for O
where
    O: Optic<ConstContext<R>, S, S, A, A> + ?Sized,
    R: Monoid,
{
}

/// An optic that rewrites any number of foci.
pub trait Setter<S, T, A, B>: Optic<IdentityContext, S, T, A, B> {}

impl<O, S, T, A, B> Setter<S, T, A, B> for O where O: Optic<IdentityContext, S, T, A, B> + ?Sized {}

/// An optic with exactly one focus that can be read and rewritten.
pub trait Lens<S, T, A, B>: Setter<S, T, A, B> + Get<A, S, A> {}

impl<O, S, T, A, B> Lens<S, T, A, B> for O where O: Setter<S, T, A, B> + Get<A, S, A> + ?Sized {}

/// An optic with any number of foci that can be read in order and rewritten.
pub trait Traversal<S, T, A, B>: Setter<S, T, A, B> + Fold<Vec<A>, S, A> {}

impl<O, S, T, A, B> Traversal<S, T, A, B> for O where
    O: Setter<S, T, A, B> + Fold<Vec<A>, S, A> + ?Sized
{
}

/// A traversal of at most one focus that can also tell whether the focus is
/// present and build a structure from a focus alone.
pub trait Prism<S, T, A, B>:
    Traversal<S, T, A, B>
    + Branching<TaggedAdapter, IdentityContext, S, T, A, B>
    + Branching<FunctionAdapter, EitherContext<A>, S, T, A, B>
{
}

impl<O, S, T, A, B> Prism<S, T, A, B> for O where
    O: Traversal<S, T, A, B>
        + Branching<TaggedAdapter, IdentityContext, S, T, A, B>
        + Branching<FunctionAdapter, EitherContext<A>, S, T, A, B>
        + ?Sized
{
}
