//! Operations derived from running an optic in a particular context.
//!
//! | Operation | Context | Requires |
//! |---|---|---|
//! | [`get`], [`views`] | `ConstContext<R>` | [`Get`] |
//! | [`fold_map_of`], [`to_list_of`], [`preview`], [`length_of`] | `ConstContext<R>`, `R: Monoid` | [`Fold`] |
//! | [`over`], [`set`] | `IdentityContext` | [`Setter`] |
//! | [`set_p`] | `FunctionAdapter` + `EitherContext` | [`Branching`] |
//! | [`get_p`] | `TaggedAdapter` + `IdentityContext` | [`Branching`] |
//!
//! None of the operations can fail. Reading zero foci yields the neutral
//! element of the result monoid, and a prism that finds no focus reports the
//! structure back as `Left`.

use super::choice::{Branching, FunctionAdapter, TaggedAdapter};
use super::optic::{Fold, Get, Setter};
use crate::context::{Const, EitherContext, Identity, IdentityContext, Tagged};
use crate::control::Either;
use crate::typeclass::{First, Monoid, Sum};

/// Reads the single focus of a lens or getter.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{get, second};
///
/// assert_eq!(get(&second(), ("key", 42)), 42);
/// ```
///
/// A prism may have no focus, so it cannot be read with `get`:
///
/// ```compile_fail
/// use lenticular::optics::{get, just_prism};
///
/// let _: i32 = get(&just_prism::<i32, i32>(), Some(1));
/// ```
pub fn get<O, S, A>(optic: &O, source: S) -> A
where
    O: Get<A, S, A> + ?Sized,
{
    optic.run(source, Const::new).into_inner()
}

/// Reads the single focus of a lens or getter and applies `function` to it.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{first, views};
///
/// assert_eq!(views(&first(), |name: &str| name.len(), ("four", 0)), 4);
/// ```
pub fn views<O, S, A, R, G>(optic: &O, mut function: G, source: S) -> R
where
    O: Get<R, S, A> + ?Sized,
    G: FnMut(A) -> R,
{
    optic
        .run(source, |focus| Const::new(function(focus)))
        .into_inner()
}

/// Maps every focus to a monoid and combines the results in focus order.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{both, fold_map_of};
///
/// assert_eq!(fold_map_of(&both(), |x: i32| vec![x], (1, 2)), vec![1, 2]);
/// ```
pub fn fold_map_of<O, S, A, R, G>(optic: &O, mut function: G, source: S) -> R
where
    O: Fold<R, S, A> + ?Sized,
    R: Monoid,
    G: FnMut(A) -> R,
{
    optic
        .run(source, |focus| Const::new(function(focus)))
        .into_inner()
}

/// Collects every focus, in order.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{folded, to_list_of};
///
/// assert_eq!(to_list_of(&folded(), Some('x')), vec!['x']);
/// ```
pub fn to_list_of<O, S, A>(optic: &O, source: S) -> Vec<A>
where
    O: Fold<Vec<A>, S, A> + ?Sized,
{
    fold_map_of(optic, |focus| vec![focus], source)
}

/// Returns the first focus, if there is one.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{just_prism, preview};
///
/// assert_eq!(preview(&just_prism::<i32, i32>(), Some(3)), Some(3));
/// assert_eq!(preview(&just_prism::<i32, i32>(), None), None);
/// ```
pub fn preview<O, S, A>(optic: &O, source: S) -> Option<A>
where
    O: Fold<First<A>, S, A> + ?Sized,
{
    fold_map_of(optic, First::new, source).into_inner()
}

/// Counts the foci.
pub fn length_of<O, S, A>(optic: &O, source: S) -> usize
where
    O: Fold<Sum<usize>, S, A> + ?Sized,
{
    fold_map_of(optic, |_| Sum(1), source).into_inner()
}

/// Rebuilds the structure with every focus replaced by `function(focus)`.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{both, over};
///
/// assert_eq!(over(&both(), |x: i32| x + 1, (3, 4)), (4, 5));
/// ```
///
/// Folds and getters cannot rebuild their structure:
///
/// ```compile_fail
/// use lenticular::optics::{folded, over};
///
/// let _ = over(&folded(), |value: i32| value + 1, vec![1, 2, 3]);
/// ```
///
/// ```compile_fail
/// use lenticular::optics::{over, to};
///
/// let _ = over(&to(|value: &i32| *value), |value: i32| value + 1, 1);
/// ```
pub fn over<O, S, T, A, B, G>(optic: &O, mut function: G, source: S) -> T
where
    O: Setter<S, T, A, B> + ?Sized,
    G: FnMut(A) -> B,
{
    optic
        .run(source, |focus| Identity(function(focus)))
        .into_inner()
}

/// Rebuilds the structure with every focus replaced by `value`.
pub fn set<O, S, T, A, B>(optic: &O, value: B, source: S) -> T
where
    O: Setter<S, T, A, B> + ?Sized,
    B: Clone,
{
    over(optic, |_| value.clone(), source)
}

/// Classifies a structure through a prism.
///
/// Returns `Right(focus)` when the prism's case is present and
/// `Left(structure)` with the structure, already in its final form,
/// otherwise.
///
/// # Examples
///
/// ```rust
/// use lenticular::control::Either;
/// use lenticular::optics::{just_prism, set_p};
///
/// assert_eq!(set_p(&just_prism::<i32, i32>(), Some(5)), Either::Right(5));
/// assert_eq!(set_p(&just_prism::<i32, i32>(), None), Either::Left(None));
/// ```
///
/// A lens cannot classify its structure:
///
/// ```compile_fail
/// use lenticular::optics::{second, set_p};
///
/// let _ = set_p(&second(), ("key", 1));
/// ```
pub fn set_p<O, S, T, A, B>(prism: &O, source: S) -> Either<T, A>
where
    O: Branching<FunctionAdapter, EitherContext<A>, S, T, A, B> + ?Sized,
    A: 'static,
    B: 'static,
{
    // The focus escapes as `Left`; a structure that needs no processing
    // arrives as `Right` through `pure`.
    let escape: Box<dyn Fn(A) -> Either<A, B>> = Box::new(Either::Left);
    let classify = prism.branch(escape);
    classify(source).swap()
}

/// Builds a structure from a focus through a prism. Always succeeds.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{get_p, just_prism};
///
/// assert_eq!(get_p(&just_prism::<i32, i32>(), 5), Some(5));
/// ```
///
/// A lens composed with a prism is only a traversal, so it cannot build the
/// whole structure from a focus:
///
/// ```compile_fail
/// use lenticular::optics::{compose, first, get_p, just_prism};
///
/// let present = compose(first(), just_prism::<i32, i32>());
/// let _: (Option<i32>, bool) = get_p(&present, 1);
/// ```
pub fn get_p<O, S, T, A, B>(prism: &O, value: B) -> T
where
    O: Branching<TaggedAdapter, IdentityContext, S, T, A, B> + ?Sized,
{
    prism
        .branch(Tagged::new(Identity::new(value)))
        .into_inner()
        .into_inner()
}
