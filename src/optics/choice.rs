//! Branching: the machinery behind prisms.
//!
//! A prism cannot be run by a plain focus processor alone, because a
//! structure may not contain its focus at all. Instead it lifts a processor
//! through an *adapter*: a [`Profunctor`] (something arrow-like that can be
//! pre- and post-processed) with [`Choice`] (an arrow can be extended to
//! pass one case of an [`Either`] through untouched).
//!
//! Two adapters are provided:
//!
//! - [`FunctionAdapter`]: arrows are boxed functions. Lifting a processor
//!   yields a function from the whole structure, which reports whether the
//!   focus was found. [`set_p`](super::set_p) runs prisms through it.
//! - [`TaggedAdapter`]: arrows are [`Tagged`] values, which ignore their
//!   input. Lifting a ready focus yields a ready structure, which is how
//!   [`get_p`](super::get_p) builds a structure from a focus.
//!
//! # Examples
//!
//! ```rust
//! use lenticular::context::Tagged;
//! use lenticular::control::Either;
//! use lenticular::optics::{Choice, FunctionAdapter, Profunctor, TaggedAdapter};
//!
//! let double: Box<dyn Fn(i32) -> i32> = Box::new(|n| n * 2);
//! let lifted = FunctionAdapter::right::<i32, i32, &str>(double);
//! assert_eq!(lifted(Either::Right(4)), Either::Right(8));
//! assert_eq!(lifted(Either::Left("skip")), Either::Left("skip"));
//!
//! let ready: Tagged<usize, i32> = Tagged::new(4);
//! let shown = TaggedAdapter::dimap(ready, |s: String| s.len(), |n: i32| n.to_string());
//! assert_eq!(shown.into_inner(), "4");
//! ```

use crate::context::{ContextApplicative, ContextFunctor, Tagged, TaggedContext};
use crate::control::Either;

/// Arrow-like values that can be adapted on both ends.
///
/// # Laws
///
/// ```text
/// dimap(arrow, |x| x, |y| y) == arrow
/// dimap(dimap(arrow, f, g), h, i) == dimap(arrow, |x| f(h(x)), |y| i(g(y)))
/// ```
pub trait Profunctor {
    /// An arrow from `X` to `Y`.
    type Arrow<X, Y>;

    /// Pre-processes the input with `pre` and post-processes the output with
    /// `post`.
    fn dimap<X, Y, X2, Y2, Pre, Post>(
        arrow: Self::Arrow<X, Y>,
        pre: Pre,
        post: Post,
    ) -> Self::Arrow<X2, Y2>
    where
        X: 'static,
        Y: 'static,
        X2: 'static,
        Y2: 'static,
        Pre: Fn(X2) -> X + 'static,
        Post: Fn(Y) -> Y2 + 'static;
}

/// Profunctors whose arrows can be extended over a sum type.
pub trait Choice: Profunctor {
    /// Extends an arrow to act on `Left` values and pass `Right` values through.
    fn left<A, B, C>(arrow: Self::Arrow<A, B>) -> Self::Arrow<Either<A, C>, Either<B, C>>
    where
        A: 'static,
        B: 'static,
        C: 'static;

    /// Extends an arrow to act on `Right` values and pass `Left` values through.
    fn right<A, B, C>(arrow: Self::Arrow<A, B>) -> Self::Arrow<Either<C, A>, Either<C, B>>
    where
        A: 'static,
        B: 'static,
        C: 'static;
}

/// The adapter whose arrows are ordinary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FunctionAdapter;

impl Profunctor for FunctionAdapter {
    type Arrow<X, Y> = Box<dyn Fn(X) -> Y>;

    fn dimap<X, Y, X2, Y2, Pre, Post>(
        arrow: Box<dyn Fn(X) -> Y>,
        pre: Pre,
        post: Post,
    ) -> Box<dyn Fn(X2) -> Y2>
    where
        X: 'static,
        Y: 'static,
        X2: 'static,
        Y2: 'static,
        Pre: Fn(X2) -> X + 'static,
        Post: Fn(Y) -> Y2 + 'static,
    {
        Box::new(move |input| post(arrow(pre(input))))
    }
}

impl Choice for FunctionAdapter {
    fn left<A, B, C>(arrow: Box<dyn Fn(A) -> B>) -> Box<dyn Fn(Either<A, C>) -> Either<B, C>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        Box::new(move |input: Either<A, C>| input.map_left(&arrow))
    }

    fn right<A, B, C>(arrow: Box<dyn Fn(A) -> B>) -> Box<dyn Fn(Either<C, A>) -> Either<C, B>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        Box::new(move |input: Either<C, A>| input.map_right(&arrow))
    }
}

/// The adapter whose arrows are [`Tagged`] values.
///
/// A tagged arrow already holds its output, so pre-processing has nothing to
/// act on and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TaggedAdapter;

impl Profunctor for TaggedAdapter {
    type Arrow<X, Y> = Tagged<X, Y>;

    fn dimap<X, Y, X2, Y2, Pre, Post>(arrow: Tagged<X, Y>, _pre: Pre, post: Post) -> Tagged<X2, Y2>
    where
        X: 'static,
        Y: 'static,
        X2: 'static,
        Y2: 'static,
        Pre: Fn(X2) -> X + 'static,
        Post: Fn(Y) -> Y2 + 'static,
    {
        TaggedContext::<X2>::map(arrow.retag(), post)
    }
}

impl Choice for TaggedAdapter {
    fn left<A, B, C>(arrow: Tagged<A, B>) -> Tagged<Either<A, C>, Either<B, C>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        Tagged::new(Either::Left(arrow.into_inner()))
    }

    fn right<A, B, C>(arrow: Tagged<A, B>) -> Tagged<Either<C, A>, Either<C, B>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        Tagged::new(Either::Right(arrow.into_inner()))
    }
}

/// Optics that can lift a processor arrow of adapter `P` running in context
/// `F` from their focus to their whole structure.
///
/// # Examples
///
/// ```rust
/// use lenticular::context::{Identity, IdentityContext, Tagged};
/// use lenticular::optics::{Branching, TaggedAdapter, just_prism};
///
/// let built = Branching::<TaggedAdapter, IdentityContext, _, _, _, _>::branch(
///     &just_prism::<i32, i32>(),
///     Tagged::new(Identity::new(7)),
/// );
/// assert_eq!(built.into_inner().into_inner(), Some(7));
/// ```
pub trait Branching<P: Choice, F: ContextApplicative, S, T, A, B> {
    /// Lifts `processor` from the focus to the structure.
    fn branch(&self, processor: P::Arrow<A, F::Wrapped<B>>) -> P::Arrow<S, F::Wrapped<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn boxed<X: 'static, Y: 'static>(function: impl Fn(X) -> Y + 'static) -> Box<dyn Fn(X) -> Y> {
        Box::new(function)
    }

    #[rstest]
    fn function_dimap_composes_in_order() {
        let arrow = FunctionAdapter::dimap(
            boxed(|n: usize| n * 10),
            |text: &'static str| text.len(),
            |n: usize| format!("<{n}>"),
        );
        assert_eq!(arrow("abc"), "<30>");
    }

    #[rstest]
    fn function_dimap_identity_law() {
        let arrow = FunctionAdapter::dimap(boxed(|n: i32| n + 1), |x: i32| x, |y: i32| y);
        assert_eq!(arrow(4), 5);
    }

    #[rstest]
    #[case(Either::Left(3), Either::Left(6))]
    #[case(Either::Right('c'), Either::Right('c'))]
    fn function_left_passes_right_through(
        #[case] input: Either<i32, char>,
        #[case] expected: Either<i32, char>,
    ) {
        let lifted = FunctionAdapter::left::<i32, i32, char>(boxed(|n: i32| n * 2));
        assert_eq!(lifted(input), expected);
    }

    #[rstest]
    #[case(Either::Right(3), Either::Right(6))]
    #[case(Either::Left('c'), Either::Left('c'))]
    fn function_right_passes_left_through(
        #[case] input: Either<char, i32>,
        #[case] expected: Either<char, i32>,
    ) {
        let lifted = FunctionAdapter::right::<i32, i32, char>(boxed(|n: i32| n * 2));
        assert_eq!(lifted(input), expected);
    }

    #[rstest]
    fn tagged_dimap_ignores_pre_processing() {
        let arrow: Tagged<u8, i32> = Tagged::new(5);
        let adapted: Tagged<String, i32> = TaggedAdapter::dimap(
            arrow,
            |_: String| -> u8 { unreachable!("a tagged arrow has no input") },
            |n: i32| n + 1,
        );
        assert_eq!(adapted.into_inner(), 6);
    }

    #[rstest]
    fn tagged_left_and_right_wrap_the_value() {
        let left = TaggedAdapter::left::<u8, i32, char>(Tagged::new(1));
        let right = TaggedAdapter::right::<u8, i32, char>(Tagged::new(2));
        assert_eq!(left.into_inner(), Either::Left(1));
        assert_eq!(right.into_inner(), Either::Right(2));
    }
}
