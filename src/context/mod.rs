//! Contexts an optic can be run in.
//!
//! An optic turns a focus processor `A -> F<B>` into a structure processor
//! `S -> F<T>`. The context `F` decides what running the optic means:
//!
//! | Brand | Carrier | Running the optic... |
//! |---|---|---|
//! | [`IdentityContext`] | [`Identity`] | rebuilds the structure |
//! | [`ConstContext<R>`] | [`Const<R, _>`](Const) | accumulates an `R`, ignoring the rebuild |
//! | [`TaggedContext<S>`] | [`Tagged<S, _>`](Tagged) | carries a built value on the build leg |
//! | [`EitherContext<E>`] | [`Either<E, _>`](crate::control::Either) | rebuilds, stopping at the first `Left` |
//!
//! ## Brands
//!
//! `F` cannot be a type constructor in Rust, so every context is named by a
//! zero-sized *brand* implementing [`Context`], whose Generic Associated Type
//! `Wrapped<X>` is the carrier applied to `X`. Brands are never constructed.
//!
//! ## Capabilities
//!
//! - [`ContextFunctor`]: `map` only. Enough for lenses.
//! - [`ContextApplicative`]: `pure` and ordered `map2` on top. Needed by
//!   anything with zero or several foci.
//!
//! # Examples
//!
//! ```rust
//! use lenticular::context::{ConstContext, Const, ContextApplicative, ContextFunctor};
//!
//! // `map` on `Const` never calls the function.
//! let held: Const<String, i32> = Const::new("kept".to_string());
//! let mapped = ConstContext::<String>::map(held, |_: i32| -> char { unreachable!() });
//! assert_eq!(mapped.into_inner(), "kept");
//!
//! // `map2` combines held results in order.
//! let left: Const<String, i32> = Const::new("a".to_string());
//! let right: Const<String, i32> = Const::new("b".to_string());
//! let both = ConstContext::<String>::map2(left, right, |x, y| x + y);
//! assert_eq!(both.into_inner(), "ab");
//! ```

mod constant;
#[cfg(feature = "control")]
mod either;
mod identity;
mod tagged;

pub use constant::{Const, ConstContext};
#[cfg(feature = "control")]
pub use either::EitherContext;
pub use identity::{Identity, IdentityContext};
pub use tagged::{Tagged, TaggedContext};

/// A brand naming a single-value carrier.
pub trait Context {
    /// The carrier applied to `X`.
    type Wrapped<X>;
}

/// A context whose carrier can have its nominal value mapped.
///
/// # Laws
///
/// ```text
/// map(w, |x| x) == w
/// map(map(w, f), g) == map(w, |x| g(f(x)))
/// ```
pub trait ContextFunctor: Context {
    /// Applies `function` to the carried value, if the carrier holds one.
    fn map<A, B, G>(wrapped: Self::Wrapped<A>, function: G) -> Self::Wrapped<B>
    where
        G: FnOnce(A) -> B;
}

/// A context that can also lift plain values and combine two carriers.
///
/// `map2` must combine its arguments in argument order. Multi-focus optics
/// rely on this to visit their foci left to right.
///
/// # Laws
///
/// ```text
/// map2(pure(a), w, f) == map(w, |b| f(a, b))
/// map2(w, pure(b), f) == map(w, |a| f(a, b))
/// ```
pub trait ContextApplicative: ContextFunctor {
    /// Lifts a value into the context with no effect.
    fn pure<A>(value: A) -> Self::Wrapped<A>;

    /// Combines two carriers, first then second.
    fn map2<A, B, C, G>(
        first: Self::Wrapped<A>,
        second: Self::Wrapped<B>,
        function: G,
    ) -> Self::Wrapped<C>
    where
        G: FnOnce(A, B) -> C;
}

// Carriers are exactly as large as what they hold, and the phantom side
// never affects auto traits.
static_assertions::assert_eq_size!(Identity<u64>, u64);
static_assertions::assert_eq_size!(Const<u32, String>, u32);
static_assertions::assert_eq_size!(Tagged<String, u16>, u16);
static_assertions::assert_impl_all!(Const<i32, std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_impl_all!(Tagged<std::rc::Rc<i32>, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    fn lift_twice<F: ContextApplicative>(value: i32) -> F::Wrapped<(i32, i32)> {
        F::map2(F::pure(value), F::pure(value + 1), |x, y| (x, y))
    }

    #[rstest]
    fn generic_code_runs_in_identity() {
        assert_eq!(lift_twice::<IdentityContext>(1), Identity((1, 2)));
    }

    #[rstest]
    fn generic_code_runs_in_const() {
        let result = lift_twice::<ConstContext<Sum<i32>>>(1);
        assert_eq!(result.into_inner(), Sum(0));
    }
}
