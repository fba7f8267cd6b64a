//! Lenses: optics with exactly one focus.
//!
//! A lens runs in any context that can `map`, which is all a single focus
//! needs: process the focus, then map the rebuild over the result. In the
//! constant context that rebuild is skipped and the lens reads; in the
//! identity context it is applied and the lens writes.
//!
//! # Laws
//!
//! ```text
//! set(l, get(l, s), s) == s          (get-set)
//! get(l, set(l, b, s)) == b          (set-get)
//! set(l, c, set(l, b, s)) == set(l, c, s)   (set-set)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lenticular::optics::{get, lens, set};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! let x = lens(|point: &Point| point.x, |point: Point, x: i32| Point { x, ..point });
//!
//! let origin = Point { x: 0, y: 0 };
//! assert_eq!(get(&x, origin.clone()), 0);
//! assert_eq!(set(&x, 5, origin), Point { x: 5, y: 0 });
//! ```

use std::fmt;

use super::optic::Optic;
use crate::context::{Const, ConstContext, ContextFunctor};

/// A lens built from a getter and a setter.
///
/// The getter reads the focus from a borrowed structure; the setter consumes
/// the structure and writes a new focus into it.
pub struct LensFn<G, St> {
    getter: G,
    setter: St,
}

impl<G, St> LensFn<G, St> {
    /// Creates a lens from a getter and a setter.
    pub const fn new(getter: G, setter: St) -> Self {
        Self { getter, setter }
    }
}

impl<G: Clone, St: Clone> Clone for LensFn<G, St> {
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<G: Copy, St: Copy> Copy for LensFn<G, St> {}

impl<G, St> fmt::Debug for LensFn<G, St> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("LensFn").finish_non_exhaustive()
    }
}

impl<F, S, T, A, B, G, St> Optic<F, S, T, A, B> for LensFn<G, St>
where
    F: ContextFunctor,
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    fn run<K>(&self, source: S, mut processor: K) -> F::Wrapped<T>
    where
        K: FnMut(A) -> F::Wrapped<B>,
    {
        let focus = (self.getter)(&source);
        F::map(processor(focus), |replacement| {
            (self.setter)(source, replacement)
        })
    }
}

/// Creates a lens from a getter and a setter.
///
/// The setter may change the focus type (`B`) and with it the structure type
/// (`T`).
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{lens, over};
///
/// let label = lens(
///     |pair: &(i32, String)| pair.1.clone(),
///     |pair: (i32, String), label: usize| (pair.0, label),
/// );
/// assert_eq!(over(&label, |text: String| text.len(), (1, "four".to_string())), (1, 4));
/// ```
pub const fn lens<S, T, A, B, G, St>(getter: G, setter: St) -> LensFn<G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    LensFn::new(getter, setter)
}

/// The lens onto the first component of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FirstLens;

impl<F, A, B, C> Optic<F, (A, C), (B, C), A, B> for FirstLens
where
    F: ContextFunctor,
{
    fn run<K>(&self, source: (A, C), mut processor: K) -> F::Wrapped<(B, C)>
    where
        K: FnMut(A) -> F::Wrapped<B>,
    {
        let (focus, rest) = source;
        F::map(processor(focus), move |replacement| (replacement, rest))
    }
}

/// The lens onto the second component of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SecondLens;

impl<F, A, B, C> Optic<F, (C, A), (C, B), A, B> for SecondLens
where
    F: ContextFunctor,
{
    fn run<K>(&self, source: (C, A), mut processor: K) -> F::Wrapped<(C, B)>
    where
        K: FnMut(A) -> F::Wrapped<B>,
    {
        let (rest, focus) = source;
        F::map(processor(focus), move |replacement| (rest, replacement))
    }
}

/// Returns the lens onto the first component of a pair.
///
/// Neither component needs to be `Clone`: the pair is taken apart and put
/// back together.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{first, get, set};
///
/// assert_eq!(get(&first(), (1, 'a')), 1);
/// assert_eq!(set(&first(), "one", (1, 'a')), ("one", 'a'));
/// ```
pub const fn first() -> FirstLens {
    FirstLens
}

/// Returns the lens onto the second component of a pair.
pub const fn second() -> SecondLens {
    SecondLens
}

/// A read-only optic computing its focus from the structure.
#[derive(Clone, Copy)]
pub struct To<G> {
    getter: G,
}

impl<G> fmt::Debug for To<G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("To").finish_non_exhaustive()
    }
}

// Only the constant context is supported: there is no way back from `A`.
impl<R, S, A, G> Optic<ConstContext<R>, S, S, A, A> for To<G>
where
    G: Fn(&S) -> A,
{
    fn run<K>(&self, source: S, mut processor: K) -> Const<R, S>
    where
        K: FnMut(A) -> Const<R, A>,
    {
        processor((self.getter)(&source)).retag()
    }
}

/// Turns a function into a read-only optic.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{compose, get, second, to};
///
/// let name_length = compose(second(), to(|name: &String| name.len()));
/// assert_eq!(get(&name_length, (7, "Ada".to_string())), 3);
/// ```
pub const fn to<S, A, G>(getter: G) -> To<G>
where
    G: Fn(&S) -> A,
{
    To { getter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Identity, IdentityContext};
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Account {
        owner: String,
        balance: i64,
    }

    fn balance() -> LensFn<fn(&Account) -> i64, fn(Account, i64) -> Account> {
        LensFn::new(
            |account| account.balance,
            |account, balance| Account { balance, ..account },
        )
    }

    fn sample() -> Account {
        Account {
            owner: "ada".to_string(),
            balance: 10,
        }
    }

    #[rstest]
    fn lens_reads_through_const() {
        let read: Const<i64, Account> =
            Optic::<ConstContext<i64>, _, _, _, _>::run(&balance(), sample(), Const::new);
        assert_eq!(read.into_inner(), 10);
    }

    #[rstest]
    fn lens_writes_through_identity() {
        let written: Identity<Account> =
            Optic::<IdentityContext, _, _, _, _>::run(&balance(), sample(), |value: i64| {
                Identity(value * 3)
            });
        assert_eq!(written.into_inner().balance, 30);
    }

    #[rstest]
    fn lens_rebuild_is_skipped_when_reading() {
        let setter_calls = std::cell::Cell::new(0);
        let counting = lens(
            |account: &Account| account.balance,
            |account: Account, balance: i64| {
                setter_calls.set(setter_calls.get() + 1);
                Account { balance, ..account }
            },
        );
        let _ = Optic::<ConstContext<i64>, _, _, _, _>::run(&counting, sample(), Const::new);
        assert_eq!(setter_calls.get(), 0);
    }

    #[rstest]
    fn pair_lenses_change_type() {
        let source = (1_u8, "tail");
        let first_written: Identity<(String, &str)> =
            Optic::<IdentityContext, _, _, _, _>::run(&first(), source, |n: u8| {
                Identity(n.to_string())
            });
        let second_written: Identity<(u8, usize)> =
            Optic::<IdentityContext, _, _, _, _>::run(&second(), source, |text: &str| {
                Identity(text.len())
            });
        assert_eq!(first_written.into_inner(), ("1".to_string(), "tail"));
        assert_eq!(second_written.into_inner(), (1, 4));
    }

    #[rstest]
    fn to_reads_computed_focus() {
        let owner_length = to(|account: &Account| account.owner.len());
        let read: Const<usize, Account> =
            Optic::<ConstContext<usize>, _, _, _, _>::run(&owner_length, sample(), Const::new);
        assert_eq!(read.into_inner(), 3);
    }

    #[rstest]
    fn debug_hides_functions() {
        assert_eq!(format!("{:?}", balance()), "LensFn { .. }");
        assert_eq!(format!("{:?}", to(|n: &i32| *n)), "To { .. }");
    }
}
