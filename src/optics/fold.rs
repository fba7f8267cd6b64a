//! Folds: read-only optics with any number of foci.

use super::optic::Optic;
use crate::context::{Const, ConstContext};
use crate::typeclass::{Foldable, Monoid};

/// The fold over every element of a [`Foldable`] container.
///
/// Only the constant context is supported. The per-element results are
/// combined by the container's [`Foldable::fold_map`], so an empty
/// container reads as `R::empty()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Folded;

impl<R, S> Optic<ConstContext<R>, S, S, S::Inner, S::Inner> for Folded
where
    R: Monoid,
    S: Foldable,
{
    fn run<K>(&self, source: S, mut processor: K) -> Const<R, S>
    where
        K: FnMut(S::Inner) -> Const<R, S::Inner>,
    {
        Const::new(source.fold_map(|element| processor(element).into_inner()))
    }
}

/// Returns the fold over every element of a container.
///
/// # Examples
///
/// ```rust
/// use lenticular::optics::{fold_map_of, folded, length_of, to_list_of};
/// use lenticular::typeclass::Sum;
///
/// assert_eq!(fold_map_of(&folded(), Sum, vec![1, 2, 3]), Sum(6));
/// assert_eq!(to_list_of(&folded(), Some('x')), vec!['x']);
/// assert_eq!(length_of(&folded(), Vec::<u8>::new()), 0);
/// ```
pub const fn folded() -> Folded {
    Folded
}
