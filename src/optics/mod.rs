//! Optics for reading and updating parts of immutable structures.
//!
//! Every optic is a value implementing [`Optic`] for some set of contexts.
//! The contexts an optic supports decide what it can do:
//!
//! ```text
//! Lens      any functor        get, views, over, set
//! Traversal any applicative    over, set, fold_map_of
//! Fold      Const<R: Monoid>   fold_map_of, to_list_of, preview, length_of
//! Get       Const<R>           get, views
//! Setter    Identity           over, set
//! Prism     applicative + Branching at both adapters   set_p, get_p
//! ```
//!
//! Capabilities are checked at compile time: asking a fold for `over`, or a
//! lens for `get_p`, does not type-check. The documentation of each
//! operation lists the uses it rejects.
//!
//! # Example
//!
//! ```rust
//! use lenticular::optics::{compose, first, get, just_prism, over, preview, set};
//!
//! let settings = ((Some(3), "verbose"), 1.5);
//!
//! let level = compose(first(), first());
//! assert_eq!(get(&level, settings), Some(3));
//! assert_eq!(set(&level, None, settings), ((None, "verbose"), 1.5));
//!
//! // A lens composed with a prism is a traversal with at most one focus.
//! let present = compose(level, just_prism::<i32, i32>());
//! assert_eq!(preview(&present, settings), Some(3));
//! assert_eq!(over(&present, |n: i32| n + 1, settings), ((Some(4), "verbose"), 1.5));
//! ```

mod choice;
mod compose;
mod fold;
mod lens;
mod operations;
mod optic;
mod prism;
mod traversal;

pub use optic::{Fold, Get, Lens, Optic, Prism, Setter, Traversal};

pub use choice::{Branching, Choice, FunctionAdapter, Profunctor, TaggedAdapter};

pub use lens::{FirstLens, LensFn, SecondLens, To, first, lens, second, to};

pub use traversal::{
    Both, Mapped, TraverseLeft, TraverseRight, both, mapped, traverse_left, traverse_right,
};

pub use fold::{Folded, folded};

pub use prism::{
    JustPrism, LeftPrism, NothingPrism, PrismFn, RightPrism, just_prism, left_prism,
    nothing_prism, prism, right_prism,
};

pub use compose::{Composed, compose};

pub use operations::{
    fold_map_of, get, get_p, length_of, over, preview, set, set_p, to_list_of, views,
};

static_assertions::assert_impl_all!(Both: Send, Sync, Copy);
static_assertions::assert_impl_all!(FirstLens: Send, Sync, Copy);
static_assertions::assert_impl_all!(Mapped: Send, Sync, Copy);
static_assertions::assert_impl_all!(Folded: Send, Sync, Copy);
static_assertions::assert_impl_all!(JustPrism<i32, i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Composed<FirstLens, Both, (u8, u8), (u8, u8)>: Send, Sync);
