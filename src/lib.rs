//! # lenticular
//!
//! A minimal optics library for reading and updating parts of immutable
//! nested structures.
//!
//! ## Overview
//!
//! Every optic in this crate has one shape: a function that turns a
//! *focus processor* (`A -> F<B>`) into a *structure processor*
//! (`S -> F<T>`), generic over a context `F`. Which access patterns an optic
//! supports is decided solely by which contexts it can be run in:
//!
//! - **Context wrappers**: [`Identity`](context::Identity),
//!   [`Const`](context::Const) and [`Tagged`](context::Tagged), addressed
//!   through zero-sized brands and the capability traits
//!   [`ContextFunctor`](context::ContextFunctor) and
//!   [`ContextApplicative`](context::ContextApplicative)
//! - **Optics**: Lens, Traversal, Fold, Get and Prism contracts, the
//!   branching machinery behind prisms, and derived operations such as
//!   `get`, `over`, `set`, `fold_map_of`, `set_p` and `get_p`
//! - **Type Classes**: container `Functor`/`Foldable`, `Semigroup` and
//!   `Monoid`
//! - **Control**: the two-case sum type [`Either`](control::Either)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and context wrappers
//! - `control`: The `Either` sum type
//! - `optics`: Optics, derived operations and concrete instances
//! - `derive`: `#[derive(Lenses)]` and `#[derive(Prisms)]`
//! - `serde`: Serialization for wrappers and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lenticular::prelude::*;
//!
//! let pair = (3, 4);
//! assert_eq!(over(&both(), |x: i32| x + 1, pair), (4, 5));
//! assert_eq!(fold_map_of(&both(), |x: i32| vec![x], (1, 2)), vec![1, 2]);
//!
//! assert_eq!(set_p(&just_prism::<i32, i32>(), Some(5)), Either::Right(5));
//! assert_eq!(get_p(&just_prism::<i32, i32>(), 5), Some(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lenticular::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "typeclass")]
    pub use crate::context::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod context;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use lenticular_derive::{Lenses, Prisms};
