//! Type class traits for containers and combinable values.
//!
//! - [`Functor`]: Mapping over container elements
//! - [`Foldable`]: Folding containers to summary values
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. Containers describe themselves
//! through the Generic Associated Type on [`TypeConstructor`], which lets
//! `Functor::fmap` change the element type while keeping the container.
//!
//! ## Wrappers
//!
//! - [`Sum`], [`Product`]: Numeric monoids
//! - [`Max`], [`Min`]: Bounded monoids, with [`Bounded`] supplying the identity
//! - [`First`], [`Last`]: Selection monoids over optional values
//!
//! # Examples
//!
//! ```rust
//! use lenticular::typeclass::{Foldable, Monoid, Semigroup, Sum};
//!
//! let total: Sum<i32> = vec![1, 2, 3].fold_map(Sum);
//! assert_eq!(total, Sum(6));
//! assert_eq!(Sum::empty().combine(total), Sum(6));
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, First, Last, Max, Min, Product, Sum};
