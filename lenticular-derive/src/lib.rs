//! Derive macros generating lenticular optics.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: one `{field}_lens()` constructor per named struct field
//! - [`Prisms`]: one `{variant}_prism()` constructor per enum variant
//!
//! The generated constructors return concrete, nameable optic types built
//! from function pointers, so they are `Copy`, `Send` and `Sync`, and can be
//! stored in fields and composed freely.
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use lenticular::Lenses;
//! use lenticular::optics::{get, set};
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(get(&Point::x_lens(), point.clone()), 10);
//! assert_eq!(set(&Point::y_lens(), 0, point), Point { x: 10, y: 0 });
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use lenticular::Prisms;
//! use lenticular::control::Either;
//! use lenticular::optics::{get_p, set_p};
//!
//! #[derive(Debug, PartialEq, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! assert_eq!(set_p(&Shape::circle_prism(), Shape::Circle(5.0)), Either::Right(5.0));
//! assert_eq!(get_p(&Shape::rectangle_prism(), (1.0, 2.0)), Shape::Rectangle(1.0, 2.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derives a lens constructor for every field of a struct with named fields.
///
/// For each field `foo: T` of `Name`, generates:
///
/// ```rust,ignore
/// impl Name {
///     pub fn foo_lens() -> LensFn<fn(&Self) -> T, fn(Self, T) -> Self> { ... }
/// }
/// ```
///
/// The getter clones the field, so each constructor carries a
/// `where for<'__lens> FieldType: Clone` bound. The bound is higher-ranked so
/// a struct may still hold fields that are not `Clone`; only their own lens
/// constructors become uncallable.
/// The setter moves the structure and replaces the field in place.
///
/// # Errors
///
/// Enums, unions, tuple structs and unit structs are rejected with a
/// compile error.
///
/// # Generics
///
/// Generic structs are supported; call the constructor on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(get(&lens, Container { value: 42 }), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derives a prism constructor for every variant of an enum.
///
/// The method name is the variant name in `snake_case` followed by
/// `_prism`. The focus type depends on the variant's shape:
///
/// | Variant | Focus |
/// |---|---|
/// | `Empty` | `()` |
/// | `Circle(f64)` or `Circle { radius: f64 }` | `f64` |
/// | `Rectangle(f64, f64)` or `Rectangle { width: f64, height: f64 }` | `(f64, f64)` |
///
/// Each constructor returns
/// `PrismFn<fn(Focus) -> Self, fn(Self) -> Either<Self, Focus>>`. A value of
/// another variant is classified as `Left` and handed back unchanged.
///
/// # Errors
///
/// Structs and unions are rejected with a compile error.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, PartialEq, Prisms)]
/// enum Event {
///     KeyPress(char),
///     Click { x: i32, y: i32 },
///     Quit,
/// }
///
/// assert_eq!(set_p(&Event::click_prism(), Event::Click { x: 1, y: 2 }), Either::Right((1, 2)));
/// assert_eq!(set_p(&Event::quit_prism(), Event::KeyPress('q')), Either::Left(Event::KeyPress('q')));
/// assert_eq!(get_p(&Event::key_press_prism(), 'a'), Event::KeyPress('a'));
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
