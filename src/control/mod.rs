//! Control structures.
//!
//! - [`Either`]: A value that is one of two cases, used by prisms to report
//!   whether their target case is present
//!
//! # Examples
//!
//! ```rust
//! use lenticular::control::Either;
//!
//! let outcome: Either<String, i32> = Either::Right(42);
//! assert_eq!(outcome.map_left(|reason| reason.len()), Either::Right(42));
//! ```

mod either;

pub use either::Either;
