//! The identity context - running an optic rebuilds the structure.

use super::{Context, ContextApplicative, ContextFunctor};

/// Wraps a value without adding any behavior.
///
/// Running an optic with a processor returning `Identity` is a plain
/// structural update: whatever the processor returns is written back.
///
/// # Examples
///
/// ```rust
/// use lenticular::context::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// assert_eq!(Identity(42).0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Brand of the [`Identity`] context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityContext;

impl Context for IdentityContext {
    type Wrapped<X> = Identity<X>;
}

impl ContextFunctor for IdentityContext {
    #[inline]
    fn map<A, B, G>(wrapped: Identity<A>, function: G) -> Identity<B>
    where
        G: FnOnce(A) -> B,
    {
        Identity(function(wrapped.0))
    }
}

impl ContextApplicative for IdentityContext {
    #[inline]
    fn pure<A>(value: A) -> Identity<A> {
        Identity(value)
    }

    #[inline]
    fn map2<A, B, C, G>(first: Identity<A>, second: Identity<B>, function: G) -> Identity<C>
    where
        G: FnOnce(A, B) -> C,
    {
        Identity(function(first.0, second.0))
    }
}
