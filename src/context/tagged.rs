//! The tagged context - a built value marked with the type it came from.
//!
//! `Tagged<S, B>` holds a `B` and only names an `S`. It is the arrow type of
//! [`TaggedAdapter`](crate::optics::TaggedAdapter): an "arrow" from `S` that
//! ignores its input and already knows its output, which is exactly what
//! building a structure from a focus needs.

use std::fmt;
use std::marker::PhantomData;

use super::{Context, ContextFunctor};

/// A value of type `B` tagged with a phantom source type `S`.
///
/// # Examples
///
/// ```rust
/// use lenticular::context::Tagged;
///
/// let tagged: Tagged<String, i32> = Tagged::new(5);
/// let retagged: Tagged<(), i32> = tagged.retag();
/// assert_eq!(retagged.into_inner(), 5);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "B: serde::Serialize", deserialize = "B: serde::Deserialize<'de>"))
)]
pub struct Tagged<S, B> {
    value: B,
    #[cfg_attr(feature = "serde", serde(skip))]
    tag: PhantomData<fn() -> S>,
}

impl<S, B> Tagged<S, B> {
    /// Creates a `Tagged` holding `value`.
    #[inline]
    pub const fn new(value: B) -> Self {
        Self {
            value,
            tag: PhantomData,
        }
    }

    /// Consumes the `Tagged` and returns the held value.
    #[inline]
    pub fn into_inner(self) -> B {
        self.value
    }

    /// Changes the tag, keeping the held value.
    #[inline]
    pub fn retag<U>(self) -> Tagged<U, B> {
        Tagged::new(self.value)
    }
}

impl<S, B: Clone> Clone for Tagged<S, B> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<S, B: PartialEq> PartialEq for Tagged<S, B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<S, B: Eq> Eq for Tagged<S, B> {}

impl<S, B: fmt::Debug> fmt::Debug for Tagged<S, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Tagged").field(&self.value).finish()
    }
}

/// Brand of the [`Tagged`] context with tag `S`.
pub struct TaggedContext<S>(PhantomData<fn() -> S>);

impl<S> Context for TaggedContext<S> {
    type Wrapped<X> = Tagged<S, X>;
}

impl<S> ContextFunctor for TaggedContext<S> {
    #[inline]
    fn map<A, B, G>(wrapped: Tagged<S, A>, function: G) -> Tagged<S, B>
    where
        G: FnOnce(A) -> B,
    {
        Tagged::new(function(wrapped.value))
    }
}
