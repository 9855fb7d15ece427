//! Dispatch outcomes.
//!
//! A delegate or extension answers every call with a [`Dispatch`]. Only
//! [`Dispatch::Token`] goes through receiver lookup; the two other concrete
//! variants short-circuit it.

use std::fmt;

/// A callable that runs in place of a registered receiver.
///
/// Created through [`Dispatch::inline`] or [`Dispatch::inline_method`] and
/// invoked with the original call arguments.
pub struct Inline<S: ?Sized, A, R> {
    f: Box<dyn FnOnce(&S, A) -> R>,
}

impl<S: ?Sized, A, R> Inline<S, A, R> {
    /// Wrap a callable that also receives the bound instance.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&S, A) -> R + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Invoke the wrapped callable.
    pub fn call(self, instance: &S, args: A) -> R {
        (self.f)(instance, args)
    }
}

impl<S: ?Sized, A, R> fmt::Debug for Inline<S, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Inline(..)")
    }
}

/// The answer a delegate or extension gives for one call.
///
/// `A` is the argument bundle, `R` the output, `T` the token type and `S`
/// the bound instance (`()` for free functions).
pub enum Dispatch<A, R, T, S: ?Sized = ()> {
    /// No dispatch value could be derived from the arguments.
    ///
    /// Extensions returning this are skipped; a delegate returning this
    /// makes the call fail.
    Undetermined,
    /// Forward to the receiver registered for this token.
    Token(T),
    /// Return this value without invoking any receiver.
    Static(R),
    /// Invoke this callable with the call arguments instead of a receiver.
    Inline(Inline<S, A, R>),
}

impl<A, R, T, S: ?Sized> Dispatch<A, R, T, S> {
    /// Build an inline outcome from a callable that receives the bound
    /// instance first.
    pub fn inline_method<F>(f: F) -> Self
    where
        F: FnOnce(&S, A) -> R + 'static,
    {
        Dispatch::Inline(Inline::new(f))
    }

    /// Returns true for [`Dispatch::Undetermined`].
    pub fn is_undetermined(&self) -> bool {
        matches!(self, Dispatch::Undetermined)
    }

    /// Returns the token if this outcome forwards to a receiver.
    pub fn token(&self) -> Option<&T> {
        match self {
            Dispatch::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the token if there is one.
    pub fn into_token(self) -> Option<T> {
        match self {
            Dispatch::Token(token) => Some(token),
            _ => None,
        }
    }
}

impl<A, R, T> Dispatch<A, R, T> {
    /// Build an inline outcome for a free-function dispatcher.
    pub fn inline<F>(f: F) -> Self
    where
        F: FnOnce(A) -> R + 'static,
    {
        Dispatch::Inline(Inline::new(move |_: &(), args| f(args)))
    }
}

impl<A, R, T, S: ?Sized> From<Option<T>> for Dispatch<A, R, T, S> {
    fn from(token: Option<T>) -> Self {
        match token {
            Some(token) => Dispatch::Token(token),
            None => Dispatch::Undetermined,
        }
    }
}

impl<A, R, T, S> fmt::Debug for Dispatch<A, R, T, S>
where
    R: fmt::Debug,
    T: fmt::Debug,
    S: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::Undetermined => f.write_str("Undetermined"),
            Dispatch::Token(token) => f.debug_tuple("Token").field(token).finish(),
            Dispatch::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Dispatch::Inline(inline) => fmt::Debug::fmt(inline, f),
        }
    }
}
