//! Adapter for callables that do not take a bound instance.

use crate::{dispatch::Dispatch, extension::Extension, receiver::Receiver};

/// Wraps a free-function callable so it can be stored where a
/// `Receiver<(), A, R>` or `Extension<(), A, R, T>` is expected.
#[derive(Clone, Copy, Debug)]
pub struct Unbound<F>(pub F);

impl<F> Unbound<F> {
    /// Returns the wrapped callable.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<A, R, F> Receiver<(), A, R> for Unbound<F>
where
    F: Fn(A) -> R + Send + Sync + 'static,
{
    fn receive(&self, _instance: &(), args: A) -> R {
        (self.0)(args)
    }
}

impl<A, R, T, F> Extension<(), A, R, T> for Unbound<F>
where
    F: Fn(&A) -> Dispatch<A, R, T> + Send + Sync + 'static,
{
    fn resolve(&self, _instance: &(), args: &A) -> Dispatch<A, R, T> {
        (self.0)(args)
    }
}
