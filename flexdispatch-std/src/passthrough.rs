//! Pass-through handles returned by decorator-style registration.

use std::{ops::Deref, sync::Arc};

/// A shared handle to a callable that has been registered as a receiver.
///
/// Dereferences to the callable, so it can be invoked exactly like the
/// function it wraps: `handle(args)`.
pub struct Passthrough<F> {
    inner: Arc<F>,
}

impl<F> Passthrough<F> {
    pub(crate) fn new(inner: Arc<F>) -> Self {
        Self { inner }
    }
}

impl<F> Clone for Passthrough<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F> Deref for Passthrough<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.inner
    }
}
