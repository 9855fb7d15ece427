//! The extension seam.
//!
//! Extensions compute dispatch values. They are consulted in registration
//! order before the delegate, and the first one that answers with anything
//! other than [`Dispatch::Undetermined`] wins. The delegate itself is stored
//! behind the same trait.

use crate::dispatch::Dispatch;

/// A callable that derives a [`Dispatch`] outcome from call arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve dispatch values for arguments `{A}`",
    label = "missing `Extension` implementation",
    note = "Extensions take `&{S}` and `&{A}` and return `Dispatch<{A}, {R}, {T}, {S}>`."
)]
pub trait Extension<S: ?Sized, A, R, T>: Send + Sync {
    /// Inspect the arguments and answer with a dispatch outcome.
    fn resolve(&self, instance: &S, args: &A) -> Dispatch<A, R, T, S>;
}

impl<S, A, R, T, F> Extension<S, A, R, T> for F
where
    S: ?Sized,
    F: Fn(&S, &A) -> Dispatch<A, R, T, S> + Send + Sync + 'static,
{
    fn resolve(&self, instance: &S, args: &A) -> Dispatch<A, R, T, S> {
        (self)(instance, args)
    }
}
