//! The receiver seam.
//!
//! A receiver is the function a dispatcher ultimately hands the call to once
//! a token has been matched. Its return value becomes the dispatcher's.

/// A function registered under a dispatch token.
///
/// Implemented for every `Fn(&S, A) -> R` closure. Free-function
/// dispatchers adapt `Fn(A) -> R` closures through [`Unbound`].
///
/// [`Unbound`]: crate::Unbound
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive calls with arguments `{A}`",
    label = "missing `Receiver` implementation",
    note = "Receivers take the bound instance `&{S}` and the arguments `{A}`, and return `{R}`."
)]
pub trait Receiver<S: ?Sized, A, R>: Send + Sync {
    /// Handle a call routed to this receiver.
    fn receive(&self, instance: &S, args: A) -> R;
}

impl<S, A, R, F> Receiver<S, A, R> for F
where
    S: ?Sized,
    F: Fn(&S, A) -> R + Send + Sync + 'static,
{
    fn receive(&self, instance: &S, args: A) -> R {
        (self)(instance, args)
    }
}
