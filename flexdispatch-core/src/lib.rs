//! # flexdispatch-core
//!
//! Core types for the flexdispatch runtime dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only contributes receivers or extensions to a dispatcher
//! declared somewhere else, without pulling in the engine itself.
//!
//! # Resolution Model
//!
//! A dispatcher wraps a *delegate* that inspects the call arguments and
//! answers with a [`Dispatch`] outcome:
//!
//! - [`Dispatch::Token`] forwards the call to the [`Receiver`] registered
//!   for that token.
//! - [`Dispatch::Static`] returns a value directly.
//! - [`Dispatch::Inline`] runs a one-off callable in place of a receiver.
//! - [`Dispatch::Undetermined`] means "no answer, ask someone else".
//!
//! [`Extension`]s answer the same question and are consulted before the
//! delegate, which lets third parties teach a dispatcher new cases
//! without touching its declaration.
//!
//! # Bound Instances
//!
//! Every collaborator receives a leading `&S`. Dispatchers that wrap a
//! method use the owning type for `S`; free-function dispatchers use `()`
//! and adapt plain closures through [`Unbound`].
//!
//! # Error Types
//!
//! - [`DispatchError`] - The three dispatch failure kinds

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod error;
mod extension;
mod receiver;
mod unbound;

// Re-exports
pub use dispatch::{Dispatch, Inline};
pub use error::{DispatchError, Result};
pub use extension::Extension;
pub use receiver::Receiver;
pub use unbound::Unbound;
