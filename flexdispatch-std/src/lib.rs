//! # flexdispatch-std
//!
//! Dispatch engine and dispatcher front-ends for flexdispatch.
//!
//! This crate provides:
//! - **Engine**: [`Registry`], owning the delegate, extensions and receivers
//! - **Free functions**: [`Dispatcher`], [`DispatcherBuilder`], [`MapDecorator`]
//! - **Methods**: [`MethodDispatcher`], [`Bound`], [`MethodDispatcherBuilder`]
//! - **Declarations**: `registration` (with the `inventory` feature)
//! - **Testing**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use flexdispatch_core;

mod dispatcher;
mod method;
mod passthrough;
mod registry;
pub mod testing;

#[cfg(feature = "inventory")]
pub mod registration;

pub use dispatcher::{Dispatcher, DispatcherBuilder, MapDecorator};
pub use method::{Bound, MethodDispatcher, MethodDispatcherBuilder, MethodMapDecorator};
pub use passthrough::Passthrough;
pub use registry::Registry;

#[cfg(feature = "inventory")]
pub use inventory;
