//! # flexdispatch - Runtime Dispatch on Computed Values
//!
//! `flexdispatch` turns a function into a *dispatcher*: its body (the
//! delegate) inspects the arguments and computes a dispatch value, and the
//! call is routed to whichever receiver was registered for that value.
//! Third parties can add new cases later through extensions, without
//! touching the original declaration.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flexdispatch::{Dispatch, Dispatcher};
//!
//! let parse = Dispatcher::named("parse_person", |input: &String| {
//!     if input.trim_start().starts_with('{') {
//!         Dispatch::Token("json")
//!     } else {
//!         Dispatch::Undetermined
//!     }
//! });
//! parse.map("json", parse_json)?;
//!
//! // Later, somewhere else:
//! parse.extend(|input: &String| {
//!     if input.trim_start().starts_with('<') { Dispatch::Token("xml") } else { Dispatch::Undetermined }
//! });
//! parse.map("xml", parse_xml)?;
//! ```
//!
//! ## Declarations (`macros` feature)
//!
//! ```rust,ignore
//! #[flexdispatch::dispatcher]
//! fn greet(args: &Vec<String>) -> Dispatch<Vec<String>, String, &'static str> {
//!     match args.len() {
//!         0 => greet::static_result("Hello!".to_string()),
//!         1 => Dispatch::Token("name"),
//!         _ => Dispatch::Undetermined,
//!     }
//! }
//!
//! #[flexdispatch::receiver(greet, "name")]
//! fn say_hey(args: Vec<String>) -> String {
//!     format!("Hello, {}", args[0])
//! }
//! ```
//!
//! ## Features
//!
//! - `macros`: `#[dispatcher]` and `#[receiver]` (implies `inventory`)
//! - `inventory`: attribute-driven receiver registration
//! - `tracing`: registration and resolution events via `tracing`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use flexdispatch_core::{Dispatch, DispatchError, Extension, Inline, Receiver, Result, Unbound};

pub use flexdispatch_std::{
    Bound, Dispatcher, DispatcherBuilder, MapDecorator, MethodDispatcher, MethodDispatcherBuilder,
    MethodMapDecorator, Passthrough, Registry,
};

/// Testing utilities.
pub mod testing {
    pub use flexdispatch_std::testing::{CallLog, Tally};
}

/// Prelude module - common imports for flexdispatch.
///
/// # Usage
///
/// ```rust,ignore
/// use flexdispatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Dispatch, DispatchError, Dispatcher, MethodDispatcher};
}

#[cfg(feature = "macros")]
pub use flexdispatch_macros::{dispatcher, receiver};

#[cfg(feature = "inventory")]
pub use inventory;

#[cfg(feature = "inventory")]
#[doc(hidden)]
pub mod __private {
    pub use flexdispatch_std::registration::{ReceiverRegistration, install_on, install_receivers};
}
