//! Attribute macros for flexdispatch.
//!
//! - `#[dispatcher]` - Declare a dispatcher from its delegate function
//! - `#[receiver]` - Register a function as the receiver for a token

use proc_macro::TokenStream;

mod dispatcher;
mod receiver;

/// Declare a dispatcher.
///
/// The function becomes the delegate. A unit struct with the same name is
/// generated that dereferences to a process-wide dispatcher.
///
/// ```rust,ignore
/// #[flexdispatch::dispatcher]
/// fn greet(args: &Vec<String>) -> Dispatch<Vec<String>, String, &'static str> {
///     match args.len() {
///         0 => greet::static_result("Hello!".to_string()),
///         1 => Dispatch::Token("name"),
///         _ => Dispatch::Undetermined,
///     }
/// }
///
/// assert_eq!(greet.call(vec![])?, "Hello!");
/// ```
///
/// A delegate taking `(&S, &A)` declares a method dispatcher for `S`.
#[proc_macro_attribute]
pub fn dispatcher(attr: TokenStream, item: TokenStream) -> TokenStream {
    dispatcher::dispatcher_impl(attr, item)
}

/// Register a function as the receiver for a token.
///
/// ```rust,ignore
/// #[flexdispatch::receiver(greet, "name")]
/// fn say_hey(args: Vec<String>) -> String {
///     format!("Hello, {}", args[0])
/// }
/// ```
///
/// The function itself is left untouched.
#[proc_macro_attribute]
pub fn receiver(attr: TokenStream, item: TokenStream) -> TokenStream {
    receiver::receiver_impl(attr, item)
}
