//! Dispatchers for free functions.
//!
//! # Example
//!
//! ```rust,ignore
//! use flexdispatch::{Dispatch, Dispatcher};
//!
//! let greet = Dispatcher::named("greet", |args: &Vec<String>| match args.len() {
//!     1 => Dispatch::Token("name"),
//!     2 => Dispatch::Token("message"),
//!     _ => Dispatch::Undetermined,
//! });
//!
//! greet.map("name", |args: Vec<String>| format!("Hello, {}", args[0]))?;
//! assert_eq!(greet.call(vec!["Chris".into()])?, "Hello, Chris");
//! ```

use crate::{passthrough::Passthrough, registry::Registry};
use flexdispatch_core::{Dispatch, DispatchError, Result, Unbound};
use std::{any, borrow::Cow, fmt::Debug, sync::Arc};

/// A dispatcher whose delegate, extensions and receivers are plain
/// functions of the argument bundle `A`.
pub struct Dispatcher<A, R, T> {
    registry: Registry<(), A, R, T>,
}

impl<A, R, T> Dispatcher<A, R, T> {
    /// Create a dispatcher named after the delegate's type.
    pub fn new<F>(delegate: F) -> Self
    where
        F: Fn(&A) -> Dispatch<A, R, T> + Send + Sync + 'static,
    {
        Self::named(any::type_name::<F>(), delegate)
    }

    /// Create a dispatcher with an explicit name for error messages.
    pub fn named<F>(name: impl Into<Cow<'static, str>>, delegate: F) -> Self
    where
        F: Fn(&A) -> Dispatch<A, R, T> + Send + Sync + 'static,
    {
        Self {
            registry: Registry::new(name, Unbound(delegate)),
        }
    }

    /// Start building a dispatcher in a setup phase.
    pub fn builder<F>(delegate: F) -> DispatcherBuilder<A, R, T>
    where
        F: Fn(&A) -> Dispatch<A, R, T> + Send + Sync + 'static,
    {
        DispatcherBuilder {
            dispatcher: Self::new(delegate),
            error: None,
        }
    }

    /// The delegate's name.
    pub fn name(&self) -> &str {
        self.registry.name()
    }

    /// Add an extension, consulted before the delegate and after every
    /// previously added extension.
    pub fn extend<F>(&self, extension: F)
    where
        F: Fn(&A) -> Dispatch<A, R, T> + Send + Sync + 'static,
    {
        self.registry.extend(Unbound(extension));
    }

    /// Compute the dispatch outcome for `args` without invoking anything.
    pub fn resolve(&self, args: &A) -> Dispatch<A, R, T> {
        self.registry.resolve(&(), args)
    }

    /// Outcome returning `value` directly.
    pub fn static_result(value: R) -> Dispatch<A, R, T> {
        Dispatch::Static(value)
    }

    /// Outcome invoking `f` with the call arguments.
    pub fn inline<F>(f: F) -> Dispatch<A, R, T>
    where
        F: FnOnce(A) -> R + 'static,
    {
        Dispatch::inline(f)
    }

    /// Number of registered extensions.
    pub fn extension_count(&self) -> usize {
        self.registry.extension_count()
    }

    /// Number of registered receivers.
    pub fn receiver_count(&self) -> usize {
        self.registry.receiver_count()
    }
}

impl<A, R, T> Dispatcher<A, R, T>
where
    T: PartialEq + Debug,
{
    /// Register `receiver` for `token`.
    pub fn map<F>(&self, token: T, receiver: F) -> Result<()>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.registry
            .insert(token, Unbound(receiver), any::type_name::<F>())
    }

    /// Decorator-style registration: reserve `token` now, attach the
    /// receiver with [`MapDecorator::apply`].
    pub fn mapping(&self, token: T) -> Result<MapDecorator<'_, A, R, T>> {
        self.registry.ensure_vacant(&token)?;
        Ok(MapDecorator {
            dispatcher: self,
            token,
        })
    }

    /// Returns true if a receiver is registered for `token`.
    pub fn contains(&self, token: &T) -> bool {
        self.registry.contains(token)
    }

    /// Dispatch a call.
    pub fn call(&self, args: A) -> Result<R>
    where
        A: Debug,
    {
        self.registry.invoke(&(), args)
    }
}

impl<A, R, T> Debug for Dispatcher<A, R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("name", &self.name())
            .field("extensions", &self.extension_count())
            .field("receivers", &self.receiver_count())
            .finish()
    }
}

/// Pending registration created by [`Dispatcher::mapping`].
pub struct MapDecorator<'d, A, R, T> {
    dispatcher: &'d Dispatcher<A, R, T>,
    token: T,
}

impl<A, R, T> MapDecorator<'_, A, R, T>
where
    T: PartialEq + Debug,
{
    /// Register `receiver` and hand back a pass-through handle to it.
    pub fn apply<F>(self, receiver: F) -> Result<Passthrough<F>>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let shared = Arc::new(receiver);
        let registered = Arc::clone(&shared);
        self.dispatcher.registry.insert(
            self.token,
            Unbound(move |args: A| registered(args)),
            any::type_name::<F>(),
        )?;
        Ok(Passthrough::new(shared))
    }
}

/// Collects extensions and receivers before a dispatcher is first used.
pub struct DispatcherBuilder<A, R, T> {
    dispatcher: Dispatcher<A, R, T>,
    error: Option<DispatchError>,
}

impl<A, R, T> DispatcherBuilder<A, R, T>
where
    T: PartialEq + Debug,
{
    /// Override the name used in error messages.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.dispatcher.registry.rename(name);
        self
    }

    /// Add an extension.
    pub fn extend<F>(self, extension: F) -> Self
    where
        F: Fn(&A) -> Dispatch<A, R, T> + Send + Sync + 'static,
    {
        self.dispatcher.extend(extension);
        self
    }

    /// Register a receiver. A conflict is reported by [`build`](Self::build).
    pub fn map<F>(mut self, token: T, receiver: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        if self.error.is_none() {
            self.error = self.dispatcher.map(token, receiver).err();
        }
        self
    }

    /// Finish building, failing with the first registration conflict.
    pub fn build(self) -> Result<Dispatcher<A, R, T>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.dispatcher),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallLog, Tally};

    type Args = Vec<String>;

    fn args(values: &[&str]) -> Args {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn greet() -> Dispatcher<Args, String, &'static str> {
        let greet = Dispatcher::named("greet", |args: &Args| match args.len() {
            1 => Dispatch::Token("name"),
            2 => Dispatch::Token("message"),
            _ => Dispatch::Undetermined,
        });
        greet
            .map("name", |args: Args| format!("Hello, {}", args[0]))
            .unwrap();
        greet
    }

    #[test]
    fn test_happy_path() {
        assert_eq!(greet().call(args(&["Chris"])).unwrap(), "Hello, Chris");
    }

    #[test]
    fn test_dispatch_errors() {
        let greet = greet();

        assert!(matches!(
            greet.call(args(&["foo", "bar"])),
            Err(DispatchError::Unmapped { .. })
        ));
        assert!(matches!(
            greet.call(args(&["foo", "bar", "bash"])),
            Err(DispatchError::Undetermined { .. })
        ));
        assert!(matches!(
            greet.map("name", |args: Args| args.concat()),
            Err(DispatchError::AlreadyMapped { .. })
        ));
    }

    #[test]
    fn test_map_after_first_call() {
        let greet = greet();
        assert!(greet.call(args(&["Bar", "Foo"])).is_err());

        greet
            .map("message", |args: Args| format!("{} {}", args[1], args[0]))
            .unwrap();
        assert_eq!(greet.call(args(&["Bar", "Foo"])).unwrap(), "Foo Bar");
    }

    #[test]
    fn test_default_name_is_delegate_type() {
        fn by_len(args: &Args) -> Dispatch<Args, String, usize> {
            Dispatch::Token(args.len())
        }

        let dispatcher = Dispatcher::new(by_len);
        assert!(dispatcher.name().ends_with("by_len"));
    }

    #[test]
    fn test_extension_short_circuits_delegate() {
        let delegate_calls = Tally::new();
        let probe = delegate_calls.clone();
        let greet = Dispatcher::named("greet", move |_: &Args| {
            probe.bump();
            Dispatch::Token("name")
        });
        greet.map("name", |args: Args| args.concat()).unwrap();
        greet.map("shout", |args: Args| args.concat().to_uppercase()).unwrap();
        greet.extend(|args: &Args| {
            if args.iter().any(|a| a.ends_with('!')) { Dispatch::Token("shout") } else { Dispatch::Undetermined }
        });

        assert_eq!(greet.call(args(&["hey!"])).unwrap(), "HEY!");
        assert_eq!(delegate_calls.count(), 0);

        assert_eq!(greet.call(args(&["hey"])).unwrap(), "hey");
        assert_eq!(delegate_calls.count(), 1);
    }

    #[test]
    fn test_extensions_consulted_in_registration_order() {
        let log = CallLog::new();
        let greet: Dispatcher<Args, String, &str> = Dispatcher::named("greet", {
            let log = log.clone();
            move |_: &Args| {
                log.record("delegate");
                Dispatch::Undetermined
            }
        });
        for (name, answer) in [("first", None), ("second", Some("two")), ("third", Some("three"))] {
            let log = log.clone();
            greet.extend(move |_: &Args| {
                log.record(name);
                answer.into()
            });
        }
        greet.map("two", |_: Args| "second won".to_string()).unwrap();
        greet.map("three", |_: Args| "third won".to_string()).unwrap();

        assert_eq!(greet.call(args(&["x"])).unwrap(), "second won");
        assert_eq!(log.entries(), vec!["first", "second"]);
    }

    #[test]
    fn test_static_and_inline_bypass_receivers() {
        let greet = Dispatcher::named("greet", |args: &Args| match args.len() {
            0 => Dispatcher::static_result("Hello!".to_string()),
            1 => Dispatcher::inline(|args: Args| format!("Hello, {}!", args[0])),
            _ => Dispatch::Token("name"),
        });
        let receiver_calls = Tally::new();
        let probe = receiver_calls.clone();
        greet
            .map("name", move |_: Args| {
                probe.bump();
                String::new()
            })
            .unwrap();

        assert_eq!(greet.call(Vec::new()).unwrap(), "Hello!");
        assert_eq!(greet.call(args(&["Bob"])).unwrap(), "Hello, Bob!");
        assert_eq!(receiver_calls.count(), 0);
    }

    #[test]
    fn test_falsy_tokens_are_routable() {
        let parity = Dispatcher::named("parity", |n: &u32| Dispatch::Token(n % 2));
        parity.map(0, |n: u32| format!("{n} is even")).unwrap();
        parity.map(1, |n: u32| format!("{n} is odd")).unwrap();

        assert_eq!(parity.call(4).unwrap(), "4 is even");
        assert_eq!(parity.call(7).unwrap(), "7 is odd");
    }

    #[test]
    fn test_mapping_decorator() {
        let greet = greet();
        let with_message = greet
            .mapping("message")
            .unwrap()
            .apply(|args: Args| format!("{} {}", args[1], args[0]))
            .unwrap();

        assert_eq!(with_message(args(&["Bar", "Foo"])), "Foo Bar");
        assert_eq!(greet.call(args(&["Bar", "Foo"])).unwrap(), "Foo Bar");
        assert!(matches!(
            greet.mapping("name"),
            Err(DispatchError::AlreadyMapped { .. })
        ));
    }

    #[test]
    fn test_receiver_errors_pass_through() {
        let parse = Dispatcher::named("parse", |_: &String| Dispatch::Token("int"));
        parse
            .map("int", |s: String| s.parse::<i64>())
            .unwrap();

        assert_eq!(parse.call("42".to_string()).unwrap(), Ok(42));
        assert!(parse.call("forty-two".to_string()).unwrap().is_err());
    }

    #[test]
    fn test_builder() {
        let greet = Dispatcher::builder(|args: &Args| Dispatch::from(args.first().map(|_| "name")))
            .name("greet")
            .map("name", |args: Args| format!("Hello, {}", args[0]))
            .extend(|args: &Args| {
                if args.is_empty() { Dispatch::Static("Hello!".to_string()) } else { Dispatch::Undetermined }
            })
            .build()
            .unwrap();

        assert_eq!(greet.name(), "greet");
        assert_eq!(greet.call(Vec::new()).unwrap(), "Hello!");
        assert_eq!(greet.call(args(&["Ann"])).unwrap(), "Hello, Ann");
        assert!(greet.contains(&"name"));
    }

    #[test]
    fn test_builder_reports_conflict() {
        let result = Dispatcher::builder(|_: &Args| Dispatch::Token("name"))
            .map("name", |_: Args| "a".to_string())
            .map("name", |_: Args| "b".to_string())
            .build();

        assert!(matches!(result, Err(DispatchError::AlreadyMapped { .. })));
    }
}
