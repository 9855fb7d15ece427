//! Dispatchers for methods.
//!
//! A [`MethodDispatcher`] is declared once per owning type and bound to an
//! instance at the call site with [`MethodDispatcher::bind`]. The bound
//! instance is passed first to the delegate, every extension, the matched
//! receiver and any inline callable.
//!
//! # Example
//!
//! ```rust,ignore
//! static GREET: LazyLock<MethodDispatcher<Greeter, Greeting, String, &str>> =
//!     LazyLock::new(|| MethodDispatcher::named("Greeter::greet", Greeter::dispatch_greet));
//!
//! impl Greeter {
//!     pub fn greet(&self, greeting: Greeting) -> flexdispatch::Result<String> {
//!         GREET.bind(self).call(greeting)
//!     }
//! }
//! ```

use crate::{passthrough::Passthrough, registry::Registry};
use flexdispatch_core::{Dispatch, DispatchError, Extension, Receiver, Result};
use std::{any, borrow::Cow, fmt::Debug, sync::Arc};

/// A dispatcher for methods of `S`.
pub struct MethodDispatcher<S: ?Sized, A, R, T> {
    registry: Registry<S, A, R, T>,
}

impl<S: ?Sized, A, R, T> MethodDispatcher<S, A, R, T> {
    /// Create a dispatcher named after the delegate's type.
    pub fn new<D>(delegate: D) -> Self
    where
        D: Extension<S, A, R, T> + 'static,
    {
        Self::named(any::type_name::<D>(), delegate)
    }

    /// Create a dispatcher with an explicit name for error messages.
    pub fn named<D>(name: impl Into<Cow<'static, str>>, delegate: D) -> Self
    where
        D: Extension<S, A, R, T> + 'static,
    {
        Self {
            registry: Registry::new(name, delegate),
        }
    }

    /// Start building a dispatcher in a setup phase.
    pub fn builder<D>(delegate: D) -> MethodDispatcherBuilder<S, A, R, T>
    where
        D: Extension<S, A, R, T> + 'static,
    {
        MethodDispatcherBuilder {
            dispatcher: Self::new(delegate),
            error: None,
        }
    }

    /// Bind `instance` as the leading argument of every call.
    pub fn bind<'a>(&'a self, instance: &'a S) -> Bound<'a, S, A, R, T> {
        Bound {
            dispatcher: self,
            instance,
        }
    }

    /// The delegate's name.
    pub fn name(&self) -> &str {
        self.registry.name()
    }

    /// Add an extension.
    pub fn extend<E>(&self, extension: E)
    where
        E: Extension<S, A, R, T> + 'static,
    {
        self.registry.extend(extension);
    }

    /// Compute the dispatch outcome for a call without invoking anything.
    pub fn resolve(&self, instance: &S, args: &A) -> Dispatch<A, R, T, S> {
        self.registry.resolve(instance, args)
    }

    /// Outcome returning `value` directly.
    pub fn static_result(value: R) -> Dispatch<A, R, T, S> {
        Dispatch::Static(value)
    }

    /// Outcome invoking `f` with the bound instance and call arguments.
    pub fn inline<F>(f: F) -> Dispatch<A, R, T, S>
    where
        F: FnOnce(&S, A) -> R + 'static,
    {
        Dispatch::inline_method(f)
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

impl<S, A, R, T> MethodDispatcher<S, A, R, T>
where
    S: ?Sized,
    T: PartialEq + Debug,
{
    /// Register `receiver` for `token`.
    pub fn map<Rv>(&self, token: T, receiver: Rv) -> Result<()>
    where
        Rv: Receiver<S, A, R> + 'static,
    {
        self.registry
            .insert(token, receiver, any::type_name::<Rv>())
    }

    /// Decorator-style registration, see [`MethodMapDecorator::apply`].
    pub fn mapping(&self, token: T) -> Result<MethodMapDecorator<'_, S, A, R, T>> {
        self.registry.ensure_vacant(&token)?;
        Ok(MethodMapDecorator {
            dispatcher: self,
            token,
        })
    }

    /// Returns true if a receiver is registered for `token`.
    pub fn contains(&self, token: &T) -> bool {
        self.registry.contains(token)
    }

    /// Dispatch a call with the instance passed explicitly.
    pub fn call(&self, instance: &S, args: A) -> Result<R>
    where
        A: Debug,
    {
        self.registry.invoke(instance, args)
    }
}

impl<S: ?Sized, A, R, T> Debug for MethodDispatcher<S, A, R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodDispatcher")
            .field("name", &self.name())
            .field("extensions", &self.extension_count())
            .field("receivers", &self.receiver_count())
            .finish()
    }
}

/// A [`MethodDispatcher`] with its instance already supplied.
pub struct Bound<'a, S: ?Sized, A, R, T> {
    dispatcher: &'a MethodDispatcher<S, A, R, T>,
    instance: &'a S,
}

impl<S: ?Sized, A, R, T> Clone for Bound<'_, S, A, R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, A, R, T> Copy for Bound<'_, S, A, R, T> {}

impl<'a, S: ?Sized, A, R, T> Bound<'a, S, A, R, T> {
    /// The bound instance.
    pub fn instance(&self) -> &'a S {
        self.instance
    }

    /// The underlying unbound dispatcher.
    pub fn dispatcher(&self) -> &'a MethodDispatcher<S, A, R, T> {
        self.dispatcher
    }

    /// Compute the dispatch outcome without invoking anything.
    pub fn resolve(&self, args: &A) -> Dispatch<A, R, T, S> {
        self.dispatcher.resolve(self.instance, args)
    }
}

impl<S, A, R, T> Bound<'_, S, A, R, T>
where
    S: ?Sized,
    A: Debug,
    T: PartialEq + Debug,
{
    /// Dispatch a call on the bound instance.
    pub fn call(&self, args: A) -> Result<R> {
        self.dispatcher.call(self.instance, args)
    }
}

/// Pending registration created by [`MethodDispatcher::mapping`].
pub struct MethodMapDecorator<'d, S: ?Sized, A, R, T> {
    dispatcher: &'d MethodDispatcher<S, A, R, T>,
    token: T,
}

impl<S, A, R, T> MethodMapDecorator<'_, S, A, R, T>
where
    S: ?Sized,
    T: PartialEq + Debug,
{
    /// Register `receiver` and hand back a pass-through handle to it.
    pub fn apply<F>(self, receiver: F) -> Result<Passthrough<F>>
    where
        F: Fn(&S, A) -> R + Send + Sync + 'static,
    {
        let shared = Arc::new(receiver);
        let registered = Arc::clone(&shared);
        self.dispatcher.registry.insert(
            self.token,
            move |instance: &S, args: A| registered(instance, args),
            any::type_name::<F>(),
        )?;
        Ok(Passthrough::new(shared))
    }
}

/// Collects extensions and receivers before a method dispatcher is used.
pub struct MethodDispatcherBuilder<S: ?Sized, A, R, T> {
    dispatcher: MethodDispatcher<S, A, R, T>,
    error: Option<DispatchError>,
}

impl<S, A, R, T> MethodDispatcherBuilder<S, A, R, T>
where
    S: ?Sized,
    T: PartialEq + Debug,
{
    /// Override the name used in error messages.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.dispatcher.registry.rename(name);
        self
    }

    /// Add an extension.
    pub fn extend<E>(self, extension: E) -> Self
    where
        E: Extension<S, A, R, T> + 'static,
    {
        self.dispatcher.extend(extension);
        self
    }

    /// Register a receiver. A conflict is reported by [`build`](Self::build).
    pub fn map<Rv>(mut self, token: T, receiver: Rv) -> Self
    where
        Rv: Receiver<S, A, R> + 'static,
    {
        if self.error.is_none() {
            self.error = self.dispatcher.map(token, receiver).err();
        }
        self
    }

    /// Finish building, failing with the first registration conflict.
    pub fn build(self) -> Result<MethodDispatcher<S, A, R, T>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.dispatcher),
        }
    }
}
