//! The resolution engine shared by every dispatcher front-end.
//!
//! A [`Registry`] owns the delegate, the ordered extension list and the
//! ordered token-to-receiver mappings. Both lists are append-only.
//!
//! Lists sit behind `RwLock`s so dispatchers can be declared as statics and
//! grown through `&self`. No lock is held while user code runs: extensions
//! are snapshotted and the matching receiver is cloned out before it is
//! invoked, which lets receivers and inline callables re-enter the same
//! dispatcher.

use flexdispatch_core::{Dispatch, DispatchError, Extension, Receiver, Result};
use std::{
    borrow::Cow,
    fmt::Debug,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

type DynExtension<S, A, R, T> = Arc<dyn Extension<S, A, R, T>>;
type DynReceiver<S, A, R> = Arc<dyn Receiver<S, A, R>>;

struct Mapping<S: ?Sized, A, R, T> {
    token: T,
    receiver: DynReceiver<S, A, R>,
    name: &'static str,
}

/// Ordered extension list and token mappings around a delegate.
pub struct Registry<S: ?Sized, A, R, T> {
    name: Cow<'static, str>,
    delegate: DynExtension<S, A, R, T>,
    extensions: RwLock<Vec<DynExtension<S, A, R, T>>>,
    mappings: RwLock<Vec<Mapping<S, A, R, T>>>,
}

fn read<V>(lock: &RwLock<V>) -> RwLockReadGuard<'_, V> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<V>(lock: &RwLock<V>) -> RwLockWriteGuard<'_, V> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl<S: ?Sized, A, R, T> Registry<S, A, R, T> {
    /// Create a registry with no extensions and no receivers.
    pub fn new<D>(name: impl Into<Cow<'static, str>>, delegate: D) -> Self
    where
        D: Extension<S, A, R, T> + 'static,
    {
        Self {
            name: name.into(),
            delegate: Arc::new(delegate),
            extensions: RwLock::new(Vec::new()),
            mappings: RwLock::new(Vec::new()),
        }
    }

    /// The delegate's name, used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn rename(&mut self, name: impl Into<Cow<'static, str>>) {
        self.name = name.into();
    }

    /// Append an extension. Extensions run in registration order.
    pub fn extend<E>(&self, extension: E)
    where
        E: Extension<S, A, R, T> + 'static,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            dispatcher = %self.name,
            extension = std::any::type_name::<E>(),
            "registering extension"
        );
        write(&self.extensions).push(Arc::new(extension));
    }

    /// Number of registered extensions.
    pub fn extension_count(&self) -> usize {
        read(&self.extensions).len()
    }

    /// Number of registered receivers.
    pub fn receiver_count(&self) -> usize {
        read(&self.mappings).len()
    }

    /// Compute the dispatch outcome for a call without acting on it.
    ///
    /// Extensions are tried first; the first one that does not answer
    /// [`Dispatch::Undetermined`] wins. Otherwise the delegate decides.
    pub fn resolve(&self, instance: &S, args: &A) -> Dispatch<A, R, T, S> {
        let extensions = read(&self.extensions).clone();
        for extension in extensions {
            let outcome = extension.resolve(instance, args);
            if !outcome.is_undetermined() {
                return outcome;
            }
        }
        self.delegate.resolve(instance, args)
    }
}

impl<S, A, R, T> Registry<S, A, R, T>
where
    S: ?Sized,
    T: PartialEq + Debug,
{
    /// Register `receiver` under `token`.
    ///
    /// `receiver_name` is reported if another registration later
    /// conflicts with this one.
    pub fn insert<Rv>(&self, token: T, receiver: Rv, receiver_name: &'static str) -> Result<()>
    where
        Rv: Receiver<S, A, R> + 'static,
    {
        let mut mappings = write(&self.mappings);
        if let Some(existing) = mappings.iter().find(|m| m.token == token) {
            return Err(self.conflict(&token, existing.name));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dispatcher = %self.name,
            ?token,
            receiver = receiver_name,
            "registering receiver"
        );
        mappings.push(Mapping {
            token,
            receiver: Arc::new(receiver),
            name: receiver_name,
        });
        Ok(())
    }

    /// Fail with a conflict error if `token` already has a receiver.
    pub fn ensure_vacant(&self, token: &T) -> Result<()> {
        match read(&self.mappings).iter().find(|m| m.token == *token) {
            Some(existing) => Err(self.conflict(token, existing.name)),
            None => Ok(()),
        }
    }

    /// Returns true if a receiver is registered for `token`.
    pub fn contains(&self, token: &T) -> bool {
        read(&self.mappings).iter().any(|m| m.token == *token)
    }

    fn lookup(&self, token: &T) -> Option<(DynReceiver<S, A, R>, &'static str)> {
        read(&self.mappings)
            .iter()
            .find(|m| m.token == *token)
            .map(|m| (Arc::clone(&m.receiver), m.name))
    }

    fn conflict(&self, token: &T, existing: &str) -> DispatchError {
        DispatchError::AlreadyMapped {
            dispatcher: self.name.to_string(),
            token: format!("{token:?}"),
            existing: existing.to_string(),
        }
    }

    /// Resolve and carry out a call.
    pub fn invoke(&self, instance: &S, args: A) -> Result<R>
    where
        A: Debug,
    {
        match self.resolve(instance, &args) {
            Dispatch::Static(value) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(dispatcher = %self.name, "returning static value");
                Ok(value)
            }
            Dispatch::Inline(inline) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(dispatcher = %self.name, "invoking inline callable");
                Ok(inline.call(instance, args))
            }
            Dispatch::Token(token) => match self.lookup(&token) {
                Some((receiver, _name)) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        dispatcher = %self.name,
                        ?token,
                        receiver = _name,
                        "routing to receiver"
                    );
                    Ok(receiver.receive(instance, args))
                }
                None => Err(self.fail(DispatchError::Unmapped {
                    dispatcher: self.name.to_string(),
                    token: format!("{token:?}"),
                })),
            },
            Dispatch::Undetermined => Err(self.fail(DispatchError::Undetermined {
                dispatcher: self.name.to_string(),
                args: format!("{args:?}"),
            })),
        }
    }

    fn fail(&self, err: DispatchError) -> DispatchError {
        #[cfg(feature = "tracing")]
        tracing::debug!(dispatcher = %self.name, error = %err, "dispatch failed");
        err
    }
}
