//! Attribute-driven receiver registration.
//!
//! `#[receiver]` submits a [`ReceiverRegistration`] to `inventory`. When a
//! dispatcher declared with `#[dispatcher]` is first accessed, it collects
//! every registration aimed at it via [`install_receivers`].

use flexdispatch_core::Result;
use std::any::{Any, TypeId};

/// A receiver submitted through `inventory`.
pub struct ReceiverRegistration {
    /// Type id of the declaration the receiver targets.
    pub target: fn() -> TypeId,
    /// Registers the receiver on the type-erased dispatcher.
    pub install: fn(&dyn Any) -> Result<()>,
    /// Path of the receiver function, for diagnostics.
    pub receiver: &'static str,
}

inventory::collect!(ReceiverRegistration);

/// Install every registration targeting declaration `K` on `dispatcher`.
///
/// Returns the number of receivers installed.
pub fn install_receivers<K, D>(dispatcher: &D) -> Result<usize>
where
    K: 'static,
    D: 'static,
{
    let target = TypeId::of::<K>();
    let mut installed = 0;
    for registration in inventory::iter::<ReceiverRegistration>() {
        if (registration.target)() != target {
            continue;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(receiver = registration.receiver, "installing declared receiver");
        (registration.install)(dispatcher as &dyn Any)?;
        installed += 1;
    }
    Ok(installed)
}

/// Downcast `dispatcher` to `D` and run `install` on it.
///
/// Used by generated `install` functions, which know the concrete
/// dispatcher type of their target.
///
/// # Panics
///
/// In debug builds, if `dispatcher` is not a `D`. Release builds log the
/// mismatch (with `tracing`) and skip the registration.
pub fn install_on<D, F>(dispatcher: &dyn Any, install: F) -> Result<()>
where
    D: 'static,
    F: FnOnce(&D) -> Result<()>,
{
    match dispatcher.downcast_ref::<D>() {
        Some(dispatcher) => install(dispatcher),
        None => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                expected = std::any::type_name::<D>(),
                "receiver registration skipped: dispatcher type mismatch"
            );
            if cfg!(debug_assertions) {
                panic!(
                    "dispatcher type mismatch: registration expected `{}`",
                    std::any::type_name::<D>()
                );
            }
            Ok(())
        }
    }
}
