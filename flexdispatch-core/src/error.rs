//! Error types for flexdispatch.
//!
//! Dispatch failures are reported through a single [`DispatchError`] type so
//! callers can tell them apart from errors produced by their own receivers.
//! Errors raised by delegates, extensions or receivers are never wrapped.

use thiserror::Error;

/// A specialized `Result` for dispatch operations.
pub type Result<T, E = DispatchError> = std::result::Result<T, E>;

/// Errors produced by the dispatch engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Neither an extension nor the delegate produced a dispatch value.
    #[error("dispatch value could not be determined for function {dispatcher} for arguments {args}")]
    Undetermined {
        /// Name of the dispatcher's delegate.
        dispatcher: String,
        /// Debug rendering of the call arguments.
        args: String,
    },

    /// A dispatch value was produced but no receiver is registered for it.
    #[error("no function mapped to dispatch value {token} for function {dispatcher}")]
    Unmapped {
        /// Name of the dispatcher's delegate.
        dispatcher: String,
        /// Debug rendering of the unmatched token.
        token: String,
    },

    /// A receiver was registered for a token that already has one.
    #[error("dispatch value {token} of function {dispatcher} is already mapped to {existing}")]
    AlreadyMapped {
        /// Name of the dispatcher's delegate.
        dispatcher: String,
        /// Debug rendering of the conflicting token.
        token: String,
        /// Name of the receiver already registered for the token.
        existing: String,
    },
}

impl DispatchError {
    /// Name of the dispatcher that raised the error.
    pub fn dispatcher(&self) -> &str {
        match self {
            DispatchError::Undetermined { dispatcher, .. }
            | DispatchError::Unmapped { dispatcher, .. }
            | DispatchError::AlreadyMapped { dispatcher, .. } => dispatcher,
        }
    }
}
