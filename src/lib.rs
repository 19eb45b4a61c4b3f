//! # Courier Errors
//!
//! Consume-once error values for the Courier client library.
//!
//! ## Design Philosophy
//!
//! 1. **One error, one owner**: every [`ClientError`] is consumed exactly
//!    once, either by dropping it or by converting it through the legacy
//!    bridge. Ownership is enforced by move semantics, so "destroy twice"
//!    and "use after destroy" do not compile.
//! 2. **Immutable after construction**: the code, message, and flags are
//!    fixed when the value is built. There are no public setters; the fatal
//!    and transaction-abort markers are applied by construction-time
//!    builders reserved for error producers.
//! 3. **The code domain stays external**: this crate does not define error
//!    codes. Producers bring their own code type via the [`ErrorCode`]
//!    trait, which also supplies the default description used when no
//!    explicit message was attached.
//! 4. **Owned message text is cleared on drop**: detail messages may carry
//!    operational context, so the backing storage is zeroized when the
//!    value is consumed.
//!
//! ## Quick Start
//!
//! ```rust
//! use courier_errors::{client_error, ClientError, ErrorCode};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum RespCode {
//!     QueueFull,
//!     InvalidArg,
//! }
//!
//! impl ErrorCode for RespCode {
//!     fn description(&self) -> &'static str {
//!         match self {
//!             Self::QueueFull => "Local queue is full",
//!             Self::InvalidArg => "Invalid argument or configuration",
//!         }
//!     }
//! }
//!
//! fn enqueue(pending: usize, limit: usize) -> Result<(), ClientError<RespCode>> {
//!     if pending >= limit {
//!         return Err(client_error!(
//!             RespCode::QueueFull,
//!             "{} messages pending, limit is {}",
//!             pending,
//!             limit
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = enqueue(10, 10).unwrap_err();
//! assert_eq!(err.code(), RespCode::QueueFull);
//! assert_eq!(err.message(), "10 messages pending, limit is 10");
//! assert!(!err.is_fatal());
//! ```
//!
//! ## Legacy Call Sites
//!
//! Older call sites receive errors as a `(code, fixed byte buffer)` pair.
//! [`ClientError::to_legacy`] writes the message (truncated,
//! NUL-terminated) into a caller-supplied buffer, returns the code, and
//! consumes the value in the same call:
//!
//! ```rust
//! # use courier_errors::{client_error, ErrorCode};
//! # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! # enum RespCode { QueueFull }
//! # impl ErrorCode for RespCode {
//! #     fn description(&self) -> &'static str { "Local queue is full" }
//! # }
//! let err = client_error!(RespCode::QueueFull, "retry {} of {}", 2, 5);
//!
//! let mut buf = [0u8; 64];
//! let code = err.to_legacy(&mut buf);
//! // `err` is gone; using it again would not compile.
//!
//! assert_eq!(code, RespCode::QueueFull);
//! assert_eq!(&buf[..13], b"retry 2 of 5\0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fmt;
use zeroize::Zeroize;

pub mod code;
mod convenience;
mod legacy;

pub use code::ErrorCode;

// ============================================================================
// Client Error Value
// ============================================================================

/// An owned, consume-once error value.
///
/// Carries a machine-readable code from an externally defined domain, an
/// optional human-readable detail message, and two boolean modifiers set by
/// the producer at construction time:
///
/// - `fatal`: the owning client instance cannot recover from this error
/// - `txn_abortable`: the caller must abort its in-flight transaction
///
/// # Lifecycle
///
/// Constructed once, inspected any number of times through the accessors,
/// then consumed exactly once: by dropping it or by passing it to
/// [`to_legacy`](ClientError::to_legacy). There is no update or reset
/// operation, and the type deliberately implements neither `Clone` nor
/// `Copy`: callers that need to retain error details across a consumption
/// boundary copy out the code, message, and flags first.
///
/// # Allocation Policy
///
/// Construction allocates only for the optional message, using the standard
/// allocator. Allocation failure aborts the process (std policy); apart from
/// that, construction cannot fail.
#[must_use = "an error value must be consumed exactly once"]
pub struct ClientError<C: ErrorCode> {
    code: C,
    /// `None` when no template was supplied; otherwise non-empty and
    /// NUL-free, fixed for the lifetime of the value.
    message: Option<String>,
    fatal: bool,
    txn_abortable: bool,
}

impl<C: ErrorCode> ClientError<C> {
    /// Create an error carrying only a code, with no detail message.
    ///
    /// [`message`](ClientError::message) will fall back to the code's
    /// default description.
    #[inline]
    pub fn new(code: C) -> Self {
        Self {
            code,
            message: None,
            fatal: false,
            txn_abortable: false,
        }
    }

    /// Create an error with a message rendered from a forwarded format
    /// argument list.
    ///
    /// This is the entry point for producers that want to forward a
    /// pre-built argument list; the [`client_error!`](crate::client_error)
    /// macro is the direct-argument equivalent and goes through this same
    /// path, so both produce identical output for identical inputs.
    ///
    /// Rendering happens in a single pass into a growable buffer. An empty
    /// rendering is treated as "no message supplied"; interior NUL bytes are
    /// stripped so the stored message is always safe to hand to the legacy
    /// `(code, buffer)` convention.
    pub fn with_args(code: C, args: fmt::Arguments<'_>) -> Self {
        let mut rendered = fmt::format(args);
        if rendered.contains('\0') {
            rendered.retain(|c| c != '\0');
        }
        Self {
            code,
            message: if rendered.is_empty() {
                None
            } else {
                Some(rendered)
            },
            fatal: false,
            txn_abortable: false,
        }
    }

    /// Mark this error as fatal for the owning client instance.
    ///
    /// Construction-time builder for error producers. Consumes and returns
    /// the value; there is no way to change the flag once the error has been
    /// handed to a consumer.
    #[inline]
    pub fn with_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    /// Mark this error as requiring the caller to abort its in-flight
    /// transaction.
    ///
    /// Construction-time builder for error producers, like
    /// [`with_fatal`](ClientError::with_fatal).
    #[inline]
    pub fn with_txn_abortable(mut self) -> Self {
        self.txn_abortable = true;
        self
    }

    /// Get the error code.
    #[inline]
    pub fn code(&self) -> C {
        self.code
    }

    /// Get the human-readable error text.
    ///
    /// Returns the detail message attached at construction, or the code's
    /// default description when none was supplied. The returned slice
    /// borrows from `self` and is byte-identical across repeated calls.
    #[inline]
    pub fn message(&self) -> &str {
        match self.message {
            Some(ref msg) => msg.as_str(),
            None => self.code.description(),
        }
    }

    /// Check whether this error is fatal for the owning client instance.
    #[inline]
    pub const fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Check whether the caller must abort its in-flight transaction.
    #[inline]
    pub const fn is_txn_abortable(&self) -> bool {
        self.txn_abortable
    }
}

impl<C: ErrorCode> Drop for ClientError<C> {
    /// Clears the owned message storage before releasing it.
    fn drop(&mut self) {
        if let Some(ref mut msg) = self.message {
            msg.zeroize();
        }
    }
}

impl<C: ErrorCode> fmt::Display for ClientError<C> {
    /// Renders the detail message, or the code's default description when
    /// none was attached.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl<C: ErrorCode> fmt::Debug for ClientError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientError")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("fatal", &self.fatal)
            .field("txn_abortable", &self.txn_abortable)
            .finish()
    }
}

impl<C: ErrorCode> std::error::Error for ClientError<C> {}

// ============================================================================
// Tests
// ============================================================================
