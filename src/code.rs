//! The seam to the externally defined error-code domain.
//!
//! Courier error values do not own their code taxonomy. The surrounding
//! client library defines the code enumeration and its default descriptions;
//! this crate only requires that a code is a small comparable value with a
//! static fallback text. That contract is captured by [`ErrorCode`].

use std::fmt;

/// A machine-readable error code from an externally defined domain.
///
/// Implementors are expected to be small fieldless enums (or thin newtypes
/// over an integer space) owned by the client library, not by this crate.
/// The only operation required beyond comparability is the default
/// description lookup, which [`ClientError::message`](crate::ClientError::message)
/// uses as the fallback when no explicit detail message was attached.
///
/// # Contract
///
/// - `description` is total: every code has a description, including any
///   "no error" sentinel the domain may carry.
/// - `description` is pure: repeated calls for the same code return the
///   same static text.
///
/// # Example
///
/// ```rust
/// use courier_errors::ErrorCode;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum RespCode {
///     NoError,
///     QueueFull,
/// }
///
/// impl ErrorCode for RespCode {
///     fn description(&self) -> &'static str {
///         match self {
///             Self::NoError => "Success",
///             Self::QueueFull => "Local queue is full",
///         }
///     }
/// }
///
/// assert_eq!(RespCode::QueueFull.description(), "Local queue is full");
/// ```
pub trait ErrorCode: Copy + Eq + fmt::Debug {
    /// Get the default human-readable description for this code.
    ///
    /// Used as the error text when a [`ClientError`](crate::ClientError)
    /// was constructed without an explicit message.
    fn description(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_codes::RespCode;

    #[test]
    fn description_is_total_and_stable() {
        for code in [RespCode::InvalidArg, RespCode::QueueFull, RespCode::TxnConflict] {
            let first = code.description();
            assert!(!first.is_empty());
            assert_eq!(code.description(), first);
        }
    }

    #[test]
    fn codes_are_comparable() {
        assert_eq!(RespCode::QueueFull, RespCode::QueueFull);
        assert_ne!(RespCode::QueueFull, RespCode::InvalidArg);
    }

    fn takes_any_code<C: ErrorCode>(code: C) -> &'static str {
        code.description()
    }

    #[test]
    fn trait_is_usable_in_generic_context() {
        assert_eq!(
            takes_any_code(RespCode::TxnConflict),
            "Conflicting transactional state"
        );
    }
}
