//! Convenience macro for creating error values with format strings.
//!
//! [`ClientError::with_args`](crate::ClientError::with_args) takes a
//! pre-built argument list; the [`client_error!`](crate::client_error) macro
//! is the direct-argument spelling for producers that have the format
//! arguments in hand. Both go through the same rendering path and produce
//! identical output for identical inputs.
//!
//! Format strings must be literals, checked at compile time by
//! `format_args!`; a malformed template is a build error, never a runtime
//! failure.

/// Create a [`ClientError`](crate::ClientError), optionally with a formatted
/// detail message.
///
/// With only a code, this is [`ClientError::new`](crate::ClientError::new).
/// With a format string and arguments, the message is rendered exactly as
/// `format!` would render it.
///
/// # Example
///
/// ```rust
/// use courier_errors::{client_error, ErrorCode};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum RespCode {
///     QueueFull,
/// }
///
/// impl ErrorCode for RespCode {
///     fn description(&self) -> &'static str {
///         "Local queue is full"
///     }
/// }
///
/// let plain = client_error!(RespCode::QueueFull);
/// assert_eq!(plain.message(), "Local queue is full");
///
/// let detailed = client_error!(RespCode::QueueFull, "retry {} of {}", 2, 5);
/// assert_eq!(detailed.message(), "retry 2 of 5");
/// ```
#[macro_export]
macro_rules! client_error {
    ($code:expr $(,)?) => {
        $crate::ClientError::new($code)
    };
    ($code:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ClientError::with_args($code, ::core::format_args!($fmt $(, $arg)*))
    };
}
