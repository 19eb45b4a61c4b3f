//! Bridge from modern error values to the legacy `(code, buffer)` convention.
//!
//! Older Courier call sites report failures as a bare code plus an error
//! string written into a caller-supplied fixed-capacity buffer. This module
//! is the sole conversion point from [`ClientError`] into that convention;
//! no converse (legacy to modern) operation exists.
//!
//! The conversion consumes the error value. That is not an accident of the
//! API: the legacy contract transfers ownership of the error's information
//! into the caller's buffer, and the value must not be observable afterward.

use crate::{ClientError, ErrorCode};

impl<C: ErrorCode> ClientError<C> {
    /// Convert this error into the legacy `(code, buffer)` convention,
    /// consuming it.
    ///
    /// Writes the error text (the detail message, or the code's default
    /// description when none was attached) into `buf`, truncated to fit and
    /// NUL-terminated within the buffer when `buf` is non-empty. A
    /// zero-length buffer receives no bytes. Truncation happens at a UTF-8
    /// character boundary, so the written prefix is always valid UTF-8.
    ///
    /// Returns the error code. The value itself is destroyed inside this
    /// call regardless of whether truncation occurred; the borrow checker
    /// rejects any later use of it.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use courier_errors::{client_error, ErrorCode};
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// # enum RespCode { QueueFull }
    /// # impl ErrorCode for RespCode {
    /// #     fn description(&self) -> &'static str { "Local queue is full" }
    /// # }
    /// let err = client_error!(RespCode::QueueFull, "retry {} of {}", 2, 5);
    ///
    /// let mut buf = [0u8; 8];
    /// let code = err.to_legacy(&mut buf);
    ///
    /// assert_eq!(code, RespCode::QueueFull);
    /// assert_eq!(&buf, b"retry 2\0");
    /// ```
    ///
    /// Touching the value after conversion is rejected at compile time:
    ///
    /// ```rust,compile_fail
    /// # use courier_errors::{client_error, ErrorCode};
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// # enum RespCode { QueueFull }
    /// # impl ErrorCode for RespCode {
    /// #     fn description(&self) -> &'static str { "Local queue is full" }
    /// # }
    /// let err = client_error!(RespCode::QueueFull, "retry {} of {}", 2, 5);
    /// let mut buf = [0u8; 64];
    /// let _code = err.to_legacy(&mut buf);
    /// err.message(); // error: borrow of moved value
    /// ```
    pub fn to_legacy(self, buf: &mut [u8]) -> C {
        let code = self.code();
        write_truncated(self.message(), buf);
        code
    }
}

/// Write `text` into `buf` as a NUL-terminated byte string, truncating at a
/// char boundary to leave room for the terminator. Writes nothing into an
/// empty buffer.
fn write_truncated(text: &str, buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }
    let copied = truncate_to_boundary(text, buf.len() - 1);
    buf[..copied.len()].copy_from_slice(copied.as_bytes());
    buf[copied.len()] = 0;
}

/// Longest prefix of `text` that fits in `max` bytes without splitting a
/// UTF-8 character.
fn truncate_to_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_codes::RespCode;

    fn message_in(buf: &[u8]) -> &str {
        let nul = buf
            .iter()
            .position(|&b| b == 0)
            .expect("legacy buffer must be NUL-terminated");
        std::str::from_utf8(&buf[..nul]).expect("legacy buffer must hold valid UTF-8")
    }

    #[test]
    fn returns_the_original_code() {
        let err = ClientError::with_args(RespCode::TxnConflict, format_args!("epoch fenced"));
        let mut buf = [0u8; 64];
        assert_eq!(err.to_legacy(&mut buf), RespCode::TxnConflict);
    }

    #[test]
    fn writes_full_message_when_it_fits() {
        let err = ClientError::with_args(RespCode::QueueFull, format_args!("retry {} of {}", 2, 5));
        let mut buf = [0xffu8; 64];
        err.to_legacy(&mut buf);
        assert_eq!(message_in(&buf), "retry 2 of 5");
    }

    #[test]
    fn falls_back_to_description_without_message() {
        let err = ClientError::new(RespCode::QueueFull);
        let mut buf = [0u8; 64];
        err.to_legacy(&mut buf);
        assert_eq!(message_in(&buf), "Local queue is full");
    }

    #[test]
    fn truncates_to_capacity_minus_terminator() {
        let err = ClientError::with_args(RespCode::QueueFull, format_args!("retry 2 of 5"));
        let mut buf = [0u8; 8];
        let code = err.to_legacy(&mut buf);
        assert_eq!(code, RespCode::QueueFull);
        assert_eq!(&buf, b"retry 2\0");
    }

    #[test]
    fn single_byte_buffer_holds_only_the_terminator() {
        let err = ClientError::with_args(RespCode::QueueFull, format_args!("anything"));
        let mut buf = [0xffu8; 1];
        err.to_legacy(&mut buf);
        assert_eq!(buf, [0u8]);
    }

    #[test]
    fn zero_length_buffer_receives_no_bytes() {
        let err = ClientError::with_args(RespCode::QueueFull, format_args!("anything"));
        let mut buf = [0u8; 0];
        assert_eq!(err.to_legacy(&mut buf), RespCode::QueueFull);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // "héllo" is six bytes; a 3-byte buffer has room for 2 payload bytes,
        // which would split the two-byte 'é'.
        let err = ClientError::with_args(RespCode::InvalidArg, format_args!("héllo"));
        let mut buf = [0xffu8; 3];
        err.to_legacy(&mut buf);
        assert_eq!(message_in(&buf[..2]), "h");
    }

    #[test]
    fn truncated_conversion_still_returns_code() {
        let err =
            ClientError::with_args(RespCode::InvalidArg, format_args!("{}", "x".repeat(1000)));
        let mut buf = [0u8; 16];
        assert_eq!(err.to_legacy(&mut buf), RespCode::InvalidArg);
        assert_eq!(message_in(&buf), "x".repeat(15));
    }
}
