//! Structured errors for native socket calls.
//!
//! Every failed native call is turned into a [`SockError`] at the call site,
//! with the OS error code and the platform's own text for it.

use std::error::Error;
use std::fmt;

use sysdefs::constants::NO_ERROR;

use crate::platform::{Native, SocketBackend};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SockError {
    /// The symbolic constant has no value on this platform.
    UnknownConstant { name: String },
    /// A native socket call failed.
    SocketOperation {
        syscall: &'static str,
        code: i32,
        message: String,
    },
    /// Raw address bytes of the wrong length for the address family.
    InvalidAddressLength { expected: usize, actual: usize },
}

impl SockError {
    /// OS error code, for errors that came from a native call.
    pub fn code(&self) -> Option<i32> {
        match self {
            SockError::SocketOperation { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for SockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SockError::UnknownConstant { name } => write!(
                f,
                "The specified constant, {}, is not natively defined.",
                name
            ),
            SockError::SocketOperation {
                syscall,
                code,
                message,
            } => write!(f, "{}: {} (os error {})", syscall, message, code),
            SockError::InvalidAddressLength { expected, actual } => write!(
                f,
                "address must be exactly {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl Error for SockError {}

/// Builds the error for `code`, or `None` when no error condition is set.
pub fn report(syscall: &'static str, code: i32) -> Option<SockError> {
    if code == NO_ERROR {
        return None;
    }
    let message = Native::error_message(code);
    log::debug!("{} failed: {} (os error {})", syscall, message, code);
    Some(SockError::SocketOperation {
        syscall,
        code,
        message,
    })
}

/// Captures the calling thread's last OS error after `syscall` failed.
pub fn last_error(syscall: &'static str) -> SockError {
    report(syscall, Native::last_error()).unwrap_or_else(|| SockError::SocketOperation {
        syscall,
        code: NO_ERROR,
        message: "call failed without setting an error code".to_string(),
    })
}

/// The platform's text for an OS error code.
pub fn error_message(code: i32) -> String {
    Native::error_message(code)
}
