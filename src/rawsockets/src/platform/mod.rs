//! Per-platform native socket backends.
//!
//! Each supported platform family gets one self-contained implementation of
//! [`SocketBackend`], picked at compile time and exported as [`Native`]. The
//! rest of the crate only talks to `Native`, so constant tables, timeout
//! encoding, address layout, error text and protocol-database access for a
//! platform all live in a single file.

use std::ffi::CStr;

use sysdefs::data::ProtocolRecord;

#[cfg(unix)]
mod posix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use posix::Posix as Native;
#[cfg(windows)]
pub use windows::Winsock as Native;

/// Native socket handle supplied by the host. Never opened or closed here.
#[cfg(unix)]
pub type SocketHandle = std::os::unix::io::RawFd;
#[cfg(windows)]
pub type SocketHandle = std::os::windows::io::RawSocket;

/// Capabilities a platform family must provide.
///
/// Return conventions mirror the native calls: option functions return the
/// raw syscall result (`0` on success, [`sysdefs::constants::SOCKET_ERROR`]
/// on failure) and leave the error code for [`SocketBackend::last_error`].
pub trait SocketBackend {
    /// Native IPv4 socket address structure.
    type SockaddrIn: Copy;
    /// Native IPv6 socket address structure.
    type SockaddrIn6: Copy;

    /// Per-process network stack startup. Returns a native error code.
    fn startup() -> i32;
    fn cleanup();

    /// Constants this platform defines natively. Fallbacks for missing
    /// names are applied by the registry, not here.
    fn constant_table() -> Vec<(&'static str, i32)>;

    /// Error code left behind by the last failed call on this thread.
    fn last_error() -> i32;
    fn error_message(code: i32) -> String;

    fn set_int_option(handle: SocketHandle, level: i32, option: i32, value: i32) -> i32;
    fn get_int_option(handle: SocketHandle, level: i32, option: i32, value: &mut i32) -> i32;
    /// Sets a socket-level timeout given in milliseconds.
    fn set_timeout(handle: SocketHandle, option: i32, milliseconds: i32) -> i32;
    /// Reads a socket-level timeout back as milliseconds.
    fn get_timeout(handle: SocketHandle, option: i32, milliseconds: &mut i32) -> i32;

    fn ipv4_record(family: i32, octets: [u8; 4]) -> Self::SockaddrIn;
    fn ipv4_parts(record: &Self::SockaddrIn) -> (i32, [u8; 4]);
    fn ipv6_record(family: i32, octets: [u8; 16]) -> Self::SockaddrIn6;
    fn ipv6_parts(record: &Self::SockaddrIn6) -> (i32, [u8; 16]);

    // The protocol database functions below read process-global state.
    // Callers must hold the protocols module lock.
    fn protocol_by_name(name: &CStr) -> Option<ProtocolRecord>;
    fn protocol_by_number(number: i32) -> Option<ProtocolRecord>;
    fn protocol_entries() -> Vec<ProtocolRecord>;
}
