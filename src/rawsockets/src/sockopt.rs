//! Integer and timeout socket options.
//!
//! The four primitives take native level/option codes (see
//! [`crate::registry::resolve`]) and report failures through
//! [`crate::errors`]. Timeouts are always milliseconds here; the platform
//! backend converts to `timeval` or Winsock milliseconds at the call.
//!
//! The helpers further down cover the options a raw socket host sets
//! routinely and resolve their constants by name.

use sysdefs::constants::SOCKET_ERROR;

use crate::errors::{self, SockError};
use crate::levels::{IpVersion, SocketLevel};
use crate::platform::{Native, SocketBackend, SocketHandle};
use crate::registry;

pub fn set_int_option(
    handle: SocketHandle,
    level: i32,
    option: i32,
    value: i32,
) -> Result<(), SockError> {
    let ret = Native::set_int_option(handle, level, option, value);
    if ret != 0 {
        return Err(errors::last_error("setsockopt"));
    }
    Ok(())
}

/// Reads a 4-byte option. Negative option values are returned as-is.
pub fn get_int_option(handle: SocketHandle, level: i32, option: i32) -> Result<i32, SockError> {
    let mut value = SOCKET_ERROR;
    let ret = Native::get_int_option(handle, level, option, &mut value);
    if ret < 0 {
        return Err(errors::last_error("getsockopt"));
    }
    Ok(value)
}

/// Sets a socket-level timeout option (`SO_SNDTIMEO` / `SO_RCVTIMEO`).
pub fn set_timeout(handle: SocketHandle, option: i32, milliseconds: i32) -> Result<(), SockError> {
    let ret = Native::set_timeout(handle, option, milliseconds);
    if ret != 0 {
        return Err(errors::last_error("setsockopt"));
    }
    Ok(())
}

/// Reads a socket-level timeout option in milliseconds.
///
/// On POSIX any sub-millisecond part of the stored `timeval` is dropped, and
/// a stored timeout longer than `i32::MAX` milliseconds reads back as
/// `i32::MAX`.
pub fn get_timeout(handle: SocketHandle, option: i32) -> Result<i32, SockError> {
    let mut milliseconds = 0;
    let ret = Native::get_timeout(handle, option, &mut milliseconds);
    if ret < 0 {
        return Err(errors::last_error("getsockopt"));
    }
    Ok(milliseconds)
}

pub fn set_option(
    handle: SocketHandle,
    level: SocketLevel,
    option: &str,
    value: i32,
) -> Result<(), SockError> {
    set_int_option(
        handle,
        level.os_constant()?,
        registry::resolve(option)?,
        value,
    )
}

pub fn get_option(handle: SocketHandle, level: SocketLevel, option: &str) -> Result<i32, SockError> {
    get_int_option(handle, level.os_constant()?, registry::resolve(option)?)
}

pub fn set_send_buffer_size(handle: SocketHandle, bytes: i32) -> Result<(), SockError> {
    set_option(handle, SocketLevel::Socket, "SO_SNDBUF", bytes)
}

pub fn get_send_buffer_size(handle: SocketHandle) -> Result<i32, SockError> {
    get_option(handle, SocketLevel::Socket, "SO_SNDBUF")
}

pub fn set_receive_buffer_size(handle: SocketHandle, bytes: i32) -> Result<(), SockError> {
    set_option(handle, SocketLevel::Socket, "SO_RCVBUF", bytes)
}

pub fn get_receive_buffer_size(handle: SocketHandle) -> Result<i32, SockError> {
    get_option(handle, SocketLevel::Socket, "SO_RCVBUF")
}

pub fn set_send_timeout(handle: SocketHandle, milliseconds: i32) -> Result<(), SockError> {
    set_timeout(handle, registry::resolve("SO_SNDTIMEO")?, milliseconds)
}

pub fn get_send_timeout(handle: SocketHandle) -> Result<i32, SockError> {
    get_timeout(handle, registry::resolve("SO_SNDTIMEO")?)
}

pub fn set_receive_timeout(handle: SocketHandle, milliseconds: i32) -> Result<(), SockError> {
    set_timeout(handle, registry::resolve("SO_RCVTIMEO")?, milliseconds)
}

pub fn get_receive_timeout(handle: SocketHandle) -> Result<i32, SockError> {
    get_timeout(handle, registry::resolve("SO_RCVTIMEO")?)
}

/// Turns header-included mode on or off for a raw socket of `version`.
pub fn set_header_included(
    handle: SocketHandle,
    version: IpVersion,
    included: bool,
) -> Result<(), SockError> {
    let (level, option) = version.header_include_option();
    set_option(handle, level, option, included as i32)
}

pub fn get_header_included(handle: SocketHandle, version: IpVersion) -> Result<bool, SockError> {
    let (level, option) = version.header_include_option();
    Ok(get_option(handle, level, option)? == 1)
}
