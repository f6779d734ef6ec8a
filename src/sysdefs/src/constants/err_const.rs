// Error-code helpers for native socket calls.

/// Value of errno / WSAGetLastError when no error condition is set.
pub const NO_ERROR: i32 = 0;

/// Return value the socket option calls use to signal failure.
pub const SOCKET_ERROR: i32 = -1;

#[cfg(target_os = "linux")]
pub fn get_errno() -> i32 {
    (unsafe { *libc::__errno_location() }) as i32
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
pub fn get_errno() -> i32 {
    (unsafe { *libc::__error() }) as i32
}

#[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))]
pub fn get_errno() -> i32 {
    (unsafe { *libc::__errno() }) as i32
}

// Fallback for targets without a known errno accessor.
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
)))]
pub fn get_errno() -> i32 {
    std::io::Error::last_os_error()
        .raw_os_error()
        .unwrap_or(NO_ERROR)
}
