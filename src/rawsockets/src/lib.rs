//! Native capability layer for raw IP sockets.
//!
//! The host owns the socket handles; this crate only works on handles it is
//! given. It provides a registry of socket-related constants resolved by
//! name, integer and timeout socket options, native IPv4/IPv6 address
//! records, lookups in the system protocol database, and error reporting
//! that carries the OS error code and text.
//!
//! Call [`init`] once before any socket use and [`finalize`] on shutdown.
//! Both are no-ops on POSIX; on Windows they start and stop Winsock.

pub mod address;
pub mod errors;
pub mod levels;
pub mod platform;
pub mod protocols;
pub mod registry;
pub mod sockopt;

#[cfg(test)]
mod tests;

pub use address::{build_address, build_ipv4, build_ipv6, SockaddrV4, SockaddrV6, SocketAddress};
pub use errors::SockError;
pub use levels::{IpVersion, SocketLevel};
pub use platform::SocketHandle;
pub use sysdefs::data::{ConstantEntry, ProtocolRecord, TimeoutValue, PROTOCOL_ALIAS_SLOTS};

use platform::{Native, SocketBackend};

/// Starts the platform network stack.
pub fn init() -> Result<(), SockError> {
    if let Some(err) = errors::report("WSAStartup", Native::startup()) {
        log::error!("network stack startup failed: {}", err);
        return Err(err);
    }
    log::debug!("network stack initialized");
    Ok(())
}

/// Releases what [`init`] acquired.
pub fn finalize() {
    Native::cleanup();
    log::debug!("network stack released");
}
