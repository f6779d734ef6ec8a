//! Native IPv4/IPv6 socket address records built from raw address bytes.
//!
//! The records are zero-initialized native structures with only the family
//! and address filled in (port, flow info and scope stay zero). Input length
//! is checked up front, so a short or long byte slice is an error rather
//! than a partial copy.

use std::mem;
use std::os::raw::c_void;

use crate::errors::SockError;
use crate::levels::IpVersion;
use crate::platform::{Native, SocketBackend};

type NativeSockaddrIn = <Native as SocketBackend>::SockaddrIn;
type NativeSockaddrIn6 = <Native as SocketBackend>::SockaddrIn6;

#[derive(Clone, Copy)]
pub struct SockaddrV4 {
    raw: NativeSockaddrIn,
}

impl SockaddrV4 {
    pub fn family(&self) -> i32 {
        Native::ipv4_parts(&self.raw).0
    }

    pub fn octets(&self) -> [u8; 4] {
        Native::ipv4_parts(&self.raw).1
    }

    /// Pointer to the native structure, for passing to bind/sendto.
    pub fn as_ptr(&self) -> *const c_void {
        &self.raw as *const NativeSockaddrIn as *const c_void
    }

    /// Size of the native structure in bytes.
    pub fn native_len(&self) -> usize {
        mem::size_of::<NativeSockaddrIn>()
    }
}

#[derive(Clone, Copy)]
pub struct SockaddrV6 {
    raw: NativeSockaddrIn6,
}

impl SockaddrV6 {
    pub fn family(&self) -> i32 {
        Native::ipv6_parts(&self.raw).0
    }

    pub fn octets(&self) -> [u8; 16] {
        Native::ipv6_parts(&self.raw).1
    }

    pub fn as_ptr(&self) -> *const c_void {
        &self.raw as *const NativeSockaddrIn6 as *const c_void
    }

    pub fn native_len(&self) -> usize {
        mem::size_of::<NativeSockaddrIn6>()
    }
}

/// Either kind of address record.
#[derive(Clone, Copy)]
pub enum SocketAddress {
    V4(SockaddrV4),
    V6(SockaddrV6),
}

impl SocketAddress {
    pub fn version(&self) -> IpVersion {
        match self {
            SocketAddress::V4(_) => IpVersion::V4,
            SocketAddress::V6(_) => IpVersion::V6,
        }
    }

    pub fn family(&self) -> i32 {
        match self {
            SocketAddress::V4(addr) => addr.family(),
            SocketAddress::V6(addr) => addr.family(),
        }
    }

    pub fn as_ptr(&self) -> *const c_void {
        match self {
            SocketAddress::V4(addr) => addr.as_ptr(),
            SocketAddress::V6(addr) => addr.as_ptr(),
        }
    }

    pub fn native_len(&self) -> usize {
        match self {
            SocketAddress::V4(addr) => addr.native_len(),
            SocketAddress::V6(addr) => addr.native_len(),
        }
    }
}

pub fn build_ipv4(bytes: &[u8]) -> Result<SockaddrV4, SockError> {
    let octets: [u8; 4] = bytes
        .try_into()
        .map_err(|_| SockError::InvalidAddressLength {
            expected: IpVersion::V4.address_len(),
            actual: bytes.len(),
        })?;
    let family = IpVersion::V4.address_family()?;
    Ok(SockaddrV4 {
        raw: Native::ipv4_record(family, octets),
    })
}

pub fn build_ipv6(bytes: &[u8]) -> Result<SockaddrV6, SockError> {
    let octets: [u8; 16] = bytes
        .try_into()
        .map_err(|_| SockError::InvalidAddressLength {
            expected: IpVersion::V6.address_len(),
            actual: bytes.len(),
        })?;
    let family = IpVersion::V6.address_family()?;
    Ok(SockaddrV6 {
        raw: Native::ipv6_record(family, octets),
    })
}

/// Builds an IPv4 or IPv6 record depending on whether `bytes` holds 4 or
/// 16 bytes.
pub fn build_address(bytes: &[u8]) -> Result<SocketAddress, SockError> {
    match bytes.len() {
        4 => build_ipv4(bytes).map(SocketAddress::V4),
        16 => build_ipv6(bytes).map(SocketAddress::V6),
        // Report against IPv4 unless the input is closer to an IPv6 address.
        actual if actual > IpVersion::V4.address_len() => Err(SockError::InvalidAddressLength {
            expected: IpVersion::V6.address_len(),
            actual,
        }),
        actual => Err(SockError::InvalidAddressLength {
            expected: IpVersion::V4.address_len(),
            actual,
        }),
    }
}
