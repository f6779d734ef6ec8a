// POSIX backend: libc socket calls, timeval timeouts, netdb protocol database.

use std::ffi::CStr;
use std::mem;
use std::os::raw::{c_char, c_int, c_void};

use libc::{socklen_t, timeval};
use sysdefs::constants::{get_errno, net_const, NO_ERROR};
use sysdefs::data::{ProtocolRecord, TimeoutValue};

use super::{SocketBackend, SocketHandle};
use crate::protocols::record_from_raw;

const ERROR_MESSAGE_BUFFER: usize = 256;

// netdb.h. Declared here because not every libc target exports the
// cursor functions.
extern "C" {
    fn getprotobyname(name: *const c_char) -> *mut libc::protoent;
    fn getprotobynumber(proto: c_int) -> *mut libc::protoent;
    fn setprotoent(stayopen: c_int);
    fn getprotoent() -> *mut libc::protoent;
    fn endprotoent();
}

pub struct Posix;

impl SocketBackend for Posix {
    type SockaddrIn = libc::sockaddr_in;
    type SockaddrIn6 = libc::sockaddr_in6;

    fn startup() -> i32 {
        NO_ERROR
    }

    fn cleanup() {}

    fn constant_table() -> Vec<(&'static str, i32)> {
        let mut table = vec![
            ("IPPROTO_IP", libc::IPPROTO_IP),
            ("IPPROTO_IPIP", libc::IPPROTO_IPIP),
            ("IPPROTO_IPV6", libc::IPPROTO_IPV6),
            ("IPPROTO_TCP", libc::IPPROTO_TCP),
            ("IPPROTO_UDP", libc::IPPROTO_UDP),
            ("IPPROTO_ICMP", libc::IPPROTO_ICMP),
            ("IP_HDRINCL", libc::IP_HDRINCL),
            ("IP_OPTIONS", net_const::IP_OPTIONS),
            ("IP_RECVOPTS", net_const::IP_RECVOPTS),
            ("IP_RECVRETOPTS", net_const::IP_RECVRETOPTS),
            ("IP_TOS", libc::IP_TOS),
            ("IP_TTL", libc::IP_TTL),
            ("IPV6_HOPLIMIT", net_const::IPV6_HOPLIMIT),
            ("SO_RCVBUF", libc::SO_RCVBUF),
            ("SO_RCVTIMEO", libc::SO_RCVTIMEO),
            ("SO_SNDBUF", libc::SO_SNDBUF),
            ("SO_SNDTIMEO", libc::SO_SNDTIMEO),
            ("SOL_SOCKET", libc::SOL_SOCKET),
            ("AF_INET", libc::AF_INET),
            ("AF_INET6", libc::AF_INET6),
            // PF_* aliases AF_* on every POSIX target
            ("PF_INET", libc::AF_INET),
            ("PF_INET6", libc::AF_INET6),
        ];

        let optional = [
            ("IPPROTO_IPV4", net_const::IPPROTO_IPV4),
            ("IPV6_HDRINCL", net_const::IPV6_HDRINCL),
            ("IPV6_MAXHLIM", net_const::IPV6_MAXHLIM),
            ("IPV6_VERSION", net_const::IPV6_VERSION),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                table.push((name, value));
            }
        }

        table
    }

    fn last_error() -> i32 {
        get_errno()
    }

    fn error_message(code: i32) -> String {
        let mut buffer = [0 as c_char; ERROR_MESSAGE_BUFFER];
        let ret = unsafe { libc::strerror_r(code, buffer.as_mut_ptr(), buffer.len()) };
        if ret != 0 {
            return format!("Unknown error {}", code);
        }
        unsafe { CStr::from_ptr(buffer.as_ptr()) }
            .to_string_lossy()
            .into_owned()
    }

    fn set_int_option(handle: SocketHandle, level: i32, option: i32, value: i32) -> i32 {
        unsafe {
            libc::setsockopt(
                handle,
                level,
                option,
                &value as *const c_int as *const c_void,
                mem::size_of::<c_int>() as socklen_t,
            )
        }
    }

    fn get_int_option(handle: SocketHandle, level: i32, option: i32, value: &mut i32) -> i32 {
        let mut optlen = mem::size_of::<c_int>() as socklen_t;
        unsafe {
            libc::getsockopt(
                handle,
                level,
                option,
                value as *mut c_int as *mut c_void,
                &mut optlen as *mut socklen_t,
            )
        }
    }

    fn set_timeout(handle: SocketHandle, option: i32, milliseconds: i32) -> i32 {
        let timeout = TimeoutValue::from_millis(milliseconds);
        let mut value: timeval = unsafe { mem::zeroed() };
        value.tv_sec = timeout.seconds() as libc::time_t;
        value.tv_usec = timeout.microseconds() as libc::suseconds_t;
        unsafe {
            libc::setsockopt(
                handle,
                libc::SOL_SOCKET,
                option,
                &value as *const timeval as *const c_void,
                mem::size_of::<timeval>() as socklen_t,
            )
        }
    }

    fn get_timeout(handle: SocketHandle, option: i32, milliseconds: &mut i32) -> i32 {
        let mut value: timeval = unsafe { mem::zeroed() };
        let mut optlen = mem::size_of::<timeval>() as socklen_t;
        let ret = unsafe {
            libc::getsockopt(
                handle,
                libc::SOL_SOCKET,
                option,
                &mut value as *mut timeval as *mut c_void,
                &mut optlen as *mut socklen_t,
            )
        };
        if ret < 0 {
            return ret;
        }

        *milliseconds =
            TimeoutValue::from_parts(value.tv_sec as i64, value.tv_usec as i64).as_millis();
        ret
    }

    fn ipv4_record(family: i32, octets: [u8; 4]) -> libc::sockaddr_in {
        let mut sin: libc::sockaddr_in = unsafe { mem::zeroed() };
        #[cfg(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "dragonfly",
            target_os = "netbsd",
            target_os = "openbsd"
        ))]
        {
            sin.sin_len = mem::size_of::<libc::sockaddr_in>() as u8;
        }
        sin.sin_family = family as libc::sa_family_t;
        // s_addr is stored in network order, which is the byte order given
        sin.sin_addr.s_addr = u32::from_ne_bytes(octets);
        sin
    }

    fn ipv4_parts(record: &libc::sockaddr_in) -> (i32, [u8; 4]) {
        (
            record.sin_family as i32,
            record.sin_addr.s_addr.to_ne_bytes(),
        )
    }

    fn ipv6_record(family: i32, octets: [u8; 16]) -> libc::sockaddr_in6 {
        let mut sin6: libc::sockaddr_in6 = unsafe { mem::zeroed() };
        #[cfg(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "dragonfly",
            target_os = "netbsd",
            target_os = "openbsd"
        ))]
        {
            sin6.sin6_len = mem::size_of::<libc::sockaddr_in6>() as u8;
        }
        sin6.sin6_family = family as libc::sa_family_t;
        sin6.sin6_addr.s6_addr = octets;
        sin6
    }

    fn ipv6_parts(record: &libc::sockaddr_in6) -> (i32, [u8; 16]) {
        (record.sin6_family as i32, record.sin6_addr.s6_addr)
    }

    fn protocol_by_name(name: &CStr) -> Option<ProtocolRecord> {
        let entry = unsafe { getprotobyname(name.as_ptr()) };
        unsafe { record_from_protoent(entry) }
    }

    fn protocol_by_number(number: i32) -> Option<ProtocolRecord> {
        let entry = unsafe { getprotobynumber(number) };
        unsafe { record_from_protoent(entry) }
    }

    fn protocol_entries() -> Vec<ProtocolRecord> {
        let mut records = Vec::new();
        unsafe {
            setprotoent(1);
            loop {
                let entry = getprotoent();
                if entry.is_null() {
                    break;
                }
                if let Some(record) = record_from_protoent(entry) {
                    records.push(record);
                }
            }
            endprotoent();
        }
        records
    }
}

/// Copies a `protoent` out of libc's static storage.
unsafe fn record_from_protoent(entry: *const libc::protoent) -> Option<ProtocolRecord> {
    if entry.is_null() {
        return None;
    }
    let entry = &*entry;
    record_from_raw(
        entry.p_name,
        entry.p_aliases as *const *const c_char,
        entry.p_proto,
    )
}
