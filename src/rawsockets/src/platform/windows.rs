// Winsock backend: millisecond timeouts, FormatMessage error text, and a
// protocol database without an enumeration cursor.

use std::ffi::CStr;
use std::mem;
use std::os::raw::{c_char, c_int};
use std::ptr;

use sysdefs::constants::net_const;
use sysdefs::data::ProtocolRecord;
use windows_sys::Win32::Foundation::LocalFree;
use windows_sys::Win32::Networking::WinSock::{
    self, PROTOENT, SOCKADDR_IN, SOCKADDR_IN6, SOCKET, WSADATA,
};
use windows_sys::Win32::System::Diagnostics::Debug::{
    FormatMessageA, FORMAT_MESSAGE_ALLOCATE_BUFFER, FORMAT_MESSAGE_FROM_SYSTEM,
    FORMAT_MESSAGE_IGNORE_INSERTS,
};

use super::{SocketBackend, SocketHandle};
use crate::protocols::record_from_raw;

// Winsock 2.0, as requested by MAKEWORD(2, 0)
const WINSOCK_VERSION: u16 = 0x0002;
// Protocol numbers are 8 bits wide in the IPv4 and IPv6 headers.
const MAX_PROTOCOL_NUMBER: i32 = 255;
// MAKELANGID(LANG_NEUTRAL, SUBLANG_DEFAULT)
const LANG_NEUTRAL_SUBLANG_DEFAULT: u32 = 0x0400;

pub struct Winsock;

impl SocketBackend for Winsock {
    type SockaddrIn = SOCKADDR_IN;
    type SockaddrIn6 = SOCKADDR_IN6;

    fn startup() -> i32 {
        let mut data: WSADATA = unsafe { mem::zeroed() };
        unsafe { WinSock::WSAStartup(WINSOCK_VERSION, &mut data) }
    }

    fn cleanup() {
        unsafe {
            WinSock::WSACleanup();
        }
    }

    fn constant_table() -> Vec<(&'static str, i32)> {
        let mut table = vec![
            ("IPPROTO_IP", net_const::IPPROTO_IP),
            ("IPPROTO_IPV6", net_const::IPPROTO_IPV6),
            ("IPPROTO_TCP", net_const::IPPROTO_TCP),
            ("IPPROTO_UDP", net_const::IPPROTO_UDP),
            ("IPPROTO_ICMP", net_const::IPPROTO_ICMP),
            ("IP_HDRINCL", net_const::IP_HDRINCL),
            ("IP_OPTIONS", net_const::IP_OPTIONS),
            ("IP_TOS", net_const::IP_TOS),
            ("IP_TTL", net_const::IP_TTL),
            ("IPV6_HOPLIMIT", net_const::IPV6_HOPLIMIT),
            ("SO_RCVBUF", net_const::SO_RCVBUF),
            ("SO_RCVTIMEO", net_const::SO_RCVTIMEO),
            ("SO_SNDBUF", net_const::SO_SNDBUF),
            ("SO_SNDTIMEO", net_const::SO_SNDTIMEO),
            ("SOL_SOCKET", net_const::SOL_SOCKET),
            ("AF_INET", net_const::AF_INET),
            ("AF_INET6", net_const::AF_INET6),
            ("PF_INET", net_const::PF_INET),
            ("PF_INET6", net_const::PF_INET6),
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
        unsafe { WinSock::WSAGetLastError() as i32 }
    }

    fn error_message(code: i32) -> String {
        let mut buffer: *mut u8 = ptr::null_mut();
        let length = unsafe {
            FormatMessageA(
                FORMAT_MESSAGE_ALLOCATE_BUFFER
                    | FORMAT_MESSAGE_FROM_SYSTEM
                    | FORMAT_MESSAGE_IGNORE_INSERTS,
                ptr::null(),
                code as u32,
                LANG_NEUTRAL_SUBLANG_DEFAULT,
                &mut buffer as *mut *mut u8 as *mut u8,
                0,
                ptr::null(),
            )
        };
        if length == 0 || buffer.is_null() {
            return format!("Unknown error {}", code);
        }

        // Copy out before handing the buffer back to the system allocator.
        let message = unsafe { std::slice::from_raw_parts(buffer, length as usize) };
        let message = String::from_utf8_lossy(message).trim_end().to_string();
        unsafe {
            LocalFree(buffer as _);
        }
        message
    }

    fn set_int_option(handle: SocketHandle, level: i32, option: i32, value: i32) -> i32 {
        unsafe {
            WinSock::setsockopt(
                handle as SOCKET,
                level,
                option,
                &value as *const c_int as *const u8,
                mem::size_of::<c_int>() as i32,
            )
        }
    }

    fn get_int_option(handle: SocketHandle, level: i32, option: i32, value: &mut i32) -> i32 {
        let mut optlen = mem::size_of::<c_int>() as i32;
        unsafe {
            WinSock::getsockopt(
                handle as SOCKET,
                level,
                option,
                value as *mut c_int as *mut u8,
                &mut optlen,
            )
        }
    }

    // Winsock takes socket timeouts as a DWORD of milliseconds.
    fn set_timeout(handle: SocketHandle, option: i32, milliseconds: i32) -> i32 {
        Self::set_int_option(handle, net_const::SOL_SOCKET, option, milliseconds)
    }

    fn get_timeout(handle: SocketHandle, option: i32, milliseconds: &mut i32) -> i32 {
        Self::get_int_option(handle, net_const::SOL_SOCKET, option, milliseconds)
    }

    fn ipv4_record(family: i32, octets: [u8; 4]) -> SOCKADDR_IN {
        let mut sin: SOCKADDR_IN = unsafe { mem::zeroed() };
        sin.sin_family = family as _;
        sin.sin_addr.S_un.S_addr = u32::from_ne_bytes(octets);
        sin
    }

    fn ipv4_parts(record: &SOCKADDR_IN) -> (i32, [u8; 4]) {
        let addr = unsafe { record.sin_addr.S_un.S_addr };
        (record.sin_family as i32, addr.to_ne_bytes())
    }

    fn ipv6_record(family: i32, octets: [u8; 16]) -> SOCKADDR_IN6 {
        let mut sin6: SOCKADDR_IN6 = unsafe { mem::zeroed() };
        sin6.sin6_family = family as _;
        sin6.sin6_addr.u.Byte = octets;
        sin6
    }

    fn ipv6_parts(record: &SOCKADDR_IN6) -> (i32, [u8; 16]) {
        let addr = unsafe { record.sin6_addr.u.Byte };
        (record.sin6_family as i32, addr)
    }

    fn protocol_by_name(name: &CStr) -> Option<ProtocolRecord> {
        let entry = unsafe { WinSock::getprotobyname(name.as_ptr() as *const u8) };
        unsafe { record_from_protoent(entry) }
    }

    fn protocol_by_number(number: i32) -> Option<ProtocolRecord> {
        let entry = unsafe { WinSock::getprotobynumber(number) };
        unsafe { record_from_protoent(entry) }
    }

    // Winsock has no setprotoent/getprotoent, so the database is walked by
    // probing every valid protocol number in order.
    fn protocol_entries() -> Vec<ProtocolRecord> {
        (0..=MAX_PROTOCOL_NUMBER)
            .filter_map(Self::protocol_by_number)
            .collect()
    }
}

/// Copies a `PROTOENT` out of Winsock's per-thread storage.
unsafe fn record_from_protoent(entry: *const PROTOENT) -> Option<ProtocolRecord> {
    if entry.is_null() {
        return None;
    }
    let entry = &*entry;
    record_from_raw(
        entry.p_name as *const c_char,
        entry.p_aliases as *const *const c_char,
        entry.p_proto as i32,
    )
}
