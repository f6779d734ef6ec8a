//! Network Constants Module
//! Socket-option, protocol and address-family values that differ between
//! platform families, plus the fallbacks substituted when a platform's
//! headers define no value at all.
//!
//! Values every unix target already gets from `libc` (IPPROTO_TCP,
//! SO_RCVBUF, AF_INET, ...) are not repeated here; the POSIX backend reads
//! those from `libc` directly.
//!
//! Primary Source References:
//! - Linux kernel v6.5: include/uapi/linux/in.h
//! - Linux kernel v6.5: include/uapi/linux/in6.h
//! - FreeBSD 14 / Darwin xnu: netinet/in.h, netinet6/in6.h, netinet/ip6.h
//! - Windows SDK 10.0.22621: shared/ws2def.h, shared/ws2ipdef.h, um/winsock2.h

#![allow(dead_code)]

// ===== Fallbacks =====
// Substituted when the platform headers do not define the constant. These
// follow BSD header conventions rather than anything intrinsic to IPv6 and
// should be re-verified when a new target is added.

/// Hop-limit ceiling (BSD netinet/ip6.h IPV6_MAXHLIM).
pub const FALLBACK_IPV6_MAXHLIM: i32 = 255;
/// Version field of the first IPv6 header byte (BSD netinet/ip6.h IPV6_VERSION).
pub const FALLBACK_IPV6_VERSION: i32 = 0x60;

// ===== Linux / Android =====
// Source: include/uapi/linux/in.h
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const IP_OPTIONS: i32 = 4;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const IP_RECVOPTS: i32 = 6;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const IP_RECVRETOPTS: i32 = 7;

// Source: include/uapi/linux/in6.h
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const IPV6_HOPLIMIT: i32 = 52;
// Added in Linux 4.5; not exported by glibc headers.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const IPV6_HDRINCL: Option<i32> = Some(36);
// Linux has no IPPROTO_IPV4, IPV6_MAXHLIM or IPV6_VERSION.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const IPPROTO_IPV4: Option<i32> = None;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const IPV6_MAXHLIM: Option<i32> = None;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const IPV6_VERSION: Option<i32> = None;

// ===== BSD family (Darwin, FreeBSD, NetBSD, OpenBSD, DragonFly) =====
// Source: netinet/in.h
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub const IP_OPTIONS: i32 = 1;
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub const IP_RECVOPTS: i32 = 5;
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub const IP_RECVRETOPTS: i32 = 6;
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub const IPPROTO_IPV4: Option<i32> = Some(4);

// Source: netinet6/in6.h
// Darwin only exposes the RFC 3542 value (47) under __APPLE_USE_RFC_3542;
// without it IPV6_HOPLIMIT is the RFC 2292 option.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub const IPV6_HOPLIMIT: i32 = 20;
#[cfg(all(
    unix,
    not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios"
    ))
))]
pub const IPV6_HOPLIMIT: i32 = 47;
// IP_HDRINCL is accepted on IPv6 raw sockets; there is no distinct constant.
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub const IPV6_HDRINCL: Option<i32> = None;

// Source: netinet/ip6.h
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub const IPV6_MAXHLIM: Option<i32> = Some(255);
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub const IPV6_VERSION: Option<i32> = Some(0x60);

// ===== Windows =====
// Source: shared/ws2def.h
#[cfg(windows)]
pub const AF_INET: i32 = 2;
#[cfg(windows)]
pub const AF_INET6: i32 = 23;
#[cfg(windows)]
pub const PF_INET: i32 = AF_INET;
#[cfg(windows)]
pub const PF_INET6: i32 = AF_INET6;

#[cfg(windows)]
pub const IPPROTO_IP: i32 = 0;
#[cfg(windows)]
pub const IPPROTO_ICMP: i32 = 1;
#[cfg(windows)]
pub const IPPROTO_IPV4: Option<i32> = Some(4);
#[cfg(windows)]
pub const IPPROTO_TCP: i32 = 6;
#[cfg(windows)]
pub const IPPROTO_UDP: i32 = 17;
#[cfg(windows)]
pub const IPPROTO_IPV6: i32 = 41;

// Source: um/winsock2.h
#[cfg(windows)]
pub const SOL_SOCKET: i32 = 0xffff;
#[cfg(windows)]
pub const SO_SNDBUF: i32 = 0x1001;
#[cfg(windows)]
pub const SO_RCVBUF: i32 = 0x1002;
#[cfg(windows)]
pub const SO_SNDTIMEO: i32 = 0x1005;
#[cfg(windows)]
pub const SO_RCVTIMEO: i32 = 0x1006;

// Source: shared/ws2ipdef.h
// Winsock has no IP_RECVOPTS / IP_RECVRETOPTS.
#[cfg(windows)]
pub const IP_OPTIONS: i32 = 1;
#[cfg(windows)]
pub const IP_HDRINCL: i32 = 2;
#[cfg(windows)]
pub const IP_TOS: i32 = 3;
#[cfg(windows)]
pub const IP_TTL: i32 = 4;
#[cfg(windows)]
pub const IPV6_HDRINCL: Option<i32> = Some(2);
#[cfg(windows)]
pub const IPV6_HOPLIMIT: i32 = 21;
#[cfg(windows)]
pub const IPV6_MAXHLIM: Option<i32> = None;
#[cfg(windows)]
pub const IPV6_VERSION: Option<i32> = None;
