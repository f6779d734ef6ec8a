// Typed option levels and IP versions, resolved through the registry.

use crate::errors::SockError;
use crate::registry;

/// Protocol layer at which a socket option is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocketLevel {
    Socket,
    Ip,
    Ipv6,
    Tcp,
    Udp,
    Icmp,
}

impl SocketLevel {
    pub fn constant_name(&self) -> &'static str {
        match self {
            SocketLevel::Socket => "SOL_SOCKET",
            SocketLevel::Ip => "SOL_IP",
            SocketLevel::Ipv6 => "SOL_IPV6",
            SocketLevel::Tcp => "SOL_TCP",
            SocketLevel::Udp => "SOL_UDP",
            SocketLevel::Icmp => "IPPROTO_ICMP",
        }
    }

    pub fn os_constant(&self) -> Result<i32, SockError> {
        registry::resolve(self.constant_name())
    }

    /// Whether options at this level apply to IPv6 sockets.
    pub fn supports_ipv6(&self) -> bool {
        !matches!(self, SocketLevel::Ip)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    pub fn address_family(&self) -> Result<i32, SockError> {
        match self {
            IpVersion::V4 => registry::resolve("AF_INET"),
            IpVersion::V6 => registry::resolve("AF_INET6"),
        }
    }

    pub fn protocol_family(&self) -> Result<i32, SockError> {
        match self {
            IpVersion::V4 => registry::resolve("PF_INET"),
            IpVersion::V6 => registry::resolve("PF_INET6"),
        }
    }

    /// Length of a raw address for this version, in bytes.
    pub fn address_len(&self) -> usize {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 16,
        }
    }

    /// Level and option name that control header-included mode.
    pub(crate) fn header_include_option(&self) -> (SocketLevel, &'static str) {
        match self {
            IpVersion::V4 => (SocketLevel::Ip, "IP_HDRINCL"),
            IpVersion::V6 => (SocketLevel::Ipv6, "IPV6_HDRINCL"),
        }
    }
}
