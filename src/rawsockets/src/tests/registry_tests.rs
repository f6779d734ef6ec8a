#[cfg(test)]
pub mod registry_tests {
    use crate::errors::SockError;
    use crate::levels::{IpVersion, SocketLevel};
    use crate::registry::*;

    #[test]
    pub fn ut_resolve_is_stable() {
        let first = resolve("SO_RCVBUF").unwrap();
        let second = resolve("SO_RCVBUF").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    pub fn ut_repeated_lookups_do_not_rebuild() {
        for _ in 0..4 {
            resolve("AF_INET").unwrap();
        }
        assert_eq!(population_count(), 1);
    }

    #[test]
    pub fn ut_unknown_constant() {
        let err = resolve("NOT_A_REAL_CONSTANT").unwrap_err();
        assert_eq!(
            err,
            SockError::UnknownConstant {
                name: "NOT_A_REAL_CONSTANT".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "The specified constant, NOT_A_REAL_CONSTANT, is not natively defined."
        );
        assert_eq!(err.code(), None);
        assert!(!is_defined("NOT_A_REAL_CONSTANT"));
    }

    #[test]
    pub fn ut_lookup_is_case_sensitive() {
        assert!(is_defined("AF_INET"));
        assert!(!is_defined("af_inet"));
    }

    #[test]
    pub fn ut_level_aliases_match_protocol_numbers() {
        assert_eq!(resolve("SOL_IP").unwrap(), resolve("IPPROTO_IP").unwrap());
        assert_eq!(resolve("SOL_IPV6").unwrap(), resolve("IPPROTO_IPV6").unwrap());
        assert_eq!(resolve("SOL_TCP").unwrap(), resolve("IPPROTO_TCP").unwrap());
        assert_eq!(resolve("SOL_UDP").unwrap(), resolve("IPPROTO_UDP").unwrap());
        assert_eq!(resolve("SOL_IPV4").unwrap(), resolve("IPPROTO_IPV4").unwrap());
    }

    #[test]
    pub fn ut_fallback_constants_always_defined() {
        for name in [
            "IPPROTO_IPV4",
            "IPPROTO_IPIP",
            "IPV6_HDRINCL",
            "IPV6_MAXHLIM",
            "IPV6_VERSION",
        ] {
            assert!(is_defined(name), "{} should resolve", name);
        }
        // IPPROTO_IPV4 and IPPROTO_IPIP both name IP-in-IP encapsulation
        assert_eq!(resolve("IPPROTO_IPV4").unwrap(), 4);
        assert_eq!(resolve("IPPROTO_IPIP").unwrap(), 4);
        assert_eq!(resolve("IPV6_MAXHLIM").unwrap(), 255);
        assert_eq!(resolve("IPV6_VERSION").unwrap(), 0x60);
    }

    #[test]
    pub fn ut_well_known_values() {
        assert_eq!(resolve("IPPROTO_IP").unwrap(), 0);
        assert_eq!(resolve("IPPROTO_ICMP").unwrap(), 1);
        assert_eq!(resolve("IPPROTO_TCP").unwrap(), 6);
        assert_eq!(resolve("IPPROTO_UDP").unwrap(), 17);
        assert_eq!(resolve("IPPROTO_IPV6").unwrap(), 41);
        assert_eq!(resolve("PF_INET").unwrap(), resolve("AF_INET").unwrap());
        assert_eq!(resolve("PF_INET6").unwrap(), resolve("AF_INET6").unwrap());
    }

    #[cfg(all(
        target_os = "linux",
        any(target_arch = "x86_64", target_arch = "aarch64")
    ))]
    #[test]
    pub fn ut_linux_values() {
        assert_eq!(resolve("AF_INET6").unwrap(), 10);
        assert_eq!(resolve("SOL_SOCKET").unwrap(), 1);
        assert_eq!(resolve("SO_RCVTIMEO").unwrap(), 20);
        assert_eq!(resolve("IP_HDRINCL").unwrap(), 3);
        assert_eq!(resolve("IPV6_HDRINCL").unwrap(), 36);
        assert_eq!(resolve("IPV6_HOPLIMIT").unwrap(), 52);
        assert_eq!(resolve("IP_RECVRETOPTS").unwrap(), 7);
    }

    #[test]
    pub fn ut_entries_sorted_and_complete() {
        let all = entries();
        assert!(all.windows(2).all(|pair| pair[0].name < pair[1].name));
        let rcvbuf = all.iter().find(|entry| entry.name == "SO_RCVBUF").unwrap();
        assert_eq!(rcvbuf.value, resolve("SO_RCVBUF").unwrap());
    }

    #[test]
    pub fn ut_levels_resolve() {
        for level in [
            SocketLevel::Socket,
            SocketLevel::Ip,
            SocketLevel::Ipv6,
            SocketLevel::Tcp,
            SocketLevel::Udp,
            SocketLevel::Icmp,
        ] {
            assert!(level.os_constant().is_ok(), "{:?}", level);
        }
        assert_eq!(SocketLevel::Icmp.os_constant().unwrap(), 1);
        assert!(!SocketLevel::Ip.supports_ipv6());
        assert!(SocketLevel::Ipv6.supports_ipv6());
        assert!(SocketLevel::Tcp.supports_ipv6());
    }

    #[test]
    pub fn ut_ip_versions() {
        assert_eq!(
            IpVersion::V4.address_family().unwrap(),
            resolve("AF_INET").unwrap()
        );
        assert_eq!(
            IpVersion::V6.protocol_family().unwrap(),
            resolve("PF_INET6").unwrap()
        );
        assert_eq!(IpVersion::V4.address_len(), 4);
        assert_eq!(IpVersion::V6.address_len(), 16);
    }
}
