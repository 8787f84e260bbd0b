use std::collections::BTreeMap;

use crate::domain::config::ServerConfig;
use crate::domain::models::{InterfaceAddress, MacMode, MacResult, NetworkInterface};
use crate::features::identity::interface_source::InterfaceSource;

/// Derives hostname, IPv4 and MAC addresses from an [`InterfaceSource`].
///
/// Every query is best-effort: source failures are logged at debug level and
/// surface as empty values, never as errors.
pub struct IdentityService<S> {
    source: S,
}

impl<S: InterfaceSource> IdentityService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn resolve_hostname(&self) -> String {
        self.source.hostname().unwrap_or_else(|e| {
            log::debug!("Hostname lookup failed: {}", e);
            String::new()
        })
    }

    /// First non-loopback IPv4 address in OS enumeration order. On multi-homed
    /// hosts the winner depends on that order; no route preference is applied.
    pub fn resolve_ipv4(&self) -> String {
        match self.source.addresses() {
            Ok(addrs) => select_ipv4(&addrs),
            Err(e) => {
                log::debug!("Address enumeration failed: {}", e);
                String::new()
            }
        }
    }

    pub fn resolve_mac(&self, mode: MacMode) -> MacResult {
        let interfaces = match self.source.interfaces() {
            Ok(interfaces) => interfaces,
            Err(e) => {
                log::debug!("Interface enumeration failed: {}", e);
                return MacResult::empty(mode);
            }
        };

        match mode {
            MacMode::SingleBest => MacResult::Single(select_single_mac(&interfaces)),
            MacMode::ListAll => MacResult::List(collect_macs(&interfaces)),
            MacMode::ByNameMap => MacResult::Map(map_macs(&interfaces)),
        }
    }
}

pub fn select_ipv4(addrs: &[InterfaceAddress]) -> String {
    addrs
        .iter()
        .find(|addr| !addr.is_loopback && !addr.ip.is_loopback() && addr.ip.is_ipv4())
        .inspect(|addr| log::debug!("Selected {} on {}", addr.ip, addr.name))
        .map(|addr| addr.ip.to_string())
        .unwrap_or_default()
}

pub fn select_single_mac(interfaces: &[NetworkInterface]) -> String {
    interfaces
        .iter()
        .find(|iface| !iface.mac.is_empty() && is_primary_name(&iface.name))
        .map(|iface| iface.mac.clone())
        .unwrap_or_default()
}

pub fn collect_macs(interfaces: &[NetworkInterface]) -> Vec<String> {
    interfaces
        .iter()
        .filter(|iface| !iface.mac.is_empty())
        .map(|iface| iface.mac.clone())
        .collect()
}

pub fn map_macs(interfaces: &[NetworkInterface]) -> BTreeMap<String, String> {
    interfaces
        .iter()
        .filter(|iface| !iface.mac.is_empty())
        .map(|iface| (iface.name.clone(), iface.mac.clone()))
        .collect()
}

fn is_primary_name(name: &str) -> bool {
    ServerConfig::PRIMARY_IFACE_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use std::net::IpAddr;

    struct FakeSource {
        hostname: Option<&'static str>,
        addresses: Option<Vec<InterfaceAddress>>,
        interfaces: Option<Vec<NetworkInterface>>,
    }

    impl InterfaceSource for FakeSource {
        fn hostname(&self) -> Result<String> {
            self.hostname
                .map(str::to_string)
                .ok_or_else(|| anyhow!("no hostname"))
        }

        fn addresses(&self) -> Result<Vec<InterfaceAddress>> {
            self.addresses.clone().ok_or_else(|| anyhow!("getifaddrs failed"))
        }

        fn interfaces(&self) -> Result<Vec<NetworkInterface>> {
            self.interfaces.clone().ok_or_else(|| anyhow!("getifaddrs failed"))
        }
    }

    fn addr(name: &str, ip: &str) -> InterfaceAddress {
        let ip: IpAddr = ip.parse().unwrap();
        InterfaceAddress {
            name: name.to_string(),
            is_loopback: ip.is_loopback(),
            ip,
        }
    }

    fn iface(name: &str, mac: &str) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            mac: mac.to_string(),
        }
    }

    fn sample_interfaces() -> Vec<NetworkInterface> {
        vec![
            iface("lo0", ""),
            iface("eth0", "aa:bb:cc:dd:ee:ff"),
            iface("wlan0", "11:22:33:44:55:66"),
        ]
    }

    fn healthy() -> IdentityService<FakeSource> {
        IdentityService::new(FakeSource {
            hostname: Some("build-box"),
            addresses: Some(vec![addr("lo", "127.0.0.1"), addr("eth0", "192.168.1.42")]),
            interfaces: Some(sample_interfaces()),
        })
    }

    fn broken() -> IdentityService<FakeSource> {
        IdentityService::new(FakeSource {
            hostname: None,
            addresses: None,
            interfaces: None,
        })
    }

    #[test]
    fn test_ipv4_skips_loopback() {
        assert_eq!(healthy().resolve_ipv4(), "192.168.1.42");
    }

    #[test]
    fn test_ipv4_first_in_enumeration_order() {
        let addrs = vec![
            addr("eth1", "10.0.0.7"),
            addr("lo", "127.0.0.1"),
            addr("eth0", "192.168.1.42"),
        ];
        assert_eq!(select_ipv4(&addrs), "10.0.0.7");
    }

    #[test]
    fn test_ipv4_ipv6_only_is_empty() {
        let addrs = vec![addr("lo", "::1"), addr("eth0", "fe80::1"), addr("eth0", "2001:db8::5")];
        assert_eq!(select_ipv4(&addrs), "");
    }

    #[test]
    fn test_ipv4_loopback_only_is_empty() {
        assert_eq!(select_ipv4(&[addr("lo", "127.0.0.1")]), "");
        assert_eq!(select_ipv4(&[]), "");
    }

    #[test]
    fn test_single_best_mac() {
        assert_eq!(
            healthy().resolve_mac(MacMode::SingleBest),
            MacResult::Single("aa:bb:cc:dd:ee:ff".to_string())
        );
    }

    #[test]
    fn test_single_best_accepts_en_prefix() {
        let interfaces = vec![
            iface("wlan0", "11:22:33:44:55:66"),
            iface("en0", ""),
            iface("enp3s0", "de:ad:be:ef:00:01"),
        ];
        assert_eq!(select_single_mac(&interfaces), "de:ad:be:ef:00:01");
    }

    #[test]
    fn test_single_best_no_match_is_empty() {
        let interfaces = vec![iface("lo", ""), iface("wlan0", "11:22:33:44:55:66")];
        assert_eq!(select_single_mac(&interfaces), "");
    }

    #[test]
    fn test_list_all_macs() {
        assert_eq!(
            healthy().resolve_mac(MacMode::ListAll),
            MacResult::List(vec![
                "aa:bb:cc:dd:ee:ff".to_string(),
                "11:22:33:44:55:66".to_string(),
            ])
        );
    }

    #[test]
    fn test_list_all_keeps_duplicates() {
        let interfaces = vec![
            iface("bond0", "aa:bb:cc:dd:ee:ff"),
            iface("eth0", "aa:bb:cc:dd:ee:ff"),
        ];
        assert_eq!(collect_macs(&interfaces).len(), 2);
    }

    #[test]
    fn test_by_name_map() {
        let MacResult::Map(map) = healthy().resolve_mac(MacMode::ByNameMap) else {
            panic!("Expected map");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map["eth0"], "aa:bb:cc:dd:ee:ff");
        assert_eq!(map["wlan0"], "11:22:33:44:55:66");
        assert!(!map.contains_key("lo0"));
    }

    #[test]
    fn test_hostname() {
        assert_eq!(healthy().resolve_hostname(), "build-box");
    }

    #[test]
    fn test_enumeration_failure_degrades_to_empty() {
        let service = broken();
        assert_eq!(service.resolve_hostname(), "");
        assert_eq!(service.resolve_ipv4(), "");
        assert_eq!(service.resolve_mac(MacMode::SingleBest), MacResult::Single(String::new()));
        assert_eq!(service.resolve_mac(MacMode::ListAll), MacResult::List(vec![]));
        assert_eq!(service.resolve_mac(MacMode::ByNameMap), MacResult::Map(BTreeMap::new()));
    }
}
