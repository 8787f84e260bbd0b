use anyhow::{anyhow, Result};
use if_addrs::get_if_addrs;
use pnet_datalink::{self as datalink, MacAddr};

use crate::domain::models::{InterfaceAddress, NetworkInterface};

pub fn get_interface_addresses() -> Result<Vec<InterfaceAddress>> {
    Ok(get_if_addrs()?
        .into_iter()
        .map(|iface| InterfaceAddress {
            ip: iface.ip(),
            is_loopback: iface.is_loopback(),
            name: iface.name,
        })
        .collect())
}

pub fn get_network_interfaces() -> Result<Vec<NetworkInterface>> {
    Ok(datalink::interfaces()
        .into_iter()
        .map(|iface| NetworkInterface {
            mac: format_mac(iface.mac),
            name: iface.name,
        })
        .collect())
}

pub fn get_hostname() -> Result<String> {
    hostname::get()?
        .into_string()
        .map_err(|raw| anyhow!("hostname is not valid UTF-8: {:?}", raw))
}

/// Lowercase colon-separated hex. Missing and all-zero addresses become empty.
pub fn format_mac(mac: Option<MacAddr>) -> String {
    match mac {
        Some(mac) if mac != MacAddr::zero() => mac.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mac() {
        let mac = MacAddr::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff);
        assert_eq!(format_mac(Some(mac)), "aa:bb:cc:dd:ee:ff");
        assert_eq!(format_mac(Some(MacAddr::new(0, 0x1b, 0x2c, 0, 0, 1))), "00:1b:2c:00:00:01");
    }

    #[test]
    fn test_format_mac_empty() {
        assert_eq!(format_mac(None), "");
        assert_eq!(format_mac(Some(MacAddr::zero())), "");
    }

    #[test]
    fn test_live_hostname_and_addresses() {
        assert!(get_hostname().is_ok());
        assert!(get_interface_addresses().is_ok());
    }

    #[test]
    fn test_live_interfaces_have_formatted_macs() {
        for iface in get_network_interfaces().unwrap() {
            assert!(!iface.name.is_empty());
            if !iface.mac.is_empty() {
                assert_eq!(iface.mac.len(), 17, "{}: {}", iface.name, iface.mac);
                assert_eq!(iface.mac, iface.mac.to_lowercase());
            }
        }
    }
}
