use anyhow::Result;

use crate::domain::models::{InterfaceAddress, NetworkInterface};
use crate::utils;

/// Read-only view of the host's network identity. Implementations must not cache.
pub trait InterfaceSource: Send + Sync {
    fn hostname(&self) -> Result<String>;
    fn addresses(&self) -> Result<Vec<InterfaceAddress>>;
    fn interfaces(&self) -> Result<Vec<NetworkInterface>>;
}

/// Queries the live OS interface table on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaceSource;

impl InterfaceSource for SystemInterfaceSource {
    fn hostname(&self) -> Result<String> {
        utils::get_hostname()
    }

    fn addresses(&self) -> Result<Vec<InterfaceAddress>> {
        utils::get_interface_addresses()
    }

    fn interfaces(&self) -> Result<Vec<NetworkInterface>> {
        utils::get_network_interfaces()
    }
}
